//! Swagger `definitions` → GraphQL SDL.
//!
//! ```
//! use swagger_gql::{Options, SwaggerToGraphql, schema};
//!
//! let schema = schema::load_document(r#"{
//!     "definitions": {
//!         "Foo": { "type": "object", "properties": { "Id": { "type": "string" } }, "required": ["Id"] }
//!     }
//! }"#).unwrap();
//! let engine = SwaggerToGraphql::new(Options {
//!     schema: Some(schema),
//!     root_interface: Some("OBAccount3".into()),
//!     template: None,
//! }).unwrap();
//! assert_eq!(engine.render_all(None).unwrap(), "type Foo {\n  Id: String!\n}");
//! ```
pub mod cli;
pub mod convert;
pub mod engine;
pub mod error;
pub mod ir;
pub mod path_de;
pub mod render;
pub mod schema;

pub use convert::{Converter, Fragment};
pub use engine::{Options, Selection, SwaggerToGraphql};
pub use error::{ConvertError, Result};
pub use ir::{FieldRef, QualifiedName, Scalar, TypeBody, TypeEntry, TypeKind, TypeLabel, TypeRegistry};
