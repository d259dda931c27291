//! Read-only model of the source Swagger document.
//!
//! Nodes are deserialized as-is; [`SchemaNode::shape`] classifies a node once
//! so the converter can match on a single tagged value.
use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::Result;
use crate::ir::Scalar;

/// A `null` slot deserializes to `None` and is reported as malformed when
/// the converter reaches it.
pub type Definitions = IndexMap<String, Option<SchemaNode>>;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawDocument")]
pub struct SchemaDocument {
    pub definitions: Definitions,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SchemaNode {
    #[serde(rename = "type", default)]
    pub type_: Option<String>,
    #[serde(default)]
    pub properties: Option<Definitions>,
    #[serde(default)]
    pub items: Option<Box<SchemaNode>>,
    #[serde(rename = "$ref", default)]
    pub reference: Option<String>,
    #[serde(rename = "enum", default)]
    pub enum_values: Option<Vec<String>>,
    /// `None` when the key is absent; an explicit empty list is kept.
    #[serde(default)]
    pub required: Option<Vec<String>>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Node classification, first match wins in declaration order.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    Enum(&'a [String]),
    Scalar(Scalar),
    /// `list` is set when the reference sits under `items`.
    Reference { target: &'a str, list: bool },
    /// Object with properties, or array whose items carry the properties.
    Composite { properties: &'a Definitions, required: &'a [String] },
    InlineArray(&'a SchemaNode),
    Unmapped,
}

// ————————————————————————————————————————————————————————————————————————————
// LOADING
// ————————————————————————————————————————————————————————————————————————————

/// Swagger 2 keeps definitions at the root; OpenAPI 3 nests them under
/// `components.schemas`.
#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    definitions: Option<Definitions>,
    #[serde(default)]
    components: Option<RawComponents>,
}

#[derive(Deserialize)]
struct RawComponents {
    #[serde(default)]
    schemas: Definitions,
}

impl From<RawDocument> for SchemaDocument {
    fn from(raw: RawDocument) -> Self {
        let definitions = match (raw.definitions, raw.components) {
            (Some(definitions), _) => definitions,
            (None, Some(components)) => components.schemas,
            (None, None) => Definitions::new(),
        };
        Self { definitions }
    }
}

pub fn load_document(src: &str) -> Result<SchemaDocument> {
    crate::path_de::from_str_with_path(src)
}

pub fn load_document_slice(bytes: &[u8]) -> Result<SchemaDocument> {
    crate::path_de::from_slice_with_path(bytes)
}

// ————————————————————————————————————————————————————————————————————————————
// LOOKUP
// ————————————————————————————————————————————————————————————————————————————

impl SchemaDocument {
    pub fn new(definitions: Definitions) -> Self {
        Self { definitions }
    }

    /// Top-level definition by bare name. `None` for unknown or `null` slots.
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.definitions.get(name).and_then(Option::as_ref)
    }
}

/// `#/definitions/Foo` → `Foo`.
pub fn reference_target(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

// ————————————————————————————————————————————————————————————————————————————
// CLASSIFICATION
// ————————————————————————————————————————————————————————————————————————————

impl SchemaNode {
    fn is_type(&self, keyword: &str) -> bool {
        self.type_.as_deref() == Some(keyword)
    }

    pub fn shape(&self) -> Shape<'_> {
        if let Some(values) = &self.enum_values {
            return Shape::Enum(values);
        }
        if let Some(scalar) = self.type_.as_deref().and_then(Scalar::from_keyword) {
            return Shape::Scalar(scalar);
        }
        if let Some(reference) = &self.reference {
            return Shape::Reference { target: reference_target(reference), list: false };
        }
        if let Some(reference) = self.items.as_ref().and_then(|items| items.reference.as_ref()) {
            return Shape::Reference { target: reference_target(reference), list: true };
        }
        if self.is_type("object") {
            if let Some(properties) = &self.properties {
                let required = self.required.as_deref().unwrap_or_default();
                return Shape::Composite { properties, required };
            }
        }
        if self.is_type("array") {
            if let Some(items) = &self.items {
                if let Some(properties) = &items.properties {
                    let required = self.required.as_deref().or(items.required.as_deref()).unwrap_or_default();
                    return Shape::Composite { properties, required };
                }
                if !items.is_type("object") {
                    return Shape::InlineArray(items);
                }
            }
        }
        Shape::Unmapped
    }

    /// A reference target that is inlined rather than named: anything that
    /// is not an object, not an array and not an enum.
    pub fn is_alias(&self) -> bool {
        !self.is_type("object") && !self.is_type("array") && self.enum_values.is_none()
    }
}
