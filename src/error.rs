//! Failures raised while loading, converting or rendering a schema.
//!
//! Every variant is fatal to the current pass; nothing here is recovered
//! internally.
use thiserror::Error;

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// Construction was attempted without a schema or root interface name.
    #[error("Missing required properties from options: {{ swagger, rootInterface }}")]
    MissingOptions,

    /// A node slot is present but holds no definition (JSON `null`).
    #[error("malformed schema node for field `{field}`{}", within_suffix(.within))]
    MalformedNode {
        field: String,
        within: Option<String>,
    },

    /// The node shape matches none of the known classifications.
    #[error("Could not map Swagger definition to GraphQL type: {field}{}", within_suffix(.within))]
    Unmappable {
        field: String,
        within: Option<String>,
    },

    #[error("field `{field}` references `{reference}`, which is not a top-level definition")]
    UnresolvedReference {
        field: String,
        reference: String,
    },

    /// Scalar-alias references that resolve back onto themselves.
    #[error("cyclic reference: {}", .chain.join(" -> "))]
    CyclicReference {
        chain: Vec<String>,
    },

    /// Two distinct nesting paths flatten onto the same type name.
    #[error("type name `{name}` produced by both `{first}` and `{second}`")]
    DuplicateType {
        name: String,
        first: String,
        second: String,
    },

    #[error("invalid definition filter: {0}")]
    InvalidFilter(#[from] fancy_regex::Error),

    #[error("failed to parse schema document at {path}: {message}")]
    Parse {
        path: String,
        message: String,
    },
}

fn within_suffix(within: &Option<String>) -> String {
    match within {
        Some(parent) => format!(" (in {parent})"),
        None => String::new(),
    }
}
