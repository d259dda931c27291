// Flattened GraphQL-side IR. No serde_json::Value here.
use std::fmt;

use indexmap::IndexMap;

use crate::error::{ConvertError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    String,
    Int,
    Float,
    Boolean,
}

impl Scalar {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "string" => Some(Self::String),
            "integer" => Some(Self::Int),
            "number" => Some(Self::Float),
            "boolean" => Some(Self::Boolean),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Boolean => "Boolean",
        }
    }
}

/// Nesting path of a flattened type, joined with `_` only for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    segments: Vec<String>,
}

impl QualifiedName {
    pub fn root(name: impl Into<String>) -> Self {
        Self { segments: vec![name.into()] }
    }

    /// `parent` is `None` for top-level definitions.
    pub fn nested(parent: Option<&QualifiedName>, name: &str) -> Self {
        match parent {
            Some(parent) => parent.child(name),
            None => Self::root(name),
        }
    }

    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Self { segments }
    }

    pub fn local_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    pub fn joined(&self) -> String {
        self.segments.join("_")
    }

    fn path(&self) -> String {
        self.segments.join(" > ")
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeLabel {
    Scalar(Scalar),
    Named(String),
    List(Box<TypeLabel>),
}

impl TypeLabel {
    pub fn list(inner: TypeLabel) -> Self {
        Self::List(Box::new(inner))
    }
}

impl fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => f.write_str(scalar.as_str()),
            Self::Named(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{inner}]"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRef {
    pub type_label: TypeLabel,
    pub description: Option<String>,
    pub required: bool,
}

impl FieldRef {
    /// Filler for composites whose properties produced nothing.
    pub fn placeholder() -> Self {
        Self { type_label: TypeLabel::Scalar(Scalar::String), description: None, required: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Enum,
    Type,
    Interface,
}

impl TypeKind {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::Type => "type",
            Self::Interface => "interface",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeBody {
    Enum { values: Vec<String> },
    /// `interface` is set only for the configured root interface.
    Composite { interface: bool, fields: IndexMap<String, FieldRef> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEntry {
    pub qualified_name: QualifiedName,
    pub description: Option<String>,
    /// Whether a field referencing this entry must be non-null.
    pub required: bool,
    pub body: TypeBody,
}

impl TypeEntry {
    pub fn local_name(&self) -> &str {
        self.qualified_name.local_name()
    }

    pub fn kind(&self) -> TypeKind {
        match &self.body {
            TypeBody::Enum { .. } => TypeKind::Enum,
            TypeBody::Composite { interface: true, .. } => TypeKind::Interface,
            TypeBody::Composite { interface: false, .. } => TypeKind::Type,
        }
    }

    pub fn fields(&self) -> Option<&IndexMap<String, FieldRef>> {
        match &self.body {
            TypeBody::Composite { fields, .. } => Some(fields),
            TypeBody::Enum { .. } => None,
        }
    }

    pub fn values(&self) -> Option<&[String]> {
        match &self.body {
            TypeBody::Enum { values } => Some(values),
            TypeBody::Composite { .. } => None,
        }
    }
}

/// Flattened types of one pass, keyed by joined qualified name in
/// registration order.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    entries: IndexMap<String, TypeEntry>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuses a second entry under an already-registered joined name.
    pub fn register(&mut self, entry: TypeEntry) -> Result<()> {
        let key = entry.qualified_name.joined();
        if let Some(existing) = self.entries.get(&key) {
            return Err(ConvertError::DuplicateType {
                name: key,
                first: existing.qualified_name.path(),
                second: entry.qualified_name.path(),
            });
        }
        self.entries.insert(key, entry);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&TypeEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }
}
