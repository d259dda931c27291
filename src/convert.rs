//! Recursive descent from Swagger nodes to flattened GraphQL types.
//!
//! Every node is classified once (see [`Shape`]). Scalars come back inline;
//! enums and composites are registered under their qualified name and come
//! back as a named reference. The registry is passed in explicitly so a
//! conversion has no state beyond its arguments.
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace};

use crate::error::{ConvertError, Result};
use crate::ir::{FieldRef, QualifiedName, TypeBody, TypeEntry, TypeLabel, TypeRegistry};
use crate::schema::{SchemaDocument, SchemaNode, Shape};

/// What a parent embeds for one converted property.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// Declared field name.
    pub name: String,
    pub field: FieldRef,
    /// Entry registered for this node itself, if any.
    pub registered: Option<QualifiedName>,
}

pub struct Converter<'a> {
    document: &'a SchemaDocument,
    root_interface: &'a str,
}

/// Mutable state of one top-level conversion.
struct Walk<'r> {
    registry: &'r mut TypeRegistry,
    /// Scalar-alias references currently being inlined, outermost first.
    resolving: IndexSet<String>,
}

impl<'a> Converter<'a> {
    pub fn new(document: &'a SchemaDocument, root_interface: &'a str) -> Self {
        Self { document, root_interface }
    }

    /// Convert `node` declared as `name` under `parent`. `required` is the
    /// required-name set of the enclosing object.
    pub fn convert(
        &self,
        name: &str,
        node: Option<&SchemaNode>,
        parent: Option<&QualifiedName>,
        required: &[String],
        registry: &mut TypeRegistry,
    ) -> Result<Fragment> {
        let mut walk = Walk { registry, resolving: IndexSet::new() };
        self.visit(&mut walk, name, node, parent, required)
    }

    fn visit(
        &self,
        walk: &mut Walk<'_>,
        name: &str,
        node: Option<&SchemaNode>,
        parent: Option<&QualifiedName>,
        required: &[String],
    ) -> Result<Fragment> {
        let Some(node) = node else {
            return Err(ConvertError::MalformedNode {
                field: name.to_string(),
                within: parent.map(QualifiedName::joined),
            });
        };
        let qualified = QualifiedName::nested(parent, name);
        let is_required = required.iter().any(|r| r == name);
        let description = node.description.clone();
        trace!(field = name, qualified = %qualified, "classifying node");

        match node.shape() {
            Shape::Enum(values) => {
                let values = values.iter().map(|v| sanitize_identifier(v)).collect();
                let field = FieldRef {
                    type_label: TypeLabel::Named(qualified.joined()),
                    description: description.clone(),
                    required: is_required,
                };
                register(walk, TypeEntry {
                    qualified_name: qualified.clone(),
                    description,
                    required: is_required,
                    body: TypeBody::Enum { values },
                })?;
                Ok(named(name, field, qualified))
            }
            Shape::Scalar(scalar) => Ok(Fragment {
                name: name.to_string(),
                field: FieldRef { type_label: TypeLabel::Scalar(scalar), description, required: is_required },
                registered: None,
            }),
            Shape::Reference { target, list } => {
                self.reference(walk, name, node, target, list, is_required)
            }
            Shape::Composite { properties, required: inner_required } => {
                let mut fields = IndexMap::new();
                for (property, slot) in properties {
                    let child = self.visit(walk, property, slot.as_ref(), Some(&qualified), inner_required)?;
                    fields.insert(child.name, child.field);
                }
                if fields.is_empty() {
                    fields.insert("_".to_string(), FieldRef::placeholder());
                }
                let field = FieldRef {
                    type_label: TypeLabel::Named(qualified.joined()),
                    description: description.clone(),
                    required: is_required,
                };
                let interface = qualified.joined() == self.root_interface;
                register(walk, TypeEntry {
                    qualified_name: qualified.clone(),
                    description,
                    required: is_required,
                    body: TypeBody::Composite { interface, fields },
                })?;
                Ok(named(name, field, qualified))
            }
            // Only the outer description survives; the list itself is never non-null.
            Shape::InlineArray(items) => {
                let item = self.visit(walk, name, Some(items), Some(&qualified), &[])?;
                Ok(Fragment {
                    name: name.to_string(),
                    field: FieldRef {
                        type_label: TypeLabel::list(item.field.type_label),
                        description,
                        required: false,
                    },
                    registered: None,
                })
            }
            Shape::Unmapped => Err(ConvertError::Unmappable {
                field: name.to_string(),
                within: parent.map(QualifiedName::joined),
            }),
        }
    }

    fn reference(
        &self,
        walk: &mut Walk<'_>,
        name: &str,
        node: &SchemaNode,
        target: &str,
        list: bool,
        is_required: bool,
    ) -> Result<Fragment> {
        let Some(resolved) = self.document.get(target) else {
            return Err(ConvertError::UnresolvedReference {
                field: name.to_string(),
                reference: target.to_string(),
            });
        };
        if resolved.is_alias() {
            if !walk.resolving.insert(target.to_string()) {
                let mut chain: Vec<String> = walk.resolving.iter().cloned().collect();
                chain.push(target.to_string());
                return Err(ConvertError::CyclicReference { chain });
            }
            // The alias is inlined as-is, without list brackets or the field's own description.
            let inherited = if is_required { vec![name.to_string()] } else { Vec::new() };
            let inlined = self.visit(walk, name, Some(resolved), None, &inherited);
            walk.resolving.pop();
            return inlined;
        }

        let own_description = non_empty(&node.description);
        let named_label = TypeLabel::Named(target.to_string());
        Ok(Fragment {
            name: name.to_string(),
            field: FieldRef {
                type_label: if list { TypeLabel::list(named_label) } else { named_label },
                description: own_description.or_else(|| non_empty(&resolved.description)).map(str::to_string),
                required: is_required,
            },
            registered: None,
        })
    }
}

fn register(walk: &mut Walk<'_>, entry: TypeEntry) -> Result<()> {
    debug!(name = %entry.qualified_name, kind = entry.kind().keyword(), "registering type");
    walk.registry.register(entry)
}

fn named(name: &str, field: FieldRef, qualified: QualifiedName) -> Fragment {
    Fragment { name: name.to_string(), field, registered: Some(qualified) }
}

fn non_empty(description: &Option<String>) -> Option<&str> {
    description.as_deref().filter(|d| !d.is_empty())
}

/// Enum values become GraphQL identifiers: whitespace and `-` are dropped.
fn sanitize_identifier(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace() && *c != '-').collect()
}
