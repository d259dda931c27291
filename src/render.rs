//! GraphQL SDL emission for registry entries.
use crate::ir::{FieldRef, TypeBody, TypeEntry, TypeRegistry};

/// Collects rendered blocks; `into_string` joins them with newlines.
#[derive(Debug, Default)]
pub struct Renderer {
    blocks: Vec<String>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, name: &str, entry: &TypeEntry) {
        self.blocks.push(render(name, entry));
    }

    /// Emits every entry in registration order.
    pub fn emit_registry(&mut self, registry: &TypeRegistry) {
        for (name, entry) in registry.iter() {
            self.emit(name, entry);
        }
    }

    pub fn into_string(self) -> String {
        self.blocks.join("\n")
    }
}

/// Render one entry as a complete SDL block, without a trailing newline.
pub fn render(name: &str, entry: &TypeEntry) -> String {
    let mut out = String::new();
    if let Some(description) = entry.description.as_deref().filter(|d| !d.is_empty()) {
        out.push_str(&format!("\"\"\"\n{description}\n\"\"\"\n"));
    }
    out.push_str(&format!("{} {name} {{\n", entry.kind().keyword()));

    let lines: Vec<String> = match &entry.body {
        TypeBody::Composite { fields, .. } => {
            fields.iter().map(|(field, field_ref)| render_field(field, field_ref)).collect()
        }
        TypeBody::Enum { values } => {
            let mut values = values.clone();
            values.sort();
            values.iter().map(|value| format!("  {value}")).collect()
        }
    };
    out.push_str(&lines.join("\n"));
    out.push_str("\n}");
    out
}

fn render_field(name: &str, field: &FieldRef) -> String {
    let mut out = String::new();
    if let Some(description) = field.description.as_deref().filter(|d| !d.is_empty()) {
        let description = description.replace('"', "");
        if description.contains('\n') {
            let indented = description.split('\n').collect::<Vec<_>>().join("\n  ");
            out.push_str(&format!("  \"\"\"\n  {indented}\n  \"\"\"\n"));
        } else {
            out.push_str(&format!("  \"{description}\"\n"));
        }
    }
    let bang = if field.required { "!" } else { "" };
    out.push_str(&format!("  {name}: {}{bang}", field.type_label));
    out
}
