//! One full conversion pass: select definitions, convert, render, append
//! the template.
use fancy_regex::Regex;
use tracing::info;

use crate::convert::Converter;
use crate::error::{ConvertError, Result};
use crate::ir::TypeRegistry;
use crate::render::Renderer;
use crate::schema::SchemaDocument;

/// Construction inputs.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub schema: Option<SchemaDocument>,
    pub root_interface: Option<String>,
    /// Appended verbatim after the rendered types.
    pub template: Option<String>,
}

/// Which top-level definitions seed a pass. Both patterns are unanchored
/// searches against the bare definition name and may use look-around;
/// empty patterns are ignored.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub filter: Option<String>,
    pub exclude: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SwaggerToGraphql {
    schema: SchemaDocument,
    root_interface: String,
    template: Option<String>,
}

impl SwaggerToGraphql {
    pub fn new(options: Options) -> Result<Self> {
        let Options { schema, root_interface, template } = options;
        match (schema, root_interface) {
            (Some(schema), Some(root_interface)) if !root_interface.is_empty() => {
                Ok(Self { schema, root_interface, template })
            }
            _ => Err(ConvertError::MissingOptions),
        }
    }

    pub fn converter(&self) -> Converter<'_> {
        Converter::new(&self.schema, &self.root_interface)
    }

    /// Render every definition whose name matches `filter` (all of them when
    /// `filter` is `None` or empty).
    pub fn render_all(&self, filter: Option<&str>) -> Result<String> {
        let selection = Selection { filter: filter.map(str::to_string), exclude: None };
        self.render_all_with(&selection)
    }

    pub fn render_all_with(&self, selection: &Selection) -> Result<String> {
        let registry = self.build_registry(selection)?;
        let mut renderer = Renderer::new();
        renderer.emit_registry(&registry);
        let types = renderer.into_string();

        match &self.template {
            Some(template) => Ok(format!("{types}\n{template}")),
            None => Ok(types),
        }
    }

    /// Converts the selected definitions into a fresh registry.
    pub fn build_registry(&self, selection: &Selection) -> Result<TypeRegistry> {
        let filter = compile(selection.filter.as_deref())?;
        let exclude = compile(selection.exclude.as_deref())?;
        let converter = self.converter();
        let mut registry = TypeRegistry::new();
        let mut selected = 0usize;

        for (name, slot) in &self.schema.definitions {
            if let Some(rx) = &filter {
                if !rx.is_match(name)? {
                    continue;
                }
            }
            if let Some(rx) = &exclude {
                if rx.is_match(name)? {
                    continue;
                }
            }
            selected += 1;
            converter.convert(name, slot.as_ref(), None, &[], &mut registry)?;
        }

        info!(selected, registered = registry.len(), "converted definitions");
        Ok(registry)
    }
}

fn compile(pattern: Option<&str>) -> Result<Option<Regex>> {
    match pattern.filter(|p| !p.is_empty()) {
        Some(pattern) => Ok(Some(Regex::new(pattern)?)),
        None => Ok(None),
    }
}
