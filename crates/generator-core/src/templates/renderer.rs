//! Rendering templates with the project substitution map

use minijinja::Environment;
use serde::Serialize;

use super::TemplateSource;
use crate::error::Error;

/// Substitution values available to every template.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext {
    /// Resolved project name
    pub project: String,
}

/// Template engine wrapper around minijinja.
///
/// Rendering is deterministic: the same template and context always produce
/// byte-identical output.
pub struct TemplateRenderer {
    source: TemplateSource,
}

impl TemplateRenderer {
    pub fn new(source: TemplateSource) -> Self {
        Self { source }
    }

    /// The source templates are loaded from.
    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    /// Render a named template with the given context.
    pub fn render(&self, name: &str, ctx: &TemplateContext) -> Result<String, Error> {
        let raw = self.source.load(name)?;

        let mut env = Environment::new();
        env.add_template(name, &raw)?;

        let template = env.get_template(name)?;
        Ok(template.render(ctx)?)
    }
}
