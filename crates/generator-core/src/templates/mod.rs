//! Template loading and rendering
//!
//! Templates ship embedded in the binary; setting the directory override
//! environment variable loads them from disk instead, so templates can be
//! edited without recompiling.

mod renderer;

use std::path::PathBuf;

use crate::error::Error;

pub use renderer::{TemplateContext, TemplateRenderer};

/// Name of the rendered project manifest template
pub const PACKAGE_JSON: &str = "package.json";

/// Environment variable pointing at a template directory override
pub const TEMPLATE_DIR_ENV: &str = "NG_CREATE_TEMPLATE_DIR";

const EMBEDDED_PACKAGE_JSON: &str = include_str!("../../templates/package.json");

/// Where template content comes from - embedded in the binary or a
/// directory on disk.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    Embedded,
    Dir(PathBuf),
}

impl TemplateSource {
    /// Resolve the source from the environment, falling back to the
    /// embedded templates.
    pub fn from_env() -> Self {
        match std::env::var(TEMPLATE_DIR_ENV) {
            Ok(dir) if !dir.is_empty() => TemplateSource::Dir(PathBuf::from(dir)),
            _ => TemplateSource::Embedded,
        }
    }

    /// Human-readable source root, used by the debug trace in the
    /// `default` phase.
    pub fn describe(&self) -> String {
        match self {
            TemplateSource::Embedded => "<embedded templates>".to_string(),
            TemplateSource::Dir(root) => root.display().to_string(),
        }
    }

    /// Load the raw text of a named template.
    pub(crate) fn load(&self, name: &str) -> Result<String, Error> {
        match self {
            TemplateSource::Embedded => match name {
                PACKAGE_JSON => Ok(EMBEDDED_PACKAGE_JSON.to_string()),
                other => Err(Error::MissingTemplate(other.to_string())),
            },
            TemplateSource::Dir(root) => {
                let path = root.join(name);
                std::fs::read_to_string(&path).map_err(|e| Error::fs("read template", path, e))
            }
        }
    }
}
