//! Error taxonomy for a generator run
//!
//! Every failure aborts the run; there are no retries and no partial
//! cleanup. The binary surfaces the error through the error-styled log
//! template and exits non-zero.

use std::io;
use std::path::PathBuf;

/// Failures a generator run can surface.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The prompt stream closed or an answer could not be read.
    #[error("prompt failed: {0}")]
    Prompt(#[source] io::Error),

    /// Template parsing or rendering failed.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// A template name with no bundled content and no directory override.
    #[error("no bundled template named '{0}'")]
    MissingTemplate(String),

    /// A filesystem operation failed.
    #[error("failed to {action} {}: {source}", .path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        source: io::Error,
    },

    /// The config store could not be serialized or parsed.
    #[error("config store error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// The writing phase ran before the prompting phase resolved a name.
    #[error("project name was not resolved before writing")]
    UnresolvedProject,
}

impl Error {
    /// Filesystem failure with the path that triggered it.
    pub(crate) fn fs(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }
}
