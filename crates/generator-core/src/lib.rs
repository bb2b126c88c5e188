//! Generator Core - pipeline for the angular-template project generator
//!
//! This library implements the generator as an explicit sequence of named
//! phases instead of a framework-driven lifecycle. A [`Pipeline`] owns the
//! run state, walks [`pipeline::Phase::ORDER`] front to back, and aborts on
//! the first failing phase.
//!
//! # Architecture
//!
//! - **Pipeline** - the phase driver and the prompting decision tree
//! - **Templates** - minijinja rendering from an embedded template or a
//!   directory override
//! - **Config** - the per-project key/value store flushed during the
//!   writing phase
//! - **Style** - severity-styled log line templates
//!
//! # Feature Flags
//!
//! - `tui` (default): enables the cliclack-backed [`tui::InteractivePrompts`]
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use generator_core::{Options, Pipeline, PromptSource};
//!
//! // Bring your own PromptSource implementation
//! let pipeline = Pipeline::new(Options::default(), my_prompts)?;
//! let state = pipeline.run().await?;
//! println!("generated {}", state.destination_root.display());
//! ```

pub mod config;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod prompt;
pub mod style;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::ConfigStore;
pub use error::Error;
pub use options::Options;
pub use pipeline::{Phase, Pipeline, RunState};
pub use prompt::PromptSource;
pub use templates::{TemplateRenderer, TemplateSource};

#[cfg(feature = "tui")]
pub use tui::InteractivePrompts;

/// Default answer to the project name prompt
pub const DEFAULT_PROJECT_NAME: &str = "angular-template";
