//! Run options supplied on the command line

/// Immutable configuration for one generator run.
///
/// Set once at pipeline construction and never modified afterwards; mutable
/// run state lives in [`crate::pipeline::RunState`].
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Project name supplied as a positional argument. When present, the
    /// "new folder?" prompt is skipped.
    pub project: Option<String>,

    /// Verbosely log progress
    pub verbose: bool,

    /// Debug logging
    pub debug: bool,
}
