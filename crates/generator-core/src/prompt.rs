//! Prompt engine seam

use crate::error::Error;

/// A source of interactive answers.
///
/// The pipeline reaches the user exclusively through this trait, so the
/// prompting phase can be driven by scripted answers in tests. Questions are
/// asked strictly one at a time; each call blocks until the answer is
/// available.
pub trait PromptSource {
    /// Ask a yes/no question with a default answer.
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, Error>;

    /// Ask for a line of text with a default answer.
    fn input(&mut self, message: &str, default: &str) -> Result<String, Error>;
}
