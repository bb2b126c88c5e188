//! cliclack-backed prompt source

use crate::error::Error;
use crate::prompt::PromptSource;

/// Asks questions inline on the terminal.
///
/// Each question blocks until answered; a closed input stream surfaces as
/// [`Error::Prompt`] and aborts the run.
pub struct InteractivePrompts;

impl PromptSource for InteractivePrompts {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, Error> {
        cliclack::confirm(message)
            .initial_value(default)
            .interact()
            .map_err(Error::Prompt)
    }

    fn input(&mut self, message: &str, default: &str) -> Result<String, Error> {
        cliclack::input(message)
            .placeholder(default)
            .default_input(default)
            .interact()
            .map_err(Error::Prompt)
    }
}
