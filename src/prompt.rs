//! Interactive Prompt Seam
//!
//! Handlers talk to the terminal through the [`Prompter`] trait: one
//! free-text question or one single-selection question per call, answer
//! fully resolved before the caller continues. Tests drive handlers with a
//! scripted implementation instead of a terminal.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::error::{Result, RosterError};

/// Ask-and-block interactive input
pub trait Prompter {
    /// Present a free-text prompt and return the entered string
    fn input(&self, message: &str) -> Result<String>;

    /// Present a single-selection list and return the chosen index
    fn select(&self, message: &str, options: &[String]) -> Result<usize>;
}

/// Terminal-backed prompter using dialoguer
pub struct ConsolePrompter {
    theme: ColorfulTheme,
}

impl ConsolePrompter {
    #[must_use]
    pub fn new() -> Self {
        Self { theme: ColorfulTheme::default() }
    }
}

impl Default for ConsolePrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for ConsolePrompter {
    fn input(&self, message: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| RosterError::prompt_failed(e.to_string()))
    }

    fn select(&self, message: &str, options: &[String]) -> Result<usize> {
        if options.is_empty() {
            return Err(RosterError::prompt_failed(format!(
                "No options available for: {message}"
            )));
        }

        Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(options)
            .default(0)
            .interact()
            .map_err(|e| RosterError::prompt_failed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_rejects_empty_option_list() {
        let prompter = ConsolePrompter::new();
        let err = prompter.select("pick one", &[]).unwrap_err();
        assert_eq!(err.error_code(), "PROMPT_FAILED");
    }
}
