//! Pick-list prompts.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

/// Lets the user choose one of several options.
pub trait Prompt {
    /// Returns the index of the chosen option, or `None` when the user cancelled.
    fn prompt_choice(&mut self, options: &[String], placeholder: &str) -> Result<Option<usize>>;
}

/// Interactive terminal pick-list. `Esc` or `q` cancels.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn prompt_choice(&mut self, options: &[String], placeholder: &str) -> Result<Option<usize>> {
        if options.is_empty() {
            return Ok(None);
        }
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(placeholder)
            .items(options)
            .default(0)
            .interact_opt()?;
        Ok(selection)
    }
}

/// Never asks; every prompt counts as cancelled so the defaults apply.
#[derive(Debug, Default)]
pub struct NoInput;

impl Prompt for NoInput {
    fn prompt_choice(&mut self, _options: &[String], placeholder: &str) -> Result<Option<usize>> {
        tracing::debug!(placeholder, "prompt skipped");
        Ok(None)
    }
}
