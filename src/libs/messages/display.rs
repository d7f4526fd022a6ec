//! Display implementation for application messages.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigDeleted => "Configuration removed, defaults will be used".to_string(),
            Message::ConfigNotFound => "No configuration file found, nothing to remove".to_string(),
            Message::ConfigWizardHeader => "Time log settings".to_string(),
            Message::InvalidDateFormat(format) => format!("Invalid day heading format: '{}'", format),

            // === JOURNAL MESSAGES ===
            Message::DayBlockWritten(file) => format!("New day started in {}", file),
            Message::TaskLineWritten { file, line } => format!("Task logged in {} at line {}", file, line),
            Message::BreakLineWritten { file, line } => format!("Break logged in {} at line {}", file, line),
            Message::SummaryWritten {
                file,
                valid,
                comments,
                invalid,
            } => format!(
                "Summary added to {} (lines valid: {}, comments: {}, invalid: {})",
                file, valid, comments, invalid
            ),
            Message::SummaryTotal(total) => format!("Total: {}", total),
            Message::InvalidLineNumber(line) => format!("Line numbers start at 1, got {}", line),

            // === LINE CHECK MESSAGES ===
            Message::LineValid { time, text, comment } => {
                if text.is_empty() {
                    format!("Break at {}: {}", time, comment)
                } else if comment.is_empty() {
                    format!("Task at {}: {}", time, text)
                } else {
                    format!("Task at {}: {} ({})", time, text, comment)
                }
            }
            Message::LineInvalid(error) => error.clone(),

            // === PROMPTS ===
            Message::PromptTimeSpanFormat => "Select how time spans are displayed".to_string(),
            Message::PromptTimeSpanStep => "Enter rounding step (minutes, 0 disables rounding)".to_string(),
            Message::PromptHoursAndMinutesFormat => "Enter hours and minutes format (e.g. HH:mm)".to_string(),
            Message::PromptNewDateFormat => "Enter day heading format (strftime, e.g. %A, %d %B %Y)".to_string(),
            Message::PromptNewDateLanguage => "Enter day heading language (e.g. en, it)".to_string(),
            Message::PromptStartMessages => "Enter start messages, separated by |".to_string(),
            Message::PromptTaskList => "Enter task names always offered, separated by |".to_string(),
            Message::PromptBreakList => "Enter break names always offered, separated by |".to_string(),

            // === GENERAL MESSAGES ===
            Message::CommandFailed(error) => error.clone(),
        };
        write!(f, "{}", text)
    }
}
