//! New task and new break commands.
//!
//! The line above the target line provides the start time. The end time and
//! the name are picked from suggestion lists; `--no-input` takes the defaults.

use super::{display_path, target_line};
use crate::libs::config::Config;
use crate::libs::editor::{Document, Editor, Position, Selection};
use crate::libs::journal::new_task_line;
use crate::libs::messages::Message;
use crate::libs::prompt::{NoInput, Prompt, TerminalPrompt};
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct TaskArgs {
    /// Markdown journal file
    file: PathBuf,

    /// Line to write (1-based); its current content is replaced. Defaults to the end of the file
    #[arg(long, short)]
    line: Option<usize>,

    /// Do not prompt, use the default time and name
    #[arg(long)]
    no_input: bool,
}

pub fn cmd(task_args: TaskArgs, is_break: bool, config: &Config) -> Result<()> {
    let mut document = Document::open(&task_args.file)?;
    let line = target_line(&mut document, task_args.line)?;
    let line_length = document.read_line(line)?.chars().count();

    let mut prompt: Box<dyn Prompt> = if task_args.no_input {
        Box::new(NoInput)
    } else {
        Box::new(TerminalPrompt)
    };

    new_task_line(
        &mut document,
        prompt.as_mut(),
        Selection::new(Position::new(line, 0), Position::new(line, line_length)),
        is_break,
        config,
        Local::now().naive_local(),
        &mut rand::thread_rng(),
    )?;
    document.save()?;

    let file = display_path(&document);
    if is_break {
        msg_success!(Message::BreakLineWritten { file, line: line + 1 });
    } else {
        msg_success!(Message::TaskLineWritten { file, line: line + 1 });
    }
    Ok(())
}
