//! New day command.
//!
//! Writes a `## <date>` heading followed by an opening break line. An empty
//! journal also gets the `# My Time` title.

use super::{display_path, target_line};
use crate::libs::config::Config;
use crate::libs::editor::{Document, Position, Selection};
use crate::libs::journal::new_day_block;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DayArgs {
    /// Markdown journal file
    file: PathBuf,

    /// Line to write the block at (1-based); defaults to the end of the file
    #[arg(long, short)]
    line: Option<usize>,
}

pub fn cmd(day_args: DayArgs, config: &Config) -> Result<()> {
    let mut document = Document::open(&day_args.file)?;
    let line = target_line(&mut document, day_args.line)?;

    new_day_block(
        &mut document,
        Selection::caret(Position::new(line, 0)),
        config,
        &Local::now(),
        &mut rand::thread_rng(),
    )?;
    document.save()?;

    msg_success!(Message::DayBlockWritten(display_path(&document)));
    Ok(())
}
