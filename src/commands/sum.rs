//! Summary command: aggregates task lines into a time-per-task table.

use super::{display_path, line_index};
use crate::libs::config::Config;
use crate::libs::editor::{Document, Editor, Selection};
use crate::libs::journal::summary_block;
use crate::libs::messages::Message;
use crate::libs::time_span::time_span_to_string;
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SumArgs {
    /// Markdown journal file
    file: PathBuf,

    /// First line of the range (1-based)
    #[arg(long, default_value_t = 1)]
    from: usize,

    /// Last line of the range (1-based); defaults to the end of the file
    #[arg(long)]
    to: Option<usize>,
}

pub fn cmd(sum_args: SumArgs, config: &Config) -> Result<()> {
    let mut document = Document::open(&sum_args.file)?;
    let first = line_index(sum_args.from)?;
    let last = match sum_args.to {
        Some(to) => line_index(to)?,
        None => document.line_count() - 1,
    };

    let (summary, _) = summary_block(&mut document, Selection::lines(first, last), config, Local::now().naive_local())?;
    document.save()?;

    msg_success!(Message::SummaryWritten {
        file: display_path(&document),
        valid: summary.counts.valid,
        comments: summary.counts.comments,
        invalid: summary.counts.invalid,
    });
    msg_info!(Message::SummaryTotal(time_span_to_string(
        summary.total,
        config.time_span_format,
        config.time_span_step,
        false,
        &config.clock_format(),
    )));
    Ok(())
}
