pub mod check;
pub mod config;
pub mod day;
pub mod init;
pub mod sum;
pub mod task;

use crate::libs::config::Config;
use crate::libs::editor::{Document, Editor};
use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show the effective configuration")]
    Config,
    #[command(about = "Start a new day block")]
    Day(day::DayArgs),
    #[command(about = "Log a new task line")]
    Task(task::TaskArgs),
    #[command(about = "Log a new break line")]
    Break(task::TaskArgs),
    #[command(about = "Summarize a range of lines")]
    Sum(sum::SumArgs),
    #[command(about = "Validate a single task line", arg_required_else_help = true)]
    Check(check::CheckArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Configuration file to use instead of the one in the data directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let config_path = cli.config.as_deref();
        match cli.command {
            Commands::Init(args) => init::cmd(args, config_path),
            Commands::Config => config::cmd(&load_config(config_path)?),
            Commands::Day(args) => day::cmd(args, &load_config(config_path)?),
            Commands::Task(args) => task::cmd(args, false, &load_config(config_path)?),
            Commands::Break(args) => task::cmd(args, true, &load_config(config_path)?),
            Commands::Sum(args) => sum::cmd(args, &load_config(config_path)?),
            Commands::Check(args) => check::cmd(args, &load_config(config_path)?),
        }
    }
}

/// Reads the configuration from `path` when given, otherwise from the data directory.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::read_from(path),
        None => Config::read(),
    }
}

/// Converts a 1-based line number from the command line into a line index.
pub fn line_index(line: usize) -> Result<usize> {
    if line == 0 {
        msg_bail_anyhow!(Message::InvalidLineNumber(line));
    }
    Ok(line - 1)
}

/// Line that receives new content: `line` when given, otherwise a blank line at the end of the document.
pub fn target_line(document: &mut Document, line: Option<usize>) -> Result<usize> {
    let index = match line {
        Some(line) => line_index(line)?,
        None => {
            let last = document.last_line();
            if document.read_line(last)?.trim().is_empty() {
                last
            } else {
                last + 1
            }
        }
    };
    document.ensure_line(index);
    Ok(index)
}

pub fn display_path(document: &Document) -> String {
    document.path().map(|path| path.display().to_string()).unwrap_or_default()
}
