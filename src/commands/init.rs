//! Configuration initialization command.
//!
//! Runs an interactive wizard pre-filled with the current settings, or
//! removes the configuration file with `--delete`.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs, config_path: Option<&Path>) -> Result<()> {
    if init_args.delete {
        let removed = match config_path {
            Some(path) if path.exists() => {
                fs::remove_file(path)?;
                true
            }
            Some(_) => false,
            None => Config::delete()?,
        };
        if removed {
            msg_success!(Message::ConfigDeleted);
        } else {
            msg_warning!(Message::ConfigNotFound);
        }
        return Ok(());
    }

    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => Config::path()?,
    };
    let current = Config::read_from(&path).unwrap_or_default();
    Config::init(current)?.save_to(&path)?;

    msg_success!(Message::ConfigSaved(path.display().to_string()));
    Ok(())
}
