use crate::libs::config::Config;
use crate::libs::journal::check_line;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// The line to validate, e.g. "- `09:30` Code review"
    line: String,
}

pub fn cmd(check_args: CheckArgs, config: &Config) -> Result<()> {
    let task = match check_line(&check_args.line, config) {
        Ok(task) => task,
        Err(err) => msg_bail_anyhow!(Message::LineInvalid(err.to_string())),
    };
    msg_success!(Message::LineValid {
        time: config.clock_format().format_time(&task.end),
        text: task.text,
        comment: task.comment,
    });
    Ok(())
}
