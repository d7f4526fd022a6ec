use crate::libs::config::Config;
use crate::msg_print;
use anyhow::Result;

/// Prints the configuration in effect, defaults included.
pub fn cmd(config: &Config) -> Result<()> {
    msg_print!(serde_json::to_string_pretty(config)?);
    Ok(())
}
