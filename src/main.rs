use mytime::commands::Cli;
use mytime::libs::data_storage::{APP_NAME, APP_VERSION};
use mytime::libs::messages::{macros::is_debug_mode, Message};
use mytime::{msg_debug, msg_error};
use tracing_subscriber::EnvFilter;

fn main() {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mytime=debug")))
            .with_writer(std::io::stderr)
            .init();
        msg_debug!(format!("{} {}: {:?}", APP_NAME, APP_VERSION, std::env::args().collect::<Vec<_>>()));
    }

    if let Err(err) = Cli::menu() {
        msg_error!(Message::CommandFailed(format!("{:#}", err)));
        std::process::exit(1);
    }
}
