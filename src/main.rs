use taskman::commands::Cli;
use taskman::libs::messages::macros::is_debug_mode;
use taskman::msg_error;
use tracing_subscriber::EnvFilter;

fn main() {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .with_target(false)
            .init();
    }

    if let Err(e) = Cli::menu() {
        msg_error!(format!("{:#}", e));
        std::process::exit(1);
    }
}
