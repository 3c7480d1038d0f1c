use tracing_subscriber::EnvFilter;
use tudu::commands::Cli;
use tudu::libs::messages::macros::is_debug_mode;

fn main() -> anyhow::Result<()> {
    // In debug mode the msg_* macros route through tracing, so a subscriber
    // has to be installed before the first message is emitted.
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    Cli::menu()
}
