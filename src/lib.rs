pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod table;
pub mod time;
pub mod zones;

use anyhow::Result;

pub use cli::Cli;
pub use config::Config;
pub use error::TimeError;

pub fn run(cli: &Cli) -> Result<()> {
    let app = app::Application::new();
    log::info!("Initializing timezoner");
    app.run(cli)
}

pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .format_target(false)
        .init();
}
