//! MythRealms - GDD & content management backend

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mythrealms::cli::App;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let app = App::parse();

    // RUST_LOG wins over --verbose
    let default_level = if app.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    app.run().await
}
