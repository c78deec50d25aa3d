use std::sync::Arc;

use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use cpn_emulator::catalog::StaticCatalog;
use cpn_emulator::config::Settings;
use cpn_emulator::server::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env must be loaded before flags fall back to the environment
    dotenv::dotenv().ok();

    // init logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let settings = Settings::from_args();
    let delay = settings.delay()?;
    info!(
        min_ms = delay.min_ms(),
        max_ms = delay.max_ms(),
        "response delay configured"
    );

    let catalog = StaticCatalog::load(&settings.catalog)?;
    let state = Arc::new(AppState::new(catalog, delay));

    server::serve(state, settings.port).await?;

    Ok(())
}
