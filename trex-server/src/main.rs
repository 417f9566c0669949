use anyhow::Result;

use trex_server::infrastructure::logging::init_logging;
use trex_server::infrastructure::settings::Settings;
use trex_server::server::run_http;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    run_http(&settings).await
}
