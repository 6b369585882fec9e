mod adapters;
mod app;
mod core;
mod global_constants;
mod presentation;


use crate::app::HandwritingApp;
use crate::core::models::AppConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!(
        "[MAIN] Starting {}",
        global_constants::APPLICATION_TITLE
    );

    let config = AppConfig::load()?;
    log::debug!("[MAIN] Credentials: {:?}", config.credentials);

    let mut app = HandwritingApp::build(config);
    app.run().await
}
