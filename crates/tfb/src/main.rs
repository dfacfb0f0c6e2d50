use std::sync::Arc;

use tfb_backend::HttpBackend;

use tfb_core::{backend::BackendApi, config::Config};

#[tokio::main]
async fn main() -> Result<(), tfb_core::Error> {
    tfb_core::logging::init("tfb")?;

    let cfg = Arc::new(Config::load()?);
    tracing::debug!(config = ?cfg, "configuration loaded");

    let backend: Arc<dyn BackendApi> = Arc::new(HttpBackend::from_config(&cfg)?);

    tfb_telegram::router::run_polling(cfg, backend)
        .await
        .map_err(|e| tfb_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
