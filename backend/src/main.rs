use backend::{server, telemetry, AppConfig, Mode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    let mode = Mode::detect();
    telemetry::init(mode);

    let config = AppConfig::from_env(mode);
    tracing::info!(
        mode = %config.mode,
        service = %config.service_name,
        "Selected hosting mode"
    );

    if let Err(err) = server::run(config).await {
        tracing::error!(error = %err, "Service failed");
        return Err(err.into());
    }

    Ok(())
}
