use codetutor::{build_app, run_server, AppConfig, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "codetutor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        model = config.model.as_str(),
        api_key = %config.masked_api_key(),
        timeout_ms = config.timeout_ms,
        language = config.default_language.code(),
        "starting codetutor"
    );

    let app = build_app(AppState::from_config(&config));
    run_server(app, config.port).await?;
    Ok(())
}
