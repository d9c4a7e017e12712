use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use isv_translator::config::Config;
use isv_translator::routes;
use isv_translator::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("isv_translator=debug,tower_http=debug")),
        )
        .init();

    // Load configuration - first readable file wins, defaults otherwise
    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        Some("conf.json".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut config = None;
    for path in &config_paths {
        if !std::path::Path::new(path).exists() {
            tracing::debug!("No config at {}", path);
            continue;
        }
        config = Some(Config::load(path)?);
        info!("Loaded configuration from: {}", path);
        break;
    }

    let mut config = config.unwrap_or_else(|| {
        info!("No config file found (tried {:?}), using defaults", config_paths);
        Config::default()
    });
    config.apply_env_overrides()?;

    let app_state = AppState::new(config.clone())?;
    info!(
        "Serving {} languages with the {} translator",
        app_state.registry.len(),
        app_state.translator.name()
    );

    let app = routes::build_app(app_state);

    let addr = format!("{}:{}", config.system_config.host, config.system_config.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
