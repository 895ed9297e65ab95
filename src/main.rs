use anyhow::{Context, Result};

use court_estimator::{app, config, logging, services::CatalogRegistry};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let settings = config::Settings::from_env()?;

    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        "Starting court estimator"
    );

    let catalogs = CatalogRegistry::load(
        &settings.pricing_catalog_dir,
        &settings.default_catalog_id,
    )?;

    let state = app::AppState::new(settings.clone(), catalogs);
    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(&settings.server_addr)
        .await
        .with_context(|| format!("Failed to bind {}", settings.server_addr))?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
