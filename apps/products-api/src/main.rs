use axum_helpers::JwtAuth;
use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use migration::Migrator;
use products_api::{AppState, Config, build_app};
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = database::postgres::connect_from_config_with_retry(
        config.database.clone(),
        Some(config.retry.clone()),
    )
    .await
    .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    database::postgres::run_migrations::<Migrator>(&db, config.app.name).await?;

    let state = AppState {
        db,
        jwt_auth: JwtAuth::new(&config.jwt),
    };

    let app = build_app(&state, config.app, config.cors_allowed_origin.as_deref())?;

    info!(
        name = config.app.name,
        version = config.app.version,
        "Starting Products API on port {}",
        config.server.port
    );

    let db = state.db;
    create_production_app(
        app,
        &config.server,
        config.server.shutdown_timeout(),
        async move {
            info!("Shutting down: closing database connections");
            database::postgres::close(db).await;
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
