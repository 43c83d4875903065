use std::{error::Error, net::TcpListener};

use dotenv::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wishlist::{config::Config, create_app, db, serve};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wishlist=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|err| {
        tracing::error!("Invalid configuration: {err}");
        err
    })?;

    let pool = db::create_pool(&config.database).await.map_err(|err| {
        tracing::error!("Unable to connect to database: {err}");
        err
    })?;

    db::run_migrations(&pool).await?;
    tracing::info!("Database schema is up to date");

    let addr = config.listen_addr();
    let listener = TcpListener::bind(addr)?;
    tracing::info!("Server running at http://{}/wishes", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    serve(listener, create_app(pool), shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
