use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tankserver::config::ServerConfig;
use tankserver::db::setup_database;
use tankserver::router::create_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    // Setup database
    let db = setup_database(&config.db_path).await?;

    // Run migrations
    sqlx::migrate!("./migrations").run(&db).await?;

    // Build our application with routes
    let app = create_router(db);

    // Run it
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
