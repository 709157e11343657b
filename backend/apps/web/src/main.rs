//! Forum Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use axum::Router;
use base64::Engine;
use base64::engine::general_purpose;
use forum::{ForumConfig, PgForumRepository, forum_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "web=info,forum=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Forum configuration
    let upgrade_pass =
        env::var("UPGRADE_PASS").expect("UPGRADE_PASS must be set in environment");

    let config = match env::var("SESSION_SECRET") {
        Ok(secret_b64) => {
            let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
            anyhow::ensure!(
                secret_bytes.len() == 32,
                "SESSION_SECRET must decode to 32 bytes"
            );
            let mut secret = [0u8; 32];
            secret.copy_from_slice(&secret_bytes);
            ForumConfig {
                session_secret: secret,
                upgrade_pass,
                ..ForumConfig::default()
            }
        }
        // No configured secret: random per process. Sessions do not survive
        // a restart in this mode.
        Err(_) => {
            let base = if cfg!(debug_assertions) {
                ForumConfig::development()
            } else {
                ForumConfig::with_random_secret()
            };
            ForumConfig {
                upgrade_pass,
                ..base
            }
        }
    };

    let repo = PgForumRepository::new(pool.clone());

    // Build router
    let app = Router::new()
        .merge(forum_router(repo, config))
        .layer(TraceLayer::new_for_http());

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
