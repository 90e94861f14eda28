use std::sync::Arc;

use lunaria_api::config::Config;
use lunaria_api::db::{self, MoodStore};
use lunaria_api::feed::MoodFeed;
use lunaria_api::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lunaria_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Arc::new(Config::from_env());

    let store = match &config.database_url {
        Some(url) => {
            let pool = db::create_pool(url).await;
            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Database migrations applied");
            MoodStore::Postgres(pool)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, falling back to the in-memory store");
            MoodStore::Memory(db::MemoryStore::new())
        }
    };

    let state = AppState {
        store,
        config: config.clone(),
        feed: MoodFeed::default(),
    };

    let app = app::router(state);

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
