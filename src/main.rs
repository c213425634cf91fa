use contacts_app::config::{Config, usage};
use contacts_app::contacts::ContactService;
use contacts_app::routes::{AppState, build_router};
use contacts_app::storage::{FileStore, KeyValueStore, MemoryStore};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        // .with_max_level(tracing::Level::DEBUG)
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = match Config::from_env_and_args() {
        Ok(config) => config,
        Err(e) => {
            let program = std::env::args()
                .next()
                .unwrap_or_else(|| "contacts_app".to_string());
            eprintln!("{}", e);
            eprintln!("{}", usage(&program));
            std::process::exit(1);
        }
    };

    // 1. Storage:
    let store: Arc<dyn KeyValueStore> = match &config.data_dir {
        Some(dir) => {
            let store = FileStore::open(dir).await?;
            tracing::info!("File store opened at {}", store.dir().display());
            Arc::new(store)
        }
        None => {
            tracing::warn!("No data directory configured, contacts live in memory only");
            Arc::new(MemoryStore::new())
        }
    };

    // 2. Query layer:
    let contacts = Arc::new(ContactService::new(store, config.max_latency));
    tracing::info!(
        "Simulated network latency up to {}ms",
        contacts.network().max_latency().as_millis()
    );

    // 3. Router:
    let app = build_router(AppState::new(contacts));

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
