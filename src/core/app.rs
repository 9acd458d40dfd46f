use anyhow::Result;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use crate::board::store::BoardStore;
use crate::core::config::Config;
use crate::storage::database::Database;
use crate::web::routes;
use crate::web::views::Views;

pub struct App {
    config: Config,
    board_store: Arc<BoardStore>,
    views: Arc<Views>,
}

impl App {
    pub async fn new(config: Config) -> Result<Self> {
        info!("Initializing application components");

        // Initialize database
        let db = Arc::new(Database::new(&config.database).await?);

        // Run migrations
        db.migrate().await?;

        let board_store = Arc::new(BoardStore::new(Arc::clone(&db)));
        let views = Arc::new(Views::new()?);

        Ok(Self {
            config,
            board_store,
            views,
        })
    }

    pub async fn run(self) -> Result<()> {
        let app_state = AppState {
            board_store: self.board_store,
            views: self.views,
            config: self.config.clone(),
        };

        let app = routes::create_router(Arc::new(app_state));

        let addr = format!("{}:{}", self.config.server.host, self.config.server.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server shutdown complete");
        Ok(())
    }
}

#[derive(Clone)]
pub struct AppState {
    pub board_store: Arc<BoardStore>,
    pub views: Arc<Views>,
    pub config: Config,
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
