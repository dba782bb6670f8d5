use crate::{
    cache_manager::{CacheLimits, CacheManager, ExplorerCache},
    configuration::Settings,
    explorer_client::ExplorerClient,
    kill_signal::KillSignal,
    routes::{blocks, health_check, mempool, transaction},
};
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

/// State shared by every request handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub cache: ExplorerCache,
    pub explorer: ExplorerClient,
    pub service_name: Arc<str>,
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
    cache_manager: CacheManager,
    kill_signal: KillSignal,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let explorer = ExplorerClient::build(
            &configuration.upstream.base_url,
            configuration.upstream.timeout(),
        )?;
        let cache = ExplorerCache::new();
        let kill_signal = KillSignal::new();
        let cache_manager = CacheManager::build(
            explorer.clone(),
            cache.clone(),
            CacheLimits {
                max_blocks: configuration.cache.max_blocks,
                max_mempool_entries: configuration.cache.max_mempool_entries,
            },
            configuration.cache.refresh_interval(),
            kill_signal.clone(),
        );

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address).await?;
        let port = listener.local_addr()?.port();
        tracing::info!(
            "{} running on http://{}:{}",
            configuration.application.service_name,
            configuration.application.host,
            port
        );

        let router = build_router(AppState {
            cache,
            explorer,
            service_name: configuration.application.service_name.into(),
        });
        Ok(Self {
            port,
            listener,
            router,
            cache_manager,
            kill_signal,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn cache(&self) -> ExplorerCache {
        self.cache_manager.cache().clone()
    }

    pub fn kill_signal(&self) -> KillSignal {
        self.kill_signal.clone()
    }

    /// Serve until SIGTERM/SIGINT or until the kill signal is raised, then stop
    /// the cache refresh loop as well.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.kill_signal.register_os_signals()?;
        let refresher = tokio::spawn(self.cache_manager.run());

        let shutdown = self.kill_signal.clone();
        let served = axum::serve(self.listener, self.router)
            .with_graceful_shutdown(async move { shutdown.killed().await })
            .await;

        self.kill_signal.kill();
        if let Err(e) = refresher.await {
            tracing::error!("cache refresh loop ended abnormally: {:?}", e);
        }
        served
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/blocks", get(blocks))
        .route("/mempool", get(mempool))
        .route("/tx/{id}", get(transaction))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
