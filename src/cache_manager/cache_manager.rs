use super::{CacheLimits, CacheSnapshot, ExplorerCache};
use crate::{
    explorer_client::{ExplorerClient, ExplorerError},
    kill_signal::KillSignal,
};
use futures_util::future::try_join;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::instrument;

const MIN_REFRESH_INTERVAL: Duration = Duration::from_millis(1);

/// Keeps `ExplorerCache` in sync with the explorer API.
///
/// Refreshes run one at a time: a slow upstream delays the next tick rather than
/// stacking a second refresh on top of the first.
#[derive(Clone, Debug)]
pub struct CacheManager {
    explorer: ExplorerClient,
    cache: ExplorerCache,
    limits: CacheLimits,
    refresh_interval: Duration,
    kill_signal: KillSignal,
}

impl CacheManager {
    pub fn build(
        explorer: ExplorerClient,
        cache: ExplorerCache,
        limits: CacheLimits,
        refresh_interval: Duration,
        kill_signal: KillSignal,
    ) -> Self {
        Self {
            explorer,
            cache,
            limits,
            // `tokio::time::interval` panics on a zero period
            refresh_interval: refresh_interval.max(MIN_REFRESH_INTERVAL),
            kill_signal,
        }
    }

    pub fn cache(&self) -> &ExplorerCache {
        &self.cache
    }

    /// Fetch both lists and publish them together, or publish nothing.
    #[instrument(skip(self))]
    pub async fn try_refresh(&self) -> Result<(), ExplorerError> {
        let (blocks, mempool) =
            try_join(self.explorer.recent_blocks(), self.explorer.recent_mempool()).await?;
        let snapshot = CacheSnapshot::project(blocks, mempool, self.limits);
        tracing::info!(
            blocks = snapshot.blocks.len(),
            mempool = snapshot.mempool.len(),
            "data cache updated"
        );
        self.cache.replace(snapshot);
        Ok(())
    }

    /// Returns whether the cache was updated. Failures keep the previous snapshot.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> bool {
        tracing::info!("refreshing data from {}", self.explorer.base_url());
        match self.try_refresh().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "explorer API is rate limited or unreachable, serving the previous cache"
                );
                false
            }
        }
    }

    /// Refresh right away, then once per `refresh_interval` until the kill signal is raised.
    ///
    /// A refresh still in flight when the signal is raised is dropped.
    #[instrument(skip(self))]
    pub async fn run(self) {
        let mut interval = tokio::time::interval(self.refresh_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracing::info!(
            "starting cache refresh loop every {:?}",
            self.refresh_interval
        );
        loop {
            tokio::select! {
                biased;
                _ = self.kill_signal.killed() => break,
                _ = interval.tick() => {}
            }
            tokio::select! {
                biased;
                _ = self.kill_signal.killed() => break,
                _ = self.refresh() => {}
            }
        }
        tracing::info!("stopping cache refresh loop");
    }
}
