#[cfg(unix)]
use tokio::signal::unix;
use tokio::signal::ctrl_c;
use tokio_util::sync::CancellationToken;

/// Process wide stop signal shared by the cache manager and the http server.
#[derive(Clone, Debug, Default)]
pub struct KillSignal {
    token: CancellationToken,
}

impl KillSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the signal on SIGTERM and SIGINT instead of terminating right away.
    ///
    /// Must be called from within the tokio runtime.
    pub fn register_os_signals(&self) -> Result<(), std::io::Error> {
        #[cfg(unix)]
        let mut sigterm = unix::signal(unix::SignalKind::terminate())?;
        let token = self.token.clone();
        tokio::spawn(async move {
            #[cfg(unix)]
            let terminate = async {
                sigterm.recv().await;
            };
            #[cfg(not(unix))]
            let terminate = std::future::pending::<()>();

            tokio::select! {
                result = ctrl_c() => match result {
                    Ok(()) => tracing::info!("received Ctrl+C signal, initiating graceful shutdown"),
                    Err(e) => {
                        tracing::error!(error = %e, "failed to install Ctrl+C handler");
                        return;
                    }
                },
                () = terminate => tracing::info!("received SIGTERM signal, initiating graceful shutdown"),
                () = token.cancelled() => return,
            }
            token.cancel();
        });
        Ok(())
    }

    pub fn kill(&self) {
        self.token.cancel();
    }

    pub fn is_killed(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Resolves once the signal has been raised.
    pub async fn killed(&self) {
        self.token.cancelled().await
    }
}
