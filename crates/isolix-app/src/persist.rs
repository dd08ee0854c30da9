//! Background persistence: store mutations leave the event loop and run
//! in order on a blocking worker.
//!
//! Writes are fire-and-forget. A failed write is logged and dropped; the
//! in-memory state stays authoritative for the session.

use std::time::Duration;

use isolix_store::{StoreOp, WorkspaceStore};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// How long shutdown waits for queued writes to drain.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(2);

enum Backend {
    Worker {
        runtime: Runtime,
        tx: mpsc::UnboundedSender<StoreOp>,
        handle: JoinHandle<Box<dyn WorkspaceStore>>,
    },
    /// No runtime could be started; writes run on the caller's thread.
    Inline(Box<dyn WorkspaceStore>),
}

pub struct PersistWorker {
    backend: Option<Backend>,
    backend_name: &'static str,
}

fn apply_logged(store: &mut dyn WorkspaceStore, op: &StoreOp) {
    if let Err(e) = op.apply(store) {
        tracing::warn!(op = op.name(), backend = store.backend(), error = %e, "store write failed");
    }
}

impl PersistWorker {
    /// Move `store` onto a single-threaded worker.
    pub fn start(store: Box<dyn WorkspaceStore>) -> Self {
        let backend_name = store.backend();
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build();

        let backend = match rt {
            Ok(runtime) => {
                let (tx, mut rx) = mpsc::unbounded_channel::<StoreOp>();
                let mut store = store;
                let handle = runtime.spawn_blocking(move || {
                    while let Some(op) = rx.blocking_recv() {
                        apply_logged(store.as_mut(), &op);
                    }
                    store
                });
                tracing::info!(backend = backend_name, "persistence worker started");
                Backend::Worker {
                    runtime,
                    tx,
                    handle,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to start persistence runtime, writing inline");
                Backend::Inline(store)
            }
        };

        Self {
            backend: Some(backend),
            backend_name,
        }
    }

    pub fn backend(&self) -> &'static str {
        self.backend_name
    }

    /// Queue a mutation. Ordering between submissions is preserved.
    pub fn submit(&mut self, op: StoreOp) {
        match self.backend.as_mut() {
            Some(Backend::Worker { tx, .. }) => {
                if let Err(e) = tx.send(op) {
                    tracing::warn!(op = e.0.name(), "persistence worker gone, write dropped");
                }
            }
            Some(Backend::Inline(store)) => apply_logged(store.as_mut(), &op),
            None => tracing::debug!(op = op.name(), "write after shutdown ignored"),
        }
    }

    /// Stop accepting writes, wait for the queue to drain, and hand the
    /// store back. Calling it again returns `None`.
    pub fn shutdown(&mut self) -> Option<Box<dyn WorkspaceStore>> {
        match self.backend.take()? {
            Backend::Worker {
                runtime,
                tx,
                handle,
            } => {
                drop(tx);
                let joined = runtime.block_on(async { tokio::time::timeout(DRAIN_TIMEOUT, handle).await });
                runtime.shutdown_timeout(Duration::from_millis(100));
                match joined {
                    Ok(Ok(store)) => {
                        tracing::info!(backend = self.backend_name, "persistence worker stopped");
                        Some(store)
                    }
                    Ok(Err(e)) => {
                        tracing::warn!(error = %e, "persistence worker panicked");
                        None
                    }
                    Err(_) => {
                        tracing::warn!("persistence worker did not drain in time");
                        None
                    }
                }
            }
            Backend::Inline(store) => Some(store),
        }
    }
}

impl Drop for PersistWorker {
    fn drop(&mut self) {
        if self.backend.is_some() {
            self.shutdown();
        }
    }
}
