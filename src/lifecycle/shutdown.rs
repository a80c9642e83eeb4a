//! Shutdown coordination for the server.
//!
//! One [`Shutdown`] is created at startup and cloned into every listener.
//! Triggering it is sticky: a listener that starts waiting after the
//! trigger stops straight away instead of missing the broadcast.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast;

/// Cloneable handle that stops both listeners.
#[derive(Clone)]
pub struct Shutdown {
    inner: Arc<Inner>,
}

struct Inner {
    tx: broadcast::Sender<()>,
    triggered: AtomicBool,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self {
            inner: Arc::new(Inner {
                tx,
                triggered: AtomicBool::new(false),
            }),
        }
    }

    /// Ask every listener to stop. Only the first call has an effect.
    pub fn trigger(&self) {
        if self.inner.triggered.swap(true, Ordering::SeqCst) {
            return;
        }
        tracing::info!(listeners = self.inner.tx.receiver_count(), "Shutdown triggered");
        let _ = self.inner.tx.send(());
    }

    /// Whether [`trigger`](Self::trigger) has been called.
    pub fn is_triggered(&self) -> bool {
        self.inner.triggered.load(Ordering::SeqCst)
    }

    /// A future that resolves once shutdown has been triggered.
    ///
    /// The subscription is taken when this is called, not when the future
    /// is first polled, so a trigger in between is never lost.
    pub fn wait(&self) -> impl Future<Output = ()> + Send + 'static {
        let mut rx = self.inner.tx.subscribe();
        let inner = Arc::clone(&self.inner);

        async move {
            if inner.triggered.load(Ordering::SeqCst) {
                return;
            }
            // The sender lives in `inner`, so this only returns on trigger.
            let _ = rx.recv().await;
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
