use std::sync::Arc;
use tokio::sync::broadcast;

/// Broadcast topic with bounded capacity, fanning state frames out to every
/// connected socket task.
/// `T` must be `Send + Sync` because frames hop across tasks.
#[derive(Debug, Clone)]
pub struct Topic<T> {
    tx: broadcast::Sender<Arc<T>>,
}

impl<T: Send + Sync + 'static> Topic<T> {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish a frame. A topic with no observers drops it silently.
    pub fn publish(&self, frame: T) {
        let _ = self.tx.send(Arc::new(frame));
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Arc<T>> {
        self.tx.subscribe()
    }

    /// Number of currently subscribed observers.
    pub fn observer_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
