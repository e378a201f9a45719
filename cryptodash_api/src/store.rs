use std::sync::Arc;

use tokio::sync::watch;

use cryptodash_domain::Snapshot;

/// The single live snapshot.
///
/// A snapshot is immutable once published; `publish` swaps the whole value
/// and `read` hands out a shared reference to whichever one is current, so a
/// reader holds either the old snapshot or the new one and never a mix.
/// Before the first publish, reads return `Snapshot::default()`.
#[derive(Clone)]
pub struct SnapshotStore {
    tx: Arc<watch::Sender<Arc<Snapshot>>>,
}

impl SnapshotStore {
    pub fn new() -> SnapshotStore {
        let (tx, _) = watch::channel(Arc::new(Snapshot::default()));
        SnapshotStore { tx: Arc::new(tx) }
    }

    pub fn publish(&self, snapshot: Snapshot) {
        self.tx.send_replace(Arc::new(snapshot));
    }

    pub fn read(&self) -> Arc<Snapshot> {
        self.tx.borrow().clone()
    }

    /// Notified on every publish.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Snapshot>> {
        self.tx.subscribe()
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        SnapshotStore::new()
    }
}
