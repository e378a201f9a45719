use std::time::Instant;

use chrono::{DateTime, Utc};
use tokio::select;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{Duration, MissedTickBehavior};

use cryptodash_data::Sources;
use cryptodash_domain::LastUpdate;
use crate::store::SnapshotStore;

/// Rebuilds the snapshot from every source on a fixed interval.
///
/// The first cycle runs as soon as the service starts. Cycles never overlap:
/// the next tick is only awaited after the current cycle has published, and
/// ticks missed while a cycle ran long are skipped rather than queued.
pub struct RefreshService {
    sources: Sources,
    store: SnapshotStore,
    update_interval: Duration,
}

pub struct RefreshHandle {
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl RefreshHandle {
    /// Stops the service, abandoning a cycle that is still in flight, and
    /// waits for the task to finish.
    pub async fn shutdown(self) {
        self.shutdown.send(()).ok();
        if let Err(e) = self.task.await {
            error!("Refresh service ended abnormally: {}", e);
        }
    }
}

impl RefreshService {
    pub fn new(sources: Sources, store: SnapshotStore, update_interval: Duration) -> RefreshService {
        RefreshService {
            sources,
            store,
            update_interval,
        }
    }

    pub fn spawn(self) -> RefreshHandle {
        let (tx, rx) = oneshot::channel();
        let task = tokio::spawn(self.into_run(rx));
        RefreshHandle { shutdown: tx, task }
    }

    /// Runs until `shutdown` fires or its sender is dropped.
    pub async fn into_run(self, mut shutdown: oneshot::Receiver<()>) {
        info!("Starting refresh service (update interval = {:?})", self.update_interval);

        let mut interval = tokio::time::interval(self.update_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            select! {
                _ = interval.tick() => {}
                _ = &mut shutdown => break,
            }

            select! {
                _ = self.refresh_once() => {}
                _ = &mut shutdown => break,
            }
        }

        info!("Stopped refresh service");
    }

    /// One full cycle: query every source, stamp, publish. Always publishes,
    /// even when every source failed.
    pub async fn refresh_once(&self) -> DateTime<Utc> {
        let started = Instant::now();
        let collected = self.sources.collect().await;
        let now = Utc::now();

        if collected.is_total_outage() {
            warn!("Every source failed; publishing an empty snapshot");
        } else if !collected.failed.is_empty() {
            warn!("{} source(s) failed this cycle: {:?}", collected.failed.len(), collected.failed);
        }

        let mut snapshot = collected.snapshot;
        snapshot.last_update = Some(LastUpdate { timestamp: now });
        self.store.publish(snapshot);

        info!("Published snapshot at {} (took {:?})", now, started.elapsed());
        now
    }
}
