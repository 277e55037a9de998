//! Timer driver for the stage sequencer
//!
//! Runs the two independent periodic timers (progress tick, detail
//! rotation) as tokio tasks over a shared sequencer. The two timers
//! interleave on the runtime with no ordering guarantee between them;
//! each timer's own callbacks are totally ordered.
//!
//! Timer lifetime is tied to the [`DriverHandle`]: dropping it (or calling
//! [`DriverHandle::shutdown`]) aborts both tasks, so navigating away from
//! the processing screen cannot leak running timers.

use crate::sequencer::{Sequencer, SequencerEvent, SequencerSnapshot};
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::interval;

/// Spawns and owns the sequencer timer tasks
#[derive(Debug)]
pub struct SequencerDriver;

impl SequencerDriver {
    /// Start the sequencer and spawn its two timer tasks
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn spawn(mut sequencer: Sequencer) -> DriverHandle {
        sequencer.start();

        let config = *sequencer.config();
        let initial = sequencer.snapshot();
        let shared = Arc::new(Mutex::new(sequencer));

        let (snapshot_tx, snapshot_rx) = watch::channel(initial);
        let (done_tx, done_rx) = watch::channel(false);

        let tick_task = {
            let shared = Arc::clone(&shared);
            let snapshot_tx = snapshot_tx.clone();
            tokio::spawn(async move {
                let mut timer = interval(config.tick_period);
                // The first interval tick completes immediately; the run
                // starts one full period after spawn.
                timer.tick().await;
                loop {
                    timer.tick().await;
                    let mut seq = shared.lock().await;
                    let event = seq.tick();
                    snapshot_tx.send_replace(seq.snapshot());
                    if matches!(event, Some(SequencerEvent::Completed)) {
                        done_tx.send_replace(true);
                        break;
                    }
                }
            })
        };

        let rotate_task = {
            let shared = Arc::clone(&shared);
            tokio::spawn(async move {
                let mut timer = interval(config.detail_period);
                timer.tick().await;
                loop {
                    timer.tick().await;
                    let mut seq = shared.lock().await;
                    if seq.is_done() {
                        break;
                    }
                    seq.rotate_detail();
                    snapshot_tx.send_replace(seq.snapshot());
                }
            })
        };

        DriverHandle {
            snapshots: snapshot_rx,
            done: done_rx,
            tick_task,
            rotate_task,
        }
    }
}

/// Handle to a running sequencer
///
/// Read-only access to the current state plus the one-shot completion
/// signal. Both timer tasks stop when the handle is dropped.
#[derive(Debug)]
pub struct DriverHandle {
    snapshots: watch::Receiver<SequencerSnapshot>,
    done: watch::Receiver<bool>,
    tick_task: JoinHandle<()>,
    rotate_task: JoinHandle<()>,
}

impl DriverHandle {
    /// Latest published snapshot
    #[must_use]
    pub fn snapshot(&self) -> SequencerSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Subscribe to snapshot updates
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SequencerSnapshot> {
        self.snapshots.clone()
    }

    /// Whether the run has finished
    #[must_use]
    pub fn is_done(&self) -> bool {
        *self.done.borrow()
    }

    /// Resolves once the last stage completes
    ///
    /// The signal fires exactly once per run; awaiting after completion
    /// returns immediately.
    pub async fn completed(&self) {
        let mut done = self.done.clone();
        while !*done.borrow_and_update() {
            if done.changed().await.is_err() {
                // Sender gone: the tick task only exits after signaling
                // completion or being aborted, either way there is nothing
                // left to wait for.
                break;
            }
        }
    }

    /// Stop both timers
    pub fn shutdown(self) {
        tracing::debug!("sequencer driver shut down");
        // Drop aborts the tasks.
    }
}

impl Drop for DriverHandle {
    fn drop(&mut self) {
        self.tick_task.abort();
        self.rotate_task.abort();
    }
}
