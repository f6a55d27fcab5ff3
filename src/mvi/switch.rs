//! Latest-wins task lanes, one per action kind.

use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Handle a lane's task uses to publish results.
///
/// Results are delivered only while the task's generation is still the
/// lane's current one. Once a newer action of the same kind has switched
/// the lane, every emit is dropped.
pub struct Emitter<R> {
    results: mpsc::UnboundedSender<R>,
    lane: Arc<Mutex<u64>>,
    generation: u64,
}

impl<R> Emitter<R> {
    /// Publish `result`. Returns false if the lane has moved on or the
    /// result stream is closed.
    pub fn emit(&self, result: R) -> bool {
        // Held across the send so a concurrent switch can't interleave.
        let current = self.lane.lock();
        if *current != self.generation {
            return false;
        }
        self.results.send(result).is_ok()
    }

    pub fn is_current(&self) -> bool {
        *self.lane.lock() == self.generation
    }
}

struct Lane {
    generation: Arc<Mutex<u64>>,
    task: Option<JoinHandle<()>>,
}

/// Per-kind switch: starting work for a kind cancels the previous work of
/// the same kind. Kinds are independent of each other.
pub struct SwitchLanes<K, R> {
    results: mpsc::UnboundedSender<R>,
    lanes: HashMap<K, Lane>,
}

impl<K, R> SwitchLanes<K, R>
where
    K: Eq + Hash + Debug,
    R: Send + 'static,
{
    pub fn new(results: mpsc::UnboundedSender<R>) -> Self {
        Self {
            results,
            lanes: HashMap::new(),
        }
    }

    /// Run `work` on the lane for `kind`, aborting whatever that lane was
    /// still doing.
    pub fn switch<F, Fut>(&mut self, kind: K, work: F)
    where
        F: FnOnce(Emitter<R>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let lane = self.lanes.entry(kind).or_insert_with(|| Lane {
            generation: Arc::new(Mutex::new(0)),
            task: None,
        });

        let generation = {
            let mut current = lane.generation.lock();
            *current += 1;
            *current
        };

        if let Some(previous) = lane.task.take() {
            if !previous.is_finished() {
                tracing::trace!(generation, "Cancelling in-flight work");
            }
            previous.abort();
        }

        let emitter = Emitter {
            results: self.results.clone(),
            lane: Arc::clone(&lane.generation),
            generation,
        };
        lane.task = Some(tokio::spawn(work(emitter)));
    }

    /// Wait for the current task of every lane to finish.
    ///
    /// Gives up once the result stream's receiver is gone; the remaining
    /// lanes are aborted on drop.
    pub async fn join(mut self) {
        let results = self.results.clone();
        for (kind, lane) in self.lanes.iter_mut() {
            let Some(task) = lane.task.as_mut() else {
                continue;
            };
            tokio::select! {
                joined = task => {
                    if let Err(err) = joined {
                        if err.is_panic() {
                            tracing::error!(?kind, "Lane task panicked");
                        }
                    }
                }
                _ = results.closed() => {
                    tracing::debug!("Result stream dropped, cancelling lanes");
                    return;
                }
            }
        }
    }
}

impl<K, R> Drop for SwitchLanes<K, R> {
    fn drop(&mut self) {
        for lane in self.lanes.values() {
            if let Some(task) = &lane.task {
                task.abort();
            }
        }
    }
}
