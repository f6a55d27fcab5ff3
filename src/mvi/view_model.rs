//! The MVI engine: intake, init filter, mapping, processing, fold, replay.

use std::sync::Arc;

use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::intent::Intention;
use super::interactor::Interactor;
use super::reducer::Reducer;
use super::relay::{StateRelay, StateSubscription};
use super::state::{Identified, StateIdGenerator, UiState};

/// Unidirectional state machine for one screen.
///
/// ```text
/// intake ─→ init filter ─→ Action::from ─→ Interactor ─→ Reducer fold
///        ─→ change suppression ─→ relay (replays latest)
/// ```
///
/// The pipeline is spawned in the constructor and keeps running while views
/// come and go. Dropping the view model aborts intake and fold; the closed
/// result stream then makes [`SwitchLanes`](super::SwitchLanes) cancel the
/// interactor's in-flight work. The default state
/// is published immediately, so [`states`](ViewModel::states) never waits
/// for a first event.
pub struct ViewModel<I, S> {
    intake: mpsc::UnboundedSender<I>,
    relay: StateRelay<Identified<S>>,
    tasks: Vec<JoinHandle<()>>,
}

impl<I: Intention, S: UiState> ViewModel<I, S> {
    /// Build the engine, stamping states from the process-wide id counter.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new<R, P>(interactor: P) -> Self
    where
        R: Reducer<State = S>,
        P: Interactor<Result = R::Result>,
        P::Action: From<I>,
    {
        Self::with_id_generator::<R, P>(interactor, StateIdGenerator::global())
    }

    /// Build the engine with its own state id counter.
    pub fn with_id_generator<R, P>(interactor: P, ids: StateIdGenerator) -> Self
    where
        R: Reducer<State = S>,
        P: Interactor<Result = R::Result>,
        P::Action: From<I>,
    {
        let (intake_tx, intake_rx) = mpsc::unbounded_channel();
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let results = Arc::new(interactor).action_processor(action_rx);

        let seed = Identified::new(S::default(), &ids);
        let current = seed.state().clone();
        let relay = StateRelay::new();
        relay.publish(seed);

        let intake_task = tokio::spawn(run_intake::<I, P::Action>(intake_rx, action_tx));
        let fold_task = tokio::spawn(run_fold::<R>(results, relay.clone(), ids, current));

        Self {
            intake: intake_tx,
            relay,
            tasks: vec![intake_task, fold_task],
        }
    }

    /// Feed an intention stream into the shared intake.
    ///
    /// Several feeds may be active at once (e.g. across view re-attachments).
    /// A feed that ends only stops itself; the engine keeps running.
    pub fn process_intentions<St>(&self, intentions: St) -> Subscription
    where
        St: Stream<Item = I> + Send + 'static,
    {
        let intake = self.intake.clone();
        let task = tokio::spawn(async move {
            let mut intentions = Box::pin(intentions);
            while let Some(intention) = intentions.next().await {
                if intake.send(intention).is_err() {
                    tracing::debug!("Intake closed, stopping intention feed");
                    return;
                }
            }
            tracing::trace!("Intention feed completed");
        });
        Subscription { task }
    }

    /// A direct producer into the intake.
    pub fn intentions(&self) -> IntentionSender<I> {
        IntentionSender {
            intake: self.intake.clone(),
        }
    }

    /// Observe states: the latest one first, then every change.
    pub fn states(&self) -> StateSubscription<Identified<S>> {
        self.relay.subscribe()
    }

    pub fn current_state(&self) -> Option<Identified<S>> {
        self.relay.latest()
    }
}

impl<I, S> Drop for ViewModel<I, S> {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

/// Cloneable handle that pushes intentions into a view model's intake.
pub struct IntentionSender<I> {
    intake: mpsc::UnboundedSender<I>,
}

impl<I> IntentionSender<I> {
    /// Returns false if the view model is gone.
    pub fn send(&self, intention: I) -> bool {
        self.intake.send(intention).is_ok()
    }
}

impl<I> Clone for IntentionSender<I> {
    fn clone(&self) -> Self {
        Self {
            intake: self.intake.clone(),
        }
    }
}

/// Disposable handle for one [`ViewModel::process_intentions`] feed.
///
/// Dropping the handle leaves the feed running; call
/// [`dispose`](Subscription::dispose) to stop it.
pub struct Subscription {
    task: JoinHandle<()>,
}

impl Subscription {
    pub fn dispose(&self) {
        self.task.abort();
    }

    /// True once the feed has ended, either by completion or disposal.
    pub fn is_disposed(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait until the feed has forwarded everything its stream produced.
    pub async fn finished(self) {
        let _ = self.task.await;
    }
}

async fn run_intake<I, A>(mut intake: mpsc::UnboundedReceiver<I>, actions: mpsc::UnboundedSender<A>)
where
    I: Intention,
    A: From<I>,
{
    let mut init_seen = false;
    while let Some(intention) = intake.recv().await {
        if intention.is_init() {
            if init_seen {
                tracing::debug!("Dropping repeated init intention");
                continue;
            }
            init_seen = true;
        }
        if actions.send(A::from(intention)).is_err() {
            tracing::warn!("Action processor stopped, closing intake");
            return;
        }
    }
}

/// Closes the relay when the fold ends, including by panic or abort.
struct CloseOnDrop<S: Clone + Send + 'static>(StateRelay<S>);

impl<S: Clone + Send + 'static> Drop for CloseOnDrop<S> {
    fn drop(&mut self) {
        self.0.close();
    }
}

async fn run_fold<R: Reducer>(
    mut results: mpsc::UnboundedReceiver<R::Result>,
    relay: StateRelay<Identified<R::State>>,
    ids: StateIdGenerator,
    mut current: R::State,
) {
    let relay = CloseOnDrop(relay);

    while let Some(result) = results.recv().await {
        let next = R::reduce(current.clone(), result);
        // Keep the published snapshot so its one-shots stay the ones the view reads.
        if next == current {
            tracing::trace!("Reducer produced an equal state, not publishing");
            continue;
        }
        let stamped = Identified::new(next, &ids);
        tracing::trace!(state_id = %stamped.id(), "Publishing state");
        current = stamped.state().clone();
        relay.0.publish(stamped);
    }

    tracing::debug!("Result stream ended, closing state relay");
}
