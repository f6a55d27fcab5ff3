//! Business-logic contract behind a view model.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::intent::{Action, ActionResult};

/// Turns a stream of actions into a stream of results.
///
/// Implementations dispatch each action kind to its own lane (see
/// [`SwitchLanes`](super::SwitchLanes)): a new action of a kind cancels the
/// work still in flight for that kind, while different kinds run side by
/// side and their results interleave in completion order.
///
/// The returned stream is infallible. Handler failures must be mapped to a
/// result value (typically an `Error` variant) inside the lane. The stream
/// ends once `actions` is closed and every lane has finished.
pub trait Interactor: Send + Sync + 'static {
    type Action: Action;
    type Result: ActionResult;

    /// Start processing. Must be called from within a Tokio runtime.
    fn action_processor(
        self: Arc<Self>,
        actions: mpsc::UnboundedReceiver<Self::Action>,
    ) -> mpsc::UnboundedReceiver<Self::Result>;
}
