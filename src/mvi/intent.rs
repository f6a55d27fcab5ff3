//! Marker traits for the messages flowing through the MVI pipeline.

/// Marker trait for intention objects.
///
/// Intentions represent:
/// - User actions (button clicks, typed commands)
/// - System events (screen became active)
///
/// Intentions are mapped 1:1 onto [`Action`]s before reaching business logic.
pub trait Intention: Send + 'static {
    /// Whether this is the feature's init intention ("screen became active").
    ///
    /// The engine lets only the first init intention through for its whole
    /// lifetime, so re-attaching a view does not reload data.
    fn is_init(&self) -> bool {
        false
    }
}

/// Marker trait for actions dispatched to an [`Interactor`](super::Interactor).
///
/// The mapping from intention to action is a plain `From` impl with an
/// exhaustive `match`, so an unmapped intention variant fails to compile.
pub trait Action: Send + 'static {}

/// Marker trait for the outcome of an action's side effect.
///
/// Results and the previous state are the only inputs of the reducer.
pub trait ActionResult: Send + 'static {}
