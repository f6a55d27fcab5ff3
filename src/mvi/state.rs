//! State traits and identity stamping for MVI architecture.

use std::fmt;
use std::ops::Deref;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

/// Marker trait for UI state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}

/// Identity of a published state snapshot.
///
/// Ids are strictly increasing per [`StateIdGenerator`] and start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(u64);

impl StateId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Anything that can tell which state snapshot it is.
pub trait HasStateId {
    fn state_id(&self) -> StateId;
}

impl HasStateId for StateId {
    fn state_id(&self) -> StateId {
        *self
    }
}

/// Monotonic source of [`StateId`]s.
///
/// Cloning shares the underlying counter. [`StateIdGenerator::global`] hands
/// out the process-wide counter used by default, [`StateIdGenerator::new`]
/// an independent one.
#[derive(Debug, Clone)]
pub struct StateIdGenerator {
    next: Arc<AtomicU64>,
}

static GLOBAL_STATE_IDS: OnceLock<StateIdGenerator> = OnceLock::new();

impl StateIdGenerator {
    pub fn new() -> Self {
        Self {
            next: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Process-wide counter shared by every engine that doesn't inject its own.
    pub fn global() -> Self {
        GLOBAL_STATE_IDS.get_or_init(Self::new).clone()
    }

    /// Allocate the next id.
    pub fn next_id(&self) -> StateId {
        StateId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for StateIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// A state snapshot stamped with a unique identity.
///
/// The id only serves one-shot bookkeeping: equality compares the inner
/// state and ignores the id.
#[derive(Debug, Clone)]
pub struct Identified<S> {
    id: StateId,
    state: S,
}

impl<S> Identified<S> {
    pub fn new(state: S, ids: &StateIdGenerator) -> Self {
        Self {
            id: ids.next_id(),
            state,
        }
    }

    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn into_inner(self) -> S {
        self.state
    }
}

impl<S> HasStateId for Identified<S> {
    fn state_id(&self) -> StateId {
        self.id
    }
}

impl<S> Deref for Identified<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.state
    }
}

impl<S: PartialEq> PartialEq for Identified<S> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Counter(u32);

    #[test]
    fn ids_strictly_increase() {
        let ids = StateIdGenerator::new();
        let first = Identified::new(Counter(0), &ids);
        let second = Identified::new(Counter(0), &ids);
        let third = Identified::new(Counter(1), &ids);
        assert!(first.id() < second.id());
        assert!(second.id() < third.id());
    }

    #[test]
    fn fresh_generator_starts_above_zero() {
        let ids = StateIdGenerator::new();
        assert_eq!(ids.next_id(), StateId::new(1));
    }

    #[test]
    fn equality_ignores_id() {
        let ids = StateIdGenerator::new();
        let a = Identified::new(Counter(7), &ids);
        let b = Identified::new(Counter(7), &ids);
        assert_ne!(a.id(), b.id());
        assert_eq!(a, b);
    }

    #[test]
    fn clones_share_counter() {
        let ids = StateIdGenerator::new();
        let shared = ids.clone();
        let a = ids.next_id();
        let b = shared.next_id();
        assert!(a < b);
    }

    #[test]
    fn global_is_shared() {
        let a = StateIdGenerator::global().next_id();
        let b = StateIdGenerator::global().next_id();
        assert!(a < b);
    }

    #[test]
    fn concurrent_allocation_is_unique() {
        let ids = StateIdGenerator::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = ids.clone();
                std::thread::spawn(move || (0..250).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();
        let mut all: Vec<StateId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 1000);
    }
}
