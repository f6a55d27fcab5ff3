//! Values delivered to exactly one state read.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use super::state::{HasStateId, StateId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Claim {
    Unclaimed,
    By(StateId),
    /// Pre-claimed marker carried by empty one-shots.
    Sentinel,
}

struct Inner<T> {
    value: Option<T>,
    claim: Mutex<Claim>,
}

/// Wraps a value that a view should act on once (a toast, an animation).
///
/// The first [`get`](OneShot::get) returns the value and records which state
/// snapshot consumed it. Every later call returns `None`, whichever state is
/// passed, the consuming one included.
///
/// Clones share the claim, so a state carried forward by the reducer does
/// not re-fire a value that an earlier snapshot already handed out.
/// Consumption is expected to be sequential (one renderer).
pub struct OneShot<T> {
    inner: Arc<Inner<T>>,
}

impl<T> OneShot<T> {
    pub fn new(value: T) -> Self {
        Self::with_claim(Some(value), Claim::Unclaimed)
    }

    /// An empty one-shot, already marked consumed.
    ///
    /// Each call allocates its own cell; a shared static can't be generic
    /// over `T`. Empties still compare equal since equality looks at the
    /// value and the claim, not the allocation.
    pub fn empty() -> Self {
        Self::with_claim(None, Claim::Sentinel)
    }

    fn with_claim(value: Option<T>, claim: Claim) -> Self {
        Self {
            inner: Arc::new(Inner {
                value,
                claim: Mutex::new(claim),
            }),
        }
    }

    /// Look at the value without consuming it.
    pub fn peek(&self) -> Option<&T> {
        self.inner.value.as_ref()
    }

    pub fn is_consumed(&self) -> bool {
        *self.inner.claim.lock() != Claim::Unclaimed
    }

    /// The state that consumed the value, if any did.
    pub fn consumed_by(&self) -> Option<StateId> {
        match *self.inner.claim.lock() {
            Claim::By(id) => Some(id),
            Claim::Unclaimed | Claim::Sentinel => None,
        }
    }

    fn claim(&self, id: StateId) -> bool {
        let mut claim = self.inner.claim.lock();
        if *claim != Claim::Unclaimed {
            return false;
        }
        *claim = Claim::By(id);
        true
    }
}

impl<T: Clone> OneShot<T> {
    /// Read the value on behalf of `state`. Returns it only on the first read.
    pub fn get(&self, state: &impl HasStateId) -> Option<T> {
        self.get_by_id(state.state_id())
    }

    pub fn get_by_id(&self, id: StateId) -> Option<T> {
        if self.claim(id) {
            self.inner.value.clone()
        } else {
            None
        }
    }
}

impl<T> Clone for OneShot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for OneShot<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for OneShot<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::new(value),
            None => Self::empty(),
        }
    }
}

/// Equal when both the value and the claim bookkeeping match.
impl<T: PartialEq> PartialEq for OneShot<T> {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.inner, &other.inner) {
            return true;
        }
        self.inner.value == other.inner.value
            && *self.inner.claim.lock() == *other.inner.claim.lock()
    }
}

impl<T: fmt::Debug> fmt::Debug for OneShot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneShot")
            .field("value", &self.inner.value)
            .field("claim", &*self.inner.claim.lock())
            .finish()
    }
}
