//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the generic engine behind every screen: the
//! message marker traits, the reducer and interactor contracts, and the
//! [`ViewModel`] that wires them into a single unidirectional pipeline.
//!
//! # Architecture
//!
//! ```text
//! Intention ──→ Action ──→ Interactor ──→ Result ──→ Reducer ──→ State ──→ View
//!     ↑                                                                  │
//!     └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **Intention**: User actions or system events
//! - **Action**: Command derived 1:1 from an intention
//! - **Result**: Outcome of an action's side effect
//! - **Reducer**: Pure function that folds results onto state
//! - **State**: Immutable, identity-stamped snapshot of what the view renders

mod intent;
mod interactor;
mod one_shot;
mod reducer;
mod relay;
mod state;
mod switch;
mod view_model;

pub use intent::{Action, ActionResult, Intention};
pub use interactor::Interactor;
pub use one_shot::OneShot;
pub use reducer::Reducer;
pub use relay::{StateRelay, StateSubscription};
pub use state::{HasStateId, Identified, StateId, StateIdGenerator, UiState};
pub use switch::{Emitter, SwitchLanes};
pub use view_model::{IntentionSender, Subscription, ViewModel};
