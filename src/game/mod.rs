//! The game screen: intentions, results, state and the logic behind them.

mod intent;
mod interactor;
mod reducer;
mod result;
mod state;

pub use intent::{ActionKind, GameAction, GameIntention, Player};
pub use interactor::GameInteractor;
pub use reducer::GameReducer;
pub use result::{GameResult, PlayerState};
pub use state::GameState;

use crate::mvi::{Interactor, StateIdGenerator, ViewModel};

pub type GameViewModel = ViewModel<GameIntention, GameState>;

/// Wire a game view model around any interactor speaking the game's actions.
///
/// Must be called from within a Tokio runtime.
pub fn view_model<P>(interactor: P) -> GameViewModel
where
    P: Interactor<Action = GameAction, Result = GameResult>,
{
    ViewModel::new::<GameReducer, P>(interactor)
}

/// Like [`view_model`], with a dedicated state id counter.
pub fn view_model_with_ids<P>(interactor: P, ids: StateIdGenerator) -> GameViewModel
where
    P: Interactor<Action = GameAction, Result = GameResult>,
{
    ViewModel::with_id_generator::<GameReducer, P>(interactor, ids)
}
