use std::collections::BTreeMap;

use crate::mvi::{OneShot, UiState};

use super::intent::Player;

/// Everything the game screen renders.
///
/// `translation`, `message` and `fatal_error` are one-shots: the view acts on
/// them once (animate the new candidate, show a toast) even if it renders
/// the same state again.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub word: String,
    pub translation: OneShot<String>,
    pub is_loading: bool,
    pub score: BTreeMap<Player, i32>,
    pub try_count: u32,
    pub message: OneShot<String>,
    pub fatal_error: OneShot<bool>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            word: String::new(),
            translation: OneShot::empty(),
            is_loading: false,
            score: Player::ALL.iter().map(|p| (*p, 0)).collect(),
            try_count: 0,
            message: OneShot::empty(),
            fatal_error: OneShot::empty(),
        }
    }
}

impl UiState for GameState {}

impl GameState {
    pub fn score_of(&self, player: Player) -> i32 {
        self.score.get(&player).copied().unwrap_or(0)
    }
}
