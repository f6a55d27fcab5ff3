use crate::mvi::ActionResult;

use super::intent::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    RightAnswer,
    WrongAnswer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    FetchStart,
    FetchFinish,
    NextWord {
        word: String,
        next_translation: String,
    },
    NextTranslation {
        translation: String,
    },
    PlayerChange {
        player: Player,
        state: PlayerState,
    },
    Error,
}

impl ActionResult for GameResult {}
