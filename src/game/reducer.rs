use crate::mvi::{OneShot, Reducer};

use super::result::{GameResult, PlayerState};
use super::state::GameState;

pub struct GameReducer;

impl Reducer for GameReducer {
    type State = GameState;
    type Result = GameResult;

    fn reduce(state: Self::State, result: Self::Result) -> Self::State {
        match result {
            GameResult::FetchStart => GameState {
                is_loading: true,
                ..state
            },
            GameResult::FetchFinish => GameState {
                is_loading: false,
                ..state
            },
            GameResult::Error => GameState {
                fatal_error: OneShot::new(true),
                ..state
            },
            GameResult::PlayerChange { player, state: answer } => {
                let mut score = state.score;
                let entry = score.entry(player).or_insert(0);
                let message = match answer {
                    PlayerState::RightAnswer => {
                        *entry += 1;
                        "Right"
                    }
                    PlayerState::WrongAnswer => {
                        *entry -= 1;
                        "Wrong"
                    }
                };
                GameState {
                    score,
                    message: OneShot::new(message.to_string()),
                    ..state
                }
            }
            GameResult::NextWord {
                word,
                next_translation,
            } => GameState {
                word,
                translation: OneShot::new(next_translation),
                try_count: 0,
                ..state
            },
            GameResult::NextTranslation { translation } => GameState {
                translation: OneShot::new(translation),
                try_count: state.try_count + 1,
                ..state
            },
        }
    }
}
