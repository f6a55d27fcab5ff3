//! Line-oriented terminal view of the game.
//!
//! [`Screen`] is the view half of the MVI loop: it renders states (reading
//! each one-shot exactly once) and turns typed commands into intentions,
//! remembering what it last showed so intentions carry the on-screen word
//! and translation.

use thiserror::Error;

use crate::game::{GameIntention, GameState, Player};
use crate::mvi::Identified;

pub const HELP: &str = "\
Commands:
  n            next word
  t            next translation
  1-4 [guess]  buzz for player 1-4 (defaults to the shown translation)
  h            help
  q            quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Intention(GameIntention),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}', type h for help")]
    Unknown(String),

    #[error("No word on screen yet, type n first")]
    NoWord,
}

/// What the view currently shows.
#[derive(Debug, Default)]
pub struct Screen {
    word: String,
    translation: String,
    try_count: u32,
}

impl Screen {
    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Render `state` into printable lines, consuming its one-shots.
    pub fn render(&mut self, state: &Identified<GameState>) -> Vec<String> {
        let mut lines = Vec::new();

        if state.fatal_error.get(state) == Some(true) {
            lines.push("!! Something went wrong, try again".to_string());
        }
        if state.is_loading {
            lines.push("Loading words...".to_string());
        }
        if let Some(message) = state.message.get(state) {
            lines.push(format!(">> {}!", message));
        }
        if let Some(translation) = state.translation.get(state) {
            self.translation = translation;
        }

        self.word = state.word.clone();
        self.try_count = state.try_count;

        if !self.word.is_empty() {
            lines.push(format!(
                "Word: {}  Translation: {}  (try {})",
                self.word, self.translation, self.try_count
            ));
        }

        let scores: Vec<String> = state
            .score
            .iter()
            .map(|(player, score)| format!("{}: {}", player, score))
            .collect();
        lines.push(scores.join(" | "));

        lines
    }

    /// Parse one input line against what is on screen.
    pub fn parse(&self, line: &str) -> Result<Command, CommandError> {
        let mut parts = line.split_whitespace();
        let Some(head) = parts.next() else {
            return Err(CommandError::Empty);
        };
        let rest: Vec<&str> = parts.collect();

        match head {
            "q" | "quit" => Ok(Command::Quit),
            "h" | "help" | "?" => Ok(Command::Help),
            "n" | "next" => Ok(Command::Intention(GameIntention::NextWord {
                current_word: self.word.clone(),
            })),
            "t" | "translate" => {
                self.require_word()?;
                Ok(Command::Intention(GameIntention::NextTranslation {
                    word: self.word.clone(),
                    current_translation: self.translation.clone(),
                    try_count: self.try_count,
                }))
            }
            seat => {
                let player = seat
                    .parse::<u8>()
                    .ok()
                    .and_then(Player::from_seat)
                    .ok_or_else(|| CommandError::Unknown(seat.to_string()))?;
                self.require_word()?;
                let guess = if rest.is_empty() {
                    self.translation.clone()
                } else {
                    rest.join(" ")
                };
                Ok(Command::Intention(GameIntention::Buzz {
                    player,
                    word: self.word.clone(),
                    player_translation: guess,
                    try_count: self.try_count,
                }))
            }
        }
    }

    fn require_word(&self) -> Result<(), CommandError> {
        if self.word.is_empty() {
            return Err(CommandError::NoWord);
        }
        Ok(())
    }
}
