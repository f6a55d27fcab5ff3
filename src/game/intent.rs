use std::fmt;

use crate::mvi::{Action, Intention};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Player {
    One,
    Two,
    Three,
    Four,
}

impl Player {
    pub const ALL: [Player; 4] = [Player::One, Player::Two, Player::Three, Player::Four];

    /// Player by seat number, 1-based.
    pub fn from_seat(seat: u8) -> Option<Self> {
        match seat {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            3 => Some(Player::Three),
            4 => Some(Player::Four),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
            Player::Three => "Player 3",
            Player::Four => "Player 4",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameIntention {
    /// Game screen became active. Only the first one is processed.
    Init,
    NextWord {
        current_word: String,
    },
    NextTranslation {
        word: String,
        current_translation: String,
        try_count: u32,
    },
    Buzz {
        player: Player,
        word: String,
        player_translation: String,
        try_count: u32,
    },
}

impl Intention for GameIntention {
    fn is_init(&self) -> bool {
        matches!(self, GameIntention::Init)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameAction {
    Init,
    NextWord {
        current_word: String,
    },
    NextTranslation {
        word: String,
        current_translation: String,
        try_count: u32,
    },
    Buzz {
        player: Player,
        word: String,
        player_translation: String,
        try_count: u32,
    },
}

impl Action for GameAction {}

/// Lane key: one latest-wins lane per action kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Init,
    NextWord,
    NextTranslation,
    Buzz,
}

impl GameAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            GameAction::Init => ActionKind::Init,
            GameAction::NextWord { .. } => ActionKind::NextWord,
            GameAction::NextTranslation { .. } => ActionKind::NextTranslation,
            GameAction::Buzz { .. } => ActionKind::Buzz,
        }
    }
}

impl From<GameIntention> for GameAction {
    fn from(intention: GameIntention) -> Self {
        match intention {
            GameIntention::Init => GameAction::Init,
            GameIntention::NextWord { current_word } => GameAction::NextWord { current_word },
            GameIntention::NextTranslation {
                word,
                current_translation,
                try_count,
            } => GameAction::NextTranslation {
                word,
                current_translation,
                try_count,
            },
            GameIntention::Buzz {
                player,
                word,
                player_translation,
                try_count,
            } => GameAction::Buzz {
                player,
                word,
                player_translation,
                try_count,
            },
        }
    }
}
