use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub words: WordsConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where and how to fetch the word list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordsConfig {
    /// URL of the JSON word list.
    #[serde(default = "default_words_url")]
    pub url: String,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Game rule tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Lower bound (inclusive) of the random try threshold after which the
    /// right translation is offered (default: 3).
    #[serde(default = "default_right_answer_min_tries")]
    pub right_answer_min_tries: u32,
    /// Upper bound (exclusive) of that threshold (default: 6).
    #[serde(default = "default_right_answer_max_tries")]
    pub right_answer_max_tries: u32,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_words_url() -> String {
    "https://gist.githubusercontent.com/DroidCoder/7ac6cdb4bf5e032f4c737aaafe659b33/raw/baa9fe0d586082d85db71f346e2b039c580c5804/words.json".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_right_answer_min_tries() -> u32 {
    3
}

fn default_right_answer_max_tries() -> u32 {
    6
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            url: default_words_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            right_answer_min_tries: default_right_answer_min_tries(),
            right_answer_max_tries: default_right_answer_max_tries(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}
