use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::mvi::{Interactor, SwitchLanes};
use crate::repository::GameRepository;
use crate::usecase::{BuzzUseCase, FetchWordsUseCase, NextTranslationUseCase, NextWordUseCase};

use super::intent::GameAction;
use super::result::{GameResult, PlayerState};

/// Game business logic: one latest-wins lane per action kind.
pub struct GameInteractor {
    fetch_words: FetchWordsUseCase,
    next_word: NextWordUseCase,
    next_translation: NextTranslationUseCase,
    buzz: BuzzUseCase,
}

impl GameInteractor {
    pub fn new(repository: Arc<GameRepository>, config: &GameConfig) -> Self {
        Self {
            fetch_words: FetchWordsUseCase::new(Arc::clone(&repository)),
            next_word: NextWordUseCase::new(Arc::clone(&repository)),
            next_translation: NextTranslationUseCase::new(Arc::clone(&repository), config),
            buzz: BuzzUseCase::new(repository),
        }
    }
}

impl Interactor for GameInteractor {
    type Action = GameAction;
    type Result = GameResult;

    fn action_processor(
        self: Arc<Self>,
        mut actions: mpsc::UnboundedReceiver<GameAction>,
    ) -> mpsc::UnboundedReceiver<GameResult> {
        let (results_tx, results_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut lanes = SwitchLanes::new(results_tx);

            while let Some(action) = actions.recv().await {
                tracing::debug!(?action, "Dispatching action");
                let this = Arc::clone(&self);
                let kind = action.kind();

                match action {
                    GameAction::Init => lanes.switch(kind, move |emit| async move {
                        emit.emit(GameResult::FetchStart);
                        let result = this
                            .fetch_words
                            .execute()
                            .await
                            .map(|()| GameResult::FetchFinish);
                        emit.emit(recover("init", result));
                    }),
                    GameAction::NextWord { current_word } => {
                        lanes.switch(kind, move |emit| async move {
                            let result = this.next_word.execute(&current_word).map(
                                |(word, next_translation)| GameResult::NextWord {
                                    word,
                                    next_translation,
                                },
                            );
                            emit.emit(recover("next_word", result));
                        })
                    }
                    GameAction::NextTranslation {
                        word,
                        current_translation,
                        try_count,
                    } => lanes.switch(kind, move |emit| async move {
                        let result = this
                            .next_translation
                            .execute(&word, &current_translation, try_count)
                            .map(|translation| GameResult::NextTranslation { translation });
                        emit.emit(recover("next_translation", result));
                    }),
                    GameAction::Buzz {
                        player,
                        word,
                        player_translation,
                        ..
                    } => lanes.switch(kind, move |emit| async move {
                        let result = this.buzz.execute(&word, &player_translation).map(|right| {
                            GameResult::PlayerChange {
                                player,
                                state: if right {
                                    PlayerState::RightAnswer
                                } else {
                                    PlayerState::WrongAnswer
                                },
                            }
                        });
                        emit.emit(recover("buzz", result));
                    }),
                }
            }

            lanes.join().await;
            tracing::debug!("Action stream ended");
        });

        results_rx
    }
}

/// Map a failed action to the error result so the result stream never fails.
fn recover(action: &'static str, result: Result<GameResult, GameError>) -> GameResult {
    match result {
        Ok(result) => result,
        Err(err) if err.is_network() => {
            tracing::debug!(action, error = %err, "Action failed");
            GameResult::Error
        }
        Err(err) => {
            tracing::error!(action, error = %err, "Action failed");
            GameResult::Error
        }
    }
}
