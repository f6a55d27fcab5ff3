//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::{mpsc, Notify};

use wordbattle::game::{GameAction, GameResult};
use wordbattle::mvi::{Interactor, StateSubscription};
use wordbattle::repository::{GameRepository, RepositoryError, Word, WordApi};

pub const STATE_TIMEOUT: Duration = Duration::from_secs(2);

/// Wait for the next item on a state subscription.
pub async fn next_state<S>(states: &mut StateSubscription<S>) -> S {
    tokio::time::timeout(STATE_TIMEOUT, states.recv())
        .await
        .expect("timed out waiting for state")
        .expect("state stream ended")
}

/// Let the pipeline settle, then assert nothing else was published.
pub async fn assert_no_more_states<S: std::fmt::Debug>(states: &mut StateSubscription<S>) {
    tokio::time::sleep(Duration::from_millis(100)).await;
    if let Some(extra) = states.try_recv() {
        panic!("unexpected extra state: {:?}", extra);
    }
}

pub fn words(pairs: &[(&str, &str)]) -> Vec<Word> {
    pairs.iter().map(|(w, t)| Word::new(*w, *t)).collect()
}

// -- Word API fakes -----------------------------------------------------------

/// Always answers with the same list.
pub struct StubWordApi(pub Vec<Word>);

#[async_trait]
impl WordApi for StubWordApi {
    async fn words(&self) -> Result<Vec<Word>, RepositoryError> {
        Ok(self.0.clone())
    }
}

/// Always fails with a status error.
pub struct FailingWordApi;

#[async_trait]
impl WordApi for FailingWordApi {
    async fn words(&self) -> Result<Vec<Word>, RepositoryError> {
        Err(RepositoryError::Status { status: 503 })
    }
}

/// First call signals `started` and never finishes; later calls answer with `later`.
pub struct HangingFirstCallApi {
    pub started: Arc<Notify>,
    pub later: Vec<Word>,
    calls: Mutex<u32>,
}

impl HangingFirstCallApi {
    pub fn new(later: Vec<Word>) -> Self {
        Self {
            started: Arc::new(Notify::new()),
            later,
            calls: Mutex::new(0),
        }
    }
}

#[async_trait]
impl WordApi for HangingFirstCallApi {
    async fn words(&self) -> Result<Vec<Word>, RepositoryError> {
        let call = {
            let mut calls = self.calls.lock();
            *calls += 1;
            *calls
        };
        if call == 1 {
            self.started.notify_one();
            std::future::pending::<()>().await;
        }
        Ok(self.later.clone())
    }
}

pub async fn loaded_repository(pairs: &[(&str, &str)]) -> Arc<GameRepository> {
    let repository = Arc::new(GameRepository::new(Arc::new(StubWordApi(words(pairs)))));
    repository.fetch_words().await.expect("stub fetch");
    repository
}

// -- Interactor fakes ---------------------------------------------------------

/// Answers every action with a scripted list of results, in order.
pub struct ScriptedInteractor {
    script: Box<dyn Fn(&GameAction) -> Vec<GameResult> + Send + Sync>,
}

impl ScriptedInteractor {
    pub fn new(script: impl Fn(&GameAction) -> Vec<GameResult> + Send + Sync + 'static) -> Self {
        Self {
            script: Box::new(script),
        }
    }
}

impl Interactor for ScriptedInteractor {
    type Action = GameAction;
    type Result = GameResult;

    fn action_processor(
        self: Arc<Self>,
        mut actions: mpsc::UnboundedReceiver<GameAction>,
    ) -> mpsc::UnboundedReceiver<GameResult> {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            while let Some(action) = actions.recv().await {
                for result in (self.script)(&action) {
                    if tx.send(result).is_err() {
                        return;
                    }
                }
            }
        });
        rx
    }
}

/// Forwards every dispatched action to the test and produces no results.
pub struct RecordingInteractor {
    seen: mpsc::UnboundedSender<GameAction>,
}

impl RecordingInteractor {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<GameAction>) {
        let (seen, rx) = mpsc::unbounded_channel();
        (Self { seen }, rx)
    }
}

impl Interactor for RecordingInteractor {
    type Action = GameAction;
    type Result = GameResult;

    fn action_processor(
        self: Arc<Self>,
        mut actions: mpsc::UnboundedReceiver<GameAction>,
    ) -> mpsc::UnboundedReceiver<GameResult> {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            let _results = tx;
            while let Some(action) = actions.recv().await {
                let _ = self.seen.send(action);
            }
        });
        rx
    }
}

/// Drain a result stream until it ends.
pub async fn collect_results(mut results: mpsc::UnboundedReceiver<GameResult>) -> Vec<GameResult> {
    let mut collected = Vec::new();
    loop {
        match tokio::time::timeout(STATE_TIMEOUT, results.recv()).await {
            Ok(Some(result)) => collected.push(result),
            Ok(None) => return collected,
            Err(_) => panic!("result stream did not end, got so far: {:?}", collected),
        }
    }
}
