//! Single-writer multicast of states that replays the latest one.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::Stream;
use parking_lot::Mutex;
use tokio::sync::mpsc;

struct RelayInner<S> {
    latest: Option<S>,
    subscribers: Vec<mpsc::UnboundedSender<S>>,
    closed: bool,
}

/// Hot state stream with a replay buffer of one.
///
/// Every subscriber first receives the latest published value (if any),
/// then every value published after it, in order and without loss.
/// Subscribing and publishing take the same lock, so a new subscriber can
/// neither miss nor duplicate the value current at subscription time.
pub struct StateRelay<S> {
    inner: Arc<Mutex<RelayInner<S>>>,
}

impl<S: Clone + Send + 'static> StateRelay<S> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(RelayInner {
                latest: None,
                subscribers: Vec::new(),
                closed: false,
            })),
        }
    }

    /// Cache `value` and push it to every live subscriber.
    pub fn publish(&self, value: S) {
        let mut inner = self.inner.lock();
        if inner.closed {
            return;
        }
        inner
            .subscribers
            .retain(|subscriber| subscriber.send(value.clone()).is_ok());
        inner.latest = Some(value);
    }

    pub fn subscribe(&self) -> StateSubscription<S> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = self.inner.lock();
        if let Some(latest) = &inner.latest {
            // Receiver is alive, send can't fail
            let _ = tx.send(latest.clone());
        }
        if !inner.closed {
            inner.subscribers.push(tx);
        }
        StateSubscription { rx }
    }

    pub fn latest(&self) -> Option<S> {
        self.inner.lock().latest.clone()
    }

    /// Stop accepting values. Subscribers drain what they have, then end.
    pub fn close(&self) {
        let mut inner = self.inner.lock();
        inner.closed = true;
        inner.subscribers.clear();
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.len()
    }
}

impl<S: Clone + Send + 'static> Default for StateRelay<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for StateRelay<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// One observer's view of a [`StateRelay`].
///
/// Dropping the subscription detaches the observer; the relay prunes it on
/// the next publish.
pub struct StateSubscription<S> {
    rx: mpsc::UnboundedReceiver<S>,
}

impl<S> StateSubscription<S> {
    /// Next state, or `None` once the relay is closed and drained.
    pub async fn recv(&mut self) -> Option<S> {
        self.rx.recv().await
    }

    /// Next state if one is already queued.
    pub fn try_recv(&mut self) -> Option<S> {
        self.rx.try_recv().ok()
    }
}

impl<S> Stream for StateSubscription<S> {
    type Item = S;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S>> {
        self.rx.poll_recv(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn late_subscriber_gets_latest_then_rest() {
        let relay = StateRelay::new();
        relay.publish(1);
        relay.publish(2);

        let mut late = relay.subscribe();
        relay.publish(3);

        assert_eq!(late.try_recv(), Some(2));
        assert_eq!(late.try_recv(), Some(3));
        assert_eq!(late.try_recv(), None);
    }

    #[test]
    fn subscriber_before_first_value_gets_nothing_replayed() {
        let relay: StateRelay<u8> = StateRelay::new();
        let mut early = relay.subscribe();
        assert_eq!(early.try_recv(), None);
        relay.publish(5);
        assert_eq!(early.try_recv(), Some(5));
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let relay = StateRelay::new();
        let first = relay.subscribe();
        let _second = relay.subscribe();
        assert_eq!(relay.subscriber_count(), 2);

        drop(first);
        relay.publish("x");
        assert_eq!(relay.subscriber_count(), 1);
    }

    #[tokio::test]
    async fn close_ends_subscriptions_after_drain() {
        let relay = StateRelay::new();
        let mut sub = relay.subscribe();
        relay.publish(1);
        relay.close();
        relay.publish(2);

        assert_eq!(sub.recv().await, Some(1));
        assert_eq!(sub.recv().await, None);
        assert_eq!(relay.latest(), Some(1));
    }
}
