use std::sync::Arc;
use tokio::sync::watch;

/// Observable screen state.
///
/// Readers get immutable snapshots or a `watch::Receiver`; the owning view
/// model changes the state through `update` only.
pub struct StateHolder<S> {
    sender: Arc<watch::Sender<S>>,
}

impl<S> Clone for StateHolder<S> {
    fn clone(&self) -> Self {
        StateHolder {
            sender: self.sender.clone(),
        }
    }
}

impl<S: Clone> StateHolder<S> {
    pub fn new(initial: S) -> Self {
        StateHolder {
            sender: Arc::new(watch::channel(initial).0),
        }
    }

    pub fn snapshot(&self) -> S {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.sender.subscribe()
    }

    /// Apply `change` and notify subscribers
    pub fn update(&self, change: impl FnOnce(&mut S)) {
        self.sender.send_modify(change);
    }
}
