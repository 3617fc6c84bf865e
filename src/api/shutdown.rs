//! Fatal-shutdown signal shared between handlers and the server loop.
//!
//! A handler that hits an unrecoverable condition (the config file became
//! unreadable) trips the signal; the server stops accepting connections and
//! `main` exits non-zero once in-flight requests finish.

use std::sync::Arc;
use tokio::sync::watch;

/// Cloneable handle to a one-way "the process cannot continue" flag.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<Option<String>>>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Trip the signal. Only the first reason is kept.
    pub fn trigger(&self, reason: impl Into<String>) {
        let reason = reason.into();
        self.tx.send_if_modified(|current| {
            if current.is_some() {
                return false;
            }
            *current = Some(reason);
            true
        });
    }

    /// The reason the signal was tripped, if it was.
    pub fn reason(&self) -> Option<String> {
        self.tx.borrow().clone()
    }

    /// Resolves once the signal has been tripped.
    pub async fn triggered(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives in `self`, so this can't observe a closed channel
        let _ = rx.wait_for(Option::is_some).await;
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
