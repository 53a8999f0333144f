//! Single-flight coordination of the token refresh call.
//!
//! Every request that hits an eligible 401 calls [`RefreshGate::run`]. The
//! first caller starts the refresh; callers arriving while it is in flight
//! await the same shared future. Once it settles the slot is emptied, so a
//! later 401 starts a new refresh.

use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;

/// Outcome of a failed refresh, shared by every waiter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RefreshError {
    #[error("refresh rejected with status {0}")]
    Rejected(u16),
    #[error("refresh transport error: {0}")]
    Transport(String),
}

type SharedRefresh = Shared<BoxFuture<'static, Result<(), RefreshError>>>;

#[derive(Clone, Default)]
pub(crate) struct RefreshGate {
    inflight: Arc<Mutex<Option<SharedRefresh>>>,
    started: Arc<AtomicU64>,
}

impl RefreshGate {
    /// Join the in-flight refresh or start one with `start`.
    pub(crate) async fn run<F, Fut>(&self, start: F) -> Result<(), RefreshError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), RefreshError>> + Send + 'static,
    {
        let shared = {
            let mut slot = self.inflight.lock();
            match slot.as_ref() {
                Some(existing) => {
                    tracing::debug!("joining in-flight token refresh");
                    existing.clone()
                },
                None => {
                    self.started.fetch_add(1, Ordering::Relaxed);
                    let inflight = Arc::clone(&self.inflight);
                    let refresh = start();
                    let shared = async move {
                        let outcome = refresh.await;
                        inflight.lock().take();
                        outcome
                    }
                    .boxed()
                    .shared();
                    *slot = Some(shared.clone());
                    shared
                },
            }
        };
        shared.await
    }

    /// Number of refresh calls started so far.
    pub(crate) fn started(&self) -> u64 {
        self.started.load(Ordering::Relaxed)
    }
}
