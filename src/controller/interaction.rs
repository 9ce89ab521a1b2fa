use crate::client::AnalysisService;
use crate::controller::state::{ControllerSnapshot, ControllerState, StateTag};
use crate::types::ComplianceResponse;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, warn};

/// Message stored when a request ends without a recognizable error (e.g. the
/// task running it panicked).
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

struct Inner {
    query: String,
    state: ControllerState,
    last_request_id: u64,
    in_flight: Option<AbortHandle>,
}

struct Shared {
    inner: Mutex<Inner>,
    updates: watch::Sender<ControllerSnapshot>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, inner: &Inner) {
        self.updates
            .send_replace(ControllerSnapshot::capture(&inner.query, &inner.state));
    }

    /// Apply the outcome of `request_id`, unless a newer request (or a reset)
    /// has superseded it. Returns whether the outcome was applied.
    fn complete(&self, request_id: u64, outcome: ControllerState) -> bool {
        let mut inner = self.lock();
        match inner.state {
            ControllerState::Pending { request_id: current } if current == request_id => {}
            _ => {
                debug!(request_id, "discarding stale analysis outcome");
                return false;
            }
        }
        inner.state = outcome;
        inner.in_flight = None;
        self.publish(&inner);
        true
    }
}

/// Handle to a request started by [`InteractionController::submit`].
///
/// Dropping it does not cancel anything; the outcome still lands in the
/// controller.
#[derive(Debug)]
pub struct PendingRequest {
    request_id: u64,
    task: JoinHandle<()>,
}

impl PendingRequest {
    pub fn id(&self) -> u64 {
        self.request_id
    }

    /// Wait until the outcome has been applied to (or discarded by) the controller.
    pub async fn wait(self) {
        let _ = self.task.await;
    }
}

/// Owns the query text and the request lifecycle for one user-facing session.
///
/// At most one request is in flight per controller. `submit` returns right
/// away; the outcome is applied later from a tokio task and broadcast to every
/// [`subscribe`](Self::subscribe)r. Must be used from within a tokio runtime.
pub struct InteractionController<S> {
    service: Arc<S>,
    shared: Arc<Shared>,
}

impl<S: AnalysisService + 'static> InteractionController<S> {
    pub fn new(service: S) -> Self {
        Self::with_service(Arc::new(service))
    }

    /// Build around a service that is shared with other owners.
    pub fn with_service(service: Arc<S>) -> Self {
        let (updates, _) = watch::channel(ControllerSnapshot::default());
        Self {
            service,
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner {
                    query: String::new(),
                    state: ControllerState::Idle,
                    last_request_id: 0,
                    in_flight: None,
                }),
                updates,
            }),
        }
    }

    pub fn query(&self) -> String {
        self.shared.lock().query.clone()
    }

    /// Replace the query text. Allowed at any time; an in-flight request keeps
    /// the text it was started with.
    pub fn set_query(&self, query: impl Into<String>) {
        let mut inner = self.shared.lock();
        inner.query = query.into();
        self.shared.publish(&inner);
    }

    /// Submit the current query text.
    ///
    /// Returns `None` without doing anything if the query is blank or a request
    /// is already pending. Otherwise clears any previous result or error, moves
    /// to `Pending` and starts the request with the untrimmed query.
    pub fn submit(&self) -> Option<PendingRequest> {
        let mut inner = self.shared.lock();
        if inner.state.is_pending() {
            debug!("submit ignored: a request is already pending");
            return None;
        }
        if inner.query.trim().is_empty() {
            debug!("submit ignored: query is blank");
            return None;
        }

        let query = inner.query.clone();
        inner.last_request_id += 1;
        let request_id = inner.last_request_id;
        inner.state = ControllerState::Pending { request_id };

        let service = Arc::clone(&self.service);
        let call = tokio::spawn(async move { service.submit_analysis(&query).await });
        inner.in_flight = Some(call.abort_handle());
        self.shared.publish(&inner);
        drop(inner);

        debug!(request_id, "analysis request started");
        let shared = Arc::clone(&self.shared);
        let task = tokio::spawn(async move {
            let outcome = match call.await {
                Ok(Ok(response)) => ControllerState::Success(response),
                Ok(Err(e)) => {
                    warn!(request_id, kind = ?e.kind(), error = %e, "analysis request failed");
                    ControllerState::Failed {
                        message: e.user_message(),
                    }
                }
                Err(e) if e.is_cancelled() => {
                    debug!(request_id, "analysis request cancelled");
                    return;
                }
                Err(e) => {
                    warn!(request_id, error = %e, "analysis task ended abnormally");
                    ControllerState::Failed {
                        message: UNEXPECTED_ERROR_MESSAGE.to_string(),
                    }
                }
            };
            shared.complete(request_id, outcome);
        });

        Some(PendingRequest { request_id, task })
    }

    /// Set the query text and submit it.
    pub fn submit_query(&self, query: impl Into<String>) -> Option<PendingRequest> {
        self.set_query(query);
        self.submit()
    }

    /// Abandon any in-flight request and return to `Idle`. The query text is kept.
    pub fn reset(&self) {
        let mut inner = self.shared.lock();
        if let Some(handle) = inner.in_flight.take() {
            handle.abort();
        }
        if inner.state != ControllerState::Idle {
            inner.state = ControllerState::Idle;
            self.shared.publish(&inner);
        }
    }
}

impl<S> InteractionController<S> {
    pub fn state(&self) -> ControllerState {
        self.shared.lock().state.clone()
    }

    pub fn state_tag(&self) -> StateTag {
        self.shared.lock().state.tag()
    }

    /// The response held in `Success`, if any.
    pub fn result(&self) -> Option<ComplianceResponse> {
        self.shared.lock().state.result().cloned()
    }

    /// The message held in `Failed`, if any.
    pub fn error_message(&self) -> Option<String> {
        self.shared.lock().state.error_message().map(str::to_string)
    }

    pub fn is_busy(&self) -> bool {
        self.shared.lock().state.is_pending()
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        let inner = self.shared.lock();
        ControllerSnapshot::capture(&inner.query, &inner.state)
    }

    /// Receive a fresh snapshot after every state or query change.
    pub fn subscribe(&self) -> watch::Receiver<ControllerSnapshot> {
        self.shared.updates.subscribe()
    }
}

impl<S> Drop for InteractionController<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.shared.lock().in_flight.take() {
            handle.abort();
        }
    }
}
