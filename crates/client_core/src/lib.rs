use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use shared::{
    error::ErrorBody,
    protocol::{AskRequest, AskResponse, FeedbackRequest, HealthResponse},
};
use thiserror::Error;
use tokio::sync::{broadcast, Mutex};
use tracing::{info, warn};

pub mod cancel;
pub mod render;
pub mod session;

pub use cancel::CancelToken;
pub use render::{render, RenderedAnswer};
pub use session::{SessionSnapshot, SessionState};

/// Shown when neither a structured server message nor a transport-level
/// message is available.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Check backend logs.";

#[derive(Debug, Error)]
pub enum AskError {
    /// Empty or whitespace-only question. Prevented proactively by the UI
    /// trigger ([`SessionSnapshot::can_submit`]); the dispatcher never
    /// produces it at runtime.
    #[error("question must not be empty")]
    Validation,
    /// The request never produced a response: backend unreachable or the
    /// transport timed out.
    #[error("{0}")]
    Transport(String),
    /// The backend answered non-2xx with a structured message.
    #[error("{0}")]
    Server(String),
    /// Nothing usable was available.
    #[error("{}", FALLBACK_ERROR_MESSAGE)]
    Unknown,
}

/// Lifecycle notifications broadcast to the UI layer.
#[derive(Debug, Clone)]
pub enum ClientEvent {
    AskStarted,
    AskResolved,
    AskFailed(String),
    AskCancelled,
    FeedbackAcknowledged { correct: bool },
}

/// Terminal state of one ask cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskOutcome {
    Answered,
    Failed(String),
    Cancelled,
}

pub struct TutorClient {
    http: Client,
    backend_url: String,
    session: Mutex<SessionState>,
    events: broadcast::Sender<ClientEvent>,
    cancel: CancelToken,
}

impl TutorClient {
    pub fn new(backend_url: impl Into<String>) -> Arc<Self> {
        let backend_url: String = backend_url.into();
        let (events, _) = broadcast::channel(64);
        Arc::new(Self {
            http: Client::new(),
            backend_url: backend_url.trim_end_matches('/').to_string(),
            session: Mutex::new(SessionState::default()),
            events,
            cancel: CancelToken::new(),
        })
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ClientEvent> {
        self.events.subscribe()
    }

    /// Token cancelling any in-flight ask or feedback request, e.g. at
    /// front-end teardown.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// The question field is the one session field the UI layer writes.
    pub async fn set_question(&self, question: impl Into<String>) {
        self.session.lock().await.set_question(question);
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().await.snapshot()
    }

    /// Runs one ask cycle against the backend.
    ///
    /// Caller obligation: the submission trigger must stay disabled while
    /// the trimmed question is empty or a cycle is already in flight
    /// ([`SessionSnapshot::can_submit`]); the dispatcher does not re-check.
    /// With the trigger disabled during `loading`, at most one ask request
    /// is in flight, so resolutions apply in the order issued.
    pub async fn submit(&self) -> AskOutcome {
        let question = {
            let mut session = self.session.lock().await;
            session.begin_ask();
            session.question().to_string()
        };
        let _ = self.events.send(ClientEvent::AskStarted);

        let outcome = tokio::select! {
            _ = self.cancel.cancelled() => None,
            result = self.post_ask(&question) => Some(result),
        };

        let mut session = self.session.lock().await;
        match outcome {
            None => {
                info!("ask: cycle cancelled");
                session.resolve_cancelled();
                let _ = self.events.send(ClientEvent::AskCancelled);
                AskOutcome::Cancelled
            }
            Some(Ok(response)) => {
                session.resolve_success(response);
                let _ = self.events.send(ClientEvent::AskResolved);
                AskOutcome::Answered
            }
            Some(Err(err)) => {
                let message = err.to_string();
                warn!(error = %message, "ask: cycle failed");
                session.resolve_failure(message.clone());
                let _ = self.events.send(ClientEvent::AskFailed(message.clone()));
                AskOutcome::Failed(message)
            }
        }
    }

    async fn post_ask(&self, question: &str) -> std::result::Result<AskResponse, AskError> {
        let response = self
            .http
            .post(format!("{}/ask", self.backend_url))
            .json(&AskRequest {
                question: question.to_string(),
            })
            .send()
            .await
            .map_err(|err| AskError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.message().map(str::to_string),
                Err(_) => None,
            };
            return Err(match message {
                Some(message) => AskError::Server(message),
                None => AskError::Unknown,
            });
        }

        response
            .json::<AskResponse>()
            .await
            .map_err(|_| AskError::Unknown)
    }

    /// Sends the correctness signal for the answer currently on screen.
    ///
    /// The question and the serialized response are captured before this
    /// returns, so a later edit to the question field cannot change an
    /// already-dispatched payload. The request itself runs on a detached
    /// task the caller does not await: feedback is best-effort, and its
    /// failures are logged but never surfaced.
    pub async fn submit_feedback(self: &Arc<Self>, correct: bool) -> Result<()> {
        let payload = {
            let session = self.session.lock().await;
            let response = session
                .response()
                .ok_or_else(|| anyhow!("no answer is currently displayed"))?;
            FeedbackRequest {
                question: session.question().to_string(),
                answer: serde_json::to_string(response)
                    .context("failed to serialize the displayed answer")?,
                correct,
            }
        };

        let client = Arc::clone(self);
        tokio::spawn(async move {
            tokio::select! {
                _ = client.cancel.cancelled() => {
                    info!("feedback: dropped by cancellation");
                }
                result = client.post_feedback(&payload) => match result {
                    Ok(()) => {
                        let _ = client
                            .events
                            .send(ClientEvent::FeedbackAcknowledged { correct });
                    }
                    Err(err) => {
                        warn!(error = %err, "feedback: submission failed");
                    }
                },
            }
        });

        Ok(())
    }

    async fn post_feedback(&self, payload: &FeedbackRequest) -> Result<()> {
        self.http
            .post(format!("{}/feedback", self.backend_url))
            .json(payload)
            .send()
            .await
            .context("feedback request failed")?
            .error_for_status()
            .context("feedback rejected by backend")?;
        Ok(())
    }

    /// Startup probe against the backend's health route.
    pub async fn check_health(&self) -> Result<()> {
        let response: HealthResponse = self
            .http
            .get(format!("{}/healthz", self.backend_url))
            .send()
            .await
            .context("health probe failed")?
            .error_for_status()
            .context("health probe rejected")?
            .json()
            .await
            .context("health probe returned an invalid body")?;
        info!(status = %response.status, "backend reachable");
        Ok(())
    }
}

#[cfg(test)]
mod tests;
