//! Session record for one question/answer/feedback cycle.

use shared::protocol::AskResponse;

/// Client-side state of the active ask cycle. Fields are private on purpose:
/// the UI layer writes `question` through [`SessionState::set_question`],
/// while `loading`/`error`/`response` move only through the `pub(crate)`
/// transitions the query dispatcher applies.
#[derive(Debug, Default)]
pub struct SessionState {
    question: String,
    loading: bool,
    error: Option<String>,
    response: Option<AskResponse>,
}

impl SessionState {
    pub fn set_question(&mut self, question: impl Into<String>) {
        self.question = question.into();
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn response(&self) -> Option<&AskResponse> {
        self.response.as_ref()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            question: self.question.clone(),
            loading: self.loading,
            error: self.error.clone(),
            response: self.response.clone(),
        }
    }

    /// Enters the in-flight window: both previous outcomes are cleared
    /// before the backend call is issued.
    pub(crate) fn begin_ask(&mut self) {
        self.loading = true;
        self.error = None;
        self.response = None;
    }

    pub(crate) fn resolve_success(&mut self, response: AskResponse) {
        self.response = Some(response);
        self.loading = false;
    }

    pub(crate) fn resolve_failure(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    /// A cancelled cycle leaves neither outcome set.
    pub(crate) fn resolve_cancelled(&mut self) {
        self.loading = false;
    }
}

/// Read-only copy handed to the UI layer.
#[derive(Debug, Clone, Default)]
pub struct SessionSnapshot {
    pub question: String,
    pub loading: bool,
    pub error: Option<String>,
    pub response: Option<AskResponse>,
}

impl SessionSnapshot {
    /// Trigger-enablement predicate for submissions: the trimmed question is
    /// non-empty and no cycle is in flight.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.question.trim().is_empty()
    }

    /// Feedback keys are active only while an answer is on screen and no new
    /// ask cycle is in flight.
    pub fn can_send_feedback(&self) -> bool {
        !self.loading && self.response.is_some()
    }
}
