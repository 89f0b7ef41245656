use serde::{Deserialize, Serialize};

/// Structured body an endpoint may attach to a non-2xx response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }

    /// The structured message, if one is present and non-empty.
    pub fn message(&self) -> Option<&str> {
        self.error.as_deref().filter(|message| !message.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_missing_message_yields_none() {
        assert_eq!(ErrorBody::default().message(), None);
        let body: ErrorBody = serde_json::from_str(r#"{"error":""}"#).expect("decode");
        assert_eq!(body.message(), None);
    }

    #[test]
    fn structured_message_is_exposed() {
        assert_eq!(ErrorBody::new("rate limited").message(), Some("rate limited"));

        let body: ErrorBody = serde_json::from_str(r#"{"error":"rate limited"}"#).expect("decode");
        assert_eq!(body.message(), Some("rate limited"));
    }
}
