use serde::{Deserialize, Serialize};

/// Discriminator value marking a curated knowledge-base answer. Every other
/// value, including a missing one, selects the web variant.
pub const KNOWLEDGE_BASE_SOURCE: &str = "KB";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AskResponse {
    KnowledgeBase {
        question: String,
        solution: String,
        score: Option<f64>,
    },
    Web {
        source: String,
        answer: String,
    },
}

/// Wire shape of the ask response body. Field presence depends on the
/// `source` discriminator, so the typed variant is derived from this raw
/// form instead of a serde-tagged enum.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RawAskResponse {
    #[serde(default)]
    source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    solution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    answer: Option<String>,
}

impl From<RawAskResponse> for AskResponse {
    fn from(raw: RawAskResponse) -> Self {
        if raw.source == KNOWLEDGE_BASE_SOURCE {
            AskResponse::KnowledgeBase {
                question: raw.question.unwrap_or_default(),
                solution: raw.solution.unwrap_or_default(),
                score: raw.score,
            }
        } else {
            AskResponse::Web {
                source: raw.source,
                answer: raw.answer.unwrap_or_default(),
            }
        }
    }
}

impl From<&AskResponse> for RawAskResponse {
    fn from(response: &AskResponse) -> Self {
        match response {
            AskResponse::KnowledgeBase {
                question,
                solution,
                score,
            } => RawAskResponse {
                source: KNOWLEDGE_BASE_SOURCE.to_string(),
                question: Some(question.clone()),
                solution: Some(solution.clone()),
                score: *score,
                answer: None,
            },
            AskResponse::Web { source, answer } => RawAskResponse {
                source: source.clone(),
                question: None,
                solution: None,
                score: None,
                answer: Some(answer.clone()),
            },
        }
    }
}

impl<'de> Deserialize<'de> for AskResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        RawAskResponse::deserialize(deserializer).map(AskResponse::from)
    }
}

impl Serialize for AskResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        RawAskResponse::from(self).serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub question: String,
    pub answer: String,
    pub correct: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
