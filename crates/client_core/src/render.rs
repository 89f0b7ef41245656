//! Pure mapping from a backend response to its presentation structure.

use shared::protocol::AskResponse;

pub const KNOWLEDGE_BASE_LABEL: &str = "Knowledge Base";
pub const WEB_LABEL: &str = "Web";

/// Display structure derived from one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedAnswer {
    /// Curated hit: the echoed question plus the solution text, shown
    /// verbatim with its whitespace preserved.
    KnowledgeBase { question: String, solution: String },
    /// Open-ended lookup: the answer's non-blank lines as an ordered list.
    Web { items: Vec<String> },
}

impl RenderedAnswer {
    pub fn source_label(&self) -> &'static str {
        match self {
            RenderedAnswer::KnowledgeBase { .. } => KNOWLEDGE_BASE_LABEL,
            RenderedAnswer::Web { .. } => WEB_LABEL,
        }
    }
}

/// Derives the display structure for a response. Idempotent; never mutates
/// its input. The web branch keeps lines in source order and drops only
/// those that are empty or whitespace-only.
pub fn render(response: &AskResponse) -> RenderedAnswer {
    match response {
        AskResponse::KnowledgeBase {
            question, solution, ..
        } => RenderedAnswer::KnowledgeBase {
            question: question.clone(),
            solution: solution.clone(),
        },
        AskResponse::Web { answer, .. } => RenderedAnswer::Web {
            items: answer
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
        },
    }
}
