use crate::render::{render, RenderedAnswer, KNOWLEDGE_BASE_LABEL, WEB_LABEL};
use shared::protocol::AskResponse;

fn web(answer: &str) -> AskResponse {
    AskResponse::Web {
        source: "WEB".to_string(),
        answer: answer.to_string(),
    }
}

#[test]
fn kb_answer_preserves_solution_whitespace() {
    let response = AskResponse::KnowledgeBase {
        question: "2+2".to_string(),
        solution: "  step 1\n    step 2\n".to_string(),
        score: Some(0.8),
    };
    let rendered = render(&response);
    assert_eq!(rendered.source_label(), KNOWLEDGE_BASE_LABEL);
    assert_eq!(
        rendered,
        RenderedAnswer::KnowledgeBase {
            question: "2+2".to_string(),
            solution: "  step 1\n    step 2\n".to_string(),
        }
    );
}

#[test]
fn web_answer_keeps_non_blank_lines_in_source_order() {
    let RenderedAnswer::Web { items } = render(&web(" first \n\n\t\nsecond\nfirst\n")) else {
        panic!("expected the web branch");
    };
    // Order preserved, duplicates kept, inner whitespace untouched.
    assert_eq!(
        items,
        vec![
            " first ".to_string(),
            "second".to_string(),
            "first".to_string(),
        ]
    );
}

#[test]
fn item_count_matches_non_blank_line_count() {
    let RenderedAnswer::Web { items } = render(&web("Line1\n\nLine2\n   \nLine3")) else {
        panic!("expected the web branch");
    };
    assert_eq!(items.len(), 3);
}

#[test]
fn blank_only_answer_renders_no_items() {
    let RenderedAnswer::Web { items } = render(&web("\n   \n\t\n")) else {
        panic!("expected the web branch");
    };
    assert!(items.is_empty());
}

#[test]
fn unrecognized_source_takes_the_web_branch() {
    let response: AskResponse =
        serde_json::from_str(r#"{"source":"Cache","answer":"hit"}"#).expect("decode");
    assert_eq!(render(&response).source_label(), WEB_LABEL);
}

#[test]
fn rendering_is_idempotent() {
    let kb = AskResponse::KnowledgeBase {
        question: "2+2".to_string(),
        solution: "4".to_string(),
        score: None,
    };
    assert_eq!(render(&kb), render(&kb));

    let lookup = web("Line1\n\nLine2");
    assert_eq!(render(&lookup), render(&lookup));
}
