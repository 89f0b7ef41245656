//! Terminal presentation of rendered answers.

use client_core::RenderedAnswer;

pub fn print_answer(rendered: &RenderedAnswer) {
    println!("Answer");
    println!("  Source: {}", rendered.source_label());
    match rendered {
        RenderedAnswer::KnowledgeBase { question, solution } => {
            println!("  Question: {question}");
            // Solution text is preformatted; print it verbatim.
            println!("{solution}");
        }
        RenderedAnswer::Web { items } => {
            for (index, item) in items.iter().enumerate() {
                println!("  {}. {item}", index + 1);
            }
        }
    }
}

pub fn print_error(message: &str) {
    println!("Error: {message}");
}
