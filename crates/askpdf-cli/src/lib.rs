//! Terminal front end for askpdf

mod assistant;
mod ui;


pub use assistant::PdfAssistant;
pub use ui::{
    print_error, read_query, read_query_from_stdin, write_answer, ANSWER_PREFIX, QUERY_PROMPT,
};

// Re-export core types
pub use askpdf_core::{Error, Result};
