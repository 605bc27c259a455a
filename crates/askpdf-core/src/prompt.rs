//! System prompt template and conversation assembly

use crate::{ChatMessage, Conversation};

/// Placeholder in [`SYSTEM_PROMPT_TEMPLATE`] replaced by the context block
pub const CONTEXT_PLACEHOLDER: &str = "{context}";

/// Instructions sent as the system message.
///
/// The wording is reproduced verbatim, including the `SystemError` token
/// glued to the end of the second paragraph, which looks like an editing
/// leftover.
pub const SYSTEM_PROMPT_TEMPLATE: &str = "
You are a helpful AI assistant who answers user queries based on the available
context retrieved from a PDF file along with page_content and page number.

You should only provide answers the user based on the following context and navigate the
user to open the right page number to know more.SystemError

Context:
{context}
";

/// Fill the template with the context block.
///
/// The context is inserted literally; braces inside it are left alone.
pub fn render_system_prompt(context_block: &str) -> String {
    SYSTEM_PROMPT_TEMPLATE.replacen(CONTEXT_PLACEHOLDER, context_block, 1)
}

/// Assemble the two-message conversation for one question
pub fn build_conversation(context_block: &str, query: &str) -> Conversation {
    Conversation {
        system: ChatMessage::system(render_system_prompt(context_block)),
        user: ChatMessage::user(query),
    }
}
