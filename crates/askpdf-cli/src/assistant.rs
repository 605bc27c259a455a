//! Question answering over the retrieved pages

use tracing::{debug, info};

use askpdf_core::{build_conversation, format_context, ChatModel, Result, Retriever};

/// Answers one question: retrieve, render the context, ask the chat model
pub struct PdfAssistant<R: Retriever, C: ChatModel> {
    retriever: R,
    chat: C,
}

impl<R: Retriever, C: ChatModel> PdfAssistant<R, C> {
    /// Create a new assistant from its two collaborators
    pub fn new(retriever: R, chat: C) -> Self {
        Self { retriever, chat }
    }

    /// Answer a question.
    ///
    /// The query goes to the retriever and into the user message exactly as
    /// given. Any failure of either call is returned unchanged.
    pub async fn answer(&self, query: &str) -> Result<String> {
        let passages = self.retriever.retrieve(query).await?;
        let context = format_context(&passages);
        debug!(passages = passages.len(), context_bytes = context.len(), "built context");

        let conversation = build_conversation(&context, query);

        info!(model = self.chat.model_id(), "requesting completion");
        self.chat.complete(&conversation).await
    }
}
