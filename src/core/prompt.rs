//! Role-tagged prompt template for chat-tuned text-generation models.

/// Marker opening a user turn. Also used as the generation stop sequence.
pub const USER_MARKER: &str = "<|user|>";

/// Marker after which the model is expected to write its reply.
pub const ASSISTANT_MARKER: &str = "<|assistant|>";

/// Wraps the latest user turn in the chat template.
///
/// Only the current prompt is sent; earlier turns are not included. The user
/// text is inserted verbatim, control characters and all.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptFormatter;

impl PromptFormatter {
    pub fn format(&self, user_text: &str) -> String {
        let mut prompt =
            String::with_capacity(USER_MARKER.len() + user_text.len() + ASSISTANT_MARKER.len() + 2);
        prompt.push_str(USER_MARKER);
        prompt.push('\n');
        prompt.push_str(user_text);
        prompt.push('\n');
        prompt.push_str(ASSISTANT_MARKER);
        prompt
    }
}
