//! One interactive chat session: controller state plus where output goes.
//!
//! A session is created when the chat loop starts and dropped when it ends.
//! It owns the conversation and the model selection through its
//! [`ChatController`]; nothing is shared with other sessions.

use crate::core::controller::{ChatController, ChatError};
use crate::ui::DisplaySurface;

pub const THINKING_NOTICE: &str = "Thinking...";

pub struct ChatSession {
    controller: ChatController,
    surface: Box<dyn DisplaySurface>,
}

impl ChatSession {
    pub fn new(controller: ChatController, surface: Box<dyn DisplaySurface>) -> Self {
        Self {
            controller,
            surface,
        }
    }

    pub fn controller(&self) -> &ChatController {
        &self.controller
    }

    /// Run one turn for `prompt`, rendering the user's message, a progress
    /// notice, and then either the reply or the failure.
    pub async fn on_submit(&mut self, prompt: &str) {
        let request = match self.controller.begin_turn(prompt) {
            Ok(request) => request,
            Err(err) => return self.report(err),
        };

        if let Some(message) = self.controller.messages().last() {
            self.surface.render_message(message);
        }
        self.surface.render_notice(THINKING_NOTICE);

        let result = self.controller.gateway().generate(&request).await;
        match self.controller.complete_turn(result) {
            Ok(reply) => self.surface.render_message(reply),
            Err(err) => self.report(err),
        }
    }

    pub fn on_clear_requested(&mut self) {
        match self.controller.clear() {
            Ok(()) => self.notice("Chat cleared."),
            Err(err) => self.report(err),
        }
    }

    pub fn select_model(&mut self, label: &str) {
        match self.controller.select_model(label) {
            Ok(selection) => {
                let text = format!("Model set to {} ({})", selection.label(), selection.model_id());
                self.notice(&text);
            }
            Err(err) => self.report(err),
        }
    }

    pub fn ready_for_input(&mut self) {
        self.surface.render_input_prompt();
    }

    pub fn notice(&mut self, text: &str) {
        self.surface.render_notice(text);
    }

    pub fn error(&mut self, text: &str) {
        self.surface.render_error(text);
    }

    fn report(&mut self, err: ChatError) {
        if err.is_user_visible() {
            self.surface.render_error(&err.to_string());
        }
    }
}
