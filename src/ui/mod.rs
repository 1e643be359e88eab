//! Display surfaces and the interactive chat loop.
//!
//! The core never formats output itself. Everything the user sees goes
//! through a [`DisplaySurface`], so the same session logic can drive a
//! terminal, a test recorder, or anything else that can show text.

pub mod chat_loop;
pub mod terminal;

use crate::core::message::Message;

pub trait DisplaySurface {
    /// Show one conversation message.
    fn render_message(&mut self, message: &Message);

    /// Show a failure notice. Never part of the conversation log.
    fn render_error(&mut self, message: &str);

    /// Show transient status text such as "Thinking...".
    fn render_notice(&mut self, message: &str);

    /// Signal that the next line of input can be typed.
    fn render_input_prompt(&mut self) {}
}
