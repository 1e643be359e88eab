//! Slash commands for the interactive chat loop.

mod registry;

pub use registry::{all_commands, CommandInvocation};

use crate::core::session::ChatSession;

#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    ProcessAsMessage(String),
    Quit,
}

/// Dispatch a slash command, or hand the input back to be sent as a prompt.
///
/// Unknown `/words` are sent as prompts so questions like "/usr/bin is
/// missing?" still reach the model.
pub fn process_input(session: &mut ChatSession, input: &str) -> CommandResult {
    let trimmed = input.trim();

    let Some(rest) = trimmed.strip_prefix('/') else {
        return CommandResult::ProcessAsMessage(input.to_string());
    };

    let mut parts = rest.splitn(2, ' ');
    let command_name = match parts.next() {
        Some(name) if !name.is_empty() => name,
        _ => return CommandResult::ProcessAsMessage(input.to_string()),
    };
    let args = parts.next().unwrap_or("").trim();

    match registry::find_command(command_name) {
        Some(command) => {
            (command.handler)(session, CommandInvocation { args })
        }
        None => CommandResult::ProcessAsMessage(input.to_string()),
    }
}

pub(super) fn handle_help(
    session: &mut ChatSession,
    _invocation: CommandInvocation<'_>,
) -> CommandResult {
    let mut help = String::from("Commands:");
    for command in all_commands() {
        help.push_str(&format!("\n  {:<16} {}", command.usage, command.help));
    }
    session.notice(&help);
    CommandResult::Continue
}

pub(super) fn handle_clear(
    session: &mut ChatSession,
    _invocation: CommandInvocation<'_>,
) -> CommandResult {
    session.on_clear_requested();
    CommandResult::Continue
}

pub(super) fn handle_model(
    session: &mut ChatSession,
    invocation: CommandInvocation<'_>,
) -> CommandResult {
    if invocation.args.is_empty() {
        let selection = session.controller().selection();
        let text = format!(
            "Current model: {} ({})",
            selection.label(),
            selection.model_id()
        );
        session.notice(&text);
    } else {
        session.select_model(invocation.args);
    }
    CommandResult::Continue
}

pub(super) fn handle_models(
    session: &mut ChatSession,
    _invocation: CommandInvocation<'_>,
) -> CommandResult {
    let controller = session.controller();
    let active = controller.selection().label();
    let mut listing = String::from("Available models:");
    for entry in controller.registry().list() {
        let marker = if entry.label == active { "*" } else { " " };
        listing.push_str(&format!("\n {marker} {} ({})", entry.label, entry.id));
    }
    session.notice(&listing);
    CommandResult::Continue
}

pub(super) fn handle_quit(
    _session: &mut ChatSession,
    _invocation: CommandInvocation<'_>,
) -> CommandResult {
    CommandResult::Quit
}

#[cfg(test)]
mod tests;
