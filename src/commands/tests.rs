use super::*;
use crate::core::session::ChatSession;
use crate::utils::test_utils::{create_test_controller, RecordingSurface, Rendered, ScriptedGateway};

fn test_session() -> (ChatSession, RecordingSurface) {
    let surface = RecordingSurface::default();
    let session = ChatSession::new(
        create_test_controller(ScriptedGateway::with_replies(Vec::new())),
        Box::new(surface.clone()),
    );
    (session, surface)
}

fn last_notice(surface: &RecordingSurface) -> String {
    surface
        .events()
        .into_iter()
        .rev()
        .find_map(|event| match event {
            Rendered::Notice(text) => Some(text),
            _ => None,
        })
        .expect("a notice should have been rendered")
}

#[test]
fn plain_text_is_processed_as_message() {
    let (mut session, _) = test_session();
    assert_eq!(
        process_input(&mut session, "What is BFS?"),
        CommandResult::ProcessAsMessage("What is BFS?".to_string())
    );
}

#[test]
fn unknown_commands_fall_through_as_messages() {
    let (mut session, surface) = test_session();
    assert_eq!(
        process_input(&mut session, "/usr/bin is missing?"),
        CommandResult::ProcessAsMessage("/usr/bin is missing?".to_string())
    );
    assert_eq!(
        process_input(&mut session, "/"),
        CommandResult::ProcessAsMessage("/".to_string())
    );
    assert!(surface.events().is_empty());
}

#[test]
fn help_lists_every_command() {
    let (mut session, surface) = test_session();
    assert_eq!(process_input(&mut session, "/help"), CommandResult::Continue);

    let help = last_notice(&surface);
    for command in all_commands() {
        assert!(help.contains(command.usage), "help should mention {}", command.usage);
    }
}

#[test]
fn model_command_shows_and_switches_selection() {
    let (mut session, surface) = test_session();

    process_input(&mut session, "/model");
    assert_eq!(last_notice(&surface), "Current model: Zephyr 7B (id-z)");

    process_input(&mut session, "/MODEL Phi-3");
    assert_eq!(session.controller().selection().label(), "Phi-3");

    process_input(&mut session, "/models");
    assert_eq!(
        last_notice(&surface),
        "Available models:\n   Zephyr 7B (id-z)\n * Phi-3 (id-p)"
    );
}

#[test]
fn log_is_not_a_command() {
    let (mut session, surface) = test_session();
    assert_eq!(
        process_input(&mut session, "/log chat.txt"),
        CommandResult::ProcessAsMessage("/log chat.txt".to_string())
    );
    assert!(surface.events().is_empty());
}

#[test]
fn quit_stops_the_loop() {
    let (mut session, _) = test_session();
    assert_eq!(process_input(&mut session, " /quit "), CommandResult::Quit);
}
