//! Line-based interactive chat loop.

use std::error::Error;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::commands::{process_input, CommandResult};
use crate::core::credential::{EnvSettings, HF_TOKEN_ENV};
use crate::core::session::ChatSession;
use crate::core::setup::build_controller;
use crate::ui::terminal::TerminalSurface;

pub const INVALID_INPUT_ERROR: &str = "Input was not valid UTF-8 and was not sent.";

pub async fn run_chat(model: Option<String>) -> Result<(), Box<dyn Error>> {
    let env = EnvSettings::from_env();
    let controller = build_controller(&env, model.as_deref())?;

    let mut session = ChatSession::new(controller, Box::new(TerminalSurface::stdio()));
    print_banner(&mut session, env.token.is_some());

    run_loop(&mut session, BufReader::new(tokio::io::stdin())).await?;
    Ok(())
}

fn print_banner(session: &mut ChatSession, has_token: bool) {
    let label = session.controller().selection().label().to_string();
    session.notice("🧠 AlgoForge - AI Assistant");
    session.notice(&format!("Currently powered by: {label}"));
    session.notice("Type a question and press Enter. /help lists commands, /quit exits.");
    if !has_token {
        session.error(&format!(
            "{HF_TOKEN_ENV} is not set; replies will fail until you export a Hugging Face token."
        ));
    }
}

/// Read lines until end of input or `/quit`.
///
/// Each turn is awaited before the next line is read, so a second prompt can
/// never start while a reply is pending. A line that is not UTF-8 is reported
/// and skipped; the session carries on.
pub async fn run_loop<R>(session: &mut ChatSession, mut input: R) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut buffer = Vec::new();
    loop {
        session.ready_for_input();
        buffer.clear();
        if input.read_until(b'\n', &mut buffer).await? == 0 {
            break;
        }

        let Ok(line) = std::str::from_utf8(strip_line_ending(&buffer)) else {
            debug!(bytes = buffer.len(), "Skipping input line that is not UTF-8");
            session.error(INVALID_INPUT_ERROR);
            continue;
        };

        match process_input(session, line) {
            CommandResult::Continue => {}
            CommandResult::ProcessAsMessage(prompt) => session.on_submit(&prompt).await,
            CommandResult::Quit => break,
        }
    }
    Ok(())
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
