//! TUI-less "say" command

use std::error::Error;

use crate::core::controller::ChatError;
use crate::core::credential::EnvSettings;
use crate::core::setup::build_controller;

pub async fn run_say(prompt: Vec<String>, model: Option<String>) -> Result<(), Box<dyn Error>> {
    let prompt = prompt.join(" ");
    if prompt.trim().is_empty() {
        eprintln!("Usage: algoforge say <prompt>");
        std::process::exit(1);
    }

    let env = EnvSettings::from_env();
    let mut controller = build_controller(&env, model.as_deref())?;

    match controller.submit(&prompt).await {
        Ok(reply) => {
            println!("{}", reply.content());
            Ok(())
        }
        Err(ChatError::Generation(err)) => {
            eprintln!("❌ {err}");
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}
