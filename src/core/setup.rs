//! Wiring shared by the interactive chat and the one-shot `say` command.

use std::error::Error;
use std::sync::Arc;

use tracing::debug;

use crate::api::HfInferenceGateway;
use crate::core::controller::ChatController;
use crate::core::credential::EnvSettings;
use crate::core::registry::ModelRegistry;

/// Build a controller for the built-in registry.
///
/// `requested_model` (from `--model`) picks the starting model; without it the
/// registry's first model is used. A missing token is not an error here, only
/// on the first generation.
pub fn build_controller(
    env: &EnvSettings,
    requested_model: Option<&str>,
) -> Result<ChatController, Box<dyn Error>> {
    build_controller_with_registry(ModelRegistry::builtin(), env, requested_model)
}

pub fn build_controller_with_registry(
    registry: ModelRegistry,
    env: &EnvSettings,
    requested_model: Option<&str>,
) -> Result<ChatController, Box<dyn Error>> {
    let selection = match requested_model.filter(|label| !label.trim().is_empty()) {
        Some(label) => registry.select(label)?,
        None => registry
            .default_selection()
            .ok_or("No models are registered")?,
    };

    let base_url = env.base_url().to_string();
    debug!(%base_url, model = %selection.model_id(), "Starting chat session");

    let gateway = Arc::new(HfInferenceGateway::new(base_url, env.token.clone()));
    Ok(ChatController::new(registry, selection, gateway))
}
