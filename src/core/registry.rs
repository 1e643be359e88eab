//! Built-in model registry
//!
//! Maps the human-readable labels shown in the model selector to the backend
//! model identifiers sent with each generation request. The built-in list is
//! embedded from builtin_models.toml at build time.

use serde::Deserialize;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelEntry {
    pub label: String,
    pub id: String,
}

#[derive(Debug, Deserialize)]
struct BuiltinModelsConfig {
    models: Vec<ModelEntry>,
}

/// Raised when a label is not part of the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModelError {
    label: String,
}

impl UnknownModelError {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for UnknownModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown model '{}'", self.label)
    }
}

impl Error for UnknownModelError {}

/// Static, ordered mapping of labels to model ids.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    entries: Vec<ModelEntry>,
}

impl ModelRegistry {
    pub fn new(entries: Vec<ModelEntry>) -> Self {
        Self { entries }
    }

    /// Registry populated from the embedded configuration.
    pub fn builtin() -> Self {
        const CONFIG_CONTENT: &str = include_str!("../builtin_models.toml");

        let config: BuiltinModelsConfig =
            toml::from_str(CONFIG_CONTENT).expect("Failed to parse builtin_models.toml");

        Self::new(config.models)
    }

    pub fn list(&self) -> &[ModelEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the backend id for a label.
    ///
    /// Labels match exactly. A registered model id is accepted too, so
    /// `--model HuggingFaceH4/zephyr-7b-beta` works as well as `--model "Zephyr 7B"`.
    pub fn resolve(&self, label: &str) -> Result<&str, UnknownModelError> {
        self.find(label)
            .map(|entry| entry.id.as_str())
            .ok_or_else(|| UnknownModelError::new(label))
    }

    /// Selection pointing at the first registered model, if any.
    pub fn default_selection(&self) -> Option<ModelSelection> {
        self.entries.first().map(|entry| ModelSelection {
            label: entry.label.clone(),
            model_id: entry.id.clone(),
        })
    }

    pub fn select(&self, label: &str) -> Result<ModelSelection, UnknownModelError> {
        let entry = self
            .find(label)
            .ok_or_else(|| UnknownModelError::new(label))?;
        Ok(ModelSelection {
            label: entry.label.clone(),
            model_id: entry.id.clone(),
        })
    }

    fn find(&self, label: &str) -> Option<&ModelEntry> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .or_else(|| self.entries.iter().find(|entry| entry.id == label))
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The model currently chosen for the session.
///
/// Only [`ModelRegistry`] hands these out, so a selection always names a
/// registered model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelection {
    label: String,
    model_id: String,
}

impl ModelSelection {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zephyr_only() -> ModelRegistry {
        ModelRegistry::new(vec![ModelEntry {
            label: "Zephyr 7B".to_string(),
            id: "id-z".to_string(),
        }])
    }

    #[test]
    fn builtin_registry_lists_models_in_order() {
        let registry = ModelRegistry::builtin();
        let labels: Vec<&str> = registry.list().iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["Zephyr 7B", "Phi-3", "Mistral 7B", "meta-llama"]);
        assert_eq!(
            registry.resolve("Mistral 7B"),
            Ok("mistralai/Mistral-7B-Instruct-v0.1")
        );
    }

    #[test]
    fn default_selection_is_first_entry() {
        let registry = ModelRegistry::builtin();
        let selection = registry.default_selection().expect("registry is not empty");
        assert_eq!(selection.label(), "Zephyr 7B");
        assert_eq!(selection.model_id(), "HuggingFaceH4/zephyr-7b-beta");

        assert!(ModelRegistry::new(Vec::new()).default_selection().is_none());
    }

    #[test]
    fn resolve_unknown_label_fails() {
        let registry = zephyr_only();
        let err = registry.resolve("GPT-9").unwrap_err();
        assert_eq!(err.label(), "GPT-9");
        assert_eq!(err.to_string(), "Unknown model 'GPT-9'");

        // Labels are matched exactly.
        assert!(registry.resolve("zephyr 7b").is_err());
    }

    #[test]
    fn select_accepts_label_or_model_id() {
        let registry = zephyr_only();
        let by_label = registry.select("Zephyr 7B").expect("label resolves");
        let by_id = registry.select("id-z").expect("id resolves");
        assert_eq!(by_label, by_id);
        assert_eq!(by_id.label(), "Zephyr 7B");
    }

    #[test]
    fn builtin_entries_are_well_formed() {
        for entry in ModelRegistry::builtin().list() {
            assert!(!entry.label.is_empty());
            assert!(entry.id.contains('/'), "{} should be owner/name", entry.id);
        }
    }
}
