//! Model listing functionality

use std::error::Error;

use crate::core::registry::ModelRegistry;

/// Print the registry, marking the model `--model` would start with.
pub fn list_models(requested: Option<&str>) -> Result<(), Box<dyn Error>> {
    let registry = ModelRegistry::builtin();
    if let Some(label) = requested {
        registry.select(label)?;
    }

    println!("🤖 Available Models");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    print!("{}", format_model_list(&registry, requested));
    Ok(())
}

/// One line per model; the starting model is marked with `*`.
///
/// Falls back to the registry's first entry when `requested` is absent or unknown.
pub fn format_model_list(registry: &ModelRegistry, requested: Option<&str>) -> String {
    let default_label = requested
        .and_then(|label| registry.select(label).ok())
        .or_else(|| registry.default_selection())
        .map(|selection| selection.label().to_string());

    let width = registry
        .list()
        .iter()
        .map(|entry| entry.label.len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for entry in registry.list() {
        let marker = if default_label.as_deref() == Some(entry.label.as_str()) {
            "*"
        } else {
            " "
        };
        output.push_str(&format!(
            "{marker} {:<width$}  {}\n",
            entry.label, entry.id
        ));
    }
    output
}
