//! Startup-time credential loading for the inference gateway.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::api::gateway::DEFAULT_BASE_URL;

pub const HF_TOKEN_ENV: &str = "HF_TOKEN";
pub const HF_ENDPOINT_ENV: &str = "HF_INFERENCE_ENDPOINT";
pub const DOTENV_FILE: &str = ".env";

/// Values read from the environment when the application starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSettings {
    pub token: Option<String>,
    pub endpoint: Option<String>,
}

impl EnvSettings {
    /// Process environment first, then `.env` in the working directory.
    pub fn from_env() -> Self {
        let dotenv = read_dotenv(Path::new(DOTENV_FILE));
        Self::from_layers(|key| std::env::var(key).ok(), &dotenv)
    }

    /// Variables already set in `lookup` are never overridden by the file.
    pub fn from_layers<F>(lookup: F, dotenv: &HashMap<String, String>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(|key| lookup(key).or_else(|| dotenv.get(key).cloned()))
    }

    /// Build settings from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let settings = Self {
            token: read(HF_TOKEN_ENV),
            endpoint: read(HF_ENDPOINT_ENV),
        };

        if settings.token.is_none() {
            warn!("{HF_TOKEN_ENV} is not set; generation requests will fail until it is provided");
        }

        settings
    }

    /// `HF_INFERENCE_ENDPOINT` when set, otherwise the public inference API.
    pub fn base_url(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

/// Parse a dotenv file. A missing file yields nothing; a malformed one is
/// logged and skipped so startup never fails on it.
pub fn read_dotenv(path: &Path) -> HashMap<String, String> {
    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(err) if err.not_found() => return HashMap::new(),
        Err(err) => {
            warn!("Ignoring {}: {err}", path.display());
            return HashMap::new();
        }
    };

    let mut values = HashMap::new();
    for entry in entries {
        match entry {
            Ok((key, value)) => {
                values.insert(key, value);
            }
            Err(err) => {
                warn!("Stopped reading {}: {err}", path.display());
                break;
            }
        }
    }
    debug!(path = %path.display(), count = values.len(), "Loaded dotenv file");
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_token_and_endpoint() {
        let settings = EnvSettings::from_lookup(lookup_from(&[
            ("HF_TOKEN", " hf_abc \n"),
            ("HF_INFERENCE_ENDPOINT", "http://localhost:8080"),
        ]));
        assert_eq!(settings.token.as_deref(), Some("hf_abc"));
        assert_eq!(settings.base_url(), "http://localhost:8080");
    }

    #[test]
    fn missing_or_blank_token_is_not_fatal() {
        let empty = EnvSettings::from_lookup(lookup_from(&[]));
        assert_eq!(empty, EnvSettings::default());
        assert_eq!(empty.base_url(), DEFAULT_BASE_URL);

        let blank = EnvSettings::from_lookup(lookup_from(&[("HF_TOKEN", "   ")]));
        assert!(blank.token.is_none());
    }

    #[test]
    fn token_can_come_from_dotenv_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join(".env");
        std::fs::write(
            &path,
            "# local secrets\nHF_TOKEN=hf_from_file\nHF_INFERENCE_ENDPOINT=\"http://localhost:9000\"\n",
        )
        .expect("write .env");

        let dotenv = read_dotenv(&path);
        let settings = EnvSettings::from_layers(lookup_from(&[]), &dotenv);
        assert_eq!(settings.token.as_deref(), Some("hf_from_file"));
        assert_eq!(settings.base_url(), "http://localhost:9000");

        let shadowed = EnvSettings::from_layers(lookup_from(&[("HF_TOKEN", "hf_env")]), &dotenv);
        assert_eq!(shadowed.token.as_deref(), Some("hf_env"));
    }

    #[test]
    fn missing_dotenv_file_is_ignored() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        assert!(read_dotenv(&temp_dir.path().join(".env")).is_empty());
    }
}
