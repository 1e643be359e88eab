use serde::{Deserialize, Serialize};

use crate::core::prompt::USER_MARKER;

pub mod gateway;

pub use gateway::{GenerationError, GenerationErrorKind, HfInferenceGateway, InferenceGateway};

/// Sampling settings sent with every generation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub do_sample: bool,
    pub top_p: f32,
    pub repetition_penalty: f32,
    pub stop: Vec<String>,
    pub return_full_text: bool,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_new_tokens: 1024,
            temperature: 0.7,
            do_sample: true,
            top_p: 0.9,
            repetition_penalty: 1.1,
            stop: vec![USER_MARKER.to_string()],
            return_full_text: false,
        }
    }
}

/// One call's worth of input for the inference backend. Built per turn and
/// dropped once the call returns.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub formatted_prompt: String,
    pub model_id: String,
    pub parameters: GenerationParameters,
}

impl GenerationRequest {
    pub fn new(formatted_prompt: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            formatted_prompt: formatted_prompt.into(),
            model_id: model_id.into(),
            parameters: GenerationParameters::default(),
        }
    }
}

#[derive(Serialize)]
pub struct TextGenerationPayload<'a> {
    pub inputs: &'a str,
    pub parameters: &'a GenerationParameters,
    pub options: RequestOptions,
}

#[derive(Serialize)]
pub struct RequestOptions {
    pub wait_for_model: bool,
}

#[derive(Deserialize)]
pub struct GeneratedText {
    pub generated_text: String,
}

/// The endpoint answers either with a list of generations or a single object.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum TextGenerationResponse {
    Batch(Vec<GeneratedText>),
    Single(GeneratedText),
}

impl TextGenerationResponse {
    pub fn into_text(self) -> Option<String> {
        match self {
            TextGenerationResponse::Batch(items) => {
                items.into_iter().next().map(|item| item.generated_text)
            }
            TextGenerationResponse::Single(item) => Some(item.generated_text),
        }
    }
}
