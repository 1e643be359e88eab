use crate::api::{GenerationError, GenerationRequest, InferenceGateway};
use crate::core::controller::ChatController;
use crate::core::message::Message;
use crate::core::registry::{ModelEntry, ModelRegistry};
use crate::ui::DisplaySurface;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Gateway that replays canned results and records every request.
#[derive(Default)]
pub struct ScriptedGateway {
    replies: Mutex<VecDeque<Result<String, GenerationError>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGateway {
    pub fn with_replies(replies: Vec<Result<String, GenerationError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceGateway for ScriptedGateway {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("test gateway ran out of replies")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Message(Message),
    Error(String),
    Notice(String),
}

/// Display surface that keeps everything it was asked to render.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    events: Arc<Mutex<Vec<Rendered>>>,
}

impl RecordingSurface {
    pub fn events(&self) -> Vec<Rendered> {
        self.events.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Rendered::Error(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Rendered::Message(message) => Some(message),
                _ => None,
            })
            .collect()
    }
}

impl DisplaySurface for RecordingSurface {
    fn render_message(&mut self, message: &Message) {
        self.events
            .lock()
            .unwrap()
            .push(Rendered::Message(message.clone()));
    }

    fn render_error(&mut self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(Rendered::Error(message.to_string()));
    }

    fn render_notice(&mut self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(Rendered::Notice(message.to_string()));
    }
}

pub fn test_registry() -> ModelRegistry {
    ModelRegistry::new(vec![
        ModelEntry {
            label: "Zephyr 7B".to_string(),
            id: "id-z".to_string(),
        },
        ModelEntry {
            label: "Phi-3".to_string(),
            id: "id-p".to_string(),
        },
    ])
}

pub fn create_test_controller(gateway: Arc<ScriptedGateway>) -> ChatController {
    ChatController::with_default_model(test_registry(), gateway).unwrap()
}
