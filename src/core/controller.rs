//! Turn-taking for a single chat session.
//!
//! A turn moves the controller from [`ChatState::Idle`] to
//! [`ChatState::AwaitingReply`] when the user's message is recorded, and back
//! to idle once the gateway answers. The reply is only appended on success, so
//! the log never holds a partial or error-text assistant message.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::api::{GenerationError, GenerationRequest, InferenceGateway};
use crate::core::conversation::ConversationStore;
use crate::core::message::{Message, Role};
use crate::core::prompt::PromptFormatter;
use crate::core::registry::{ModelRegistry, ModelSelection, UnknownModelError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    AwaitingReply,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// The prompt was empty or whitespace only. Callers ignore this silently.
    EmptyInput,
    /// A turn is already in flight.
    Busy,
    /// A reply arrived while no turn was in flight.
    NoTurnInFlight,
    UnknownModel(UnknownModelError),
    Generation(GenerationError),
}

impl ChatError {
    /// Whether the display surface should show this error to the user.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, ChatError::EmptyInput)
    }
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::EmptyInput => write!(f, "Prompt is empty"),
            ChatError::Busy => write!(f, "Still waiting for the previous reply"),
            ChatError::NoTurnInFlight => write!(f, "No reply is pending"),
            ChatError::UnknownModel(err) => write!(f, "{err}"),
            ChatError::Generation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ChatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ChatError::UnknownModel(err) => Some(err),
            ChatError::Generation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<UnknownModelError> for ChatError {
    fn from(err: UnknownModelError) -> Self {
        ChatError::UnknownModel(err)
    }
}

impl From<GenerationError> for ChatError {
    fn from(err: GenerationError) -> Self {
        ChatError::Generation(err)
    }
}

pub struct ChatController {
    registry: ModelRegistry,
    selection: ModelSelection,
    store: ConversationStore,
    formatter: PromptFormatter,
    gateway: Arc<dyn InferenceGateway>,
    state: ChatState,
}

impl ChatController {
    /// `selection` must come from `registry`.
    pub fn new(
        registry: ModelRegistry,
        selection: ModelSelection,
        gateway: Arc<dyn InferenceGateway>,
    ) -> Self {
        Self {
            registry,
            selection,
            store: ConversationStore::new(),
            formatter: PromptFormatter,
            gateway,
            state: ChatState::Idle,
        }
    }

    /// Controller starting on the registry's first model, or `None` for an
    /// empty registry.
    pub fn with_default_model(
        registry: ModelRegistry,
        gateway: Arc<dyn InferenceGateway>,
    ) -> Option<Self> {
        let selection = registry.default_selection()?;
        Some(Self::new(registry, selection, gateway))
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn messages(&self) -> &[Message] {
        self.store.all()
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn selection(&self) -> &ModelSelection {
        &self.selection
    }

    pub fn gateway(&self) -> Arc<dyn InferenceGateway> {
        Arc::clone(&self.gateway)
    }

    pub fn select_model(&mut self, label: &str) -> Result<&ModelSelection, ChatError> {
        self.selection = self.registry.select(label)?;
        info!(model = %self.selection.model_id(), "Model selected");
        Ok(&self.selection)
    }

    /// Run a complete turn: record the prompt, ask the gateway, record the reply.
    pub async fn submit(&mut self, prompt: &str) -> Result<&Message, ChatError> {
        let request = self.begin_turn(prompt)?;
        let result = self.gateway.generate(&request).await;
        self.complete_turn(result)
    }

    /// Record the user's message and build the request for the gateway.
    pub fn begin_turn(&mut self, prompt: &str) -> Result<GenerationRequest, ChatError> {
        if self.state == ChatState::AwaitingReply {
            warn!("Submission refused while a reply is pending");
            return Err(ChatError::Busy);
        }
        if prompt.trim().is_empty() {
            return Err(ChatError::EmptyInput);
        }

        let model_id = self.registry.resolve(self.selection.label())?.to_string();

        self.store.append(Role::User, prompt);
        self.state = ChatState::AwaitingReply;
        debug!(model = %model_id, messages = self.store.len(), "Turn started");

        Ok(GenerationRequest::new(self.formatter.format(prompt), model_id))
    }

    /// Finish the in-flight turn with the gateway's answer.
    pub fn complete_turn(
        &mut self,
        result: Result<String, GenerationError>,
    ) -> Result<&Message, ChatError> {
        if self.state != ChatState::AwaitingReply {
            return Err(ChatError::NoTurnInFlight);
        }
        self.state = ChatState::Idle;

        match result {
            Ok(text) => {
                debug!(chars = text.len(), "Turn completed");
                Ok(self.store.append(Role::Assistant, text.trim()))
            }
            Err(err) => {
                warn!(kind = ?err.kind(), cause = %err.cause(), "Generation failed");
                Err(ChatError::Generation(err))
            }
        }
    }

    pub fn clear(&mut self) -> Result<(), ChatError> {
        if self.state == ChatState::AwaitingReply {
            return Err(ChatError::Busy);
        }
        self.store.clear();
        info!("Conversation cleared");
        Ok(())
    }
}
