use tracing::{info, warn};

use super::error::AiError;
use super::gemini::GeminiClient;
use crate::config::ShellConfig;

/// Fixed text shown for every AI request when the client failed to initialize
pub const UNAVAILABLE_MESSAGE: &str =
    "ERROR: Gemini client not initialized or GEMINI_API_KEY not set.\n";

/// A single blocking prompt-in, text-out call (allows mocking in tests)
pub trait TextGenerator {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, AiError>;
}

/// Shared handle to the text-generation service
///
/// Built once at startup and passed by reference to everything that needs it.
/// When initialization failed the handle stays usable and every call reports
/// [`AiError::Unavailable`].
pub struct Assistant {
    backend: Option<Box<dyn TextGenerator>>,
    model: String,
}

impl Assistant {
    pub fn new(backend: impl TextGenerator + 'static, model: impl Into<String>) -> Self {
        Self { backend: Some(Box::new(backend)), model: model.into() }
    }

    /// An assistant whose every call fails with [`AiError::Unavailable`]
    pub fn unavailable(model: impl Into<String>) -> Self {
        Self { backend: None, model: model.into() }
    }

    /// Initialize the Gemini client from configuration
    ///
    /// Missing credentials or a client construction failure degrade to an
    /// unavailable assistant rather than an error.
    pub fn connect(config: &ShellConfig) -> Self {
        let Some(api_key) = config.api_key.as_deref() else {
            warn!("GEMINI_API_KEY not set, AI features are disabled");
            return Self::unavailable(&config.model);
        };

        match GeminiClient::new(api_key, &config.base_url) {
            Ok(client) => {
                info!(model = %config.model, base_url = %config.base_url, "Gemini client ready");
                Self::new(client, &config.model)
            }
            Err(e) => {
                warn!(error = %e, "Failed to initialize Gemini client, AI features are disabled");
                Self::unavailable(&config.model)
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a prompt with the configured model
    pub fn ask(&self, prompt: &str) -> Result<String, AiError> {
        self.ask_with_model(prompt, &self.model)
    }

    pub fn ask_with_model(&self, prompt: &str, model: &str) -> Result<String, AiError> {
        let backend = self.backend.as_ref().ok_or(AiError::Unavailable)?;
        backend.generate(model, prompt).inspect_err(|e| warn!(error = %e, "AI request failed"))
    }

    /// Send a prompt and render the outcome as user-facing text
    pub fn ask_text(&self, prompt: &str) -> String {
        render_reply(self.ask(prompt))
    }
}

/// Render an AI outcome the way the shell prints it
pub fn render_reply(reply: Result<String, AiError>) -> String {
    match reply {
        Ok(text) => text,
        Err(AiError::Unavailable) => UNAVAILABLE_MESSAGE.to_string(),
        Err(e) => format!("AI error: {}", e),
    }
}
