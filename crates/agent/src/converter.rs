//! `UnitConverterAgent` — the conversion engine with an optional conversational front.
//!
//! The adapter always converts locally. An [`AgentLoop`] is attached only
//! when an orchestration backend was available at construction time; its
//! absence never affects `convert`.

use std::sync::Arc;

use tracing::debug;
use unitwise_config::AgentConfig;
use unitwise_core::error::{ConversionError, ProviderError};
use unitwise_core::message::{Conversation, Message};
use unitwise_core::provider::Provider;
use unitwise_core::units::UnitRegistry;

use crate::loop_runner::AgentLoop;

/// Settings for the conversational half of the agent.
#[derive(Debug, Clone)]
pub struct AgentSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    pub agent: AgentConfig,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4.1-mini".into(),
            temperature: 0.0,
            max_tokens: None,
            agent: AgentConfig::default(),
        }
    }
}

impl AgentSettings {
    pub fn from_config(config: &unitwise_config::AppConfig) -> Self {
        let model = config
            .providers
            .get(&config.default_provider)
            .and_then(|p| p.default_model.clone())
            .unwrap_or_else(|| config.default_model.clone());

        Self {
            model,
            temperature: config.default_temperature,
            max_tokens: Some(config.default_max_tokens),
            agent: config.agent.clone(),
        }
    }
}

pub struct UnitConverterAgent {
    registry: Arc<UnitRegistry>,
    agent: Option<AgentLoop>,
}

impl UnitConverterAgent {
    /// Build the adapter. Never fails: with no `provider` it is a plain converter.
    pub fn new(
        registry: Arc<UnitRegistry>,
        settings: &AgentSettings,
        provider: Option<Arc<dyn Provider>>,
    ) -> Self {
        let agent = match provider {
            Some(provider) => {
                debug!(provider = provider.name(), model = %settings.model, "Attaching conversational agent");
                let tools = Arc::new(unitwise_tools::default_registry(registry.clone()));
                let mut agent = AgentLoop::new(
                    provider,
                    &settings.model,
                    settings.temperature,
                    tools,
                    &settings.agent.instructions,
                )
                .with_max_iterations(settings.agent.max_iterations);
                if let Some(max_tokens) = settings.max_tokens {
                    agent = agent.with_max_tokens(max_tokens);
                }
                Some(agent)
            }
            None => {
                debug!("No orchestration backend; running as a local converter");
                None
            }
        };

        Self { registry, agent }
    }

    /// A converter with no conversational agent.
    pub fn local(registry: Arc<UnitRegistry>) -> Self {
        Self::new(registry, &AgentSettings::default(), None)
    }

    /// Perform a unit conversion locally.
    pub fn convert(&self, value: f64, src_unit: &str, tgt_unit: &str) -> Result<f64, ConversionError> {
        self.registry.convert(value, src_unit, tgt_unit)
    }

    /// The attached agent loop, if a backend was available.
    pub fn agent(&self) -> Option<&AgentLoop> {
        self.agent.as_ref()
    }

    pub fn is_conversational(&self) -> bool {
        self.agent.is_some()
    }

    pub fn registry(&self) -> &UnitRegistry {
        &self.registry
    }

    /// Answer a natural-language request through the agent.
    pub async fn ask(&self, message: &str) -> unitwise_core::Result<String> {
        let agent = self.agent.as_ref().ok_or_else(|| {
            ProviderError::NotConfigured(
                "no orchestration backend available (build with the `openai` feature and set an API key)".into(),
            )
        })?;

        let mut conversation = Conversation::new();
        conversation.push(Message::user(message));
        agent.process(&mut conversation).await
    }
}
