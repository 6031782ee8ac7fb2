//! Provider selection — picks the orchestration backend from config, if one is usable.
//!
//! `None` is a normal outcome: the binary was built without the `openai`
//! feature, or no credentials are configured. Callers degrade to local
//! conversion only.

use std::sync::Arc;

use unitwise_config::AppConfig;
use unitwise_core::provider::Provider;

/// Whether this build can talk to any orchestration backend at all.
pub const fn backend_compiled() -> bool {
    cfg!(feature = "openai")
}

/// Connection settings resolved from config for the default provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProvider {
    pub name: String,
    pub base_url: String,
    pub api_key: Option<String>,
}

/// Resolve the default provider's URL and key without building a client.
///
/// Per-provider settings win over the top-level `api_key`.
pub fn resolve(config: &AppConfig) -> ResolvedProvider {
    let name = config.default_provider.clone();
    let provider_config = config.providers.get(&name);

    let api_key = provider_config
        .and_then(|p| p.api_key.clone())
        .or_else(|| config.api_key.clone());

    let base_url = provider_config
        .and_then(|p| p.api_url.clone())
        .unwrap_or_else(|| default_base_url(&name));

    ResolvedProvider {
        name,
        base_url,
        api_key,
    }
}

/// Build the orchestration backend from configuration.
///
/// Hosted endpoints need an API key; local ones (`ollama`, `vllm`,
/// `llamacpp`) or an explicit `api_url` do not.
pub fn build_from_config(config: &AppConfig) -> Option<Arc<dyn Provider>> {
    let resolved = resolve(config);

    if !backend_compiled() {
        tracing::info!(
            provider = %resolved.name,
            "Built without the `openai` feature; conversational agent disabled"
        );
        return None;
    }

    let explicit_url = config
        .providers
        .get(&resolved.name)
        .is_some_and(|p| p.api_url.is_some());

    if resolved.api_key.is_none() && !explicit_url && !is_local(&resolved.name) {
        tracing::info!(provider = %resolved.name, "No API key configured; conversational agent disabled");
        return None;
    }

    connect(resolved)
}

#[cfg(feature = "openai")]
fn connect(resolved: ResolvedProvider) -> Option<Arc<dyn Provider>> {
    use crate::openai_compat::OpenAiCompatProvider;

    match OpenAiCompatProvider::new(
        &resolved.name,
        &resolved.base_url,
        resolved.api_key.unwrap_or_default(),
    ) {
        Ok(provider) => {
            tracing::debug!(provider = %resolved.name, url = %resolved.base_url, "Orchestration backend ready");
            Some(Arc::new(provider))
        }
        Err(e) => {
            tracing::warn!(provider = %resolved.name, error = %e, "Failed to build provider");
            None
        }
    }
}

#[cfg(not(feature = "openai"))]
fn connect(_resolved: ResolvedProvider) -> Option<Arc<dyn Provider>> {
    None
}

fn is_local(provider_name: &str) -> bool {
    matches!(provider_name, "ollama" | "vllm" | "llamacpp" | "llama.cpp")
}

/// Get the default base URL for well-known providers.
fn default_base_url(provider_name: &str) -> String {
    match provider_name {
        "openai" => "https://api.openai.com/v1".into(),
        "openrouter" => "https://openrouter.ai/api/v1".into(),
        "groq" => "https://api.groq.com/openai/v1".into(),
        "ollama" => "http://localhost:11434/v1".into(),
        "vllm" => "http://localhost:8000/v1".into(),
        "llamacpp" | "llama.cpp" => "http://localhost:8080/v1".into(),
        _ => format!("https://{provider_name}.api.example.com/v1"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitwise_config::ProviderConfig;

    #[test]
    fn resolve_prefers_provider_key() {
        let mut config = AppConfig {
            api_key: Some("top-level".into()),
            ..AppConfig::default()
        };
        config.providers.insert(
            "openai".into(),
            ProviderConfig {
                api_key: Some("per-provider".into()),
                api_url: None,
                default_model: None,
            },
        );

        let resolved = resolve(&config);
        assert_eq!(resolved.api_key.as_deref(), Some("per-provider"));
        assert_eq!(resolved.base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn resolve_custom_url() {
        let mut config = AppConfig {
            default_provider: "lab".into(),
            ..AppConfig::default()
        };
        config.providers.insert(
            "lab".into(),
            ProviderConfig {
                api_key: None,
                api_url: Some("http://10.0.0.2:9000/v1".into()),
                default_model: None,
            },
        );
        assert_eq!(resolve(&config).base_url, "http://10.0.0.2:9000/v1");
    }

    #[test]
    fn no_key_means_no_backend() {
        let config = AppConfig::default();
        assert!(build_from_config(&config).is_none());
    }

    #[test]
    fn local_provider_availability_follows_feature() {
        let config = AppConfig {
            default_provider: "ollama".into(),
            ..AppConfig::default()
        };
        let provider = build_from_config(&config);
        assert_eq!(provider.is_some(), backend_compiled());
        if let Some(p) = provider {
            assert_eq!(p.name(), "ollama");
        }
    }
}
