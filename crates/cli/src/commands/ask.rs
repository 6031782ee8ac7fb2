//! `unitwise ask` — single-message conversational mode.

use std::sync::Arc;

use unitwise_agent::{AgentSettings, UnitConverterAgent};
use unitwise_config::AppConfig;
use unitwise_core::units::UnitRegistry;

pub async fn run(message: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let provider = unitwise_providers::build_from_config(&config);
    let agent = UnitConverterAgent::new(
        Arc::new(UnitRegistry::standard()),
        &AgentSettings::from_config(&config),
        provider,
    );

    if !agent.is_conversational() {
        eprintln!();
        eprintln!("  The conversational agent is not available.");
        eprintln!();
        if unitwise_providers::backend_compiled() {
            eprintln!("  Set an API key:");
            eprintln!("    export UNITWISE_API_KEY='sk-...'");
            eprintln!("  or add `api_key` to {}", AppConfig::config_path().display());
        } else {
            eprintln!("  This build has no orchestration backend (feature `openai` is off).");
        }
        eprintln!();
        eprintln!("  Plain conversions still work: unitwise 1 km m");
        eprintln!();
        return Err("no orchestration backend".into());
    }

    let response = agent.ask(message).await?;
    println!("{response}");
    Ok(())
}
