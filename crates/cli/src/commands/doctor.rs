//! `unitwise doctor` — Diagnose setup.

use unitwise_config::AppConfig;
use unitwise_core::units::{Category, UnitRegistry};

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("unitwise doctor");
    println!("===============\n");

    let mut issues = 0;

    // The built-in table must satisfy the same checks as a custom one.
    match UnitRegistry::from_categories(vec![Category::length(), Category::weight()]) {
        Ok(registry) => println!("  ok  Unit registry valid ({} units)", registry.units().count()),
        Err(e) => {
            println!("  ERR Unit registry invalid: {e}");
            issues += 1;
        }
    }

    let config_path = AppConfig::config_path();
    let config = if config_path.exists() {
        match AppConfig::load() {
            Ok(config) => {
                println!("  ok  Config file valid");
                config
            }
            Err(e) => {
                println!("  ERR Config file invalid: {e}");
                issues += 1;
                AppConfig::default()
            }
        }
    } else {
        println!("  --  No config file at {} (defaults in use)", config_path.display());
        AppConfig::default()
    };

    if !unitwise_providers::backend_compiled() {
        println!("  --  Built without the `openai` feature; conversational agent disabled");
    } else {
        match unitwise_providers::build_from_config(&config) {
            Some(provider) => match provider.health_check().await {
                Ok(true) => println!("  ok  Provider '{}' reachable", provider.name()),
                Ok(false) => {
                    println!("  !!  Provider '{}' answered but rejected the request", provider.name());
                    issues += 1;
                }
                Err(e) => {
                    println!("  !!  Provider '{}' unreachable: {e}", provider.name());
                    issues += 1;
                }
            },
            None => println!("  --  No API key configured; `unitwise ask` disabled"),
        }
    }

    println!();
    if issues == 0 {
        println!("  All checks passed.");
    } else {
        println!("  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
