//! `unitwise config` — Configuration management commands.

use unitwise_config::AppConfig;

pub fn validate() -> Result<(), Box<dyn std::error::Error>> {
    println!("Validating configuration...");

    match AppConfig::load() {
        Ok(config) => {
            println!("   ok  Config parsed successfully");

            if !config.has_api_key() {
                println!("   !!  No API key set (only needed for `unitwise ask`)");
            }
            if !unitwise_providers::backend_compiled() {
                println!("   !!  Built without the `openai` feature; `unitwise ask` is disabled");
            }

            println!();
            println!("   Provider:  {}", config.default_provider);
            println!("   Model:     {}", config.default_model);
            println!("   JSON out:  {}", config.output.json);
        }
        Err(e) => {
            println!("   ERR Config error: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

pub fn show() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    println!("{}", config.redacted().to_toml()?);
    Ok(())
}

pub fn path() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", AppConfig::config_path().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn config_path_is_valid() {
        let path = unitwise_config::AppConfig::config_path();
        assert!(path.to_str().unwrap().ends_with("config.toml"));
    }
}
