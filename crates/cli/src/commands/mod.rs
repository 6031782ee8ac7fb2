pub mod ask;
pub mod config_cmd;
pub mod convert;
pub mod doctor;
pub mod units;

use unitwise_config::AppConfig;

/// Load config, falling back to defaults so a broken file never blocks a conversion.
pub(crate) fn load_config_or_default() -> AppConfig {
    AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Ignoring config: {e}");
        AppConfig::default()
    })
}
