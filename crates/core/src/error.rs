//! Error types for the unitwise domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all unitwise operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Conversion errors ---
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    // --- Provider errors ---
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    // --- Tool errors ---
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// The only two ways a conversion can fail.
///
/// Both carry the unit strings exactly as the caller wrote them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Unsupported unit: {0}")]
    UnknownUnit(String),

    #[error(
        "Cannot convert between '{src_unit}' and '{tgt_unit}' because they belong to different dimensions."
    )]
    IncompatibleUnit { src_unit: String, tgt_unit: String },
}

/// A category table that breaks the registry invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("Unit '{unit}' is registered in both '{first}' and '{second}'")]
    DuplicateUnit {
        unit: String,
        first: String,
        second: String,
    },

    #[error("Unit '{unit}' has invalid factor {factor}; factors must be finite and positive")]
    InvalidFactor { unit: String, factor: f64 },

    #[error("Category '{0}' is registered twice")]
    DuplicateCategory(String),
}

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError {
        status_code: u16,
        message: String,
    },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Network error: {0}")]
    Network(String),
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_unit_displays_verbatim() {
        let err = ConversionError::UnknownUnit("Banana".into());
        assert_eq!(err.to_string(), "Unsupported unit: Banana");
    }

    #[test]
    fn incompatible_unit_names_both() {
        let err = ConversionError::IncompatibleUnit {
            src_unit: "km".into(),
            tgt_unit: "kg".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'km'"));
        assert!(msg.contains("'kg'"));
        assert!(msg.contains("different dimensions"));
    }

    #[test]
    fn conversion_error_is_transparent_in_top_level() {
        let err: Error = ConversionError::UnknownUnit("parsec".into()).into();
        assert_eq!(err.to_string(), "Unsupported unit: parsec");
    }

    #[test]
    fn provider_error_displays_correctly() {
        let err = Error::Provider(ProviderError::ApiError {
            status_code: 429,
            message: "Too many requests".into(),
        });
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("Too many requests"));
    }

    #[test]
    fn tool_error_displays_correctly() {
        let err = Error::Tool(ToolError::InvalidArguments("missing 'value'".into()));
        assert!(err.to_string().contains("missing 'value'"));
    }
}
