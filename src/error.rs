use thiserror::Error;

/// Result type for budget operations that touch files or configuration
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
///
/// Estimation itself never fails; these only surface when loading
/// configuration, pricing tables or item lists.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pricing table is structurally invalid
    #[error("Pricing table error: {0}")]
    PricingTable(String),

    /// File could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Item list or output JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Pricing table TOML could not be parsed
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
