//! Error types for Pageglow

use thiserror::Error;

/// Main error type for Pageglow operations
#[derive(Error, Debug)]
pub enum EnhanceError {
    /// Selector string could not be parsed
    #[error("Selector parse error: {0}")]
    SelectorParse(String),

    /// Selector syntax is valid CSS but outside the supported subset
    #[error("Unsupported selector: {0}")]
    UnsupportedSelector(String),
}

/// Result type alias using EnhanceError
pub type EnhanceResult<T> = Result<T, EnhanceError>;
