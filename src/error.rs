use thiserror::Error;

/// Rejected arena configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid arena config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
    #[error("paddle_width ({paddle_width}) must be smaller than screen_width ({screen_width})")]
    PaddleTooWide { paddle_width: f32, screen_width: f32 },
}
