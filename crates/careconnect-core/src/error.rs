use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown severity label: {0}")]
    UnknownSeverity(String),

    #[error("unknown urgency label: {0}")]
    UnknownUrgency(String),

    #[error("unknown recommendation tier: {0}")]
    UnknownTier(String),
}
