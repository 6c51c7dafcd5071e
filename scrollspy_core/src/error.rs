// Typed errors with thiserror. Only the JS boundary can fail; tracking itself is total.

use thiserror::Error;

/// Engine error types.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid region list: {0}")]
    InvalidRegions(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EngineError::InvalidConfig("duplicate section id: hero".to_string());
        assert!(err.to_string().contains("duplicate section id"));
    }

    #[test]
    fn serde_errors_convert() {
        let err: EngineError = serde_json::from_str::<Vec<u32>>("[1,")
            .unwrap_err()
            .into();
        assert!(matches!(err, EngineError::Serialization(_)));
    }
}
