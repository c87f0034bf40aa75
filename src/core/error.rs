//! Error types for region sampling

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected sampler or scene configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Every bounding-box face of the named object is degenerate.
    #[error("Couldn't find a face for object: {0}")]
    NoSelectableFace(String),

    /// Sampler state that construction should have made impossible.
    #[error("Internal invariant violated: {0}")]
    InternalInvariant(String),

    /// The optional attempt cap ran out before a ray check hit.
    #[error("Ray check on '{object}' found no hit after {attempts} attempts")]
    RayCheckExhausted { object: String, attempts: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_object() {
        let err = Error::NoSelectableFace("Table.001".to_string());
        assert!(err.to_string().contains("Table.001"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
