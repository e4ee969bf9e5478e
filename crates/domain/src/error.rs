//! Common error types used across the workspace.

/// Top-level error for the simulator.
///
/// Each layer converts its own failures into one of these variants via
/// `#[from]`; adapters map them onto transport-level responses.
#[derive(Debug, thiserror::Error)]
pub enum PicoMockError {
    /// The request body was missing or not valid JSON.
    #[error("invalid request body")]
    Body(#[from] BodyError),

    /// A fixture body could not be serialized or deserialized.
    #[error("fixture serialization failed")]
    Fixture(#[from] serde_json::Error),
}

/// Failures while reading a request body that a mutation hook consumes.
#[derive(Debug, thiserror::Error)]
pub enum BodyError {
    /// The method carries a body-consuming hook but no body was sent.
    #[error("empty body")]
    Empty,

    /// The body was present but not parseable as JSON.
    #[error("body is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),

    /// The body could not be read from the transport.
    #[error("body could not be read")]
    Unreadable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_body_error_into_top_level_error() {
        let err: PicoMockError = BodyError::Empty.into();
        assert!(matches!(err, PicoMockError::Body(BodyError::Empty)));
    }

    #[test]
    fn should_convert_serde_error_into_fixture_variant() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PicoMockError = serde_err.into();
        assert!(matches!(err, PicoMockError::Fixture(_)));
    }

    #[test]
    fn should_display_empty_body_message() {
        assert_eq!(BodyError::Empty.to_string(), "empty body");
    }
}
