use thiserror::Error;

/// Which outbound collaborator a failure originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    Geolocation,
    Weather,
}

impl Collaborator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collaborator::Geolocation => "geolocation",
            Collaborator::Weather => "weather",
        }
    }
}

impl std::fmt::Display for Collaborator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-request failure taxonomy.
///
/// Every fallible step of a forecast request maps into exactly one of these
/// variants; none of them are allowed to escape to the transport layer as a
/// panic or a raw exception.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The request itself was malformed (e.g. `days` above the provider limit).
    #[error("invalid request: {message}")]
    Validation { message: String },

    /// An outbound call failed, timed out, or returned an unusable body.
    /// An unknown city is a geolocation collaborator failure, not a crash.
    #[error("{collaborator} collaborator failed: {message}")]
    Collaborator {
        collaborator: Collaborator,
        message: String,
    },

    /// The weather collaborator returned fewer rows than the requested
    /// window needs. A contract violation by the provider, never truncated
    /// over silently.
    #[error("forecast shaping failed: {message}")]
    Shaping { message: String },
}

impl ForecastError {
    pub fn validation(message: impl Into<String>) -> Self {
        ForecastError::Validation { message: message.into() }
    }

    pub fn collaborator(collaborator: Collaborator, message: impl Into<String>) -> Self {
        ForecastError::Collaborator { collaborator, message: message.into() }
    }

    pub fn shaping(message: impl Into<String>) -> Self {
        ForecastError::Shaping { message: message.into() }
    }

    /// Machine-readable error kind for wire responses.
    pub fn kind(&self) -> &'static str {
        match self {
            ForecastError::Validation { .. } => "validation_error",
            ForecastError::Collaborator { .. } => "collaborator_error",
            ForecastError::Shaping { .. } => "shaping_error",
        }
    }

    /// Validation errors are the caller's fault; everything else is ours
    /// or the provider's.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ForecastError::Validation { .. })
    }
}

/// Fatal startup configuration problems. These abort the process before it
/// starts serving; they are never produced per-request.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("environment variable {0} is set but empty")]
    EmptyVar(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_is_stable_per_variant() {
        assert_eq!(ForecastError::validation("days too large").kind(), "validation_error");
        assert_eq!(
            ForecastError::collaborator(Collaborator::Geolocation, "boom").kind(),
            "collaborator_error"
        );
        assert_eq!(ForecastError::shaping("short column").kind(), "shaping_error");
    }

    #[test]
    fn only_validation_is_a_client_error() {
        assert!(ForecastError::validation("nope").is_client_error());
        assert!(!ForecastError::collaborator(Collaborator::Weather, "down").is_client_error());
        assert!(!ForecastError::shaping("short").is_client_error());
    }

    #[test]
    fn collaborator_name_appears_in_message() {
        let err = ForecastError::collaborator(Collaborator::Weather, "status 503");
        assert!(err.to_string().contains("weather collaborator failed"));
    }
}
