//! Error Types
//!
//! Host-level failures. Form validation never produces these; it reports
//! plain messages inside the wizard instead.

use thiserror::Error;

/// Stable codes for host-level failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Config,
    Io,
    Serialization,
    Terminal,
    Service,
    ChannelClosed,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Config => "PK-CONFIG",
            Self::Io => "PK-IO",
            Self::Serialization => "PK-SERDE",
            Self::Terminal => "PK-TERM",
            Self::Service => "PK-SERVICE",
            Self::ChannelClosed => "PK-CHANNEL",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ProfileKitError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Profile service error: {0}")]
    Service(String),

    #[error("Event channel closed")]
    ChannelClosed,
}

impl ProfileKitError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Config(_) => ErrorCode::Config,
            Self::Io(_) => ErrorCode::Io,
            Self::Json(_) | Self::TomlEncode(_) => ErrorCode::Serialization,
            Self::Terminal(_) => ErrorCode::Terminal,
            Self::Service(_) => ErrorCode::Service,
            Self::ChannelClosed => ErrorCode::ChannelClosed,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProfileKitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ProfileKitError::Config("bad".into()).code(),
            ErrorCode::Config
        );
        assert_eq!(ProfileKitError::ChannelClosed.code().as_str(), "PK-CHANNEL");

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(ProfileKitError::from(json_err).code(), ErrorCode::Serialization);
    }

    #[test]
    fn test_error_display() {
        let err = ProfileKitError::Service("timeout".into());
        assert_eq!(err.to_string(), "Profile service error: timeout");
    }
}
