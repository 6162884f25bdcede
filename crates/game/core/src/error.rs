//! Error taxonomy shared by every layer of the game.
//!
//! Domain failures are never raised as ad-hoc strings: each one is a
//! [`GameError`] carrying one of the [`ErrorKind`] values below. A kind maps to
//! a default English message; an error instance may override that message
//! with more context and may wrap the underlying cause (I/O, JSON).
//!
//! # Propagation
//!
//! - **Rule violations** (`InsufficientDust`, `UpgradeMaxLevel`,
//!   `UpgradeNotFound`) are expected outcomes of normal play and are returned
//!   to the immediate caller.
//! - **Persistence failures** surface as `Unknown` with a context message, or
//!   as `UnknownEventType` when an event log names a kind we cannot decode.
/// Numeric codes start from a base to stay clear of other error spaces.
const CODE_BASE: u16 = 1000;

/// A specific error condition in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::AsRefStr, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Catch-all, including wrapped I/O and serialization failures.
    Unknown,
    InsufficientDust,
    UpgradeMaxLevel,
    UpgradeNotFound,
    UnknownEventType,
}

impl ErrorKind {
    const ALL: [ErrorKind; 5] = [
        ErrorKind::Unknown,
        ErrorKind::InsufficientDust,
        ErrorKind::UpgradeMaxLevel,
        ErrorKind::UpgradeNotFound,
        ErrorKind::UnknownEventType,
    ];

    /// Default human-readable message for this kind.
    pub const fn default_message(&self) -> &'static str {
        match self {
            ErrorKind::Unknown => "An unknown error occurred.",
            ErrorKind::InsufficientDust => "Not enough dust to purchase upgrade.",
            ErrorKind::UpgradeMaxLevel => "Upgrade already at max level.",
            ErrorKind::UpgradeNotFound => "Upgrade not found.",
            ErrorKind::UnknownEventType => "Unknown event type encountered.",
        }
    }

    /// Stable numeric code (`1000` for `Unknown`, then declaration order).
    pub const fn code(&self) -> u16 {
        match self {
            ErrorKind::Unknown => CODE_BASE,
            ErrorKind::InsufficientDust => CODE_BASE + 1,
            ErrorKind::UpgradeMaxLevel => CODE_BASE + 2,
            ErrorKind::UpgradeNotFound => CODE_BASE + 3,
            ErrorKind::UnknownEventType => CODE_BASE + 4,
        }
    }

    /// Resolves a numeric code back into a kind.
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Message for a numeric code, falling back to `Unknown`'s message.
    pub fn message_for_code(code: u16) -> &'static str {
        Self::from_code(code)
            .unwrap_or(ErrorKind::Unknown)
            .default_message()
    }

    /// Returns true for the expected, recoverable outcomes of normal play.
    pub const fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            ErrorKind::InsufficientDust | ErrorKind::UpgradeMaxLevel | ErrorKind::UpgradeNotFound
        )
    }
}

type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Typed domain error: a kind, an optional override message and an optional cause.
#[derive(Debug, thiserror::Error)]
#[error("{}", .message.as_deref().unwrap_or(.kind.default_message()))]
pub struct GameError {
    kind: ErrorKind,
    message: Option<String>,
    #[source]
    source: Option<BoxedSource>,
}

impl GameError {
    /// Creates an error that displays its kind's default message.
    pub const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            source: None,
        }
    }

    /// Creates an error with an override message.
    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Shorthand for an `Unknown` error carrying context.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::Unknown, message)
    }

    /// Attaches the underlying cause (builder pattern).
    #[must_use]
    pub fn with_source(mut self, source: impl Into<BoxedSource>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The override message if one was given, else the kind's default.
    pub fn message(&self) -> &str {
        self.message
            .as_deref()
            .unwrap_or_else(|| self.kind.default_message())
    }

    pub const fn code(&self) -> u16 {
        self.kind.code()
    }

    pub const fn is_rule_violation(&self) -> bool {
        self.kind.is_rule_violation()
    }
}

impl From<ErrorKind> for GameError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn default_message_is_used_without_override() {
        let err = GameError::new(ErrorKind::InsufficientDust);
        assert_eq!(err.to_string(), "Not enough dust to purchase upgrade.");
        assert!(err.is_rule_violation());
    }

    #[test]
    fn override_message_wins() {
        let err = GameError::with_message(ErrorKind::UpgradeNotFound, "no such upgrade: drill");
        assert_eq!(err.kind(), ErrorKind::UpgradeNotFound);
        assert_eq!(err.to_string(), "no such upgrade: drill");
    }

    #[test]
    fn codes_follow_declaration_order() {
        assert_eq!(ErrorKind::Unknown.code(), 1000);
        assert_eq!(ErrorKind::UnknownEventType.code(), 1004);
        assert_eq!(ErrorKind::from_code(1002), Some(ErrorKind::UpgradeMaxLevel));
    }

    #[test]
    fn unrecognized_code_falls_back_to_unknown_message() {
        assert_eq!(
            ErrorKind::message_for_code(4242),
            ErrorKind::Unknown.default_message()
        );
        assert_eq!(
            ErrorKind::message_for_code(1001),
            "Not enough dust to purchase upgrade."
        );
    }

    #[test]
    fn source_is_exposed() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = GameError::unknown("failed to save snapshot").with_source(io);

        assert_eq!(err.kind(), ErrorKind::Unknown);
        assert!(!err.is_rule_violation());
        assert_eq!(err.source().map(|s| s.to_string()), Some("read-only".into()));
    }
}
