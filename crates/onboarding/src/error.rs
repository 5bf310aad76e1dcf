use pursue_common::FromMessage;

use crate::state::OnboardingStep;

/// A rejected step-completion event. The host re-displays the current step
/// with an inline error and lets the user retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("display name must be 1 to 30 characters, got {len}")]
    NameLength { len: usize },
    #[error("confirm that the seed phrase has been written down")]
    NotAcknowledged,
    #[error("one or more words do not match the seed phrase")]
    WordMismatch,
    #[error("seed phrase unavailable: expected 12 words, found {found}")]
    SeedUnavailable { found: usize },
    #[error("cannot leave {actual:?} with this action, it requires {expected:?}")]
    InvalidTransition {
        expected: OnboardingStep,
        actual: OnboardingStep,
    },
}

impl ValidationError {
    /// Stable snake_case tag used in JSON responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NameLength { .. } => "name_length",
            Self::NotAcknowledged => "not_acknowledged",
            Self::WordMismatch => "word_mismatch",
            Self::SeedUnavailable { .. } => "seed_unavailable",
            Self::InvalidTransition { .. } => "invalid_transition",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Config(#[from] pursue_config::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("no active onboarding session")]
    NoActiveSession,
    #[error("account restore is not available yet")]
    RestoreUnsupported,
    #[error("{message}")]
    Message { message: String },
}

impl FromMessage for Error {
    fn from_message(message: String) -> Self {
        Self::Message { message }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pursue_common::impl_context!();
