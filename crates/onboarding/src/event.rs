//! Step-completion events raised by the host.

use serde::Deserialize;

/// One user action that completes the current step.
///
/// Deserializes from `{"event": "submit_identity", "display_name": "..."}`
/// style messages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum OnboardingEvent {
    GetStarted,
    SubmitIdentity {
        display_name: String,
    },
    ConfirmSeed {
        #[serde(default)]
        acknowledged: bool,
    },
    Verify {
        word3: String,
        word7: String,
        word11: String,
    },
}

impl OnboardingEvent {
    /// Event name for logging. Never includes user input.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetStarted => "get_started",
            Self::SubmitIdentity { .. } => "submit_identity",
            Self::ConfirmSeed { .. } => "confirm_seed",
            Self::Verify { .. } => "verify",
        }
    }
}
