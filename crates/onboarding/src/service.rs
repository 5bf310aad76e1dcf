//! Live onboarding service: one in-flight session, back navigation, and the
//! persisted `has_identity` flag.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use {
    pursue_config::{KEY_HAS_IDENTITY, PreferencesStore, PursueConfig, TomlPreferencesStore},
    serde_json::{Value, json},
    tracing::{debug, info, warn},
};

use crate::{
    error::{Context, Error, Result, ValidationError},
    event::OnboardingEvent,
    state::{OnboardingState, OnboardingStep, Sequencer, VERIFY_POSITIONS},
};

/// The active flow plus the states the host can go back to.
struct Session {
    state: OnboardingState,
    history: Vec<OnboardingState>,
}

/// Live onboarding service backed by a [`Sequencer`] and a preferences store.
pub struct LiveOnboardingService {
    session: Mutex<Option<Session>>,
    sequencer: Sequencer,
    prefs: Arc<dyn PreferencesStore>,
}

impl LiveOnboardingService {
    pub fn new(sequencer: Sequencer, prefs: Arc<dyn PreferencesStore>) -> Self {
        Self {
            session: Mutex::new(None),
            sequencer,
            prefs,
        }
    }

    /// Seed source and preferences file both come from `config`.
    pub fn from_config(config: &PursueConfig) -> Self {
        let path = config.preferences_path();
        debug!(path = %path.display(), seed_source = ?config.onboarding.seed_source, "onboarding service");
        Self::new(
            Sequencer::from_kind(config.onboarding.seed_source),
            Arc::new(TomlPreferencesStore::new(path)),
        )
    }

    fn session(&self) -> MutexGuard<'_, Option<Session>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether a previous run already finished onboarding.
    pub fn has_identity(&self) -> Result<bool> {
        Ok(self.prefs.get_bool(KEY_HAS_IDENTITY)?)
    }

    /// Forget the stored identity flag so the next start runs onboarding.
    pub fn reset_identity(&self) -> Result<()> {
        self.prefs
            .remove(KEY_HAS_IDENTITY)
            .context("could not clear identity flag")?;
        info!("identity flag cleared");
        Ok(())
    }

    /// Start the flow. Returns current step info.
    ///
    /// If `force` is true, onboarding starts even when an identity already
    /// exists.
    pub fn wizard_start(&self, force: bool) -> Result<Value> {
        if !force && self.has_identity()? {
            return Ok(json!({
                "onboarded": true,
                "step": OnboardingStep::Done,
                "prompt": "An identity already exists on this device.",
                "done": true,
            }));
        }

        let state = self.sequencer.start();
        let resp = step_response(&state, false);
        *self.session() = Some(Session {
            state,
            history: Vec::new(),
        });
        debug!(force, "onboarding started");
        Ok(resp)
    }

    /// Apply a step-completion event to the active session.
    ///
    /// A rejected event leaves the session untouched and comes back as an
    /// `error` field on the current step, so the host can show it inline and
    /// let the user retry.
    pub fn wizard_dispatch(&self, event: &OnboardingEvent) -> Result<Value> {
        let mut guard = self.session();
        let session = guard.as_mut().ok_or(Error::NoActiveSession)?;

        let next = match self.sequencer.dispatch(&session.state, event) {
            Ok(next) => next,
            Err(err) => {
                debug!(event = event.name(), step = ?session.state.step(), code = err.code(), "event rejected");
                let mut resp = step_response(&session.state, !session.history.is_empty());
                resp["error"] = error_json(&err);
                return Ok(resp);
            },
        };

        if next.is_done() {
            // Persist before committing so a failed write can be retried.
            self.prefs
                .set_bool(KEY_HAS_IDENTITY, true)
                .context("could not save identity flag")?;
            info!("onboarding complete");
            let resp = json!({
                "step": next.step(),
                "prompt": next.prompt(),
                "done": true,
                "onboarded": true,
                "display_name": next.display_name(),
            });
            *guard = None;
            return Ok(resp);
        }

        debug!(event = event.name(), from = ?session.state.step(), to = ?next.step(), "step advanced");
        let previous = std::mem::replace(&mut session.state, next);
        session.history.push(previous);
        Ok(step_response(&session.state, true))
    }

    /// Re-enter the previous step without re-validating it.
    ///
    /// Does nothing on the first step.
    pub fn wizard_back(&self) -> Result<Value> {
        let mut guard = self.session();
        let session = guard.as_mut().ok_or(Error::NoActiveSession)?;
        if let Some(previous) = session.history.pop() {
            debug!(from = ?session.state.step(), to = ?previous.step(), "step back");
            session.state = previous;
        }
        Ok(step_response(&session.state, !session.history.is_empty()))
    }

    /// Cancel an active session.
    pub fn wizard_cancel(&self) {
        if self.session().take().is_some() {
            debug!("onboarding cancelled");
        }
    }

    /// Return the current onboarding status.
    pub fn wizard_status(&self) -> Value {
        let onboarded = self.has_identity().unwrap_or_else(|e| {
            warn!(error = %e, "failed to read identity flag");
            false
        });
        match self.session().as_ref() {
            Some(session) => json!({
                "active": true,
                "step": session.state.step(),
                "onboarded": onboarded,
            }),
            None => json!({
                "active": false,
                "onboarded": onboarded,
            }),
        }
    }

    /// Snapshot of the active session's state, if any.
    pub fn current_state(&self) -> Option<OnboardingState> {
        self.session().as_ref().map(|s| s.state.clone())
    }

    /// Restoring an existing account from its seed phrase is not supported.
    pub fn restore_account(&self) -> Result<Value> {
        warn!("account restore requested but not implemented");
        Err(Error::RestoreUnsupported)
    }
}

fn error_json(err: &ValidationError) -> Value {
    json!({
        "code": err.code(),
        "message": err.to_string(),
    })
}

fn step_response(state: &OnboardingState, can_go_back: bool) -> Value {
    let mut resp = json!({
        "step": state.step(),
        "prompt": state.prompt(),
        "done": state.is_done(),
        "onboarded": false,
        "display_name": state.display_name(),
        "can_go_back": can_go_back,
    });
    match state.step() {
        OnboardingStep::SeedPhrase => {
            resp["seed_words"] = json!(state.seed_words().map(|s| s.words()));
        },
        OnboardingStep::SeedVerification => {
            resp["verify_positions"] = json!(VERIFY_POSITIONS);
        },
        _ => {},
    }
    resp
}
