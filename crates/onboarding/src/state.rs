//! Pure state machine for the onboarding flow. No I/O.

use {
    pursue_config::SeedSourceKind,
    serde::{Deserialize, Serialize},
    tracing::debug,
};

use crate::{
    error::ValidationError,
    event::OnboardingEvent,
    seed::{PlaceholderSeed, SeedPhrase, SeedSource, source_for},
};

/// Longest accepted display name, in characters.
pub const MAX_DISPLAY_NAME_LEN: usize = 30;

/// 1-indexed seed positions the user has to re-enter.
pub const VERIFY_POSITIONS: [usize; 3] = [3, 7, 11];

/// Steps in the onboarding flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    Welcome,
    CreateIdentity,
    SeedPhrase,
    SeedVerification,
    Done,
}

/// Onboarding progress plus everything collected so far.
///
/// Seed words are present exactly on `SeedPhrase`, `SeedVerification` and
/// `Done`. Transitions go through [`Sequencer`], which only moves forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingState {
    step: OnboardingStep,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed_words: Option<SeedPhrase>,
}

impl OnboardingState {
    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn seed_words(&self) -> Option<&SeedPhrase> {
        self.seed_words.as_ref()
    }

    pub fn is_done(&self) -> bool {
        self.step == OnboardingStep::Done
    }

    /// The prompt text to display for the current step.
    pub fn prompt(&self) -> &'static str {
        match self.step {
            OnboardingStep::Welcome => {
                "Welcome to pursue! Achieve goals together. Press Enter to get started."
            },
            OnboardingStep::CreateIdentity => "Choose a display name (1-30 characters):",
            OnboardingStep::SeedPhrase => {
                "This is your recovery phrase. Write it down and keep it somewhere safe."
            },
            OnboardingStep::SeedVerification => {
                "Enter words #3, #7 and #11 of your recovery phrase."
            },
            OnboardingStep::Done => "Your identity is ready!",
        }
    }

    fn require(&self, expected: OnboardingStep) -> Result<(), ValidationError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(ValidationError::InvalidTransition {
                expected,
                actual: self.step,
            })
        }
    }
}

/// Computes the next [`OnboardingState`] from the current one and an event.
pub struct Sequencer {
    seeds: Box<dyn SeedSource>,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(PlaceholderSeed)
    }
}

impl Sequencer {
    pub fn new(seeds: impl SeedSource + 'static) -> Self {
        Self {
            seeds: Box::new(seeds),
        }
    }

    pub fn from_kind(kind: SeedSourceKind) -> Self {
        Self {
            seeds: source_for(kind),
        }
    }

    /// Initial state: `Welcome`, nothing collected.
    pub fn start(&self) -> OnboardingState {
        OnboardingState {
            step: OnboardingStep::Welcome,
            display_name: None,
            seed_words: None,
        }
    }

    /// `Welcome` → `CreateIdentity`.
    pub fn submit_get_started(
        &self,
        state: &OnboardingState,
    ) -> Result<OnboardingState, ValidationError> {
        state.require(OnboardingStep::Welcome)?;
        Ok(OnboardingState {
            step: OnboardingStep::CreateIdentity,
            display_name: None,
            seed_words: None,
        })
    }

    /// `CreateIdentity` → `SeedPhrase`, generating a fresh phrase each time.
    pub fn submit_identity(
        &self,
        state: &OnboardingState,
        display_name: &str,
    ) -> Result<OnboardingState, ValidationError> {
        state.require(OnboardingStep::CreateIdentity)?;

        let len = display_name.chars().count();
        if !(1..=MAX_DISPLAY_NAME_LEN).contains(&len) {
            return Err(ValidationError::NameLength { len });
        }

        let seed_words = self.seeds.generate();
        debug!(name_len = len, words = seed_words.len(), "identity accepted");
        Ok(OnboardingState {
            step: OnboardingStep::SeedPhrase,
            display_name: Some(display_name.to_string()),
            seed_words: Some(seed_words),
        })
    }

    /// `SeedPhrase` → `SeedVerification`, once the user confirms the phrase
    /// is written down.
    pub fn submit_seed_confirmed(
        &self,
        state: &OnboardingState,
        acknowledged: bool,
    ) -> Result<OnboardingState, ValidationError> {
        state.require(OnboardingStep::SeedPhrase)?;
        if !acknowledged {
            return Err(ValidationError::NotAcknowledged);
        }
        Ok(OnboardingState {
            step: OnboardingStep::SeedVerification,
            ..state.clone()
        })
    }

    /// `SeedVerification` → `Done` when words #3, #7 and #11 match,
    /// ignoring case and surrounding whitespace.
    pub fn submit_verification(
        &self,
        state: &OnboardingState,
        word3: &str,
        word7: &str,
        word11: &str,
    ) -> Result<OnboardingState, ValidationError> {
        state.require(OnboardingStep::SeedVerification)?;

        let seed = match state.seed_words.as_ref() {
            Some(seed) if seed.is_complete() => seed,
            other => {
                return Err(ValidationError::SeedUnavailable {
                    found: other.map_or(0, SeedPhrase::len),
                });
            },
        };

        let all_match = VERIFY_POSITIONS
            .iter()
            .zip([word3, word7, word11])
            .all(|(&position, supplied)| {
                seed.word(position)
                    .is_some_and(|expected| words_match(expected, supplied))
            });
        if !all_match {
            return Err(ValidationError::WordMismatch);
        }

        Ok(OnboardingState {
            step: OnboardingStep::Done,
            ..state.clone()
        })
    }

    /// Route a host event to the matching `submit_*` call.
    pub fn dispatch(
        &self,
        state: &OnboardingState,
        event: &OnboardingEvent,
    ) -> Result<OnboardingState, ValidationError> {
        match event {
            OnboardingEvent::GetStarted => self.submit_get_started(state),
            OnboardingEvent::SubmitIdentity { display_name } => {
                self.submit_identity(state, display_name)
            },
            OnboardingEvent::ConfirmSeed { acknowledged } => {
                self.submit_seed_confirmed(state, *acknowledged)
            },
            OnboardingEvent::Verify {
                word3,
                word7,
                word11,
            } => self.submit_verification(state, word3, word7, word11),
        }
    }
}

fn words_match(expected: &str, supplied: &str) -> bool {
    expected.to_lowercase() == supplied.trim().to_lowercase()
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, crate::seed::SEED_WORD_COUNT, rstest::rstest};

    /// Fixed phrase whose checked words are easy to spot.
    struct NumberedSeed;

    impl SeedSource for NumberedSeed {
        fn generate(&self) -> SeedPhrase {
            SeedPhrase::from_words((1..=12).map(|i| format!("word{i}")).collect())
        }
    }

    fn at_identity(seq: &Sequencer) -> OnboardingState {
        seq.submit_get_started(&seq.start()).unwrap()
    }

    fn at_verification(seq: &Sequencer) -> OnboardingState {
        let s = seq.submit_identity(&at_identity(seq), "Alice").unwrap();
        seq.submit_seed_confirmed(&s, true).unwrap()
    }

    #[test]
    fn full_flow() {
        let seq = Sequencer::default();
        let s = seq.start();
        assert_eq!(s.step(), OnboardingStep::Welcome);
        assert!(s.seed_words().is_none());

        let s = seq.submit_get_started(&s).unwrap();
        assert_eq!(s.step(), OnboardingStep::CreateIdentity);

        let s = seq.submit_identity(&s, "Alice").unwrap();
        assert_eq!(s.step(), OnboardingStep::SeedPhrase);
        assert_eq!(s.display_name(), Some("Alice"));
        let words = s.seed_words().unwrap().clone();
        assert_eq!(words.len(), SEED_WORD_COUNT);

        let s = seq.submit_seed_confirmed(&s, true).unwrap();
        assert_eq!(s.step(), OnboardingStep::SeedVerification);
        assert_eq!(s.seed_words(), Some(&words));

        let s = seq
            .submit_verification(&s, &words.words()[2], &words.words()[6], &words.words()[10])
            .unwrap();
        assert!(s.is_done());
        assert_eq!(s.display_name(), Some("Alice"));
        assert_eq!(s.seed_words(), Some(&words));
    }

    #[rstest]
    #[case("", 0)]
    #[case("abcdefghijklmnopqrstuvwxyzabcde", 31)]
    #[case("the quick brown fox jumps over the lazy dog twice", 49)]
    fn rejects_bad_name_length(#[case] name: &str, #[case] len: usize) {
        let seq = Sequencer::default();
        let s = at_identity(&seq);
        assert_eq!(
            seq.submit_identity(&s, name),
            Err(ValidationError::NameLength { len })
        );
        assert_eq!(s.step(), OnboardingStep::CreateIdentity);
    }

    #[rstest]
    #[case("A")]
    #[case("Alice")]
    #[case("abcdefghijklmnopqrstuvwxyzabcd")]
    #[case("Zoë 🦊")]
    #[case("   ")]
    fn accepts_names_within_bounds(#[case] name: &str) {
        let seq = Sequencer::default();
        let s = seq.submit_identity(&at_identity(&seq), name).unwrap();
        assert_eq!(s.seed_words().unwrap().len(), 12);
        assert_eq!(s.display_name(), Some(name));
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let seq = Sequencer::default();
        // 30 two-byte characters.
        let name = "é".repeat(30);
        assert!(seq.submit_identity(&at_identity(&seq), &name).is_ok());
    }

    #[test]
    fn resubmitting_identity_regenerates() {
        let seq = Sequencer::new(crate::seed::RandomSeed);
        let s = at_identity(&seq);
        let first = seq.submit_identity(&s, "Alice").unwrap();
        let second = seq.submit_identity(&s, "Alice").unwrap();
        for out in [&first, &second] {
            assert_eq!(out.step(), OnboardingStep::SeedPhrase);
            assert_eq!(out.seed_words().unwrap().len(), 12);
        }
        // Input state is untouched.
        assert_eq!(s.step(), OnboardingStep::CreateIdentity);
        assert!(s.seed_words().is_none());
    }

    #[test]
    fn seed_confirmation_requires_acknowledgment() {
        let seq = Sequencer::default();
        let s = seq.submit_identity(&at_identity(&seq), "Alice").unwrap();
        assert_eq!(
            seq.submit_seed_confirmed(&s, false),
            Err(ValidationError::NotAcknowledged)
        );
        assert_eq!(s.step(), OnboardingStep::SeedPhrase);
    }

    #[test]
    fn verification_ignores_case_and_whitespace() {
        let seq = Sequencer::new(NumberedSeed);
        let s = at_verification(&seq);
        let done = seq
            .submit_verification(&s, "WORD3", " Word7 ", "word11\n")
            .unwrap();
        assert!(done.is_done());
    }

    #[rstest]
    #[case("wordX", "word7", "word11")]
    #[case("word3", "wordX", "word11")]
    #[case("word3", "word7", "wordX")]
    #[case("word7", "word3", "word11")]
    #[case("", "", "")]
    fn any_single_mismatch_fails(#[case] w3: &str, #[case] w7: &str, #[case] w11: &str) {
        let seq = Sequencer::new(NumberedSeed);
        let s = at_verification(&seq);
        assert_eq!(
            seq.submit_verification(&s, w3, w7, w11),
            Err(ValidationError::WordMismatch)
        );
        assert_eq!(s.step(), OnboardingStep::SeedVerification);
    }

    #[test]
    fn short_seed_is_unavailable() {
        let seq = Sequencer::default();
        let corrupt: OnboardingState = serde_json::from_value(serde_json::json!({
            "step": "seed_verification",
            "display_name": "Alice",
            "seed_words": ["one", "two", "three"],
        }))
        .unwrap();
        assert_eq!(
            seq.submit_verification(&corrupt, "three", "", ""),
            Err(ValidationError::SeedUnavailable { found: 3 })
        );

        let missing: OnboardingState =
            serde_json::from_value(serde_json::json!({ "step": "seed_verification" })).unwrap();
        assert_eq!(
            seq.submit_verification(&missing, "", "", ""),
            Err(ValidationError::SeedUnavailable { found: 0 })
        );
    }

    #[test]
    fn get_started_drops_stray_fields() {
        let seq = Sequencer::default();
        let welcome: OnboardingState = serde_json::from_value(serde_json::json!({
            "step": "welcome",
            "display_name": "Mallory",
            "seed_words": PlaceholderSeed.generate(),
        }))
        .unwrap();

        let s = seq.submit_get_started(&welcome).unwrap();
        assert_eq!(s.step(), OnboardingStep::CreateIdentity);
        assert!(s.seed_words().is_none());
        assert!(s.display_name().is_none());
    }

    #[test]
    fn long_seed_is_unavailable() {
        let seq = Sequencer::new(NumberedSeed);
        let words: Vec<String> = (1..=13).map(|i| format!("word{i}")).collect();
        let state: OnboardingState = serde_json::from_value(serde_json::json!({
            "step": "seed_verification",
            "display_name": "Alice",
            "seed_words": words,
        }))
        .unwrap();
        assert_eq!(
            seq.submit_verification(&state, "word3", "word7", "word11"),
            Err(ValidationError::SeedUnavailable { found: 13 })
        );
    }

    #[test]
    fn wrong_step_is_invalid_transition() {
        let seq = Sequencer::default();
        let welcome = seq.start();

        assert_eq!(
            seq.submit_identity(&welcome, "Alice"),
            Err(ValidationError::InvalidTransition {
                expected: OnboardingStep::CreateIdentity,
                actual: OnboardingStep::Welcome,
            })
        );
        assert!(matches!(
            seq.submit_seed_confirmed(&welcome, true),
            Err(ValidationError::InvalidTransition { .. })
        ));
        assert!(matches!(
            seq.submit_verification(&welcome, "a", "b", "c"),
            Err(ValidationError::InvalidTransition { .. })
        ));
        assert_eq!(welcome.step(), OnboardingStep::Welcome);

        let identity = at_identity(&seq);
        assert_eq!(
            seq.submit_get_started(&identity),
            Err(ValidationError::InvalidTransition {
                expected: OnboardingStep::Welcome,
                actual: OnboardingStep::CreateIdentity,
            })
        );
        assert_eq!(identity.step(), OnboardingStep::CreateIdentity);
    }

    #[test]
    fn step_check_precedes_name_check() {
        let seq = Sequencer::default();
        assert!(matches!(
            seq.submit_identity(&seq.start(), ""),
            Err(ValidationError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn done_is_terminal() {
        let seq = Sequencer::new(NumberedSeed);
        let done = seq
            .submit_verification(&at_verification(&seq), "word3", "word7", "word11")
            .unwrap();
        assert!(seq.submit_get_started(&done).is_err());
        assert!(seq.submit_identity(&done, "Bob").is_err());
        assert!(seq.submit_seed_confirmed(&done, true).is_err());
        assert!(seq.submit_verification(&done, "word3", "word7", "word11").is_err());
    }

    #[test]
    fn dispatch_routes_events() {
        let seq = Sequencer::new(NumberedSeed);
        let mut s = seq.start();
        for event in [
            OnboardingEvent::GetStarted,
            OnboardingEvent::SubmitIdentity {
                display_name: "Alice".into(),
            },
            OnboardingEvent::ConfirmSeed { acknowledged: true },
            OnboardingEvent::Verify {
                word3: "word3".into(),
                word7: "word7".into(),
                word11: "word11".into(),
            },
        ] {
            s = seq.dispatch(&s, &event).unwrap();
        }
        assert!(s.is_done());
    }

    #[test]
    fn state_round_trips_through_json() {
        let seq = Sequencer::default();
        let s = seq.submit_identity(&at_identity(&seq), "Alice").unwrap();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["step"], "seed_phrase");
        assert_eq!(json["seed_words"].as_array().unwrap().len(), 12);
        let back: OnboardingState = serde_json::from_value(json).unwrap();
        assert_eq!(back, s);
    }
}
