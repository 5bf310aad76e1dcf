//! First-run onboarding: welcome, identity, seed phrase, verification.
//!
//! Flow: welcome → create identity → seed phrase → seed verification → done.
//!
//! [`state::Sequencer`] is the pure state machine. [`service`] wraps it with
//! session bookkeeping and the persisted `has_identity` flag, and [`wizard`]
//! drives the service from a terminal.

pub mod error;
pub mod event;
pub mod seed;
pub mod service;
pub mod state;
pub mod wizard;
mod wordlist;

pub use {
    error::{Context, Error, Result, ValidationError},
    event::OnboardingEvent,
    seed::{PlaceholderSeed, RandomSeed, SEED_WORD_COUNT, SeedPhrase, SeedSource},
    service::LiveOnboardingService,
    state::{MAX_DISPLAY_NAME_LEN, OnboardingState, OnboardingStep, Sequencer},
};
