//! Terminal-based onboarding using the live service.

use std::io::{BufRead, Write};

use {pursue_config::PursueConfig, tracing::warn};

use crate::{
    error::{Error, Result},
    event::OnboardingEvent,
    service::LiveOnboardingService,
    state::{MAX_DISPLAY_NAME_LEN, OnboardingState, OnboardingStep, VERIFY_POSITIONS},
};

/// How a terminal run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed { display_name: String },
    AlreadyOnboarded,
    Aborted,
}

/// Run the interactive onboarding flow on stdin/stdout.
pub fn run_onboarding(config: &PursueConfig, force: bool) -> Result<Outcome> {
    let svc = LiveOnboardingService::from_config(config);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_with(&svc, force, stdin.lock(), &mut stdout)
}

/// Drive `svc` from `input` until onboarding completes or input runs out.
///
/// `back` re-enters the previous step from any step after the welcome
/// screen, `quit` aborts from the welcome screen.
pub fn run_with<R: BufRead, W: Write>(
    svc: &LiveOnboardingService,
    force: bool,
    mut input: R,
    out: &mut W,
) -> Result<Outcome> {
    let start = svc.wizard_start(force)?;
    if start["onboarded"] == true {
        writeln!(out, "An identity already exists on this device.")?;
        return Ok(Outcome::AlreadyOnboarded);
    }

    while let Some(state) = svc.current_state() {
        writeln!(out)?;
        writeln!(out, "{}", state.prompt())?;

        let Some(action) = ask(&state, &mut input, out)? else {
            svc.wizard_cancel();
            writeln!(out, "Onboarding cancelled.")?;
            return Ok(Outcome::Aborted);
        };

        let resp = match action {
            Action::Back => svc.wizard_back()?,
            Action::Restore => {
                match svc.restore_account() {
                    Err(Error::RestoreUnsupported) => {
                        writeln!(out, "Account restore is not available yet.")?;
                    },
                    Err(e) => return Err(e),
                    Ok(_) => {},
                }
                continue;
            },
            Action::Event(event) => match svc.wizard_dispatch(&event) {
                Ok(resp) => resp,
                Err(Error::NoActiveSession) => return Err(Error::NoActiveSession),
                Err(e) => {
                    // The session is still on the same step; let the user retry.
                    warn!(event = event.name(), error = %e, "step failed");
                    writeln!(out, "  ! {e}")?;
                    continue;
                },
            },
        };

        if let Some(message) = resp["error"]["message"].as_str() {
            writeln!(out, "  ! {message}")?;
        }
        if resp["done"] == true {
            writeln!(out)?;
            writeln!(out, "{}", resp["prompt"].as_str().unwrap_or_default())?;
            let display_name = resp["display_name"]
                .as_str()
                .unwrap_or_default()
                .to_string();
            return Ok(Outcome::Completed { display_name });
        }
    }

    Ok(Outcome::Aborted)
}

enum Action {
    Event(OnboardingEvent),
    Back,
    Restore,
}

/// Collect the input for the current step. `None` means abort.
fn ask<R: BufRead, W: Write>(
    state: &OnboardingState,
    input: &mut R,
    out: &mut W,
) -> Result<Option<Action>> {
    match state.step() {
        OnboardingStep::Welcome => {
            writeln!(out, "(type 'restore' to restore an existing account)")?;
            let Some(line) = prompt_line(input, out, "> ")? else {
                return Ok(None);
            };
            Ok(match line.trim() {
                "quit" => None,
                "restore" => Some(Action::Restore),
                _ => Some(Action::Event(OnboardingEvent::GetStarted)),
            })
        },
        OnboardingStep::CreateIdentity => {
            let Some(name) = prompt_line(input, out, "> ")? else {
                return Ok(None);
            };
            if name.trim() == "back" {
                return Ok(Some(Action::Back));
            }
            let len = name.chars().count();
            if !(1..=MAX_DISPLAY_NAME_LEN).contains(&len) {
                writeln!(out, "  {len}/{MAX_DISPLAY_NAME_LEN}")?;
            }
            Ok(Some(Action::Event(OnboardingEvent::SubmitIdentity {
                display_name: name,
            })))
        },
        OnboardingStep::SeedPhrase => {
            if let Some(seed) = state.seed_words() {
                print_grid(out, seed.words())?;
            }
            let Some(line) = prompt_line(input, out, "Type 'yes' once you have written it down: ")?
            else {
                return Ok(None);
            };
            let answer = line.trim();
            if answer == "back" {
                return Ok(Some(Action::Back));
            }
            Ok(Some(Action::Event(OnboardingEvent::ConfirmSeed {
                acknowledged: answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y"),
            })))
        },
        OnboardingStep::SeedVerification => {
            let mut words = Vec::with_capacity(VERIFY_POSITIONS.len());
            for position in VERIFY_POSITIONS {
                let Some(word) = prompt_line(input, out, &format!("Word #{position}: "))? else {
                    return Ok(None);
                };
                if word.trim() == "back" {
                    return Ok(Some(Action::Back));
                }
                words.push(word);
            }
            let mut words = words.into_iter();
            Ok(Some(Action::Event(OnboardingEvent::Verify {
                word3: words.next().unwrap_or_default(),
                word7: words.next().unwrap_or_default(),
                word11: words.next().unwrap_or_default(),
            })))
        },
        OnboardingStep::Done => Ok(None),
    }
}

/// Print `label`, then read one line without its line ending.
/// Returns `None` at end of input.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Numbered words in two columns, filled row by row.
fn print_grid<W: Write>(out: &mut W, words: &[String]) -> std::io::Result<()> {
    writeln!(out)?;
    for (row, pair) in words.chunks(2).enumerate() {
        let n = row * 2 + 1;
        match pair {
            [left, right] => writeln!(out, "  {n:>2}. {left:<14} {:>2}. {right}", n + 1)?,
            [left] => writeln!(out, "  {n:>2}. {left}")?,
            _ => {},
        }
    }
    writeln!(out)
}
