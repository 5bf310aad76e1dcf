//! `pursue status` and `pursue reset`.

use {anyhow::Result, pursue_config::PursueConfig, pursue_onboarding::LiveOnboardingService};

pub fn handle_status(config: &PursueConfig) -> Result<()> {
    let svc = LiveOnboardingService::from_config(config);
    let path = config.preferences_path();
    if svc.has_identity()? {
        println!("Identity: present ({})", path.display());
    } else {
        println!("Identity: none. Run `pursue onboard` to create one.");
    }
    Ok(())
}

pub fn handle_reset(config: &PursueConfig) -> Result<()> {
    let svc = LiveOnboardingService::from_config(config);
    if !svc.has_identity()? {
        println!("No identity to reset.");
        return Ok(());
    }
    svc.reset_identity()?;
    println!("Identity flag cleared. The next start runs onboarding again.");
    Ok(())
}
