mod identity_commands;

use {
    clap::{Parser, Subcommand},
    pursue_onboarding::wizard::{self, Outcome},
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(name = "pursue", about = "pursue: achieve goals together")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    /// Custom config directory (overrides default ~/.config/pursue/).
    #[arg(long, global = true, env = "PURSUE_CONFIG_DIR")]
    config_dir: Option<std::path::PathBuf>,
    /// Custom data directory (overrides default data dir).
    #[arg(long, global = true, env = "PURSUE_DATA_DIR")]
    data_dir: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an identity: display name, seed phrase, verification.
    Onboard {
        /// Run even if an identity already exists.
        #[arg(long)]
        force: bool,
    },
    /// Show whether an identity exists on this device.
    Status,
    /// Clear the stored identity flag.
    Reset,
}

/// Logs go to stderr so they never interleave with wizard prompts.
fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn onboard(config: &pursue_config::PursueConfig, force: bool) -> anyhow::Result<()> {
    match wizard::run_onboarding(config, force)? {
        Outcome::Completed { display_name } => {
            info!("identity created");
            println!("Welcome, {display_name}!");
        },
        Outcome::AlreadyOnboarded => {
            println!("Use `pursue onboard --force` to create a new identity.");
        },
        Outcome::Aborted => {},
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_telemetry(&cli);

    info!(version = env!("CARGO_PKG_VERSION"), "pursue starting");

    // Apply directory overrides before loading config
    if let Some(ref dir) = cli.config_dir {
        pursue_config::set_config_dir(dir.clone());
    }
    if let Some(ref dir) = cli.data_dir {
        pursue_config::set_data_dir(dir.clone());
    }
    let config = pursue_config::discover_and_load();

    match cli.command {
        // Default: onboard unless an identity already exists
        None => onboard(&config, false),
        Some(Commands::Onboard { force }) => onboard(&config, force),
        Some(Commands::Status) => identity_commands::handle_status(&config),
        Some(Commands::Reset) => identity_commands::handle_reset(&config),
    }
}
