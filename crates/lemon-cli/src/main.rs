//! CLI entry point.
//!
//! Parses arguments, bootstraps the `CliContext` and routes each command to
//! its handler. All infrastructure wiring lives in `bootstrap`.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use lemon_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(mut cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command.take() else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    // Bootstrap the CLI context (composition root)
    let config = CliConfig::from_cli(&cli)?;
    let ctx = bootstrap(config).await?;

    match command {
        Commands::Menu {
            search,
            category,
            images,
        } => {
            handlers::menu::execute(&ctx, search, category, images).await?;
        }
        Commands::Categories => {
            handlers::categories::execute(&ctx).await?;
        }
        Commands::Browse => {
            handlers::browse::execute(&ctx).await?;
        }
        Commands::Onboard { first_name, email } => {
            handlers::onboard::execute(&ctx, &first_name, &email).await?;
        }
        Commands::Profile { command } => {
            handlers::profile::execute(&ctx, command).await?;
        }
    }

    Ok(())
}
