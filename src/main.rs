use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::{debug, info};
use std::ffi::OsString;

use cosmovisor::commands::Command;
use cosmovisor::config::EnvSnapshot;
use cosmovisor::help::{do_help, should_give_help};
use cosmovisor::logging::setup_logging;

/// Help and environment front-end for cosmovisor
#[derive(Parser)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct Cli {
    /// Control verbosity level (use -v, -vv or -vvv for more verbose output)
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Command followed by its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<OsString>,
}

fn main() -> Result<()> {
    let env = EnvSnapshot::from_env();

    // Without a complete environment nothing but help can run, so a bad
    // flag still gets help rather than a parse error.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) if !env.is_complete() => {
            do_help();
            return Ok(());
        }
        Err(e) => e.exit(),
    };

    setup_logging(cli.verbose.log_level_filter())?;

    let missing = env.missing_keys();
    if !missing.is_empty() {
        debug!("Missing environment variables: {}", missing.join(", "));
    }

    let arg = cli
        .args
        .first()
        .map(|a| a.to_string_lossy())
        .unwrap_or_default();
    if should_give_help(&env, &arg) {
        do_help();
        return Ok(());
    }

    let command = Command::from_arg(&arg)?;
    info!("Running {:?}", command);
    command.run(&env, &mut std::io::stdout().lock())?;

    Ok(())
}
