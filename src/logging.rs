use anyhow::{Context, Result};
use env_logger::Builder;

/// Set up logging to stderr at the given level.
///
/// Stdout is left to help, version and config output.
pub fn setup_logging(log_level: log::LevelFilter) -> Result<()> {
    let mut builder: Builder = env_logger::Builder::new();
    builder
        .filter_level(log_level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .target(env_logger::Target::Stderr);

    builder.try_init().context("Failed to initialise logger")?;

    Ok(())
}
