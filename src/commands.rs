use anyhow::{anyhow, bail, Context, Result};
use log::debug;
use std::io::Write;

use crate::config::EnvSnapshot;

/// Built-in commands handled without launching the managed binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Version,
    Config,
}

impl Command {
    /// Resolve the first positional argument to a command.
    pub fn from_arg(arg: &str) -> Result<Self> {
        match arg.to_lowercase().as_str() {
            "version" => Ok(Command::Version),
            "config" => Ok(Command::Config),
            "run" => bail!(
                "\"run\" launches the configured binary, which this build of {} does not do",
                env!("CARGO_PKG_NAME")
            ),
            _ => Err(anyhow!(
                "unknown command \"{}\"; run \"{} help\" for usage",
                arg,
                env!("CARGO_PKG_NAME")
            )),
        }
    }

    pub fn run<W: Write>(self, env: &EnvSnapshot, out: &mut W) -> Result<()> {
        debug!("Running command {:?}", self);
        match self {
            Command::Version => write_version(out),
            Command::Config => write_config(env, out),
        }
    }
}

fn write_version<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "cosmovisor version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "git commit: {}", env!("GIT_COMMIT_HASH"))?;
    writeln!(out, "build date: {}", env!("BUILD_DATE"))?;
    writeln!(out, "c library: {}", env!("C_LIB"))?;
    Ok(())
}

fn write_config<W: Write>(env: &EnvSnapshot, out: &mut W) -> Result<()> {
    let yaml = serde_yaml::to_string(&env.to_map()).context("Failed to render configuration")?;
    out.write_all(yaml.as_bytes())?;
    Ok(())
}
