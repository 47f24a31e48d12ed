use crate::config::{EnvSnapshot, ENV_HOME, ENV_NAME};

pub const DOCS_URL: &str = "https://github.com/cosmos/cosmos-sdk/tree/master/cosmovisor/README.md";

const HELP_ARGS: [&str; 3] = ["help", "-h", "--help"];

/// Decide whether to print help instead of running.
///
/// Help is always given while either environment value is missing, since
/// nothing else can run without them. Otherwise only a help token in `arg`
/// (any casing) asks for it.
pub fn should_give_help(env: &EnvSnapshot, arg: &str) -> bool {
    if !env.is_complete() {
        return true;
    }
    let arg = arg.to_lowercase();
    HELP_ARGS.contains(&arg.as_str())
}

/// Same as [`should_give_help`], against a fresh snapshot of the process environment.
pub fn should_give_help_from_env(arg: &str) -> bool {
    should_give_help(&EnvSnapshot::from_env(), arg)
}

pub fn get_help_text() -> String {
    format!(
        r#"Cosmosvisor - A process manager for Cosmos SDK application binaries.

Cosmovisor monitors the governance module for incoming chain upgrade proposals.
When a proposal is approved, cosmovisor can download the new binary, stop the
current one, switch to the new binary and restart the node with it.

Command line arguments are passed on to the configured binary.

Cosmovisor is configured through environment variables, documented in:
  {docs}

Required:
  {name}  the name of the binary being managed (e.g. gaiad)
  {home}  the directory holding the cosmovisor/ folder, usually the node home

Commands:
  help, -h, --help  print this message
  version           print the cosmovisor version
  config            print the environment cosmovisor sees

Both {name} and {home} must be set; this message is shown until they are.
"#,
        docs = DOCS_URL,
        name = ENV_NAME,
        home = ENV_HOME,
    )
}

/// Print the help text to stdout.
///
/// Goes straight to stdout rather than through the logger so no log prefix
/// decorates it.
pub fn do_help() {
    print!("{}", get_help_text());
}
