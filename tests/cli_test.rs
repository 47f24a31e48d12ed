#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use cosmovisor::config::{ENV_HOME, ENV_NAME};
    use cosmovisor::help::{get_help_text, DOCS_URL};
    use predicates::prelude::*;
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    fn cosmovisor(home: Option<&str>, name: Option<&str>) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_cosmovisor"));
        cmd.env_remove(ENV_HOME).env_remove(ENV_NAME);
        if let Some(home) = home {
            cmd.env(ENV_HOME, home);
        }
        if let Some(name) = name {
            cmd.env(ENV_NAME, name);
        }
        cmd
    }

    #[test]
    fn test_help_when_env_unset() {
        cosmovisor(None, None)
            .arg("run")
            .assert()
            .success()
            .stdout(predicate::str::contains("Cosmosvisor"))
            .stdout(predicate::str::contains(DOCS_URL));
    }

    #[test]
    fn test_help_when_home_empty() {
        cosmovisor(Some(""), Some("somename"))
            .arg("anything")
            .assert()
            .success()
            .stdout(predicate::str::contains(ENV_HOME))
            .stdout(predicate::str::contains(ENV_NAME));
    }

    #[test]
    fn test_help_without_arguments_and_env() {
        cosmovisor(None, None)
            .assert()
            .success()
            .stdout(predicate::str::contains("Cosmosvisor"));
    }

    #[test]
    fn test_help_for_non_utf8_argument_when_env_unset() {
        cosmovisor(None, None)
            .arg(OsStr::from_bytes(b"r\xffun"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Cosmosvisor"));
    }

    #[test]
    fn test_non_utf8_argument_with_env_set_is_unknown_command() {
        cosmovisor(Some("/somehome"), Some("somename"))
            .arg(OsStr::from_bytes(b"r\xffun"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown command"));
    }

    #[test]
    fn test_help_for_bad_flags_when_env_unset() {
        for args in [&["-v", "-q"][..], &["--verbose=3"][..]] {
            cosmovisor(None, None)
                .args(args)
                .assert()
                .success()
                .stdout(predicate::str::contains("Cosmosvisor"));
        }
    }

    #[test]
    fn test_bad_flags_with_env_set_are_parse_errors() {
        cosmovisor(Some("/somehome"), Some("somename"))
            .args(["--verbose=3"])
            .assert()
            .code(2)
            .stdout(predicate::str::contains("Cosmosvisor").not());
    }

    #[test]
    fn test_help_output_has_no_trailing_blank_line() {
        cosmovisor(None, None).assert().success().stdout(get_help_text());
    }

    #[test]
    fn test_help_args_with_env_set() {
        for arg in ["help", "-h", "--help", "hELP"] {
            cosmovisor(Some("/somehome"), Some("somename"))
                .arg(arg)
                .assert()
                .success()
                .stdout(predicate::str::contains("Cosmosvisor"));
        }
    }

    #[test]
    fn test_unknown_command_with_env_set() {
        cosmovisor(Some("/somehome"), Some("somename"))
            .arg("upgrade-plan")
            .assert()
            .failure()
            .stdout(predicate::str::contains("Cosmosvisor").not())
            .stderr(predicate::str::contains("unknown command \"upgrade-plan\""));
    }

    #[test]
    fn test_run_is_not_handled() {
        cosmovisor(Some("/somehome"), Some("somename"))
            .args(["run", "start"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("launches the configured binary"));
    }

    #[test]
    fn test_version_with_env_set() {
        cosmovisor(Some("/somehome"), Some("somename"))
            .arg("version")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("cosmovisor version: "))
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_double_dash_version_is_not_help() {
        cosmovisor(Some("/somehome"), Some("somename"))
            .arg("--version")
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown command \"--version\""));
    }

    #[test]
    fn test_config_prints_environment() {
        cosmovisor(Some("/somehome"), Some("somename"))
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("DAEMON_HOME: /somehome"))
            .stdout(predicate::str::contains("DAEMON_NAME: somename"));
    }

    #[test]
    fn test_verbose_flag_logs_to_stderr() {
        cosmovisor(Some("/somehome"), Some("somename"))
            .args(["-vv", "version"])
            .assert()
            .success()
            .stdout(predicate::str::contains("INFO").not())
            .stderr(predicate::str::contains("Running Version"));
    }
}
