use chrono::Utc;
use std::{env, process::Command};

#[macro_use]
extern crate build_cfg;

fn get_glibc_version() -> Option<String> {
    if build_cfg!(target_env = "gnu") {
        let ver = glibc_version::get_version().ok()?;
        Some(format!("{}.{}", ver.major, ver.minor))
    } else {
        None
    }
}

fn c_library_name() -> String {
    let target = env::var("TARGET").unwrap_or_default();

    // note: by default, Rust GNU builds target and link against glibc.
    if target.contains("gnu") {
        match get_glibc_version() {
            Some(v) => format!("glibc v{}", v),
            None => "glibc".to_string(),
        }
    } else if target.contains("musl") {
        "musl".to_string()
    } else if target.contains("darwin") {
        "libSystem".to_string()
    } else if target.contains("freebsd") {
        "libc".to_string()
    } else {
        "unknown".to_string()
    }
}

/// Short commit hash of the source tree, or `unknown` outside a git checkout.
fn git_commit_hash() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[build_cfg_main]
fn main() {
    let build_date = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();

    println!("cargo:rustc-env=GIT_COMMIT_HASH={}", git_commit_hash());
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);
    println!("cargo:rustc-env=C_LIB={}", c_library_name());
}
