//! Stamps the binary with the commit, build time and cargo profile
//! reported by `/api/buildinfo` and the startup log.

use std::env;
use std::process::Command;

const UNKNOWN: &str = "unknown";

/// `git rev-parse --short=8 HEAD`, or `None` outside a checkout
fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_string())
}

fn export(key: &str, value: &str) {
    println!("cargo:rustc-env={}={}", key, value);
}

fn main() {
    let hash = git_short_hash().unwrap_or_else(|| UNKNOWN.to_string());
    let built_at = chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, false);
    let profile = env::var("PROFILE").unwrap_or_else(|_| UNKNOWN.to_string());

    export("GIT_HASH", &hash);
    export("BUILD_TIMESTAMP", &built_at);
    export("BUILD_PROFILE", &profile);
    // No rerun-if-changed, so the stamp refreshes on every build
}
