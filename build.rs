//! Stamps the git commit into the binary as `SITE_GIT_SHA` (shown in the footer).
//!
//! CI can pin it with `SITE_GIT_SHA`; otherwise `git rev-parse` is asked,
//! and "unknown" is used outside a checkout.

use std::process::Command;

fn main() {
    let sha = std::env::var("SITE_GIT_SHA")
        .ok()
        .filter(|s| !s.is_empty())
        .or_else(short_head)
        .unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=SITE_GIT_SHA={sha}");
    println!("cargo:rerun-if-env-changed=SITE_GIT_SHA");
    println!("cargo:rerun-if-changed=.git/HEAD");
}

fn short_head() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let sha = String::from_utf8(out.stdout).ok()?.trim().to_string();
    (!sha.is_empty()).then_some(sha)
}
