use std::{env, process::Command};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=RUSTC");

    set_build_metadata();
}

fn set_build_metadata() {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());

    let compiler = Command::new(&rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .and_then(|banner| compiler_identity(&banner))
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=MKVERSION_BUILD_COMPILER={}", compiler);
}

// "rustc 1.82.0 (f6e511eec 2024-10-15)" -> "rustc-1.82.0"
fn compiler_identity(banner: &str) -> Option<String> {
    let mut parts = banner.split_whitespace();
    let family = parts.next()?;
    let version = parts.next()?;
    if !version.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    Some(format!("{}-{}", family, version))
}
