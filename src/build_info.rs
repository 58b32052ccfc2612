/// Toolchain that compiled this generator, e.g. `rustc-1.82.0`.
///
/// Captured by `build.rs`; `unknown` when the compiler could not be queried.
pub const COMPILER: &str = match option_env!("MKVERSION_BUILD_COMPILER") {
    Some(compiler) => compiler,
    None => "unknown",
};

/// Human-readable summary combining Cargo version and build metadata.
pub fn summary() -> String {
    format!("{} (built with {})", env!("CARGO_PKG_VERSION"), COMPILER)
}
