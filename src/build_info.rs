//! Commit and date stamped in by the build script.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Version line shown by `--version`, e.g. `0.1.0 (2026-10-17, a1b2c3d)`.
pub fn version_line() -> String {
    format!(
        "{} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
