pub mod macros;

/// Returns the version string reported by the CLI and the HTTP user agent.
pub fn folio_version() -> &'static str {
    match option_env!("FOLIO_VERSION") {
        Some(version) => version,
        None => concat!("v", env!("CARGO_PKG_VERSION"), "-dev"),
    }
}
