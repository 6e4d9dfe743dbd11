//! Logging facilities for listcascade.
//!
//! listcascade uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter(EnvFilter::new("listcascade=debug"))
//!         .init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! The constants in [`targets`] name every subsystem that emits events, so
//! a directive such as `listcascade::selection=debug,listcascade_core=warn`
//! narrows output to selection traffic.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "listcascade_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "listcascade_core::signal";
    /// Catalog loading and lookup target.
    pub const CATALOG: &str = "listcascade::catalog";
    /// Selection changes in any selector.
    pub const SELECTION: &str = "listcascade::selection";
    /// Downstream refreshes (item list rebuilds and detail renders).
    pub const REFRESH: &str = "listcascade::refresh";
    /// View assembly and priming.
    pub const CASCADE: &str = "listcascade::cascade";
}

#[cfg(test)]
mod tests {
    use super::targets;

    #[test]
    fn test_targets_are_namespaced() {
        for target in [
            targets::SIGNAL,
            targets::CATALOG,
            targets::SELECTION,
            targets::REFRESH,
            targets::CASCADE,
        ] {
            assert!(target.starts_with("listcascade"), "{target}");
        }
        assert!(targets::SIGNAL.starts_with(targets::CORE));
    }
}
