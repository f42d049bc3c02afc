// ============================================================
// Layer 6 — Log Filter
// ============================================================
// RUST_LOG replaces the default outright, so both
// `RUST_LOG=debug` and `RUST_LOG=bracket_eval=debug` surface
// the codec and per-sample debug lines. Without it (or with
// an unparsable value) the crate logs at info.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_DIRECTIVE: &str = "bracket_eval=info";

/// Filter for the given RUST_LOG value.
pub fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_default_is_info() {
        assert_eq!(env_filter(None).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_crate_debug_is_honoured() {
        let filter = env_filter(Some("bracket_eval=debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_global_debug_is_honoured() {
        assert_eq!(env_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_unparsable_value_falls_back() {
        let filter = env_filter(Some("bracket_eval=loud"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
