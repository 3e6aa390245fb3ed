//! Opt-in tracing setup for binaries built on `iris-charts`.
//!
//! The library only emits `tracing` events. Hosts either call one of the
//! helpers below (feature `telemetry`) or install their own subscriber.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_DIRECTIVE: &str = "info";

/// Installs a compact stderr subscriber filtered by `RUST_LOG`, falling back
/// to [`DEFAULT_LOG_DIRECTIVE`].
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_default(DEFAULT_LOG_DIRECTIVE)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback filter,
/// for example `"iris_charts=debug"`.
#[must_use]
pub fn init_tracing_with_default(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
