//! Telemetry helpers for applications embedding `chart-tracker`.
//!
//! Tracing setup stays explicit and opt-in. Hosts can either call one of the
//! helpers below or install their own `tracing` subscriber. The tracker emits
//! `debug!` events when the overlay is shown or hidden and `trace!` events for
//! every hit-test query, so `chart_tracker=trace` is the usual directive while
//! diagnosing drag behavior.

/// Default filter directive used when `RUST_LOG` is not set.
pub const DEFAULT_TRACING_DIRECTIVE: &str = "info";

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`, falling back
/// to [`DEFAULT_TRACING_DIRECTIVE`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber was already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_directive(DEFAULT_TRACING_DIRECTIVE)
}

/// Same as [`init_default_tracing`] but with an explicit fallback directive,
/// e.g. `"chart_tracker=trace"`. `RUST_LOG` still wins when present.
#[must_use]
pub fn init_tracing_with_directive(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
