//! Tracing subscriber setup.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LoggingConfig;

/// Default filter directives for the configured level.
///
/// sqlx logs every executed statement at info, which drowns out request
/// logs; queries are already observable through the duration histograms,
/// so its statement logger is capped at warn.
fn default_filter(level: &str) -> String {
    format!("{},sqlx::query=warn", level)
}

/// Initializes the tracing subscriber. `RUST_LOG` overrides the configured
/// level and the output format comes from `logging.format` (json for log
/// shippers, compact for container stdout, pretty otherwise).
pub fn init_logging(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(&config.level)));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.format.as_str() {
        "json" => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_span_events(FmtSpan::CLOSE)
                        .with_current_span(true)
                        .with_target(true),
                )
                .init();
        }
        "compact" => {
            registry
                .with(fmt::layer().compact().with_target(false))
                .init();
        }
        _ => {
            registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_span_events(FmtSpan::CLOSE)
                        .with_target(true),
                )
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_caps_sqlx_statements() {
        let filter = default_filter("info");
        assert!(filter.starts_with("info,"));
        assert!(filter.contains("sqlx::query=warn"));
    }

    #[test]
    fn test_default_filter_parses_as_env_filter() {
        assert!(default_filter("debug").parse::<EnvFilter>().is_ok());
    }
}
