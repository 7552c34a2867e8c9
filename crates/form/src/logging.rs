//! Tracing subscriber setup for hosts that do not install their own.
//!
//! ```no_run
//! passform::logging::init("info").expect("logger");
//! ```

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::LogError;

/// Installs a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `default_level` when set.
///
/// # Errors
///
/// Returns error if:
/// - the filter string cannot be parsed
/// - a global subscriber is already installed
pub fn init(default_level: &str) -> Result<(), LogError> {
    let filter = build_filter(default_level, std::env::var(EnvFilter::DEFAULT_ENV).ok())?;
    Registry::default()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .map_err(|_| LogError::AlreadyInstalled)
}

/// Parses `env` if present and non-empty, otherwise `default_level`.
pub fn build_filter(default_level: &str, env: Option<String>) -> Result<EnvFilter, LogError> {
    let directive = env
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default_level.to_owned());
    EnvFilter::try_new(&directive).map_err(|e| LogError::Filter {
        filter: directive.clone(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_env_overrides_default() {
        let filter = build_filter("info", Some("passform=trace".into())).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_blank_env_falls_back() {
        let filter = build_filter("warn", Some("  ".into())).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_bad_filter_is_reported() {
        let err = build_filter("passform=loud", None).unwrap_err();
        assert!(matches!(err, LogError::Filter { ref filter, .. } if filter == "passform=loud"));
    }

    #[test]
    fn test_second_init_fails() {
        let _ = init("off");
        assert!(matches!(init("off"), Err(LogError::AlreadyInstalled)));
    }
}
