//! Tracing setup driven by the converter's debug flag.
//!
//! With debug enabled the crate logs at `debug`; otherwise those events are
//! filtered out. `RUST_LOG` always takes precedence.

use crate::settings::ConverterSettings;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter directive for `settings`: everything else at `warn`, this crate
/// at the settings' log level.
#[must_use]
pub fn filter_directive(settings: &ConverterSettings) -> String {
    format!("warn,{}={}", env!("CARGO_CRATE_NAME"), settings.log_level())
}

/// Build the filter, preferring `RUST_LOG` when it is set and valid.
#[must_use]
pub fn env_filter(settings: &ConverterSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(settings)))
}

/// Install a global fmt subscriber for `settings`.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init(settings: &ConverterSettings) -> bool {
    let installed = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(env_filter(settings))
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level = settings.log_level(), "Logging initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{with_debug, with_stop_on_hcl_error};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_directive_without_debug() {
        let settings = ConverterSettings::new([with_stop_on_hcl_error()]);
        assert_eq!(filter_directive(&settings), "warn,tfconverter_options=info");
    }

    #[test]
    fn test_directive_with_debug() {
        let settings = ConverterSettings::new([with_debug()]);
        assert_eq!(filter_directive(&settings), "warn,tfconverter_options=debug");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        let settings = ConverterSettings::new([with_debug()]);
        let _ = init(&settings);
        assert!(!init(&settings));
    }
}
