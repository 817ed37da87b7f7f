//! Concrete converter settings built from options.

use crate::options::{apply_options, TerraformConverterOption, TerraformConverterOptions};
use serde::Serialize;
use std::borrow::Borrow;

/// The flags a Terraform converter reads before it starts parsing.
///
/// Both flags start disabled. They are switched on through the
/// [`TerraformConverterOptions`] trait, normally by passing options to
/// [`ConverterSettings::new`].
///
/// # Example
///
/// ```rust
/// use tfconverter_options::{with_debug, ConverterSettings};
///
/// let settings = ConverterSettings::new([with_debug()]);
/// assert!(settings.debug());
/// assert!(!settings.stop_on_hcl_error());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConverterSettings {
    debug: bool,
    stop_on_hcl_error: bool,
}

impl ConverterSettings {
    /// Create settings with every option in `options` applied in order.
    #[must_use]
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<TerraformConverterOption>,
    {
        let mut settings = Self::default();
        settings.apply(options);
        tracing::debug!(
            debug = settings.debug,
            stop_on_hcl_error = settings.stop_on_hcl_error,
            "Converter settings built"
        );
        settings
    }

    /// Apply more options on top of the current state.
    pub fn apply<I>(&mut self, options: I)
    where
        I: IntoIterator,
        I::Item: Borrow<TerraformConverterOption>,
    {
        apply_options(self, options);
    }

    /// Whether debug output is kept.
    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }

    /// Whether HCL parse errors abort conversion.
    #[must_use]
    pub const fn stop_on_hcl_error(&self) -> bool {
        self.stop_on_hcl_error
    }

    /// Log level the converter should run at.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

impl TerraformConverterOptions for ConverterSettings {
    fn set_debug(&mut self) {
        self.debug = true;
    }

    fn set_stop_on_hcl_error(&mut self) {
        self.stop_on_hcl_error = true;
    }
}
