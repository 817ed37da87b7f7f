//! Functional options for the Terraform converter.
//!
//! A converter exposes the [`TerraformConverterOptions`] capability trait and
//! accepts any number of [`TerraformConverterOption`] values at construction
//! time. Each option flips exactly one switch on the target, so options can
//! be combined in any order and repeated without changing the outcome.
//!
//! # Example
//!
//! ```rust
//! use tfconverter_options::options::{apply_options, with_debug, with_stop_on_hcl_error};
//! use tfconverter_options::ConverterSettings;
//!
//! let mut settings = ConverterSettings::default();
//! apply_options(&mut settings, [with_debug(), with_stop_on_hcl_error()]);
//!
//! assert!(settings.debug());
//! assert!(settings.stop_on_hcl_error());
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Capability interface implemented by anything an option can configure.
///
/// Both methods only ever enable a behavior; there is no way to switch one
/// back off through this trait.
#[cfg_attr(test, mockall::automock)]
pub trait TerraformConverterOptions {
    /// Keep debug-level diagnostics instead of discarding them.
    fn set_debug(&mut self);

    /// Halt on the first malformed HCL file instead of skipping it.
    fn set_stop_on_hcl_error(&mut self);
}

/// A single converter option.
///
/// Built with [`with_debug`] or [`with_stop_on_hcl_error`] and consumed by
/// [`apply_options`] or [`TerraformConverterOption::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerraformConverterOption {
    /// Calls [`TerraformConverterOptions::set_debug`].
    Debug,
    /// Calls [`TerraformConverterOptions::set_stop_on_hcl_error`].
    StopOnHclError,
}

impl TerraformConverterOption {
    /// Apply this option to `target`.
    pub fn apply<T>(self, target: &mut T)
    where
        T: TerraformConverterOptions + ?Sized,
    {
        match self {
            Self::Debug => target.set_debug(),
            Self::StopOnHclError => target.set_stop_on_hcl_error(),
        }
    }

    /// Name used in logs and config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::StopOnHclError => "stop_on_hcl_error",
        }
    }
}

impl fmt::Display for TerraformConverterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Enable debug output on the converter.
///
/// Without this option the converter's debug logs are discarded.
#[must_use]
pub const fn with_debug() -> TerraformConverterOption {
    TerraformConverterOption::Debug
}

/// Make the converter's HCL parser error out and stop on malformed input.
#[must_use]
pub const fn with_stop_on_hcl_error() -> TerraformConverterOption {
    TerraformConverterOption::StopOnHclError
}

/// Apply `options` to `target` in order.
///
/// Accepts owned options as well as references, so both
/// `apply_options(&mut t, [with_debug()])` and
/// `apply_options(&mut t, &opts)` work.
pub fn apply_options<T, I>(target: &mut T, options: I)
where
    T: TerraformConverterOptions + ?Sized,
    I: IntoIterator,
    I::Item: Borrow<TerraformConverterOption>,
{
    for option in options {
        let option = *option.borrow();
        tracing::debug!(option = %option, "Applying converter option");
        option.apply(target);
    }
}
