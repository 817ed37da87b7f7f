//! # tfconverter-options
//!
//! Functional options for configuring a Terraform/HCL converter.
//!
//! A converter implements [`TerraformConverterOptions`] and accepts any
//! number of [`TerraformConverterOption`] values when it is constructed.
//! Two options exist:
//!
//! - [`with_debug`]: keep the converter's debug output instead of
//!   discarding it
//! - [`with_stop_on_hcl_error`]: make the converter's HCL parser stop on
//!   malformed input
//!
//! Options can also be read from a YAML or HCL file through [`Config`].
//!
//! ## Example
//!
//! ```rust
//! use tfconverter_options::{with_debug, with_stop_on_hcl_error, ConverterSettings};
//!
//! let settings = ConverterSettings::new([with_debug(), with_stop_on_hcl_error()]);
//! tfconverter_options::logging::init(&settings);
//!
//! assert!(settings.debug());
//! assert!(settings.stop_on_hcl_error());
//! ```

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod settings;

// Re-export commonly used types at crate root
pub use config::Config;
pub use error::{ConverterOptionsError, Result};
pub use options::{
    apply_options, with_debug, with_stop_on_hcl_error, TerraformConverterOption,
    TerraformConverterOptions,
};
pub use settings::ConverterSettings;
