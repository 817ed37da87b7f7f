//! Integration tests for tfconverter-options.
//!
//! These tests drive the public API the way a converter would: a custom
//! target type receives options built by hand or loaded from config files.

use pretty_assertions::assert_eq;
use tfconverter_options::{
    apply_options, with_debug, with_stop_on_hcl_error, Config, ConverterOptionsError,
    ConverterSettings, TerraformConverterOption, TerraformConverterOptions,
};

/// A stand-in converter that records which setters were called.
#[derive(Debug, Default)]
struct RecordingConverter {
    debug: bool,
    stop_on_hcl_error: bool,
    calls: Vec<&'static str>,
}

impl RecordingConverter {
    fn new(options: &[TerraformConverterOption]) -> Self {
        let mut converter = Self::default();
        apply_options(&mut converter, options);
        converter
    }
}

impl TerraformConverterOptions for RecordingConverter {
    fn set_debug(&mut self) {
        self.debug = true;
        self.calls.push("set_debug");
    }

    fn set_stop_on_hcl_error(&mut self) {
        self.stop_on_hcl_error = true;
        self.calls.push("set_stop_on_hcl_error");
    }
}

mod options_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_custom_target_receives_options_in_order() {
        let converter = RecordingConverter::new(&[with_stop_on_hcl_error(), with_debug()]);

        assert!(converter.debug);
        assert!(converter.stop_on_hcl_error);
        assert_eq!(converter.calls, vec!["set_stop_on_hcl_error", "set_debug"]);
    }

    #[test]
    fn test_no_options_means_no_calls() {
        let converter = RecordingConverter::new(&[]);

        assert!(!converter.debug);
        assert!(!converter.stop_on_hcl_error);
        assert!(converter.calls.is_empty());
    }

    #[test]
    fn test_trait_object_targets_share_one_option_list() {
        let options = [with_debug(), with_stop_on_hcl_error()];
        let mut recording = RecordingConverter::default();
        let mut settings = ConverterSettings::default();

        {
            let targets: [&mut dyn TerraformConverterOptions; 2] = [&mut recording, &mut settings];
            for target in targets {
                apply_options(target, &options);
            }
        }

        assert_eq!(recording.calls, vec!["set_debug", "set_stop_on_hcl_error"]);
        assert_eq!(settings, ConverterSettings::new(options));
    }

    #[test]
    fn test_settings_from_mixed_sources() {
        let mut settings = ConverterSettings::new([with_debug()]);
        settings.apply(Config::default().options());
        assert!(settings.debug());
        assert!(!settings.stop_on_hcl_error());

        settings.apply([with_stop_on_hcl_error()]);
        assert!(settings.stop_on_hcl_error());
    }
}

mod config_file_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn test_yaml_file_to_settings() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("tfconverter.yaml");
        fs::write(&path, "converter:\n  debug: true\n")?;

        let config = Config::from_file(&path)?;
        let settings = config.settings();

        assert!(settings.debug());
        assert!(!settings.stop_on_hcl_error());
        Ok(())
    }

    #[test]
    fn test_yml_extension_is_yaml() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("tfconverter.yml");
        fs::write(&path, "converter:\n  stop_on_hcl_error: true\n")?;

        let config = Config::from_file(&path)?;
        assert_eq!(config.options(), vec![with_stop_on_hcl_error()]);
        Ok(())
    }

    #[test]
    fn test_hcl_file_to_custom_target() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("tfconverter.hcl");
        fs::write(
            &path,
            "converter {\n  debug             = true\n  stop_on_hcl_error = true\n}\n",
        )?;

        let config = Config::from_file(&path)?;
        let converter = RecordingConverter::new(&config.options());

        assert_eq!(converter.calls, vec!["set_debug", "set_stop_on_hcl_error"]);
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, ConverterOptionsError::FileNotFound { .. }));
        assert_eq!(err.exit_code(), 14);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tfconverter.toml");
        fs::write(&path, "[converter]\ndebug = true\n").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, ConverterOptionsError::UnsupportedConfigFormat { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tfconverter.hcl");
        fs::write(&path, "converter {\n").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, ConverterOptionsError::ConfigParse { .. }));
    }

    #[test]
    fn test_example_yaml_round_trips_through_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("example.yaml");
        fs::write(&path, Config::example_yaml())?;

        assert_eq!(Config::from_file(&path)?, Config::default());
        Ok(())
    }
}
