//! Configuration file loading tests

#![cfg(feature = "config-file")]

use db_importer_sdk::config::{ConfigError, IdentifierQuote, ImporterConfig, SqlDialect};
use std::fs;
use tempfile::TempDir;

mod config_file_tests {
    use super::*;

    #[test]
    fn test_load_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = ImporterConfig::default_path(temp_dir.path());
        fs::write(
            &path,
            "max_input_size = 1048576\nidentifier_quote = \"bracket\"\nvalidate_before_generate = false\ndialect = \"generic\"\n",
        )
        .unwrap();

        let config = ImporterConfig::load(&path).unwrap();
        assert_eq!(config.max_input_size, 1_048_576);
        assert_eq!(config.identifier_quote, IdentifierQuote::Bracket);
        assert!(!config.validate_before_generate);
        assert_eq!(config.dialect, SqlDialect::Generic);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("partial.toml");
        fs::write(&path, "identifier_quote = \"double\"\n").unwrap();

        let config = ImporterConfig::load(&path).unwrap();
        assert_eq!(config.identifier_quote, IdentifierQuote::Double);
        assert_eq!(config.max_input_size, ImporterConfig::default().max_input_size);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = ImporterConfig::load(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "identifier_quote = \"chevron\"\n").unwrap();
        assert!(matches!(
            ImporterConfig::load(&path),
            Err(ConfigError::Invalid(_))
        ));
    }
}
