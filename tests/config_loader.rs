use hello_translate::config::{Config, ConfigError, Defaults, LanguageTable, LoggingConfig};
use std::fs;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.defaults.language, "en");
    assert_eq!(config.defaults.tick_rate_ms, 250);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());

    let codes: Vec<&str> = config.languages.iter().map(|l| l.code.as_str()).collect();
    assert_eq!(codes, vec!["en", "es"]);
    for table in &config.languages {
        for key in [
            "Application.title",
            "Application.subTitle",
            "Application.footer",
            "LanguageSwitcher.used",
            "LanguageSwitcher.en",
            "LanguageSwitcher.es",
        ] {
            assert!(
                table.strings.contains_key(key),
                "{} is missing {}",
                table.code,
                key
            );
        }
    }
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("hello-translate/config.toml"));
}

#[test]
fn test_missing_file_yields_default() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.defaults.language, "en");
    assert_eq!(config.languages.len(), 2);
}

#[test]
fn test_load_full_config() {
    let (_dir, path) = write_config(
        r#"
[defaults]
language = "es"
tick_rate_ms = 100

[logging]
level = "debug"
file = "/tmp/hello-translate-test.log"

[[languages]]
code = "es"
[languages.strings]
"Application.title" = "Hola"

[[languages]]
code = "en"
[languages.strings]
"Application.title" = "Hello"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.defaults.language, "es");
    assert_eq!(config.defaults.tick_rate_ms, 100);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.file.is_some());

    let catalog = config.catalog().unwrap();
    assert_eq!(catalog.languages().collect::<Vec<_>>(), vec!["es", "en"]);
    assert_eq!(catalog.default_language(), "es");
    assert_eq!(catalog.lookup("en", "Application.title"), Some("Hello"));
}

#[test]
fn test_languages_default_to_builtin_catalog() {
    let (_dir, path) = write_config(
        r#"
[defaults]
language = "es"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.defaults.tick_rate_ms, 250);
    assert_eq!(config.languages.len(), 2);
    assert_eq!(config.catalog().unwrap().default_language(), "es");
}

#[test]
fn test_parse_error_reports_path() {
    let (_dir, path) = write_config("[defaults\nlanguage = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_validation_fails_unknown_default_language() {
    let (_dir, path) = write_config(
        r#"
[defaults]
language = "fr"
"#,
    );
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("'fr'"), "unexpected message: {message}");
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_validation_fails_duplicate_language() {
    let config = Config {
        defaults: Defaults::default(),
        logging: LoggingConfig::default(),
        languages: vec![
            LanguageTable::from_pairs("en", &[]),
            LanguageTable::from_pairs("en", &[]),
        ],
    };
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("more than once"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_validation_fails_empty_languages() {
    let config = Config {
        defaults: Defaults::default(),
        logging: LoggingConfig::default(),
        languages: vec![],
    };
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("at least one language"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_validation_fails_zero_tick_rate() {
    let mut config = Config::default();
    config.defaults.tick_rate_ms = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}
