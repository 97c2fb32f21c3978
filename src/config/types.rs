use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub defaults: Defaults,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Translation catalog, in switcher order.
    #[serde(default = "default_languages")]
    pub languages: Vec<LanguageTable>,
}

/// Default settings for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Language active when the UI starts (e.g., "en").
    pub language: String,
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. The terminal belongs to the UI, so without a file nothing is logged.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// All strings of one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageTable {
    /// Language code (e.g., "en", "es").
    pub code: String,
    /// Dotted key -> localized text (e.g., "Application.title" -> "Hello World!").
    #[serde(default)]
    pub strings: HashMap<String, String>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_languages() -> Vec<LanguageTable> {
    vec![
        LanguageTable::from_pairs(
            "en",
            &[
                ("Application.title", "Hello World!"),
                ("Application.subTitle", "Welcome to a tiny localized front-end"),
                ("Application.footer", "Made with love and a translation table"),
                ("LanguageSwitcher.used", "Language in use:"),
                ("LanguageSwitcher.en", "English"),
                ("LanguageSwitcher.es", "Spanish"),
            ],
        ),
        LanguageTable::from_pairs(
            "es",
            &[
                ("Application.title", "¡Hola Mundo!"),
                ("Application.subTitle", "Bienvenido a un pequeño front-end traducido"),
                ("Application.footer", "Hecho con cariño y una tabla de traducciones"),
                ("LanguageSwitcher.used", "Idioma en uso:"),
                ("LanguageSwitcher.en", "Inglés"),
                ("LanguageSwitcher.es", "Español"),
            ],
        ),
    ]
}

impl LanguageTable {
    pub fn from_pairs(code: &str, pairs: &[(&str, &str)]) -> Self {
        Self {
            code: code.to_string(),
            strings: pairs
                .iter()
                .map(|(key, text)| (key.to_string(), text.to_string()))
                .collect(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            logging: LoggingConfig::default(),
            languages: default_languages(),
        }
    }
}
