use anyhow::{anyhow, Context, Result};
use clap::Parser;
use hello_translate::config::Config;
use hello_translate::i18n::{Catalog, TranslateProvider};
use hello_translate::logging::init_tracing;
use hello_translate::ui::app::App;
use hello_translate::ui::runtime;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "hello-translate", version, about = "Localized Hello World in the terminal")]
struct Cli {
    /// Path to config file (default: ~/.config/hello-translate/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start with this language instead of the configured default
    #[arg(short, long, value_name = "CODE")]
    language: Option<String>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the available languages and exit
    #[arg(long)]
    list_languages: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)?;
    if let Some(file) = cli.log_file {
        config.logging.file = Some(file);
    }
    init_tracing(&config.logging).context("Failed to open log file")?;

    let catalog = config.catalog()?;
    let provider = match cli.language.as_deref() {
        Some(code) => TranslateProvider::with_language(Arc::clone(&catalog), code)
            .map_err(|err| anyhow!("{err}\n{}", available_languages(&catalog)))?,
        None => TranslateProvider::new(Arc::clone(&catalog)),
    };

    if cli.list_languages {
        let translator = provider.context().translator();
        for code in translator.languages() {
            let key = format!("LanguageSwitcher.{code}");
            println!("{code}\t{}", translator.t(&key));
        }
        return Ok(());
    }

    let tick_rate = Duration::from_millis(config.defaults.tick_rate_ms);
    runtime::run(App::new(provider), tick_rate)?;
    Ok(())
}

fn available_languages(catalog: &Catalog) -> String {
    format!(
        "Available languages: {}",
        catalog.languages().collect::<Vec<_>>().join(", ")
    )
}
