//! Shared test utilities.

#![allow(dead_code)]

use hello_translate::i18n::{Catalog, TranslateProvider, TranslationTable};
use std::sync::Arc;

pub fn table(pairs: &[(&str, &str)]) -> TranslationTable {
    pairs
        .iter()
        .map(|(key, text)| (key.to_string(), text.to_string()))
        .collect()
}

/// `{ en: Hello, es: Hola }` with `en` as default.
pub fn hello_catalog() -> Arc<Catalog> {
    Arc::new(
        Catalog::new(
            "en",
            vec![
                ("en", table(&[("Application.title", "Hello")])),
                ("es", table(&[("Application.title", "Hola")])),
            ],
        )
        .expect("valid catalog"),
    )
}

/// Three languages with switcher labels, `en` first.
pub fn switcher_catalog() -> Arc<Catalog> {
    let labels = [
        ("LanguageSwitcher.used", "In use:"),
        ("LanguageSwitcher.en", "English"),
        ("LanguageSwitcher.es", "Spanish"),
        ("LanguageSwitcher.de", "German"),
    ];
    let mut en = table(&labels);
    en.extend(table(&[
        ("Application.title", "Hello World!"),
        ("Application.subTitle", "Subtitle"),
        ("Application.footer", "Footer text"),
    ]));
    let mut es = table(&[
        ("LanguageSwitcher.used", "En uso:"),
        ("LanguageSwitcher.en", "Inglés"),
        ("LanguageSwitcher.es", "Español"),
        ("LanguageSwitcher.de", "Alemán"),
    ]);
    es.extend(table(&[
        ("Application.title", "Hola Mundo!"),
        ("Application.subTitle", "Subtitulo"),
        ("Application.footer", "Pie de pagina"),
    ]));
    // German only translates the title; everything else falls back to English.
    let de = table(&[("Application.title", "Hallo Welt!")]);

    Arc::new(Catalog::new("en", vec![("en", en), ("es", es), ("de", de)]).expect("valid catalog"))
}

pub fn provider(catalog: Arc<Catalog>) -> TranslateProvider {
    TranslateProvider::new(catalog)
}
