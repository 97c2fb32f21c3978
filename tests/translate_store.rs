mod common;

use hello_translate::i18n::{CatalogError, TranslateAction, TranslateProvider, TranslateStore};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn store_rejects_unknown_initial_language() {
    let err = TranslateStore::new(common::hello_catalog(), "fr").unwrap_err();
    assert_eq!(
        err,
        CatalogError::UnknownLanguage {
            code: "fr".to_string()
        }
    );
}

#[test]
fn provider_starts_on_default_language() {
    let provider = TranslateProvider::new(common::hello_catalog());
    assert_eq!(provider.context().state().language, "en");
}

#[test]
fn provider_with_explicit_language() {
    let provider = TranslateProvider::with_language(common::hello_catalog(), "es").unwrap();
    assert_eq!(provider.context().state().language, "es");
    assert!(TranslateProvider::with_language(common::hello_catalog(), "fr").is_err());
}

#[test]
fn hello_hola_scenario() {
    let provider = TranslateProvider::new(common::hello_catalog());
    let ctx = provider.context();
    let dispatch = ctx.dispatcher();

    assert_eq!(ctx.translator().t("Application.title"), "Hello");

    assert!(dispatch.dispatch(TranslateAction::change_language("es")));
    assert_eq!(ctx.translator().t("Application.title"), "Hola");

    assert!(!dispatch.change_language("fr"));
    assert_eq!(ctx.state().language, "es");
    assert_eq!(ctx.translator().t("Application.title"), "Hola");
}

#[test]
fn subscribers_see_each_change_once() {
    let provider = TranslateProvider::new(common::hello_catalog());
    let ctx = provider.context();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    ctx.subscribe(move |state| sink.lock().push(state.language.clone()));

    let dispatch = ctx.dispatcher();
    dispatch.change_language("es");
    dispatch.change_language("es");
    dispatch.change_language("fr");
    dispatch.change_language("en");

    assert_eq!(*seen.lock(), vec!["es".to_string(), "en".to_string()]);
}

#[test]
fn every_subscriber_is_notified() {
    let provider = TranslateProvider::new(common::hello_catalog());
    let ctx = provider.context();
    let calls = Arc::new(AtomicUsize::new(0));
    for _ in 0..3 {
        let calls = Arc::clone(&calls);
        ctx.subscribe(move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
        });
    }

    ctx.dispatcher().change_language("es");
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn unsubscribe_stops_notifications() {
    let provider = TranslateProvider::new(common::hello_catalog());
    let ctx = provider.context();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let id = ctx.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    assert!(ctx.unsubscribe(id));
    assert!(!ctx.unsubscribe(id));
    ctx.dispatcher().change_language("es");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(ctx.subscriber_count(), 0);
}

#[test]
fn subscriber_may_dispatch_again() {
    let provider = TranslateProvider::new(common::hello_catalog());
    let ctx = provider.context();
    let dispatch = ctx.dispatcher();
    let bounce = dispatch.clone();
    ctx.subscribe(move |state| {
        if state.language == "es" {
            bounce.change_language("en");
        }
    });
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    ctx.subscribe(move |state| sink.lock().push(state.language.clone()));

    assert!(dispatch.change_language("es"));
    assert_eq!(ctx.state().language, "en");
    // The later subscriber never sees the superseded "es".
    assert_eq!(*seen.lock(), vec!["en".to_string()]);
}

#[test]
fn nested_dispatch_redelivers_latest_to_earlier_subscribers() {
    let provider = TranslateProvider::new(common::hello_catalog());
    let ctx = provider.context();
    let first_seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&first_seen);
    ctx.subscribe(move |state| sink.lock().push(state.language.clone()));

    let bounce = ctx.dispatcher();
    ctx.subscribe(move |state| {
        if state.language == "es" {
            bounce.change_language("en");
        }
    });

    ctx.dispatcher().change_language("es");

    let state = ctx.state().language;
    assert_eq!(state, "en");
    assert_eq!(first_seen.lock().last(), Some(&state));
}

#[test]
fn dispatch_from_other_thread_during_delivery_is_delivered_last() {
    let provider = TranslateProvider::new(common::hello_catalog());
    let ctx = provider.context();
    let remote = ctx.dispatcher();
    ctx.subscribe(move |state| {
        if state.language == "es" {
            let remote = remote.clone();
            std::thread::spawn(move || remote.change_language("en"))
                .join()
                .unwrap();
        }
    });
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    ctx.subscribe(move |state| sink.lock().push(state.language.clone()));

    ctx.dispatcher().change_language("es");

    let state = ctx.state().language;
    assert_eq!(state, "en");
    assert_eq!(seen.lock().last(), Some(&state));
}

#[test]
fn store_recovers_after_subscriber_panic() {
    let provider = TranslateProvider::new(common::hello_catalog());
    let ctx = provider.context();
    let id = ctx.subscribe(|state| {
        if state.language == "es" {
            panic!("subscriber failure");
        }
    });
    let dispatch = ctx.dispatcher();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        dispatch.change_language("es");
    }));
    assert!(result.is_err());
    ctx.unsubscribe(id);

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    ctx.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    assert!(dispatch.change_language("en"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn back_to_back_dispatches_converge_to_last() {
    let provider = TranslateProvider::new(common::hello_catalog());
    let ctx = provider.context();
    let first = ctx.dispatcher();
    let second = ctx.dispatcher();

    first.change_language("es");
    second.change_language("en");
    first.change_language("es");

    assert_eq!(ctx.state().language, "es");
}

#[test]
fn dispatch_handles_are_stable() {
    let provider = TranslateProvider::new(common::hello_catalog());
    let a = provider.context().dispatcher();
    let b = provider.context().dispatcher();
    assert_eq!(a, b);

    let other = TranslateProvider::new(common::hello_catalog());
    assert_ne!(a, other.context().dispatcher());
}

#[test]
fn providers_are_independent() {
    let catalog = common::hello_catalog();
    let left = TranslateProvider::new(Arc::clone(&catalog));
    let right = TranslateProvider::new(catalog);

    left.context().dispatcher().change_language("es");

    assert_eq!(left.context().state().language, "es");
    assert_eq!(right.context().state().language, "en");
}

#[test]
fn unmount_detaches_subscribers() {
    let provider = TranslateProvider::new(common::hello_catalog());
    let ctx = provider.context();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    ctx.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    assert_eq!(ctx.subscriber_count(), 1);

    drop(provider);

    assert_eq!(ctx.subscriber_count(), 0);
    ctx.dispatcher().change_language("es");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn dispatch_from_another_thread_is_visible() {
    let provider = TranslateProvider::new(common::hello_catalog());
    let ctx = provider.context();
    let dispatch = ctx.dispatcher();

    std::thread::spawn(move || dispatch.change_language("es"))
        .join()
        .unwrap();

    assert_eq!(ctx.state().language, "es");
}
