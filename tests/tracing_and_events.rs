//! Integration tests for tracing and event monitoring.
//!
//! Covers the per-registry trace callback and the `tracing` output of the
//! registry under a real subscriber.

use dependency_registry::{define_registry, Registry, RegistryApi, RegistryEvent, Scope};
use std::sync::{Arc, Mutex};

fn collect(registry: &Registry) -> Arc<Mutex<Vec<String>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let events_clone = events.clone();
    registry.set_trace_callback(move |event| {
        events_clone.lock().unwrap().push(format!("{}", event));
    });
    events
}

#[test]
fn test_basic_tracing() {
    let registry = Registry::new();
    let events = collect(&registry);

    registry.register(|| 42i32);
    let _: Arc<i32> = registry.resolve();
    let _ = registry.contains::<i32>(None);

    let captured = events.lock().unwrap();
    assert_eq!(
        *captured,
        vec![
            "register { type_name: i32 }",
            "resolve { type_name: i32, scope: global, found: true }",
            "contains { type_name: i32, found: true }",
        ]
    );
}

#[test]
fn test_trace_resolve_found_and_not_found() {
    let registry = Registry::new();
    let events = collect(&registry);

    registry.register(|| 123i64);
    let _ = registry.resolve::<i64>();
    let _ = registry.try_resolve::<f32>();
    let _ = registry.try_resolve_with::<i64>(Scope::Unique, Some("other"));

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 4);
    assert!(captured[1].contains("found: true"));
    assert!(captured[2].contains("found: false"));
    assert_eq!(
        captured[3],
        "resolve { type_name: i64, tag: other, scope: unique, found: false }"
    );
}

#[test]
fn test_structured_events() {
    let registry = Registry::new();
    let events = Arc::new(Mutex::new(Vec::new()));
    let events_clone = events.clone();

    registry.set_trace_callback(move |event| {
        events_clone.lock().unwrap().push(event.clone());
    });

    registry.register_factory::<u8>(Some("alt"), || Arc::new(1));
    let _ = registry.resolve_with::<u8>(Scope::Unique, Some("alt"));
    registry.reset();

    let captured = events.lock().unwrap();
    assert_eq!(
        *captured,
        vec![
            RegistryEvent::Register {
                type_name: "u8",
                tag: Some("alt".to_string())
            },
            RegistryEvent::Resolve {
                type_name: "u8",
                tag: Some("alt".to_string()),
                scope: Scope::Unique,
                found: true
            },
            RegistryEvent::Reset {},
        ]
    );
}

#[test]
fn test_clear_trace_callback() {
    let registry = Registry::new();
    let events = collect(&registry);

    registry.register(|| 1u8);
    registry.clear_trace_callback();
    registry.register(|| 2u8);
    let _: Arc<u8> = registry.resolve();

    assert_eq!(events.lock().unwrap().len(), 1);
}

#[test]
fn test_trace_callback_replacement() {
    let registry = Registry::new();
    let events1 = collect(&registry);
    registry.register(|| 100usize);

    let events2 = collect(&registry);
    registry.register(|| 200usize);

    assert_eq!(events1.lock().unwrap().len(), 1);
    assert_eq!(events2.lock().unwrap().len(), 1);
}

#[test]
fn test_callback_can_use_different_registry() {
    define_registry!(main_registry);
    define_registry!(log_registry);

    main_registry::set_trace_callback(move |event| {
        let line = event.to_string();
        log_registry::register(move || format!("Last event: {}", line));
    });

    main_registry::register(|| 42i32);
    let value: Arc<i32> = main_registry::resolve();
    assert_eq!(*value, 42);

    let last_log: Arc<String> = log_registry::resolve_with(Scope::Unique, None);
    assert!(last_log.contains("resolve"));

    main_registry::clear_trace_callback();
}

#[test]
fn test_tracing_subscriber_receives_registry_logs() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let registry = Registry::new();
        registry.register(|| 5u16);
        let a = registry.resolve::<u16>();
        let b = registry.resolve::<u16>();
        assert!(Arc::ptr_eq(&a, &b));
        registry.reset();
    });
}
