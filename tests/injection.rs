//! Integration tests for construction-time injection.
//!
//! Dependencies are resolved once, when the consumer is built, and kept for its
//! lifetime.

use dependency_registry::{Inject, OptionalInject, Registry, RegistryApi, Scope};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

trait Messaging: Send + Sync {
    fn provider(&self) -> &'static str;
}

struct SmsService1;

impl Messaging for SmsService1 {
    fn provider(&self) -> &'static str {
        "sms-1"
    }
}

trait Publisher: Send + Sync {
    fn topic(&self) -> &'static str;
}

struct EventPublisher;

impl Publisher for EventPublisher {
    fn topic(&self) -> &'static str {
        "events"
    }
}

struct NotificationCenter {
    messaging: Inject<dyn Messaging>,
    publisher: OptionalInject<dyn Publisher>,
}

impl NotificationCenter {
    fn new(registry: &Registry) -> Self {
        Self {
            messaging: Inject::new(registry),
            publisher: OptionalInject::new(registry),
        }
    }
}

#[test]
fn test_property_wrappers() {
    let registry = Registry::new();

    registry.register_arc::<dyn Messaging>(|| Arc::new(SmsService1));
    let center = NotificationCenter::new(&registry);
    assert_eq!(center.messaging.provider(), "sms-1");
    assert!(center.publisher.get().is_none());

    registry.register_arc::<dyn Publisher>(|| Arc::new(EventPublisher));
    let center = NotificationCenter::new(&registry);
    assert_eq!(center.publisher.get().map(|p| p.topic()), Some("events"));
}

#[test]
#[should_panic(expected = "not resolved")]
fn test_required_injection_fails_without_registration() {
    let registry = Registry::new();
    let _ = NotificationCenter::new(&registry);
}

#[test]
fn test_injected_singletons_are_shared() {
    let registry = Registry::new();
    registry.register_arc::<dyn Messaging>(|| Arc::new(SmsService1));

    let a = NotificationCenter::new(&registry);
    let b = NotificationCenter::new(&registry);

    assert!(Arc::ptr_eq(a.messaging.get(), b.messaging.get()));
}

#[test]
fn test_unique_injection_builds_per_consumer() {
    struct RequestContext {
        id: usize,
    }

    let registry = Registry::new();
    let next_id = Arc::new(AtomicUsize::new(0));
    let ids = next_id.clone();
    registry.register(move || RequestContext {
        id: ids.fetch_add(1, Ordering::SeqCst),
    });

    let first: Inject<RequestContext> = Inject::with(&registry, Scope::Unique, None);
    let second: Inject<RequestContext> = Inject::with(&registry, Scope::Unique, None);

    assert_eq!((first.id, second.id), (0, 1));
}

#[test]
fn test_injected_value_can_be_overridden() {
    struct FakeMessaging;

    impl Messaging for FakeMessaging {
        fn provider(&self) -> &'static str {
            "fake"
        }
    }

    let registry = Registry::new();
    registry.register_arc::<dyn Messaging>(|| Arc::new(SmsService1));

    let mut center = NotificationCenter::new(&registry);
    center.messaging.replace(Arc::new(FakeMessaging));
    center.publisher.replace(Some(Arc::new(EventPublisher)));

    assert_eq!(center.messaging.provider(), "fake");
    assert!(center.publisher.is_some());
    // The registry itself is untouched
    assert_eq!(registry.resolve::<dyn Messaging>().provider(), "sms-1");
}

#[test]
fn test_tagged_optional_injection() {
    let registry = Registry::new();
    registry.register_factory::<dyn Publisher>(Some("audit"), || Arc::new(EventPublisher));

    let untagged: OptionalInject<dyn Publisher> = OptionalInject::new(&registry);
    let tagged: OptionalInject<dyn Publisher> =
        OptionalInject::with(&registry, Scope::Global, Some("audit"));

    assert!(!untagged.is_some());
    assert!(tagged.is_some());
}
