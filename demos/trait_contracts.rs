//! Trait contracts example for dependency-registry.
//!
//! Demonstrates:
//! - Registering implementations under a trait object key (`dyn Notifier`)
//! - Keeping several implementations side by side with tags
//! - Injecting contracts into a consumer with `Inject` and `OptionalInject`
//! - Swapping the default implementation at runtime
//!
//! Run with: `RUST_LOG=dependency_registry=debug cargo run --example trait_contracts`

use dependency_registry::{define_registry, Inject, OptionalInject, Scope};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// Create an isolated registry for this example
define_registry!(services);

// =============================================================================
// Contracts
// =============================================================================

trait Notifier: Send + Sync {
    fn notify(&self, recipient: &str, message: &str);
    fn channel(&self) -> &str;
}

trait AuditLog: Send + Sync {
    fn record(&self, entry: &str);
}

// =============================================================================
// Implementations
// =============================================================================

struct EmailNotifier {
    smtp_server: String,
}

impl Notifier for EmailNotifier {
    fn notify(&self, recipient: &str, message: &str) {
        println!("   [EMAIL via {}] {} <- {}", self.smtp_server, recipient, message);
    }

    fn channel(&self) -> &str {
        "email"
    }
}

struct SmsNotifier {
    sender: String,
}

impl Notifier for SmsNotifier {
    fn notify(&self, recipient: &str, message: &str) {
        println!("   [SMS from {}] {} <- {}", self.sender, recipient, message);
    }

    fn channel(&self) -> &str {
        "sms"
    }
}

struct ConsoleAudit;

impl AuditLog for ConsoleAudit {
    fn record(&self, entry: &str) {
        println!("   [AUDIT] {}", entry);
    }
}

// =============================================================================
// Consumer
// =============================================================================

/// Depends on contracts only; which implementations it gets is up to the registry.
struct OrderService {
    notifier: Inject<dyn Notifier>,
    urgent: Inject<dyn Notifier>,
    audit: OptionalInject<dyn AuditLog>,
}

impl OrderService {
    fn new() -> Self {
        Self {
            notifier: Inject::new(&services::API),
            urgent: Inject::with(&services::API, Scope::Global, Some("urgent")),
            audit: OptionalInject::new(&services::API),
        }
    }

    fn confirm(&self, order_id: u32) {
        let message = format!("Order #{} confirmed", order_id);
        self.notifier.notify("customer@example.com", &message);

        if order_id % 2 == 0 {
            self.urgent.notify("+1-555-0100", "Express order shipped");
        }

        if let Some(audit) = self.audit.get() {
            audit.record(&message);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== dependency-registry: Trait Contracts ===\n");

    // -------------------------------------------------------------------------
    // 1. Register implementations
    // -------------------------------------------------------------------------
    println!("1. Registering implementations...");

    services::register_arc::<dyn Notifier>(|| {
        Arc::new(EmailNotifier {
            smtp_server: "smtp.example.com".to_string(),
        })
    });
    services::register_factory::<dyn Notifier>(Some("urgent"), || {
        Arc::new(SmsNotifier {
            sender: "ACME".to_string(),
        })
    });

    println!("   Notifier:          EmailNotifier");
    println!("   Notifier[urgent]:  SmsNotifier");
    println!("   AuditLog:          (none)");

    // -------------------------------------------------------------------------
    // 2. Use the contracts
    // -------------------------------------------------------------------------
    println!("\n2. Confirming orders without an audit log...");

    let service = OrderService::new();
    service.confirm(1001);
    service.confirm(1002);

    // -------------------------------------------------------------------------
    // 3. Add an optional dependency and swap the default
    // -------------------------------------------------------------------------
    println!("\n3. Registering an audit log and swapping the default notifier...");

    services::register_arc::<dyn AuditLog>(|| Arc::new(ConsoleAudit));
    services::register_arc::<dyn Notifier>(|| {
        Arc::new(SmsNotifier {
            sender: "ACME-MAIN".to_string(),
        })
    });

    // The existing service keeps what it was built with
    println!("   Existing service still uses: {}", service.notifier.channel());

    let service = OrderService::new();
    println!("   New service uses: {}", service.notifier.channel());

    // -------------------------------------------------------------------------
    // 4. Same consumer code, different behavior
    // -------------------------------------------------------------------------
    println!("\n4. Confirming an order with the new wiring...");

    service.confirm(1004);

    println!("\n=== Example Complete ===");
    println!("Consumers depend on traits; the registry decides the implementation.");
}
