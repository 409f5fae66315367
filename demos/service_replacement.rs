//! Service replacement example for dependency-registry.
//!
//! Demonstrates:
//! - Re-registering a factory evicts the cached singleton
//! - `Arc` handles resolved earlier stay valid after replacement
//! - Concurrent first resolutions agree on a single instance
//!
//! Run with: `RUST_LOG=dependency_registry=debug cargo run --example service_replacement`

use dependency_registry::define_registry;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use tracing_subscriber::EnvFilter;

// Create an isolated registry for this example
define_registry!(config);

/// Application settings that might be hot-reloaded.
#[derive(Debug)]
struct AppSettings {
    api_endpoint: String,
    timeout_ms: u64,
    version: u32,
}

impl AppSettings {
    fn describe(&self) -> String {
        format!(
            "v{} -> {} (timeout: {}ms)",
            self.version, self.api_endpoint, self.timeout_ms
        )
    }
}

fn register_version(version: u32) {
    config::register(move || AppSettings {
        api_endpoint: format!("https://api.v{}.example.com", version),
        timeout_ms: 5000 * u64::from(version),
        version,
    });
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== dependency-registry: Service Replacement ===\n");

    // -------------------------------------------------------------------------
    // 1. Register and resolve the initial settings
    // -------------------------------------------------------------------------
    println!("1. Registering initial settings...");

    register_version(1);

    let held_reference: Arc<AppSettings> = config::resolve();
    println!("   Resolved: {}", held_reference.describe());
    println!("   Cached: {}", config::is_memoized::<AppSettings>(None));

    // -------------------------------------------------------------------------
    // 2. Replace the factory
    // -------------------------------------------------------------------------
    println!("\n2. Registering a new factory...");

    register_version(2);

    println!(
        "   Cached after re-register: {}",
        config::is_memoized::<AppSettings>(None)
    );

    // -------------------------------------------------------------------------
    // 3. Old handles remain valid, new lookups get the replacement
    // -------------------------------------------------------------------------
    println!("\n3. Comparing old and new handles...");

    let settings_v2: Arc<AppSettings> = config::resolve();
    println!("   Held reference: {}", held_reference.describe());
    println!("   New lookup:     {}", settings_v2.describe());
    println!("   Same Arc? {}", Arc::ptr_eq(&held_reference, &settings_v2));

    // -------------------------------------------------------------------------
    // 4. Concurrent first resolution
    // -------------------------------------------------------------------------
    println!("\n4. Resolving a fresh singleton from several threads...\n");

    let builds = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&builds);
    config::register(move || AppSettings {
        api_endpoint: "https://api.v3.example.com".to_string(),
        timeout_ms: 15000,
        version: 3 + counter.fetch_add(1, Ordering::SeqCst) * 100,
    });

    let barrier = Arc::new(Barrier::new(4));
    let handles: Vec<_> = (0..4)
        .map(|id| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let settings: Arc<AppSettings> = config::resolve();
                println!("   [Thread {}] got version {}", id, settings.version);
                settings
            })
        })
        .collect();

    let resolved: Vec<Arc<AppSettings>> = handles
        .into_iter()
        .filter_map(|handle| handle.join().ok())
        .collect();

    let shared = resolved.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1]));
    println!("\n   Factory invocations: {}", builds.load(Ordering::SeqCst));
    println!("   All threads share one instance: {}", shared);

    println!("\n=== Example Complete ===");
    println!("Key takeaways:");
    println!("  - Re-registering evicts the cached singleton");
    println!("  - Existing Arc<T> handles keep the instance they resolved");
    println!("  - Concurrent resolutions keep the first instance cached");
}
