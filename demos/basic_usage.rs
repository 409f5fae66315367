//! Basic usage example for dependency-registry.
//!
//! Demonstrates:
//! - Registering factories for primitives, strings, and custom structs
//! - Resolving required services with `resolve()` (returns `Arc<T>`)
//! - Resolving optional services with `try_resolve()`
//! - Tagged registrations and the two resolution scopes
//! - Checking registration status with `contains()` and `is_memoized()`
//!
//! Run with: `RUST_LOG=dependency_registry=debug cargo run --example basic_usage`

use dependency_registry::{define_registry, Scope};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// Create an isolated registry for this example
define_registry!(app);

#[derive(Debug)]
struct AppConfig {
    name: String,
    version: u32,
    debug_mode: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== dependency-registry: Basic Usage ===\n");

    // -------------------------------------------------------------------------
    // 1. Register factories
    // -------------------------------------------------------------------------
    println!("1. Registering factories...");

    app::register(|| 42i32);
    app::register(|| "Hello, dependency-registry!".to_string());
    app::register(|| AppConfig {
        name: "MyApp".to_string(),
        version: 1,
        debug_mode: true,
    });

    println!("   Registered: i32, String, AppConfig (nothing built yet)");
    println!(
        "   is_memoized::<AppConfig>() = {}",
        app::is_memoized::<AppConfig>(None)
    );

    // -------------------------------------------------------------------------
    // 2. Check registration status
    // -------------------------------------------------------------------------
    println!("\n2. Checking registration status with contains()...");

    println!("   contains::<i32>()       = {}", app::contains::<i32>(None));
    println!("   contains::<String>()    = {}", app::contains::<String>(None));
    println!("   contains::<AppConfig>() = {}", app::contains::<AppConfig>(None));
    println!("   contains::<Vec<u8>>()   = {}", app::contains::<Vec<u8>>(None)); // Not registered

    // -------------------------------------------------------------------------
    // 3. Resolve required services
    // -------------------------------------------------------------------------
    println!("\n3. Resolving with resolve() -> Arc<T>...");

    let number: Arc<i32> = app::resolve();
    let message: Arc<String> = app::resolve();
    let config: Arc<AppConfig> = app::resolve();

    println!("   i32       = {}", number);
    println!("   String    = {}", message);
    println!(
        "   AppConfig = {} v{} (debug: {})",
        config.name, config.version, config.debug_mode
    );

    // -------------------------------------------------------------------------
    // 4. Global scope shares one instance
    // -------------------------------------------------------------------------
    println!("\n4. Global scope memoizes the first instance...");

    let again: Arc<AppConfig> = app::resolve();
    println!("   Same instance: {}", Arc::ptr_eq(&config, &again));
    println!("   Arc strong count: {}", Arc::strong_count(&config));

    // -------------------------------------------------------------------------
    // 5. Unique scope builds a fresh instance every time
    // -------------------------------------------------------------------------
    println!("\n5. Unique scope bypasses the cache...");

    let fresh: Arc<AppConfig> = app::resolve_with(Scope::Unique, None);
    println!("   Same instance: {}", Arc::ptr_eq(&config, &fresh));

    // -------------------------------------------------------------------------
    // 6. Tagged registrations
    // -------------------------------------------------------------------------
    println!("\n6. Registering a tagged String...");

    app::register_factory::<String>(Some("greeting"), || Arc::new("Hi there!".to_string()));

    let default: Arc<String> = app::resolve();
    let greeting: Arc<String> = app::resolve_with(Scope::Global, Some("greeting"));
    println!("   String            = {}", default);
    println!("   String[greeting]  = {}", greeting);

    // -------------------------------------------------------------------------
    // 7. Optional services
    // -------------------------------------------------------------------------
    println!("\n7. Resolving optional services with try_resolve()...");

    match app::try_resolve::<Vec<u8>>() {
        Some(bytes) => println!("   Vec<u8> = {:?}", bytes),
        None => println!("   Vec<u8> is not registered"),
    }

    match app::get::<f64>(Scope::Global, None) {
        Ok(value) => println!("   f64 = {}", value),
        Err(err) => println!("   Error: {}", err),
    }

    println!("\n=== Example completed successfully ===");
}
