//! # Dependency Registry
//!
//! A thread-safe service locator: a registry mapping a service type (optionally
//! qualified by a tag) to a factory, with two resolution scopes.
//!
//! - [`Scope::Global`] memoizes: the first resolution runs the factory and every
//!   later one shares that instance.
//! - [`Scope::Unique`] runs the factory on every resolution.
//!
//! Service types may be unsized, so trait objects (`dyn Messaging`) are registered
//! and resolved directly. Instances are handed out as `Arc<T>`.
//!
//! ## Quick Start
//!
//! ```rust
//! use dependency_registry::{Registry, RegistryApi};
//! use std::sync::Arc;
//!
//! trait Messaging: Send + Sync {
//!     fn send(&self, to: &str) -> String;
//! }
//!
//! struct SmsService;
//!
//! impl Messaging for SmsService {
//!     fn send(&self, to: &str) -> String {
//!         format!("sms to {to}")
//!     }
//! }
//!
//! let registry = Registry::new();
//! registry.register_arc::<dyn Messaging>(|| Arc::new(SmsService));
//!
//! let messaging: Arc<dyn Messaging> = registry.resolve();
//! assert_eq!(messaging.send("alice"), "sms to alice");
//!
//! // Optional lookups never fail
//! assert!(registry.try_resolve::<String>().is_none());
//! ```
//!
//! ## Features
//!
//! - **Thread-safe**: one mutex guards factories and singletons; concurrent global
//!   resolutions agree on exactly one instance (first writer wins)
//! - **Tagged registrations**: several implementations of one service type coexist
//! - **Override-friendly**: re-registering a key replaces the factory and evicts its singleton
//! - **Hard failure for wiring mistakes**: [`RegistryApi::resolve`] panics when a required
//!   dependency is missing, [`RegistryApi::try_resolve`] returns `None`
//! - **Tracing support**: `tracing` events, plus an optional per-registry callback
//!
//! ## Main Items
//!
//! - [`Registry`] - An owned registry for a composition root
//! - [`RegistryApi`] - All registry operations (register, resolve, try_resolve, reset, ...)
//! - [`define_registry!`] - A process-wide registry module backed by statics
//! - [`Inject`] / [`OptionalInject`] - Resolve a dependency once, at construction

mod inject;
mod macros;
mod registry;
mod registry_error;
mod registry_event;
mod registry_trait;
mod scope;
mod service_key;
mod storage;

// Re-export the main public API
pub use inject::{Inject, OptionalInject};
pub use registry::Registry;
pub use registry_error::RegistryError;
pub use registry_event::RegistryEvent;
pub use registry_trait::{RegistryApi, TraceCallback, TraceSlot};
pub use scope::Scope;
pub use service_key::ServiceKey;
pub use storage::Storage;
