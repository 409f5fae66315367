//! An explicitly constructed registry instance.
//!
//! A composition root creates one [`Registry`], registers factories during wiring, and
//! hands references to the code that needs to resolve services. Nothing is global:
//! two registries never share factories or singletons.
//!
//! # Examples
//!
//! ```
//! use dependency_registry::{Registry, RegistryApi, Scope};
//! use std::sync::Arc;
//!
//! let registry = Registry::new();
//! registry.register(|| "Hello, World!".to_string());
//!
//! // Global scope shares one instance
//! let a: Arc<String> = registry.resolve();
//! let b: Arc<String> = registry.resolve();
//! assert!(Arc::ptr_eq(&a, &b));
//!
//! // Unique scope builds a fresh one
//! let c: Arc<String> = registry.resolve_with(Scope::Unique, None);
//! assert!(!Arc::ptr_eq(&a, &c));
//! ```

use std::fmt;
use std::sync::Mutex;

use crate::{RegistryApi, Storage, TraceSlot};

/// Owned registry mapping service keys to factories and memoized singletons.
///
/// All operations come from [`RegistryApi`]. The registry is `Send + Sync`; share it
/// by reference or wrap it in an `Arc`.
#[derive(Default)]
pub struct Registry {
    storage: Mutex<Storage>,
    trace: TraceSlot,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RegistryApi for Registry {
    fn storage(&self) -> &Mutex<Storage> {
        &self.storage
    }

    fn trace(&self) -> &TraceSlot {
        &self.trace
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let storage = self.storage.lock().unwrap_or_else(|p| p.into_inner());
        f.debug_struct("Registry")
            .field("factories", &storage.factory_count())
            .field("singletons", &storage.singleton_count())
            .finish()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
