//! Construction-time injection.
//!
//! [`Inject`] and [`OptionalInject`] resolve their dependency once, when the enclosing
//! value is built, and keep that handle for the value's lifetime. They are plain
//! struct fields, not interceptors: later registry changes do not affect a value that
//! was already injected.
//!
//! Overriding follows binding mutability. `replace` takes `&mut self`, so a field of a
//! value held mutably can be swapped (handy for test doubles), while one behind a
//! shared reference stays fixed.
//!
//! ```rust
//! use dependency_registry::{Inject, OptionalInject, Registry, RegistryApi};
//!
//! trait Publisher: Send + Sync {}
//! struct EventPublisher;
//! impl Publisher for EventPublisher {}
//!
//! struct Checkout {
//!     greeting: Inject<String>,
//!     publisher: OptionalInject<dyn Publisher>,
//! }
//!
//! let registry = Registry::new();
//! registry.register(|| "welcome".to_string());
//!
//! let checkout = Checkout {
//!     greeting: Inject::new(&registry),
//!     publisher: OptionalInject::new(&registry),
//! };
//!
//! assert_eq!(checkout.greeting.as_str(), "welcome");
//! assert!(checkout.publisher.get().is_none());
//! ```

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::{RegistryApi, Scope};

/// A required dependency resolved when constructed.
pub struct Inject<T: ?Sized> {
    service: Arc<T>,
}

impl<T> Inject<T>
where
    T: ?Sized + Send + Sync + 'static,
{
    /// Resolve `T` from the global scope, without a tag.
    ///
    /// # Panics
    ///
    /// Panics if no factory is registered for `T`.
    #[track_caller]
    pub fn new(registry: &impl RegistryApi) -> Self {
        Self::with(registry, Scope::Global, None)
    }

    /// Resolve `T` with an explicit scope and tag.
    ///
    /// # Panics
    ///
    /// Panics if no factory is registered for the key.
    #[track_caller]
    pub fn with(registry: &impl RegistryApi, scope: Scope, tag: Option<&str>) -> Self {
        Self {
            service: registry.resolve_with::<T>(scope, tag),
        }
    }
}

impl<T: ?Sized> Inject<T> {
    /// Wrap an already-built service, bypassing the registry.
    pub fn from_arc(service: Arc<T>) -> Self {
        Self { service }
    }

    pub fn get(&self) -> &Arc<T> {
        &self.service
    }

    /// Swap in another service, returning the previous one.
    pub fn replace(&mut self, service: Arc<T>) -> Arc<T> {
        std::mem::replace(&mut self.service, service)
    }

    pub fn into_inner(self) -> Arc<T> {
        self.service
    }
}

impl<T: ?Sized> Deref for Inject<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.service
    }
}

impl<T: ?Sized> Clone for Inject<T> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Inject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inject")
            .field("service", &std::any::type_name::<T>())
            .finish()
    }
}

/// An optional dependency, attempted when constructed.
///
/// Holds `None` if nothing was registered at construction time, and stays `None`
/// even if a factory is registered afterwards.
pub struct OptionalInject<T: ?Sized> {
    service: Option<Arc<T>>,
}

impl<T> OptionalInject<T>
where
    T: ?Sized + Send + Sync + 'static,
{
    /// Attempt to resolve `T` from the global scope, without a tag.
    pub fn new(registry: &impl RegistryApi) -> Self {
        Self::with(registry, Scope::Global, None)
    }

    /// Attempt to resolve `T` with an explicit scope and tag.
    pub fn with(registry: &impl RegistryApi, scope: Scope, tag: Option<&str>) -> Self {
        Self {
            service: registry.try_resolve_with::<T>(scope, tag),
        }
    }
}

impl<T: ?Sized> OptionalInject<T> {
    pub fn from_option(service: Option<Arc<T>>) -> Self {
        Self { service }
    }

    pub fn get(&self) -> Option<&Arc<T>> {
        self.service.as_ref()
    }

    pub fn is_some(&self) -> bool {
        self.service.is_some()
    }

    /// Swap in another service (or none), returning the previous one.
    pub fn replace(&mut self, service: Option<Arc<T>>) -> Option<Arc<T>> {
        std::mem::replace(&mut self.service, service)
    }

    pub fn into_inner(self) -> Option<Arc<T>> {
        self.service
    }
}

impl<T: ?Sized> Clone for OptionalInject<T> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for OptionalInject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionalInject")
            .field("service", &std::any::type_name::<T>())
            .field("resolved", &self.service.is_some())
            .finish()
    }
}
