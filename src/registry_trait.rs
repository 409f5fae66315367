//! Core trait defining registry behavior.
//!
//! This module provides the `RegistryApi` trait with default implementations for
//! factory registration, scoped resolution, and tracing.
//!
//! The registry is keyed by [`ServiceKey`]: the service type plus an optional tag.
//! Registering a factory for an existing key replaces it and evicts the cached
//! singleton, so the next global-scope resolution builds a new instance.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, error, trace};

use crate::{RegistryError, RegistryEvent, Scope, ServiceKey, Storage};

/// Type alias for the user-supplied tracing callback.
pub type TraceCallback = dyn Fn(&RegistryEvent) + Send + Sync + 'static;

/// Slot holding the optional tracing callback of one registry.
pub type TraceSlot = Mutex<Option<Arc<TraceCallback>>>;

/// Locks a registry mutex, recovering it if poisoned.
///
/// Factories and callbacks never run while these locks are held, so a poisoned
/// lock still guards consistent maps.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|p| p.into_inner())
}

/// Resolution algorithm shared by every `RegistryApi` implementor.
fn resolve_key<T>(
    storage: &Mutex<Storage>,
    key: &ServiceKey,
    scope: Scope,
) -> Result<Arc<T>, RegistryError>
where
    T: ?Sized + Send + Sync + 'static,
{
    let (factory, generation) = {
        let storage = lock(storage);
        if scope == Scope::Global {
            if let Some(instance) = storage.singleton::<T>(key)? {
                trace!(service = %key, "singleton cache hit");
                return Ok(instance);
            }
        }
        storage.factory::<T>(key)?
    };

    let instance = factory();

    match scope {
        Scope::Unique => {
            trace!(service = %key, "built unique instance");
            Ok(instance)
        }
        Scope::Global => {
            debug!(service = %key, "built singleton");
            lock(storage).memoize(key, generation, instance)
        }
    }
}

/// Core trait defining registry behavior.
///
/// Provides default implementations for all registry operations, requiring only
/// two accessor methods (`storage` and `trace`) to be implemented by the implementor.
/// [`Registry`](crate::Registry) implements it for an owned instance and
/// [`define_registry!`](crate::define_registry) for a process-wide static.
pub trait RegistryApi {
    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Access the trace callback slot.
    fn trace(&self) -> &TraceSlot;

    /// Set a tracing callback for registry operations.
    ///
    /// The callback will be invoked for every registry operation (register, resolve,
    /// contains, reset). It runs with no registry lock held, so it may itself use
    /// the registry.
    fn set_trace_callback(&self, callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        *lock(self.trace()) = Some(Arc::new(callback));
    }

    /// Clear the tracing callback.
    ///
    /// Note: This does not affect registrations, only the tracing callback.
    fn clear_trace_callback(&self) {
        *lock(self.trace()) = None;
    }

    /// Emit a registry event to the current callback, if any.
    ///
    /// # Panics
    ///
    /// If the callback itself panics, the panic will propagate to the caller.
    fn emit_event(&self, event: &RegistryEvent) {
        let callback = lock(self.trace()).clone();
        if let Some(callback) = callback {
            callback(event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------------------------------

    /// Access the factory and singleton storage.
    fn storage(&self) -> &Mutex<Storage>;

    /// Install `factory` for service type `T` under `tag`.
    ///
    /// Overwrites any factory already installed for the same key and evicts its
    /// cached singleton. The factory is not invoked here; it runs on resolution.
    ///
    /// `T` may be unsized, so trait objects can be registered directly:
    ///
    /// ```rust
    /// use dependency_registry::{Registry, RegistryApi, Scope};
    /// use std::sync::Arc;
    ///
    /// trait Messaging: Send + Sync {
    ///     fn channel(&self) -> &'static str;
    /// }
    /// struct Sms;
    /// impl Messaging for Sms {
    ///     fn channel(&self) -> &'static str { "sms" }
    /// }
    ///
    /// let registry = Registry::new();
    /// registry.register_factory::<dyn Messaging>(Some("sms"), || Arc::new(Sms));
    ///
    /// let messaging = registry.resolve_with::<dyn Messaging>(Scope::Global, Some("sms"));
    /// assert_eq!(messaging.channel(), "sms");
    /// ```
    fn register_factory<T>(
        &self,
        tag: Option<&str>,
        factory: impl Fn() -> Arc<T> + Send + Sync + 'static,
    ) where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = ServiceKey::of::<T>(tag);

        self.emit_event(&RegistryEvent::Register {
            type_name: key.type_name(),
            tag: key.tag().map(str::to_owned),
        });

        let evicted = lock(self.storage()).install::<T>(key.clone(), Arc::new(factory));

        debug!(service = %key, evicted, "registered factory");
    }

    /// Register a factory producing owned values of type `T`, without a tag.
    ///
    /// Each produced value is wrapped in an `Arc` automatically.
    ///
    /// # Design Note
    ///
    /// Registration does not return a `Result`: replacing an existing factory is a
    /// supported override (test setup relies on it), and lock poisoning is recovered.
    fn register<T: Send + Sync + 'static>(&self, factory: impl Fn() -> T + Send + Sync + 'static) {
        self.register_factory::<T>(None, move || Arc::new(factory()));
    }

    /// Register a factory producing `Arc<T>`, without a tag.
    ///
    /// Use this for trait objects (`Arc<dyn Trait>`) or when the factory already
    /// hands out shared handles.
    fn register_arc<T>(&self, factory: impl Fn() -> Arc<T> + Send + Sync + 'static)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.register_factory::<T>(None, factory);
    }

    // -------------------------------------------------------------------------------------------------
    // Resolution
    // -------------------------------------------------------------------------------------------------

    /// Resolve service `T` under `tag`, returning an error if nothing is registered.
    ///
    /// - [`Scope::Unique`] invokes the factory and returns the new instance; the
    ///   singleton cache is neither read nor written.
    /// - [`Scope::Global`] returns the cached singleton, or invokes the factory and
    ///   caches its result.
    ///
    /// The factory runs with no lock held. When two threads race to populate the same
    /// singleton, the first to store wins and the other's instance is discarded.
    /// Panics raised by the factory propagate unchanged.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::DependencyNotResolved`] if no factory is installed for the key
    /// - [`RegistryError::TypeMismatch`] if the stored entry has an unexpected type
    fn get<T>(&self, scope: Scope, tag: Option<&str>) -> Result<Arc<T>, RegistryError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = ServiceKey::of::<T>(tag);

        let result = resolve_key::<T>(self.storage(), &key, scope);

        if let Err(err) = &result {
            debug!(service = %key, %scope, error = %err, "resolution failed");
        }

        self.emit_event(&RegistryEvent::Resolve {
            type_name: key.type_name(),
            tag: key.tag().map(str::to_owned),
            scope,
            found: result.is_ok(),
        });

        result
    }

    /// Resolve a required service from the global scope, without a tag.
    ///
    /// # Panics
    ///
    /// Panics if no factory is registered for `T`. A missing required dependency is a
    /// wiring mistake; use [`try_resolve`](RegistryApi::try_resolve) for optional ones.
    #[track_caller]
    fn resolve<T>(&self) -> Arc<T>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.resolve_with::<T>(Scope::Global, None)
    }

    /// Resolve a required service with an explicit scope and tag.
    ///
    /// # Panics
    ///
    /// Panics if no factory is registered for the key, with a message naming the
    /// type and tag.
    #[track_caller]
    fn resolve_with<T>(&self, scope: Scope, tag: Option<&str>) -> Arc<T>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        match self.get::<T>(scope, tag) {
            Ok(instance) => instance,
            Err(err) => {
                error!(error = %err, "required dependency missing");
                panic!("{err}");
            }
        }
    }

    /// Resolve an optional service from the global scope, without a tag.
    ///
    /// Returns `None` instead of failing when nothing is registered.
    fn try_resolve<T>(&self) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.try_resolve_with::<T>(Scope::Global, None)
    }

    /// Resolve an optional service with an explicit scope and tag.
    fn try_resolve_with<T>(&self, scope: Scope, tag: Option<&str>) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.get::<T>(scope, tag).ok()
    }

    /// Check whether a factory is installed for `T` under `tag`.
    fn contains<T>(&self, tag: Option<&str>) -> bool
    where
        T: ?Sized + 'static,
    {
        let key = ServiceKey::of::<T>(tag);
        let found = lock(self.storage()).contains(&key);

        self.emit_event(&RegistryEvent::Contains {
            type_name: key.type_name(),
            tag: key.tag().map(str::to_owned),
            found,
        });

        found
    }

    /// Check whether a singleton is currently cached for `T` under `tag`.
    fn is_memoized<T>(&self, tag: Option<&str>) -> bool
    where
        T: ?Sized + 'static,
    {
        lock(self.storage()).is_memoized(&ServiceKey::of::<T>(tag))
    }

    /// Drop every factory and cached singleton.
    ///
    /// Subsequent resolutions behave as on a fresh registry. Already-resolved
    /// `Arc<T>` handles stay valid, and the tracing callback is kept.
    fn reset(&self) {
        self.emit_event(&RegistryEvent::Reset {});

        lock(self.storage()).clear();

        debug!("registry reset");
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
