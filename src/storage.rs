//! The two maps behind every registry.
//!
//! `factories` maps a [`ServiceKey`] to its type-erased factory, `singletons`
//! maps it to the instance memoized by a global-scope resolution. Both live in
//! one [`Storage`] so a single mutex covers every check-then-act sequence.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::{RegistryError, ServiceKey};

/// Type-erased producer of one service instance.
pub(crate) type Factory<T> = Arc<dyn Fn() -> Arc<T> + Send + Sync>;

struct Registration {
    /// Holds a `Factory<T>` for the key's `T`.
    factory: Box<dyn Any + Send + Sync>,
    generation: u64,
}

/// Factory and singleton maps guarded by a registry's mutex.
///
/// Opaque outside the crate; implementors of [`RegistryApi`](crate::RegistryApi)
/// only need to own one behind a `Mutex`.
#[derive(Default)]
pub struct Storage {
    factories: HashMap<ServiceKey, Registration>,
    /// Each value holds an `Arc<T>` for the key's `T`.
    singletons: HashMap<ServiceKey, Box<dyn Any + Send + Sync>>,
    // Monotonic across `clear`, so instances built by a dropped factory never match.
    generation: u64,
}

impl Storage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of installed factories.
    pub fn factory_count(&self) -> usize {
        self.factories.len()
    }

    /// Number of memoized singletons.
    pub fn singleton_count(&self) -> usize {
        self.singletons.len()
    }

    /// Installs `factory` under `key`, evicting any singleton cached for it.
    ///
    /// Returns `true` if a singleton was evicted.
    pub(crate) fn install<T>(&mut self, key: ServiceKey, factory: Factory<T>) -> bool
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.generation += 1;
        let evicted = self.singletons.remove(&key).is_some();
        self.factories.insert(
            key,
            Registration {
                factory: Box::new(factory),
                generation: self.generation,
            },
        );
        evicted
    }

    /// Returns the factory installed for `key` with its generation.
    pub(crate) fn factory<T>(&self, key: &ServiceKey) -> Result<(Factory<T>, u64), RegistryError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let registration = self.factories.get(key).ok_or_else(|| not_resolved(key))?;
        let factory = registration
            .factory
            .downcast_ref::<Factory<T>>()
            .ok_or_else(|| type_mismatch(key))?;

        Ok((Arc::clone(factory), registration.generation))
    }

    pub(crate) fn singleton<T>(&self, key: &ServiceKey) -> Result<Option<Arc<T>>, RegistryError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        match self.singletons.get(key) {
            Some(instance) => instance
                .downcast_ref::<Arc<T>>()
                .map(|instance| Some(Arc::clone(instance)))
                .ok_or_else(|| type_mismatch(key)),
            None => Ok(None),
        }
    }

    /// Caches `instance`, built by the factory of `generation`, as the singleton for `key`.
    ///
    /// First writer wins: if the slot is already filled, `instance` is dropped and the
    /// cached one returned. If the factory was replaced or the storage cleared while
    /// `instance` was being built, it is returned without being cached.
    pub(crate) fn memoize<T>(
        &mut self,
        key: &ServiceKey,
        generation: u64,
        instance: Arc<T>,
    ) -> Result<Arc<T>, RegistryError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        if let Some(existing) = self.singleton::<T>(key)? {
            tracing::trace!(service = %key, "singleton already populated, discarding new instance");
            return Ok(existing);
        }

        let current = self.factories.get(key).map(|r| r.generation);
        if current == Some(generation) {
            self.singletons
                .insert(key.clone(), Box::new(Arc::clone(&instance)));
        } else {
            tracing::debug!(service = %key, "factory replaced during instantiation, not caching");
        }

        Ok(instance)
    }

    pub(crate) fn contains(&self, key: &ServiceKey) -> bool {
        self.factories.contains_key(key)
    }

    pub(crate) fn is_memoized(&self, key: &ServiceKey) -> bool {
        self.singletons.contains_key(key)
    }

    pub(crate) fn clear(&mut self) {
        self.factories.clear();
        self.singletons.clear();
    }
}

impl fmt::Debug for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storage")
            .field("factories", &self.factories.keys().collect::<Vec<_>>())
            .field("singletons", &self.singletons.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn not_resolved(key: &ServiceKey) -> RegistryError {
    RegistryError::DependencyNotResolved {
        type_name: key.type_name(),
        tag: key.tag().map(str::to_owned),
    }
}

fn type_mismatch(key: &ServiceKey) -> RegistryError {
    RegistryError::TypeMismatch {
        type_name: key.type_name(),
        tag: key.tag().map(str::to_owned),
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
