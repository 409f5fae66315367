//! Macros for creating process-wide registries.
//!
//! An owned [`Registry`](crate::Registry) held by the composition root is the default.
//! When import-free global access is wanted instead, `define_registry!` declares a
//! module backed by statics.

/// Creates a process-wide registry module with a single macro invocation.
///
/// The macro generates a module containing:
/// - Storage static (hidden)
/// - Trace callback static (hidden)
/// - An `Api` struct that implements `RegistryApi`, and its `API` constant
/// - Free functions delegating to `API`
///
/// # Examples
///
/// ```rust
/// use dependency_registry::{define_registry, Scope};
/// use std::sync::Arc;
///
/// define_registry!(global);
///
/// global::register(|| "Hello".to_string());
///
/// let a: Arc<String> = global::resolve();
/// let b: Arc<String> = global::resolve();
/// assert!(Arc::ptr_eq(&a, &b));
///
/// let fresh: Arc<String> = global::resolve_with(Scope::Unique, None);
/// assert!(!Arc::ptr_eq(&a, &fresh));
/// ```
///
/// # Multiple Registries
///
/// Each invocation is isolated:
///
/// ```rust
/// use dependency_registry::define_registry;
///
/// define_registry!(database);
/// define_registry!(cache);
///
/// database::register(|| "db_connection".to_string());
///
/// assert!(database::try_resolve::<String>().is_some());
/// assert!(cache::try_resolve::<String>().is_none());
/// ```
///
/// # Injection
///
/// The `API` constant plugs into [`Inject`](crate::Inject):
///
/// ```rust
/// use dependency_registry::{define_registry, Inject};
///
/// define_registry!(app);
///
/// app::register(|| 100i32);
/// let value: Inject<i32> = Inject::new(&app::API);
/// assert_eq!(*value, 100);
/// ```
#[macro_export]
macro_rules! define_registry {
    ($name:ident) => {
        pub mod $name {
            use std::sync::{Arc, LazyLock, Mutex};

            // Factories and singletons (module-private)
            static STORAGE: LazyLock<Mutex<$crate::Storage>> =
                LazyLock::new(|| Mutex::new($crate::Storage::new()));

            // Trace callback slot (module-private)
            static TRACE: $crate::TraceSlot = Mutex::new(None);

            /// Zero-sized handle implementing the registry API over this module's statics.
            pub struct Api;

            impl $crate::RegistryApi for Api {
                fn storage(&self) -> &Mutex<$crate::Storage> {
                    &STORAGE
                }

                fn trace(&self) -> &$crate::TraceSlot {
                    &TRACE
                }
            }

            /// Convenient constant for accessing the registry API.
            pub const API: Api = Api;

            // Free functions for ergonomic usage - they delegate to API

            /// Register a factory producing owned values of type `T`.
            pub fn register<T: Send + Sync + 'static>(
                factory: impl Fn() -> T + Send + Sync + 'static,
            ) {
                use $crate::RegistryApi;
                API.register(factory)
            }

            /// Register a factory producing `Arc<T>`.
            pub fn register_arc<T: ?Sized + Send + Sync + 'static>(
                factory: impl Fn() -> Arc<T> + Send + Sync + 'static,
            ) {
                use $crate::RegistryApi;
                API.register_arc(factory)
            }

            /// Register a factory for `T` under an optional tag.
            pub fn register_factory<T: ?Sized + Send + Sync + 'static>(
                tag: Option<&str>,
                factory: impl Fn() -> Arc<T> + Send + Sync + 'static,
            ) {
                use $crate::RegistryApi;
                API.register_factory(tag, factory)
            }

            /// Resolve a service, returning an error if nothing is registered.
            pub fn get<T: ?Sized + Send + Sync + 'static>(
                scope: $crate::Scope,
                tag: Option<&str>,
            ) -> Result<Arc<T>, $crate::RegistryError> {
                use $crate::RegistryApi;
                API.get(scope, tag)
            }

            /// Resolve a required service; panics if nothing is registered.
            #[track_caller]
            pub fn resolve<T: ?Sized + Send + Sync + 'static>() -> Arc<T> {
                use $crate::RegistryApi;
                API.resolve()
            }

            /// Resolve a required service with scope and tag; panics if nothing is registered.
            #[track_caller]
            pub fn resolve_with<T: ?Sized + Send + Sync + 'static>(
                scope: $crate::Scope,
                tag: Option<&str>,
            ) -> Arc<T> {
                use $crate::RegistryApi;
                API.resolve_with(scope, tag)
            }

            /// Resolve an optional service.
            pub fn try_resolve<T: ?Sized + Send + Sync + 'static>() -> Option<Arc<T>> {
                use $crate::RegistryApi;
                API.try_resolve()
            }

            /// Resolve an optional service with scope and tag.
            pub fn try_resolve_with<T: ?Sized + Send + Sync + 'static>(
                scope: $crate::Scope,
                tag: Option<&str>,
            ) -> Option<Arc<T>> {
                use $crate::RegistryApi;
                API.try_resolve_with(scope, tag)
            }

            /// Check if a factory is registered for `T` under `tag`.
            pub fn contains<T: ?Sized + 'static>(tag: Option<&str>) -> bool {
                use $crate::RegistryApi;
                API.contains::<T>(tag)
            }

            /// Check if a singleton is cached for `T` under `tag`.
            pub fn is_memoized<T: ?Sized + 'static>(tag: Option<&str>) -> bool {
                use $crate::RegistryApi;
                API.is_memoized::<T>(tag)
            }

            /// Drop every factory and cached singleton.
            pub fn reset() {
                use $crate::RegistryApi;
                API.reset()
            }

            /// Set a tracing callback for registry operations.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::RegistryEvent) + Send + Sync + 'static,
            ) {
                use $crate::RegistryApi;
                API.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                use $crate::RegistryApi;
                API.clear_trace_callback()
            }
        }
    };
}
