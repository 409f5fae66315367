//! Composite key indexing factories and cached singletons.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a registration: the service type plus an optional tag.
///
/// Two keys are equal when they name the same type and the same tag (or both
/// have no tag). The type name is carried only for messages and events.
///
/// # Examples
///
/// ```rust
/// use dependency_registry::ServiceKey;
///
/// trait Messaging {}
///
/// let primary = ServiceKey::of::<dyn Messaging>(None);
/// let alt = ServiceKey::of::<dyn Messaging>(Some("alt"));
///
/// assert_ne!(primary, alt);
/// assert_eq!(alt.tag(), Some("alt"));
/// ```
#[derive(Debug, Clone)]
pub struct ServiceKey {
    type_id: TypeId,
    type_name: &'static str,
    tag: Option<String>,
}

impl ServiceKey {
    /// Builds the key for service type `T` under `tag`.
    pub fn of<T: ?Sized + 'static>(tag: Option<&str>) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            tag: tag.map(str::to_owned),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }
}

impl PartialEq for ServiceKey {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id && self.tag == other.tag
    }
}

impl Eq for ServiceKey {}

impl Hash for ServiceKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
        self.tag.hash(state);
    }
}

impl fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{}[{}]", self.type_name, tag),
            None => write!(f, "{}", self.type_name),
        }
    }
}
