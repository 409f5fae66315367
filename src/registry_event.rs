use crate::Scope;

/// Events emitted by the registry during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`.
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use dependency_registry::RegistryEvent;
///
/// let event = RegistryEvent::Register { type_name: "i32", tag: None };
/// assert_eq!(event.to_string(), "register { type_name: i32 }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    /// A factory was installed (possibly replacing an earlier one).
    Register {
        /// The service type name (e.g., "i32", "dyn app::Messaging")
        type_name: &'static str,
        tag: Option<String>,
    },

    /// A service was requested.
    Resolve {
        type_name: &'static str,
        tag: Option<String>,
        scope: Scope,
        /// Whether a factory or cached instance satisfied the request
        found: bool,
    },

    /// A factory existence check was performed.
    Contains {
        type_name: &'static str,
        tag: Option<String>,
        found: bool,
    },

    /// All factories and singletons were dropped.
    Reset {},
}

struct TagSuffix<'a>(&'a Option<String>);

impl std::fmt::Display for TagSuffix<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(tag) => write!(f, ", tag: {}", tag),
            None => Ok(()),
        }
    }
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEvent::Register { type_name, tag } => {
                write!(f, "register {{ type_name: {}{} }}", type_name, TagSuffix(tag))
            }
            RegistryEvent::Resolve {
                type_name,
                tag,
                scope,
                found,
            } => write!(
                f,
                "resolve {{ type_name: {}{}, scope: {}, found: {} }}",
                type_name,
                TagSuffix(tag),
                scope,
                found
            ),
            RegistryEvent::Contains {
                type_name,
                tag,
                found,
            } => write!(
                f,
                "contains {{ type_name: {}{}, found: {} }}",
                type_name,
                TagSuffix(tag),
                found
            ),
            RegistryEvent::Reset {} => write!(f, "Resetting the Registry"),
        }
    }
}
