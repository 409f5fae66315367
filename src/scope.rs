use std::fmt;

/// Resolution policy chosen by the caller at resolution time.
///
/// The same registered factory serves both scopes, so one registration can back
/// an app-wide shared service and a fresh per-request object at once.
///
/// # Examples
///
/// ```rust
/// use dependency_registry::Scope;
///
/// assert_eq!(Scope::default(), Scope::Global);
/// assert_eq!(Scope::Unique.to_string(), "unique");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    /// Memoized: the first resolution runs the factory, later ones share the instance.
    #[default]
    Global,
    /// Fresh instance on every resolution; the singleton cache is never touched.
    Unique,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Global => write!(f, "global"),
            Scope::Unique => write!(f, "unique"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_global() {
        assert_eq!(Scope::default(), Scope::Global);
    }

    #[test]
    fn test_display() {
        assert_eq!(Scope::Global.to_string(), "global");
        assert_eq!(Scope::Unique.to_string(), "unique");
    }
}
