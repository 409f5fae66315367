use thiserror::Error;

/// Errors produced while resolving a service.
///
/// [`DependencyNotResolved`](RegistryError::DependencyNotResolved) signals a
/// wiring mistake. `resolve` turns it into a panic, `try_resolve` into `None`,
/// and `get` hands it back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error(
        "Required dependency: '{type_name}'{} not resolved. Ensure the service is registered. \
         Use try_resolve() instead of resolve() to resolve optional dependencies.",
        describe_tag(.tag)
    )]
    DependencyNotResolved {
        type_name: &'static str,
        tag: Option<String>,
    },

    #[error("Type mismatch in registry for '{type_name}'{}", describe_tag(.tag))]
    TypeMismatch {
        type_name: &'static str,
        tag: Option<String>,
    },
}

fn describe_tag(tag: &Option<String>) -> String {
    match tag {
        Some(tag) => format!(" (tag: '{tag}')"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_resolved_display() {
        let err = RegistryError::DependencyNotResolved {
            type_name: "app::Publisher",
            tag: None,
        };
        assert_eq!(
            err.to_string(),
            "Required dependency: 'app::Publisher' not resolved. Ensure the service is registered. \
             Use try_resolve() instead of resolve() to resolve optional dependencies."
        );
    }

    #[test]
    fn test_not_resolved_display_with_tag() {
        let err = RegistryError::DependencyNotResolved {
            type_name: "app::Messaging",
            tag: Some("alt".to_string()),
        };
        let message = err.to_string();
        assert!(message.starts_with("Required dependency: 'app::Messaging' (tag: 'alt') not resolved."));
        assert!(message.contains("try_resolve()"));
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = RegistryError::TypeMismatch {
            type_name: "u8",
            tag: Some("x".to_string()),
        };
        assert_eq!(err.to_string(), "Type mismatch in registry for 'u8' (tag: 'x')");
    }

    #[test]
    fn test_equality() {
        let a = RegistryError::DependencyNotResolved {
            type_name: "u8",
            tag: None,
        };
        assert_eq!(a.clone(), a);
        assert_ne!(
            a,
            RegistryError::TypeMismatch {
                type_name: "u8",
                tag: None
            }
        );
    }

    #[test]
    fn test_error_trait() {
        let err: &dyn std::error::Error = &RegistryError::TypeMismatch {
            type_name: "u8",
            tag: None,
        };
        assert_eq!(err.to_string(), "Type mismatch in registry for 'u8'");
    }
}
