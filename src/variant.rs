//! Selection between the standalone and the derived class layout.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::ident::Identifiers;

/// Structural shape of one generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Variant {
    /// Standalone class deriving from the library's root base type. The class
    /// owns its private state through a scoped pointer.
    Root,
    /// Class extending `base`. Storage of the private state is inherited, and
    /// the private type derives from `<base>Private`.
    Derived { base: Identifiers },
}

/// Tag written into the render context. Templates branch on nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantTag {
    Root,
    Derived,
}

impl Variant {
    /// Picks `Root` without a base class and `Derived` otherwise.
    ///
    /// # Errors
    /// * `Error::ValidationError` if the base class is not a valid identifier
    ///   or folds to the same file names as the class itself
    pub fn select(class: &Identifiers, base_class: Option<&str>) -> Result<Self> {
        let Some(base_class) = base_class else {
            return Ok(Variant::Root);
        };
        let base = Identifiers::parse(base_class)?;
        if base.lower == class.lower {
            return Err(Error::ValidationError(format!(
                "class '{}' cannot derive from '{}': both map to '{}.h' and '{}private.h'",
                class.pascal, base.pascal, class.lower, class.lower
            )));
        }
        Ok(Variant::Derived { base })
    }

    pub fn tag(&self) -> VariantTag {
        match self {
            Variant::Root => VariantTag::Root,
            Variant::Derived { .. } => VariantTag::Derived,
        }
    }

    pub fn base(&self) -> Option<&Identifiers> {
        match self {
            Variant::Root => None,
            Variant::Derived { base } => Some(base),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Root => write!(f, "root class"),
            Variant::Derived { base } => write!(f, "derived from '{}'", base.pascal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_without_base_is_root() {
        let class = Identifiers::derive("JobQueue");
        let variant = Variant::select(&class, None).unwrap();
        assert_eq!(variant, Variant::Root);
        assert_eq!(variant.tag(), VariantTag::Root);
        assert!(variant.base().is_none());
    }

    #[test]
    fn test_select_with_base_is_derived() {
        let class = Identifiers::derive("WebDAVJob");
        let variant = Variant::select(&class, Some("AbstractJob")).unwrap();
        assert_eq!(variant.tag(), VariantTag::Derived);
        assert_eq!(variant.base().unwrap().lower, "abstractjob");
    }

    #[test]
    fn test_select_rejects_self_base() {
        let class = Identifiers::derive("Foo");
        assert!(matches!(
            Variant::select(&class, Some("Foo")),
            Err(Error::ValidationError(_))
        ));
    }

    #[test]
    fn test_select_rejects_base_differing_only_in_case() {
        let class = Identifiers::derive("Foo");
        for base in ["FOO", "foo", "fOo"] {
            match Variant::select(&class, Some(base)) {
                Err(Error::ValidationError(msg)) => assert!(msg.contains("fooprivate.h")),
                other => panic!("Expected ValidationError for '{base}', got {other:?}"),
            }
        }
    }

    #[test]
    fn test_select_rejects_invalid_base() {
        let class = Identifiers::derive("Foo");
        assert!(Variant::select(&class, Some("")).is_err());
        assert!(Variant::select(&class, Some("Base::Job")).is_err());
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(Variant::Root.to_string(), "root class");
        let derived = Variant::Derived { base: Identifiers::derive("AbstractJob") };
        assert_eq!(derived.to_string(), "derived from 'AbstractJob'");
    }
}
