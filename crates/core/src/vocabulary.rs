//! Closed vocabularies of legal parameter values.
//!
//! A [`Vocabulary`] maps canonical names to values and keeps a table of
//! aliases mapping alternate spellings onto canonical names. Resolution is
//! always exact and case-sensitive; approximate matching is left to
//! [`crate::suggest`] once resolution has failed.

use std::fmt::Display;

/// How a vocabulary's names are listed in help text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingOrder<'v> {
    /// The named base member first, then shortest names first, then
    /// alphabetically.
    BaseFirst(Option<&'v str>),
    /// Plain alphabetical order.
    Alphabetical,
}

/// A closed set of legal names for a parameter.
pub trait Vocabulary {
    /// The domain value a name resolves to.
    type Value: Clone + PartialEq + Display;

    /// Short name of the kind of value, used to name setters in faults.
    const KIND: &'static str;

    /// Label used in error messages, e.g. "unit of distance".
    fn label(&self) -> String;

    /// One-word description of the value for help text.
    fn value_description(&self) -> String;

    /// Looks up a canonical name.
    fn canonical(&self, name: &str) -> Option<Self::Value>;

    /// Returns the canonical name an alias stands for.
    fn alias_target(&self, alias: &str) -> Option<&str>;

    fn names(&self) -> Vec<&str>;

    /// Alias pairs as `(alias, canonical name)`.
    fn aliases(&self) -> Vec<(&str, &str)>;

    fn listing_order(&self) -> ListingOrder<'_>;

    fn is_empty(&self) -> bool {
        self.names().is_empty()
    }

    /// Resolves a token, trying canonical names before aliases.
    fn resolve(&self, token: &str) -> Option<Self::Value> {
        self.canonical(token).or_else(|| {
            self.alias_target(token)
                .and_then(|canonical| self.canonical(canonical))
        })
    }

    /// Every string that resolves: canonical names followed by aliases.
    fn legal_names(&self) -> Vec<&str> {
        let mut names = self.names();
        names.extend(self.aliases().into_iter().map(|(alias, _)| alias));
        names
    }
}

/// Returns the legal names of a vocabulary in its listing order.
///
/// # Examples
///
/// ```
/// use unit_setters_core::units::catalog;
/// use unit_setters_core::vocabulary::allowed_values;
///
/// let names = allowed_values(catalog::distance());
/// assert_eq!(names[0], "metre");
/// ```
pub fn allowed_values<V: Vocabulary + ?Sized>(vocabulary: &V) -> Vec<&str> {
    let mut names = vocabulary.legal_names();

    match vocabulary.listing_order() {
        ListingOrder::BaseFirst(base) => {
            names.sort_by_key(|name| (Some(*name) != base, name.len(), *name));
        }
        ListingOrder::Alphabetical => names.sort_unstable(),
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    struct Colours {
        names: IndexMap<&'static str, u8>,
        aliases: IndexMap<&'static str, &'static str>,
        order: ListingOrder<'static>,
    }

    impl Colours {
        fn new(order: ListingOrder<'static>) -> Self {
            Self {
                names: [("red", 1), ("green", 2), ("blue", 3), ("ultramarine", 4)]
                    .into_iter()
                    .collect(),
                aliases: [("rouge", "red"), ("navy", "blue"), ("ghost", "nowhere")]
                    .into_iter()
                    .collect(),
                order,
            }
        }
    }

    impl Vocabulary for Colours {
        type Value = u8;
        const KIND: &'static str = "Colour";

        fn label(&self) -> String {
            "colour".to_string()
        }

        fn value_description(&self) -> String {
            "colour".to_string()
        }

        fn canonical(&self, name: &str) -> Option<u8> {
            self.names.get(name).copied()
        }

        fn alias_target(&self, alias: &str) -> Option<&str> {
            self.aliases.get(alias).copied()
        }

        fn names(&self) -> Vec<&str> {
            self.names.keys().copied().collect()
        }

        fn aliases(&self) -> Vec<(&str, &str)> {
            self.aliases.iter().map(|(a, c)| (*a, *c)).collect()
        }

        fn listing_order(&self) -> ListingOrder<'_> {
            self.order
        }
    }

    #[test]
    fn test_resolve_canonical_and_alias() {
        let colours = Colours::new(ListingOrder::Alphabetical);
        assert_eq!(colours.resolve("red"), Some(1));
        assert_eq!(colours.resolve("navy"), Some(3));
    }

    #[test]
    fn test_resolve_is_exact() {
        let colours = Colours::new(ListingOrder::Alphabetical);
        assert_eq!(colours.resolve("Red"), None);
        assert_eq!(colours.resolve("re"), None);
        assert_eq!(colours.resolve(""), None);
    }

    #[test]
    fn test_dangling_alias_does_not_resolve() {
        let colours = Colours::new(ListingOrder::Alphabetical);
        assert_eq!(colours.resolve("ghost"), None);
    }

    #[test]
    fn test_legal_names_include_aliases() {
        let colours = Colours::new(ListingOrder::Alphabetical);
        assert_eq!(
            colours.legal_names(),
            vec!["red", "green", "blue", "ultramarine", "rouge", "navy", "ghost"]
        );
    }

    #[test]
    fn test_allowed_values_base_first() {
        let colours = Colours::new(ListingOrder::BaseFirst(Some("green")));
        assert_eq!(
            allowed_values(&colours),
            vec!["green", "red", "blue", "navy", "ghost", "rouge", "ultramarine"]
        );
    }

    #[test]
    fn test_allowed_values_without_base() {
        let colours = Colours::new(ListingOrder::BaseFirst(None));
        assert_eq!(
            allowed_values(&colours),
            vec!["red", "blue", "navy", "ghost", "green", "rouge", "ultramarine"]
        );
    }

    #[test]
    fn test_allowed_values_alphabetical() {
        let colours = Colours::new(ListingOrder::Alphabetical);
        assert_eq!(
            allowed_values(&colours),
            vec!["blue", "ghost", "green", "navy", "red", "rouge", "ultramarine"]
        );
    }

    #[test]
    fn test_allowed_values_is_repeatable() {
        let colours = Colours::new(ListingOrder::BaseFirst(Some("blue")));
        assert_eq!(allowed_values(&colours), allowed_values(&colours));
    }
}
