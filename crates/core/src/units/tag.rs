use std::fmt::{Display, Formatter};

use crate::vocabulary::{ListingOrder, Vocabulary};

/// A classification attached to units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    Historic,
    Metric,
    Imperial,
    UsCustomary,
    Si,
    Colloquial,
    Obsolete,
    Approximate,
    Nautical,
    Astronomical,
}

impl Tag {
    pub const ALL: [Tag; 10] = [
        Tag::Historic,
        Tag::Metric,
        Tag::Imperial,
        Tag::UsCustomary,
        Tag::Si,
        Tag::Colloquial,
        Tag::Obsolete,
        Tag::Approximate,
        Tag::Nautical,
        Tag::Astronomical,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Historic => "historic",
            Tag::Metric => "metric",
            Tag::Imperial => "imperial",
            Tag::UsCustomary => "us-customary",
            Tag::Si => "si",
            Tag::Colloquial => "colloquial",
            Tag::Obsolete => "obsolete",
            Tag::Approximate => "approximate",
            Tag::Nautical => "nautical",
            Tag::Astronomical => "astronomical",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Tag> {
        Tag::ALL.into_iter().find(|tag| tag.as_str() == name)
    }
}

impl Display for Tag {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// The vocabulary of unit tags. Tags have no aliases.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagCatalog;

static TAGS: TagCatalog = TagCatalog;

impl TagCatalog {
    #[must_use]
    pub fn builtin() -> &'static TagCatalog {
        &TAGS
    }
}

impl Vocabulary for TagCatalog {
    type Value = Tag;
    const KIND: &'static str = "Tag";

    fn label(&self) -> String {
        "unit tag".to_string()
    }

    fn value_description(&self) -> String {
        "unit-tag".to_string()
    }

    fn canonical(&self, name: &str) -> Option<Tag> {
        Tag::from_name(name)
    }

    fn alias_target(&self, _alias: &str) -> Option<&str> {
        None
    }

    fn names(&self) -> Vec<&str> {
        Tag::ALL.iter().map(|tag| tag.as_str()).collect()
    }

    fn aliases(&self) -> Vec<(&str, &str)> {
        Vec::new()
    }

    fn listing_order(&self) -> ListingOrder<'_> {
        ListingOrder::Alphabetical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names_round_trip() {
        for tag in Tag::ALL {
            assert_eq!(Tag::from_name(tag.as_str()), Some(tag));
        }
    }

    #[test]
    fn test_tag_names_are_case_sensitive() {
        assert_eq!(Tag::from_name("Historic"), None);
        assert_eq!(Tag::from_name("historic"), Some(Tag::Historic));
    }

    #[test]
    fn test_tag_catalog_resolves() {
        let tags = TagCatalog::builtin();
        assert_eq!(tags.resolve("us-customary"), Some(Tag::UsCustomary));
        assert_eq!(tags.resolve("nonesuch"), None);
        assert_eq!(tags.legal_names().len(), Tag::ALL.len());
        assert_eq!(tags.listing_order(), ListingOrder::Alphabetical);
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(Tag::Si.to_string(), "si");
        assert_eq!(format!("{}", Tag::Nautical), "nautical");
    }
}
