use std::fmt::{Display, Formatter};

use indexmap::IndexMap;

use crate::units::family::Family;
use crate::units::tag::Tag;
use crate::vocabulary::{ListingOrder, Vocabulary};

/// How a unit relates to its family's base unit.
///
/// Values are converted to the base unit by adding `pre_add`, multiplying
/// by `factor` and then adding `post_add`. The setters only carry these
/// numbers around; they never convert anything.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub pre_add: f64,
    pub factor: f64,
    pub post_add: f64,
}

impl Conversion {
    #[must_use]
    pub fn factor(factor: f64) -> Self {
        Self {
            pre_add: 0.0,
            factor,
            post_add: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub name: String,
    pub name_plural: String,
    pub abbrev: String,
    pub family: String,
    pub conversion: Conversion,
    pub notes: String,
    pub tags: Vec<Tag>,
}

impl Unit {
    pub fn new(family: &str, name: &str, name_plural: &str, abbrev: &str, factor: f64) -> Self {
        Self {
            name: name.to_string(),
            name_plural: name_plural.to_string(),
            abbrev: abbrev.to_string(),
            family: family.to_string(),
            conversion: Conversion::factor(factor),
            notes: String::new(),
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_tags(mut self, tags: &[Tag]) -> Self {
        self.tags = tags.to_vec();
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = notes.to_string();
        self
    }

    #[must_use]
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }
}

impl Display for Unit {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.name)
    }
}

/// An alternative name for a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub unit_name: String,
    pub notes: String,
}

/// The units belonging to one family, keyed by name, and their aliases.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitDetails {
    pub family: Family,
    pub units: IndexMap<String, Unit>,
    pub aliases: IndexMap<String, Alias>,
}

impl UnitDetails {
    pub fn new(family: Family) -> Self {
        Self {
            family,
            units: IndexMap::new(),
            aliases: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.units.insert(unit.name.clone(), unit);
        self
    }

    #[must_use]
    pub fn with_alias(mut self, alias: &str, unit_name: &str, notes: &str) -> Self {
        self.aliases.insert(
            alias.to_string(),
            Alias {
                unit_name: unit_name.to_string(),
                notes: notes.to_string(),
            },
        );
        self
    }

    /// Aliases that name a missing unit or shadow a unit name.
    #[must_use]
    pub fn bad_aliases(&self) -> Vec<&str> {
        self.aliases
            .iter()
            .filter(|(alias, target)| {
                self.units.contains_key(*alias) || !self.units.contains_key(&target.unit_name)
            })
            .map(|(alias, _)| alias.as_str())
            .collect()
    }
}

impl Vocabulary for UnitDetails {
    type Value = Unit;
    const KIND: &'static str = "Unit";

    fn label(&self) -> String {
        self.family.description.clone()
    }

    fn value_description(&self) -> String {
        self.family.description.replace(' ', "-")
    }

    fn canonical(&self, name: &str) -> Option<Unit> {
        self.units.get(name).cloned()
    }

    fn alias_target(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(|a| a.unit_name.as_str())
    }

    fn names(&self) -> Vec<&str> {
        self.units.keys().map(String::as_str).collect()
    }

    fn aliases(&self) -> Vec<(&str, &str)> {
        self.aliases
            .iter()
            .map(|(alias, target)| (alias.as_str(), target.unit_name.as_str()))
            .collect()
    }

    fn listing_order(&self) -> ListingOrder<'_> {
        ListingOrder::BaseFirst(Some(self.family.base_unit_name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_details() -> UnitDetails {
        let family = Family::new("test", "unit of test", "test");
        UnitDetails::new(family)
            .with_unit(Unit::new("test", "test", "tests", "t", 1.0))
            .with_unit(Unit::new("test", "other-unit", "other-units", "o-u-t", 2.0))
            .with_unit(Unit::new("test", "otherunit", "otherunits", "ou-t", 3.0))
            .with_alias("other-units", "other-unit", "plural")
    }

    #[test]
    fn test_resolve_through_alias() {
        let details = test_details();
        let unit = details.resolve("other-units").unwrap();
        assert_eq!(unit.name, "other-unit");
        assert!((unit.conversion.factor - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_label_and_description() {
        let details = test_details();
        assert_eq!(details.label(), "unit of test");
        assert_eq!(details.value_description(), "unit-of-test");
    }

    #[test]
    fn test_bad_aliases() {
        let details = test_details()
            .with_alias("nowhere", "missing", "")
            .with_alias("test", "otherunit", "");
        assert_eq!(details.bad_aliases(), vec!["nowhere", "test"]);
        assert!(test_details().bad_aliases().is_empty());
    }

    #[test]
    fn test_unit_tags() {
        let unit = Unit::new("distance", "mile", "miles", "mi", 1609.344)
            .with_tags(&[Tag::Imperial])
            .with_notes("statute mile");
        assert!(unit.has_tag(Tag::Imperial));
        assert!(!unit.has_tag(Tag::Metric));
        assert_eq!(unit.to_string(), "mile");
        assert_eq!(unit.notes, "statute mile");
    }
}
