use std::fmt::{Display, Formatter};

use indexmap::IndexMap;

use crate::vocabulary::{ListingOrder, Vocabulary};

/// A family of units that measure the same thing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    pub name: String,
    /// Human readable description, e.g. "unit of distance".
    pub description: String,
    pub base_unit_name: String,
    pub aliases: Vec<String>,
}

impl Family {
    pub fn new(name: &str, description: &str, base_unit_name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            base_unit_name: base_unit_name.to_string(),
            aliases: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(ToString::to_string).collect();
        self
    }
}

impl Display for Family {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.name)
    }
}

/// The vocabulary of unit families.
///
/// Family aliases are collected from each registered family. The base
/// family is listed first in help text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyCatalog {
    families: IndexMap<String, Family>,
    aliases: IndexMap<String, String>,
    base: String,
}

impl FamilyCatalog {
    pub fn new(base: &str) -> Self {
        Self {
            families: IndexMap::new(),
            aliases: IndexMap::new(),
            base: base.to_string(),
        }
    }

    #[must_use]
    pub fn with_family(mut self, family: Family) -> Self {
        for alias in &family.aliases {
            self.aliases.insert(alias.clone(), family.name.clone());
        }
        self.families.insert(family.name.clone(), family);
        self
    }

    /// The catalog of families with built-in unit details.
    #[must_use]
    pub fn builtin() -> &'static FamilyCatalog {
        crate::units::catalog::families()
    }

    pub fn get(&self, name: &str) -> Option<&Family> {
        self.families.get(name)
    }

    /// Aliases that name a missing family or shadow a family name.
    #[must_use]
    pub fn bad_aliases(&self) -> Vec<&str> {
        self.aliases
            .iter()
            .filter(|(alias, name)| {
                self.families.contains_key(*alias) || !self.families.contains_key(*name)
            })
            .map(|(alias, _)| alias.as_str())
            .collect()
    }
}

impl Vocabulary for FamilyCatalog {
    type Value = Family;
    const KIND: &'static str = "Family";

    fn label(&self) -> String {
        "unit family".to_string()
    }

    fn value_description(&self) -> String {
        "unit-family".to_string()
    }

    fn canonical(&self, name: &str) -> Option<Family> {
        self.families.get(name).cloned()
    }

    fn alias_target(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    fn names(&self) -> Vec<&str> {
        self.families.keys().map(String::as_str).collect()
    }

    fn aliases(&self) -> Vec<(&str, &str)> {
        self.aliases
            .iter()
            .map(|(alias, name)| (alias.as_str(), name.as_str()))
            .collect()
    }

    fn listing_order(&self) -> ListingOrder<'_> {
        ListingOrder::BaseFirst(Some(self.base.as_str()))
    }
}
