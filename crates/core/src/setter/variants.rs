//! The named setters and their constructors over the built-in catalogs.

use crate::setter::placement::{Append, Overwrite};
use crate::setter::VocabularySetter;
use crate::units::{Family, FamilyCatalog, Tag, TagCatalog, UnitDetails};

/// Sets a [`Unit`](crate::units::Unit) chosen from one family's units.
pub type UnitSetter<'a> = VocabularySetter<'a, UnitDetails, Overwrite>;

/// Sets a [`Family`].
pub type FamilySetter<'a> = VocabularySetter<'a, FamilyCatalog, Overwrite>;

/// Sets a single [`Tag`].
pub type TagSetter<'a> = VocabularySetter<'a, TagCatalog, Overwrite>;

/// Appends [`Tag`]s to a list. A tag already in the list is rejected.
pub type TagListAppender<'a> = VocabularySetter<'a, TagCatalog, Append>;

impl<'a> FamilySetter<'a> {
    /// A family setter over the built-in families.
    pub fn builtin(target: &'a mut Option<Family>) -> Self {
        Self::new(target, FamilyCatalog::builtin())
    }
}

impl<'a> TagSetter<'a> {
    pub fn builtin(target: &'a mut Option<Tag>) -> Self {
        Self::new(target, TagCatalog::builtin())
    }
}

impl<'a> TagListAppender<'a> {
    pub fn builtin(target: &'a mut Vec<Tag>) -> Self {
        Self::new(target, TagCatalog::builtin())
    }
}
