//! The unit domain model: units grouped into families, plus the tags used
//! to classify units.
//!
//! Each of [`UnitDetails`], [`FamilyCatalog`] and [`TagCatalog`] is a
//! [`Vocabulary`](crate::vocabulary::Vocabulary) that the setters resolve
//! command-line tokens against.

pub mod catalog;
pub mod family;
pub mod tag;
pub mod unit;

pub use family::{Family, FamilyCatalog};
pub use tag::{Tag, TagCatalog};
pub use unit::{Alias, Conversion, Unit, UnitDetails};
