//! Ready-made checks to attach to setters with `with_check`.

use std::fmt::Display;

use crate::error::CheckError;
use crate::units::{Tag, Unit};

/// Accepts only units carrying `tag`.
///
/// # Examples
///
/// ```
/// use unit_setters_core::check::unit_has_tag;
/// use unit_setters_core::units::{catalog, Tag};
///
/// let check = unit_has_tag(Tag::Metric);
/// assert!(check(&catalog::distance().units["kilometre"]).is_ok());
/// assert!(check(&catalog::distance().units["mile"]).is_err());
/// ```
pub fn unit_has_tag(tag: Tag) -> impl Fn(&Unit) -> Result<(), CheckError> {
    move |unit| {
        if unit.has_tag(tag) {
            Ok(())
        } else {
            Err(format!("{} is not a {tag} unit", unit.name).into())
        }
    }
}

/// Rejects values whose display name is one of `names`.
pub fn none_of<T: Display>(names: &[&str]) -> impl Fn(&T) -> Result<(), CheckError> {
    let names: Vec<String> = names.iter().map(ToString::to_string).collect();
    move |value| {
        let name = value.to_string();
        if names.contains(&name) {
            Err(format!("{name} is not allowed here").into())
        } else {
            Ok(())
        }
    }
}
