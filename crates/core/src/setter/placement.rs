//! What a setter does with a value once it has been accepted.

use std::fmt::Display;

use itertools::Itertools;

use crate::error::{Error, Result};

/// Strategy for storing an accepted value in the target slot.
pub trait Placement<T> {
    /// The caller-owned storage the setter writes to.
    type Target;

    /// Appended to the vocabulary kind to name the setter, e.g. "Setter".
    const SUFFIX: &'static str;

    /// Rejects values that may not be stored, before any checks run.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be placed in the target.
    fn admit(target: &Self::Target, value: &T) -> Result<()>;

    fn place(target: &mut Self::Target, value: T);

    fn render(target: &Self::Target) -> String;
}

/// Replaces the target's value. An empty slot renders as "".
#[derive(Debug, Clone, Copy, Default)]
pub struct Overwrite;

impl<T: Display> Placement<T> for Overwrite {
    type Target = Option<T>;
    const SUFFIX: &'static str = "Setter";

    fn admit(_target: &Option<T>, _value: &T) -> Result<()> {
        Ok(())
    }

    fn place(target: &mut Option<T>, value: T) {
        *target = Some(value);
    }

    fn render(target: &Option<T>) -> String {
        target.as_ref().map(ToString::to_string).unwrap_or_default()
    }
}

/// Appends to a list, refusing values the list already holds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Append;

impl<T: Display + PartialEq> Placement<T> for Append {
    type Target = Vec<T>;
    const SUFFIX: &'static str = "ListAppender";

    fn admit(target: &Vec<T>, value: &T) -> Result<()> {
        if target.contains(value) {
            return Err(Error::duplicate(value.to_string()));
        }
        Ok(())
    }

    fn place(target: &mut Vec<T>, value: T) {
        target.push(value);
    }

    fn render(target: &Vec<T>) -> String {
        target.iter().join(", ")
    }
}
