//! Unit Setters Core Library
//!
//! This crate provides typed command-line parameter setters for units of
//! measure. A setter takes the raw string a user typed, resolves it against a
//! closed vocabulary of legal names and aliases, and stores the matching
//! value in a slot owned by the caller. When the string does not match, the
//! error carries a "did you mean" suggestion built from the closest names.
//!
//! # Key Features
//!
//! - **Exact Resolution**: Canonical names first, then aliases, case-sensitive
//! - **Suggestions**: Case-blind n-gram cosine similarity, best three offered
//! - **Checks**: Caller-supplied checks run on a value before it is stored
//! - **No Partial Writes**: A failing call leaves the target untouched
//! - **Fail-Fast Wiring**: `check_setter` reports setters built without a
//!   target or vocabulary as a [`ConfigurationFault`](error::ConfigurationFault)
//!
//! # Examples
//!
//! Setting a unit of distance from a command-line token:
//!
//! ```
//! use unit_setters_core::setter::{ParamSetter, UnitSetter};
//! use unit_setters_core::units::catalog;
//!
//! let mut unit = None;
//! {
//!     let mut setter = UnitSetter::new(&mut unit, catalog::distance());
//!     setter.check_setter("unit")?;
//!
//!     let err = setter.set_with_value("unit", "killometre").unwrap_err();
//!     assert!(err.to_string().ends_with("Did you mean: kilometre or kilometres or kilometer?"));
//!
//!     setter.set_with_value("unit", "km")?;
//! }
//! assert_eq!(unit.unwrap().name, "kilometre");
//! # Ok::<(), unit_setters_core::error::Error>(())
//! ```

pub mod check;
pub mod config;
pub mod error;
pub mod setter;
pub mod suggest;
pub mod units;
pub mod vocabulary;
