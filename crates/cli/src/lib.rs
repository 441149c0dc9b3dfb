//! Unit Setters CLI Library
//!
//! This crate provides `unitset`, a small command-line host for the unit
//! setters in `unit-setters-core`. It registers a setter per parameter,
//! checks each one as it is registered, and feeds the setters the values
//! given on the command line.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`parameters`]: The parameter registry and `name=value` parsing
//! - [`selection`]: Applies the parameters in order and collects the result
//!
//! # Examples
//!
//! ```bash
//! # Pick a unit of distance
//! unitset --unit mile
//!
//! # Pick from another family, insisting on a metric unit
//! unitset --family weight --require-tag metric --unit kg
//!
//! # The same using named parameters
//! unitset -p family=weight -p require-tag=metric -p unit=kg
//!
//! # Show every parameter with its allowed values
//! unitset --family time --describe
//! ```

pub mod cli_args;
pub mod parameters;
pub mod selection;
