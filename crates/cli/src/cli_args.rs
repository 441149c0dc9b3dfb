//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate. Values are collected here as raw strings; turning them into
//! units, families and tags is the job of the registered setters.

use clap::Parser;
use unit_setters_core::config::DEFAULT_MAX_SUGGESTIONS;

use crate::parameters::{FAMILY, REQUIRE_TAG, TAG, UNIT};

/// Command-line arguments for the `unitset` tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use unit_setters_cli::cli_args::Args;
///
/// let args = Args::parse_from(["unitset", "--unit", "mile"]);
/// assert_eq!(args.unit.as_deref(), Some("mile"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// The unit family to choose units from.
    ///
    /// Family aliases such as `length` are accepted. Defaults to `distance`.
    #[arg(long, short = 'f')]
    pub family: Option<String>,

    /// The unit to select from the family.
    #[arg(long, short = 'u')]
    pub unit: Option<String>,

    /// Only accept a unit carrying this tag.
    #[arg(long, short = 'r')]
    pub require_tag: Option<String>,

    /// Tags to collect. May be repeated; each tag may only be given once.
    #[arg(long = "tag", short = 't', action = clap::ArgAction::Append)]
    pub tags: Vec<String>,

    /// Parameters in the format name=value.
    ///
    /// Multiple parameters can be provided with repeated `-p` flags. They are
    /// applied after the dedicated flags above.
    ///
    /// # Examples
    /// ```bash
    /// unitset -p family=time -p unit=hours
    /// ```
    #[arg(long = "param", short = 'p', action = clap::ArgAction::Append)]
    pub parameters: Vec<String>,

    /// How many "did you mean" suggestions to offer for an unknown value.
    #[arg(long, default_value_t = DEFAULT_MAX_SUGGESTIONS)]
    pub max_suggestions: usize,

    /// Print each parameter's allowed values and current setting.
    #[arg(long, short = 'd', action)]
    pub describe: bool,
}

impl Args {
    /// The dedicated flags as `(parameter name, value)` pairs, in the order
    /// they are applied.
    #[must_use]
    pub fn flag_values(&self) -> Vec<(&'static str, String)> {
        let mut values = Vec::new();

        if let Some(family) = &self.family {
            values.push((FAMILY, family.clone()));
        }
        if let Some(required) = &self.require_tag {
            values.push((REQUIRE_TAG, required.clone()));
        }
        for tag in &self.tags {
            values.push((TAG, tag.clone()));
        }
        if let Some(unit) = &self.unit {
            values.push((UNIT, unit.clone()));
        }

        values
    }
}
