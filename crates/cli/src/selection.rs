//! Turns the collected command-line values into a unit selection.
//!
//! The unit vocabulary depends on the chosen family, so parameters are
//! applied in two passes: family and tags first, then the unit.

use log::{debug, info};
use unit_setters_core::check::unit_has_tag;
use unit_setters_core::config::SuggestionConfig;
use unit_setters_core::error::{Error, Result};
use unit_setters_core::setter::{FamilySetter, TagListAppender, TagSetter, UnitSetter};
use unit_setters_core::units::{catalog, Family, Tag, Unit};

use crate::cli_args::Args;
use crate::parameters::{parse_named, Parameters, FAMILY, REQUIRE_TAG, TAG, UNIT};

/// The values chosen on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub family: Family,
    pub unit: Option<Unit>,
    pub required_tag: Option<Tag>,
    pub tags: Vec<Tag>,
    /// Help text for each parameter, filled in when `--describe` is given.
    pub descriptions: Vec<String>,
}

/// Applies every flag and `name=value` parameter in `args`.
///
/// # Errors
///
/// Returns the first error raised by a setter, or an error for a malformed
/// or unknown named parameter. Nothing is applied past the first error.
pub fn select(args: &Args) -> Result<Selection> {
    let suggestions = SuggestionConfig::default().with_max_suggestions(args.max_suggestions);

    let mut requests = args.flag_values();
    requests.extend(parse_named(&args.parameters, &suggestions)?);
    let (unit_requests, requests): (Vec<_>, Vec<_>) =
        requests.into_iter().partition(|(name, _)| *name == UNIT);

    let mut family = catalog::families().get(catalog::DISTANCE).cloned();
    let mut required_tag = None;
    let mut tags = Vec::new();
    let mut descriptions = Vec::new();

    {
        let mut parameters = Parameters::new(suggestions.clone());
        parameters.register(
            FAMILY,
            FamilySetter::builtin(&mut family).with_suggestions(suggestions.clone()),
        )?;
        parameters.register(
            REQUIRE_TAG,
            TagSetter::builtin(&mut required_tag)
                .with_value_description("tag")
                .with_suggestions(suggestions.clone()),
        )?;
        parameters.register(
            TAG,
            TagListAppender::builtin(&mut tags)
                .with_value_description("tag")
                .with_suggestions(suggestions.clone()),
        )?;

        for (name, value) in &requests {
            parameters.set(name, value)?;
        }

        if args.describe {
            descriptions.extend(parameters.describe());
        }
    }

    let family = family.ok_or_else(|| Error::NoUnitDetails(catalog::DISTANCE.to_string()))?;
    let details = catalog::details_for(&family.name)
        .ok_or_else(|| Error::NoUnitDetails(family.name.clone()))?;
    debug!("Choosing units from the `{}` family", family.name);

    let mut unit = None;
    {
        let mut setter = UnitSetter::new(&mut unit, details).with_suggestions(suggestions.clone());
        if let Some(tag) = required_tag {
            setter = setter.with_check(unit_has_tag(tag));
        }

        let mut parameters = Parameters::new(suggestions);
        parameters.register(UNIT, setter)?;

        for (name, value) in &unit_requests {
            parameters.set(name, value)?;
        }

        if args.describe {
            descriptions.extend(parameters.describe());
        }
    }

    if let Some(unit) = &unit {
        info!("Selected {} ({})", unit.name, unit.abbrev);
    }

    Ok(Selection {
        family,
        unit,
        required_tag,
        tags,
        descriptions,
    })
}
