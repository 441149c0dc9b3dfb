//! Built-in unit families and their units.

use std::sync::OnceLock;

use crate::units::family::{Family, FamilyCatalog};
use crate::units::tag::Tag;
use crate::units::unit::{Unit, UnitDetails};

pub const DISTANCE: &str = "distance";
pub const TIME: &str = "time";
pub const MASS: &str = "mass";

static DISTANCE_DETAILS: OnceLock<UnitDetails> = OnceLock::new();
static TIME_DETAILS: OnceLock<UnitDetails> = OnceLock::new();
static MASS_DETAILS: OnceLock<UnitDetails> = OnceLock::new();
static FAMILIES: OnceLock<FamilyCatalog> = OnceLock::new();

pub fn distance() -> &'static UnitDetails {
    DISTANCE_DETAILS.get_or_init(build_distance)
}

pub fn time() -> &'static UnitDetails {
    TIME_DETAILS.get_or_init(build_time)
}

pub fn mass() -> &'static UnitDetails {
    MASS_DETAILS.get_or_init(build_mass)
}

/// Returns the unit details for a canonical family name.
#[must_use]
pub fn details_for(family_name: &str) -> Option<&'static UnitDetails> {
    match family_name {
        DISTANCE => Some(distance()),
        TIME => Some(time()),
        MASS => Some(mass()),
        _ => None,
    }
}

pub fn families() -> &'static FamilyCatalog {
    FAMILIES.get_or_init(|| {
        FamilyCatalog::new(DISTANCE)
            .with_family(distance().family.clone())
            .with_family(time().family.clone())
            .with_family(mass().family.clone())
    })
}

fn build_distance() -> UnitDetails {
    let family = Family::new(DISTANCE, "unit of distance", "metre").with_aliases(&["length"]);
    let unit = |name: &str, plural: &str, abbrev: &str, factor: f64| {
        Unit::new(DISTANCE, name, plural, abbrev, factor)
    };

    UnitDetails::new(family)
        .with_unit(unit("metre", "metres", "m", 1.0).with_tags(&[Tag::Metric, Tag::Si]))
        .with_unit(unit("kilometre", "kilometres", "km", 1e3).with_tags(&[Tag::Metric]))
        .with_unit(unit("centimetre", "centimetres", "cm", 1e-2).with_tags(&[Tag::Metric]))
        .with_unit(unit("millimetre", "millimetres", "mm", 1e-3).with_tags(&[Tag::Metric]))
        .with_unit(unit("micron", "microns", "µm", 1e-6).with_tags(&[Tag::Metric, Tag::Obsolete]))
        .with_unit(
            unit("angstrom", "angstroms", "Å", 1e-10).with_tags(&[Tag::Metric, Tag::Obsolete]),
        )
        .with_unit(
            unit("mile", "miles", "mi", 1_609.344).with_tags(&[Tag::Imperial, Tag::UsCustomary]),
        )
        .with_unit(
            unit("yard", "yards", "yd", 0.914_4).with_tags(&[Tag::Imperial, Tag::UsCustomary]),
        )
        .with_unit(
            unit("foot", "feet", "ft", 0.304_8).with_tags(&[Tag::Imperial, Tag::UsCustomary]),
        )
        .with_unit(
            unit("inch", "inches", "in", 0.025_4).with_tags(&[Tag::Imperial, Tag::UsCustomary]),
        )
        .with_unit(unit("thou", "thou", "th", 2.54e-5).with_tags(&[Tag::Imperial]))
        .with_unit(
            unit("furlong", "furlongs", "fur", 201.168).with_tags(&[Tag::Imperial, Tag::Historic]),
        )
        .with_unit(
            unit("chain", "chains", "ch", 20.116_8).with_tags(&[Tag::Imperial, Tag::Historic]),
        )
        .with_unit(
            unit("league", "leagues", "lea", 4_828.032)
                .with_tags(&[Tag::Historic, Tag::Approximate])
                .with_notes("taken as three statute miles"),
        )
        .with_unit(unit("fathom", "fathoms", "ftm", 1.828_8).with_tags(&[Tag::Nautical]))
        .with_unit(
            unit("nautical-mile", "nautical-miles", "nmi", 1_852.0).with_tags(&[Tag::Nautical]),
        )
        .with_unit(
            unit("light-year", "light-years", "ly", 9.460_730_472_580_8e15)
                .with_tags(&[Tag::Astronomical]),
        )
        .with_unit(
            unit("astronomical-unit", "astronomical-units", "au", 149_597_870_700.0)
                .with_tags(&[Tag::Astronomical]),
        )
        .with_alias("metres", "metre", "plural")
        .with_alias("meter", "metre", "US spelling")
        .with_alias("meters", "metre", "US spelling, plural")
        .with_alias("m", "metre", "abbreviation")
        .with_alias("kilometres", "kilometre", "plural")
        .with_alias("kilometer", "kilometre", "US spelling")
        .with_alias("kilometers", "kilometre", "US spelling, plural")
        .with_alias("km", "kilometre", "abbreviation")
        .with_alias("centimetres", "centimetre", "plural")
        .with_alias("cm", "centimetre", "abbreviation")
        .with_alias("millimetres", "millimetre", "plural")
        .with_alias("mm", "millimetre", "abbreviation")
        .with_alias("miles", "mile", "plural")
        .with_alias("yards", "yard", "plural")
        .with_alias("feet", "foot", "plural")
        .with_alias("ft", "foot", "abbreviation")
        .with_alias("inches", "inch", "plural")
        .with_alias("in", "inch", "abbreviation")
        .with_alias("nautical-miles", "nautical-mile", "plural")
        .with_alias("light-years", "light-year", "plural")
        .with_alias("au", "astronomical-unit", "abbreviation")
}

fn build_time() -> UnitDetails {
    let family = Family::new(TIME, "unit of time", "second").with_aliases(&["duration"]);
    let unit = |name: &str, plural: &str, abbrev: &str, factor: f64| {
        Unit::new(TIME, name, plural, abbrev, factor)
    };

    UnitDetails::new(family)
        .with_unit(unit("second", "seconds", "s", 1.0).with_tags(&[Tag::Metric, Tag::Si]))
        .with_unit(unit("millisecond", "milliseconds", "ms", 1e-3).with_tags(&[Tag::Metric]))
        .with_unit(unit("minute", "minutes", "min", 60.0))
        .with_unit(unit("hour", "hours", "h", 3_600.0))
        .with_unit(unit("day", "days", "d", 86_400.0))
        .with_unit(unit("week", "weeks", "wk", 604_800.0))
        .with_unit(unit("fortnight", "fortnights", "fn", 1_209_600.0).with_tags(&[Tag::Colloquial]))
        .with_unit(
            unit("year", "years", "yr", 31_557_600.0)
                .with_tags(&[Tag::Approximate])
                .with_notes("a Julian year of 365.25 days"),
        )
        .with_alias("seconds", "second", "plural")
        .with_alias("sec", "second", "abbreviation")
        .with_alias("s", "second", "abbreviation")
        .with_alias("milliseconds", "millisecond", "plural")
        .with_alias("ms", "millisecond", "abbreviation")
        .with_alias("minutes", "minute", "plural")
        .with_alias("min", "minute", "abbreviation")
        .with_alias("hours", "hour", "plural")
        .with_alias("hr", "hour", "abbreviation")
        .with_alias("days", "day", "plural")
        .with_alias("weeks", "week", "plural")
        .with_alias("fortnights", "fortnight", "plural")
        .with_alias("years", "year", "plural")
}

fn build_mass() -> UnitDetails {
    let family = Family::new(MASS, "unit of mass", "gram").with_aliases(&["weight"]);
    let unit = |name: &str, plural: &str, abbrev: &str, factor: f64| {
        Unit::new(MASS, name, plural, abbrev, factor)
    };

    UnitDetails::new(family)
        .with_unit(unit("gram", "grams", "g", 1.0).with_tags(&[Tag::Metric]))
        .with_unit(unit("kilogram", "kilograms", "kg", 1e3).with_tags(&[Tag::Metric, Tag::Si]))
        .with_unit(unit("tonne", "tonnes", "t", 1e6).with_tags(&[Tag::Metric]))
        .with_unit(
            unit("pound", "pounds", "lb", 453.592_37).with_tags(&[Tag::Imperial, Tag::UsCustomary]),
        )
        .with_unit(
            unit("ounce", "ounces", "oz", 28.349_523_125)
                .with_tags(&[Tag::Imperial, Tag::UsCustomary]),
        )
        .with_unit(
            unit("stone", "stone", "st", 6_350.293_18).with_tags(&[Tag::Imperial, Tag::Colloquial]),
        )
        .with_unit(unit("grain", "grains", "gr", 0.064_798_91).with_tags(&[Tag::Historic]))
        .with_alias("grams", "gram", "plural")
        .with_alias("g", "gram", "abbreviation")
        .with_alias("kilograms", "kilogram", "plural")
        .with_alias("kg", "kilogram", "abbreviation")
        .with_alias("tonnes", "tonne", "plural")
        .with_alias("pounds", "pound", "plural")
        .with_alias("lb", "pound", "abbreviation")
        .with_alias("lbs", "pound", "abbreviation, plural")
        .with_alias("ounces", "ounce", "plural")
        .with_alias("oz", "ounce", "abbreviation")
        .with_alias("st", "stone", "abbreviation")
        .with_alias("grains", "grain", "plural")
}
