//! Integration tests for unit-setters-core
//!
//! These tests drive the setters the way a parameter framework would:
//! check the setter once, then feed it tokens and inspect the caller-owned
//! slot afterwards.

use unit_setters_core::{
    check::unit_has_tag,
    config::SuggestionConfig,
    error::{Error, Fault},
    setter::{FamilySetter, ParamSetter, TagListAppender, TagSetter, UnitSetter},
    suggest::suggest,
    units::{catalog, Tag, TagCatalog, Unit},
    vocabulary::{allowed_values, Vocabulary},
};

/// Every canonical name and alias resolves and lands in the slot
#[test]
fn test_every_legal_name_sets_the_slot() {
    for details in [catalog::distance(), catalog::time(), catalog::mass()] {
        for name in details.legal_names() {
            let expected = details.resolve(name).unwrap();

            let mut slot: Option<Unit> = None;
            UnitSetter::new(&mut slot, details)
                .set_with_value("unit", name)
                .unwrap();

            assert_eq!(slot, Some(expected), "token `{name}`");
        }
    }
}

/// A rejected token never touches the slot
#[test]
fn test_unknown_tokens_leave_slot_unchanged() {
    let before = catalog::distance().units["yard"].clone();

    for token in ["nonesuch", "killometre", "Mile", "", " mile", "metre "] {
        let mut slot = Some(before.clone());
        let err = UnitSetter::new(&mut slot, catalog::distance())
            .set_with_value("unit", token)
            .unwrap_err();

        assert!(matches!(err, Error::NotFound { .. }), "token `{token}`");
        assert_eq!(slot.as_ref(), Some(&before), "token `{token}`");
    }
}

/// Scenario: a valid unit of distance
#[test]
fn test_mile_in_distance() {
    let mut slot = None;
    {
        let mut setter = UnitSetter::new(&mut slot, catalog::distance());
        setter.check_setter("set-unit").unwrap();
        setter.set_with_value("set-unit", "mile").unwrap();
        assert_eq!(setter.value_description(), "unit-of-distance");
        assert_eq!(setter.current_value(), "mile");
    }

    let mile = slot.unwrap();
    assert_eq!(mile.abbrev, "mi");
    assert!(mile.has_tag(Tag::Imperial));
}

/// Scenario: an unrelated token gets no suggestion clause
#[test]
fn test_nonesuch_has_no_suggestion() {
    let mut unit = None;
    let err = UnitSetter::new(&mut unit, catalog::distance())
        .set_with_value("set-unit", "nonesuch")
        .unwrap_err();
    let message = err.to_string();
    assert_eq!(message, "unit of distance 'nonesuch' is not recognised.");
    assert!(!message.contains("Did you mean"));

    let mut tag = None;
    let err = TagSetter::builtin(&mut tag)
        .set_with_value("set-tag", "nonesuch")
        .unwrap_err();
    assert_eq!(err.to_string(), "unit tag 'nonesuch' is not recognised.");
}

/// Scenario: a near-miss tag gets a suggestion
#[test]
fn test_histeric_suggests_historic() {
    let mut tags = Vec::new();
    let err = TagListAppender::builtin(&mut tags)
        .set_with_value("add-tag", "histeric")
        .unwrap_err();
    assert!(err.to_string().contains("Did you mean: historic?"));
    assert!(tags.is_empty());
}

/// Scenario: a setter without a target is a configuration fault
#[test]
fn test_nil_target_is_configuration_fault() {
    let setter = UnitSetter::unset().with_vocabulary(catalog::distance());
    let fault = setter.check_setter("set-unit").unwrap_err();

    assert_eq!(fault.reason, Fault::NilTarget);
    assert_eq!(fault.parameter, "set-unit");
    assert!(fault.to_string().starts_with("set-unit: "));
    assert!(fault.to_string().contains("the Value to be set is nil"));

    let setter = FamilySetter::unset().with_vocabulary(catalog::families());
    let fault = setter.check_setter("set-family").unwrap_err();
    assert_eq!(
        fault.to_string(),
        "set-family: FamilySetter Check failed: the Value to be set is nil"
    );
}

#[test]
fn test_killometre_suggestions() {
    let names = catalog::distance().legal_names();
    let found = suggest("killometre", &names, &SuggestionConfig::default());
    assert_eq!(found, vec!["kilometre", "kilometres", "kilometer"]);

    let found = suggest("nonsense-unrelated-token", &names, &SuggestionConfig::default());
    assert!(found.is_empty());
}

/// The same tag twice: second attempt is a duplicate, list keeps one copy
#[test]
fn test_tag_list_keeps_first_insertion() {
    let mut tags = Vec::new();
    {
        let mut setter = TagListAppender::builtin(&mut tags);
        setter.check_setter("add-tag").unwrap();
        for token in ["nautical", "metric", "nautical", "si", "metric"] {
            let _ = setter.set_with_value("add-tag", token);
        }
        assert_eq!(setter.current_value(), "nautical, metric, si");
    }
    assert_eq!(tags, vec![Tag::Nautical, Tag::Metric, Tag::Si]);
}

#[test]
fn test_duplicate_error_is_distinct_from_not_found() {
    let mut tags = vec![Tag::Metric];
    let err = TagListAppender::builtin(&mut tags)
        .set_with_value("add-tag", "metric")
        .unwrap_err();
    assert!(matches!(err, Error::Duplicate { ref value } if value == "metric"));
    assert!(!err.is_configuration_fault());
}

/// Base name first, then shortest, then alphabetical
#[test]
fn test_allowed_values_ordering() {
    for details in [catalog::distance(), catalog::time(), catalog::mass()] {
        let names = allowed_values(details);
        assert_eq!(names[0], details.family.base_unit_name);

        for pair in names[1..].windows(2) {
            let key = |name: &str| (name.len(), name.to_string());
            assert!(key(pair[0]) <= key(pair[1]), "{} before {}", pair[0], pair[1]);
        }
    }

    let tags = allowed_values(TagCatalog::builtin());
    let mut sorted = tags.clone();
    sorted.sort_unstable();
    assert_eq!(tags, sorted);
}

/// Read accessors do not change between calls
#[test]
fn test_accessors_are_stable() {
    let mut slot = None;
    let setter = UnitSetter::new(&mut slot, catalog::time());
    assert_eq!(setter.allowed_values(), setter.allowed_values());
    assert_eq!(setter.value_description(), setter.value_description());
    assert!(setter.allowed_values().starts_with("second, "));
}

/// A check attached to the unit setter can reject an otherwise valid unit
#[test]
fn test_check_rejects_valid_unit() {
    let mut slot = None;
    {
        let mut setter = UnitSetter::new(&mut slot, catalog::mass())
            .with_check(unit_has_tag(Tag::Si));
        let err = setter.set_with_value("weight", "lbs").unwrap_err();
        assert!(matches!(err, Error::CheckFailed(_)));
        assert_eq!(err.to_string(), "pound is not a si unit");

        setter.set_with_value("weight", "kg").unwrap();
    }
    assert_eq!(slot.unwrap().name, "kilogram");
}

#[test]
fn test_case_difference_is_suggested_not_accepted() {
    let mut slot = None;
    let err = FamilySetter::builtin(&mut slot)
        .set_with_value("family", "Distance")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "unit family 'Distance' is not recognised. Did you mean: distance?"
    );
    assert!(slot.is_none());
}
