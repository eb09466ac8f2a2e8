use crate::ProjectFields;

use proptest::prelude::*;

#[test]
fn test_project_fields_new() {
    let fields = ProjectFields::new(
        Some("P1".to_string()),
        Some("D1".to_string()),
        Some(true),
    )
    .unwrap();

    assert_eq!(fields.name, "P1");
    assert_eq!(fields.description, "D1");
    assert!(fields.completed);
}

#[test]
fn test_project_fields_completed_defaults_to_false() {
    let fields = ProjectFields::new(Some("P1".to_string()), Some("D1".to_string()), None).unwrap();

    assert!(!fields.completed);
}

#[test]
fn test_project_fields_missing_name() {
    let err = ProjectFields::new(None, Some("D1".to_string()), None).unwrap_err();

    assert_eq!(err.field(), "name");
}

#[test]
fn test_project_fields_empty_description() {
    let err = ProjectFields::new(Some("P1".to_string()), Some(String::new()), None).unwrap_err();

    assert_eq!(err.field(), "description");
}

#[test]
fn test_project_fields_accepts_whitespace_only_name() {
    let fields =
        ProjectFields::new(Some("  ".to_string()), Some("D1".to_string()), None).unwrap();

    assert_eq!(fields.name, "  ");
}

#[test]
fn test_project_fields_keeps_text_untrimmed() {
    let fields =
        ProjectFields::new(Some(" P1 ".to_string()), Some("D1".to_string()), None).unwrap();

    assert_eq!(fields.name, " P1 ");
}

// =========================================================================
// Property-Based Tests
// =========================================================================

proptest! {
    #[test]
    fn given_any_missing_name_when_built_then_fails(
        description in "[a-zA-Z0-9 ]{0,20}",
        completed in proptest::option::of(any::<bool>()),
    ) {
        let result = ProjectFields::new(None, Some(description), completed);
        prop_assert!(result.is_err());
    }

    #[test]
    fn given_whitespace_description_when_built_then_kept_as_is(
        name in "[a-zA-Z0-9]{1,20}",
        blank in "[ \t]{1,5}",
    ) {
        let fields = ProjectFields::new(Some(name), Some(blank.clone()), None).unwrap();
        prop_assert_eq!(fields.description, blank);
    }

    #[test]
    fn given_non_empty_name_and_description_when_built_then_succeeds(
        name in "[a-zA-Z0-9]{1,20}",
        description in "[a-zA-Z0-9]{1,40}",
    ) {
        let fields = ProjectFields::new(Some(name.clone()), Some(description.clone()), None).unwrap();
        prop_assert_eq!(fields.name, name);
        prop_assert_eq!(fields.description, description);
    }
}
