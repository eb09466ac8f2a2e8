use crate::ActionFields;

use proptest::prelude::*;

fn text(s: &str) -> Option<String> {
    Some(s.to_string())
}

#[test]
fn test_action_fields_new() {
    let fields = ActionFields::new(Some(2), text("A"), text("N"), Some(true)).unwrap();

    assert_eq!(fields.project_id, 2);
    assert_eq!(fields.description, "A");
    assert_eq!(fields.notes, "N");
    assert!(fields.completed);
}

#[test]
fn test_action_fields_completed_defaults_to_false() {
    let fields = ActionFields::new(Some(2), text("A"), text("N"), None).unwrap();

    assert!(!fields.completed);
}

#[test]
fn test_action_fields_missing_notes() {
    let err = ActionFields::new(Some(2), text("A"), None, None).unwrap_err();

    assert_eq!(err.field(), "notes");
}

#[test]
fn test_action_fields_missing_project_id() {
    let err = ActionFields::new(None, text("A"), text("N"), None).unwrap_err();

    assert_eq!(err.field(), "project_id");
}

#[test]
fn test_action_fields_zero_project_id_is_missing() {
    let err = ActionFields::new(Some(0), text("A"), text("N"), None).unwrap_err();

    assert_eq!(err.field(), "project_id");
}

#[test]
fn test_action_fields_description_checked_first() {
    let err = ActionFields::new(None, None, None, None).unwrap_err();

    assert_eq!(err.field(), "description");
}

proptest! {
    #[test]
    fn given_non_positive_project_id_when_built_then_fails(project_id in i64::MIN..=0) {
        let result = ActionFields::new(Some(project_id), text("A"), text("N"), None);
        prop_assert_eq!(result.unwrap_err().field(), "project_id");
    }

    #[test]
    fn given_valid_input_when_built_then_values_preserved(
        project_id in 1i64..1_000_000,
        description in "[a-z]{1,20}",
        notes in "[a-z]{1,20}",
        completed in any::<bool>(),
    ) {
        let fields = ActionFields::new(
            Some(project_id),
            Some(description.clone()),
            Some(notes.clone()),
            Some(completed),
        ).unwrap();
        prop_assert_eq!(fields.project_id, project_id);
        prop_assert_eq!(fields.description, description);
        prop_assert_eq!(fields.notes, notes);
        prop_assert_eq!(fields.completed, completed);
    }
}
