use crate::Action;

use chrono::Utc;

#[test]
fn test_action_belongs_to_its_project() {
    let now = Utc::now();
    let action = Action {
        id: 7,
        project_id: 3,
        description: "Write docs".to_string(),
        notes: "README first".to_string(),
        completed: false,
        created_at: now,
        updated_at: now,
    };

    assert!(action.belongs_to(3));
    assert!(!action.belongs_to(4));
}
