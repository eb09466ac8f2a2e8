pub mod api_json;
pub mod record_id;
pub mod validated_action;
