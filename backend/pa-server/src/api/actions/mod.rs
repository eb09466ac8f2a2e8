pub mod action_dto;
pub mod actions;
pub mod create_action_request;
pub mod update_action_request;
