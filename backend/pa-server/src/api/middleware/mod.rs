pub mod action_guard;
pub mod request_context;
pub mod request_logger;
pub mod request_timeout;
