mod request_context;
mod request_timeout;
