use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use axum::http::Method;
use uuid::Uuid;

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Per-request correlation data, stored in the request extensions
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Returned to the client as `x-request-id`
    pub request_id: Uuid,
    /// Sequence number within this server instance
    pub request_seq: u64,
    pub method: Method,
    pub path: String,
    /// Start time for latency tracking
    pub started_at: Instant,
}

impl RequestContext {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            request_seq: REQUEST_COUNTER.fetch_add(1, Ordering::SeqCst),
            method,
            path: path.into(),
            started_at: Instant::now(),
        }
    }

    /// Get elapsed time since request started
    pub fn elapsed_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }

    /// Create a log prefix for structured logging
    pub fn log_prefix(&self) -> String {
        let id = self.request_id.simple().to_string();
        format!("[req={} seq={}]", &id[..8], self.request_seq)
    }
}
