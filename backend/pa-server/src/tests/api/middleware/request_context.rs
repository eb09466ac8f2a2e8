use crate::RequestContext;

use axum::http::Method;

#[test]
fn test_request_sequence_increases() {
    let first = RequestContext::new(Method::GET, "/api/projects");
    let second = RequestContext::new(Method::GET, "/api/projects");

    assert!(second.request_seq > first.request_seq);
    assert_ne!(first.request_id, second.request_id);
}

#[test]
fn test_log_prefix_contains_short_id_and_sequence() {
    let ctx = RequestContext::new(Method::POST, "/api/actions");

    let prefix = ctx.log_prefix();
    let short_id = &ctx.request_id.simple().to_string()[..8];

    assert!(prefix.contains(short_id));
    assert!(prefix.contains(&format!("seq={}", ctx.request_seq)));
}
