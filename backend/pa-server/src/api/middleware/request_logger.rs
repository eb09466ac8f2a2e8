use crate::RequestContext;

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use log::{debug, info, warn};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Log every request with its status and latency, and tag the response
/// with the request id
pub async fn request_logger(mut request: Request, next: Next) -> Response {
    let ctx = RequestContext::new(request.method().clone(), request.uri().path());
    request.extensions_mut().insert(ctx.clone());

    debug!("{} -> {} {}", ctx.log_prefix(), ctx.method, ctx.path);

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&ctx.request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    let status = response.status();
    if status.is_server_error() {
        warn!(
            "{} {} {} -> {} ({}ms)",
            ctx.log_prefix(),
            ctx.method,
            ctx.path,
            status.as_u16(),
            ctx.elapsed_ms()
        );
    } else {
        info!(
            "{} {} {} -> {} ({}ms)",
            ctx.log_prefix(),
            ctx.method,
            ctx.path,
            status.as_u16(),
            ctx.elapsed_ms()
        );
    }

    response
}
