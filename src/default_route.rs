use crate::constants::header;
use crate::event::EventError;
use crate::headers::HeaderMap;
use crate::result::EdgeResponse;
use once_cell::sync::Lazy;

pub const NOT_FOUND_STATUS: u16 = 404;
pub const NOT_FOUND_BODY: &str = "404 - Not Found";
const NOT_FOUND_CONTENT_TYPE: &str = "text/plain";
const NOT_FOUND_CACHE_CONTROL: &str = "no-cache, no-store, must-revalidate";

static NOT_FOUND: Lazy<EdgeResponse> = Lazy::new(|| EdgeResponse {
    status_code: NOT_FOUND_STATUS,
    headers: [
        (header::CONTENT_TYPE, NOT_FOUND_CONTENT_TYPE),
        (header::CACHE_CONTROL, NOT_FOUND_CACHE_CONTROL),
    ]
    .into_iter()
    .collect::<HeaderMap>(),
    body: NOT_FOUND_BODY.to_string(),
});

/// Uncacheable plain-text 404 served for every path routed to the default behavior.
pub fn not_found() -> EdgeResponse {
    NOT_FOUND.clone()
}

/// Invocation entry point. The event is never inspected.
pub fn handle_event<E>(_event: E) -> EdgeResponse {
    not_found()
}

pub fn handle_default_route_json(_input: &str) -> Result<String, EventError> {
    Ok(serde_json::to_string(&*NOT_FOUND)?)
}

#[cfg(test)]
#[path = "default_route_test.rs"]
mod default_route_test;
