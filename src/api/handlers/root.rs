//! Root banner endpoint.

/// `GET /` service banner.
pub async fn root_handler() -> &'static str {
    "URL Shortener Microservice is running"
}
