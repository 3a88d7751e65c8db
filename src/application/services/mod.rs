//! Application services.

pub mod shortener_service;
pub mod url_validator;

pub use shortener_service::ShortenerService;
pub use url_validator::UrlValidator;
