//! Core validated types.

mod api_url;

pub use api_url::ApiUrl;
