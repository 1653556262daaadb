//! mercat - Typed client for the storefront REST API
//!
//! This library wraps a small REST API (tasks, products, orders, users)
//! behind a session-centric client: a durable [`Session`] holds the bearer
//! token, every request dispatched through [`ApiClient`] picks up the
//! current token, and [`RouteGuard`] gates protected views on session state.
//!
//! # Example
//!
//! ```no_run
//! use mercat::{ApiClient, ApiUrl, Credentials, FileStorage, Session};
//!
//! # async fn example() -> Result<(), mercat::Error> {
//! let session = Session::new(Box::new(FileStorage::new("/tmp/session.json")));
//! session.initialize();
//!
//! let base = ApiUrl::new("https://shop.example.com")?;
//! let client = ApiClient::new(base, session);
//!
//! client.login(&Credentials::new("alice", "hunter2")).await?;
//! for order in client.list_orders().await? {
//!     println!("{}: {}", order.order_id, order.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod guard;
pub mod types;

// Re-export primary types at crate root for convenience
pub use auth::{
    AuthToken, Credentials, FileStorage, MemoryStorage, PersistedSession, Session, SessionStorage,
};
pub use client::ApiClient;
pub use error::{Error, HttpError, NetworkError, ValidationError};
pub use guard::{RouteAccess, RouteGuard, RoutePolicy};
pub use types::ApiUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
