//! Authentication state and session persistence.
//!
//! The [`Session`] is the single source of truth for the client's
//! authentication state. The request client and route guard both read it;
//! only `login`/`logout` mutate it.

mod credentials;
mod session;
mod storage;
mod token;

pub use credentials::Credentials;
pub use session::Session;
pub use storage::{FileStorage, MemoryStorage, PersistedSession, SessionStorage};
pub use token::AuthToken;
