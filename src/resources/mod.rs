//! Typed wrappers over the REST resources the backend manages.
//!
//! Each wrapper is a thin view over a client handle; all traffic goes
//! through the same dispatch pipeline. Schemas mirror what the backend
//! serves and are treated as given.

pub mod auth;
pub mod content;
pub mod links;
pub mod news;
pub mod notices;
pub mod stats;

pub use auth::AuthApi;
pub use content::ContentApi;
pub use links::LinksApi;
pub use news::NewsApi;
pub use notices::NoticesApi;
pub use stats::StatsApi;
