//! Stop feed client.
//!
//! Fetches the JSON stop document (`{"data": [...]}`) published by the
//! transit agency and decodes it into domain [`Stop`](crate::domain::Stop)s.

mod client;
mod error;
mod types;

pub use client::{FeedClient, FeedConfig};
pub use error::FeedError;
pub use types::{StopAttributes, StopResource, StopsDocument};
