//! Web layer for the accessible stop finder.
//!
//! Provides the JSON endpoints for nearby accessible stops and stop lookup.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
