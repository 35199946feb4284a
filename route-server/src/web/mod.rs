//! Web layer for the route discovery server.
//!
//! Provides JSON endpoints for browsing the network and searching routes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
