//! HTTP API module for the attendance hours engine.
//!
//! A thin shim over the engine operations: single-record calculation and
//! batch recompute. CRUD, authentication and reporting belong to the
//! surrounding system, not here.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, RecomputeRequest};
pub use response::{ApiError, ComputationResponse};
pub use state::AppState;
