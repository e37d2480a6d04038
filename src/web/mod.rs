// HTTP surface: routing, handlers, page templates and shared state

pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
pub mod templates;
pub mod tracking;

pub use router::app_router;
pub use state::AppState;
