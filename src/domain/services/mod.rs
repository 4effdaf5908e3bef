pub mod auth;
pub mod remote;
mod query_controller;
mod reconciler;
mod session_store;

pub use query_controller::*;
pub use reconciler::*;
pub use session_store::*;
