//! Core simulation: session state, per-tick logic, and collision testing.

pub mod collision;
pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
