//! HTTP handlers for professor CRUD and routing fallbacks.

pub mod professor;
pub use professor::*;
