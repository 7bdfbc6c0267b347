//! Adapters between byte streams and the validation boundary.

pub mod csv;
pub mod json;
