//! Typed shapes exchanged with Bridge, and the paths that address them.

pub mod balance;
pub mod endpoints;
pub mod rail;
pub mod transfer;
pub mod webhook;
