//! Typed validation boundary for the Bridge prefunded account API.
//!
//! # Modules
//!
//! - [`domain`] - Typed request/response shapes and endpoint paths
//! - [`validation`] - JSON Schema contracts and structured violations
//! - [`application`] - Per-operation validate/parse entry points
//! - [`interfaces`] - JSON document reading and CSV balance output
//! - [`error`] - Crate error type

pub mod application;
pub mod domain;
pub mod error;
pub mod interfaces;
pub mod logging;
pub mod validation;

pub use application::{
    Validated, validate_balance_response, validate_request, validate_response,
    validate_transfer_request, validate_webhook_payload,
};
pub use domain::endpoints::Operation;
pub use error::{BridgeError, Result};
pub use validation::{ValidationError, Violation};
