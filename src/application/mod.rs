//! Application layer: the validation boundary itself.
//!
//! Each operation's schema is built once and interpreted on every call. The
//! functions here are pure and safe to call from any thread or task.

pub mod boundary;

pub use boundary::{
    OperationSchema, Validated, parse_balance_response, parse_transfer_request,
    parse_webhook_payload, schema_for, validate_balance_response, validate_request,
    validate_response, validate_transfer_request, validate_webhook_payload,
};
