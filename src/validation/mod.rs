//! Schema engine: JSON Schema contracts and the violations they report.

pub mod schema;
pub mod violation;

pub use schema::{ADDRESS_PATTERN, ContractSchema, UUID_PATTERN};
pub use violation::{
    Actual, Constraint, FieldPath, JsonKind, PathSegment, StringFormat, ValidationError,
    Violation,
};
