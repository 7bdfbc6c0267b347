use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// One step into a JSON document: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

/// Location of a value inside a JSON document, rendered as `data[0].id`.
///
/// Paths order by key and then numeric index, so `data[2]` sorts before `data[10]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn field(name: &str) -> Self {
        Self::root().child(name)
    }

    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Field(name.to_string()));
        Self(segments)
    }

    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, "(root)");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => write!(f, "{}", name)?,
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// The primitive kind of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    /// Maps a JSON Schema `type` name. `integer` counts as a number.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "null" => Some(JsonKind::Null),
            "boolean" => Some(JsonKind::Bool),
            "number" | "integer" => Some(JsonKind::Number),
            "string" => Some(JsonKind::String),
            "array" => Some(JsonKind::Array),
            "object" => Some(JsonKind::Object),
            _ => None,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// Textual formats a string field can be held to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringFormat {
    /// Hyphenated UUID, any version, any case.
    Uuid,
    /// `0x` followed by exactly 40 hex digits.
    WalletAddress,
}

impl fmt::Display for StringFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringFormat::Uuid => write!(f, "hyphenated UUID"),
            StringFormat::WalletAddress => write!(f, "0x-prefixed 40-digit hex address"),
        }
    }
}

/// The rule a value failed to satisfy.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    Required,
    Type(JsonKind),
    Finite,
    Minimum(f64),
    Maximum(f64),
    OneOf(Vec<String>),
    Format(StringFormat),
    /// A schema keyword with no dedicated variant, carrying the engine's message.
    Keyword(String),
    /// The typed decode failed after the schema passed.
    Decode(String),
}

/// What was actually found at the failing path.
#[derive(Debug, Clone, PartialEq)]
pub enum Actual {
    Missing,
    Value(Value),
}

impl From<&Value> for Actual {
    fn from(value: &Value) -> Self {
        Actual::Value(value.clone())
    }
}

impl From<f64> for Actual {
    fn from(value: f64) -> Self {
        // Non-finite floats have no JSON form
        Actual::Value(serde_json::Number::from_f64(value).map_or(Value::Null, Value::Number))
    }
}

impl From<&str> for Actual {
    fn from(value: &str) -> Self {
        Actual::Value(Value::String(value.to_string()))
    }
}

impl fmt::Display for Actual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actual::Missing => write!(f, "nothing"),
            Actual::Value(Value::Null) => write!(f, "null"),
            Actual::Value(value @ (Value::Array(_) | Value::Object(_))) => {
                write!(f, "{}", JsonKind::of(value))
            }
            Actual::Value(value) => write!(f, "{} {}", JsonKind::of(value), value),
        }
    }
}

/// A single (path, constraint, actual) triple.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub path: FieldPath,
    pub constraint: Constraint,
    pub actual: Actual,
}

impl Violation {
    pub fn new(path: FieldPath, constraint: Constraint, actual: impl Into<Actual>) -> Self {
        Self {
            path,
            constraint,
            actual: actual.into(),
        }
    }

    pub fn missing(path: FieldPath) -> Self {
        Self {
            path,
            constraint: Constraint::Required,
            actual: Actual::Missing,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = &self.path;
        let actual = &self.actual;
        match &self.constraint {
            Constraint::Required => write!(f, "{} is required", path),
            Constraint::Type(kind) => write!(f, "{}: expected {}, got {}", path, kind, actual),
            Constraint::Finite => write!(f, "{}: expected a finite number, got {}", path, actual),
            Constraint::Minimum(min) => {
                write!(f, "{} below minimum {} (got {})", path, min, actual)
            }
            Constraint::Maximum(max) => {
                write!(f, "{} above maximum {} (got {})", path, max, actual)
            }
            Constraint::OneOf(allowed) => write!(
                f,
                "{}: expected one of [{}], got {}",
                path,
                allowed.join(", "),
                actual
            ),
            Constraint::Format(format) => {
                write!(f, "{}: expected {}, got {}", path, format, actual)
            }
            Constraint::Keyword(message) | Constraint::Decode(message) => {
                write!(f, "{}: {}", path, message)
            }
        }
    }
}

/// Every violation found in one validation pass. Never empty.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("payload rejected: {}", render(.violations))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

fn render(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    pub fn single(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Number of violations. Always at least one.
    pub fn count(&self) -> usize {
        self.violations.len()
    }

    /// Finds the violation reported for a rendered path such as `source.currency`.
    pub fn at(&self, path: &str) -> Option<&Violation> {
        self.violations.iter().find(|v| v.path.to_string() == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_path_rendering() {
        let path = FieldPath::field("data").index(2).child("available_balance");
        assert_eq!(path.to_string(), "data[2].available_balance");
        assert_eq!(FieldPath::root().to_string(), "(root)");
        assert_eq!(FieldPath::root().index(0).to_string(), "[0]");
    }

    #[test]
    fn test_minimum_violation_message() {
        let violation =
            Violation::new(FieldPath::field("amount"), Constraint::Minimum(20.0), 19.99);
        assert_eq!(
            violation.to_string(),
            "amount below minimum 20 (got number 19.99)"
        );
    }

    #[test]
    fn test_actual_describes_kind_and_value() {
        assert_eq!(Actual::from(&json!("20")).to_string(), "string \"20\"");
        assert_eq!(Actual::from(&json!({"a": 1})).to_string(), "object");
        assert_eq!(Actual::Missing.to_string(), "nothing");
    }

    #[test]
    fn test_validation_error_lists_every_violation() {
        let err = ValidationError::new(vec![
            Violation::missing(FieldPath::field("event_type")),
            Violation::new(
                FieldPath::field("event_object_id"),
                Constraint::Type(JsonKind::String),
                &json!(7),
            ),
        ]);
        assert_eq!(err.count(), 2);
        let message = err.to_string();
        assert!(message.contains("event_type is required"));
        assert!(message.contains("event_object_id: expected string, got number 7"));
        assert!(err.at("event_object_id").is_some());
        assert!(err.at("event_object").is_none());
    }

    #[test]
    fn test_paths_order_by_key_then_index() {
        let mut paths = vec![
            FieldPath::field("source").child("currency"),
            FieldPath::field("data").index(10),
            FieldPath::field("amount"),
            FieldPath::field("data").index(2),
        ];
        paths.sort();
        let rendered: Vec<String> = paths.iter().map(FieldPath::to_string).collect();
        assert_eq!(rendered, ["amount", "data[2]", "data[10]", "source.currency"]);
    }

    #[test]
    fn test_schema_type_names() {
        assert_eq!(JsonKind::from_name("integer"), Some(JsonKind::Number));
        assert_eq!(JsonKind::from_name("boolean"), Some(JsonKind::Bool));
        assert_eq!(JsonKind::from_name("decimal"), None);
    }
}
