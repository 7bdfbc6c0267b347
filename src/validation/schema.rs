use super::violation::{
    Actual, Constraint, FieldPath, JsonKind, StringFormat, ValidationError, Violation,
};
use jsonschema::error::ValidationErrorKind;
use jsonschema::{Draft, Validator};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

/// Hyphenated UUID, any version, any case.
pub const UUID_PATTERN: &str =
    "^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$";

/// `0x` followed by exactly 40 hex digits.
pub const ADDRESS_PATTERN: &str = "^0x[a-fA-F0-9]{40}$";

/// A JSON Schema document compiled once and applied to untyped input.
///
/// Violations come from `jsonschema`'s error iterator and are translated into
/// [`Violation`]s, ordered by path. Keys a schema does not list are left open;
/// the typed decode that follows decides whether they are kept.
pub struct ContractSchema {
    document: Value,
    validator: Result<Validator, String>,
}

impl fmt::Debug for ContractSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContractSchema")
            .field("document", &self.document)
            .field("compiled", &self.validator.is_ok())
            .finish()
    }
}

impl ContractSchema {
    pub fn compile(document: Value) -> Self {
        // `format` is an annotation under 2020-12; patterns carry the assertions
        let validator = jsonschema::options()
            .with_draft(Draft::Draft202012)
            .build(&document)
            .map_err(|e| e.to_string());
        Self {
            document,
            validator,
        }
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Reports every violation at once.
    pub fn check(&self, value: &Value) -> Result<(), ValidationError> {
        let validator = match &self.validator {
            Ok(validator) => validator,
            Err(message) => {
                return Err(ValidationError::single(Violation::new(
                    FieldPath::root(),
                    Constraint::Keyword(format!("schema does not compile: {}", message)),
                    Actual::Missing,
                )));
            }
        };

        let mut violations: Vec<Violation> = validator
            .iter_errors(value)
            .map(|error| self.translate(&error, value))
            .collect();
        if violations.is_empty() {
            return Ok(());
        }
        violations.sort_by(|a, b| a.path.cmp(&b.path));
        Err(ValidationError::new(violations))
    }

    /// Checks `value`, then decodes it into `T`.
    ///
    /// `T` must describe the same shape as the schema; a decode failure after a
    /// clean check is still reported as a violation rather than a panic.
    pub fn conform<T: DeserializeOwned>(&self, value: &Value) -> Result<T, ValidationError> {
        self.check(value)?;
        T::deserialize(value).map_err(|e| {
            ValidationError::single(Violation::new(
                FieldPath::root(),
                Constraint::Decode(e.to_string()),
                Actual::Missing,
            ))
        })
    }

    fn translate(&self, error: &jsonschema::ValidationError<'_>, instance: &Value) -> Violation {
        let pointer = error.instance_path().to_string();
        let at = locate(&pointer, instance, &self.document);

        let constraint = match error.kind() {
            ValidationErrorKind::Required { property } => {
                let name = match property {
                    Value::String(name) => name.clone(),
                    other => other.to_string(),
                };
                return Violation::missing(at.path.child(&name));
            }
            ValidationErrorKind::Type { .. } => keyword(at.schema, "type")
                .and_then(Value::as_str)
                .and_then(JsonKind::from_name)
                .map(Constraint::Type),
            ValidationErrorKind::Minimum { .. } => keyword(at.schema, "minimum")
                .and_then(Value::as_f64)
                .map(Constraint::Minimum),
            ValidationErrorKind::Maximum { .. } => keyword(at.schema, "maximum")
                .and_then(Value::as_f64)
                .map(Constraint::Maximum),
            ValidationErrorKind::Enum { .. } => keyword(at.schema, "enum")
                .and_then(Value::as_array)
                .map(|options| {
                    let names = options.iter().filter_map(Value::as_str);
                    Constraint::OneOf(names.map(str::to_string).collect())
                }),
            ValidationErrorKind::Pattern { .. } => keyword(at.schema, "pattern")
                .and_then(Value::as_str)
                .and_then(format_for_pattern)
                .map(Constraint::Format),
            _ => None,
        }
        .unwrap_or_else(|| Constraint::Keyword(error.to_string()));

        let actual = at.value.map_or(Actual::Missing, Actual::from);
        Violation::new(at.path, constraint, actual)
    }
}

/// Where a JSON pointer lands in both the instance and the schema that describes it.
struct Located<'a> {
    path: FieldPath,
    value: Option<&'a Value>,
    schema: Option<&'a Value>,
}

fn locate<'a>(pointer: &str, instance: &'a Value, schema: &'a Value) -> Located<'a> {
    let mut at = Located {
        path: FieldPath::root(),
        value: Some(instance),
        schema: Some(schema),
    };
    for token in pointer.split('/').filter(|t| !t.is_empty()) {
        let token = token.replace("~1", "/").replace("~0", "~");
        let index = match at.value {
            Some(Value::Array(_)) => token.parse::<usize>().ok(),
            _ => None,
        };
        at = match index {
            Some(i) => Located {
                path: at.path.index(i),
                value: at.value.and_then(|v| v.get(i)),
                schema: at.schema.and_then(|s| s.get("items")),
            },
            None => Located {
                path: at.path.child(&token),
                value: at.value.and_then(|v| v.get(token.as_str())),
                schema: at
                    .schema
                    .and_then(|s| s.get("properties"))
                    .and_then(|p| p.get(token.as_str())),
            },
        };
    }
    at
}

fn keyword<'a>(schema: Option<&'a Value>, name: &str) -> Option<&'a Value> {
    schema.and_then(|s| s.get(name))
}

fn format_for_pattern(pattern: &str) -> Option<StringFormat> {
    match pattern {
        UUID_PATTERN => Some(StringFormat::Uuid),
        ADDRESS_PATTERN => Some(StringFormat::WalletAddress),
        _ => None,
    }
}
