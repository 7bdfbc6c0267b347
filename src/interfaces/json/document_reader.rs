use crate::error::{BridgeError, Result};
use serde_json::Value;
use std::io::BufRead;

/// Reads untyped JSON documents from a byte source.
///
/// A source holds either one document, or newline-delimited documents read
/// lazily one line at a time.
pub struct DocumentReader<R: BufRead> {
    source: R,
}

impl<R: BufRead> DocumentReader<R> {
    /// Creates a new `DocumentReader` from any buffered source (e.g. a file or stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Parses the whole source as a single JSON document.
    pub fn document(self) -> Result<Value> {
        Ok(serde_json::from_reader(self.source)?)
    }

    /// Yields `(line_number, document)` for every non-blank line, numbered from 1.
    ///
    /// A malformed line produces an error for that line only; iteration goes on.
    pub fn lines(self) -> impl Iterator<Item = (usize, Result<Value>)> {
        self.source
            .lines()
            .enumerate()
            .filter_map(|(i, line)| match line {
                Ok(text) if text.trim().is_empty() => None,
                Ok(text) => Some((i + 1, serde_json::from_str(&text).map_err(BridgeError::from))),
                Err(e) => Some((i + 1, Err(BridgeError::from(e)))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reader_single_document() {
        let data = "{\n  \"event_type\": \"a\",\n  \"event_object_id\": \"b\"\n}\n";
        let value = DocumentReader::new(data.as_bytes()).document().unwrap();
        assert_eq!(value, json!({"event_type": "a", "event_object_id": "b"}));
    }

    #[test]
    fn test_reader_rejects_trailing_garbage() {
        let data = "{} {}";
        assert!(matches!(
            DocumentReader::new(data.as_bytes()).document(),
            Err(BridgeError::JsonError(_))
        ));
    }

    #[test]
    fn test_reader_lines_skip_blanks_and_keep_numbers() {
        let data = "{\"a\": 1}\n\n{broken\n   \n[2]\n";
        let results: Vec<(usize, Result<Value>)> =
            DocumentReader::new(data.as_bytes()).lines().collect();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0, 1);
        assert_eq!(results[0].1.as_ref().unwrap(), &json!({"a": 1}));
        assert_eq!(results[1].0, 3);
        assert!(results[1].1.is_err());
        assert_eq!(results[2].0, 5);
        assert_eq!(results[2].1.as_ref().unwrap(), &json!([2]));
    }
}
