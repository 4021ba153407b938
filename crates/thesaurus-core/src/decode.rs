use serde::de::Error as _;

use crate::error::ModelError;
use crate::model::ResultSet;

/// Decode a raw response body for `word`.
///
/// Missing or `null` optional fields default to empty values. A document
/// without any results is reported as [`ModelError::NotFound`], exactly like an upstream 404.
pub fn decode(word: &str, bytes: &[u8]) -> Result<ResultSet, ModelError> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    decode_value(word, value)
}

/// Decode an already parsed document for `word`
pub fn decode_value(word: &str, value: serde_json::Value) -> Result<ResultSet, ModelError> {
    if !value.is_object() {
        return Err(ModelError::Schema(serde_json::Error::custom(
            "expected a JSON object at the top level",
        )));
    }

    let set: ResultSet = serde_json::from_value(value)?;

    if set.is_empty() {
        return Err(ModelError::NotFound {
            word: word.to_string(),
        });
    }

    Ok(set)
}
