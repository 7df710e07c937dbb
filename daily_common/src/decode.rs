//! Response body decoding into a generic JSON object.
use serde_json::{Map, Value};

use crate::error::DailyError;
use crate::result::Result;

/// Parses `body` and returns its top-level object.
///
/// Malformed JSON yields `DailyError::Json`; well-formed JSON whose top level
/// is not an object yields `DailyError::NotAnObject`.
pub fn decode(body: &[u8]) -> Result<Map<String, Value>> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Object(map) => Ok(map),
        _ => Err(DailyError::NotAnObject),
    }
}
