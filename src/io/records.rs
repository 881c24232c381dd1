//! Loading give listings exported from the directory API.
//!
//! The listing endpoints answer either with a bare array or, when
//! paginated, with an object whose `results` field holds the array. Both
//! are accepted; anything else is rejected as a whole.

use crate::core::{Error, ReferralRecord, Result};
use serde_json::Value;
use std::path::Path;
use tracing::info;

pub fn load_records(path: &Path) -> Result<Vec<ReferralRecord>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| Error::file_system("Failed to read give listing", path, e))?;
    let records = parse_listing(&contents)?;
    info!(path = %path.display(), gives = records.len(), "Loaded give listing");
    Ok(records)
}

pub fn parse_listing(contents: &str) -> Result<Vec<ReferralRecord>> {
    let value: Value = serde_json::from_str(contents)?;
    let items = listing_items(value)?;

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|e| Error::InvalidShape(format!("give at index {index}: {e}")))
        })
        .collect()
}

fn listing_items(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(mut page) => match page.remove("results") {
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(Error::InvalidShape(format!(
                "`results` must be an array, found {}",
                json_kind(&other)
            ))),
            None => Err(Error::InvalidShape(
                "expected an array of gives or an object with a `results` array".to_string(),
            )),
        },
        other => Err(Error::InvalidShape(format!(
            "expected an array of gives, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
