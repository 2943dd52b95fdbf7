use std::collections::HashMap;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Serialize `item` and return its top-level JSON object.
pub fn struct_to_map<T: Serialize + ?Sized>(item: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(item).context("unable to serialize value to a map")? {
        Value::Object(map) => Ok(map),
        other => Err(anyhow!("expected a JSON object, got {}", other)),
    }
}

/// Fails on the first value that is not a string.
pub fn map_interface_to_map_string(input: &Map<String, Value>) -> Result<HashMap<String, String>> {
    input
        .iter()
        .map(|(k, v)| match v {
            Value::String(s) => Ok((k.clone(), s.clone())),
            other => Err(anyhow!("value of '{}' is not a string: {}", k, other)),
        })
        .collect()
}

pub fn convert_string_map(input: Option<&HashMap<String, String>>) -> Map<String, Value> {
    input
        .into_iter()
        .flatten()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect()
}

/// Like `map_interface_to_map_string` but never fails: non-string values
/// are replaced by a marker naming the offending value.
pub fn convert_interface_map(input: Option<&Map<String, Value>>) -> HashMap<String, String> {
    input
        .into_iter()
        .flatten()
        .map(|(k, v)| {
            let s = match v {
                Value::String(s) => s.clone(),
                other => format!("invalid string value: {}", other),
            };
            (k.clone(), s)
        })
        .collect()
}

/// Split `items` into chunks of at most `size`. A zero size yields a single chunk.
pub fn chunk_slice<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if items.is_empty() {
        return Vec::new();
    }
    if size == 0 {
        return vec![items.to_vec()];
    }
    items.chunks(size).map(<[T]>::to_vec).collect()
}

pub fn chunk_string_slice(items: &[String], size: usize) -> Vec<Vec<String>> {
    chunk_slice(items, size)
}
