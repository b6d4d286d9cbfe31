use crate::error::CoreError;
use crate::hash::LineId;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Canonical bytes for hashing: `tag\0json` with every object's keys sorted,
/// so the encoding does not depend on field or insertion order.
pub fn canonical_serialize(tag: &str, value: &impl Serialize) -> Result<Vec<u8>, CoreError> {
    let sorted_json = serde_json::to_string(&sort_value(serde_json::to_value(value)?))?;
    let mut buf = Vec::with_capacity(tag.len() + 1 + sorted_json.len());
    buf.extend_from_slice(tag.as_bytes());
    buf.push(0);
    buf.extend_from_slice(sorted_json.as_bytes());
    Ok(buf)
}

pub fn content_id(tag: &str, value: &impl Serialize) -> Result<LineId, CoreError> {
    Ok(LineId::hash(&canonical_serialize(tag, value)?))
}

fn sort_value(v: Value) -> Value {
    match v {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, sort_value(v)))
                .collect::<BTreeMap<_, _>>()
                .into_iter()
                .collect(),
        ),
        Value::Array(arr) => Value::Array(arr.into_iter().map(sort_value).collect()),
        other => other,
    }
}
