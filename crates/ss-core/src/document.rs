//! # Document Protocol
//!
//! The value types spoken across the [`crate::traits::DocumentStore`] port:
//! schema-flexible JSON field maps, the server-timestamp write sentinel, and
//! the atomic array mutation primitives. The mutation semantics live here so
//! every adapter resolves them identically; adapters only supply storage and
//! per-document atomicity.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A stored document: its store-assigned identifier plus its field map.
/// The identifier is not part of the field map.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: Uuid,
    pub fields: Map<String, Value>,
}

impl Document {
    /// The document body as a JSON object, for serde-based decoding.
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

/// A value written into a field on insert or set.
#[derive(Debug, Clone)]
pub enum WriteValue {
    Json(Value),
    /// Placeholder the store replaces with its own wall-clock time at commit.
    ServerTimestamp,
}

/// One field mutation inside an update call.
#[derive(Debug, Clone)]
pub enum FieldOp {
    Set {
        field: String,
        value: WriteValue,
    },
    /// Adds the element unless a deeply-equal element is already present.
    ArrayUnion {
        field: String,
        value: Value,
    },
    /// Removes every deeply-equal element.
    ArrayRemove {
        field: String,
        value: Value,
    },
}

/// Resolves a [`WriteValue`] against the store's commit clock.
pub fn resolve_write(value: WriteValue, commit_time: DateTime<Utc>) -> Value {
    match value {
        WriteValue::Json(v) => v,
        WriteValue::ServerTimestamp => timestamp_value(commit_time),
    }
}

/// Applies update operations to a field map, in order.
///
/// Array ops on a missing or non-array field treat it as an empty array
/// first, so a union always leaves an array behind.
pub fn apply_ops(fields: &mut Map<String, Value>, ops: Vec<FieldOp>, commit_time: DateTime<Utc>) {
    for op in ops {
        match op {
            FieldOp::Set { field, value } => {
                fields.insert(field, resolve_write(value, commit_time));
            }
            FieldOp::ArrayUnion { field, value } => {
                let arr = array_entry(fields, field);
                if !arr.contains(&value) {
                    arr.push(value);
                }
            }
            FieldOp::ArrayRemove { field, value } => {
                array_entry(fields, field).retain(|v| v != &value);
            }
        }
    }
}

fn array_entry(fields: &mut Map<String, Value>, field: String) -> &mut Vec<Value> {
    let slot = fields.entry(field).or_insert_with(|| Value::Array(vec![]));
    if !slot.is_array() {
        *slot = Value::Array(vec![]);
    }
    slot.as_array_mut().expect("slot was just made an array")
}

fn timestamp_value(at: DateTime<Utc>) -> Value {
    serde_json::to_value(at).expect("DateTime serialization is infallible")
}
