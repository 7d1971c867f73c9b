//! Conversion to and from key-value mappings.
//!
//! Any `serde` type that serializes as a map or struct can opt in with an
//! empty `impl Serializable for T {}`; the conversions go through
//! `serde_json`.

use crate::error::{ContractError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A string-keyed mapping of JSON values.
pub type Mapping = serde_json::Map<String, Value>;

/// Round-trips a value through a [`Mapping`].
///
/// `from_dict(x.as_dict()?)?` equals `x` for derived serde types.
pub trait Serializable: Serialize + DeserializeOwned {
    /// Convert `self` into a mapping.
    ///
    /// Fails with [`ContractError::NotAMapping`] when the type serializes to
    /// anything other than an object (numbers, sequences, unit enums...).
    fn as_dict(&self) -> Result<Mapping> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(ContractError::NotAMapping {
                kind: value_kind(&other),
            }),
        }
    }

    /// Rebuild an instance from a mapping.
    fn from_dict(data: Mapping) -> Result<Self> {
        Ok(serde_json::from_value(Value::Object(data))?)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
