//! Conversions between [`Value`] and native or foreign representations.

use thiserror::Error;

use super::{Mapping, Number, Value};

/// A value that has no faithful representation in the target format.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot represent {found} at '{path}' in {format}")]
pub struct ValueConversionError {
    /// Dotted path of the offending node (empty for the root).
    pub path: String,
    /// Description of the value that could not be converted.
    pub found: String,
    /// Name of the target format.
    pub format: &'static str,
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(Number::Int(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(Number::Int(i64::from(value)))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(Number::Int(i64::from(value)))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(Number::Float(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::Sequence(value)
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Self::Mapping(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(feature = "serde_json")]
fn child_path(parent: &str, segment: &str) -> String {
    if parent.is_empty() {
        segment.to_owned()
    } else {
        format!("{parent}.{segment}")
    }
}

#[cfg(feature = "serde_json")]
mod json {
    use serde_json::Value as JsonValue;

    use super::{Number, Value, ValueConversionError, child_path};

    impl From<JsonValue> for Value {
        fn from(value: JsonValue) -> Self {
            match value {
                JsonValue::Null => Self::Null,
                JsonValue::Bool(flag) => Self::Bool(flag),
                JsonValue::Number(number) => Self::Number(
                    number
                        .as_i64()
                        .map(Number::Int)
                        .or_else(|| number.as_u64().map(Number::UInt))
                        .unwrap_or_else(|| Number::Float(number.as_f64().unwrap_or(f64::NAN))),
                ),
                JsonValue::String(text) => Self::Text(text),
                JsonValue::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
                JsonValue::Object(map) => {
                    Self::Mapping(map.into_iter().map(|(key, item)| (key, Self::from(item))).collect())
                }
            }
        }
    }

    impl TryFrom<Value> for JsonValue {
        type Error = ValueConversionError;

        fn try_from(value: Value) -> Result<Self, Self::Error> {
            to_json(value, "")
        }
    }

    fn to_json(value: Value, path: &str) -> Result<JsonValue, ValueConversionError> {
        Ok(match value {
            Value::Null => JsonValue::Null,
            Value::Bool(flag) => JsonValue::Bool(flag),
            Value::Number(Number::Int(int)) => JsonValue::from(int),
            Value::Number(Number::UInt(uint)) => JsonValue::from(uint),
            Value::Number(Number::Float(float)) => serde_json::Number::from_f64(float)
                .map(JsonValue::Number)
                .ok_or_else(|| ValueConversionError {
                    path: path.to_owned(),
                    found: format!("non-finite float {float}"),
                    format: "JSON",
                })?,
            Value::Text(text) => JsonValue::String(text),
            Value::Sequence(items) => JsonValue::Array(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| to_json(item, &format!("{path}[{index}]")))
                    .collect::<Result<_, ValueConversionError>>()?,
            ),
            Value::Mapping(map) => JsonValue::Object(
                map.into_iter()
                    .map(|(key, item)| {
                        let nested = to_json(item, &child_path(path, &key))?;
                        Ok((key, nested))
                    })
                    .collect::<Result<_, ValueConversionError>>()?,
            ),
        })
    }
}

#[cfg(feature = "toml")]
mod toml_value {
    use super::{Number, Value};

    impl From<toml::Value> for Value {
        fn from(value: toml::Value) -> Self {
            match value {
                toml::Value::String(text) => Self::Text(text),
                toml::Value::Integer(int) => Self::Number(Number::Int(int)),
                toml::Value::Float(float) => Self::Number(Number::Float(float)),
                toml::Value::Boolean(flag) => Self::Bool(flag),
                toml::Value::Datetime(datetime) => Self::Text(datetime.to_string()),
                toml::Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
                toml::Value::Table(table) => Self::Mapping(
                    table
                        .into_iter()
                        .map(|(key, item)| (key, Self::from(item)))
                        .collect(),
                ),
            }
        }
    }
}
