//! Argument values attached to a push statement.
//!
//! A call carries no argument, a single scalar, a list of scalars, or a mapping of option names to
//! scalars. Scalars are always emitted single-quoted; lists and option mappings are emitted as a
//! brace-delimited, comma-joined set of quoted values.

use std::fmt::{self, Display, Formatter};

use serde_json::{Number, Value};

use crate::gas::error::{invalid_argument, GasResult};

/// A single argument value.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Text(String),
    Bool(bool),
    Number(Number),
}

impl Scalar {
    pub(crate) fn from_json(value: &Value, method: &str) -> GasResult<Self> {
        match value {
            Value::String(text) => Ok(Scalar::Text(text.clone())),
            Value::Bool(flag) => Ok(Scalar::Bool(*flag)),
            Value::Number(number) => Ok(Scalar::Number(number.clone())),
            other => Err(invalid_argument(format!(
                "`{method}` expects scalar arguments, got {}",
                json_kind(other)
            ))),
        }
    }

    fn quoted(&self) -> String {
        format!("'{self}'")
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(text) => f.write_str(text),
            Scalar::Bool(flag) => write!(f, "{flag}"),
            Scalar::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(Number::from(value))
    }
}

/// Arguments of a registered call.
#[derive(Clone, Debug, PartialEq)]
pub enum CallArgs {
    Scalar(Scalar),
    List(Vec<Scalar>),
    /// Option name to value, in registration order.
    Options(Vec<(String, Scalar)>),
}

impl CallArgs {
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        CallArgs::List(items.into_iter().map(Into::into).collect())
    }

    pub fn options<I, K, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: Into<Scalar>,
    {
        CallArgs::Options(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Converts a JSON argument. `null` means the call takes no argument; anything nested deeper
    /// than a flat array or object is rejected.
    pub(crate) fn from_json(value: &Value, method: &str) -> GasResult<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::Array(items) => items
                .iter()
                .map(|item| Scalar::from_json(item, method))
                .collect::<GasResult<Vec<_>>>()
                .map(|items| Some(CallArgs::List(items))),
            Value::Object(map) => map
                .iter()
                .map(|(key, item)| Ok((key.clone(), Scalar::from_json(item, method)?)))
                .collect::<GasResult<Vec<_>>>()
                .map(|entries| Some(CallArgs::Options(entries))),
            scalar => Scalar::from_json(scalar, method).map(|s| Some(CallArgs::Scalar(s))),
        }
    }
}

impl Display for CallArgs {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CallArgs::Scalar(scalar) => f.write_str(&scalar.quoted()),
            CallArgs::List(items) => write_set(f, items.iter()),
            CallArgs::Options(entries) => write_set(f, entries.iter().map(|(_, value)| value)),
        }
    }
}

fn write_set<'a>(f: &mut Formatter<'_>, items: impl Iterator<Item = &'a Scalar>) -> fmt::Result {
    let joined = items.map(Scalar::quoted).collect::<Vec<_>>().join(",");
    write!(f, "{{{joined}}}")
}

impl From<Scalar> for CallArgs {
    fn from(value: Scalar) -> Self {
        CallArgs::Scalar(value)
    }
}

impl From<&str> for CallArgs {
    fn from(value: &str) -> Self {
        CallArgs::Scalar(value.into())
    }
}

impl From<String> for CallArgs {
    fn from(value: String) -> Self {
        CallArgs::Scalar(value.into())
    }
}

impl From<bool> for CallArgs {
    fn from(value: bool) -> Self {
        CallArgs::Scalar(value.into())
    }
}

impl From<i64> for CallArgs {
    fn from(value: i64) -> Self {
        CallArgs::Scalar(value.into())
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
