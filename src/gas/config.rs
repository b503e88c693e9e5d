//! Declarative tag configuration.
//!
//! `TagConfig` mirrors the builder's state as a JSON document so a rendering pipeline can keep its
//! tracking setup in a settings file:
//!
//! ```json
//! {
//!   "scriptUrl": "//cdn.example.com/gas.min.js",
//!   "accounts": { "0": "UA-1111-1", "custom": "UA-2222-2" },
//!   "domains": [".a.com", ".b.com"],
//!   "calls": ["_trackPageview", { "_gasTrackYoutube": { "force": true } }]
//! }
//! ```
//!
//! The batch helpers in this module also back [`GasTag::push_json`](crate::gas::GasTag::push_json).
//! Every batch is converted up front so a malformed entry never leaves a builder half-updated.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::gas::api::{Account, MethodSpec};
use crate::gas::args::{json_kind, CallArgs};
use crate::gas::error::{invalid_argument, GasResult};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TagConfig {
    pub script_url: Option<String>,
    /// A single id, an array of ids, or an object of namespace to id.
    pub accounts: Option<Value>,
    /// A single domain or an array of domains.
    pub domains: Option<Value>,
    /// Calls in the batch form accepted by `GasTag::push_json`.
    pub calls: Option<Value>,
}

impl TagConfig {
    pub fn from_json_str(input: &str) -> GasResult<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Accounts section of a configuration, preserving whether it named one or several accounts.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum AccountsSpec {
    One(Account),
    Batch(Vec<Account>),
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum DomainsSpec {
    One(String),
    Batch(Vec<String>),
}

pub(crate) fn parse_accounts(value: &Value) -> GasResult<AccountsSpec> {
    match value {
        Value::String(id) => Ok(AccountsSpec::One(Account::new(id.clone()))),
        Value::Array(items) => items
            .iter()
            .map(|item| expect_string(item, "account").map(Account::new))
            .collect::<GasResult<Vec<_>>>()
            .map(AccountsSpec::Batch),
        Value::Object(map) => map
            .iter()
            .map(|(key, item)| {
                let id = expect_string(item, "account")?;
                Ok(match namespace_key(key) {
                    Some(namespace) => Account::namespaced(namespace, id),
                    None => Account::new(id),
                })
            })
            .collect::<GasResult<Vec<_>>>()
            .map(AccountsSpec::Batch),
        other => Err(invalid_argument(format!(
            "Accounts must be a string, an array or an object, got {}",
            json_kind(other)
        ))),
    }
}

pub(crate) fn parse_domains(value: &Value) -> GasResult<DomainsSpec> {
    match value {
        Value::String(domain) => Ok(DomainsSpec::One(domain.clone())),
        Value::Array(items) => items
            .iter()
            .map(|item| expect_string(item, "domain"))
            .collect::<GasResult<Vec<_>>>()
            .map(DomainsSpec::Batch),
        other => Err(invalid_argument(format!(
            "Domains must be a string or an array, got {}",
            json_kind(other)
        ))),
    }
}

/// Accepts `{"name": args, ...}`, a bare method name, or an array mixing bare names and
/// `{"name": args}` objects. Numeric object keys carry a bare method name as their value.
pub(crate) fn parse_calls(value: &Value) -> GasResult<Vec<MethodSpec>> {
    match value {
        Value::String(name) => Ok(vec![MethodSpec::bare(name.clone())]),
        Value::Object(map) => parse_call_object(map),
        Value::Array(items) => {
            let mut specs = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(name) => specs.push(MethodSpec::bare(name.clone())),
                    Value::Object(map) => specs.extend(parse_call_object(map)?),
                    other => {
                        return Err(invalid_argument(format!(
                            "Call batch entries must be method names or objects, got {}",
                            json_kind(other)
                        )))
                    }
                }
            }
            Ok(specs)
        }
        other => Err(invalid_argument(format!(
            "Calls must be a method name, an array or an object, got {}",
            json_kind(other)
        ))),
    }
}

fn parse_call_object(map: &Map<String, Value>) -> GasResult<Vec<MethodSpec>> {
    map.iter()
        .map(|(key, value)| {
            if namespace_key(key).is_none() {
                let name = expect_string(value, "positional call")?;
                return Ok(MethodSpec::bare(name));
            }
            Ok(MethodSpec {
                name: key.clone(),
                args: CallArgs::from_json(value, key)?,
            })
        })
        .collect()
}

/// Numeric keys are positional and carry no namespace.
fn namespace_key(key: &str) -> Option<&str> {
    if key.parse::<u64>().is_ok() {
        None
    } else {
        Some(key)
    }
}

fn expect_string(value: &Value, what: &str) -> GasResult<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        other => Err(invalid_argument(format!(
            "Expected {what} to be a string, got {}",
            json_kind(other)
        ))),
    }
}
