//! Ordered registry of gas method calls.
//!
//! Regular methods own a single slot that the latest registration overwrites. Multi-call methods
//! (`_setAccount`, `_setDomainName`) keep every registration; namespaced registrations such as
//! `custom._setAccount` are keyed by their namespace within the method's entries.

use crate::gas::args::CallArgs;
use crate::gas::constants::{MULTI_METHODS, NAMESPACE_SEPARATOR};
use crate::gas::error::{invalid_argument, GasResult};
use crate::gas::snippet::PushStatement;

/// Where a registration lands once its method name has been resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum CallTarget {
    Single(String),
    Multi {
        namespace: Option<String>,
        method: &'static str,
    },
}

impl CallTarget {
    /// Splits `name` on the first namespace separator and matches the method part against the
    /// multi-call set.
    pub(crate) fn resolve(name: &str) -> GasResult<Self> {
        if name.trim().is_empty() {
            return Err(invalid_argument("Method name must not be empty"));
        }

        if let Some(method) = multi_method(name) {
            return Ok(CallTarget::Multi {
                namespace: None,
                method,
            });
        }

        if let Some((namespace, method)) = name.split_once(NAMESPACE_SEPARATOR) {
            if let Some(method) = multi_method(method) {
                if namespace.trim().is_empty() {
                    return Err(invalid_argument(format!(
                        "Namespaced call `{name}` is missing its namespace"
                    )));
                }
                return Ok(CallTarget::Multi {
                    namespace: Some(namespace.to_string()),
                    method,
                });
            }
        }

        Ok(CallTarget::Single(name.to_string()))
    }
}

fn multi_method(name: &str) -> Option<&'static str> {
    MULTI_METHODS.iter().copied().find(|method| *method == name)
}

#[derive(Clone, Debug, PartialEq)]
struct MultiEntry {
    namespace: Option<String>,
    args: Option<CallArgs>,
}

impl MultiEntry {
    fn method_name(&self, method: &str) -> String {
        match &self.namespace {
            Some(namespace) => format!("{namespace}{NAMESPACE_SEPARATOR}{method}"),
            None => method.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum CallSlot {
    Single(Option<CallArgs>),
    Multi(Vec<MultiEntry>),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct CallRegistry {
    slots: Vec<(String, CallSlot)>,
}

impl CallRegistry {
    /// Registry whose first two slots are the (empty) multi-call methods.
    pub(crate) fn with_multi_slots() -> Self {
        Self {
            slots: MULTI_METHODS
                .iter()
                .map(|method| (method.to_string(), CallSlot::Multi(Vec::new())))
                .collect(),
        }
    }

    pub(crate) fn register(&mut self, target: CallTarget, args: Option<CallArgs>) {
        match target {
            CallTarget::Single(name) => match self.position(&name) {
                Some(index) => {
                    log::debug!("overwriting previously registered `{name}` call");
                    self.slots[index].1 = CallSlot::Single(args);
                }
                None => {
                    log::trace!("registering `{name}` call");
                    self.slots.push((name, CallSlot::Single(args)));
                }
            },
            CallTarget::Multi { namespace, method } => {
                let entries = self.multi_entries_mut(method);
                let existing = namespace.as_deref().and_then(|namespace| {
                    entries
                        .iter_mut()
                        .find(|entry| entry.namespace.as_deref() == Some(namespace))
                });
                match existing {
                    Some(entry) => {
                        log::debug!("replacing `{}` call", entry.method_name(method));
                        entry.args = args;
                    }
                    None => {
                        let entry = MultiEntry { namespace, args };
                        log::trace!("appending `{}` call", entry.method_name(method));
                        entries.push(entry);
                    }
                }
            }
        }
    }

    /// One statement per single slot and per multi-call entry, in registration order.
    pub(crate) fn statements(&self) -> Vec<PushStatement> {
        let mut statements = Vec::new();
        for (name, slot) in &self.slots {
            match slot {
                CallSlot::Single(args) => {
                    statements.push(PushStatement::new(name.clone(), args.clone()));
                }
                CallSlot::Multi(entries) => statements.extend(
                    entries
                        .iter()
                        .map(|entry| PushStatement::new(entry.method_name(name), entry.args.clone())),
                ),
            }
        }
        statements
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|(slot_name, _)| slot_name == name)
    }

    fn multi_entries_mut(&mut self, method: &str) -> &mut Vec<MultiEntry> {
        let index = match self.position(method) {
            Some(index) => index,
            None => {
                self.slots
                    .push((method.to_string(), CallSlot::Multi(Vec::new())));
                self.slots.len() - 1
            }
        };
        let slot = &mut self.slots[index].1;
        if let CallSlot::Single(_) = slot {
            *slot = CallSlot::Multi(Vec::new());
        }
        match slot {
            CallSlot::Multi(entries) => entries,
            CallSlot::Single(_) => unreachable!("multi-call slot converted above"),
        }
    }
}
