//! Values received during one parse cycle.
//!
//! Options are keyed by long name (or by the raw name for options nobody
//! defined). Positional arguments keep their order. Keys can be frozen so a
//! later, lower-precedence source (the config file) cannot modify them.

use std::collections::{BTreeMap, BTreeSet};

use crate::constants::{FLAG_PRESENT, VALUE_SEPARATOR};
use crate::util::join_null;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentStore {
    options: BTreeMap<String, String>,
    positionals: Vec<String>,
    frozen: BTreeSet<String>,
}

impl ArgumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.options.clear();
        self.positionals.clear();
        self.frozen.clear();
    }

    /// Protect every key present now from further writes.
    pub fn freeze(&mut self) {
        self.frozen.extend(self.options.keys().cloned());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Mark a flag present.
    pub fn save_flag(&mut self, key: &str) {
        if !self.frozen.contains(key) {
            self.options.insert(key.to_owned(), FLAG_PRESENT.to_owned());
        }
    }

    /// Store `value` under `key` unless the key already has one.
    pub fn save_first(&mut self, key: &str, value: &str) {
        if !self.options.contains_key(key) {
            self.options.insert(key.to_owned(), value.to_owned());
        }
    }

    /// Append `value` to the accumulated value of `key`.
    pub fn save_repeated(&mut self, key: &str, value: &str) {
        if self.frozen.contains(key) {
            return;
        }
        match self.options.get_mut(key) {
            Some(slot) => {
                slot.push(VALUE_SEPARATOR);
                slot.push_str(value);
            }
            None => {
                self.options.insert(key.to_owned(), value.to_owned());
            }
        }
    }

    pub fn push_positional(&mut self, arg: &str) {
        self.positionals.push(arg.to_owned());
    }

    /// Remove the first `n` positional arguments.
    pub fn drain_positionals(&mut self, n: usize) {
        let n = n.min(self.positionals.len());
        self.positionals.drain(..n);
    }

    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// All positional arguments joined by NUL.
    pub fn joined_positionals(&self) -> String {
        join_null(&self.positionals)
    }
}
