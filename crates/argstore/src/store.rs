use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;

use crate::coerce;
use crate::error::{ArgError, ArgResult};
use crate::token::{self, Token};

/// Resolved arguments from one parse of an argument vector.
///
/// Built once by [`ArgStore::parse`] (or [`ArgsBuilder`]) and never mutated
/// afterwards, so a store can be shared freely between threads. Parsing again
/// produces a new store; nothing carries over from a previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgStore {
    values: IndexMap<String, String>,
    multi_values: IndexMap<String, Vec<String>>,
    positionals: Vec<String>,
}

impl ArgStore {
    /// Parse an argument vector. The program name must already be stripped.
    pub fn parse<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::default();
        for raw in argv {
            match token::tokenize(raw.as_ref()) {
                Token::Positional(arg) => store.positionals.push(arg.to_string()),
                Token::Flag(entry) => {
                    tracing::trace!(key = entry.key, value = ?entry.value, "flag");
                    // A bare `-flag` is stored as the empty string, which reads as
                    // true but as `0` for integer lookups.
                    store.push_value(entry.key, entry.value.unwrap_or(""));
                }
            }
        }
        store.resolve_negations();
        tracing::debug!(
            flags = store.values.len(),
            positionals = store.positionals.len(),
            "parsed arguments"
        );
        store
    }

    /// Parse the current process arguments, skipping the program name.
    pub fn from_env() -> Self {
        Self::parse(
            std::env::args_os()
                .skip(1)
                .map(|arg| arg.to_string_lossy().into_owned()),
        )
    }

    /// Fill in `-name` for every `-noname` whose positive form was never given.
    ///
    /// All supplied keys are collected before anything is synthesized, so the
    /// outcome does not depend on where `-name` and `-noname` appear.
    fn resolve_negations(&mut self) {
        let synthesized: Vec<(String, &'static str)> = {
            let supplied: HashSet<&str> = self.values.keys().map(String::as_str).collect();
            self.values
                .iter()
                .filter_map(|(key, value)| {
                    let target = token::negated_target(key)?;
                    if supplied.contains(target.as_str()) {
                        tracing::debug!(
                            negated = %key,
                            positive = %target,
                            "positive flag given; ignoring negation"
                        );
                        return None;
                    }
                    Some((target, coerce::from_bool(!coerce::to_bool(value))))
                })
                .collect()
        };

        for (target, value) in synthesized {
            tracing::debug!(key = %target, value, "synthesized from negation");
            self.push_value(&target, value);
        }
    }

    pub(crate) fn push_value(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.multi_values
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }

    /// String value of `key`, or `default` when it was not given.
    pub fn get_arg(&self, key: &str, default: &str) -> String {
        self.get_opt(key).unwrap_or(default).to_string()
    }

    /// Integer value of `key`.
    ///
    /// Returns `default` when the key is absent and `0` when it is present but
    /// not a base-10 integer (including the empty value of a bare `-flag`).
    pub fn get_int_arg(&self, key: &str, default: i64) -> i64 {
        match self.get_opt(key) {
            Some(value) => coerce::to_int_lenient(value),
            None => default,
        }
    }

    /// Whether `key` is present and not `"0"`.
    pub fn get_bool_arg(&self, key: &str) -> bool {
        self.get_bool_arg_or(key, false)
    }

    /// Boolean value of `key`, or `default` when it was not given.
    pub fn get_bool_arg_or(&self, key: &str, default: bool) -> bool {
        match self.get_opt(key) {
            Some(value) => coerce::to_bool(value),
            None => default,
        }
    }

    /// Raw stored value, if any.
    pub fn get_opt(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Integer value of `key`, reporting absence and bad input as errors.
    pub fn try_get_int(&self, key: &str) -> ArgResult<i64> {
        let value = self
            .get_opt(key)
            .ok_or_else(|| ArgError::Missing(key.to_string()))?;
        coerce::to_int(value).ok_or_else(|| ArgError::InvalidInt {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    /// Whether `key` has a value, supplied directly or through negation.
    pub fn is_set(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Every value given for `key`, in order. Empty when absent.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.multi_values
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Keys in the order they were first seen.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Resolved `(key, value)` pairs in the order keys were first seen.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Arguments that did not start with `-`, in order.
    pub fn positionals(&self) -> &[String] {
        self.positionals.as_slice()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parses an argument vector and lets the host program add soft defaults
/// before the store is frozen.
///
/// ```
/// use argstore::ArgsBuilder;
///
/// let mut builder = ArgsBuilder::new(["-nolisten"]);
/// assert!(!builder.soft_set_bool("-listen", true));
/// assert!(builder.soft_set("-port", "8333"));
/// let args = builder.build();
/// assert!(!args.get_bool_arg("-listen"));
/// assert_eq!(args.get_int_arg("-port", 0), 8333);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArgsBuilder {
    store: ArgStore,
}

impl ArgsBuilder {
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            store: ArgStore::parse(argv),
        }
    }

    /// Set `key` to `value` unless it is already set.
    ///
    /// Negation has already been resolved, so `-noname` on the command line
    /// counts as setting `-name`. Returns whether the value was applied.
    pub fn soft_set(&mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> bool {
        let key = key.as_ref();
        if self.store.is_set(key) {
            return false;
        }
        tracing::debug!(key, value = value.as_ref(), "applied soft default");
        self.store.push_value(key, value.as_ref());
        true
    }

    /// Boolean form of [`soft_set`](Self::soft_set).
    pub fn soft_set_bool(&mut self, key: impl AsRef<str>, value: bool) -> bool {
        self.soft_set(key, coerce::from_bool(value))
    }

    pub fn build(self) -> ArgStore {
        self.store
    }
}
