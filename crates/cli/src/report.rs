use std::fmt;

use argstore::ArgStore;
use serde::Serialize;

/// Result of a single typed lookup.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lookup {
    pub key: String,
    pub present: bool,
    pub value: TypedValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    String(String),
    Int(i64),
    Bool(bool),
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Human-readable listing: one `key=value` line per flag, then positionals.
pub fn render_text(store: &ArgStore) -> String {
    let mut out = String::new();
    for (key, value) in store.iter() {
        let all = store.get_all(key);
        if all.len() > 1 {
            out.push_str(&format!("{key}={value}  (given {} times)\n", all.len()));
        } else {
            out.push_str(&format!("{key}={value}\n"));
        }
    }
    for arg in store.positionals() {
        out.push_str(&format!("positional {arg}\n"));
    }
    out
}
