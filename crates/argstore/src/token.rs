//! Splitting raw argument tokens into keys and values.

/// One raw argument, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A flag, with its key normalized to a single leading `-`.
    Flag(ParsedEntry<'a>),
    /// Anything not starting with `-`.
    Positional(&'a str),
}

/// A flag split into its normalized key and optional `=value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedEntry<'a> {
    pub key: &'a str,
    pub value: Option<&'a str>,
}

/// Classify and split a single token.
///
/// `--name` and `-name` both yield the key `-name`. The value is everything
/// after the first `=`, which may be empty or contain more `=` characters.
/// Key contents are not validated.
pub fn tokenize(raw: &str) -> Token<'_> {
    if !raw.starts_with('-') {
        return Token::Positional(raw);
    }

    // `--name` -> `-name`; the slice keeps exactly one leading dash.
    let normalized = if raw.starts_with("--") { &raw[1..] } else { raw };

    let entry = match normalized.split_once('=') {
        Some((key, value)) => ParsedEntry {
            key,
            value: Some(value),
        },
        None => ParsedEntry {
            key: normalized,
            value: None,
        },
    };
    Token::Flag(entry)
}

/// The positive key a negated key stands for.
///
/// `-noname` maps to `-name`. Only one leading `no` is interpreted, so
/// `-nononame` maps to `-noname`. A bare `-no` negates nothing.
pub fn negated_target(key: &str) -> Option<String> {
    let name = key.strip_prefix("-no")?;
    if name.is_empty() {
        return None;
    }
    Some(format!("-{name}"))
}
