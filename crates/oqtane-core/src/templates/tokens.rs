//! Bracket-token substitution for template paths and file contents.
//!
//! A [`TokenTable`] maps literal keys such as `[Owner]` to replacement values.
//! It is built once per command by [`generate_tokens`] and passed by reference
//! into the two substitution functions:
//!
//! - [`replace_tokens`] for file contents, which additionally expands every
//!   `[Guid]` into a freshly generated identifier.
//! - [`replace_tokens_in_path`] for file and directory paths, which leaves
//!   `[Guid]` alone so that paths are a pure function of the table.
//!
//! Table substitution is a single left-to-right scan of the input. Inserted
//! values are never scanned for table keys again, so a value that happens to
//! contain `[Module]` comes out verbatim. Where two keys could match at the
//! same position the one inserted into the table first wins. In file
//! contents, `[Guid]` is expanded afterwards over the whole result, values
//! included.
//!
//! ```ignore
//! use oqtane_core::templates::tokens;
//!
//! let table = tokens::generate_tokens("Acme", "Blog", "", "net10.0");
//! let path = tokens::replace_tokens_in_path("[Owner].[Module].Client", &table);
//! assert_eq!(path, "Acme.Blog.Client");
//! ```

use chrono::{Local, NaiveDate};
use uuid::Uuid;

pub const OWNER: &str = "[Owner]";
pub const MODULE: &str = "[Module]";
pub const DESCRIPTION: &str = "[Description]";
pub const YEAR: &str = "[Year]";
pub const DATE: &str = "[Date]";
pub const FRAMEWORK: &str = "[Framework]";

/// Expanded per occurrence by [`replace_tokens`]; never looked up in a table.
pub const GUID: &str = "[Guid]";

/// Ordered token key to value mapping.
///
/// Insertion order is kept because it decides which key wins when two keys
/// match at the same position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenTable {
    entries: Vec<(String, String)>,
}

impl TokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update `key`. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TokenTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}

/// Build the standard six-entry table using today's local date.
pub fn generate_tokens(owner: &str, module: &str, description: &str, framework: &str) -> TokenTable {
    generate_tokens_on(Local::now().date_naive(), owner, module, description, framework)
}

/// Build the standard table for a fixed `date`.
pub fn generate_tokens_on(
    date: NaiveDate,
    owner: &str,
    module: &str,
    description: &str,
    framework: &str,
) -> TokenTable {
    TokenTable::from_iter([
        (OWNER, owner.to_string()),
        (MODULE, module.to_string()),
        (DESCRIPTION, description.to_string()),
        (YEAR, date.format("%Y").to_string()),
        (DATE, date.format("%Y-%m-%d").to_string()),
        (FRAMEWORK, framework.to_string()),
    ])
}

/// Substitute tokens in file contents, expanding each `[Guid]` to a new
/// lowercase hyphenated UUID.
pub fn replace_tokens(text: &str, table: &TokenTable) -> String {
    if text.is_empty() {
        return String::new();
    }
    substitute(text, table, true)
}

/// Substitute tokens in a path. `[Guid]` is kept as-is.
pub fn replace_tokens_in_path(path: &str, table: &TokenTable) -> String {
    if path.is_empty() {
        return String::new();
    }
    substitute(path, table, false)
}

fn substitute(text: &str, table: &TokenTable, expand_guids: bool) -> String {
    // Empty keys would match everywhere and [Guid] is reserved.
    let keys: Vec<(&str, &str)> = table
        .iter()
        .filter(|(key, _)| !key.is_empty() && *key != GUID)
        .collect();

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    'scan: while !rest.is_empty() {
        for (key, value) in &keys {
            if let Some(tail) = rest.strip_prefix(key) {
                out.push_str(value);
                rest = tail;
                continue 'scan;
            }
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }

    if expand_guids {
        expand_guid_tokens(&out)
    } else {
        out
    }
}

/// Replace every `[Guid]` left after table substitution, including ones
/// that arrived inside a value, with its own UUID.
fn expand_guid_tokens(text: &str) -> String {
    let mut parts = text.split(GUID);
    let mut out = String::with_capacity(text.len());
    if let Some(first) = parts.next() {
        out.push_str(first);
    }
    for part in parts {
        out.push_str(&Uuid::new_v4().hyphenated().to_string());
        out.push_str(part);
    }
    out
}
