//! Import key matching.
//!
//! Locates the `imports` key that covers an entry specifier. Three key
//! shapes exist, tried as three independent scans so the tie-break
//! rules stay auditable: exact keys beat directory-prefix keys beat
//! wildcard keys regardless of declaration order, while within one
//! scan the manifest's own key order decides.

use serde_json::{Map, Value};

/// How an entry matched its key, with the captured remainder where the
/// key shape produces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind<'a> {
    /// The entry equals the key verbatim.
    Exact,
    /// The key ends in `/`; the remainder is appended to the resolved
    /// target verbatim.
    DirPrefix { remainder: &'a str },
    /// The key ends in `*`; the remainder replaces the first `*` in
    /// the resolved target.
    Wildcard { remainder: &'a str },
}

/// A matched `imports` entry: the key, its raw (possibly conditional)
/// value, and how the entry matched.
#[derive(Debug, Clone, Copy)]
pub struct ImportMatch<'a> {
    pub key: &'a str,
    pub value: &'a Value,
    pub kind: MatchKind<'a>,
}

/// Find the `imports` key matching `entry`, or `None`.
#[must_use]
pub fn find_import<'a>(imports: &'a Map<String, Value>, entry: &'a str) -> Option<ImportMatch<'a>> {
    if let Some((key, value)) = imports.get_key_value(entry) {
        return Some(ImportMatch {
            key,
            value,
            kind: MatchKind::Exact,
        });
    }

    for (key, value) in imports {
        if key.ends_with('/') && entry.starts_with(key.as_str()) {
            return Some(ImportMatch {
                key,
                value,
                kind: MatchKind::DirPrefix {
                    remainder: &entry[key.len()..],
                },
            });
        }
    }

    for (key, value) in imports {
        if let Some(prefix) = key.strip_suffix('*') {
            // an empty remainder never triggers a wildcard match
            if entry.starts_with(prefix) && entry.len() > prefix.len() {
                return Some(ImportMatch {
                    key,
                    value,
                    kind: MatchKind::Wildcard {
                        remainder: &entry[prefix.len()..],
                    },
                });
            }
        }
    }

    None
}
