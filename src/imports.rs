//! Public entry point for `imports` resolution.

use crate::conditions::resolve_conditions;
use crate::error::ResolveError;
use crate::matcher::{find_import, MatchKind};
use crate::options::Options;
use serde_json::Value;
use tracing::warn;

/// Resolve a `#`-prefixed entry against the manifest's `imports` map.
///
/// Returns `Ok(None)` when the manifest carries no `imports` field at
/// all; every other miss is an error. The manifest is read-only input:
/// only `name` (for error messages) and `imports` are consulted.
pub fn resolve(
    manifest: &Value,
    entry: &str,
    options: &Options,
) -> Result<Option<String>, ResolveError> {
    let imports = match manifest.get("imports") {
        None | Some(Value::Null) => return Ok(None),
        Some(imports) => imports,
    };

    let name = manifest
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default();

    if entry.is_empty() {
        return Err(ResolveError::MissingEntry);
    }
    if !entry.starts_with('#') {
        return Err(ResolveError::InvalidSubpath {
            entry: entry.to_string(),
        });
    }
    if imports.is_string() {
        return Err(ResolveError::InvalidImportsShape);
    }

    let no_matching_key = || ResolveError::NoMatchingKey {
        name: name.to_string(),
        entry: entry.to_string(),
    };

    // non-object shapes (array, number, bool) contain no matchable keys
    let map = imports.as_object().ok_or_else(no_matching_key)?;

    for key in map.keys() {
        if !key.starts_with('#') {
            warn!(key = %key, "package.json \"imports\" key does not start with \"#\"");
        }
    }

    let found = find_import(map, entry).ok_or_else(no_matching_key)?;

    let allowed = options.allowed_conditions();
    let target =
        resolve_conditions(found.value, &allowed).ok_or_else(|| ResolveError::NoSatisfiedCondition {
            name: name.to_string(),
            entry: entry.to_string(),
        })?;

    let resolved = match found.kind {
        MatchKind::Exact => target.to_string(),
        MatchKind::DirPrefix { remainder } => format!("{target}{remainder}"),
        MatchKind::Wildcard { remainder } => target.replacen('*', remainder, 1),
    };

    Ok(Some(resolved))
}
