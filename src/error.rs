use thiserror::Error;

/// Resolution failure for an `imports` lookup.
///
/// Messages mirror Node's own wording so embedders can surface them
/// to users verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The entry specifier was empty.
    #[error("Missing entry name or import path")]
    MissingEntry,

    /// The entry specifier does not begin with `#`.
    #[error("\"{entry}\" is not a valid subpath import; the entry doesn't start with \"#\"")]
    InvalidSubpath { entry: String },

    /// The manifest's `imports` field is a bare string, which can
    /// never contain a matchable key.
    #[error("package.json \"imports\" must be an object and cannot be a string")]
    InvalidImportsShape,

    /// No exact, prefix, or wildcard key matched the entry.
    #[error("Missing \"{entry}\" import in \"{name}\" package")]
    NoMatchingKey { name: String, entry: String },

    /// A key matched but no branch of its value satisfied the allowed
    /// condition set.
    #[error("No known conditions for \"{entry}\" entry in \"{name}\" package")]
    NoSatisfiedCondition { name: String, entry: String },
}
