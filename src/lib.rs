#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

//! Resolver for the package.json `imports` field.
//!
//! Maps `#`-prefixed import specifiers to target paths, honoring
//! conditional targets (`import`/`require`, `browser`/`node`, custom
//! conditions) the way Node.js does:
//! - Exact keys (`#foo`)
//! - Directory-prefix keys (`#foo/`)
//! - Wildcard keys (`#foo/*`) with `*` substitution
//! - Conditional objects evaluated in declaration order
//! - Ordered fallback arrays (first resolvable alternative wins)
//!
//! The caller supplies the parsed manifest as a [`serde_json::Value`];
//! this crate never touches the filesystem and keeps no state between
//! calls.
//!
//! ```
//! use serde_json::json;
//! use subpath_imports::{resolve, Options};
//!
//! let pkg = json!({
//!     "name": "demo",
//!     "imports": {
//!         "#utils/*": {
//!             "import": "./esm/utils/*.mjs",
//!             "require": "./cjs/utils/*.js"
//!         }
//!     }
//! });
//!
//! let out = resolve(&pkg, "#utils/math", &Options::default()).unwrap();
//! assert_eq!(out.as_deref(), Some("./esm/utils/math.mjs"));
//! ```

pub mod conditions;
pub mod error;
pub mod imports;
pub mod matcher;
pub mod options;

pub use conditions::{resolve_conditions, ImportValue};
pub use error::ResolveError;
pub use imports::resolve;
pub use matcher::{find_import, ImportMatch, MatchKind};
pub use options::Options;
