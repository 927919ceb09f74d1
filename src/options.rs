use std::collections::HashSet;

/// Resolution options controlling the allowed condition set.
///
/// `default` is always allowed. Unless `unsafe_mode` is set, the
/// environment pairs are added automatically: `require` or `import`
/// (from `require`), `browser` or `node` (from `browser`). Custom
/// `conditions` are always added.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Prefer `browser` targets over `node` targets.
    pub browser: bool,
    /// Prefer `require` targets over `import` targets.
    pub require: bool,
    /// Additional condition names to allow.
    pub conditions: Vec<String>,
    /// Suppress the automatic `import`/`require` and `browser`/`node`
    /// defaults; only `default` and `conditions` remain allowed.
    pub unsafe_mode: bool,
}

impl Options {
    /// Compute the set of condition names active for one resolution call.
    #[must_use]
    pub fn allowed_conditions(&self) -> HashSet<&str> {
        let mut allowed: HashSet<&str> = HashSet::new();
        allowed.insert("default");
        for condition in &self.conditions {
            allowed.insert(condition.as_str());
        }
        if !self.unsafe_mode {
            allowed.insert(if self.require { "require" } else { "import" });
            allowed.insert(if self.browser { "browser" } else { "node" });
        }
        allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allowed_set() {
        let opts = Options::default();
        let allowed = opts.allowed_conditions();
        assert!(allowed.contains("default"));
        assert!(allowed.contains("import"));
        assert!(allowed.contains("node"));
        assert!(!allowed.contains("require"));
        assert!(!allowed.contains("browser"));
    }

    #[test]
    fn test_require_and_browser_flip_pairs() {
        let opts = Options {
            browser: true,
            require: true,
            ..Options::default()
        };
        let allowed = opts.allowed_conditions();
        assert!(allowed.contains("require"));
        assert!(allowed.contains("browser"));
        assert!(!allowed.contains("import"));
        assert!(!allowed.contains("node"));
    }

    #[test]
    fn test_unsafe_mode_keeps_only_default_and_custom() {
        let opts = Options {
            browser: true,
            require: true,
            conditions: vec!["production".into()],
            unsafe_mode: true,
        };
        let allowed = opts.allowed_conditions();
        assert!(allowed.contains("default"));
        assert!(allowed.contains("production"));
        assert!(!allowed.contains("import"));
        assert!(!allowed.contains("require"));
        assert!(!allowed.contains("node"));
        assert!(!allowed.contains("browser"));
    }

    #[test]
    fn test_custom_conditions_always_added() {
        let opts = Options {
            conditions: vec!["development".into(), "worker".into()],
            ..Options::default()
        };
        let allowed = opts.allowed_conditions();
        assert!(allowed.contains("development"));
        assert!(allowed.contains("worker"));
    }
}
