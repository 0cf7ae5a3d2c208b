/// Subject prefixes that mark value, statement and reference nodes. Such
/// subjects are only reached through other subjects, never walked as roots.
pub const DEFAULT_EXCLUDED_ROOT_PREFIXES: [&str; 3] = ["v:", "s:", "ref:"];

/// Knobs for a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub excluded_root_prefixes: Vec<String>,
}

impl ConvertOptions {
    /// Options with the given excluded prefixes instead of the defaults.
    pub fn with_excluded_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ConvertOptions {
            excluded_root_prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `subject` may start a traversal.
    pub fn is_root(&self, subject: &str) -> bool {
        !self
            .excluded_root_prefixes
            .iter()
            .any(|prefix| subject.starts_with(prefix.as_str()))
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions::with_excluded_prefixes(DEFAULT_EXCLUDED_ROOT_PREFIXES)
    }
}
