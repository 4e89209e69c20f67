//! Merge configuration.

/// Settings for one merge run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    /// Extensions (without the dot) that are skipped instead of rejected.
    pub ignored_extensions: Vec<String>,
    /// Pretty-print the artifact instead of writing a single line.
    pub pretty: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            ignored_extensions: vec!["md".to_string()],
            pretty: false,
        }
    }
}

impl MergeOptions {
    /// Adds an extension to the ignore list.
    #[must_use]
    pub fn ignore_extension(mut self, extension: impl Into<String>) -> Self {
        self.ignored_extensions.push(extension.into());
        self
    }

    /// Enable or disable pretty output.
    #[must_use]
    pub fn with_pretty(mut self, enable: bool) -> Self {
        self.pretty = enable;
        self
    }

    pub(crate) fn is_ignored(&self, extension: &str) -> bool {
        self.ignored_extensions
            .iter()
            .any(|ignored| ignored.eq_ignore_ascii_case(extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ignores_markdown() {
        let options = MergeOptions::default();
        assert!(options.is_ignored("md"));
        assert!(options.is_ignored("MD"));
        assert!(!options.is_ignored("txt"));
        assert!(!options.pretty);
    }

    #[test]
    fn test_builder() {
        let options = MergeOptions::default()
            .ignore_extension("txt")
            .with_pretty(true);
        assert!(options.is_ignored("txt"));
        assert!(options.pretty);
    }
}
