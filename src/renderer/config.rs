//! Configuration for HTML rendering

use serde::Deserialize;

/// Configuration options for HTML output
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    /// Whether to wrap the fragments in a complete HTML document
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Document title (standalone output only)
    pub title: String,

    /// Whether to load the Tailwind play CDN script (standalone output only)
    pub tailwind_cdn: bool,

    /// Emit `data-component` attributes naming the component behind each element
    pub annotate: bool,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            standalone: true,
            pretty_print: true,
            title: "Dashboard".to_string(),
            tailwind_cdn: true,
            annotate: false,
        }
    }
}

impl HtmlConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether output is a standalone document
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set whether to include the Tailwind CDN script
    pub fn with_tailwind_cdn(mut self, include: bool) -> Self {
        self.tailwind_cdn = include;
        self
    }

    /// Set whether to annotate elements with their component name
    pub fn with_annotate(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HtmlConfig::default();
        assert!(config.standalone);
        assert!(config.pretty_print);
        assert_eq!(config.title, "Dashboard");
        assert!(config.tailwind_cdn);
        assert!(!config.annotate);
    }

    #[test]
    fn test_builder_pattern() {
        let config = HtmlConfig::new()
            .with_standalone(false)
            .with_pretty_print(false)
            .with_title("Ops")
            .with_tailwind_cdn(false)
            .with_annotate(true);

        assert!(!config.standalone);
        assert!(!config.pretty_print);
        assert_eq!(config.title, "Ops");
        assert!(!config.tailwind_cdn);
        assert!(config.annotate);
    }
}
