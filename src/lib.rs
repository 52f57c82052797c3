//! Agent Dashboard - style-token resolution and component rendering for
//! generated dashboards
//!
//! A dashboard document pairs a style spec (one archetype per style axis)
//! with a content tree produced by a planner. This library resolves the spec
//! into Tailwind utility-class tokens, renders the tree through a closed
//! component registry, and serializes the result as HTML.
//!
//! # Example
//!
//! ```rust
//! use agent_dashboard::render;
//!
//! let html = render(r#"{
//!     "style": {"layout": "sidebar-main", "tone": "minimal", "shape": "rounded",
//!               "density": "comfortable", "typography": "modern", "color": "blue"},
//!     "content": {"componentName": "Badge", "props": {"label": "Active", "variant": "success"}}
//! }"#).unwrap();
//! assert!(html.contains("Active"));
//! ```

pub mod coerce;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod renderer;
pub mod tokens;

pub use coerce::{CoercedValue, CoercionKind, CoercionLimits};
pub use components::{ComponentKind, Registry, UnknownComponentError};
pub use config::{ConfigError, ConfigFile};
pub use content::{ContentNode, DashboardDocument, Props, RawProps};
pub use error::ContentError;
pub use renderer::{render_html, Fragment, HtmlConfig};
pub use tokens::{
    ArchetypeFallback, InvalidSpecError, RawStyleSpec, ResolvedTokens, StyleSpec, TokenResolver,
    UnknownArchetypePolicy,
};

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// The document is not valid JSON or has no usable content tree
    #[error(transparent)]
    Content(#[from] ContentError),

    /// The style spec names an unknown archetype
    #[error("invalid style spec: {0}")]
    Spec(#[from] InvalidSpecError),

    /// The content tree names a component the registry does not know
    #[error("render error: {0}")]
    Component(#[from] UnknownComponentError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// HTML output configuration
    pub html: HtmlConfig,
    /// Handling of unknown archetype keys
    pub policy: UnknownArchetypePolicy,
    /// Axes set here replace the document's own choice
    pub style_overrides: RawStyleSpec,
    /// Bounds applied when coercing list-shaped props
    pub limits: CoercionLimits,
    /// Debug mode: annotate elements with their component and trace the resolved style
    pub debug: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTML configuration
    pub fn with_html(mut self, html: HtmlConfig) -> Self {
        self.html = html;
        self
    }

    /// Set the unknown-archetype policy
    pub fn with_policy(mut self, policy: UnknownArchetypePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set per-axis style overrides
    pub fn with_style_overrides(mut self, overrides: RawStyleSpec) -> Self {
        self.style_overrides = overrides;
        self
    }

    /// Set the coercion limits
    pub fn with_limits(mut self, limits: CoercionLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Render a JSON dashboard document to HTML with default configuration
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, RenderConfig::default())
}

/// Render a JSON dashboard document to HTML with custom configuration
///
/// # Example
///
/// ```rust
/// use agent_dashboard::{render_with_config, HtmlConfig, RenderConfig, UnknownArchetypePolicy};
///
/// let config = RenderConfig::new()
///     .with_policy(UnknownArchetypePolicy::Fallback)
///     .with_html(HtmlConfig::new().with_standalone(false));
///
/// let html = render_with_config(
///     r#"{"style": {"tone": "neon"}, "content": {"componentName": "Text", "props": {"content": "hi"}}}"#,
///     config,
/// ).unwrap();
/// assert!(html.starts_with("<p"));
/// ```
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, RenderError> {
    let doc = DashboardDocument::from_json(source)?;
    render_document(&doc, &config)
}

/// Resolve a document's style, with `config`'s overrides and policy applied
pub fn resolve_tokens(
    doc: &DashboardDocument,
    config: &RenderConfig,
) -> Result<(ResolvedTokens, Vec<ArchetypeFallback>), InvalidSpecError> {
    let style = doc.style.merged_with(&config.style_overrides);
    TokenResolver::shared()
        .with_policy(config.policy)
        .resolve_with_report(&style)
}

/// Render a parsed document to HTML
pub fn render_document(doc: &DashboardDocument, config: &RenderConfig) -> Result<String, RenderError> {
    let (tokens, fallbacks) = resolve_tokens(doc, config)?;

    if config.debug {
        eprintln!("=== Resolved Style ===");
        eprintln!("{:?}", tokens.spec);
        for fallback in &fallbacks {
            eprintln!(
                "{}: {:?} -> {}",
                fallback.axis, fallback.value, fallback.substitute
            );
        }
        eprintln!("======================");
    }

    let registry = Registry::new().with_limits(config.limits);
    let fragments = render_tree(&doc.content, &tokens, &registry)?;

    let html = config.html.clone().with_annotate(config.html.annotate || config.debug);
    Ok(render_html(&fragments, &tokens, &html))
}

/// Render root nodes in order; the first unknown component aborts the pass
pub fn render_tree(
    nodes: &[ContentNode],
    tokens: &ResolvedTokens,
    registry: &Registry,
) -> Result<Vec<Fragment>, UnknownComponentError> {
    nodes.iter().map(|node| registry.render(node, tokens)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLE: &str = r#""layout": "top-nav", "tone": "minimal", "shape": "rounded", "density": "comfortable", "typography": "modern", "color": "blue""#;

    fn document(style: &str, content: &str) -> String {
        format!(r#"{{"style": {{{style}}}, "content": {content}}}"#)
    }

    fn fragment_config() -> RenderConfig {
        RenderConfig::new().with_html(
            HtmlConfig::new()
                .with_standalone(false)
                .with_pretty_print(false),
        )
    }

    #[test]
    fn test_render_standalone_document() {
        let html = render(&document(
            STYLE,
            r#"{"componentName": "Heading", "props": {"text": "Usage"}}"#,
        ))
        .unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Usage</h2>"));
    }

    #[test]
    fn test_render_unknown_tone_fails_by_default() {
        let style = STYLE.replace(r#""tone": "minimal""#, r#""tone": "neon""#);
        let err = render(&document(&style, "[]")).unwrap_err();
        assert!(matches!(err, RenderError::Spec(InvalidSpecError::UnknownArchetype { .. })));
        assert!(err.to_string().contains("'neon'"));
    }

    #[test]
    fn test_render_missing_style_fails_by_default() {
        let err = render(r#"{"content": []}"#).unwrap_err();
        assert!(matches!(err, RenderError::Spec(InvalidSpecError::MissingArchetype { .. })));
    }

    #[test]
    fn test_render_unknown_tone_with_fallback() {
        let config = fragment_config().with_policy(UnknownArchetypePolicy::Fallback);
        let html = render_with_config(
            r#"{"style": {"tone": "neon"}, "content": {"componentName": "Text", "props": {"content": "ok"}}}"#,
            config,
        )
        .unwrap();
        assert!(html.contains("text-gray-900"));
    }

    #[test]
    fn test_render_unknown_component() {
        let err = render(&document(STYLE, r#"[{"componentName": "Chart"}]"#)).unwrap_err();
        match err {
            RenderError::Component(err) => assert_eq!(err.name, "Chart"),
            other => panic!("expected component error, got {other:?}"),
        }
    }

    #[test]
    fn test_render_syntax_error() {
        let err = render("{\"content\": ").unwrap_err();
        assert!(matches!(err, RenderError::Content(ContentError::Syntax { .. })));
    }

    #[test]
    fn test_style_overrides_win() {
        let source = document(&STYLE.replace(r#""blue""#, r#""rose""#), "[]");
        let doc = DashboardDocument::from_json(&source).unwrap();
        let config = RenderConfig::new().with_style_overrides(
            RawStyleSpec::default().with(tokens::Axis::Color, "teal"),
        );
        let (resolved, fallbacks) = resolve_tokens(&doc, &config).unwrap();
        assert_eq!(resolved.spec.color, tokens::ColorKey::Teal);
        assert!(fallbacks.is_empty());
    }

    #[test]
    fn test_debug_annotates_components() {
        let html = render_with_config(
            &document(STYLE, r#"{"componentName": "Badge", "props": {"label": "New"}}"#),
            fragment_config().with_debug(true),
        )
        .unwrap();
        assert!(html.starts_with(r#"<span data-component="Badge""#));
    }
}
