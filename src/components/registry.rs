//! Component registry: closed mapping from component names to renderers

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::coerce::CoercionLimits;
use crate::content::{ContentNode, Props, RawProps};
use crate::renderer::Fragment;
use crate::tokens::ResolvedTokens;

use super::{cards, data, primitives, shell};

/// A content node named a component the registry does not know
///
/// This signals a version mismatch between the content producer and the
/// registry, so it is never skipped silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown component '{name}' (known components: {})", ComponentKind::names().join(", "))]
pub struct UnknownComponentError {
    pub name: String,
}

/// Every component the registry can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Page,
    Sidebar,
    TopNav,
    Footer,
    Hero,
    Section,
    Grid,
    Card,
    StatCard,
    Badge,
    Button,
    Table,
    List,
    Timeline,
    Progress,
    Heading,
    Text,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 17] = [
        ComponentKind::Page,
        ComponentKind::Sidebar,
        ComponentKind::TopNav,
        ComponentKind::Footer,
        ComponentKind::Hero,
        ComponentKind::Section,
        ComponentKind::Grid,
        ComponentKind::Card,
        ComponentKind::StatCard,
        ComponentKind::Badge,
        ComponentKind::Button,
        ComponentKind::Table,
        ComponentKind::List,
        ComponentKind::Timeline,
        ComponentKind::Progress,
        ComponentKind::Heading,
        ComponentKind::Text,
    ];

    /// Name used in content trees
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Page => "Page",
            ComponentKind::Sidebar => "Sidebar",
            ComponentKind::TopNav => "TopNav",
            ComponentKind::Footer => "Footer",
            ComponentKind::Hero => "Hero",
            ComponentKind::Section => "Section",
            ComponentKind::Grid => "Grid",
            ComponentKind::Card => "Card",
            ComponentKind::StatCard => "StatCard",
            ComponentKind::Badge => "Badge",
            ComponentKind::Button => "Button",
            ComponentKind::Table => "Table",
            ComponentKind::List => "List",
            ComponentKind::Timeline => "Timeline",
            ComponentKind::Progress => "Progress",
            ComponentKind::Heading => "Heading",
            ComponentKind::Text => "Text",
        }
    }

    /// All component names, in declaration order
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|kind| kind.as_str()).collect()
    }

    /// Components placed in the layout's navigation region
    pub fn is_navigation(self) -> bool {
        matches!(self, ComponentKind::Sidebar | ComponentKind::TopNav)
    }

    fn renderer(self) -> &'static dyn Component {
        match self {
            ComponentKind::Page => &shell::Page,
            ComponentKind::Sidebar => &shell::Sidebar,
            ComponentKind::TopNav => &shell::TopNav,
            ComponentKind::Footer => &shell::Footer,
            ComponentKind::Hero => &cards::Hero,
            ComponentKind::Section => &shell::Section,
            ComponentKind::Grid => &shell::Grid,
            ComponentKind::Card => &cards::Card,
            ComponentKind::StatCard => &cards::StatCard,
            ComponentKind::Badge => &primitives::Badge,
            ComponentKind::Button => &primitives::Button,
            ComponentKind::Table => &data::Table,
            ComponentKind::List => &data::List,
            ComponentKind::Timeline => &data::Timeline,
            ComponentKind::Progress => &data::Progress,
            ComponentKind::Heading => &primitives::Heading,
            ComponentKind::Text => &primitives::Text,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = UnknownComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownComponentError {
                name: s.to_string(),
            })
    }
}

/// A renderer for one component
///
/// Renderers read props only through [`Props`] and recurse into children
/// through the [`RenderContext`], which carries the same tokens down the tree.
pub trait Component: Sync {
    fn render(
        &self,
        cx: &RenderContext<'_>,
        props: &Props<'_>,
        children: &[ContentNode],
    ) -> Result<Fragment, UnknownComponentError>;
}

/// Shared state for one render pass
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub tokens: &'a ResolvedTokens,
    registry: &'a Registry,
}

impl<'a> RenderContext<'a> {
    pub fn new(tokens: &'a ResolvedTokens, registry: &'a Registry) -> Self {
        Self { tokens, registry }
    }

    /// Render a child node
    pub fn render_node(&self, node: &ContentNode) -> Result<Fragment, UnknownComponentError> {
        self.registry.render(node, self.tokens)
    }

    /// Render child nodes in order
    pub fn render_children(
        &self,
        children: &[ContentNode],
    ) -> Result<Vec<Fragment>, UnknownComponentError> {
        children.iter().map(|child| self.render_node(child)).collect()
    }

    /// Check every descendant names a known component, without rendering
    ///
    /// Components with no place for children still reject unknown ones.
    pub fn check_children(&self, children: &[ContentNode]) -> Result<(), UnknownComponentError> {
        for child in children {
            child.component.parse::<ComponentKind>()?;
            self.check_children(&child.children)?;
        }
        Ok(())
    }
}

/// Dispatches component names to their renderers
#[derive(Debug, Clone, Default)]
pub struct Registry {
    limits: CoercionLimits,
}

impl Registry {
    /// Create a registry with default coercion limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the coercion limits applied to every prop read
    pub fn with_limits(mut self, limits: CoercionLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Every registered component
    pub fn kinds(&self) -> &'static [ComponentKind] {
        &ComponentKind::ALL
    }

    /// Render `name` with the given props and children
    pub fn dispatch(
        &self,
        name: &str,
        tokens: &ResolvedTokens,
        props: &RawProps,
        children: &[ContentNode],
    ) -> Result<Fragment, UnknownComponentError> {
        let kind: ComponentKind = name.parse()?;
        tracing::debug!(component = %kind, children = children.len(), "dispatch");

        let cx = RenderContext::new(tokens, self);
        let props = Props::new(props, self.limits);
        let fragment = kind.renderer().render(&cx, &props, children)?;
        Ok(fragment.tagged(kind.as_str()))
    }

    /// Render a content node
    pub fn render(
        &self,
        node: &ContentNode,
        tokens: &ResolvedTokens,
    ) -> Result<Fragment, UnknownComponentError> {
        self.dispatch(&node.component, tokens, &node.props, &node.children)
    }
}
