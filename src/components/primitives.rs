//! Inline building blocks: badges, buttons, headings and text

use crate::content::{ContentNode, Props};
use crate::renderer::{Element, Fragment};
use crate::tokens::{ResolvedTokens, StatusVariant};

use super::registry::{Component, RenderContext, UnknownComponentError};

/// Status-colored pill shared by badges, stat deltas and table cells
pub(super) fn status_pill(tokens: &ResolvedTokens, variant: StatusVariant, label: String) -> Element {
    let (bg, ink) = tokens.status.pair(variant);
    Element::new("span")
        .class("inline-flex items-center px-2 py-0.5")
        .class(tokens.shape.badge)
        .class(tokens.typography.label)
        .class(bg)
        .class(ink)
        .text(label)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ButtonStyle {
    Primary,
    Secondary,
    Ghost,
}

impl ButtonStyle {
    pub(super) fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "secondary" | "outline" => ButtonStyle::Secondary,
            "ghost" | "link" => ButtonStyle::Ghost,
            _ => ButtonStyle::Primary,
        }
    }
}

/// Keep relative links, fragments and http(s)/mailto URLs; anything else
/// becomes `#`
fn safe_href(href: &str) -> &str {
    let href = href.trim();
    if href.is_empty() || href.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return "#";
    }
    let scheme_end = href.find(|c| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(end) if href[end..].starts_with(':') => {
            let scheme = href[..end].to_ascii_lowercase();
            if matches!(scheme.as_str(), "http" | "https" | "mailto") {
                href
            } else {
                "#"
            }
        }
        _ => href,
    }
}

/// A link styled as a button; empty labels render nothing
pub(super) fn button(
    tokens: &ResolvedTokens,
    style: ButtonStyle,
    label: String,
    href: &str,
) -> Fragment {
    if label.is_empty() {
        return Fragment::Empty;
    }
    let base = Element::new("a")
        .attr("href", safe_href(href))
        .class("inline-flex items-center justify-center font-medium px-4 py-2 focus-visible:outline-none focus-visible:ring-2")
        .class(tokens.shape.button)
        .class(tokens.colors.ring);
    let styled = match style {
        ButtonStyle::Primary => base
            .class(tokens.colors.primary)
            .class(tokens.colors.primary_hover)
            .class(tokens.colors.on_primary),
        ButtonStyle::Secondary => base
            .class("border")
            .class(tokens.tone.border)
            .class(tokens.tone.card)
            .class(tokens.tone.text),
        ButtonStyle::Ghost => base.class(tokens.colors.primary_text).class("hover:underline"),
    };
    styled.text(label).into()
}

pub struct Badge;

impl Component for Badge {
    fn render(
        &self,
        cx: &RenderContext<'_>,
        props: &Props<'_>,
        children: &[ContentNode],
    ) -> Result<Fragment, UnknownComponentError> {
        cx.check_children(children)?;
        let label = props.text_any(&["label", "text"], "");
        if label.is_empty() {
            return Ok(Fragment::Empty);
        }
        let variant = StatusVariant::parse_lenient(&props.text_any(&["variant", "status"], ""));
        Ok(status_pill(cx.tokens, variant, label).into())
    }
}

pub struct Button;

impl Component for Button {
    fn render(
        &self,
        cx: &RenderContext<'_>,
        props: &Props<'_>,
        children: &[ContentNode],
    ) -> Result<Fragment, UnknownComponentError> {
        cx.check_children(children)?;
        let style = ButtonStyle::parse(&props.text("variant", ""));
        Ok(button(
            cx.tokens,
            style,
            props.text_any(&["label", "text"], ""),
            &props.text("href", ""),
        ))
    }
}

pub struct Heading;

impl Component for Heading {
    fn render(
        &self,
        cx: &RenderContext<'_>,
        props: &Props<'_>,
        children: &[ContentNode],
    ) -> Result<Fragment, UnknownComponentError> {
        cx.check_children(children)?;
        let t = cx.tokens;
        let text = props.text_any(&["text", "title"], "");
        if text.is_empty() {
            return Ok(Fragment::Empty);
        }

        let level = props.text("level", "2").trim().parse::<u8>().unwrap_or(2);
        let (tag, scale) = match level {
            0 | 1 => ("h1", t.typography.display),
            2 => ("h2", t.typography.heading),
            _ => ("h3", t.typography.subheading),
        };
        let mut heading = Element::new(tag).class(scale);
        heading = if props.text("accent", "") == "true" {
            heading.class(&t.gradient.text)
        } else {
            heading.class(t.tone.text)
        };
        let heading = heading.text(text);

        let subtitle = props.text("subtitle", "");
        if subtitle.is_empty() {
            return Ok(heading.into());
        }
        Ok(Element::new("div")
            .class(t.density.stack)
            .child(heading)
            .child(
                Element::new("p")
                    .class(t.typography.body)
                    .class(t.tone.muted)
                    .text(subtitle),
            )
            .into())
    }
}

pub struct Text;

impl Component for Text {
    fn render(
        &self,
        cx: &RenderContext<'_>,
        props: &Props<'_>,
        children: &[ContentNode],
    ) -> Result<Fragment, UnknownComponentError> {
        cx.check_children(children)?;
        let t = cx.tokens;
        let content = props.text_any(&["content", "text", "body"], "");
        if content.is_empty() {
            return Ok(Fragment::Empty);
        }
        let (scale, ink) = match props.text("variant", "").as_str() {
            "muted" => (t.typography.body, t.tone.muted),
            "caption" => (t.typography.caption, t.tone.muted),
            "accent" => (t.typography.body, t.tone.accent),
            _ => (t.typography.body, t.tone.text),
        };
        Ok(Element::new("p").class(scale).class(ink).text(content).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Registry;
    use crate::content::RawProps;
    use crate::tokens::{StyleSpec, TokenResolver};
    use serde_json::json;

    fn render(name: &str, props: RawProps) -> Fragment {
        let tokens = TokenResolver::shared().resolve_spec(&StyleSpec::default());
        Registry::new().dispatch(name, &tokens, &props, &[]).unwrap()
    }

    #[test]
    fn test_badge_uses_status_pair() {
        let tokens = TokenResolver::shared().resolve_spec(&StyleSpec::default());
        let fragment = render(
            "Badge",
            RawProps::new().with("label", "Late").with("variant", "warning"),
        );
        assert_eq!(fragment.text_content(), "Late");
        assert!(fragment.classes().contains(&tokens.status.warning_bg));
        assert!(fragment.classes().contains(&tokens.status.warning_text));
    }

    #[test]
    fn test_badge_unknown_variant_is_neutral() {
        let tokens = TokenResolver::shared().resolve_spec(&StyleSpec::default());
        let fragment = render(
            "Badge",
            RawProps::new().with("label", "Beta").with("variant", json!({"tone": "x"})),
        );
        assert!(fragment.classes().contains(&tokens.status.neutral_bg));
    }

    #[test]
    fn test_badge_without_label_renders_nothing() {
        assert_eq!(render("Badge", RawProps::new().with("label", json!([]))), Fragment::Empty);
    }

    #[test]
    fn test_button_variants() {
        let primary = render("Button", RawProps::new().with("label", "Upgrade"));
        let element = primary.as_element().unwrap();
        assert!(element.has_classes("bg-blue-600 text-white"));
        assert_eq!(element.attr_value("href"), Some("#"));

        let ghost = render(
            "Button",
            RawProps::new()
                .with("label", "Docs")
                .with("variant", "ghost")
                .with("href", "/docs"),
        );
        let element = ghost.as_element().unwrap();
        assert!(element.has_classes("text-blue-600"));
        assert_eq!(element.attr_value("href"), Some("/docs"));
    }

    #[test]
    fn test_button_rejects_script_hrefs() {
        let hostile = render(
            "Button",
            RawProps::new()
                .with("label", "Claim")
                .with("href", "javascript:alert(document.cookie)"),
        );
        assert_eq!(hostile.as_element().unwrap().attr_value("href"), Some("#"));

        assert_eq!(safe_href(" JavaScript:alert(1)"), "#");
        assert_eq!(safe_href("java\tscript:alert(1)"), "#");
        assert_eq!(safe_href("data:text/html,<b>x</b>"), "#");
        assert_eq!(safe_href("vbscript:msgbox"), "#");
    }

    #[test]
    fn test_safe_href_keeps_web_links() {
        assert_eq!(safe_href("https://example.com/a?b=c"), "https://example.com/a?b=c");
        assert_eq!(safe_href("HTTP://example.com"), "HTTP://example.com");
        assert_eq!(safe_href("mailto:ops@example.com"), "mailto:ops@example.com");
        assert_eq!(safe_href("/billing"), "/billing");
        assert_eq!(safe_href("#usage"), "#usage");
        assert_eq!(safe_href("reports/q3?from=a:b"), "reports/q3?from=a:b");
        assert_eq!(safe_href(""), "#");
    }

    #[test]
    fn test_heading_levels_and_accent() {
        let h1 = render("Heading", RawProps::new().with("text", "Overview").with("level", 1));
        assert_eq!(h1.as_element().map(|e| e.tag), Some("h1"));

        let odd = render("Heading", RawProps::new().with("text", "Usage").with("level", "x"));
        assert_eq!(odd.as_element().map(|e| e.tag), Some("h2"));

        let accent = render(
            "Heading",
            RawProps::new().with("text", "Ship").with("accent", true),
        );
        assert!(accent.as_element().unwrap().has_classes("bg-clip-text"));
    }

    #[test]
    fn test_text_variants() {
        let muted = render("Text", RawProps::new().with("content", "fine print").with("variant", "muted"));
        assert!(muted.as_element().unwrap().has_classes("text-gray-500"));
        assert_eq!(render("Text", RawProps::new().with("content", json!(null))), Fragment::Empty);
    }
}
