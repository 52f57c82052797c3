//! Fragment trees and their HTML serialization

use std::collections::HashSet;

use crate::tokens::ResolvedTokens;

use super::HtmlConfig;

/// Elements that never have children or a closing tag
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta"];

/// Output of a component renderer
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Element(Element),
    Text(String),
    /// Renders nothing; used as the placeholder for unusable props
    Empty,
}

/// An HTML element with utility-class style fragments
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    /// Component that produced this element, set by the registry
    pub component: Option<&'static str>,
    /// Style fragments, each possibly holding several classes
    pub classes: Vec<String>,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Fragment>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            component: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a style fragment; blank fragments are skipped
    pub fn class(mut self, fragment: impl AsRef<str>) -> Self {
        let fragment = fragment.as_ref().trim();
        if !fragment.is_empty() {
            self.classes.push(fragment.to_string());
        }
        self
    }

    /// Add an attribute
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Append a child; empty fragments are skipped
    pub fn child(mut self, child: impl Into<Fragment>) -> Self {
        let child = child.into();
        if !child.is_empty() {
            self.children.push(child);
        }
        self
    }

    /// Append several children
    pub fn children(self, children: impl IntoIterator<Item = Fragment>) -> Self {
        children.into_iter().fold(self, |element, child| element.child(child))
    }

    /// Append a text node; empty text is skipped
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Fragment::Text(text.into()))
    }

    /// The `class` attribute value
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    /// True when every class of `fragment` is applied to this element
    pub fn has_classes(&self, fragment: &str) -> bool {
        let applied: HashSet<&str> = self
            .classes
            .iter()
            .flat_map(|f| f.split_whitespace())
            .collect();
        fragment.split_whitespace().all(|class| applied.contains(class))
    }

    /// Value of an attribute
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| *attr == name)
            .map(|(_, value)| value.as_str())
    }
}

impl From<Element> for Fragment {
    fn from(element: Element) -> Self {
        Fragment::Element(element)
    }
}

impl Fragment {
    pub fn text(text: impl Into<String>) -> Self {
        Fragment::Text(text.into())
    }

    /// True for [`Fragment::Empty`] and empty text
    pub fn is_empty(&self) -> bool {
        match self {
            Fragment::Empty => true,
            Fragment::Text(text) => text.is_empty(),
            Fragment::Element(_) => false,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Fragment::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Concatenated text of this fragment and all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// Style fragments of the root element
    pub fn classes(&self) -> &[String] {
        self.as_element()
            .map(|element| element.classes.as_slice())
            .unwrap_or(&[])
    }

    /// First element, depth first, produced by the named component
    pub fn find_component(&self, name: &str) -> Option<&Element> {
        let element = self.as_element()?;
        if element.component == Some(name) {
            return Some(element);
        }
        element
            .children
            .iter()
            .find_map(|child| child.find_component(name))
    }

    /// Serialize just this fragment
    pub fn to_html(&self, config: &HtmlConfig) -> String {
        let mut writer = HtmlWriter::new(config);
        writer.write(self, 0);
        writer.finish()
    }

    /// Record the producing component on the root element
    pub(crate) fn tagged(self, component: &'static str) -> Self {
        match self {
            Fragment::Element(mut element) => {
                element.component.get_or_insert(component);
                Fragment::Element(element)
            }
            other => other,
        }
    }
}

fn collect_text(fragment: &Fragment, out: &mut String) {
    match fragment {
        Fragment::Text(text) => out.push_str(text),
        Fragment::Element(element) => {
            for child in &element.children {
                collect_text(child, out);
            }
        }
        Fragment::Empty => {}
    }
}

/// Serialize fragments incrementally
struct HtmlWriter<'c> {
    config: &'c HtmlConfig,
    out: String,
}

impl<'c> HtmlWriter<'c> {
    fn new(config: &'c HtmlConfig) -> Self {
        Self {
            config,
            out: String::new(),
        }
    }

    fn indent(&mut self, depth: usize) {
        if self.config.pretty_print {
            self.out.push_str(&"  ".repeat(depth));
        }
    }

    fn newline(&mut self) {
        if self.config.pretty_print {
            self.out.push('\n');
        }
    }

    fn line(&mut self, depth: usize, raw: &str) {
        self.indent(depth);
        self.out.push_str(raw);
        self.newline();
    }

    fn open_tag(&mut self, element: &Element) {
        self.out.push('<');
        self.out.push_str(element.tag);
        if self.config.annotate {
            if let Some(component) = element.component {
                self.out.push_str(&format!(r#" data-component="{}""#, component));
            }
        }
        if !element.classes.is_empty() {
            self.out
                .push_str(&format!(r#" class="{}""#, escape_html(&element.class_attr())));
        }
        for (name, value) in &element.attrs {
            self.out
                .push_str(&format!(r#" {}="{}""#, name, escape_html(value)));
        }
        self.out.push('>');
    }

    fn close_tag(&mut self, element: &Element) {
        self.out.push_str(&format!("</{}>", element.tag));
    }

    fn write(&mut self, fragment: &Fragment, depth: usize) {
        match fragment {
            Fragment::Empty => {}
            Fragment::Text(text) => {
                let escaped = escape_html(text);
                self.line(depth, &escaped);
            }
            Fragment::Element(element) => {
                self.indent(depth);
                self.open_tag(element);
                if VOID_TAGS.contains(&element.tag) {
                    self.newline();
                    return;
                }

                let inline = element
                    .children
                    .iter()
                    .all(|child| !matches!(child, Fragment::Element(_)));
                if inline {
                    for child in &element.children {
                        if let Fragment::Text(text) = child {
                            self.out.push_str(&escape_html(text));
                        }
                    }
                } else {
                    self.newline();
                    for child in &element.children {
                        self.write(child, depth + 1);
                    }
                    self.indent(depth);
                }
                self.close_tag(element);
                self.newline();
            }
        }
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Render root fragments to HTML, as a standalone document if configured
pub fn render_html(fragments: &[Fragment], tokens: &ResolvedTokens, config: &HtmlConfig) -> String {
    let mut writer = HtmlWriter::new(config);

    if !config.standalone {
        for fragment in fragments {
            writer.write(fragment, 0);
        }
        return writer.finish();
    }

    writer.line(0, "<!DOCTYPE html>");
    writer.line(0, r#"<html lang="en">"#);
    writer.line(0, "<head>");
    writer.line(1, r#"<meta charset="utf-8">"#);
    writer.line(
        1,
        r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
    );
    let title = format!("<title>{}</title>", escape_html(&config.title));
    writer.line(1, &title);
    if config.tailwind_cdn {
        writer.line(1, r#"<script src="https://cdn.tailwindcss.com"></script>"#);
    }
    writer.line(0, "</head>");

    let body = Element::new("body")
        .class(tokens.typography.family)
        .class(tokens.tone.surface)
        .class(tokens.tone.text)
        .class("antialiased")
        .children(fragments.iter().cloned());
    writer.write(&Fragment::Element(body), 0);

    writer.line(0, "</html>");
    writer.finish()
}

/// Escape special HTML characters
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{StyleSpec, TokenResolver};

    fn compact() -> HtmlConfig {
        HtmlConfig::new()
            .with_standalone(false)
            .with_pretty_print(false)
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_compact_element() {
        let fragment: Fragment = Element::new("span")
            .class("px-2")
            .class("  ")
            .class("text-xs font-medium")
            .text("Active")
            .into();
        assert_eq!(
            fragment.to_html(&compact()),
            r#"<span class="px-2 text-xs font-medium">Active</span>"#
        );
    }

    #[test]
    fn test_pretty_nested_elements() {
        let fragment: Fragment = Element::new("ul")
            .child(Element::new("li").text("a"))
            .child(Element::new("li").text("b"))
            .into();
        let html = fragment.to_html(&HtmlConfig::new().with_standalone(false));
        assert_eq!(html, "<ul>\n  <li>a</li>\n  <li>b</li>\n</ul>\n");
    }

    #[test]
    fn test_text_is_escaped() {
        let fragment: Fragment = Element::new("p").text("<script>").into();
        assert_eq!(fragment.to_html(&compact()), "<p>&lt;script&gt;</p>");
    }

    #[test]
    fn test_empty_children_are_skipped() {
        let element = Element::new("div")
            .child(Fragment::Empty)
            .text("")
            .child(Element::new("hr"));
        assert_eq!(element.children.len(), 1);
        assert_eq!(Fragment::from(element).to_html(&compact()), "<div><hr></div>");
    }

    #[test]
    fn test_annotate_emits_component_name() {
        let fragment = Fragment::from(Element::new("span").text("x")).tagged("Badge");
        let html = fragment.to_html(&compact().with_annotate(true));
        assert_eq!(html, r#"<span data-component="Badge">x</span>"#);
        assert_eq!(fragment.to_html(&compact()), "<span>x</span>");
    }

    #[test]
    fn test_text_content_and_find_component() {
        let badge = Fragment::from(Element::new("span").text("Live")).tagged("Badge");
        let card = Fragment::from(
            Element::new("div")
                .child(Element::new("h3").text("Status: "))
                .child(badge),
        )
        .tagged("Card");
        assert_eq!(card.text_content(), "Status: Live");
        assert_eq!(card.find_component("Badge").map(|e| e.tag), Some("span"));
        assert!(card.find_component("Table").is_none());
    }

    #[test]
    fn test_has_classes_spans_fragments() {
        let element = Element::new("div").class("bg-white p-4").class("rounded-lg");
        assert!(element.has_classes("p-4 rounded-lg"));
        assert!(!element.has_classes("p-4 shadow"));
    }

    #[test]
    fn test_standalone_document_uses_tokens() {
        let tokens = TokenResolver::shared().resolve_spec(&StyleSpec::default());
        let html = render_html(
            &[Fragment::from(Element::new("main").text("hi"))],
            &tokens,
            &HtmlConfig::new().with_title("Ops & Co"),
        );
        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains("<title>Ops &amp; Co</title>"));
        assert!(html.contains(r#"<body class="font-sans bg-white text-gray-900 antialiased">"#));
        assert!(html.contains("  <main>hi</main>\n"));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
