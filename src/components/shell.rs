//! Page structure: the shell, navigation regions, sections and grids

use crate::content::{ContentNode, Props};
use crate::renderer::{Element, Fragment};

use super::primitives::{button, ButtonStyle};
use super::registry::{Component, ComponentKind, RenderContext, UnknownComponentError};

/// Navigation links; the `active` item (or the first one) is highlighted
fn nav_links(cx: &RenderContext<'_>, props: &Props<'_>, container: Element) -> Element {
    let t = cx.tokens;
    let items = props.text_list_any(&["items", "links"]);
    let active = props.text("active", "");
    let active = if active.is_empty() {
        items.first().cloned().unwrap_or_default()
    } else {
        active
    };

    items.into_iter().fold(container, |nav, item| {
        let style = if item == active {
            &t.morphology.nav_item_active
        } else {
            &t.morphology.nav_item
        };
        nav.child(Element::new("a").attr("href", "#").class(style).text(item))
    })
}

pub struct Page;

impl Component for Page {
    fn render(
        &self,
        cx: &RenderContext<'_>,
        props: &Props<'_>,
        children: &[ContentNode],
    ) -> Result<Fragment, UnknownComponentError> {
        let t = cx.tokens;
        let (nav, body): (Vec<&ContentNode>, Vec<&ContentNode>) =
            children.iter().partition(|child| {
                child
                    .component
                    .parse::<ComponentKind>()
                    .map(ComponentKind::is_navigation)
                    .unwrap_or(false)
            });

        let mut content = Element::new("div")
            .class(t.layout.content)
            .class(t.density.padding)
            .class(t.density.section_gap)
            .class("flex flex-col");
        let title = props.text("title", "");
        if !title.is_empty() {
            content = content.child(
                Element::new("h1")
                    .class(t.typography.display)
                    .class(t.tone.text)
                    .text(title),
            );
        }
        for child in body {
            content = content.child(cx.render_node(child)?);
        }

        let mut shell = Element::new("div")
            .class(t.layout.shell)
            .class(t.tone.surface)
            .class(t.tone.text)
            .class(t.typography.family);
        for child in nav {
            shell = shell.child(cx.render_node(child)?);
        }
        Ok(shell
            .child(Element::new("main").class(t.layout.main).child(content))
            .into())
    }
}

pub struct Sidebar;

impl Component for Sidebar {
    fn render(
        &self,
        cx: &RenderContext<'_>,
        props: &Props<'_>,
        children: &[ContentNode],
    ) -> Result<Fragment, UnknownComponentError> {
        let t = cx.tokens;
        let mut aside = Element::new("aside")
            .class(t.layout.nav)
            .class(t.tone.card)
            .class(t.tone.border)
            .class(t.density.padding)
            .class(t.density.section_gap);

        let title = props.text_any(&["title", "brand"], "");
        if !title.is_empty() {
            aside = aside.child(
                Element::new("div")
                    .class(t.typography.subheading)
                    .class(t.tone.text)
                    .text(title),
            );
        }

        let nav = Element::new("nav").class("flex flex-col gap-1");
        aside = aside.child(nav_links(cx, props, nav));
        aside = aside.children(cx.render_children(children)?);

        let footer = props.text("footer", "");
        if !footer.is_empty() {
            aside = aside.child(
                Element::new("p")
                    .class("mt-auto")
                    .class(t.typography.caption)
                    .class(t.tone.muted)
                    .text(footer),
            );
        }
        Ok(aside.into())
    }
}

pub struct TopNav;

impl Component for TopNav {
    fn render(
        &self,
        cx: &RenderContext<'_>,
        props: &Props<'_>,
        children: &[ContentNode],
    ) -> Result<Fragment, UnknownComponentError> {
        let t = cx.tokens;
        let mut header = Element::new("header")
            .class(t.layout.nav)
            .class(t.tone.card)
            .class(t.tone.border)
            .class(t.density.padding)
            .class(t.density.gap);

        let brand = props.text_any(&["brand", "title"], "");
        if !brand.is_empty() {
            header = header.child(
                Element::new("div")
                    .class(t.typography.subheading)
                    .class(t.tone.text)
                    .text(brand),
            );
        }

        let nav = Element::new("nav").class("flex items-center gap-1");
        header = header.child(nav_links(cx, props, nav));
        header = header.children(cx.render_children(children)?);
        header = header.child(button(
            t,
            ButtonStyle::Primary,
            props.text("cta", ""),
            &props.text("ctaHref", ""),
        ));
        Ok(header.into())
    }
}

pub struct Footer;

impl Component for Footer {
    fn render(
        &self,
        cx: &RenderContext<'_>,
        props: &Props<'_>,
        children: &[ContentNode],
    ) -> Result<Fragment, UnknownComponentError> {
        let t = cx.tokens;
        let links = props
            .text_list("links")
            .into_iter()
            .fold(Element::new("nav").class("flex").class(t.density.gap), |nav, link| {
                nav.child(
                    Element::new("a")
                        .attr("href", "#")
                        .class("hover:underline")
                        .text(link),
                )
            });
        let links = if links.children.is_empty() {
            Fragment::Empty
        } else {
            links.into()
        };

        Ok(Element::new("footer")
            .class("flex flex-wrap items-center justify-between border-t")
            .class(t.tone.border)
            .class(t.density.padding)
            .class(t.density.gap)
            .class(t.typography.caption)
            .class(t.tone.muted)
            .child(Element::new("p").text(props.text_any(&["text", "content"], "")))
            .child(links)
            .children(cx.render_children(children)?)
            .into())
    }
}

pub struct Section;

impl Component for Section {
    fn render(
        &self,
        cx: &RenderContext<'_>,
        props: &Props<'_>,
        children: &[ContentNode],
    ) -> Result<Fragment, UnknownComponentError> {
        let t = cx.tokens;
        let title = props.text("title", "");
        let description = props.text_any(&["description", "subtitle"], "");

        let header = if title.is_empty() && description.is_empty() {
            Fragment::Empty
        } else {
            Element::new("header")
                .class("flex flex-col gap-1")
                .child(
                    Element::new("h2")
                        .class(t.typography.heading)
                        .class(t.tone.text)
                        .text(title),
                )
                .child(
                    Element::new("p")
                        .class(t.typography.body)
                        .class(t.tone.muted)
                        .text(description),
                )
                .into()
        };

        Ok(Element::new("section")
            .class(t.layout.section)
            .class(t.density.gap)
            .child(header)
            .children(cx.render_children(children)?)
            .into())
    }
}

pub struct Grid;

impl Component for Grid {
    fn render(
        &self,
        cx: &RenderContext<'_>,
        props: &Props<'_>,
        children: &[ContentNode],
    ) -> Result<Fragment, UnknownComponentError> {
        let t = cx.tokens;
        let columns = props.text("columns", "").trim().parse::<u8>().ok();
        let grid = match columns {
            Some(1) => "grid grid-cols-1".to_string(),
            Some(n @ 2..=6) => format!("grid grid-cols-1 md:grid-cols-{n}"),
            _ => t.layout.grid.to_string(),
        };
        Ok(Element::new("div")
            .class(grid)
            .class(t.density.gap)
            .children(cx.render_children(children)?)
            .into())
    }
}
