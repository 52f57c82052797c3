//! Card-shaped components: hero banner, content card and metric card

use crate::content::{ContentNode, Props};
use crate::renderer::{Element, Fragment};
use crate::tokens::StatusVariant;

use super::primitives::{button, status_pill, ButtonStyle};
use super::registry::{Component, RenderContext, UnknownComponentError};

pub struct Hero;

impl Component for Hero {
    fn render(
        &self,
        cx: &RenderContext<'_>,
        props: &Props<'_>,
        children: &[ContentNode],
    ) -> Result<Fragment, UnknownComponentError> {
        let t = cx.tokens;
        let actions = Element::new("div")
            .class("flex flex-wrap items-center")
            .class(t.density.gap)
            .child(button(
                t,
                ButtonStyle::Primary,
                props.text("cta", ""),
                &props.text("ctaHref", ""),
            ))
            .child(button(
                t,
                ButtonStyle::Secondary,
                props.text_any(&["secondaryCta", "secondary_cta"], ""),
                &props.text("secondaryHref", ""),
            ));
        let actions = if actions.children.is_empty() {
            Fragment::Empty
        } else {
            actions.into()
        };

        Ok(Element::new("section")
            .class("flex flex-col")
            .class(&t.gradient.hero)
            .class(&t.gradient.on_hero)
            .class(t.shape.radius_lg)
            .class(t.density.padding)
            .class(t.density.stack)
            .child(
                Element::new("p")
                    .class(t.typography.label)
                    .class(t.colors.accent_text)
                    .text(props.text("eyebrow", "")),
            )
            .child(
                Element::new("h1")
                    .class(t.typography.display)
                    .text(props.text("title", "")),
            )
            .child(
                Element::new("p")
                    .class(t.typography.body)
                    .class("opacity-80")
                    .text(props.text_any(&["subtitle", "description"], "")),
            )
            .child(actions)
            .children(cx.render_children(children)?)
            .into())
    }
}

pub struct Card;

impl Component for Card {
    fn render(
        &self,
        cx: &RenderContext<'_>,
        props: &Props<'_>,
        children: &[ContentNode],
    ) -> Result<Fragment, UnknownComponentError> {
        let t = cx.tokens;
        let title = props.text("title", "");
        let body = props.text_any(&["body", "description", "content"], "");
        let footer = props.text("footer", "");

        let mut card = Element::new("div")
            .class(&t.morphology.card)
            .class(t.density.stack);
        if !title.is_empty() {
            card = card.child(
                Element::new("h3")
                    .class(t.typography.subheading)
                    .class(t.tone.text)
                    .text(title),
            );
        }
        if !body.is_empty() {
            card = card.child(
                Element::new("p")
                    .class(t.typography.body)
                    .class(t.tone.muted)
                    .text(body),
            );
        }
        card = card.children(cx.render_children(children)?);
        if !footer.is_empty() {
            card = card.child(
                Element::new("p")
                    .class(t.typography.caption)
                    .class(t.tone.muted)
                    .text(footer),
            );
        }
        Ok(card.into())
    }
}

/// Delta color: an explicit `trend` wins over the delta's sign
fn trend_variant(trend: &str, delta: &str) -> StatusVariant {
    match trend.trim().to_ascii_lowercase().as_str() {
        "up" | "positive" => StatusVariant::Success,
        "down" | "negative" => StatusVariant::Error,
        "flat" | "neutral" => StatusVariant::Neutral,
        _ if delta.starts_with('+') => StatusVariant::Success,
        _ if delta.starts_with('-') || delta.starts_with('\u{2212}') => StatusVariant::Error,
        _ => StatusVariant::Neutral,
    }
}

pub struct StatCard;

impl Component for StatCard {
    fn render(
        &self,
        cx: &RenderContext<'_>,
        props: &Props<'_>,
        children: &[ContentNode],
    ) -> Result<Fragment, UnknownComponentError> {
        let t = cx.tokens;
        let delta = props.text_any(&["delta", "change"], "");
        let delta = if delta.is_empty() {
            Fragment::Empty
        } else {
            let variant = trend_variant(&props.text("trend", ""), &delta);
            status_pill(t, variant, delta).into()
        };

        Ok(Element::new("div")
            .class(&t.morphology.card)
            .class("flex flex-col")
            .class(t.density.stack)
            .child(
                Element::new("p")
                    .class(t.typography.label)
                    .class(t.tone.muted)
                    .text(props.text_any(&["label", "title"], "")),
            )
            .child(
                Element::new("div")
                    .class("flex items-baseline justify-between")
                    .class(t.density.gap)
                    .child(
                        Element::new("p")
                            .class(t.typography.metric)
                            .class(t.tone.text)
                            .text(props.text("value", "\u{2014}")),
                    )
                    .child(delta),
            )
            .child(
                Element::new("p")
                    .class(t.typography.caption)
                    .class(t.tone.muted)
                    .text(props.text_any(&["caption", "hint"], "")),
            )
            .children(cx.render_children(children)?)
            .into())
    }
}
