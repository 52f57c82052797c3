//! Data display: tables, lists, timelines and progress bars
//!
//! These read the list-shaped props, so they are the components most exposed
//! to ragged or oversized input. Cells are always indexed defensively.

use crate::content::{ContentNode, Props};
use crate::renderer::{Element, Fragment};
use crate::tokens::StatusVariant;

use super::primitives::status_pill;
use super::registry::{Component, RenderContext, UnknownComponentError};

fn title(cx: &RenderContext<'_>, props: &Props<'_>) -> Fragment {
    let t = cx.tokens;
    let title = props.text("title", "");
    if title.is_empty() {
        return Fragment::Empty;
    }
    Element::new("h3")
        .class(t.typography.subheading)
        .class(t.tone.text)
        .text(title)
        .into()
}

/// Cell at `index`, empty when the row is short
fn cell(row: &[String], index: usize) -> String {
    row.get(index).cloned().unwrap_or_default()
}

pub struct Table;

impl Component for Table {
    fn render(
        &self,
        cx: &RenderContext<'_>,
        props: &Props<'_>,
        children: &[ContentNode],
    ) -> Result<Fragment, UnknownComponentError> {
        let t = cx.tokens;
        let columns = props.text_list_any(&["columns", "headers"]);
        let rows = props.text_rows("rows");
        let status_column = props.text_any(&["statusColumn", "status_column"], "");
        let status_index = columns.iter().position(|column| *column == status_column);

        let width = if columns.is_empty() {
            rows.iter().map(Vec::len).max().unwrap_or(0)
        } else {
            columns.len()
        };

        let head = if columns.is_empty() {
            Fragment::Empty
        } else {
            let row = columns
                .into_iter()
                .fold(Element::new("tr").class(&t.morphology.table_head), |tr, column| {
                    tr.child(
                        Element::new("th")
                            .attr("scope", "col")
                            .class(t.density.cell)
                            .class(t.typography.label)
                            .text(column),
                    )
                });
            Element::new("thead").child(row).into()
        };

        let mut body = Element::new("tbody");
        if rows.is_empty() {
            body = body.child(
                Element::new("tr").child(
                    Element::new("td")
                        .attr("colspan", width.max(1).to_string())
                        .class(t.density.cell)
                        .class(t.typography.caption)
                        .class(t.tone.muted)
                        .text(props.text("emptyText", "No data")),
                ),
            );
        }
        for row in &rows {
            let mut tr = Element::new("tr").class(&t.morphology.table_row);
            for index in 0..width {
                let value = cell(row, index);
                let td = Element::new("td")
                    .class(t.density.cell)
                    .class(t.typography.body);
                let td = if Some(index) == status_index && !value.is_empty() {
                    let variant = StatusVariant::parse_lenient(&value);
                    td.child(status_pill(t, variant, value))
                } else {
                    td.text(value)
                };
                tr = tr.child(td);
            }
            body = body.child(tr);
        }

        Ok(Element::new("div")
            .class("overflow-x-auto border")
            .class(t.tone.card)
            .class(t.tone.border)
            .class(t.shape.radius_lg)
            .child(title(cx, props))
            .child(
                Element::new("table")
                    .class(&t.morphology.table)
                    .child(head)
                    .child(body),
            )
            .children(cx.render_children(children)?)
            .into())
    }
}

pub struct List;

impl Component for List {
    fn render(
        &self,
        cx: &RenderContext<'_>,
        props: &Props<'_>,
        children: &[ContentNode],
    ) -> Result<Fragment, UnknownComponentError> {
        let t = cx.tokens;
        let items = props.text_list_any(&["items", "features"]);
        let ordered = props.text("ordered", "") == "true";

        let mut list = Element::new(if ordered { "ol" } else { "ul" })
            .class("flex flex-col")
            .class(t.density.stack);
        if items.is_empty() {
            list = list.child(
                Element::new("li")
                    .class(t.typography.caption)
                    .class(t.tone.muted)
                    .text(props.text("emptyText", "Nothing to show")),
            );
        }
        for item in items {
            list = list.child(
                Element::new("li")
                    .class("flex items-start gap-2")
                    .class(t.typography.body)
                    .class(t.tone.text)
                    .child(
                        Element::new("span")
                            .attr("aria-hidden", "true")
                            .class("mt-2 h-1.5 w-1.5 shrink-0 rounded-full")
                            .class(t.colors.primary),
                    )
                    .child(Element::new("span").text(item)),
            );
        }

        Ok(Element::new("div")
            .class(t.density.stack)
            .child(title(cx, props))
            .child(list)
            .children(cx.render_children(children)?)
            .into())
    }
}

pub struct Timeline;

impl Component for Timeline {
    fn render(
        &self,
        cx: &RenderContext<'_>,
        props: &Props<'_>,
        children: &[ContentNode],
    ) -> Result<Fragment, UnknownComponentError> {
        let t = cx.tokens;
        let mut entries = props.text_rows("items");
        if entries.is_empty() {
            entries = props.text_rows("events");
        }

        let list = entries.iter().fold(
            Element::new("ol")
                .class("relative border-l")
                .class(t.tone.border)
                .class(t.density.stack),
            |ol, entry| {
                ol.child(
                    Element::new("li")
                        .class("relative ml-4")
                        .child(
                            Element::new("span")
                                .attr("aria-hidden", "true")
                                .class("absolute -left-[1.4rem] top-1.5 h-2.5 w-2.5 rounded-full")
                                .class(t.colors.primary),
                        )
                        .child(
                            Element::new("p")
                                .class(t.typography.caption)
                                .class(t.tone.muted)
                                .text(cell(entry, 0)),
                        )
                        .child(
                            Element::new("p")
                                .class(t.typography.body)
                                .class(t.tone.text)
                                .class("font-medium")
                                .text(cell(entry, 1)),
                        )
                        .child(
                            Element::new("p")
                                .class(t.typography.caption)
                                .class(t.tone.muted)
                                .text(cell(entry, 2)),
                        ),
                )
            },
        );

        Ok(Element::new("div")
            .class(t.density.stack)
            .child(title(cx, props))
            .child(list)
            .children(cx.render_children(children)?)
            .into())
    }
}

/// `42%`, or `87.5%` for fractional values, to one decimal place
fn percent_label(percent: f64) -> String {
    let rounded = (percent * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}%", rounded as i64)
    } else {
        format!("{rounded:.1}%")
    }
}

pub struct Progress;

impl Component for Progress {
    fn render(
        &self,
        cx: &RenderContext<'_>,
        props: &Props<'_>,
        children: &[ContentNode],
    ) -> Result<Fragment, UnknownComponentError> {
        let t = cx.tokens;
        let value = props.percent("value");
        let percent = value.unwrap_or(0.0);
        let label = value.map(percent_label).unwrap_or_else(|| "\u{2014}".to_string());

        Ok(Element::new("div")
            .class("flex flex-col gap-1.5")
            .child(
                Element::new("div")
                    .class("flex items-center justify-between")
                    .class(t.typography.label)
                    .child(
                        Element::new("span")
                            .class(t.tone.text)
                            .text(props.text_any(&["label", "title"], "")),
                    )
                    .child(Element::new("span").class(t.tone.muted).text(label)),
            )
            .child(
                Element::new("div")
                    .attr("role", "progressbar")
                    .attr("aria-valuemin", "0")
                    .attr("aria-valuemax", "100")
                    .attr("aria-valuenow", percent_label(percent).trim_end_matches('%'))
                    .class("h-2 w-full overflow-hidden")
                    .class(t.shape.badge)
                    .class(t.colors.primary_soft)
                    .child(
                        Element::new("div")
                            .class("h-full")
                            .class(t.shape.badge)
                            .class(&t.gradient.accent)
                            .attr("style", format!("width: {}", percent_label(percent))),
                    ),
            )
            .children(cx.render_children(children)?)
            .into())
    }
}
