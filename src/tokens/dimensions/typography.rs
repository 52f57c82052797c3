//! Typography archetypes: families and type scale

use crate::tokens::archetype::TypographyKey;

axis_record! {
    TypographyRecord {
        family,
        /// Page and hero titles
        display,
        heading,
        subheading,
        body,
        caption,
        /// Small caps-style labels (badges, table headers, stat labels)
        label,
        /// Large figures in stat cards
        metric,
    }
}

pub(super) fn record(key: TypographyKey) -> TypographyRecord {
    match key {
        TypographyKey::Modern => TypographyRecord {
            family: "font-sans",
            display: "text-4xl font-semibold tracking-tight",
            heading: "text-xl font-semibold",
            subheading: "text-base font-medium",
            body: "text-sm",
            caption: "text-xs",
            label: "text-xs font-medium",
            metric: "text-3xl font-semibold tabular-nums",
        },
        TypographyKey::Expressive => TypographyRecord {
            family: "font-sans",
            display: "text-5xl md:text-6xl font-extrabold tracking-tight",
            heading: "text-2xl font-bold",
            subheading: "text-lg font-semibold",
            body: "text-base",
            caption: "text-sm",
            label: "text-xs font-bold uppercase tracking-wide",
            metric: "text-4xl font-black tabular-nums",
        },
        TypographyKey::Editorial => TypographyRecord {
            family: "font-serif",
            display: "text-5xl font-normal leading-tight",
            heading: "text-2xl font-medium",
            subheading: "text-lg italic",
            body: "text-base leading-relaxed",
            caption: "text-sm italic",
            label: "text-xs uppercase tracking-[0.2em]",
            metric: "text-4xl font-light",
        },
        TypographyKey::Technical => TypographyRecord {
            family: "font-mono",
            display: "text-3xl font-medium",
            heading: "text-lg font-medium",
            subheading: "text-sm font-medium uppercase",
            body: "text-sm",
            caption: "text-xs",
            label: "text-[11px] uppercase tracking-wider",
            metric: "text-2xl tabular-nums",
        },
        TypographyKey::Humanist => TypographyRecord {
            family: "font-sans",
            display: "text-4xl font-bold",
            heading: "text-xl font-bold",
            subheading: "text-base font-semibold",
            body: "text-base leading-7",
            caption: "text-sm",
            label: "text-sm font-semibold",
            metric: "text-3xl font-extrabold",
        },
    }
}
