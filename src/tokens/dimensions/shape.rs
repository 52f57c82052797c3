//! Shape archetypes: corner radii per element family

use crate::tokens::archetype::ShapeKey;

axis_record! {
    ShapeRecord {
        /// Small surfaces (inputs, table wrappers, nav items)
        radius,
        /// Large surfaces (cards, hero panels)
        radius_lg as "radiusLg",
        button,
        badge,
        input,
        avatar,
    }
}

pub(super) fn record(key: ShapeKey) -> ShapeRecord {
    match key {
        ShapeKey::Sharp => ShapeRecord {
            radius: "rounded-none",
            radius_lg: "rounded-none",
            button: "rounded-none",
            badge: "rounded-none",
            input: "rounded-none",
            avatar: "rounded-none",
        },
        ShapeKey::Soft => ShapeRecord {
            radius: "rounded",
            radius_lg: "rounded-md",
            button: "rounded",
            badge: "rounded",
            input: "rounded",
            avatar: "rounded-md",
        },
        ShapeKey::Rounded => ShapeRecord {
            radius: "rounded-lg",
            radius_lg: "rounded-xl",
            button: "rounded-lg",
            badge: "rounded-md",
            input: "rounded-lg",
            avatar: "rounded-full",
        },
        ShapeKey::Pill => ShapeRecord {
            radius: "rounded-2xl",
            radius_lg: "rounded-3xl",
            button: "rounded-full",
            badge: "rounded-full",
            input: "rounded-full",
            avatar: "rounded-full",
        },
        ShapeKey::Minimal => ShapeRecord {
            radius: "rounded-sm",
            radius_lg: "rounded",
            button: "rounded-sm",
            badge: "rounded-sm",
            input: "rounded-sm",
            avatar: "rounded-full",
        },
    }
}
