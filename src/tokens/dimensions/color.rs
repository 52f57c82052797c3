//! Color archetypes: primary scheme utilities

use crate::tokens::archetype::ColorKey;

axis_record! {
    /// Primary color fragments
    ColorRecord {
        /// Solid primary fill
        primary,
        primary_hover as "primaryHover",
        /// Primary as ink
        primary_text as "primaryText",
        /// Tinted primary background
        primary_soft as "primarySoft",
        primary_border as "primaryBorder",
        /// Focus ring
        ring,
        /// Ink placed on a solid primary fill
        on_primary as "onPrimary",
        /// Darker ink for text on `primary_soft`
        accent_text as "accentText",
    }
}

pub(super) fn record(key: ColorKey) -> ColorRecord {
    match key {
        ColorKey::Blue => ColorRecord {
            primary: "bg-blue-600",
            primary_hover: "hover:bg-blue-700",
            primary_text: "text-blue-600",
            primary_soft: "bg-blue-50",
            primary_border: "border-blue-200",
            ring: "focus-visible:ring-blue-500",
            on_primary: "text-white",
            accent_text: "text-blue-700",
        },
        ColorKey::Indigo => ColorRecord {
            primary: "bg-indigo-600",
            primary_hover: "hover:bg-indigo-700",
            primary_text: "text-indigo-600",
            primary_soft: "bg-indigo-50",
            primary_border: "border-indigo-200",
            ring: "focus-visible:ring-indigo-500",
            on_primary: "text-white",
            accent_text: "text-indigo-700",
        },
        ColorKey::Violet => ColorRecord {
            primary: "bg-violet-600",
            primary_hover: "hover:bg-violet-700",
            primary_text: "text-violet-600",
            primary_soft: "bg-violet-50",
            primary_border: "border-violet-200",
            ring: "focus-visible:ring-violet-500",
            on_primary: "text-white",
            accent_text: "text-violet-700",
        },
        ColorKey::Emerald => ColorRecord {
            primary: "bg-emerald-600",
            primary_hover: "hover:bg-emerald-700",
            primary_text: "text-emerald-600",
            primary_soft: "bg-emerald-50",
            primary_border: "border-emerald-200",
            ring: "focus-visible:ring-emerald-500",
            on_primary: "text-white",
            accent_text: "text-emerald-700",
        },
        ColorKey::Teal => ColorRecord {
            primary: "bg-teal-600",
            primary_hover: "hover:bg-teal-700",
            primary_text: "text-teal-600",
            primary_soft: "bg-teal-50",
            primary_border: "border-teal-200",
            ring: "focus-visible:ring-teal-500",
            on_primary: "text-white",
            accent_text: "text-teal-700",
        },
        ColorKey::Rose => ColorRecord {
            primary: "bg-rose-600",
            primary_hover: "hover:bg-rose-700",
            primary_text: "text-rose-600",
            primary_soft: "bg-rose-50",
            primary_border: "border-rose-200",
            ring: "focus-visible:ring-rose-500",
            on_primary: "text-white",
            accent_text: "text-rose-700",
        },
        // Amber is too light for white ink at the 600 step
        ColorKey::Amber => ColorRecord {
            primary: "bg-amber-500",
            primary_hover: "hover:bg-amber-600",
            primary_text: "text-amber-600",
            primary_soft: "bg-amber-50",
            primary_border: "border-amber-200",
            ring: "focus-visible:ring-amber-400",
            on_primary: "text-amber-950",
            accent_text: "text-amber-700",
        },
        ColorKey::Slate => ColorRecord {
            primary: "bg-slate-800",
            primary_hover: "hover:bg-slate-900",
            primary_text: "text-slate-700",
            primary_soft: "bg-slate-100",
            primary_border: "border-slate-300",
            ring: "focus-visible:ring-slate-500",
            on_primary: "text-white",
            accent_text: "text-slate-900",
        },
    }
}
