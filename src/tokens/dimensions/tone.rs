//! Tone archetypes: surfaces, ink, shadow and border treatment

use crate::tokens::archetype::ToneKey;

axis_record! {
    /// Color and depth fragments that set the overall aesthetic
    ToneRecord {
        /// Page background
        surface,
        /// Card and panel background
        card,
        /// Primary ink
        text,
        /// Secondary ink for captions and labels
        muted,
        /// Emphasis ink
        accent,
        shadow,
        /// Border color (and width where the tone uses heavy rules)
        border,
    }
}

pub(super) fn record(key: ToneKey) -> ToneRecord {
    match key {
        ToneKey::Clinical => ToneRecord {
            surface: "bg-slate-50",
            card: "bg-white",
            text: "text-slate-900",
            muted: "text-slate-500",
            accent: "text-sky-700",
            shadow: "shadow-sm",
            border: "border-slate-200",
        },
        ToneKey::Minimal => ToneRecord {
            surface: "bg-white",
            card: "bg-white",
            text: "text-gray-900",
            muted: "text-gray-500",
            accent: "text-gray-900",
            shadow: "shadow-none",
            border: "border-gray-100",
        },
        ToneKey::Bold => ToneRecord {
            surface: "bg-yellow-50",
            card: "bg-white",
            text: "text-black",
            muted: "text-gray-700",
            accent: "text-black",
            shadow: "shadow-[4px_4px_0_0_#000]",
            border: "border-2 border-black",
        },
        ToneKey::Editorial => ToneRecord {
            surface: "bg-stone-50",
            card: "bg-stone-50",
            text: "text-stone-900",
            muted: "text-stone-600",
            accent: "text-red-700",
            shadow: "shadow-none",
            border: "border-stone-300",
        },
        ToneKey::Stripe => ToneRecord {
            surface: "bg-slate-50",
            card: "bg-white",
            text: "text-slate-800",
            muted: "text-slate-500",
            accent: "text-indigo-600",
            shadow: "shadow-lg shadow-slate-200/60",
            border: "border-slate-200",
        },
        ToneKey::Linear => ToneRecord {
            surface: "bg-neutral-950",
            card: "bg-neutral-900",
            text: "text-neutral-100",
            muted: "text-neutral-400",
            accent: "text-violet-400",
            shadow: "shadow-lg shadow-black/40",
            border: "border-white/10",
        },
        ToneKey::Vercel => ToneRecord {
            surface: "bg-white",
            card: "bg-white",
            text: "text-black",
            muted: "text-neutral-500",
            accent: "text-black",
            shadow: "shadow-sm",
            border: "border-neutral-200",
        },
        ToneKey::Bloomberg => ToneRecord {
            surface: "bg-black",
            card: "bg-zinc-950",
            text: "text-amber-400",
            muted: "text-zinc-400",
            accent: "text-orange-500",
            shadow: "shadow-none",
            border: "border-zinc-800",
        },
        ToneKey::Notion => ToneRecord {
            surface: "bg-white",
            card: "bg-white",
            text: "text-neutral-800",
            muted: "text-neutral-500",
            accent: "text-neutral-900",
            shadow: "shadow-none",
            border: "border-neutral-200",
        },
        ToneKey::Duolingo => ToneRecord {
            surface: "bg-lime-50",
            card: "bg-white",
            text: "text-neutral-800",
            muted: "text-neutral-500",
            accent: "text-lime-600",
            shadow: "shadow-[0_4px_0_0_rgba(0,0,0,0.12)]",
            border: "border-2 border-neutral-200",
        },
    }
}
