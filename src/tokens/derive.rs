//! Derived token groups
//!
//! Status, morphology and gradient fragments are not looked up: they are
//! computed from the already-resolved axis records so they track every
//! combination of tone, color, shape and density.

use super::archetype::{ColorKey, DensityKey, StyleSpec, ToneKey};
use super::dimensions::{ColorRecord, DensityRecord, ShapeRecord, ToneRecord};
use super::resolved::{CardVariant, GradientTokens, MorphologyTokens, StatusTokens, TableVariant};

/// How status colors are applied for a tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Treatment {
    Solid,
    Translucent,
    Tinted,
}

impl Treatment {
    fn for_tone(tone: ToneKey) -> Self {
        if tone.is_loud() {
            Treatment::Solid
        } else if tone.is_dark() {
            Treatment::Translucent
        } else {
            Treatment::Tinted
        }
    }

    fn pair(self, hue: &str) -> (String, String) {
        match self {
            Treatment::Solid => (format!("bg-{hue}-500"), "text-white".to_string()),
            Treatment::Translucent => (format!("bg-{hue}-500/15"), format!("text-{hue}-400")),
            Treatment::Tinted => (format!("bg-{hue}-50"), format!("text-{hue}-700")),
        }
    }

    fn neutral(self) -> (String, String) {
        let (bg, text) = match self {
            Treatment::Solid => ("bg-neutral-800", "text-white"),
            Treatment::Translucent => ("bg-white/10", "text-neutral-300"),
            Treatment::Tinted => ("bg-gray-100", "text-gray-700"),
        };
        (bg.to_string(), text.to_string())
    }
}

/// Status colors for a color scheme under a tone
///
/// Status hues move off the primary hue when they would collide with it, so a
/// success badge never reads as a primary-colored accent.
pub(crate) fn status(color: ColorKey, tone: ToneKey) -> StatusTokens {
    let success = match color {
        ColorKey::Emerald | ColorKey::Teal => "green",
        _ => "emerald",
    };
    let warning = match color {
        ColorKey::Amber => "yellow",
        _ => "amber",
    };
    let error = match color {
        ColorKey::Rose => "red",
        _ => "rose",
    };
    let info = match color {
        ColorKey::Slate => "sky",
        other => other.hue(),
    };

    let treatment = Treatment::for_tone(tone);
    let (success_bg, success_text) = treatment.pair(success);
    let (warning_bg, warning_text) = treatment.pair(warning);
    let (error_bg, error_text) = treatment.pair(error);
    let (info_bg, info_text) = treatment.pair(info);
    let (neutral_bg, neutral_text) = treatment.neutral();

    StatusTokens {
        success_bg,
        success_text,
        warning_bg,
        warning_text,
        error_bg,
        error_text,
        info_bg,
        info_text,
        neutral_bg,
        neutral_text,
    }
}

fn card_variant(tone: ToneKey, density: DensityKey) -> CardVariant {
    if tone.is_dark() {
        CardVariant::Panel
    } else if density == DensityKey::Compact {
        CardVariant::Bordered
    } else {
        match tone {
            ToneKey::Bold | ToneKey::Stripe | ToneKey::Duolingo => CardVariant::Elevated,
            ToneKey::Clinical | ToneKey::Vercel => CardVariant::Bordered,
            _ => CardVariant::Flat,
        }
    }
}

fn table_variant(tone: ToneKey, density: DensityKey) -> TableVariant {
    if density == DensityKey::Compact || tone == ToneKey::Bloomberg {
        TableVariant::Dense
    } else if matches!(tone, ToneKey::Editorial | ToneKey::Notion | ToneKey::Minimal) {
        TableVariant::Minimal
    } else {
        TableVariant::Striped
    }
}

/// Prefix every class in a fragment with a variant such as `hover:`
fn with_variant(prefix: &str, fragment: &str) -> String {
    fragment
        .split_whitespace()
        .map(|class| format!("{prefix}{class}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn join(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Structural variants for cards, tables and navigation items
pub(crate) fn morphology(
    spec: &StyleSpec,
    tone: &ToneRecord,
    shape: &ShapeRecord,
    density: &DensityRecord,
    colors: &ColorRecord,
) -> MorphologyTokens {
    let card_variant = card_variant(spec.tone, spec.density);
    let card = match card_variant {
        CardVariant::Flat => join(&[tone.card, shape.radius_lg, density.card_padding]),
        CardVariant::Elevated if spec.tone.is_loud() => join(&[
            tone.card,
            tone.shadow,
            "border",
            tone.border,
            shape.radius_lg,
            density.card_padding,
        ]),
        CardVariant::Elevated => join(&[tone.card, tone.shadow, shape.radius_lg, density.card_padding]),
        CardVariant::Bordered => join(&[
            tone.card,
            "border",
            tone.border,
            shape.radius_lg,
            density.card_padding,
        ]),
        CardVariant::Panel => join(&[
            tone.card,
            "border",
            tone.border,
            shape.radius,
            density.card_padding,
            "ring-1 ring-inset ring-white/5",
        ]),
    };

    let table_variant = table_variant(spec.tone, spec.density);
    let (table, table_head, table_row) = match table_variant {
        TableVariant::Dense => (
            "w-full border-collapse text-left text-xs".to_string(),
            join(&["border-b", tone.border, tone.muted, "uppercase"]),
            join(&["border-b", tone.border, "last:border-0"]),
        ),
        TableVariant::Striped => (
            "w-full border-collapse text-left".to_string(),
            join(&[tone.surface, tone.muted]),
            with_variant("even:", tone.surface),
        ),
        TableVariant::Minimal => (
            "w-full border-collapse text-left".to_string(),
            join(&["border-b", tone.border, tone.muted]),
            with_variant("hover:", tone.surface),
        ),
    };

    let nav_hover = with_variant("hover:", tone.surface);
    let nav_item = join(&[
        "flex items-center gap-2",
        shape.radius,
        density.cell,
        tone.muted,
        nav_hover.as_str(),
    ]);
    let nav_item_active = if spec.tone.is_dark() {
        join(&[
            "flex items-center gap-2 font-medium bg-white/10",
            shape.radius,
            density.cell,
            tone.text,
        ])
    } else {
        join(&[
            "flex items-center gap-2 font-medium",
            shape.radius,
            density.cell,
            colors.primary_soft,
            colors.accent_text,
        ])
    };

    MorphologyTokens {
        card_variant,
        card,
        table_variant,
        table,
        table_head,
        table_row,
        nav_item,
        nav_item_active,
    }
}

/// Gradient fragments for a color scheme under a tone
pub(crate) fn gradient(color: ColorKey, tone: ToneKey) -> GradientTokens {
    let hue = color.hue();
    let companion = color.companion_hue();

    let (hero, on_hero) = if tone.is_loud() {
        (
            format!("bg-gradient-to-br from-{hue}-500 via-{companion}-500 to-{companion}-400"),
            "text-white",
        )
    } else if tone.is_dark() {
        (
            format!("bg-gradient-to-b from-{hue}-500/20 via-transparent to-transparent"),
            "text-white",
        )
    } else {
        (
            format!("bg-gradient-to-br from-{hue}-50 via-white to-{companion}-50"),
            "text-gray-900",
        )
    };

    let text_stops = if tone.is_dark() { 300 } else { 600 };

    GradientTokens {
        hero,
        on_hero: on_hero.to_string(),
        accent: format!("bg-gradient-to-r from-{hue}-500 to-{companion}-500"),
        text: format!(
            "bg-gradient-to-r from-{hue}-{text_stops} to-{companion}-{text_stops} bg-clip-text text-transparent"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::archetype::{LayoutKey, ShapeKey, TypographyKey};
    use crate::tokens::dimensions::DimensionMaps;

    fn spec(tone: ToneKey, density: DensityKey, color: ColorKey) -> StyleSpec {
        StyleSpec {
            layout: LayoutKey::SidebarMain,
            tone,
            shape: ShapeKey::Rounded,
            density,
            typography: TypographyKey::Modern,
            color,
        }
    }

    fn morph(spec: &StyleSpec) -> MorphologyTokens {
        let maps = DimensionMaps::shared();
        morphology(
            spec,
            maps.lookup(spec.tone),
            maps.lookup(spec.shape),
            maps.lookup(spec.density),
            maps.lookup(spec.color),
        )
    }

    #[test]
    fn test_status_tinted_for_light_tones() {
        let status = status(ColorKey::Blue, ToneKey::Minimal);
        assert_eq!(status.success_bg, "bg-emerald-50");
        assert_eq!(status.success_text, "text-emerald-700");
        assert_eq!(status.info_bg, "bg-blue-50");
        assert_eq!(status.neutral_bg, "bg-gray-100");
    }

    #[test]
    fn test_status_hues_avoid_primary_collisions() {
        assert_eq!(status(ColorKey::Emerald, ToneKey::Minimal).success_bg, "bg-green-50");
        assert_eq!(status(ColorKey::Rose, ToneKey::Minimal).error_bg, "bg-red-50");
        assert_eq!(status(ColorKey::Amber, ToneKey::Minimal).warning_bg, "bg-yellow-50");
        assert_eq!(status(ColorKey::Slate, ToneKey::Minimal).info_bg, "bg-sky-50");
    }

    #[test]
    fn test_status_treatment_follows_tone() {
        assert_eq!(status(ColorKey::Blue, ToneKey::Bold).error_bg, "bg-rose-500");
        assert_eq!(status(ColorKey::Blue, ToneKey::Bold).error_text, "text-white");
        assert_eq!(status(ColorKey::Blue, ToneKey::Linear).error_bg, "bg-rose-500/15");
        assert_eq!(status(ColorKey::Blue, ToneKey::Linear).neutral_bg, "bg-white/10");
    }

    #[test]
    fn test_card_variant_rules() {
        let dark = morph(&spec(ToneKey::Bloomberg, DensityKey::Spacious, ColorKey::Blue));
        assert_eq!(dark.card_variant, CardVariant::Panel);

        let compact = morph(&spec(ToneKey::Stripe, DensityKey::Compact, ColorKey::Blue));
        assert_eq!(compact.card_variant, CardVariant::Bordered);
        assert!(compact.card.contains("border-slate-200"));

        let stripe = morph(&spec(ToneKey::Stripe, DensityKey::Comfortable, ColorKey::Blue));
        assert_eq!(stripe.card_variant, CardVariant::Elevated);
        assert!(stripe.card.contains("shadow-lg"));

        let minimal = morph(&spec(ToneKey::Minimal, DensityKey::Comfortable, ColorKey::Blue));
        assert_eq!(minimal.card_variant, CardVariant::Flat);
        assert_eq!(minimal.card, "bg-white rounded-xl p-5");
    }

    #[test]
    fn test_table_variant_rules() {
        let bloomberg = morph(&spec(ToneKey::Bloomberg, DensityKey::Spacious, ColorKey::Amber));
        assert_eq!(bloomberg.table_variant, TableVariant::Dense);

        let notion = morph(&spec(ToneKey::Notion, DensityKey::Comfortable, ColorKey::Blue));
        assert_eq!(notion.table_variant, TableVariant::Minimal);
        assert_eq!(notion.table_row, "hover:bg-white");

        let clinical = morph(&spec(ToneKey::Clinical, DensityKey::Comfortable, ColorKey::Blue));
        assert_eq!(clinical.table_variant, TableVariant::Striped);
        assert_eq!(clinical.table_row, "even:bg-slate-50");
    }

    #[test]
    fn test_active_nav_item_uses_primary_on_light_tones() {
        let light = morph(&spec(ToneKey::Minimal, DensityKey::Comfortable, ColorKey::Violet));
        assert!(light.nav_item_active.contains("bg-violet-50"));

        let dark = morph(&spec(ToneKey::Linear, DensityKey::Comfortable, ColorKey::Violet));
        assert!(dark.nav_item_active.contains("bg-white/10"));
    }

    #[test]
    fn test_gradient_uses_companion_hue() {
        let gradient = gradient(ColorKey::Blue, ToneKey::Bold);
        assert_eq!(
            gradient.hero,
            "bg-gradient-to-br from-blue-500 via-indigo-500 to-indigo-400"
        );
        assert_eq!(gradient.on_hero, "text-white");
        assert!(gradient.text.contains("from-blue-600"));
    }
}
