//! The resolved token bundle handed to every renderer

use serde::Serialize;

use super::archetype::StyleSpec;
use super::dimensions::{
    ColorRecord, DensityRecord, LayoutRecord, ShapeRecord, ToneRecord, TypographyRecord,
};

/// Style tokens for one render pass, namespaced by axis
///
/// Created once from a [`StyleSpec`] and only ever shared by reference
/// afterwards. Resolving the same spec again yields an equal bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTokens {
    /// The validated spec these tokens were resolved from
    pub spec: StyleSpec,
    pub layout: LayoutRecord,
    pub tone: ToneRecord,
    pub shape: ShapeRecord,
    pub density: DensityRecord,
    pub typography: TypographyRecord,
    pub colors: ColorRecord,
    pub morphology: MorphologyTokens,
    pub status: StatusTokens,
    pub gradient: GradientTokens,
}

/// Semantic state used for badges, deltas and status cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusVariant {
    Success,
    Warning,
    Error,
    Info,
    Neutral,
}

impl StatusVariant {
    /// Interpret a free-form variant name; anything unrecognized is neutral
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "success" | "positive" | "ok" | "active" | "healthy" | "done" | "up" => {
                StatusVariant::Success
            }
            "warning" | "warn" | "pending" | "degraded" => StatusVariant::Warning,
            "error" | "danger" | "critical" | "failed" | "down" => StatusVariant::Error,
            "info" | "note" => StatusVariant::Info,
            _ => StatusVariant::Neutral,
        }
    }
}

/// Background/ink pairs for each status, derived from the color scheme and tone
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusTokens {
    pub success_bg: String,
    pub success_text: String,
    pub warning_bg: String,
    pub warning_text: String,
    pub error_bg: String,
    pub error_text: String,
    pub info_bg: String,
    pub info_text: String,
    pub neutral_bg: String,
    pub neutral_text: String,
}

impl StatusTokens {
    /// `(background, ink)` for a variant
    pub fn pair(&self, variant: StatusVariant) -> (&str, &str) {
        match variant {
            StatusVariant::Success => (&self.success_bg, &self.success_text),
            StatusVariant::Warning => (&self.warning_bg, &self.warning_text),
            StatusVariant::Error => (&self.error_bg, &self.error_text),
            StatusVariant::Info => (&self.info_bg, &self.info_text),
            StatusVariant::Neutral => (&self.neutral_bg, &self.neutral_text),
        }
    }
}

/// Structural treatment of cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    Flat,
    Elevated,
    Bordered,
    Panel,
}

/// Structural treatment of tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableVariant {
    Dense,
    Striped,
    Minimal,
}

/// Per-family structural variants, chosen independently of the base tone
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MorphologyTokens {
    pub card_variant: CardVariant,
    pub card: String,
    pub table_variant: TableVariant,
    pub table: String,
    pub table_head: String,
    pub table_row: String,
    pub nav_item: String,
    pub nav_item_active: String,
}

/// Gradient fragments derived from the color scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientTokens {
    /// Hero panel background
    pub hero: String,
    /// Ink placed on top of `hero`
    pub on_hero: String,
    /// Thin accent bars and progress fills
    pub accent: String,
    /// Gradient-clipped headline text
    pub text: String,
}
