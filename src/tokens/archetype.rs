//! Closed archetype enumerations for each style axis, and the style spec built from them

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// An independent style dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Layout,
    Tone,
    Shape,
    Density,
    Typography,
    Color,
}

impl Axis {
    /// Every axis, in the order specs list them
    pub const ALL: [Axis; 6] = [
        Axis::Layout,
        Axis::Tone,
        Axis::Shape,
        Axis::Density,
        Axis::Typography,
        Axis::Color,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Layout => "layout",
            Axis::Tone => "tone",
            Axis::Shape => "shape",
            Axis::Density => "density",
            Axis::Typography => "typography",
            Axis::Color => "color",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A style spec that names an archetype the resolver cannot use
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSpecError {
    /// The value is not a member of the axis enumeration
    #[error("unknown {axis} archetype '{value}' (expected one of: {expected})")]
    UnknownArchetype {
        axis: Axis,
        value: String,
        expected: String,
    },

    /// The axis was not given at all
    #[error("missing {axis} archetype (expected one of: {expected})")]
    MissingArchetype { axis: Axis, expected: String },
}

impl InvalidSpecError {
    /// Create an unknown archetype error listing the valid keys for `K`
    pub fn unknown<K: Archetype>(value: impl Into<String>) -> Self {
        Self::UnknownArchetype {
            axis: K::AXIS,
            value: value.into(),
            expected: K::expected(),
        }
    }

    /// Create a missing archetype error listing the valid keys for `K`
    pub fn missing<K: Archetype>() -> Self {
        Self::MissingArchetype {
            axis: K::AXIS,
            expected: K::expected(),
        }
    }

    /// The axis the invalid value was given for
    pub fn axis(&self) -> Axis {
        match self {
            Self::UnknownArchetype { axis, .. } | Self::MissingArchetype { axis, .. } => *axis,
        }
    }
}

/// One closed enumeration of archetypes for a single axis
pub trait Archetype: Copy + Eq + fmt::Debug + 'static {
    /// The axis this enumeration belongs to
    const AXIS: Axis;
    /// Every archetype, in declaration order
    const ALL: &'static [Self];
    /// Substitute used when the resolver runs in fallback mode
    const DEFAULT: Self;

    /// Stable string identifier
    fn as_str(self) -> &'static str;

    /// Position in [`Archetype::ALL`]
    fn index(self) -> usize;

    /// Look up an archetype by its exact identifier
    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.as_str() == key)
    }

    /// Comma-separated list of valid identifiers, for error messages
    fn expected() -> String {
        Self::ALL
            .iter()
            .map(|a| a.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

macro_rules! archetype {
    (
        $(#[$meta:meta])*
        $name:ident: $axis:ident, default $default:ident {
            $($variant:ident => $key:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $key)] $variant,)+
        }

        impl Archetype for $name {
            const AXIS: Axis = Axis::$axis;
            const ALL: &'static [Self] = &[$($name::$variant,)+];
            const DEFAULT: Self = $name::$default;

            fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }

            fn index(self) -> usize {
                self as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = InvalidSpecError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as Archetype>::from_key(s).ok_or_else(|| InvalidSpecError::unknown::<Self>(s))
            }
        }
    };
}

archetype! {
    /// Page structure archetype
    LayoutKey: Layout, default SidebarMain {
        SidebarMain => "sidebar-main",
        TopNav => "top-nav",
        Bento => "bento",
        SingleColumn => "single-column",
        SplitHero => "split-hero",
        CommandCenter => "command-center",
    }
}

archetype! {
    /// Overall aesthetic: surfaces, text colors, shadows
    ToneKey: Tone, default Minimal {
        Clinical => "clinical",
        Minimal => "minimal",
        Bold => "bold",
        Editorial => "editorial",
        Stripe => "stripe",
        Linear => "linear",
        Vercel => "vercel",
        Bloomberg => "bloomberg",
        Notion => "notion",
        Duolingo => "duolingo",
    }
}

archetype! {
    /// Corner treatment
    ShapeKey: Shape, default Rounded {
        Sharp => "sharp",
        Soft => "soft",
        Rounded => "rounded",
        Pill => "pill",
        Minimal => "minimal",
    }
}

archetype! {
    /// Spacing scale
    DensityKey: Density, default Comfortable {
        Compact => "compact",
        Comfortable => "comfortable",
        Spacious => "spacious",
    }
}

archetype! {
    /// Type families and scale
    TypographyKey: Typography, default Modern {
        Modern => "modern",
        Expressive => "expressive",
        Editorial => "editorial",
        Technical => "technical",
        Humanist => "humanist",
    }
}

archetype! {
    /// Primary color scheme
    ColorKey: Color, default Blue {
        Blue => "blue",
        Indigo => "indigo",
        Violet => "violet",
        Emerald => "emerald",
        Teal => "teal",
        Rose => "rose",
        Amber => "amber",
        Slate => "slate",
    }
}

impl ToneKey {
    /// Tones rendered on a dark surface
    pub fn is_dark(self) -> bool {
        matches!(self, ToneKey::Linear | ToneKey::Bloomberg)
    }

    /// Tones that favour saturated, solid fills
    pub fn is_loud(self) -> bool {
        matches!(self, ToneKey::Bold | ToneKey::Duolingo)
    }
}

impl ColorKey {
    /// Palette hue used to build color utilities
    pub fn hue(self) -> &'static str {
        self.as_str()
    }

    /// Neighbouring hue paired with the primary one in gradients
    pub fn companion_hue(self) -> &'static str {
        match self {
            ColorKey::Blue => "indigo",
            ColorKey::Indigo => "violet",
            ColorKey::Violet => "fuchsia",
            ColorKey::Emerald => "teal",
            ColorKey::Teal => "cyan",
            ColorKey::Rose => "pink",
            ColorKey::Amber => "orange",
            ColorKey::Slate => "gray",
        }
    }
}

/// A validated style spec: one archetype per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleSpec {
    pub layout: LayoutKey,
    pub tone: ToneKey,
    pub shape: ShapeKey,
    pub density: DensityKey,
    pub typography: TypographyKey,
    pub color: ColorKey,
}

impl Default for StyleSpec {
    fn default() -> Self {
        Self {
            layout: LayoutKey::DEFAULT,
            tone: ToneKey::DEFAULT,
            shape: ShapeKey::DEFAULT,
            density: DensityKey::DEFAULT,
            typography: TypographyKey::DEFAULT,
            color: ColorKey::DEFAULT,
        }
    }
}

/// A style spec as supplied by an upstream producer, not yet validated
///
/// Non-string values are kept as their JSON text so they are reported as
/// unknown archetypes rather than failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawStyleSpec {
    #[serde(deserialize_with = "lenient_key")]
    pub layout: Option<String>,
    #[serde(deserialize_with = "lenient_key")]
    pub tone: Option<String>,
    #[serde(deserialize_with = "lenient_key")]
    pub shape: Option<String>,
    #[serde(deserialize_with = "lenient_key")]
    pub density: Option<String>,
    #[serde(deserialize_with = "lenient_key")]
    pub typography: Option<String>,
    #[serde(deserialize_with = "lenient_key")]
    pub color: Option<String>,
}

impl RawStyleSpec {
    /// The value given for an axis, if any
    pub fn get(&self, axis: Axis) -> Option<&str> {
        match axis {
            Axis::Layout => self.layout.as_deref(),
            Axis::Tone => self.tone.as_deref(),
            Axis::Shape => self.shape.as_deref(),
            Axis::Density => self.density.as_deref(),
            Axis::Typography => self.typography.as_deref(),
            Axis::Color => self.color.as_deref(),
        }
    }

    /// Set the value for an axis
    pub fn with(mut self, axis: Axis, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match axis {
            Axis::Layout => self.layout = value,
            Axis::Tone => self.tone = value,
            Axis::Shape => self.shape = value,
            Axis::Density => self.density = value,
            Axis::Typography => self.typography = value,
            Axis::Color => self.color = value,
        }
        self
    }

    /// Combine with overrides; any axis set in `overrides` wins
    pub fn merged_with(&self, overrides: &RawStyleSpec) -> RawStyleSpec {
        Axis::ALL
            .iter()
            .fold(self.clone(), |spec, &axis| match overrides.get(axis) {
                Some(value) => spec.with(axis, value),
                None => spec,
            })
    }

    /// True when no axis is set
    pub fn is_empty(&self) -> bool {
        Axis::ALL.iter().all(|&axis| self.get(axis).is_none())
    }
}

impl From<StyleSpec> for RawStyleSpec {
    fn from(spec: StyleSpec) -> Self {
        Self {
            layout: Some(spec.layout.as_str().to_string()),
            tone: Some(spec.tone.as_str().to_string()),
            shape: Some(spec.shape.as_str().to_string()),
            density: Some(spec.density.as_str().to_string()),
            typography: Some(spec.typography.as_str().to_string()),
            color: Some(spec.color.as_str().to_string()),
        }
    }
}

fn lenient_key<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip_through_identifiers() {
        for &tone in ToneKey::ALL {
            assert_eq!(tone.as_str().parse::<ToneKey>(), Ok(tone));
        }
        for &layout in LayoutKey::ALL {
            assert_eq!(LayoutKey::from_key(layout.as_str()), Some(layout));
        }
    }

    #[test]
    fn test_index_matches_declaration_order() {
        for (position, &color) in ColorKey::ALL.iter().enumerate() {
            assert_eq!(color.index(), position);
        }
    }

    #[test]
    fn test_parse_is_exact() {
        assert!("Minimal".parse::<ToneKey>().is_err());
        assert!(" minimal".parse::<ToneKey>().is_err());
        assert_eq!("minimal".parse::<ShapeKey>(), Ok(ShapeKey::Minimal));
    }

    #[test]
    fn test_unknown_error_names_axis() {
        let err = "neon".parse::<ToneKey>().unwrap_err();
        assert_eq!(err.axis(), Axis::Tone);
        assert!(err.to_string().contains("neon"));
        assert!(err.to_string().contains("bloomberg"));
    }

    #[test]
    fn test_raw_spec_keeps_non_string_values() {
        let raw: RawStyleSpec =
            serde_json::from_str(r#"{"tone": 3, "shape": null, "color": "blue"}"#).unwrap();
        assert_eq!(raw.tone.as_deref(), Some("3"));
        assert_eq!(raw.shape, None);
        assert_eq!(raw.color.as_deref(), Some("blue"));
        assert_eq!(raw.layout, None);
    }

    #[test]
    fn test_merged_with_prefers_overrides() {
        let base = RawStyleSpec::from(StyleSpec::default());
        let overrides = RawStyleSpec::default().with(Axis::Tone, "bold");
        let merged = base.merged_with(&overrides);
        assert_eq!(merged.tone.as_deref(), Some("bold"));
        assert_eq!(merged.color.as_deref(), Some("blue"));
    }

    #[test]
    fn test_dark_and_loud_tones() {
        assert!(ToneKey::Bloomberg.is_dark());
        assert!(!ToneKey::Vercel.is_dark());
        assert!(ToneKey::Duolingo.is_loud());
        assert!(!ToneKey::Minimal.is_loud());
    }
}
