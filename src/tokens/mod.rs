//! Style token resolution
//!
//! A [`StyleSpec`] picks one archetype per style axis. The [`TokenResolver`]
//! looks each choice up in the process-wide [`DimensionMaps`] and merges the
//! results, together with the derived morphology, status and gradient groups,
//! into a single immutable [`ResolvedTokens`] bundle shared by every renderer.

mod archetype;
mod derive;
pub mod dimensions;
mod resolved;
mod resolver;

pub use archetype::{
    Archetype, Axis, ColorKey, DensityKey, InvalidSpecError, LayoutKey, RawStyleSpec, ShapeKey,
    StyleSpec, ToneKey, TypographyKey,
};
pub use dimensions::{DimensionError, DimensionMaps};
pub use resolved::{
    CardVariant, GradientTokens, MorphologyTokens, ResolvedTokens, StatusTokens, StatusVariant,
    TableVariant,
};
pub use resolver::{ArchetypeFallback, TokenResolver, UnknownArchetypePolicy};

/// Resolve an untrusted style spec against the built-in dimension maps,
/// failing on any unknown archetype.
pub fn resolve(raw: &RawStyleSpec) -> Result<ResolvedTokens, InvalidSpecError> {
    TokenResolver::shared().resolve(raw)
}
