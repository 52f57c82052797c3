//! Token resolver: style spec in, resolved token bundle out

use serde::{Deserialize, Serialize};

use super::archetype::{Archetype, Axis, InvalidSpecError, RawStyleSpec, StyleSpec};
use super::derive;
use super::dimensions::DimensionMaps;
use super::resolved::ResolvedTokens;

/// What to do with an archetype key that is not part of its axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownArchetypePolicy {
    /// Reject the spec with [`InvalidSpecError`]
    #[default]
    Fail,
    /// Substitute the axis default and report the substitution
    Fallback,
}

/// A default substituted for an unusable archetype in fallback mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchetypeFallback {
    pub axis: Axis,
    /// The value that was given, if any
    pub value: Option<String>,
    pub substitute: &'static str,
}

/// Resolves style specs against a set of dimension maps
#[derive(Debug, Clone, Copy)]
pub struct TokenResolver<'m> {
    maps: &'m DimensionMaps,
    policy: UnknownArchetypePolicy,
}

impl TokenResolver<'static> {
    /// A resolver over the built-in dimension maps
    pub fn shared() -> Self {
        TokenResolver::new(DimensionMaps::shared())
    }
}

impl<'m> TokenResolver<'m> {
    /// Create a resolver over `maps` that fails on unknown archetypes
    pub fn new(maps: &'m DimensionMaps) -> Self {
        Self {
            maps,
            policy: UnknownArchetypePolicy::default(),
        }
    }

    /// Set the unknown-archetype policy
    pub fn with_policy(mut self, policy: UnknownArchetypePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> UnknownArchetypePolicy {
        self.policy
    }

    /// Validate an untrusted spec, applying the unknown-archetype policy
    pub fn validate(
        &self,
        raw: &RawStyleSpec,
    ) -> Result<(StyleSpec, Vec<ArchetypeFallback>), InvalidSpecError> {
        let mut fallbacks = Vec::new();
        let spec = StyleSpec {
            layout: self.pick(raw, &mut fallbacks)?,
            tone: self.pick(raw, &mut fallbacks)?,
            shape: self.pick(raw, &mut fallbacks)?,
            density: self.pick(raw, &mut fallbacks)?,
            typography: self.pick(raw, &mut fallbacks)?,
            color: self.pick(raw, &mut fallbacks)?,
        };
        Ok((spec, fallbacks))
    }

    /// Resolve an untrusted spec
    pub fn resolve(&self, raw: &RawStyleSpec) -> Result<ResolvedTokens, InvalidSpecError> {
        self.resolve_with_report(raw).map(|(tokens, _)| tokens)
    }

    /// Resolve an untrusted spec, also returning any defaults substituted for it
    pub fn resolve_with_report(
        &self,
        raw: &RawStyleSpec,
    ) -> Result<(ResolvedTokens, Vec<ArchetypeFallback>), InvalidSpecError> {
        let (spec, fallbacks) = self.validate(raw)?;
        Ok((self.resolve_spec(&spec), fallbacks))
    }

    /// Resolve a validated spec; this cannot fail
    pub fn resolve_spec(&self, spec: &StyleSpec) -> ResolvedTokens {
        let layout = *self.maps.lookup(spec.layout);
        let tone = *self.maps.lookup(spec.tone);
        let shape = *self.maps.lookup(spec.shape);
        let density = *self.maps.lookup(spec.density);
        let typography = *self.maps.lookup(spec.typography);
        let colors = *self.maps.lookup(spec.color);

        tracing::debug!(
            layout = %spec.layout,
            tone = %spec.tone,
            shape = %spec.shape,
            density = %spec.density,
            typography = %spec.typography,
            color = %spec.color,
            "resolved style tokens"
        );

        ResolvedTokens {
            spec: *spec,
            morphology: derive::morphology(spec, &tone, &shape, &density, &colors),
            status: derive::status(spec.color, spec.tone),
            gradient: derive::gradient(spec.color, spec.tone),
            layout,
            tone,
            shape,
            density,
            typography,
            colors,
        }
    }

    fn pick<K: Archetype>(
        &self,
        raw: &RawStyleSpec,
        fallbacks: &mut Vec<ArchetypeFallback>,
    ) -> Result<K, InvalidSpecError> {
        let value = raw.get(K::AXIS);
        let error = match value {
            Some(key) => match K::from_key(key) {
                Some(archetype) => return Ok(archetype),
                None => InvalidSpecError::unknown::<K>(key),
            },
            None => InvalidSpecError::missing::<K>(),
        };

        match self.policy {
            UnknownArchetypePolicy::Fail => Err(error),
            UnknownArchetypePolicy::Fallback => {
                let substitute = K::DEFAULT.as_str();
                tracing::warn!(
                    axis = %K::AXIS,
                    value = ?value,
                    substitute,
                    "unusable archetype; substituting axis default"
                );
                fallbacks.push(ArchetypeFallback {
                    axis: K::AXIS,
                    value: value.map(str::to_string),
                    substitute,
                });
                Ok(K::DEFAULT)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::archetype::{ColorKey, ToneKey};
    use pretty_assertions::assert_eq;

    fn raw(tone: &str) -> RawStyleSpec {
        serde_json::from_value(serde_json::json!({
            "layout": "sidebar-main",
            "tone": tone,
            "shape": "minimal",
            "density": "comfortable",
            "typography": "expressive",
            "color": "blue",
        }))
        .unwrap()
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let resolver = TokenResolver::shared();
        let first = resolver.resolve(&raw("minimal")).unwrap();
        let second = resolver.resolve(&raw("minimal")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_merges_axis_records() {
        let tokens = TokenResolver::shared().resolve(&raw("stripe")).unwrap();
        assert_eq!(tokens.spec.tone, ToneKey::Stripe);
        assert_eq!(tokens.tone.accent, "text-indigo-600");
        assert_eq!(tokens.shape.badge, "rounded-sm");
        assert_eq!(tokens.typography.family, "font-sans");
        assert_eq!(tokens.colors.primary, "bg-blue-600");
        assert_eq!(tokens.status.success_bg, "bg-emerald-50");
    }

    #[test]
    fn test_resolve_rejects_unknown_tone() {
        let err = TokenResolver::shared()
            .resolve(&raw("not-a-real-tone"))
            .unwrap_err();
        assert_eq!(err.axis(), Axis::Tone);
        insta::assert_snapshot!(
            err.to_string(),
            @"unknown tone archetype 'not-a-real-tone' (expected one of: clinical, minimal, bold, editorial, stripe, linear, vercel, bloomberg, notion, duolingo)"
        );
    }

    #[test]
    fn test_resolve_rejects_missing_axis() {
        let mut spec = raw("minimal");
        spec.color = None;
        let err = TokenResolver::shared().resolve(&spec).unwrap_err();
        assert!(matches!(
            err,
            InvalidSpecError::MissingArchetype {
                axis: Axis::Color,
                ..
            }
        ));
    }

    #[test]
    fn test_fallback_policy_substitutes_and_reports() {
        let mut spec = raw("neon");
        spec.color = None;
        let resolver = TokenResolver::shared().with_policy(UnknownArchetypePolicy::Fallback);
        let (tokens, fallbacks) = resolver.resolve_with_report(&spec).unwrap();

        assert_eq!(tokens.spec.tone, ToneKey::Minimal);
        assert_eq!(tokens.spec.color, ColorKey::Blue);
        assert_eq!(
            fallbacks,
            vec![
                ArchetypeFallback {
                    axis: Axis::Tone,
                    value: Some("neon".to_string()),
                    substitute: "minimal",
                },
                ArchetypeFallback {
                    axis: Axis::Color,
                    value: None,
                    substitute: "blue",
                },
            ]
        );
    }

    #[test]
    fn test_fallback_reports_nothing_for_valid_spec() {
        let resolver = TokenResolver::shared().with_policy(UnknownArchetypePolicy::Fallback);
        let (_, fallbacks) = resolver.resolve_with_report(&raw("bold")).unwrap();
        assert!(fallbacks.is_empty());
    }

    #[test]
    fn test_resolver_accepts_injected_maps() {
        let maps = DimensionMaps::builtin().unwrap();
        let resolver = TokenResolver::new(&maps);
        let tokens = resolver.resolve_spec(&StyleSpec::default());
        assert_eq!(tokens, TokenResolver::shared().resolve_spec(&StyleSpec::default()));
    }
}
