//! Content tree input: nodes, prop bags and the dashboard document
//!
//! Everything here is untrusted. Prop bags keep their raw JSON private; the
//! only way to read them is through [`Props`], which routes every read through
//! the coercion layer.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::coerce::{self, CoercedValue, CoercionKind, CoercionLimits, Text, TextList, TextRows};
use crate::error::ContentError;
use crate::tokens::{RawStyleSpec, StatusVariant};

static NULL: Value = Value::Null;

/// An untyped prop bag as supplied by the content producer
///
/// Anything other than a JSON object deserializes to an empty bag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawProps(Map<String, Value>);

impl RawProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a prop, returning the updated bag
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for RawProps {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<'de> Deserialize<'de> for RawProps {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Object(map) => RawProps(map),
            _ => RawProps::default(),
        })
    }
}

/// Read-only, coercing view of a prop bag handed to renderers
#[derive(Debug, Clone, Copy)]
pub struct Props<'a> {
    raw: &'a RawProps,
    limits: CoercionLimits,
}

impl<'a> Props<'a> {
    pub fn new(raw: &'a RawProps, limits: CoercionLimits) -> Self {
        Self { raw, limits }
    }

    fn get(&self, key: &str) -> &'a Value {
        self.raw.0.get(key).unwrap_or(&NULL)
    }

    /// The first of `keys` that is present and not null
    fn first(&self, keys: &[&str]) -> &'a Value {
        keys.iter()
            .map(|key| self.get(key))
            .find(|value| !value.is_null())
            .unwrap_or(&NULL)
    }

    /// True when the prop is present and not null
    pub fn has(&self, key: &str) -> bool {
        !self.get(key).is_null()
    }

    /// Scalar prop as text, or `fallback`
    pub fn text(&self, key: &str, fallback: &str) -> Text {
        coerce::as_text(self.get(key), fallback)
    }

    /// Like [`Props::text`], trying several keys in order
    pub fn text_any(&self, keys: &[&str], fallback: &str) -> Text {
        coerce::as_text(self.first(keys), fallback)
    }

    /// List prop as text items
    pub fn text_list(&self, key: &str) -> TextList {
        coerce::as_text_list_with(self.get(key), &self.limits)
    }

    /// Like [`Props::text_list`], trying several keys in order
    pub fn text_list_any(&self, keys: &[&str]) -> TextList {
        coerce::as_text_list_with(self.first(keys), &self.limits)
    }

    /// Nested list prop as text rows
    pub fn text_rows(&self, key: &str) -> TextRows {
        coerce::as_text_rows_with(self.get(key), &self.limits)
    }

    /// Prop coerced into the requested shape
    pub fn coerce(&self, key: &str, kind: CoercionKind) -> CoercedValue {
        coerce::coerce(self.get(key), kind, &self.limits)
    }

    /// Prop read as a percentage in `0..=100`
    ///
    /// Accepts numbers and numeric text with an optional trailing `%`.
    pub fn percent(&self, key: &str) -> Option<f64> {
        let text = self.text(key, "");
        let value: f64 = text.trim().trim_end_matches('%').trim().parse().ok()?;
        value.is_finite().then(|| value.clamp(0.0, 100.0))
    }

    /// Prop read as a status variant; unrecognized values are neutral
    pub fn status(&self, key: &str) -> StatusVariant {
        StatusVariant::parse_lenient(&self.text(key, ""))
    }
}

/// A node of the content tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentNode {
    /// Registry component name
    #[serde(rename = "componentName", alias = "component", alias = "type")]
    pub component: String,
    #[serde(default)]
    pub props: RawProps,
    #[serde(default, deserialize_with = "lenient_children")]
    pub children: Vec<ContentNode>,
}

impl ContentNode {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            props: RawProps::default(),
            children: Vec::new(),
        }
    }

    /// Add a prop, returning the updated node
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props = self.props.with(key, value);
        self
    }

    /// Append a child, returning the updated node
    pub fn with_child(mut self, child: ContentNode) -> Self {
        self.children.push(child);
        self
    }
}

fn node_from_value<E: serde::de::Error>(value: Value) -> Result<ContentNode, E> {
    serde_json::from_value(value).map_err(E::custom)
}

/// Children that are not a list are ignored, as are list entries that are
/// not objects; an object entry must still be a valid node
fn lenient_children<'de, D>(deserializer: D) -> Result<Vec<ContentNode>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter(Value::is_object)
            .map(node_from_value::<D::Error>)
            .collect(),
        _ => Ok(Vec::new()),
    }
}

/// Accept either a single root node or a list of them
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<ContentNode>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(vec![node_from_value::<D::Error>(value)?]),
        Value::Array(items) => items
            .into_iter()
            .filter(Value::is_object)
            .map(node_from_value::<D::Error>)
            .collect(),
        _ => Err(serde::de::Error::custom(
            "content must be a component node or a list of nodes",
        )),
    }
}

/// A complete dashboard: style spec plus content tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardDocument {
    #[serde(default)]
    pub style: RawStyleSpec,
    #[serde(deserialize_with = "one_or_many")]
    pub content: Vec<ContentNode>,
}

impl DashboardDocument {
    /// Parse a document from JSON source
    pub fn from_json(source: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(source)?)
    }
}
