//! Defensive coercion of untyped prop values
//!
//! Content trees come from a generative planner, so any prop may be missing,
//! wrongly typed or structurally odd. These functions are total: they turn any
//! JSON value into a renderable primitive and substitute a fallback instead of
//! failing. Renderers only ever read props through them.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A single line of renderable text
pub type Text = String;
/// An ordered list of non-empty text items
pub type TextList = Vec<String>;
/// Rows of text cells; rows may differ in length
pub type TextRows = Vec<Vec<String>>;

/// Upper bounds on how much of a list the coercion functions inspect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoercionLimits {
    pub max_list_items: usize,
    pub max_rows: usize,
    /// Cells inspected per row
    pub max_cells: usize,
}

impl Default for CoercionLimits {
    fn default() -> Self {
        Self {
            max_list_items: 500,
            max_rows: 500,
            max_cells: 64,
        }
    }
}

/// The primitive shape a prop should be coerced into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoercionKind {
    Text,
    TextList,
    TextRows,
}

/// A defensively typed copy of a prop value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoercedValue {
    Text(Text),
    TextList(TextList),
    TextRows(TextRows),
}

impl CoercedValue {
    /// True for empty text, an empty list, or no rows
    pub fn is_empty(&self) -> bool {
        match self {
            CoercedValue::Text(text) => text.is_empty(),
            CoercedValue::TextList(items) => items.is_empty(),
            CoercedValue::TextRows(rows) => rows.is_empty(),
        }
    }
}

/// Coerce a value into the requested shape
pub fn coerce(value: &Value, kind: CoercionKind, limits: &CoercionLimits) -> CoercedValue {
    match kind {
        CoercionKind::Text => CoercedValue::Text(as_text(value, "")),
        CoercionKind::TextList => CoercedValue::TextList(as_text_list_with(value, limits)),
        CoercionKind::TextRows => CoercedValue::TextRows(as_text_rows_with(value, limits)),
    }
}

/// Strings pass through, numbers and booleans are stringified, anything else
/// yields `fallback`
pub fn as_text(value: &Value, fallback: &str) -> Text {
    scalar_text(value).unwrap_or_else(|| fallback.to_string())
}

/// Scalar items of a list, stringified, with empty strings dropped
///
/// Non-list input yields an empty list.
pub fn as_text_list(value: &Value) -> TextList {
    as_text_list_with(value, &CoercionLimits::default())
}

/// [`as_text_list`] with explicit limits
pub fn as_text_list_with(value: &Value, limits: &CoercionLimits) -> TextList {
    let Value::Array(items) = value else {
        return Vec::new();
    };
    items
        .iter()
        .take(limits.max_list_items)
        .filter_map(scalar_text)
        .filter(|text| !text.is_empty())
        .collect()
}

/// List-valued items of a list, each cell coerced with [`as_text`]
///
/// Rows whose every cell is empty are dropped. Rows are not padded, so
/// callers must index cells defensively.
pub fn as_text_rows(value: &Value) -> TextRows {
    as_text_rows_with(value, &CoercionLimits::default())
}

/// [`as_text_rows`] with explicit limits
pub fn as_text_rows_with(value: &Value, limits: &CoercionLimits) -> TextRows {
    let Value::Array(rows) = value else {
        return Vec::new();
    };
    rows.iter()
        .take(limits.max_rows)
        .filter_map(|row| match row {
            Value::Array(cells) => Some(cells),
            _ => None,
        })
        .map(|cells| {
            cells
                .iter()
                .take(limits.max_cells)
                .map(|cell| as_text(cell, ""))
                .collect::<Vec<_>>()
        })
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .collect()
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Integral floats print without a fractional part (`3.0` becomes `3`)
fn number_text(n: &Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
                return format!("{}", f as i64);
            }
        }
    }
    n.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_as_text_scalars() {
        assert_eq!(as_text(&json!("hello"), "fb"), "hello");
        assert_eq!(as_text(&json!(42), "fb"), "42");
        assert_eq!(as_text(&json!(-1.5), "fb"), "-1.5");
        assert_eq!(as_text(&json!(3.0), "fb"), "3");
        assert_eq!(as_text(&json!(true), "fb"), "true");
        assert_eq!(as_text(&json!(""), "fb"), "");
    }

    #[test]
    fn test_as_text_non_scalars_use_fallback() {
        assert_eq!(as_text(&Value::Null, "fb"), "fb");
        assert_eq!(as_text(&json!(["a"]), "fb"), "fb");
        assert_eq!(as_text(&json!({"label": "a"}), "fb"), "fb");
        assert_eq!(as_text(&Value::Null, ""), "");
    }

    #[test]
    fn test_as_text_list_filters_and_preserves_order() {
        assert_eq!(
            as_text_list(&json!(["a", 3, "", null, "b"])),
            vec!["a", "3", "b"]
        );
        assert_eq!(
            as_text_list(&json!([false, {"x": 1}, ["nested"], 0])),
            vec!["false", "0"]
        );
    }

    #[test]
    fn test_as_text_list_non_list_is_empty() {
        assert!(as_text_list(&json!("a, b")).is_empty());
        assert!(as_text_list(&Value::Null).is_empty());
        assert!(as_text_list(&json!({"0": "a"})).is_empty());
    }

    #[test]
    fn test_as_text_rows_drops_empty_and_non_list_rows() {
        assert_eq!(
            as_text_rows(&json!([["", ""], ["x", "y"], "not-a-row"])),
            vec![vec!["x", "y"]]
        );
    }

    #[test]
    fn test_as_text_rows_keeps_ragged_rows() {
        let rows = as_text_rows(&json!([["a"], ["b", null, 2], []]));
        assert_eq!(rows, vec![vec!["a".to_string()], vec!["b".into(), "".into(), "2".into()]]);
    }

    #[test]
    fn test_limits_bound_inspected_items() {
        let limits = CoercionLimits {
            max_list_items: 2,
            max_rows: 1,
            max_cells: 1,
        };
        assert_eq!(as_text_list_with(&json!(["a", "b", "c"]), &limits), vec!["a", "b"]);
        assert_eq!(
            as_text_rows_with(&json!([["a", "b"], ["c"]]), &limits),
            vec![vec!["a"]]
        );
    }

    #[test]
    fn test_coerce_dispatches_on_kind() {
        let limits = CoercionLimits::default();
        assert_eq!(
            coerce(&json!(7), CoercionKind::Text, &limits),
            CoercedValue::Text("7".to_string())
        );
        assert!(coerce(&json!(7), CoercionKind::TextList, &limits).is_empty());
        assert!(coerce(&json!([[""]]), CoercionKind::TextRows, &limits).is_empty());
    }
}
