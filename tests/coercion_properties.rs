//! Property tests: coercion and rendering are total over arbitrary JSON

use proptest::prelude::*;
use serde_json::{Map, Value};

use agent_dashboard::coerce::{as_text, as_text_list_with, as_text_rows_with, CoercionLimits};
use agent_dashboard::tokens::{StyleSpec, TokenResolver};
use agent_dashboard::{ComponentKind, HtmlConfig, RawProps, Registry};

const PROP_KEYS: &[&str] = &[
    "label", "title", "text", "content", "variant", "items", "links", "rows", "columns",
    "statusColumn", "value", "delta", "trend", "level", "active", "cta", "ordered",
];

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1.0e9f64..1.0e9).prop_map(Value::from),
        "[ -~]{0,16}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

fn props() -> impl Strategy<Value = RawProps> {
    prop::collection::btree_map(prop::sample::select(PROP_KEYS), json_value(), 0..8).prop_map(
        |map| {
            let map: Map<String, Value> = map
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect();
            RawProps::from(map)
        },
    )
}

fn limits() -> impl Strategy<Value = CoercionLimits> {
    (0usize..10, 0usize..10, 0usize..10).prop_map(|(max_list_items, max_rows, max_cells)| {
        CoercionLimits {
            max_list_items,
            max_rows,
            max_cells,
        }
    })
}

proptest! {
    #[test]
    fn text_is_input_or_fallback(value in json_value()) {
        let text = as_text(&value, "fallback");
        match &value {
            Value::String(s) => prop_assert_eq!(&text, s),
            Value::Array(_) | Value::Object(_) | Value::Null => prop_assert_eq!(text, "fallback"),
            Value::Bool(_) | Value::Number(_) => prop_assert!(!text.is_empty()),
        }
    }

    #[test]
    fn text_lists_are_bounded_and_non_empty(value in json_value(), limits in limits()) {
        let items = as_text_list_with(&value, &limits);
        prop_assert!(items.len() <= limits.max_list_items);
        prop_assert!(items.iter().all(|item| !item.is_empty()));
        if !value.is_array() {
            prop_assert!(items.is_empty());
        }
    }

    #[test]
    fn text_rows_are_bounded_and_never_blank(value in json_value(), limits in limits()) {
        let rows = as_text_rows_with(&value, &limits);
        prop_assert!(rows.len() <= limits.max_rows);
        for row in &rows {
            prop_assert!(row.len() <= limits.max_cells);
            prop_assert!(row.iter().any(|cell| !cell.is_empty()));
        }
    }

    #[test]
    fn every_component_renders_any_props(props in props()) {
        let tokens = TokenResolver::shared().resolve_spec(&StyleSpec::default());
        let registry = Registry::new();
        let config = HtmlConfig::new().with_standalone(false);
        for kind in ComponentKind::ALL {
            let fragment = registry.dispatch(kind.as_str(), &tokens, &props, &[]);
            prop_assert!(fragment.is_ok(), "{} failed", kind);
            let _ = fragment.unwrap().to_html(&config);
        }
    }

    #[test]
    fn text_content_is_escaped(content in "[<>&\"a-z ]{1,24}") {
        prop_assume!(!content.trim().is_empty());
        let tokens = TokenResolver::shared().resolve_spec(&StyleSpec::default());
        let props = RawProps::new().with("content", content);
        let html = Registry::new()
            .dispatch("Text", &tokens, &props, &[])
            .unwrap()
            .to_html(&HtmlConfig::new().with_standalone(false).with_pretty_print(false));
        prop_assert_eq!(html.matches('<').count(), 2);
        prop_assert_eq!(html.matches('>').count(), 2);
    }
}
