//! JSONL rendering of test cases

use crate::scan::TestCase;
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// One JSON object per case: `context`, `id`, `options`, `template`.
pub fn render_case(case: &TestCase) -> Value {
    let options: BTreeMap<&str, &str> = case
        .combination
        .options()
        .iter()
        .map(|option| (option.kind().key(), option.label()))
        .collect();

    // BTreeMap so keys are serialized in alphabetical order.
    let mut entry: BTreeMap<&str, Value> = BTreeMap::new();
    entry.insert("context", case.combination.render_context().into_value());
    entry.insert("id", Value::String(case.id()));
    entry.insert("options", json!(options));
    entry.insert("template", Value::String(case.template.clone()));
    json!(entry)
}

pub fn render_jsonl(cases: &[TestCase]) -> String {
    let mut lines = Vec::with_capacity(cases.len());
    for case in cases {
        if let Ok(line) = serde_json::to_string(&render_case(case)) {
            lines.push(line);
        }
    }
    if lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", lines.join("\n"))
    }
}
