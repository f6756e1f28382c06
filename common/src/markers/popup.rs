//! Popup text for a sample marker.
//!
//! Scalar fields follow the dashboard's "n/a" convention: a missing, `null`,
//! empty, zero or `false` value is shown as `n/a`. Lists are joined with
//! `", "`. Every interpolated value is HTML-escaped because the popup is set
//! as markup.

use serde_json::Value;

use crate::model::affiliation::AffiliationDirectory;
use crate::model::sample::Sample;

pub const NOT_AVAILABLE: &str = "n/a";

pub fn popup_html(sample: &Sample, directory: &AffiliationDirectory) -> String {
    let rows = [
        ("sample_id", scalar(&sample.sample_id)),
        ("status", scalar(&sample.status)),
        ("site_name", scalar(&sample.site_name)),
        ("sampling_date", scalar(&sample.sampling_date)),
        ("collector_name", scalar(&sample.collector_name)),
        ("tube_id", scalar(&sample.tube_id)),
        ("affiliations", affiliations(sample, directory)),
        ("species", list(&sample.species, |name| name.to_string())),
    ];

    rows.iter()
        .map(|(label, value)| format!("<strong>{}:</strong> {}", label, escape_html(value)))
        .collect::<Vec<_>>()
        .join("<br>")
}

fn affiliations(sample: &Sample, directory: &AffiliationDirectory) -> String {
    let names = list(&sample.affiliations, |slug| directory.resolve(slug).to_string());
    match text(&sample.affiliation_other) {
        Some(other) => format!("{} ({})", names, other),
        None => names,
    }
}

fn scalar(value: &Value) -> String {
    text(value).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn list(value: &Value, resolve: impl Fn(&str) -> String) -> String {
    match value.as_array() {
        Some(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => resolve(s),
                other => js_string(other),
            })
            .collect::<Vec<_>>()
            .join(", "),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Text form of a value, or `None` when it counts as "not set".
fn text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(js_string(other)),
    }
}

/// String conversion as a browser performs it: whole floats lose their
/// fraction, arrays are joined with `,` (nulls empty), objects are opaque.
fn js_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        Value::Array(items) => items.iter().map(js_string).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Escapes the characters that are significant in HTML text and attributes.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
