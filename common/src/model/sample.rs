use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single field-collected sample as returned by `GET /samples`.
///
/// The API assembles most of these fields from free-form submission payloads,
/// so every field is kept as a raw JSON value and interpreted when it is
/// rendered. A field that is missing, `null`, or of an unexpected type never
/// fails decoding; it simply renders as `n/a` (or, for the location, causes the
/// sample to be skipped on the map).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sample {
    pub sample_id: Value,
    pub status: Value,
    pub site_name: Value,
    pub sampling_date: Value,
    pub collector_name: Value,
    pub tube_id: Value,
    /// Affiliation slugs, resolved to display names through an
    /// [`AffiliationDirectory`](crate::model::affiliation::AffiliationDirectory).
    pub affiliations: Value,
    pub affiliation_other: Value,
    /// Species names attached to the sample.
    pub species: Value,
    pub lat: Value,
    pub lon: Value,
    /// GeoJSON-style geometry; only `coordinates: [lon, lat]` is read.
    pub geometry: Value,
}

/// Validation state of a sample, as far as the map cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleStatus {
    Validated,
    Rejected,
    /// Anything else: pending, unknown, or missing.
    Pending,
}

impl SampleStatus {
    pub fn from_value(value: &Value) -> Self {
        match value.as_str() {
            Some("validated") => SampleStatus::Validated,
            Some("rejected") => SampleStatus::Rejected,
            _ => SampleStatus::Pending,
        }
    }
}

impl Sample {
    pub fn status(&self) -> SampleStatus {
        SampleStatus::from_value(&self.status)
    }
}

/// Decodes a `GET /samples` response body.
///
/// A body that is not a JSON array counts as an empty list. Array entries that
/// are not objects stay in the list as samples with no fields, so the list
/// length matches the response; they have no location and are never drawn.
pub fn samples_from_value(body: Value) -> Vec<Sample> {
    match body {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    }
}
