//! Turning samples into map markers.
//!
//! The browser side only has to hand each [`MarkerSpec`] to the map widget;
//! every decision about where a marker goes, how it looks, and what its popup
//! says is made here.

pub mod coords;
pub mod popup;
pub mod style;

use crate::model::affiliation::AffiliationDirectory;
use crate::model::sample::Sample;

pub use coords::LatLon;
pub use style::MarkerStyle;

/// Everything needed to place one circle marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub position: LatLon,
    pub style: MarkerStyle,
    pub popup_html: String,
}

/// Builds markers for `samples`, silently skipping samples without a usable
/// location. Order follows the input.
pub fn plan_markers(samples: &[Sample], directory: &AffiliationDirectory) -> Vec<MarkerSpec> {
    samples
        .iter()
        .filter_map(|sample| {
            let position = coords::resolve(sample)?;
            Some(MarkerSpec {
                position,
                style: MarkerStyle::for_status(sample.status()),
                popup_html: popup::popup_html(sample, directory),
            })
        })
        .collect()
}
