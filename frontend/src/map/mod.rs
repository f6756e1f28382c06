//! The sample map: a Leaflet map with one marker layer that is replaced
//! wholesale on every render.

mod leaflet;

use common::markers::{plan_markers, LatLon};
use common::model::affiliation::AffiliationDirectory;
use common::model::sample::Sample;
use js_sys::{Array, JSON};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::config;
use leaflet::{LayerGroup, LeafletMap};

#[derive(Debug, Error)]
pub enum MapError {
    #[error("map widget error: {0}")]
    Widget(String),
    #[error("could not encode widget options: {0}")]
    Options(#[from] serde_json::Error),
}

impl From<JsValue> for MapError {
    fn from(value: JsValue) -> Self {
        MapError::Widget(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileOptions {
    max_zoom: u8,
    attribution: &'static str,
}

pub struct SampleMap {
    map: LeafletMap,
    markers: LayerGroup,
}

impl SampleMap {
    /// Creates the map inside the element with id `container_id`, adds the
    /// OpenStreetMap base layer and an empty marker layer.
    pub fn mount(container_id: &str) -> Result<Self, MapError> {
        let map = leaflet::map(container_id)?;
        let (lat, lon) = config::INITIAL_CENTER;
        map.set_view(&lat_lon(LatLon { lat, lon }), config::INITIAL_ZOOM);

        let tiles = TileOptions {
            max_zoom: config::TILE_MAX_ZOOM,
            attribution: config::TILE_ATTRIBUTION,
        };
        leaflet::tile_layer(config::TILE_URL, &to_js(&tiles)?)?.add_to(&map);

        let markers = leaflet::layer_group()?;
        markers.add_to(&map);

        Ok(Self { map, markers })
    }

    /// Clears the marker layer and adds one circle marker per sample with a
    /// resolvable location.
    pub fn replace_markers(
        &self,
        samples: &[Sample],
        directory: &AffiliationDirectory,
    ) -> Result<(), MapError> {
        self.markers.clear_layers();

        for spec in plan_markers(samples, directory) {
            let marker = leaflet::circle_marker(&lat_lon(spec.position), &to_js(&spec.style)?)?;
            marker.bind_popup(&spec.popup_html);
            self.markers.add_layer(&marker);
        }
        Ok(())
    }

    pub fn clear(&self) {
        self.markers.clear_layers();
    }

    pub fn invalidate_size(&self) {
        self.map.invalidate_size();
    }
}

fn lat_lon(position: LatLon) -> JsValue {
    Array::of2(&JsValue::from_f64(position.lat), &JsValue::from_f64(position.lon)).into()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, MapError> {
    Ok(JSON::parse(&serde_json::to_string(value)?)?)
}
