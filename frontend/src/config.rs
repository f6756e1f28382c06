//! Build-time settings for the dashboard.
//!
//! The API base can be overridden when building, e.g.
//! `WWM_API_BASE=https://wwm.example.org/api trunk build --release`.

pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

pub const MAP_CONTAINER_ID: &str = "map";
pub const INITIAL_CENTER: (f64, f64) = (20.0, 0.0);
pub const INITIAL_ZOOM: f64 = 2.0;

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_MAX_ZOOM: u8 = 19;
pub const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

pub fn api_base() -> String {
    option_env!("WWM_API_BASE")
        .filter(|base| !base.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .to_string()
}
