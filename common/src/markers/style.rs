use serde::Serialize;

use crate::model::sample::SampleStatus;

pub const VALIDATED_COLOR: &str = "#1e8e3e";
pub const REJECTED_COLOR: &str = "#c62828";
pub const PENDING_COLOR: &str = "#ef6c00";

const RADIUS: f64 = 7.0;
const WEIGHT: f64 = 2.0;

/// Circle marker options, serialized with the option names the map widget
/// understands (`fillColor`, `fillOpacity`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub radius: f64,
    pub color: &'static str,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
    pub weight: f64,
}

impl MarkerStyle {
    pub fn for_status(status: SampleStatus) -> Self {
        let (color, fill_opacity) = match status {
            SampleStatus::Validated => (VALIDATED_COLOR, 0.95),
            SampleStatus::Rejected => (REJECTED_COLOR, 0.95),
            SampleStatus::Pending => (PENDING_COLOR, 0.9),
        };
        Self {
            radius: RADIUS,
            color,
            fill_color: color,
            fill_opacity,
            weight: WEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn colors_follow_status() {
        assert_eq!(MarkerStyle::for_status(SampleStatus::Validated).fill_color, "#1e8e3e");
        assert_eq!(MarkerStyle::for_status(SampleStatus::Rejected).fill_color, "#c62828");
        assert_eq!(MarkerStyle::for_status(SampleStatus::Pending).fill_color, "#ef6c00");
        assert_eq!(
            MarkerStyle::for_status(SampleStatus::from_value(&Value::Null)).color,
            "#ef6c00"
        );
    }

    #[test]
    fn pending_markers_are_slightly_lighter() {
        let validated = MarkerStyle::for_status(SampleStatus::Validated);
        let pending = MarkerStyle::for_status(SampleStatus::Pending);
        assert_eq!(validated.radius, pending.radius);
        assert_eq!(pending.fill_opacity, 0.9);
        assert_eq!(validated.fill_opacity, 0.95);
    }

    #[test]
    fn serializes_widget_option_names() {
        let options = serde_json::to_value(MarkerStyle::for_status(SampleStatus::Rejected)).unwrap();
        assert_eq!(
            options,
            json!({
                "radius": 7.0,
                "color": "#c62828",
                "fillColor": "#c62828",
                "fillOpacity": 0.95,
                "weight": 2.0
            })
        );
    }
}
