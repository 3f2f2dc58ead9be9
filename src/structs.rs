use serde::{Deserialize, Serialize};

/// One snapshot of the readings a capture host gathers right before taking a
/// photo: GPS position plus the orientation angles derived in
/// [`crate::orientation`].
///
/// Altitude, direction and pitch are optional because a fix can arrive before
/// the corresponding sensor has reported anything.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoFix {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
    /// Compass direction in degrees, already converted from the azimuth.
    pub direction: Option<f64>,
    /// Camera pitch in degrees relative to the horizon.
    pub pitch: Option<f64>,
}

/// The free-text annotation embedded in the UserComment tag.
///
/// Serialized as JSON with PascalCase keys (`AppName`, `Pitch`, ...), the key
/// scheme the original capture app used. Values are plain JSON numbers.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Annotation {
    pub app_name: String,
    pub pitch: Option<f64>,
    pub altitude: Option<f64>,
    pub direction: Option<f64>,
}

/// GPS information read back from an already-tagged file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GpsInfo {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
    pub image_direction: Option<f64>,
    /// The UserComment annotation, when present and parseable.
    pub annotation: Option<Annotation>,
}
