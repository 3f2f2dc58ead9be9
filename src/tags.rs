//! Maps a [`GeoFix`] onto the EXIF tag names and pre-encoded string values a
//! metadata writer needs.

use crate::encode::coordinate::{convert, latitude_ref, longitude_ref};
use crate::encode::rational::rationalize;
use crate::error::EncodeError;
use crate::structs::{Annotation, GeoFix};

pub const GPS_LATITUDE: &str = "GPSLatitude";
pub const GPS_LATITUDE_REF: &str = "GPSLatitudeRef";
pub const GPS_LONGITUDE: &str = "GPSLongitude";
pub const GPS_LONGITUDE_REF: &str = "GPSLongitudeRef";
pub const GPS_ALTITUDE: &str = "GPSAltitude";
pub const GPS_IMG_DIRECTION: &str = "GPSImgDirection";
pub const USER_COMMENT: &str = "UserComment";

/// One EXIF tag name paired with its pre-encoded string value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagAssignment {
    pub tag: &'static str,
    pub value: String,
}

impl TagAssignment {
    fn new(tag: &'static str, value: String) -> Self {
        Self { tag, value }
    }
}

/// Encodes every available reading of `fix` into its EXIF tag assignment.
///
/// Latitude and longitude each produce a rational triplet plus a hemisphere
/// reference. Altitude and direction, when present, become single rational
/// fractions. The UserComment tag always carries the JSON [`Annotation`] with
/// the raw (unencoded) readings so they stay human-readable.
///
/// # Errors
///
/// Returns [`EncodeError::NonFinite`] if any reading is NaN or infinite; no
/// partial assignment list is produced.
pub fn assignments(fix: &GeoFix, app_name: &str) -> Result<Vec<TagAssignment>, EncodeError> {
    let mut tags = vec![
        TagAssignment::new(GPS_LATITUDE, convert(fix.latitude)?),
        TagAssignment::new(GPS_LATITUDE_REF, latitude_ref(fix.latitude).to_string()),
        TagAssignment::new(GPS_LONGITUDE, convert(fix.longitude)?),
        TagAssignment::new(GPS_LONGITUDE_REF, longitude_ref(fix.longitude).to_string()),
    ];
    if let Some(altitude) = fix.altitude {
        tags.push(TagAssignment::new(GPS_ALTITUDE, rationalize(altitude)?));
    }
    if let Some(direction) = fix.direction {
        tags.push(TagAssignment::new(GPS_IMG_DIRECTION, rationalize(direction)?));
    }

    let annotation = Annotation {
        app_name: app_name.to_string(),
        pitch: fix.pitch,
        altitude: fix.altitude,
        direction: fix.direction,
    };
    // Annotation has no map keys or values serde_json can reject.
    let comment = serde_json::to_string(&annotation).unwrap_or_default();
    tags.push(TagAssignment::new(USER_COMMENT, comment));

    Ok(tags)
}
