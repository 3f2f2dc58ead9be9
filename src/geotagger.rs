use crate::error::GeotaggerError;
use crate::structs::{Annotation, GeoFix, GpsInfo};
use crate::tags::{TagAssignment, assignments};
use bon::bon;
use exiftool::ExifTool;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// The main entry point for preparing and verifying photo geotags.
///
/// Holds the `exiftool` process handle used for reading tags back, plus the
/// application name stamped into the UserComment annotation. Create it once
/// and reuse it across captures:
/// ```rust,no_run
/// # use geotagger::{Geotagger, GeotaggerError};
/// # fn main() -> Result<(), GeotaggerError> {
/// let geotagger = Geotagger::builder()
///     .app_name("realview")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct Geotagger {
    exiftool: ExifTool,
    app_name: String,
}

#[bon]
impl Geotagger {
    /// Constructs a `Geotagger` via a builder pattern.
    ///
    /// # Builder Arguments
    ///
    /// * `exiftool_path: Option<PathBuf>` - An optional path to a specific `exiftool` executable. If `None`, `exiftool` will be searched for in the system's PATH.
    /// * `app_name: String` - (Default: `"geotagger"`) The application name written into the UserComment annotation.
    ///
    /// # Errors
    ///
    /// Returns an error if the `exiftool` executable cannot be found or fails
    /// to start.
    #[builder]
    pub fn new(
        exiftool_path: Option<PathBuf>,
        #[builder(into, default = String::from("geotagger"))] app_name: String,
    ) -> Result<Self, GeotaggerError> {
        let exiftool = match exiftool_path {
            Some(path) => ExifTool::with_executable(&path)?,
            None => ExifTool::new()?,
        };
        Ok(Self { exiftool, app_name })
    }

    /// Encodes `fix` into the EXIF tag assignments a metadata writer should
    /// apply to the captured file.
    ///
    /// # Errors
    ///
    /// Returns [`GeotaggerError::Encode`] when a reading is NaN or infinite.
    pub fn tag_values(&self, fix: &GeoFix) -> Result<Vec<TagAssignment>, GeotaggerError> {
        Ok(assignments(fix, &self.app_name)?)
    }

    /// Reads the embedded geotag back from an already-written file.
    ///
    /// Runs `exiftool -n` so rational tags come back as plain numbers, then
    /// extracts the GPS fields. Returns `None` when the file has no latitude
    /// or longitude tag.
    ///
    /// # Errors
    ///
    /// Returns [`GeotaggerError::Exiftool`] when the file cannot be read or
    /// `exiftool` fails.
    pub fn read_geotag(&mut self, photo: &Path) -> Result<Option<GpsInfo>, GeotaggerError> {
        let numeric_exif = self.exiftool.json(photo, &["-n"])?;
        Ok(parse_gps_info(&numeric_exif))
    }
}

/// Extracts [`GpsInfo`] from the numeric (`-n`) exiftool JSON output.
///
/// Latitude and longitude are required; everything else is optional. A
/// UserComment that is not valid annotation JSON is ignored rather than
/// treated as an error, since arbitrary software writes arbitrary comments.
pub fn parse_gps_info(numeric_exif: &Value) -> Option<GpsInfo> {
    let (Some(latitude), Some(longitude)) = (
        numeric_exif.get("GPSLatitude").and_then(Value::as_f64),
        numeric_exif.get("GPSLongitude").and_then(Value::as_f64),
    ) else {
        return None;
    };
    let altitude = numeric_exif.get("GPSAltitude").and_then(Value::as_f64);
    let image_direction = numeric_exif.get("GPSImgDirection").and_then(Value::as_f64);
    let annotation = numeric_exif
        .get("UserComment")
        .and_then(Value::as_str)
        .and_then(|comment| serde_json::from_str::<Annotation>(comment).ok());

    Some(GpsInfo {
        latitude,
        longitude,
        altitude,
        image_direction,
        annotation,
    })
}
