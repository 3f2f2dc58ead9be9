//! # Geotagger
//!
//! Encode GPS position and device orientation into the EXIF rational string
//! values a photo's metadata expects, and read embedded geotags back.
//!
//! This crate is the portable core of a capture workflow: the host obtains
//! raw readings (latitude, longitude, altitude, compass azimuth, pitch) from
//! its location and sensor services, and this crate turns them into the exact
//! pre-encoded strings the GPS metadata tags require.
//!
//! ## Key Features
//!
//! - **Coordinate encoding**: decimal degrees to the `"D/1,M/1,S/1000"`
//!   rational triplet, with hemisphere references derived from the sign.
//! - **Rational approximation**: arbitrary signed decimals (altitude in
//!   meters, compass direction in degrees) to a best-fit `"N/D"` fraction via
//!   continued fractions.
//! - **Orientation conversion**: rotation-vector azimuth and pitch angles to
//!   compass direction and horizon-relative pitch in degrees.
//! - **Tag assignment**: a [`GeoFix`](structs::GeoFix) snapshot to the full
//!   list of EXIF tag/value pairs, including a JSON UserComment annotation.
//! - **Read-back**: extract the embedded geotag from a tagged file through
//!   `exiftool` for verification.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use geotagger::Geotagger;
//! use geotagger::structs::GeoFix;
//!
//! fn main() -> Result<(), geotagger::GeotaggerError> {
//!     let mut geotagger = Geotagger::builder().app_name("realview").build()?;
//!
//!     let fix = GeoFix {
//!         latitude: 52.379_189,
//!         longitude: 4.899_431,
//!         altitude: Some(10.5),
//!         direction: Some(123.45),
//!         pitch: Some(-2.5),
//!     };
//!
//!     // Hand these to your metadata writer.
//!     for assignment in geotagger.tag_values(&fix)? {
//!         println!("{} = {}", assignment.tag, assignment.value);
//!     }
//!
//!     // Later: verify what actually landed in the file.
//!     let embedded = geotagger.read_geotag(std::path::Path::new("photo.jpg"))?;
//!     println!("Embedded: {embedded:?}");
//!     Ok(())
//! }
//! ```

pub mod encode;
pub mod error;
pub mod geotagger;
pub mod orientation;
pub mod structs;
pub mod tags;
pub mod utils;

pub use crate::geotagger::Geotagger;
pub use error::{EncodeError, GeotaggerError};
