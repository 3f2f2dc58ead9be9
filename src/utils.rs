use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

/// Builds the capture file name for a photo taken at `timestamp`:
/// `photo_YYYY_MM_DD_HH_MM_SS_mmm.jpg`, millisecond resolution.
pub fn photo_filename<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!("photo_{}.jpg", timestamp.format("%Y_%m_%d_%H_%M_%S_%3f"))
}

/// [`photo_filename`] for the current local time.
pub fn new_photo_filename() -> String {
    photo_filename(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Timelike, Utc};

    #[test]
    fn test_photo_filename_matches_capture_pattern() {
        let timestamp = Utc
            .with_ymd_and_hms(2024, 3, 7, 16, 5, 9)
            .unwrap()
            .with_nanosecond(42_000_000)
            .unwrap();
        assert_eq!(
            photo_filename(&timestamp),
            "photo_2024_03_07_16_05_09_042.jpg"
        );
    }

    #[test]
    fn test_new_photo_filename_shape() {
        let name = new_photo_filename();
        assert!(name.starts_with("photo_"));
        assert!(name.ends_with(".jpg"));
        // photo_ + 23 timestamp chars + .jpg
        assert_eq!(name.len(), "photo_".len() + 23 + ".jpg".len());
    }
}
