//! Decimal-degree to degrees/minutes/seconds rational-triplet encoding, plus
//! hemisphere reference classification, in the format the EXIF GPS IFD expects.

use crate::error::EncodeError;

/// Hemisphere reference for a latitude: `"S"` for negative values, `"N"` otherwise.
///
/// Zero is treated as northern. NaN is not less than zero and therefore also
/// maps to `"N"`; callers that care should validate before calling.
pub fn latitude_ref(latitude: f64) -> &'static str {
    if latitude < 0.0 { "S" } else { "N" }
}

/// Hemisphere reference for a longitude: `"W"` for negative values, `"E"` otherwise.
///
/// Same NaN behavior as [`latitude_ref`].
pub fn longitude_ref(longitude: f64) -> &'static str {
    if longitude < 0.0 { "W" } else { "E" }
}

/// Encodes a decimal-degree coordinate as the EXIF rational triplet
/// `"D/1,M/1,S/1000"`.
///
/// The sign is discarded here; it travels separately through [`latitude_ref`]
/// or [`longitude_ref`]. Degrees and minutes are truncated integer parts, and
/// the seconds component is truncated after scaling by 1000, so millisecond
/// precision survives without a decimal point. Nothing is ever rounded up.
///
/// Minutes are clamped to 59 and milli-seconds to 59 999: near-boundary
/// inputs like 44.99999999 can otherwise overflow their modulus through
/// accumulated floating-point error.
///
/// # Errors
///
/// Returns [`EncodeError::NonFinite`] for NaN or infinite input.
pub fn convert(value: f64) -> Result<String, EncodeError> {
    if !value.is_finite() {
        return Err(EncodeError::NonFinite(value));
    }

    let mut output = value.abs();
    let degrees = output as i64;
    output *= 60.0;
    // The cascade stays in f64 so huge (if nonsensical) inputs cannot
    // overflow integer arithmetic; narrowing happens only when formatting.
    output -= degrees as f64 * 60.0;
    let minutes = output as i64;
    output *= 60.0;
    output -= minutes as f64 * 60.0;
    let millis = (output * 1000.0) as i64;

    Ok(format!(
        "{}/1,{}/1,{}/1000",
        degrees,
        minutes.min(59),
        millis.min(59_999)
    ))
}
