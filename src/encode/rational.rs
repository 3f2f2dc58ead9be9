//! Best-fit rational approximation of a signed decimal via continued fractions,
//! for single-valued EXIF rational tags such as GPSAltitude and GPSImgDirection.

use crate::error::EncodeError;

/// Relative tolerance for accepting a convergent as close enough.
const TOLERANCE: f64 = 1.0e-6;

/// Encodes a signed decimal as a `"numerator/denominator"` fraction, with a
/// leading `-` for negative input.
///
/// Works by expanding the value's continued fraction and keeping the first
/// convergent whose error relative to the input drops below `1e-6`. The
/// convergent recurrence tends toward reduced fractions on its own; no
/// explicit GCD pass is applied. Exactly representable inputs terminate with
/// their exact ratio, so `rationalize(0.0)` is `"0/1"` and whole numbers come
/// out as `"n/1"`.
///
/// The loop carries the convergents in `f64` and only narrows to integers
/// when formatting, matching the precision of the values this encoder is fed
/// (altitudes and compass bearings, well inside exact integer range). Outside
/// that range the narrowing saturates: a magnitude as small as `1e-300` needs
/// a denominator beyond `i64::MAX` and encodes as `1/9223372036854775807`.
///
/// # Errors
///
/// Returns [`EncodeError::NonFinite`] for NaN or infinite input.
pub fn rationalize(value: f64) -> Result<String, EncodeError> {
    if !value.is_finite() {
        return Err(EncodeError::NonFinite(value));
    }

    let negative = value < 0.0;
    let x = value.abs();

    // Convergent state: h/k is the current approximation, h2/k2 the previous.
    let mut h1 = 1.0_f64;
    let mut h2 = 0.0_f64;
    let mut k1 = 0.0_f64;
    let mut k2 = 1.0_f64;
    let mut b = x;
    loop {
        let a = b.floor();
        (h1, h2) = (a * h1 + h2, h1);
        (k1, k2) = (a * k1 + k2, k1);
        if (x - h1 / k1).abs() <= x * TOLERANCE {
            break;
        }
        let remainder = b - a;
        if remainder == 0.0 {
            // The value is exactly an integer at this convergent; continuing
            // would divide by zero. The current ratio is already exact.
            break;
        }
        b = 1.0 / remainder;
    }

    let fraction = format!("{}/{}", h1 as i64, k1 as i64);
    Ok(if negative {
        format!("-{fraction}")
    } else {
        fraction
    })
}
