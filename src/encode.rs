//! Pure value encoders that turn raw sensor readings into EXIF rational strings.
//!
//! Both encoders are stateless: every call works on a fresh local buffer, so
//! they can be invoked from any number of threads without synchronization.

pub mod coordinate;
pub mod rational;
