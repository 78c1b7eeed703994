/// Numeric conversion helpers.
///
/// Checked conversion from `f64` to `i64` that reports values out of range
/// as errors instead of saturating silently.
pub mod num;
