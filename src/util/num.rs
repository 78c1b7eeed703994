/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// ## Errors
/// Returns `Err(error)` for NaN, infinities, and values whose integer part
/// lies outside the `i64` range.
///
/// ## Example
/// ```
/// use francois::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(7.9, ()), Ok(7));
/// assert_eq!(f64_to_i64_truncated(-2.5, ()), Ok(-2));
/// assert!(f64_to_i64_truncated(f64::NAN, ()).is_err());
/// assert!(f64_to_i64_truncated(1e300, ()).is_err());
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn f64_to_i64_truncated<E>(value: f64, error: E) -> Result<i64, E> {
    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(error);
    }
    Ok(truncated as i64)
}
