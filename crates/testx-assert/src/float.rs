/// Returns true if `|lhs - rhs| < delta`.
///
/// The comparison is strict, so a zero or negative `delta` never matches and
/// any NaN operand yields false.
pub fn almost_equal(lhs: f64, rhs: f64, delta: f64) -> bool {
    (lhs - rhs).abs() < delta
}
