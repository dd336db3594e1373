//! Patient count conversion
//!
//! Fractional patient loads become whole patients by truncation toward
//! zero, never by rounding. Downstream buckets depend on this.

/// Truncate a non-negative patient load to a whole count
///
/// Negative and NaN loads map to 0; loads beyond `u32::MAX` saturate.
pub fn truncate_count(load: f64) -> u32 {
    // `as` saturates at the integer bounds and maps NaN to 0
    load.trunc() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_not_rounds() {
        assert_eq!(truncate_count(97.5), 97);
        assert_eq!(truncate_count(63.05), 63);
        assert_eq!(truncate_count(14.999), 14);
        assert_eq!(truncate_count(0.0), 0);
    }

    #[test]
    fn test_out_of_range_loads() {
        assert_eq!(truncate_count(-3.2), 0);
        assert_eq!(truncate_count(f64::NAN), 0);
        assert_eq!(truncate_count(1e12), u32::MAX);
    }
}
