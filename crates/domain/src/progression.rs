//! Experience curve and level-up scaling
//!
//! The curve is linear: reaching level `n + 1` from level `n` costs `100 * n`
//! experience. Each level-up grows max health by 10% and ability damage by
//! 5%, truncated toward zero.

/// Experience required per level on the linear curve.
pub const EXPERIENCE_PER_LEVEL: i32 = 100;

/// Max health growth per level-up, in percent of the current value.
pub const MAX_HEALTH_GROWTH_PERCENT: i64 = 110;

/// Ability damage growth per level-up, in percent of the current value.
pub const ABILITY_DAMAGE_GROWTH_PERCENT: i64 = 105;

/// Experience required to advance from `level` to the next level.
///
/// ```
/// use alliance_domain::progression::experience_to_next_level;
///
/// assert_eq!(experience_to_next_level(1), 100);
/// assert_eq!(experience_to_next_level(2), 200);
/// ```
pub fn experience_to_next_level(level: i32) -> i32 {
    EXPERIENCE_PER_LEVEL.saturating_mul(level)
}

/// Scale `value` by `percent`, truncating toward zero.
///
/// Integer arithmetic keeps the truncation exact (`40 * 1.05` is 42, not
/// 41.99...). Results saturate at `i32::MAX`.
pub(crate) fn scale_percent(value: i32, percent: i64) -> i32 {
    let scaled = i64::from(value) * percent / 100;
    i32::try_from(scaled).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_is_linear_in_level() {
        assert_eq!(experience_to_next_level(1), 100);
        assert_eq!(experience_to_next_level(5), 500);
    }

    #[test]
    fn curve_saturates_instead_of_overflowing() {
        assert_eq!(experience_to_next_level(i32::MAX), i32::MAX);
    }

    #[test]
    fn scaling_truncates_toward_zero() {
        assert_eq!(scale_percent(100, MAX_HEALTH_GROWTH_PERCENT), 110);
        assert_eq!(scale_percent(110, MAX_HEALTH_GROWTH_PERCENT), 121);
        assert_eq!(scale_percent(40, ABILITY_DAMAGE_GROWTH_PERCENT), 42);
        assert_eq!(scale_percent(42, ABILITY_DAMAGE_GROWTH_PERCENT), 44);
        assert_eq!(scale_percent(5, ABILITY_DAMAGE_GROWTH_PERCENT), 5);
    }

    #[test]
    fn scaling_saturates() {
        assert_eq!(scale_percent(i32::MAX, MAX_HEALTH_GROWTH_PERCENT), i32::MAX);
    }
}
