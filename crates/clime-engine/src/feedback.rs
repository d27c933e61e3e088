//! The per-cell albedo feedback rule.

use clime_space::Cell;

/// Albedo of frozen ground or sea ice.
pub const ALBEDO_ICE: f64 = 0.1;
/// Albedo of open water (`altitude > 0` under this model's sign
/// convention).
pub const ALBEDO_WATER: f64 = 0.3;
/// Albedo of bare land.
pub const ALBEDO_LAND: f64 = 0.7;

/// Recompute a cell's albedo from its temperature and altitude.
///
/// The ice rule takes precedence: any cell below freezing reads as
/// ice regardless of altitude. Idempotent for fixed inputs.
///
/// # Examples
///
/// ```
/// use clime_engine::albedo_for;
///
/// assert_eq!(albedo_for(-1.0, 5), 0.1);
/// assert_eq!(albedo_for(5.0, 2), 0.3);
/// assert_eq!(albedo_for(5.0, -1), 0.7);
/// ```
pub fn albedo_for(temperature: f64, altitude: i32) -> f64 {
    if temperature < 0.0 {
        ALBEDO_ICE
    } else if altitude > 0 {
        ALBEDO_WATER
    } else {
        ALBEDO_LAND
    }
}

/// Apply the rule in place. Touches no field other than albedo.
pub(crate) fn apply(cell: &mut Cell) {
    cell.albedo = albedo_for(cell.temperature, cell.altitude);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Rule table ──────────────────────────────────────────────

    #[test]
    fn ice_rule_wins_over_altitude() {
        assert_eq!(albedo_for(-1.0, 5), ALBEDO_ICE);
        assert_eq!(albedo_for(-100.0, -5), ALBEDO_ICE);
    }

    #[test]
    fn positive_altitude_reads_as_water() {
        assert_eq!(albedo_for(5.0, 2), ALBEDO_WATER);
        assert_eq!(albedo_for(0.0, 1), ALBEDO_WATER);
    }

    #[test]
    fn zero_and_negative_altitude_read_as_land() {
        assert_eq!(albedo_for(5.0, -1), ALBEDO_LAND);
        assert_eq!(albedo_for(0.0, 0), ALBEDO_LAND);
    }

    #[test]
    fn exactly_freezing_is_not_ice() {
        // The rule is a strict less-than.
        assert_eq!(albedo_for(0.0, 0), ALBEDO_LAND);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn albedo_stays_in_unit_interval(t in -1e6f64..1e6, alt in -100i32..100) {
            let a = albedo_for(t, alt);
            prop_assert!((0.0..=1.0).contains(&a));
            prop_assert!(a == ALBEDO_ICE || a == ALBEDO_WATER || a == ALBEDO_LAND);
        }

        #[test]
        fn rule_is_idempotent(t in -1e6f64..1e6, alt in -100i32..100) {
            let once = albedo_for(t, alt);
            prop_assert_eq!(once, albedo_for(t, alt));
        }
    }
}
