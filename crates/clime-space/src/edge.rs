//! Per-axis boundary behavior for the lat/lon lattice.

/// How one lattice axis resolves an out-of-bounds neighbor step.
///
/// The climate grid mixes behaviors: the column axis wraps (the map is
/// periodic east-west), while the row axis absorbs (there is no
/// neighbor across a pole).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisBehavior {
    /// Out-of-bounds steps wrap to the opposite side (periodic).
    Wrap,
    /// Out-of-bounds steps are omitted (fewer neighbors at the edge).
    Absorb,
}

/// Resolve a single axis value under the given behavior.
///
/// Returns `Some(resolved)` for in-bounds or wrapped values, `None` for
/// an absorbed out-of-bounds step. `len` must be non-zero.
pub fn resolve_axis(val: i64, len: u32, behavior: AxisBehavior) -> Option<u32> {
    let n = i64::from(len);
    if (0..n).contains(&val) {
        return Some(val as u32);
    }
    match behavior {
        AxisBehavior::Absorb => None,
        AxisBehavior::Wrap => Some((((val % n) + n) % n) as u32),
    }
}
