//! 2-D grid math for the settle-in stagger.
//!
//! The presentation lays the array out as a square-ish grid of
//! `ceil(sqrt(len))` columns. The settle-in command staggers each element
//! by its grid distance from the anchor cell, so the transition visually
//! radiates outward from where the search originates.

/// Number of grid columns for an array of `len` elements.
pub fn grid_columns(len: usize) -> usize {
    ((len as f64).sqrt().ceil() as usize).max(1)
}

/// (row, column) of an element index in a grid with `columns` columns.
#[inline]
pub fn cell_of(index: usize, columns: usize) -> (usize, usize) {
    (index / columns, index % columns)
}

/// Per-element settle-in delays: Euclidean grid distance from the anchor
/// cell, scaled by `stagger_ms`. The anchor itself settles at delay 0.
pub fn stagger_delays(len: usize, anchor: usize, stagger_ms: f32) -> Vec<f32> {
    let columns = grid_columns(len);
    let (ar, ac) = cell_of(anchor, columns);
    (0..len)
        .map(|i| {
            let (r, c) = cell_of(i, columns);
            let dr = r as f32 - ar as f32;
            let dc = c as f32 - ac as f32;
            (dr * dr + dc * dc).sqrt() * stagger_ms
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_ceil_sqrt() {
        assert_eq!(grid_columns(0), 1);
        assert_eq!(grid_columns(1), 1);
        assert_eq!(grid_columns(50), 8);
        assert_eq!(grid_columns(121), 11);
    }

    #[test]
    fn anchor_delay_is_zero_and_grows_with_distance() {
        let delays = stagger_delays(121, 60, 10.0);
        assert_eq!(delays.len(), 121);
        assert_eq!(delays[60], 0.0);
        // 61 is one column over from 60 in an 11-wide grid.
        assert!((delays[61] - 10.0).abs() < 1e-6);
        // 49 is one row up, so same distance as one column over.
        assert!((delays[49] - 10.0).abs() < 1e-6);
        // A diagonal neighbor is sqrt(2) cells away.
        assert!((delays[50] - 10.0 * 2.0_f32.sqrt()).abs() < 1e-4);
    }
}
