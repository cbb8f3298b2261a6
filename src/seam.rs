// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seams: tracing them out of a cost table, and keeping buffered
//! seams aligned with a grid that is growing underneath them.

use crate::cost::CostTable;
use crate::energy::EnergyMap;
use crate::error::{CarveError, Result};
use std::collections::VecDeque;

/// One column index per row, top to bottom.  Consecutive entries
/// differ by at most one.  Only meaningful against the width of the
/// grid it was traced on.
pub type Seam = Vec<u32>;

/// Seams waiting to be replayed, oldest first.
pub type SeamBuffer = VecDeque<Seam>;

/// Walk the cost table back up from the cheapest cell of the bottom
/// row.  At each step the predecessors are tried left, straight,
/// right, and the first one whose cost explains the current cell wins.
/// `energy` must be the map `cost` was built from.
pub fn trace_vertical_seam(energy: &EnergyMap, cost: &CostTable) -> Result<Seam> {
    let (width, height) = energy.dimensions();
    if cost.dimensions() != (width, height) {
        return Err(CarveError::shape("cost table", (width, height), cost.dimensions()));
    }
    if width == 0 {
        return Err(CarveError::DegenerateWidth { width });
    }
    if height == 0 {
        return Ok(Seam::new());
    }

    // Find the x coordinate of the bottommost seam with the least
    // energy.  min_by_key keeps the first of several equal minima.
    let start = (0..width)
        .min_by_key(|x| cost[(*x, height - 1)])
        .unwrap_or(0);

    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    let mut seam = (1..height).rev().try_fold(
        vec![start],
        |mut acc: Seam, y| -> Result<Seam> {
            let x = acc[acc.len() - 1];
            let wanted = cost[(x, y)] - energy[(x, y)];
            let parent = [x.checked_sub(1), Some(x), Some(x + 1)]
                .iter()
                .filter_map(|c| *c)
                .find(|c| *c < width && cost[(*c, y - 1)] == wanted)
                .ok_or(CarveError::SeamTrace { row: y })?;
            acc.push(parent);
            Ok(acc)
        },
    )?;
    seam.reverse();
    Ok(seam)
}

/// Check that a seam fits a grid of the given dimensions: one entry
/// per row, every entry a real column.
pub fn check_seam(seam: &[u32], (width, height): (u32, u32)) -> Result<()> {
    if seam.len() != height as usize {
        return Err(CarveError::SeamLength {
            expected: height as usize,
            found: seam.len(),
        });
    }
    match seam.iter().position(|column| *column >= width) {
        Some(row) => Err(CarveError::SeamOutOfBounds {
            row: row as u32,
            column: seam[row],
            width,
        }),
        None => Ok(()),
    }
}

/// Move a buffered seam to account for `inserted` having just been
/// added to the grid.  Row by row, every column at or right of the
/// inserted column moves two places right: one for the new column
/// itself, one for the column that was removed from the narrower copy
/// the buffered seam was traced on.
pub fn remap(seam: &[u32], inserted: &[u32]) -> Seam {
    seam.iter()
        .zip(inserted)
        .map(|(&column, &at)| cq!(column >= at, column + 2, column))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::calculate_cost;

    const ENERGY_DATA: [i64; 20] = [9, 9, 0, 9, 9, 9, 1, 9, 8, 9, 9, 9, 9, 9, 0, 9, 9, 9, 0, 9];

    fn trace(energy: &EnergyMap) -> Seam {
        trace_vertical_seam(energy, &calculate_cost(energy)).unwrap()
    }

    #[test]
    fn energy_grid_to_vertical_seam() {
        let energy = EnergyMap::from_vec(5, 4, ENERGY_DATA.to_vec()).unwrap();
        assert_eq!(trace(&energy), [2, 3, 4, 3]);
    }

    #[test]
    fn flat_energy_hugs_the_left_edge() {
        let energy = EnergyMap::new(3, 3);
        assert_eq!(trace(&energy), [0, 0, 0]);
    }

    #[test]
    fn seam_avoids_a_high_energy_stripe() {
        let energy = EnergyMap::from_fn(4, 4, |x, _| cq!(x == 2, 1000, 0));
        let seam = trace(&energy);
        assert_eq!(seam.len(), 4);
        assert!(seam.iter().all(|x| *x != 2));
    }

    #[test]
    fn left_predecessor_wins_a_tie() {
        // Bottom row is cheapest in the middle; both diagonals above
        // it cost 5, the straight parent costs 7.
        let energy = EnergyMap::from_vec(3, 2, vec![5, 7, 5, 1, 0, 1]).unwrap();
        assert_eq!(trace(&energy), [0, 1]);
    }

    #[test]
    fn steps_stay_within_one_column() {
        let energy = EnergyMap::from_fn(7, 9, |x, y| ((x * 7 + y * 13) % 11) as i64);
        let seam = trace(&energy);
        assert_eq!(seam.len(), 9);
        assert!(seam.iter().all(|x| *x < 7));
        assert!(seam.windows(2).all(|w| (w[0] as i64 - w[1] as i64).abs() <= 1));
    }

    #[test]
    fn mismatched_cost_table_is_fatal() {
        let energy = EnergyMap::new(2, 2);
        let cost = CostTable::from_vec(2, 2, vec![0, 0, 5, 5]).unwrap();
        match trace_vertical_seam(&energy, &cost) {
            Err(CarveError::SeamTrace { row: 1 }) => (),
            other => panic!("expected a trace error, got {:?}", other),
        }
    }

    #[test]
    fn seams_are_checked_against_the_grid() {
        assert!(check_seam(&[0, 1, 2], (3, 3)).is_ok());
        assert!(check_seam(&[0, 1], (3, 3)).is_err());
        match check_seam(&[0, 3, 2], (3, 3)) {
            Err(CarveError::SeamOutOfBounds { row: 1, column: 3, width: 3 }) => (),
            other => panic!("expected an out of bounds error, got {:?}", other),
        }
    }

    #[test]
    fn remap_shifts_row_by_row() {
        let inserted = [2, 2, 1];
        assert_eq!(remap(&[1, 3, 0], &inserted), [1, 5, 0]);
        assert_eq!(remap(&[2, 2, 2], &inserted), [4, 4, 4]);
    }

    #[test]
    fn remap_leaves_the_original_alone() {
        let buffered = vec![3, 3];
        let moved = remap(&buffered, &[0, 5]);
        assert_eq!(moved, [5, 3]);
        assert_eq!(buffered, [3, 3]);
    }
}
