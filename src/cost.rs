// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The cumulative cost table
//!
//! Each cell holds the cost of the cheapest top-to-bottom path that
//! ends there:
//!
//! ```text
//!                       ⎧ M(x−1,y−1)
//! M(x,y) = e(x,y) + min ⎨ M(x,y−1)
//!                       ⎩ M(x+1,y−1)
//! ```
//!
//! Neighbours that fall off either side of the table are simply left
//! out of the minimum; nothing wraps.

use crate::energy::EnergyMap;
use crate::twodmap::TwoDimensionalMap;

pub type CostTable = TwoDimensionalMap<i64>;

/// Build the cost table for an energy map.  Row zero is the energy
/// map's row zero.
pub fn calculate_cost(energy: &EnergyMap) -> CostTable {
    let (width, height) = energy.dimensions();
    let mut cost = CostTable::new(width, height);
    if width == 0 || height == 0 {
        return cost;
    }

    // Populate the first row with their native energies.
    for x in 0..width {
        cost[(x, 0)] = energy[(x, 0)];
    }

    let maxwidth = width - 1;
    for y in 1..height {
        for x in 0..width {
            let range = cq!(x == 0, 0, x - 1)..=cq!(x == maxwidth, maxwidth, x + 1);
            let cheapest = range.map(|px| cost[(px, y - 1)]).min().unwrap_or_default();
            cost[(x, y)] = energy[(x, y)] + cheapest;
        }
    }
    cost
}
