// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamerase - object removal by seam carving
//!
//! Carve the seams that run through a masked object out of an image,
//! steering around a second, protected, mask; then grow the image back
//! to its old width by duplicating its cheapest seams.
//!
//! Vertical seams only.  Every operation takes its grids by reference
//! and hands back new ones.

// #![deny(missing_docs)]

/// My ternary expression handler.  Rust's ifs are already
/// expressions, but `cargo fmt` breaks them up line-by-line, and the
/// edge cases of seam carving read much better on one.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}

pub mod carve;
pub mod config;
pub mod cost;
pub mod energy;
pub mod enlarge;
pub mod error;
pub mod mask;
pub mod removal;
pub mod seam;
pub mod seamfinder;
pub mod twodmap;

pub use carve::{highlight_seam, insert_vertical_seam, remove_vertical_seam};
pub use config::{Boundary, CarveConfig, Overlap, Termination};
pub use cost::calculate_cost;
pub use energy::{apply_masks, calculate_energy, EnergyMap};
pub use enlarge::{replay, Enlarger};
pub use error::{CarveError, Result};
pub use mask::{FileMask, MaskProvider, RectMask};
pub use removal::{ObjectRemover, Removal};
pub use seam::{remap, trace_vertical_seam, Seam, SeamBuffer};
pub use seamfinder::{Gradient, MaskedGradient, SeamFinder};
