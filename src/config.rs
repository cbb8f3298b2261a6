// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tunables for the carving engine
//!
//! All of the magic numbers live here: how the gradient treats the
//! image border, how hard the masks push the seam around, and when
//! the object remover decides it's done.

use std::str::FromStr;

/// Energy written over every protected pixel.  Larger than any seam
/// of real gradient energy can accumulate, so a seam only crosses a
/// protected pixel when it has no other choice.
pub const PROTECT_ENERGY: i64 = 100_000_000;

/// Energy written over every pixel marked for deletion.
pub const DELETE_ENERGY: i64 = -100_000_000;

/// The value of a foreground pixel in a mask.
pub const MASK_SENTINEL: u8 = 255;

/// How the gradient kernel reads past the edge of the image.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Boundary {
    /// The pixel past the last column is the first column, and vice
    /// versa.  Produces strong energy along the image border wherever
    /// the two opposite edges differ.
    Wrap,
    /// The pixel past the edge is the edge pixel itself.
    Clamp,
}

impl Boundary {
    /// The indices on either side of `i` along an axis of length `len`.
    /// `len` must be at least one.
    #[inline]
    pub fn neighbors(self, i: u32, len: u32) -> (u32, u32) {
        let last = len - 1;
        match self {
            Boundary::Wrap => (
                if i == 0 { last } else { i - 1 },
                if i >= last { 0 } else { i + 1 },
            ),
            Boundary::Clamp => (i.saturating_sub(1), if i >= last { last } else { i + 1 }),
        }
    }
}

impl FromStr for Boundary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wrap" => Ok(Boundary::Wrap),
            "clamp" => Ok(Boundary::Clamp),
            _ => Err(format!("unknown boundary mode '{}'", s)),
        }
    }
}

/// Which mask wins when a pixel is marked in both.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Overlap {
    Protect,
    Delete,
    /// Refuse to carve at all.
    Reject,
}

impl FromStr for Overlap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "protect" => Ok(Overlap::Protect),
            "delete" => Ok(Overlap::Delete),
            "reject" => Ok(Overlap::Reject),
            _ => Err(format!("unknown overlap rule '{}'", s)),
        }
    }
}

/// When object removal stops carving.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Termination {
    /// Carve once for every column of the delete mask that holds any
    /// foreground, counted before the first pass.  An approximation of
    /// the object's width, not a guarantee that it's gone.
    ColumnCount,
    /// Carve until no delete-mask pixel is left.
    UntilClear,
}

/// The full set of knobs, with the defaults the engine was tuned on.
#[derive(Debug, Copy, Clone)]
pub struct CarveConfig {
    pub boundary: Boundary,
    pub protect_energy: i64,
    pub delete_energy: i64,
    pub mask_sentinel: u8,
    pub overlap: Overlap,
    pub termination: Termination,
}

impl Default for CarveConfig {
    fn default() -> Self {
        CarveConfig {
            boundary: Boundary::Wrap,
            protect_energy: PROTECT_ENERGY,
            delete_energy: DELETE_ENERGY,
            mask_sentinel: MASK_SENTINEL,
            overlap: Overlap::Protect,
            termination: Termination::ColumnCount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_neighbors_cross_the_border() {
        assert_eq!(Boundary::Wrap.neighbors(0, 4), (3, 1));
        assert_eq!(Boundary::Wrap.neighbors(3, 4), (2, 0));
        assert_eq!(Boundary::Wrap.neighbors(0, 1), (0, 0));
    }

    #[test]
    fn clamp_neighbors_stop_at_the_border() {
        assert_eq!(Boundary::Clamp.neighbors(0, 4), (0, 1));
        assert_eq!(Boundary::Clamp.neighbors(3, 4), (2, 3));
    }

    #[test]
    fn parse_flags() {
        assert_eq!("clamp".parse::<Boundary>(), Ok(Boundary::Clamp));
        assert_eq!("reject".parse::<Overlap>(), Ok(Overlap::Reject));
        assert!("sideways".parse::<Boundary>().is_err());
    }
}
