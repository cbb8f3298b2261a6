// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised by the carving engine.
//!
//! None of these are transient.  Each one is a violated precondition
//! (mismatched shapes, a seam that doesn't belong to the grid it's
//! applied to) or an internal inconsistency, and they all propagate
//! straight back to the caller.

use failure::Fail;

/// Everything that can go wrong while carving.
#[derive(Debug, Fail)]
pub enum CarveError {
    /// A mask or map does not have the dimensions of the grid it
    /// accompanies.
    #[fail(
        display = "{} is {}x{}, expected {}x{}",
        what, found_width, found_height, width, height
    )]
    ShapeMismatch {
        what: &'static str,
        width: u32,
        height: u32,
        found_width: u32,
        found_height: u32,
    },

    /// A seam must have exactly one entry per row.
    #[fail(display = "seam has {} rows, grid has {}", found, expected)]
    SeamLength { expected: usize, found: usize },

    #[fail(
        display = "seam column {} at row {} lies outside a grid {} pixels wide",
        column, row, width
    )]
    SeamOutOfBounds { row: u32, column: u32, width: u32 },

    /// The backtrace found no predecessor consistent with the cost
    /// table.  The energy map and cost table weren't a pair.
    #[fail(display = "no predecessor of row {} matches the cost table", row)]
    SeamTrace { row: u32 },

    #[fail(display = "cannot carve a seam through a grid {} pixels wide", width)]
    DegenerateWidth { width: u32 },

    #[fail(
        display = "pixel ({}, {}) is marked in both the protect and delete masks",
        x, y
    )]
    MaskOverlap { x: u32, y: u32 },

    #[fail(display = "could not read {}: {}", path, cause)]
    Image {
        path: String,
        #[cause]
        cause: image::ImageError,
    },
}

/// The crate's result type.
pub type Result<T> = std::result::Result<T, CarveError>;

impl CarveError {
    pub(crate) fn shape(what: &'static str, expected: (u32, u32), found: (u32, u32)) -> Self {
        CarveError::ShapeMismatch {
            what,
            width: expected.0,
            height: expected.1,
            found_width: found.0,
            found_height: found.1,
        }
    }
}
