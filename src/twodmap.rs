// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use itertools::iproduct;
use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field of scalars: the energy map,
/// or the cumulative cost table built from it.  Row-major, addressed
/// as `(x, y)` the same way the image crate addresses pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// A map filled with the content type's default.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major buffer.  Like
    /// `ImageBuffer::from_raw`, returns `None` if the buffer is the
    /// wrong length.
    pub fn from_vec(width: u32, height: u32, data: Vec<P>) -> Option<Self> {
        if data.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            data,
        })
    }

    /// Build a map by calling `f(x, y)` for every cell.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> P,
    {
        TwoDimensionalMap {
            width,
            height,
            data: iproduct!(0..height, 0..width).map(|(y, x)| f(x, y)).collect(),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// One row, left to right.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.data[start..start + self.width as usize]
    }

    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [P] {
        &mut self.data
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addressing_is_row_major() {
        let map = TwoDimensionalMap::from_fn(3, 2, |x, y| (y * 10 + x) as i64);
        assert_eq!(map.as_slice(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(map[(2, 1)], 12);
        assert_eq!(map.row(1), &[10, 11, 12]);
    }

    #[test]
    fn from_vec_checks_length() {
        assert!(TwoDimensionalMap::from_vec(2, 2, vec![0i64; 3]).is_none());
        assert!(TwoDimensionalMap::from_vec(2, 2, vec![0i64; 4]).is_some());
    }
}
