// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given an image, calculate the gradient-magnitude energy of every
//! pixel: the squared central difference along each axis, summed over
//! every colour channel.
//!
//! ```text
//!        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//!        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//!       e(x,y) = |Δx|²+|Δy|²
//! ```
//!
//! Also home to the mask overrides the object remover writes over the
//! energy map before it goes looking for a seam.

use crate::config::{Boundary, CarveConfig, Overlap};
use crate::error::{CarveError, Result};
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, GrayImage, Pixel, Primitive};
use num_traits::NumCast;

/// The energy of every pixel of one image snapshot.
pub type EnergyMap = TwoDimensionalMap<i64>;

// The image crate tops out at four channels per pixel.  Unused slots
// stay zero and contribute nothing to the gradient.
type Channels = [i64; 4];

fn channels_of<P, S>(pixel: &P) -> Channels
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let mut out = [0; 4];
    out.iter_mut()
        .zip(pixel.channels())
        .for_each(|(o, c)| *o = <i64 as NumCast>::from(*c).unwrap_or(0));
    out
}

#[inline]
fn energy_of_pair(p1: &Channels, p2: &Channels) -> i64 {
    p1.iter().zip(p2).map(|(a, b)| (a - b) * (a - b)).sum()
}

#[cfg(not(feature = "threaded"))]
fn fill_rows<F>(map: &mut EnergyMap, f: F)
where
    F: Fn(u32, &mut [i64]),
{
    let width = map.width.max(1) as usize;
    map.as_mut_slice()
        .chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| f(y as u32, row));
}

// Every row of the energy map depends only on the image, so the map
// is cut into one band of rows per CPU and each band is filled on its
// own scoped thread.
#[cfg(feature = "threaded")]
fn fill_rows<F>(map: &mut EnergyMap, f: F)
where
    F: Fn(u32, &mut [i64]) + Sync,
{
    let width = map.width.max(1) as usize;
    let cpus = num_cpus::get().max(1);
    let band_rows = ((map.height as usize + cpus - 1) / cpus).max(1);
    let f = &f;
    let scoped = crossbeam::scope(|scope| {
        for (band, chunk) in map.as_mut_slice().chunks_mut(band_rows * width).enumerate() {
            scope.spawn(move |_| {
                for (offset, row) in chunk.chunks_mut(width).enumerate() {
                    f((band * band_rows + offset) as u32, row);
                }
            });
        }
    });
    if let Err(panic) = scoped {
        std::panic::resume_unwind(panic);
    }
}

/// Compute the energy of every pixel in an image.  Generic on the
/// pixel type, so it reads RGB images and single-channel masks alike.
/// The image is never modified.
pub fn calculate_energy<I, P, S>(image: &I, boundary: Boundary) -> EnergyMap
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut emap = EnergyMap::new(width, height);
    if width == 0 || height == 0 {
        return emap;
    }

    let samples = TwoDimensionalMap::from_fn(width, height, |x, y| {
        channels_of(&image.get_pixel(x, y))
    });

    fill_rows(&mut emap, |y, row| {
        let (up, down) = boundary.neighbors(y, height);
        for (x, cell) in row.iter_mut().enumerate() {
            let x = x as u32;
            let (left, right) = boundary.neighbors(x, width);
            *cell = energy_of_pair(&samples[(left, y)], &samples[(right, y)])
                + energy_of_pair(&samples[(x, up)], &samples[(x, down)]);
        }
    });
    emap
}

/// Overwrite the energy of every masked pixel: protected pixels get
/// `config.protect_energy`, pixels marked for deletion get
/// `config.delete_energy`.  A pixel in both masks is resolved by
/// `config.overlap`.  Both masks must match the map's dimensions, and
/// nothing is written unless they do.
pub fn apply_masks(
    energy: &mut EnergyMap,
    protect: &GrayImage,
    delete: &GrayImage,
    config: &CarveConfig,
) -> Result<()> {
    let dims = energy.dimensions();
    if protect.dimensions() != dims {
        return Err(CarveError::shape("protect mask", dims, protect.dimensions()));
    }
    if delete.dimensions() != dims {
        return Err(CarveError::shape("delete mask", dims, delete.dimensions()));
    }

    let sentinel = config.mask_sentinel;
    for (x, y, p) in protect.enumerate_pixels() {
        let protected = p.channels()[0] == sentinel;
        let deleted = delete[(x, y)].channels()[0] == sentinel;
        let value = match (protected, deleted, config.overlap) {
            (true, true, Overlap::Reject) => return Err(CarveError::MaskOverlap { x, y }),
            (true, true, Overlap::Delete) => config.delete_energy,
            (true, _, _) => config.protect_energy,
            (false, true, _) => config.delete_energy,
            (false, false, _) => continue,
        };
        energy[(x, y)] = value;
    }
    Ok(())
}
