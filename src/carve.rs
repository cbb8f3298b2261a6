// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Taking seams out of grids and putting them back in.
//!
//! Every operation here reads one grid and returns a brand new one;
//! the input is never touched.  They are generic over the pixel type,
//! so the same code narrows the colour image and both masks.

use crate::error::{CarveError, Result};
use crate::seam::check_seam;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};
use num_traits::NumCast;

fn check_carvable<I, P, S>(image: &I, seam: &[u32]) -> Result<()>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let width = image.width();
    if width < 2 {
        return Err(CarveError::DegenerateWidth { width });
    }
    check_seam(seam, image.dimensions())
}

/// Remove a vertical seam, returning a grid one column narrower.
/// Each row loses the pixel at its seam column; everything right of it
/// slides one place left.
pub fn remove_vertical_seam<I, P, S>(image: &I, seam: &[u32]) -> Result<ImageBuffer<P, Vec<S>>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    check_carvable(image, seam)?;
    let (width, height) = image.dimensions();
    let mut imgbuf = ImageBuffer::new(width - 1, height);
    for y in 0..height {
        let cut = seam[y as usize];
        for x in (0..width).filter(|x| *x != cut) {
            imgbuf.put_pixel(cq!(x < cut, x, x - 1), y, image.get_pixel(x, y));
        }
    }
    Ok(imgbuf)
}

// Channel-wise mean of two pixels, truncated.
fn average<S: Primitive + 'static>(a: S, b: S) -> S {
    let (ia, ib): (i64, i64) = (
        NumCast::from(a).unwrap_or(0),
        NumCast::from(b).unwrap_or(0),
    );
    NumCast::from((ia + ib) / 2).unwrap_or(a)
}

/// Insert a vertical seam, returning a grid one column wider.  The
/// seam's columns refer to the grid before insertion.  Each row's
/// pixels from the seam column onward slide one place right, and the
/// gap is filled with the mean of the pixels either side of the seam
/// column.  At the left edge the new pixel copies its right-hand
/// neighbour; at the right edge, its left-hand one.
pub fn insert_vertical_seam<I, P, S>(image: &I, seam: &[u32]) -> Result<ImageBuffer<P, Vec<S>>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    check_carvable(image, seam)?;
    let (width, height) = image.dimensions();
    let maxwidth = width - 1;
    let mut imgbuf = ImageBuffer::new(width + 1, height);
    for y in 0..height {
        let at = seam[y as usize];
        for x in 0..width {
            imgbuf.put_pixel(cq!(x < at, x, x + 1), y, image.get_pixel(x, y));
        }
        let filler = if at == 0 {
            image.get_pixel(1, y)
        } else if at == maxwidth {
            image.get_pixel(maxwidth - 1, y)
        } else {
            image
                .get_pixel(at - 1, y)
                .map2(&image.get_pixel(at + 1, y), average)
        };
        imgbuf.put_pixel(at, y, filler);
    }
    Ok(imgbuf)
}

/// Paint a seam onto a copy of the image.
pub fn highlight_seam<I, P, S>(image: &I, seam: &[u32], colour: P) -> Result<ImageBuffer<P, Vec<S>>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    check_seam(seam, image.dimensions())?;
    let (width, height) = image.dimensions();
    let mut imgbuf = ImageBuffer::from_fn(width, height, |x, y| image.get_pixel(x, y));
    seam.iter()
        .enumerate()
        .for_each(|(y, x)| imgbuf.put_pixel(*x, y as u32, colour));
    Ok(imgbuf)
}
