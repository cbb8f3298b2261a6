// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Masks: where they come from, and what the object remover needs to
//! know about them.
//!
//! A mask is a `GrayImage` the size of the image it describes.
//! Foreground pixels hold the sentinel value (255); everything else is
//! zero.  How the foreground gets chosen is somebody else's business;
//! a `MaskProvider` just has to hand back a mask in that shape.

use crate::config::MASK_SENTINEL;
use crate::error::{CarveError, Result};
use image::{GrayImage, ImageBuffer, Luma, Pixel, RgbImage};
use std::path::PathBuf;

/// Anything that, given an image, can pick out a region of it.
pub trait MaskProvider {
    fn select_mask(&self, image: &RgbImage) -> Result<GrayImage>;
}

#[inline]
fn luma(value: u8) -> Luma<u8> {
    *Luma::from_slice(&[value])
}

/// An all-background mask.
pub fn blank_mask(width: u32, height: u32) -> GrayImage {
    ImageBuffer::new(width, height)
}

/// Fail unless `mask` has the image's dimensions.
pub fn check_mask(what: &'static str, mask: &GrayImage, image: &RgbImage) -> Result<()> {
    if mask.dimensions() != image.dimensions() {
        return Err(CarveError::shape(what, image.dimensions(), mask.dimensions()));
    }
    Ok(())
}

/// The number of columns holding any nonzero pixel.
pub fn occupied_columns(mask: &GrayImage) -> u32 {
    let (width, height) = mask.dimensions();
    (0..width)
        .filter(|x| (0..height).any(|y| mask[(*x, y)].channels()[0] != 0))
        .count() as u32
}

/// The number of pixels holding the sentinel.
pub fn foreground_pixels(mask: &GrayImage, sentinel: u8) -> usize {
    mask.pixels().filter(|p| p.channels()[0] == sentinel).count()
}

/// The first pixel, in row order, marked in both masks.
pub fn find_overlap(protect: &GrayImage, delete: &GrayImage, sentinel: u8) -> Option<(u32, u32)> {
    protect
        .enumerate_pixels()
        .find(|(x, y, p)| {
            p.channels()[0] == sentinel && delete[(*x, *y)].channels()[0] == sentinel
        })
        .map(|(x, y, _)| (x, y))
}

/// A mask image on disk.  Anything at or above `threshold` is
/// foreground; colour masks are reduced to luma first.
pub struct FileMask {
    pub path: PathBuf,
    pub threshold: u8,
}

impl FileMask {
    pub fn new<T: Into<PathBuf>>(path: T) -> Self {
        FileMask {
            path: path.into(),
            threshold: 128,
        }
    }
}

impl MaskProvider for FileMask {
    fn select_mask(&self, image: &RgbImage) -> Result<GrayImage> {
        let raw = image::open(&self.path)
            .map_err(|cause| CarveError::Image {
                path: self.path.display().to_string(),
                cause,
            })?
            .to_luma();
        check_mask("mask file", &raw, image)?;
        let threshold = self.threshold;
        Ok(ImageBuffer::from_fn(raw.width(), raw.height(), |x, y| {
            luma(cq!(raw[(x, y)].channels()[0] >= threshold, MASK_SENTINEL, 0))
        }))
    }
}

/// An axis-aligned rectangle, clipped to the image.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RectMask {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl RectMask {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        RectMask {
            x,
            y,
            width,
            height,
        }
    }

    fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x
            && y >= self.y
            && x - self.x < self.width
            && y - self.y < self.height
    }
}

impl MaskProvider for RectMask {
    fn select_mask(&self, image: &RgbImage) -> Result<GrayImage> {
        Ok(ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
            luma(cq!(self.contains(x, y), MASK_SENTINEL, 0))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(width: u32, height: u32) -> RgbImage {
        ImageBuffer::new(width, height)
    }

    #[test]
    fn rectangles_are_clipped() {
        let mask = RectMask::new(3, 1, 10, 2).select_mask(&canvas(5, 4)).unwrap();
        assert_eq!(mask.dimensions(), (5, 4));
        assert_eq!(foreground_pixels(&mask, MASK_SENTINEL), 4);
        assert_eq!(occupied_columns(&mask), 2);
        assert_eq!(mask[(3, 1)].channels()[0], MASK_SENTINEL);
        assert_eq!(mask[(3, 3)].channels()[0], 0);
    }

    #[test]
    fn any_nonzero_value_occupies_a_column() {
        let mask: GrayImage = ImageBuffer::from_raw(4, 2, vec![0, 1, 0, 0, 0, 0, 0, 255]).unwrap();
        assert_eq!(occupied_columns(&mask), 2);
        assert_eq!(foreground_pixels(&mask, MASK_SENTINEL), 1);
        assert_eq!(occupied_columns(&blank_mask(4, 2)), 0);
    }

    #[test]
    fn overlap_is_found() {
        let image = canvas(4, 4);
        let protect = RectMask::new(0, 0, 2, 2).select_mask(&image).unwrap();
        let delete = RectMask::new(1, 1, 2, 2).select_mask(&image).unwrap();
        assert_eq!(find_overlap(&protect, &delete, MASK_SENTINEL), Some((1, 1)));
        let apart = RectMask::new(2, 2, 2, 2).select_mask(&image).unwrap();
        assert_eq!(find_overlap(&protect, &apart, MASK_SENTINEL), None);
    }

    #[test]
    fn mask_files_are_binarised() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mask.png");
        let raw: GrayImage = ImageBuffer::from_raw(3, 1, vec![0, 127, 200]).unwrap();
        raw.save(&path).unwrap();

        let mask = FileMask::new(&path).select_mask(&canvas(3, 1)).unwrap();
        assert_eq!(mask.into_raw(), vec![0, 0, 255]);
    }

    #[test]
    fn mask_files_must_fit_the_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mask.png");
        blank_mask(3, 1).save(&path).unwrap();
        assert!(FileMask::new(&path).select_mask(&canvas(4, 1)).is_err());
        assert!(FileMask::new(dir.path().join("missing.png"))
            .select_mask(&canvas(3, 1))
            .is_err());
    }
}
