// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Width restoration
//!
//! Widen an image by duplicating its least important seams.  The
//! seams are found by carving them out of a throwaway copy, one after
//! another, and then replayed as insertions on the untouched original
//! in the order they were found.  Every insertion moves the seams
//! still waiting in the buffer, so they're remapped before the next
//! one goes in.

use crate::carve::{insert_vertical_seam, remove_vertical_seam};
use crate::config::CarveConfig;
use crate::error::Result;
use crate::seam::{remap, SeamBuffer};
use crate::seamfinder::{Gradient, SeamFinder};
use image::RgbImage;
use log::{debug, info};

pub struct Enlarger {
    config: CarveConfig,
}

impl Default for Enlarger {
    fn default() -> Self {
        Enlarger::new(CarveConfig::default())
    }
}

impl Enlarger {
    pub fn new(config: CarveConfig) -> Self {
        Enlarger { config }
    }

    /// Find the `size` cheapest seams, each one traced on the copy left
    /// narrower by the seams before it.  The columns of the n-th seam
    /// refer to an image n columns narrower than `image`.
    pub fn discover(&self, image: &RgbImage, size: u32) -> Result<SeamBuffer> {
        let mut scratch = image.clone();
        let mut buffer = SeamBuffer::with_capacity(size as usize);
        for step in 0..size {
            let seam = Gradient::new(&scratch, self.config.boundary).find_vertical_seam()?;
            scratch = remove_vertical_seam(&scratch, &seam)?;
            debug!("discovered seam {} of {}", step + 1, size);
            buffer.push_back(seam);
        }
        Ok(buffer)
    }

    /// Return a copy of `image` exactly `size` columns wider.
    pub fn enlarge(&self, image: &RgbImage, size: u32) -> Result<RgbImage> {
        let enlarged = replay(image, self.discover(image, size)?)?;
        info!(
            "enlarged {}x{} to {}x{}",
            image.width(),
            image.height(),
            enlarged.width(),
            enlarged.height()
        );
        Ok(enlarged)
    }

    /// Widen `image` back to `width` columns.  Images already that wide
    /// come back unchanged.
    pub fn restore_width(&self, image: &RgbImage, width: u32) -> Result<RgbImage> {
        self.enlarge(image, width.saturating_sub(image.width()))
    }
}

/// Insert every buffered seam into `image`, oldest first.  After each
/// insertion the seams still waiting are remapped onto the wider grid.
pub fn replay(image: &RgbImage, mut buffer: SeamBuffer) -> Result<RgbImage> {
    let mut enlarged = image.clone();
    while let Some(seam) = buffer.pop_front() {
        enlarged = insert_vertical_seam(&enlarged, &seam)?;
        for pending in buffer.iter_mut() {
            *pending = remap(pending, &seam);
        }
    }
    Ok(enlarged)
}
