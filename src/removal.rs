// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Object removal
//!
//! Carve seams out of an image until the region under the delete mask
//! is gone, steering every seam around the region under the protect
//! mask.  The image and both masks are narrowed together, one seam at
//! a time, so they always line up.

use crate::carve::remove_vertical_seam;
use crate::config::{CarveConfig, Overlap, Termination};
use crate::error::{CarveError, Result};
use crate::mask::{check_mask, find_overlap, foreground_pixels, occupied_columns};
use crate::seamfinder::{MaskedGradient, SeamFinder};
use image::{GrayImage, RgbImage};
use log::{debug, info};

/// What's left once the object is gone.
#[derive(Debug, Clone)]
pub struct Removal {
    pub image: RgbImage,
    pub protect: GrayImage,
    pub delete: GrayImage,
    /// How many seams were carved.
    pub seams: u32,
}

/// Drives repeated masked seam removal.
pub struct ObjectRemover {
    config: CarveConfig,
}

impl Default for ObjectRemover {
    fn default() -> Self {
        ObjectRemover::new(CarveConfig::default())
    }
}

impl ObjectRemover {
    pub fn new(config: CarveConfig) -> Self {
        ObjectRemover { config }
    }

    /// Remove the delete region from the image, preserving the protect
    /// region wherever a seam can get around it.  The inputs are left
    /// as they were.
    pub fn remove(
        &self,
        image: &RgbImage,
        protect: &GrayImage,
        delete: &GrayImage,
    ) -> Result<Removal> {
        check_mask("protect mask", protect, image)?;
        check_mask("delete mask", delete, image)?;
        let sentinel = self.config.mask_sentinel;
        if self.config.overlap == Overlap::Reject {
            if let Some((x, y)) = find_overlap(protect, delete, sentinel) {
                return Err(CarveError::MaskOverlap { x, y });
            }
        }

        let mut state = Removal {
            image: image.clone(),
            protect: protect.clone(),
            delete: delete.clone(),
            seams: 0,
        };

        match self.config.termination {
            Termination::ColumnCount => {
                let passes = occupied_columns(delete);
                info!("removing object: {} seams planned", passes);
                for _ in 0..passes {
                    state = self.carve_once(state)?;
                }
            }
            Termination::UntilClear => {
                info!(
                    "removing object: {} pixels to clear",
                    foreground_pixels(delete, sentinel)
                );
                while foreground_pixels(&state.delete, sentinel) > 0 {
                    state = self.carve_once(state)?;
                }
            }
        }

        info!(
            "removed {} seams, image now {}x{}",
            state.seams,
            state.image.width(),
            state.image.height()
        );
        Ok(state)
    }

    // One pass: find the seam on the current grids, then narrow all
    // three.  The old grids are dropped on the way out.
    fn carve_once(&self, state: Removal) -> Result<Removal> {
        let seam = MaskedGradient::new(&state.image, &state.protect, &state.delete, &self.config)
            .find_vertical_seam()?;
        debug!("pass {}: seam starts at column {:?}", state.seams + 1, seam.first());
        Ok(Removal {
            image: remove_vertical_seam(&state.image, &seam)?,
            protect: remove_vertical_seam(&state.protect, &seam)?,
            delete: remove_vertical_seam(&state.delete, &seam)?,
            seams: state.seams + 1,
        })
    }
}
