// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::config::{Boundary, CarveConfig};
use crate::cost::calculate_cost;
use crate::energy::{apply_masks, calculate_energy, EnergyMap};
use crate::error::Result;
use crate::seam::{trace_vertical_seam, Seam};
use image::{GenericImageView, GrayImage, Pixel, Primitive};

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for more than one
/// way of weighing the pixels.
pub trait SeamFinder {
    /// Once a SeamFinder has an image (or whatever it needs to make a
    /// rational decision), request the cheapest top-to-bottom seam.
    fn find_vertical_seam(&self) -> Result<Seam>;
}

fn seam_of(energy: &EnergyMap) -> Result<Seam> {
    trace_vertical_seam(energy, &calculate_cost(energy))
}

/// Plain gradient energy: just a simple image reference holder.
pub struct Gradient<'a, I> {
    image: &'a I,
    boundary: Boundary,
}

impl<'a, I, P, S> Gradient<'a, I>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    pub fn new(image: &'a I, boundary: Boundary) -> Self {
        Gradient { image, boundary }
    }
}

impl<'a, I, P, S> SeamFinder for Gradient<'a, I>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    fn find_vertical_seam(&self) -> Result<Seam> {
        seam_of(&calculate_energy(self.image, self.boundary))
    }
}

/// Gradient energy with the protect and delete masks written over it,
/// so the seam steers around the one and straight through the other.
pub struct MaskedGradient<'a, I> {
    image: &'a I,
    protect: &'a GrayImage,
    delete: &'a GrayImage,
    config: &'a CarveConfig,
}

impl<'a, I, P, S> MaskedGradient<'a, I>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    pub fn new(
        image: &'a I,
        protect: &'a GrayImage,
        delete: &'a GrayImage,
        config: &'a CarveConfig,
    ) -> Self {
        MaskedGradient {
            image,
            protect,
            delete,
            config,
        }
    }
}

impl<'a, I, P, S> SeamFinder for MaskedGradient<'a, I>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    fn find_vertical_seam(&self) -> Result<Seam> {
        let mut energy = calculate_energy(self.image, self.config.boundary);
        apply_masks(&mut energy, self.protect, self.delete, self.config)?;
        seam_of(&energy)
    }
}
