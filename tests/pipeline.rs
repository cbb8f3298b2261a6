// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use image::{ImageBuffer, Pixel, Rgb, RgbImage};
use seamerase::config::MASK_SENTINEL;
use seamerase::mask::{blank_mask, foreground_pixels, occupied_columns};
use seamerase::{
    calculate_cost, calculate_energy, trace_vertical_seam, Boundary, Enlarger, MaskProvider,
    ObjectRemover, RectMask,
};

// A gentle gradient background with a loud checkerboard "object" in
// the middle.
fn photo() -> RgbImage {
    ImageBuffer::from_fn(24, 16, |x, y| {
        if (9..13).contains(&x) && (4..10).contains(&y) {
            let on = (x + y) % 2 == 0;
            *Rgb::from_slice(&[level(on), 0, level(!on)])
        } else {
            *Rgb::from_slice(&[(x * 4) as u8, (y * 6) as u8, 90])
        }
    })
}

fn level(on: bool) -> u8 {
    seamerase::cq!(on, 255, 0)
}

#[test]
fn erase_then_restore_round_trips_the_width() {
    let img = photo();
    let delete = RectMask::new(9, 4, 4, 6).select_mask(&img).unwrap();
    let protect = RectMask::new(0, 0, 3, 16).select_mask(&img).unwrap();

    let removal = ObjectRemover::default().remove(&img, &protect, &delete).unwrap();
    assert_eq!(removal.seams, 4);
    assert_eq!(removal.image.dimensions(), (20, 16));
    assert_eq!(occupied_columns(&removal.delete), 0);
    assert_eq!(
        foreground_pixels(&removal.protect, MASK_SENTINEL),
        foreground_pixels(&protect, MASK_SENTINEL)
    );

    let restored = Enlarger::default().restore_width(&removal.image, 24).unwrap();
    assert_eq!(restored.dimensions(), img.dimensions());
}

#[test]
fn every_stage_agrees_on_shape() {
    let img = photo();
    let energy = calculate_energy(&img, Boundary::Wrap);
    let cost = calculate_cost(&energy);
    assert_eq!(energy.dimensions(), (24, 16));
    assert_eq!(cost.row(0), energy.row(0));

    let seam = trace_vertical_seam(&energy, &cost).unwrap();
    assert_eq!(seam.len(), 16);
    assert!(seam.iter().all(|x| *x < 24));
    assert!(seam
        .windows(2)
        .all(|w| (i64::from(w[0]) - i64::from(w[1])).abs() <= 1));
}

#[test]
fn nothing_to_delete_leaves_the_image_alone() {
    let img = photo();
    let blank = blank_mask(24, 16);
    let removal = ObjectRemover::default().remove(&img, &blank, &blank).unwrap();
    assert_eq!(removal.image.dimensions(), img.dimensions());
    assert_eq!(&*removal.image, &*img);
    let same = Enlarger::default().enlarge(&img, 0).unwrap();
    assert_eq!(&*same, &*img);
}

#[test]
fn uniform_image_carves_down_the_left_edge() {
    let img: RgbImage = ImageBuffer::from_pixel(3, 3, *Rgb::from_slice(&[70, 70, 70]));
    let energy = calculate_energy(&img, Boundary::Wrap);
    let cost = calculate_cost(&energy);
    assert_eq!(cost, energy);
    assert_eq!(trace_vertical_seam(&energy, &cost).unwrap(), [0, 0, 0]);
}
