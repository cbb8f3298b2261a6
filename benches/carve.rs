// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Pixel, Rgb, RgbImage};
use seamerase::{calculate_energy, Boundary, Enlarger, MaskProvider, ObjectRemover, RectMask};

fn scene() -> RgbImage {
    ImageBuffer::from_fn(128, 96, |x, y| {
        *Rgb::from_slice(&[(x * 2) as u8, (y * 3 % 256) as u8, ((x ^ y) % 256) as u8])
    })
}

fn energy(c: &mut Criterion) {
    let img = scene();
    c.bench_function("energy 128x96", move |b| {
        b.iter(|| calculate_energy(&img, Boundary::Wrap))
    });
}

fn erase(c: &mut Criterion) {
    let img = scene();
    let delete = RectMask::new(50, 30, 12, 20).select_mask(&img).unwrap();
    let protect = RectMask::new(0, 0, 10, 96).select_mask(&img).unwrap();
    c.bench_function("erase 12 columns", move |b| {
        b.iter(|| ObjectRemover::default().remove(&img, &protect, &delete).unwrap())
    });
}

fn enlarge(c: &mut Criterion) {
    let img = scene();
    c.bench_function("enlarge by 12", move |b| {
        b.iter(|| Enlarger::default().enlarge(&img, 12).unwrap())
    });
}

criterion_group!(benches, energy, erase, enlarge);
criterion_main!(benches);
