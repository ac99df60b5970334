// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Every pixel is collapsed to one intensity, the sum of its red,
//! green and blue channels.  The energy of a pixel is then the
//! magnitude of the central differences of that intensity:
//!
//! ```text
//!     Fx(x,y) = I(x+1,y) - I(x-1,y)
//!     Fy(x,y) = I(x,y+1) - I(x,y-1)
//!     e(x,y)  = |Fx| + |Fy|
//! ```
//!
//! Neighbours outside the image are replaced by the nearest edge
//! pixel, so the border needs no special energy of its own.

use crate::cq;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, GrayImage, Luma, Pixel, Primitive};
use itertools::iproduct;
use num_traits::NumCast;

// Pixel -> Intensity
#[inline]
fn intensity_of_pixel<P, S>(pixel: &P) -> f64
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    pixel
        .to_rgb()
        .channels()
        .iter()
        .map(|c| <f64 as NumCast>::from(*c).unwrap_or(0.0))
        .sum()
}

fn intensity_map<I, P, S>(image: &I) -> TwoDimensionalMap<f64>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    TwoDimensionalMap::from_raw(
        width,
        height,
        iproduct!(0..height, 0..width)
            .map(|(y, x)| intensity_of_pixel(&image.get_pixel(x, y)))
            .collect(),
    )
}

#[inline]
fn gradient_at(intensity: &TwoDimensionalMap<f64>, x: u32, y: u32) -> u32 {
    let (mw, mh) = (intensity.width() - 1, intensity.height() - 1);
    let (left, right, up, down) = (
        cq!(x == 0, x, x - 1),
        cq!(x >= mw, x, x + 1),
        cq!(y == 0, y, y - 1),
        cq!(y >= mh, y, y + 1),
    );
    let fx = intensity[(right, y)] - intensity[(left, y)];
    let fy = intensity[(x, down)] - intensity[(x, up)];
    (fx.abs() + fy.abs()).round() as u32
}

// Fill `target`, a run of whole rows starting at `first_row`.
fn energy_of_rows(intensity: &TwoDimensionalMap<f64>, first_row: u32, target: &mut [u32]) {
    let width = intensity.width() as usize;
    for (offset, cell) in target.iter_mut().enumerate() {
        let x = (offset % width) as u32;
        let y = first_row + (offset / width) as u32;
        *cell = gradient_at(intensity, x, y);
    }
}

// Image -> Energy Map

/// Compute the energy of every pixel in an image.  This is generic on
/// the image type; any pixel that can be converted to RGB works.
#[cfg(not(feature = "threaded"))]
pub fn calculate_energy<I, P, S>(image: &I) -> TwoDimensionalMap<u32>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let intensity = intensity_map(image);
    let (width, height) = (intensity.width(), intensity.height());
    let mut energy = vec![0u32; width as usize * height as usize];
    if !energy.is_empty() {
        energy_of_rows(&intensity, 0, &mut energy);
    }
    TwoDimensionalMap::from_raw(width, height, energy)
}

/// Compute the energy of every pixel in an image.  The rows are split
/// into one contiguous band per CPU and each band is filled in its
/// own scoped thread; the result is identical to the sequential
/// version.
#[cfg(feature = "threaded")]
pub fn calculate_energy<I, P, S>(image: &I) -> TwoDimensionalMap<u32>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let intensity = intensity_map(image);
    let (width, height) = (intensity.width(), intensity.height());
    let mut energy = vec![0u32; width as usize * height as usize];
    if energy.is_empty() {
        return TwoDimensionalMap::from_raw(width, height, energy);
    }

    let workers = num_cpus::get().max(1);
    let rows_per_band = ((height as usize + workers - 1) / workers).max(1);
    let band_len = rows_per_band * width as usize;

    let scoped = crossbeam::scope(|s| {
        for (band, chunk) in energy.chunks_mut(band_len).enumerate() {
            let intensity = &intensity;
            let first_row = (band * rows_per_band) as u32;
            s.spawn(move |_| energy_of_rows(intensity, first_row, chunk));
        }
    });
    if let Err(panic) = scoped {
        std::panic::resume_unwind(panic);
    }
    TwoDimensionalMap::from_raw(width, height, energy)
}

/// Render an energy map as a greyscale image, scaled so that the most
/// energetic pixel is white.
pub fn energy_to_image(energy: &TwoDimensionalMap<u32>) -> GrayImage {
    let peak = energy.values().iter().copied().max().unwrap_or(0).max(1);
    let factor = <u64 as From<u32>>::from(peak);
    GrayImage::from_fn(energy.width(), energy.height(), |x, y| {
        Luma([(<u64 as From<u32>>::from(energy[(x, y)]) * 255 / factor) as u8])
    })
}
