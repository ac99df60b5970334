// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest seam through an energy map
//!
//! The seam digraph is built one row at a time.  Every cell records
//! the cheapest cumulative energy of any seam reaching it from the
//! top row, and which of its three upper neighbours that seam came
//! through.  Ties are broken the same way every time: straight up
//! beats up-left, up-left beats up-right, and along the bottom row the
//! leftmost minimum wins.  Changing any of these changes which seam
//! gets carved out of an image with flat regions.
//!
//! Horizontal seams are found by running the same search over the
//! transposed energy map.

use crate::cq;
use crate::energy::calculate_energy;
use crate::twodmap::{EnergyAndBackPointer, TwoDimensionalMap};
use image::{GenericImageView, Pixel, Primitive};

/// Which way a seam runs.  A vertical seam runs top to bottom and
/// has one entry per row; removing it makes the image one column
/// narrower.  A horizontal seam runs left to right, one entry per
/// column, and removing it makes the image one row shorter.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    /// The length of the axis this seam cuts across: width for a
    /// vertical seam, height for a horizontal one.
    pub fn carved_extent(self, (width, height): (u32, u32)) -> u32 {
        match self {
            Orientation::Vertical => width,
            Orientation::Horizontal => height,
        }
    }

    /// The length of the axis this seam spans, which is also the
    /// number of entries in the seam.
    pub fn spanned_extent(self, (width, height): (u32, u32)) -> u32 {
        match self {
            Orientation::Vertical => height,
            Orientation::Horizontal => width,
        }
    }
}

/// A connected, one-pixel-wide path across an image.
///
/// For a vertical seam `path[y]` is the column visited in row `y`; for
/// a horizontal seam `path[x]` is the row visited in column `x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seam {
    pub orientation: Orientation,
    pub path: Vec<u32>,
    /// The total energy of every cell on the path.
    pub cost: u32,
}

impl Seam {
    /// Panic unless this seam fits an image of the given dimensions:
    /// one entry per spanned row (or column), every entry in bounds,
    /// and no step wider than one pixel.
    pub fn validate(&self, dimensions: (u32, u32)) {
        let spanned = self.orientation.spanned_extent(dimensions);
        let carved = self.orientation.carved_extent(dimensions);
        assert_eq!(
            self.path.len(),
            spanned as usize,
            "{:?} seam has {} entries for an image spanning {}",
            self.orientation,
            self.path.len(),
            spanned
        );
        if let Some(index) = self.path.iter().position(|&p| p >= carved) {
            panic!(
                "{:?} seam entry {} is {}, outside 0..{}",
                self.orientation, index, self.path[index], carved
            );
        }
        if let Some(index) = self
            .path
            .windows(2)
            .position(|pair| cq!(pair[0] > pair[1], pair[0] - pair[1], pair[1] - pair[0]) > 1)
        {
            panic!(
                "{:?} seam jumps from {} to {} at entry {}",
                self.orientation,
                self.path[index],
                self.path[index + 1],
                index + 1
            );
        }
    }
}

// The search itself is always top-to-bottom over `energy`.
fn energy_to_vertical_seam(energy: &TwoDimensionalMap<u32>) -> (Vec<u32>, u32) {
    let (width, height) = (energy.width(), energy.height());
    let mut target: TwoDimensionalMap<EnergyAndBackPointer<u32>> =
        TwoDimensionalMap::new(width, height);

    // Populate the first row with their native energies.
    for x in 0..width {
        target[(x, 0)] = EnergyAndBackPointer::new(energy[(x, 0)], x);
    }

    let maxwidth = width - 1;
    for y in 1..height {
        for x in 0..width {
            let erg = energy[(x, y)];
            let mut best = EnergyAndBackPointer::new(target[(x, y - 1)].energy, x);
            if x > 0 && target[(x - 1, y - 1)].energy < best.energy {
                best = EnergyAndBackPointer::new(target[(x - 1, y - 1)].energy, x - 1);
            }
            if x < maxwidth && target[(x + 1, y - 1)].energy < best.energy {
                best = EnergyAndBackPointer::new(target[(x + 1, y - 1)].energy, x + 1);
            }
            target[(x, y)] = EnergyAndBackPointer::new(erg + best.energy, best.parent);
        }
    }

    // min_by_key keeps the first of several equal minima.
    let mut seam_col = (0..width)
        .min_by_key(|x| target[(*x, height - 1)].energy)
        .unwrap_or(0);
    let cost = target[(seam_col, height - 1)].energy;

    // Working backwards, generate a vec of x coordinates that that map to
    // the seam, reverse and return.
    let path = (0..height)
        .rev()
        .fold(Vec::<u32>::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            seam_col = target[(seam_col, y)].parent;
            acc
        })
        .into_iter()
        .rev()
        .collect();
    (path, cost)
}

/// Given an energy map, find the seam of least total energy running
/// in the requested direction.
///
/// The energy map must not be empty.
pub fn find_seam(energy: &TwoDimensionalMap<u32>, orientation: Orientation) -> Seam {
    assert!(
        energy.width() > 0 && energy.height() > 0,
        "cannot find a seam in a {}x{} energy map",
        energy.width(),
        energy.height()
    );
    let (path, cost) = match orientation {
        Orientation::Vertical => energy_to_vertical_seam(energy),
        Orientation::Horizontal => energy_to_vertical_seam(&energy.transposed()),
    };
    log::trace!("{:?} seam, cost {}", orientation, cost);
    Seam {
        orientation,
        path,
        cost,
    }
}

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for more than one
/// way of scoring pixels.
pub trait SeamFinder {
    /// Once a SeamFinder has an image (or whatever it needs to make a
    /// rational decision), request a seam.
    fn find_seam(&self, orientation: Orientation) -> Seam;
}

/// The gradient-magnitude seam finder: just a simple image reference
/// holder.  The energy map is rebuilt on every request.
pub struct GradientSeamFinder<'a, I>
where
    I: GenericImageView,
{
    image: &'a I,
}

impl<'a, I> GradientSeamFinder<'a, I>
where
    I: GenericImageView,
{
    /// Takes a reference to an image, and holds onto it.
    pub fn new(image: &'a I) -> Self {
        GradientSeamFinder { image }
    }
}

impl<'a, I, P, S> SeamFinder for GradientSeamFinder<'a, I>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    fn find_seam(&self, orientation: Orientation) -> Seam {
        find_seam(&calculate_energy(self.image), orientation)
    }
}
