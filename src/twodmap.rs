// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Two-dimensional maps
//!
//! A dense, row-major grid sized to whatever image is being carved
//! right now.  It carries the energy grid (`u32`) and the seam
//! digraph (energy + back pointer) used by the seam finder.  Nothing
//! here is global; every map lives exactly as long as the call that
//! built it.

use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field, indexed by `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    energy: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map filled with the content type's default.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            energy: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major buffer.  Panics if the buffer does
    /// not hold exactly `width * height` values.
    pub fn from_raw(width: u32, height: u32, energy: Vec<P>) -> Self {
        assert_eq!(
            energy.len(),
            width as usize * height as usize,
            "a {}x{} map needs {} values",
            width,
            height,
            width as usize * height as usize
        );
        TwoDimensionalMap {
            width,
            height,
            energy,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw row-major contents.
    pub fn values(&self) -> &[P] {
        &self.energy
    }

    /// A copy of this map with rows and columns exchanged, so that
    /// `t[(y, x)] == self[(x, y)]`.
    pub fn transposed(&self) -> Self {
        let mut target = TwoDimensionalMap::new(self.height, self.width);
        for y in 0..self.height {
            for x in 0..self.width {
                target[(y, x)] = self[(x, y)];
            }
        }
        target
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.energy[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.energy[index]
    }
}

/// One cell of the seam digraph: the cheapest cumulative energy of
/// any seam reaching this cell, and the column it came from in the
/// row above.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub(crate) struct EnergyAndBackPointer<P: Default + Copy> {
    pub energy: P,
    pub parent: u32,
}

impl<P: Default + Copy> EnergyAndBackPointer<P> {
    pub fn new(energy: P, parent: u32) -> Self {
        EnergyAndBackPointer { energy, parent }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_is_row_major() {
        let map = TwoDimensionalMap::from_raw(3, 2, vec![0u32, 1, 2, 3, 4, 5]);
        assert_eq!(map[(0, 0)], 0);
        assert_eq!(map[(2, 0)], 2);
        assert_eq!(map[(0, 1)], 3);
        assert_eq!(map[(2, 1)], 5);
    }

    #[test]
    fn transposition_swaps_axes() {
        let map = TwoDimensionalMap::from_raw(3, 2, vec![0u32, 1, 2, 3, 4, 5]);
        let flipped = map.transposed();
        assert_eq!((flipped.width(), flipped.height()), (2, 3));
        assert_eq!(flipped.values(), &[0, 3, 1, 4, 2, 5]);
        assert_eq!(flipped.transposed(), map);
    }

    #[test]
    #[should_panic]
    fn from_raw_rejects_short_buffers() {
        TwoDimensionalMap::from_raw(3, 2, vec![0u32; 5]);
    }
}
