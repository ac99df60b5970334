// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing.
//!
//! Rather than scaling an image uniformly, seam carving removes (or
//! duplicates) the connected path of pixels that carries the least
//! visual information, one path at a time, until the image reaches
//! the requested size.

// #![deny(missing_docs)]

extern crate image;

mod ternary;

pub mod errors;
pub use errors::CarveError;

pub mod twodmap;
pub use twodmap::TwoDimensionalMap;

pub mod flipper;

pub mod energy;
pub use energy::{calculate_energy, energy_to_image};

pub mod seamfinder;
pub use seamfinder::{find_seam, GradientSeamFinder, Orientation, Seam, SeamFinder};

pub mod seameditor;
pub use seameditor::{insert_seam, remove_seam};

pub mod seamcarver;
pub use seamcarver::{increase_by_k, reduce_both, reduce_by_k, SeamCarver};
