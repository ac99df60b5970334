// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Carving errors
//!
//! Every failure here is a precondition that was checked before any
//! seam was touched.  A malformed seam is not in this list: that is a
//! programming error, and `Seam::validate` panics on it.

use crate::seamfinder::Orientation;
use failure::Fail;

#[derive(Debug, Fail, PartialEq, Eq)]
pub enum CarveError {
    /// The image has no pixels along at least one axis.
    #[fail(display = "cannot carve an empty {}x{} image", width, height)]
    EmptyImage { width: u32, height: u32 },

    /// The request would leave an axis with no pixels, or needs more
    /// pixels along an axis than the image has.
    #[fail(
        display = "cannot carve {} {:?} seam(s) across an axis {} pixel(s) long",
        requested, orientation, available
    )]
    InvalidGeometry {
        orientation: Orientation,
        requested: u32,
        available: u32,
    },
}

/// Reject images with a zero dimension.
pub(crate) fn ensure_not_empty((width, height): (u32, u32)) -> Result<(), CarveError> {
    if width == 0 || height == 0 {
        return Err(CarveError::EmptyImage { width, height });
    }
    Ok(())
}
