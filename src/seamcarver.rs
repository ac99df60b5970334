// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The resizing loops
//!
//! Every step recomputes the energy of the whole image, finds one
//! seam, and removes or inserts it.  Nothing carries over from one
//! step to the next except the image itself: removing a seam changes
//! the gradients on both sides of it, so the old energy map is stale.

use crate::cq;
use crate::energy::calculate_energy;
use crate::errors::{ensure_not_empty, CarveError};
use crate::seameditor::{insert_seam, remove_seam};
use crate::seamfinder::{find_seam, GradientSeamFinder, Orientation, Seam, SeamFinder};
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};
use log::debug;

fn to_buffer<I, P, S>(image: &I) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    ImageBuffer::from_fn(width, height, |x, y| image.get_pixel(x, y))
}

fn carve_once<I, P, S>(image: &I, orientation: Orientation) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let seam = GradientSeamFinder::new(image).find_seam(orientation);
    remove_seam(image, &seam)
}

fn grow_once<I, P, S>(image: &I, orientation: Orientation) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let seam = GradientSeamFinder::new(image).find_seam(orientation);
    insert_seam(image, &seam)
}

/// Remove `k` seams running in one direction.  Vertical seams make
/// the image narrower, horizontal seams make it shorter.
///
/// Fails without carving anything if the image is empty or `k` is not
/// smaller than the carved dimension.
pub fn reduce_by_k<I, P, S>(
    image: &I,
    k: u32,
    orientation: Orientation,
) -> Result<ImageBuffer<P, Vec<S>>, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    ensure_not_empty(image.dimensions())?;
    let available = orientation.carved_extent(image.dimensions());
    if k >= available {
        return Err(CarveError::InvalidGeometry {
            orientation,
            requested: k,
            available,
        });
    }

    debug!("removing {} {:?} seam(s) from {:?}", k, orientation, image.dimensions());
    let mut scratch = to_buffer(image);
    for _ in 0..k {
        scratch = carve_once(&scratch, orientation);
    }
    Ok(scratch)
}

/// Insert `k` seams running in one direction.  Vertical seams make
/// the image wider, horizontal seams make it taller.
///
/// Each seam is found in the image as grown so far, so repeated
/// insertions tend to revisit the same quiet region.
pub fn increase_by_k<I, P, S>(
    image: &I,
    k: u32,
    orientation: Orientation,
) -> Result<ImageBuffer<P, Vec<S>>, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    ensure_not_empty(image.dimensions())?;
    let available = orientation.carved_extent(image.dimensions());
    if k > 0 && available < 2 {
        return Err(CarveError::InvalidGeometry {
            orientation,
            requested: k,
            available,
        });
    }

    debug!("inserting {} {:?} seam(s) into {:?}", k, orientation, image.dimensions());
    let mut scratch = to_buffer(image);
    for _ in 0..k {
        scratch = grow_once(&scratch, orientation);
    }
    Ok(scratch)
}

// Both seams come from the same energy map; the vertical one wins a
// tie.
fn cheaper_seam(energy: &TwoDimensionalMap<u32>) -> Seam {
    let vertical = find_seam(energy, Orientation::Vertical);
    let horizontal = find_seam(energy, Orientation::Horizontal);
    cq!(horizontal.cost < vertical.cost, horizontal, vertical)
}

/// Remove `delta_rows` horizontal seams and `delta_cols` vertical
/// seams, choosing greedily at each step.
///
/// While both counts are outstanding, both seams are found on the same
/// energy map and the cheaper one is removed; the vertical seam wins a
/// tie.  Once one count reaches zero the other axis is carved alone.
pub fn reduce_both<I, P, S>(
    image: &I,
    delta_rows: u32,
    delta_cols: u32,
) -> Result<ImageBuffer<P, Vec<S>>, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    ensure_not_empty((width, height))?;
    if delta_rows >= height {
        return Err(CarveError::InvalidGeometry {
            orientation: Orientation::Horizontal,
            requested: delta_rows,
            available: height,
        });
    }
    if delta_cols >= width {
        return Err(CarveError::InvalidGeometry {
            orientation: Orientation::Vertical,
            requested: delta_cols,
            available: width,
        });
    }

    debug!(
        "removing {} row(s) and {} column(s) from {}x{}",
        delta_rows, delta_cols, width, height
    );
    let (mut rows, mut cols) = (delta_rows, delta_cols);
    let mut scratch = to_buffer(image);
    while rows > 0 || cols > 0 {
        scratch = if rows == 0 {
            cols -= 1;
            carve_once(&scratch, Orientation::Vertical)
        } else if cols == 0 {
            rows -= 1;
            carve_once(&scratch, Orientation::Horizontal)
        } else {
            let seam = cheaper_seam(&calculate_energy(&scratch));
            match seam.orientation {
                Orientation::Vertical => cols -= 1,
                Orientation::Horizontal => rows -= 1,
            }
            remove_seam(&scratch, &seam)
        };
    }
    Ok(scratch)
}

// Shrink or grow along one axis, whichever gets from `from` to `to`.
fn resize_axis<I, P, S>(
    image: &I,
    from: u32,
    to: u32,
    orientation: Orientation,
) -> Result<ImageBuffer<P, Vec<S>>, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    if to < from {
        reduce_by_k(image, from - to, orientation)
    } else {
        increase_by_k(image, to - from, orientation)
    }
}

/// A struct for holding the image to be carved.
pub struct SeamCarver<'a, I>
where
    I: GenericImageView,
{
    image: &'a I,
}

impl<'a, I, P, S> SeamCarver<'a, I>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: &'a I) -> Self {
        Self { image }
    }

    /// Given a desired new width and height, carve or stitch seams
    /// until the image has exactly that size.  If neither dimension
    /// grows, rows and columns are removed together with
    /// [`reduce_both`]; otherwise the width is adjusted first, then
    /// the height.
    pub fn carve_to(
        &self,
        new_width: u32,
        new_height: u32,
    ) -> Result<ImageBuffer<P, Vec<S>>, CarveError> {
        let (width, height) = self.image.dimensions();
        ensure_not_empty((width, height))?;
        if new_width == 0 {
            return Err(CarveError::InvalidGeometry {
                orientation: Orientation::Vertical,
                requested: width,
                available: width,
            });
        }
        if new_height == 0 {
            return Err(CarveError::InvalidGeometry {
                orientation: Orientation::Horizontal,
                requested: height,
                available: height,
            });
        }

        if new_width <= width && new_height <= height {
            return reduce_both(self.image, height - new_height, width - new_width);
        }
        let resized = resize_axis(self.image, width, new_width, Orientation::Vertical)?;
        resize_axis(&resized, height, new_height, Orientation::Horizontal)
    }
}
