// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cut a seam out of an image, or stitch one in
//!
//! Both operations are written for vertical seams only.  A horizontal
//! seam is handled by carving the flipped image and flipping the
//! result back.

use crate::cq;
use crate::flipper::{flip, Flipper};
use crate::seamfinder::{Orientation, Seam};
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};

// Pixels left of the seam keep their column; pixels right of it move
// one column left to close the gap.
fn remove_vertical_seam<I, P, S>(image: &I, seam: &[u32]) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    ImageBuffer::from_fn(width - 1, height, |x, y| {
        let cut = seam[y as usize];
        image.get_pixel(cq!(x < cut, x, x + 1), y)
    })
}

// Floor of the mean, without overflowing the subpixel type.
#[inline]
fn midpoint<S: Primitive>(a: S, b: S) -> S {
    let (lo, hi) = cq!(a <= b, (a, b), (b, a));
    lo + (hi - lo) / (S::one() + S::one())
}

// The new pixel goes immediately right of the seam column, and is the
// average of the two pixels it lands between.  A seam on the last
// column is treated as if it were on the one before, so there is
// always a right-hand neighbour to average with.
fn insert_vertical_seam<I, P, S>(image: &I, seam: &[u32]) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    ImageBuffer::from_fn(width + 1, height, |x, y| {
        let at = seam[y as usize].min(width - 2);
        if x <= at {
            image.get_pixel(x, y)
        } else if x == at + 1 {
            image
                .get_pixel(at, y)
                .map2(&image.get_pixel(at + 1, y), midpoint)
        } else {
            image.get_pixel(x - 1, y)
        }
    })
}

/// Return a copy of the image with the seam removed.  A vertical seam
/// makes the image one column narrower, a horizontal seam one row
/// shorter.
///
/// Panics if the seam does not fit the image, or if removing it would
/// leave the image empty.
pub fn remove_seam<I, P, S>(image: &I, seam: &Seam) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    seam.validate(image.dimensions());
    assert!(
        seam.orientation.carved_extent(image.dimensions()) > 1,
        "removing a {:?} seam would leave the image empty",
        seam.orientation
    );
    match seam.orientation {
        Orientation::Vertical => remove_vertical_seam(image, &seam.path),
        Orientation::Horizontal => flip(&remove_vertical_seam(&Flipper::new(image), &seam.path)),
    }
}

/// Return a copy of the image with a new seam stitched in beside the
/// given one.  A vertical seam makes the image one column wider, a
/// horizontal seam one row taller.
///
/// Panics if the seam does not fit the image, or if the image is less
/// than two pixels across the carved axis.
pub fn insert_seam<I, P, S>(image: &I, seam: &Seam) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    seam.validate(image.dimensions());
    assert!(
        seam.orientation.carved_extent(image.dimensions()) > 1,
        "inserting a {:?} seam needs two pixels to average",
        seam.orientation
    );
    match seam.orientation {
        Orientation::Vertical => insert_vertical_seam(image, &seam.path),
        Orientation::Horizontal => flip(&insert_vertical_seam(&Flipper::new(image), &seam.path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Luma, Rgb, RgbImage};

    fn gray(width: u32, height: u32, data: &[u8]) -> ImageBuffer<Luma<u8>, Vec<u8>> {
        ImageBuffer::from_raw(width, height, data.to_vec()).unwrap()
    }

    fn seam(orientation: Orientation, path: &[u32]) -> Seam {
        Seam {
            orientation,
            path: path.to_vec(),
            cost: 0,
        }
    }

    #[test]
    fn remove_vertical() {
        let img = gray(3, 2, &[1, 2, 3, 4, 5, 6]);
        let out = remove_seam(&img, &seam(Orientation::Vertical, &[1, 2]));
        assert_eq!(out.dimensions(), (2, 2));
        assert_eq!(out.into_raw(), vec![1, 3, 4, 5]);
    }

    #[test]
    fn remove_horizontal() {
        let img = gray(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let out = remove_seam(&img, &seam(Orientation::Horizontal, &[0, 1, 2]));
        assert_eq!(out.dimensions(), (3, 2));
        assert_eq!(out.into_raw(), vec![4, 2, 3, 7, 8, 6]);
    }

    #[test]
    fn insert_vertical_averages_neighbours() {
        let img = gray(3, 2, &[10, 21, 30, 40, 50, 61]);
        let out = insert_seam(&img, &seam(Orientation::Vertical, &[0, 1]));
        assert_eq!(out.dimensions(), (4, 2));
        // 10 and 21 average down to 15; 50 and 61 to 55.
        assert_eq!(out.into_raw(), vec![10, 15, 21, 30, 40, 50, 55, 61]);
    }

    #[test]
    fn insert_on_the_last_column_steps_back_one() {
        let img = gray(3, 1, &[0, 100, 201]);
        let out = insert_seam(&img, &seam(Orientation::Vertical, &[2]));
        assert_eq!(out.into_raw(), vec![0, 100, 150, 201]);
    }

    #[test]
    fn insert_horizontal() {
        let img = gray(2, 2, &[0, 9, 4, 3]);
        let out = insert_seam(&img, &seam(Orientation::Horizontal, &[0, 1]));
        assert_eq!(out.dimensions(), (2, 3));
        assert_eq!(out.into_raw(), vec![0, 9, 2, 6, 4, 3]);
    }

    #[test]
    fn insert_averages_each_channel() {
        let img = RgbImage::from_fn(2, 1, |x, _| cq!(x == 0, Rgb([0, 255, 7]), Rgb([255, 255, 8])));
        let out = insert_seam(&img, &seam(Orientation::Vertical, &[0]));
        assert_eq!(out.get_pixel(1, 0), &Rgb([127, 255, 7]));
    }

    #[test]
    fn insert_then_remove_restores_the_size() {
        let img = gray(4, 3, &[5; 12]);
        let s = seam(Orientation::Vertical, &[3, 2, 3]);
        let grown = insert_seam(&img, &s);
        assert_eq!(grown.dimensions(), (5, 3));
        assert_eq!(remove_seam(&grown, &s).dimensions(), (4, 3));
    }

    #[test]
    #[should_panic]
    fn remove_rejects_a_mismatched_seam() {
        let img = gray(3, 2, &[1, 2, 3, 4, 5, 6]);
        remove_seam(&img, &seam(Orientation::Vertical, &[1, 1, 1]));
    }

    #[test]
    #[should_panic]
    fn remove_refuses_to_empty_the_image() {
        let img = gray(1, 2, &[1, 2]);
        remove_seam(&img, &seam(Orientation::Vertical, &[0, 0]));
    }

    #[test]
    #[should_panic]
    fn insert_needs_two_columns() {
        let img = gray(1, 2, &[1, 2]);
        insert_seam(&img, &seam(Orientation::Vertical, &[0, 0]));
    }
}
