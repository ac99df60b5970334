// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image dimensional flipper
//!
//! A proxy for the ImageRS `GenericImageView` trait that maps the width
//! to the original height, and vice versa, as well as every x to y.
//!
//! Every seam operation in this crate is written once, for vertical
//! seams.  A horizontal seam is a vertical seam of the flipped image:
//! flip, carve, flip back.

use image::{GenericImageView, ImageBuffer, Pixel, Primitive};

/// A read-only transposed view of an image.
pub struct Flipper<'a, I>
where
    I: GenericImageView,
{
    pub image: &'a I,
}

impl<'a, I> Flipper<'a, I>
where
    I: GenericImageView,
{
    pub fn new(image: &'a I) -> Self {
        Flipper { image }
    }
}

impl<'a, I> GenericImageView for Flipper<'a, I>
where
    I: GenericImageView,
{
    type Pixel = I::Pixel;
    type InnerImageView = I;

    fn dimensions(&self) -> (u32, u32) {
        let (x, y) = self.image.dimensions();
        (y, x)
    }

    fn width(&self) -> u32 {
        self.image.height()
    }

    fn height(&self) -> u32 {
        self.image.width()
    }

    fn get_pixel(&self, x: u32, y: u32) -> Self::Pixel {
        self.image.get_pixel(y, x)
    }

    fn inner(&self) -> &Self::InnerImageView {
        self.image
    }

    fn bounds(&self) -> (u32, u32, u32, u32) {
        let (x1, y1, x2, y2) = self.image.bounds();
        (y1, x1, y2, x2)
    }
}

/// Materialize the transpose of an image into a fresh buffer.
pub fn flip<I, P, S>(image: &I) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let view = Flipper::new(image);
    let (width, height) = view.dimensions();
    ImageBuffer::from_fn(width, height, |x, y| view.get_pixel(x, y))
}
