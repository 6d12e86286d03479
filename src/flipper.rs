// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image dimensional flipper
//!
//! Maps the width to the original height, and vice versa, as well as
//! every x to y and vice versa.  A horizontal seam of an image is a
//! vertical seam of its flip, so the carver flips the image, runs the
//! one vertical algorithm, and flips it back.
//!
//! The flip produces a new buffer rather than a proxy view.  The
//! vertical algorithm then walks real contiguous rows, and nothing
//! about it has to know it is secretly working on columns.

use crate::pixelgrid::PixelGrid;
use image::ImageBuffer;

/// Return the transpose of `image`: pixel (x, y) of the result is
/// pixel (y, x) of the source.  Flipping twice is the identity.
pub fn flip(image: &PixelGrid) -> PixelGrid {
    let (width, height) = image.dimensions();
    ImageBuffer::from_fn(height, width, |x, y| *image.get_pixel(y, x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn numbered(width: u32, height: u32) -> PixelGrid {
        ImageBuffer::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, (x * y) as u8]))
    }

    #[test]
    fn flip_swaps_dimensions_and_coordinates() {
        let image = numbered(4, 2);
        let flipped = flip(&image);
        assert_eq!(flipped.dimensions(), (2, 4));
        for y in 0..2 {
            for x in 0..4 {
                assert_eq!(flipped.get_pixel(y, x), image.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn flip_twice_is_identity() {
        let image = numbered(5, 3);
        assert_eq!(flip(&flip(&image)), image);
    }
}
