// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel grid that the carver works on: plain 8-bit RGB.

use image::{DynamicImage, ImageBuffer, Rgb};

/// A width by height buffer of RGB triples.
pub type PixelGrid = ImageBuffer<Rgb<u8>, Vec<u8>>;

/// Convert whatever the decoder handed us to RGB.  Any alpha channel
/// is discarded; wider samples are narrowed to 8 bits.
pub fn to_pixel_grid(image: &DynamicImage) -> PixelGrid {
    image.to_rgb8()
}
