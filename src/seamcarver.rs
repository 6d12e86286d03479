// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The main seamcarver routine.  Columns come out first, one seam at
//! a time.  Then the image is flipped so that its rows are columns,
//! the same vertical carve removes the rows, and the image is flipped
//! back.

use crate::energy::calculate_energy;
use crate::error::{Axis, CarveError, Result};
use crate::flipper::flip;
use crate::pixelgrid::PixelGrid;
use crate::seamfinder::SeamFinder;
use image::ImageBuffer;

/// Delete one pixel per row, at the column the seam names for that
/// row; everything to its right slides one column left.  The result
/// is exactly one column narrower and just as tall.
pub fn remove_vertical_seam(image: PixelGrid, seam: &[u32]) -> PixelGrid {
    let (width, height) = image.dimensions();
    if width == 0 {
        return image;
    }
    debug_assert!(crate::seamfinder::is_valid_seam(seam, width, height));
    ImageBuffer::from_fn(width - 1, height, |x, y| {
        let gap = seam[y as usize];
        *image.get_pixel(if x < gap { x } else { x + 1 }, y)
    })
}

// Energy, seam, removal.  Everything is recomputed from scratch,
// since the image changed shape since the last pass.
fn carve_once(image: PixelGrid) -> PixelGrid {
    let (energy, _) = calculate_energy(&image);
    let seam = energy.find_vertical_seam();
    remove_vertical_seam(image, &seam)
}

fn carve_columns(mut image: PixelGrid, count: u32) -> PixelGrid {
    for _ in 0..count {
        image = carve_once(image);
    }
    image
}

/// A struct for holding the image to be carved.  The image is only
/// ever read; carving works on a private copy.
pub struct SeamCarver<'a> {
    image: &'a PixelGrid,
}

impl<'a> SeamCarver<'a> {
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: &'a PixelGrid) -> Self {
        Self { image }
    }

    /// Remove `remove_width` vertical seams and then `remove_height`
    /// horizontal ones, returning the smaller image.
    ///
    /// Both counts must leave at least one column and one row behind.
    /// The request is checked before any carving starts, so an error
    /// never comes with a half-carved image.
    pub fn carve(&self, remove_width: u32, remove_height: u32) -> Result<PixelGrid> {
        let (width, height) = self.image.dimensions();
        if width == 0 || height == 0 {
            return Err(CarveError::DegenerateImage { width, height });
        }
        if remove_width >= width {
            return Err(CarveError::InvalidReductionSize {
                axis: Axis::Width,
                requested: remove_width,
                available: width,
            });
        }
        if remove_height >= height {
            return Err(CarveError::InvalidReductionSize {
                axis: Axis::Height,
                requested: remove_height,
                available: height,
            });
        }

        let narrowed = carve_columns(self.image.clone(), remove_width);
        let flipped = carve_columns(flip(&narrowed), remove_height);
        Ok(flip(&flipped))
    }
}

/// Carve `remove_width` columns and `remove_height` rows out of
/// `image`.  See [`SeamCarver::carve`].
pub fn seamcarve(image: &PixelGrid, remove_width: u32, remove_height: u32) -> Result<PixelGrid> {
    SeamCarver::new(image).carve(remove_width, remove_height)
}
