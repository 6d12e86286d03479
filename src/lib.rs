// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image shrinking by seam carving.
//!
//! ```
//! use image::{ImageBuffer, Rgb};
//! use seamcarve::{seamcarve, PixelGrid};
//!
//! let image: PixelGrid = ImageBuffer::from_fn(8, 6, |x, y| Rgb([(x * 30) as u8, (y * 40) as u8, 0]));
//! let smaller = seamcarve(&image, 3, 2).unwrap();
//! assert_eq!(smaller.dimensions(), (5, 4));
//! ```

mod ternary;

pub mod energy;
pub mod error;
pub mod flipper;
pub mod pixelgrid;
pub mod seamcarver;
pub mod seamfinder;
pub mod twodmap;

pub use energy::{calculate_energy, energy_to_image, EnergyMap};
pub use error::{Axis, CarveError};
pub use pixelgrid::{to_pixel_grid, PixelGrid};
pub use seamcarver::{remove_vertical_seam, seamcarve, SeamCarver};
pub use seamfinder::{energy_to_vertical_seam, is_valid_seam, Seam, SeamFinder};
