// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! What can go wrong when carving.

use failure::Fail;
use std::fmt;

/// Which dimension of the image a reduction was requested on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::Width => write!(f, "width"),
            Axis::Height => write!(f, "height"),
        }
    }
}

#[derive(Debug, Fail, PartialEq, Eq)]
pub enum CarveError {
    /// The image has no pixels along one of its axes.
    #[fail(display = "cannot carve a degenerate {}x{} image", width, height)]
    DegenerateImage { width: u32, height: u32 },

    /// Removing this many seams would leave nothing behind.
    #[fail(
        display = "cannot remove {} seams from an image whose {} is {}",
        requested, axis, available
    )]
    InvalidReductionSize {
        axis: Axis,
        requested: u32,
        available: u32,
    },
}

pub type Result<T> = std::result::Result<T, CarveError>;
