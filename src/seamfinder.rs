// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest top-to-bottom seam through an energy map.

use crate::cq;
use crate::energy::EnergyMap;
use crate::twodmap::{EnergyAndBackPointer, TwoDimensionalMap};

/// One x coordinate per row, top to bottom.
pub type Seam = Vec<u32>;

/// This trait defines how we will ask for seams.  It's a primitive
/// interface, just enough to let the carver not care where a seam
/// came from.
pub trait SeamFinder {
    /// Request the cheapest vertical seam.
    fn find_vertical_seam(&self) -> Seam;
}

impl SeamFinder for EnergyMap {
    fn find_vertical_seam(&self) -> Seam {
        energy_to_vertical_seam(self)
    }
}

// Index of the first minimum in `candidates`.  Strict comparison, so
// among equal costs the earliest one wins.
fn first_minimum<I>(candidates: I) -> Option<(u32, f64)>
where
    I: Iterator<Item = (u32, f64)>,
{
    candidates.fold(None, |best, (x, cost)| match best {
        Some((_, lowest)) if cost >= lowest => best,
        _ => Some((x, cost)),
    })
}

/// Given an energy map, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates for each
/// pixel in the seam to be removed.
///
/// Each pixel in a row may continue the seam of the pixel above-left,
/// directly above, or above-right of it, and picks whichever of those
/// has the lowest cumulative energy, preferring them in that order
/// when costs tie.  The seam then ends at the leftmost cheapest pixel
/// of the bottom row.  An empty map yields an empty seam.
pub fn energy_to_vertical_seam(energy: &EnergyMap) -> Seam {
    let (width, height) = (energy.width, energy.height);
    if width == 0 || height == 0 {
        return Seam::new();
    }
    let mut target: TwoDimensionalMap<EnergyAndBackPointer<f64>> =
        TwoDimensionalMap::new(width, height);

    // Populate the first row with their native energies.
    for x in 0..width {
        target[(x, 0)].energy = energy[(x, 0)];
    }

    let maxwidth = width - 1;
    // For every subsequent row, populate the target cell with the sum
    // of the *lowest adjacent upper energy* and the *x coordinate of
    // that energy*
    for y in 1..height {
        for x in 0..width {
            let range = cq!(x == 0, 0, x - 1)..=cq!(x == maxwidth, maxwidth, x + 1);
            let above = range.map(|px| (px, target[(px, y - 1)].energy));
            if let Some((parent, cost)) = first_minimum(above) {
                target[(x, y)] = EnergyAndBackPointer {
                    energy: energy[(x, y)] + cost,
                    parent,
                };
            }
        }
    }

    // Find the x coordinate of the bottommost seam with the least energy.
    let bottom = target.row(height - 1);
    let mut seam_col = first_minimum((0..width).map(|x| (x, bottom[x as usize].energy)))
        .map_or(0, |(x, _)| x);

    // Working backwards, collect the x coordinates of the seam, then
    // put them back in top-to-bottom order.
    let mut seam = Seam::with_capacity(height as usize);
    for y in (0..height).rev() {
        seam.push(seam_col);
        seam_col = target[(seam_col, y)].parent;
    }
    seam.reverse();
    seam
}

/// True when `seam` is a legal vertical seam for an image of this
/// size: one in-range column per row, and no jump of more than one
/// column between neighboring rows.
pub fn is_valid_seam(seam: &[u32], width: u32, height: u32) -> bool {
    seam.len() == height as usize
        && seam.iter().all(|&x| x < width)
        && seam
            .windows(2)
            .all(|pair| cq!(pair[0] > pair[1], pair[0] - pair[1], pair[1] - pair[0]) <= 1)
}
