// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! An addressable two-dimensional field.
//!
//! Both the energy map (one `f64` per pixel) and the dynamic
//! programming table used to find a seam (a cumulative energy plus a
//! parent column per pixel) are the same shape as the image they were
//! derived from, so they share this one container.

use std::ops::{Index, IndexMut};

/// A `width` by `height` field of `P`, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map with every cell set to `P::default()`.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major vector.  Returns `None` if the
    /// vector is not exactly `width * height` long.
    pub fn from_raw(width: u32, height: u32, data: Vec<P>) -> Option<Self> {
        if data.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            data,
        })
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// The cells of a single row, left to right.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// Every cell, row-major.
    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    /// Every cell, row-major, for filling in place.  Each
    /// `chunks_mut(width)` of this slice is one row.
    pub fn as_mut_slice(&mut self) -> &mut [P] {
        &mut self.data
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}

/// One cell of the seam table: the cheapest cumulative energy of any
/// path reaching this pixel from the top row, and the column in the
/// row above that path came through.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct EnergyAndBackPointer<P: Default + Copy> {
    pub energy: P,
    pub parent: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_is_row_major() {
        let map = TwoDimensionalMap::from_raw(3, 2, vec![0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(map[(0, 0)], 0);
        assert_eq!(map[(2, 0)], 2);
        assert_eq!(map[(0, 1)], 3);
        assert_eq!(map[(2, 1)], 5);
        assert_eq!(map.row(1), &[3, 4, 5]);
    }

    #[test]
    fn from_raw_rejects_wrong_length() {
        assert!(TwoDimensionalMap::from_raw(3, 3, vec![0u32; 8]).is_none());
    }

    #[test]
    fn index_mut_writes_through() {
        let mut map: TwoDimensionalMap<EnergyAndBackPointer<f64>> = TwoDimensionalMap::new(2, 2);
        map[(1, 1)] = EnergyAndBackPointer {
            energy: 4.5,
            parent: 1,
        };
        assert_eq!(map[(1, 1)].energy, 4.5);
        assert_eq!(map[(1, 1)].parent, 1);
        assert_eq!(map[(0, 1)], EnergyAndBackPointer::default());
    }
}
