// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Every pixel gets the magnitude of the local color gradient:
//!
//! ```text
//!        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//!        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//!       e(x,y) = √(|Δx|²+|Δy|²)
//! ```
//!
//! where Δx is taken between the pixels to the left and right, and Δy
//! between the pixels above and below.  Pixels on the border borrow
//! the neighbors of the nearest interior pixel: the gradient along x
//! for column 0 is the one computed at column 1, and for the last
//! column the one at the second-to-last.  Likewise for rows.

use crate::cq;
use crate::pixelgrid::PixelGrid;
use crate::twodmap::TwoDimensionalMap;
use image::{GrayImage, ImageBuffer, Luma, Pixel, Rgb};
use itertools::zip;
use num_traits::clamp;

/// One non-negative energy per pixel.
pub type EnergyMap = TwoDimensionalMap<f64>;

// The pair of coordinates whose difference is the gradient at `c`
// along an axis of length `len`.  Border cells are moved inward
// first.  Axes too short to have an interior are handled directly:
// a lone cell has no gradient, and a pair of cells shares the one
// difference between them.
fn neighbors(c: u32, len: u32) -> (u32, u32) {
    match len {
        1 => (0, 0),
        2 => (0, 1),
        _ => {
            let c = cq!(c == 0, 1, cq!(c == len - 1, len - 2, c));
            (c - 1, c + 1)
        }
    }
}

// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and sums them up.
fn energy_of_pair(p1: &Rgb<u8>, p2: &Rgb<u8>) -> u32 {
    zip(p1.channels(), p2.channels())
        .map(|(&c1, &c2)| {
            let d = i32::from(c1) - i32::from(c2);
            (d * d) as u32
        })
        .sum()
}

fn pixel_energy(image: &PixelGrid, x: u32, y: u32) -> f64 {
    let (width, height) = image.dimensions();
    let (left, right) = neighbors(x, width);
    let (up, down) = neighbors(y, height);
    let gradient_x = energy_of_pair(image.get_pixel(left, y), image.get_pixel(right, y));
    let gradient_y = energy_of_pair(image.get_pixel(x, up), image.get_pixel(x, down));
    f64::from(gradient_x + gradient_y).sqrt()
}

#[cfg(not(feature = "threaded"))]
fn fill_energy(image: &PixelGrid, emap: &mut EnergyMap) {
    use itertools::iproduct;

    for (y, x) in iproduct!(0..emap.height, 0..emap.width) {
        emap[(x, y)] = pixel_energy(image, x, y);
    }
}

// Each pixel depends only on its fixed neighbors in the source image,
// so the map is cut into bands of whole rows and every band is filled
// by its own thread.
#[cfg(feature = "threaded")]
fn fill_energy(image: &PixelGrid, emap: &mut EnergyMap) {
    let (width, height) = (emap.width as usize, emap.height as usize);
    if width == 0 || height == 0 {
        return;
    }
    let workers = num_cpus::get().max(1);
    let rows_per_band = (height + workers - 1) / workers;

    let filled = crossbeam::scope(|s| {
        for (band, cells) in emap.as_mut_slice().chunks_mut(rows_per_band * width).enumerate() {
            s.spawn(move |_| {
                let top = band * rows_per_band;
                for (i, cell) in cells.iter_mut().enumerate() {
                    let (x, y) = (i % width, top + i / width);
                    *cell = pixel_energy(image, x as u32, y as u32);
                }
            });
        }
    });
    if let Err(panic) = filled {
        std::panic::resume_unwind(panic);
    }
}

/// Compute the energy of every pixel in an image.  Returns the map
/// and the largest energy in it; the maximum is 0 for an empty or
/// perfectly flat image.
pub fn calculate_energy(image: &PixelGrid) -> (EnergyMap, f64) {
    let (width, height) = image.dimensions();
    let mut emap = EnergyMap::new(width, height);
    fill_energy(image, &mut emap);
    let max_energy = emap.as_slice().iter().cloned().fold(0.0, f64::max);
    (emap, max_energy)
}

/// Render an energy map as a grayscale image, scaled so that the most
/// energetic pixel is white.  A map whose maximum is zero renders as
/// solid white.
pub fn energy_to_image(energy: &EnergyMap, max_energy: f64) -> GrayImage {
    ImageBuffer::from_fn(energy.width, energy.height, |x, y| {
        let intensity = cq!(
            max_energy <= 0.0,
            255.0,
            (255.0 * energy[(x, y)] / max_energy).floor()
        );
        Luma([clamp(intensity, 0.0, 255.0) as u8])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: u32, height: u32, pixels: &[[u8; 3]]) -> PixelGrid {
        let raw = pixels.iter().flat_map(|p| p.iter().cloned()).collect();
        ImageBuffer::from_raw(width, height, raw).unwrap()
    }

    fn squared_distance(image: &PixelGrid, a: (u32, u32), b: (u32, u32)) -> f64 {
        let (p, q) = (image.get_pixel(a.0, a.1), image.get_pixel(b.0, b.1));
        (0..3)
            .map(|c| (f64::from(p[c]) - f64::from(q[c])).powi(2))
            .sum()
    }

    const THREE_BY_THREE: [[u8; 3]; 9] = [
        [0, 0, 0],
        [10, 0, 0],
        [50, 0, 0],
        [0, 20, 0],
        [30, 20, 0],
        [90, 20, 5],
        [0, 0, 40],
        [10, 60, 40],
        [50, 0, 100],
    ];

    #[test]
    fn border_columns_borrow_interior_gradient() {
        let image = grid(3, 3, &THREE_BY_THREE);
        let (energy, _) = calculate_energy(&image);

        // On a 3x3 image every pixel reads its x gradient between
        // columns 0 and 2 and its y gradient between rows 0 and 2.
        for y in 0..3 {
            for x in 0..3 {
                let expected =
                    (squared_distance(&image, (0, y), (2, y)) + squared_distance(&image, (x, 0), (x, 2))).sqrt();
                assert_eq!(energy[(x, y)], expected, "energy at ({}, {})", x, y);
            }
        }

        assert_eq!(energy[(0, 1)], 9725f64.sqrt());
        // A clamp-to-self border would have used columns 0 and 1 instead.
        let clamped = (squared_distance(&image, (0, 1), (1, 1)) + 1600.0).sqrt();
        assert_ne!(energy[(0, 1)], clamped);
    }

    #[test]
    fn single_row_uses_only_horizontal_gradient() {
        let image = grid(5, 1, &[[0, 0, 0], [0, 0, 0], [100, 0, 0], [0, 0, 0], [0, 0, 0]]);
        let (energy, max_energy) = calculate_energy(&image);
        assert_eq!(energy.as_slice(), &[100.0, 100.0, 0.0, 100.0, 100.0]);
        assert_eq!(max_energy, 100.0);
    }

    #[test]
    fn two_pixel_axis_shares_one_difference() {
        let image = grid(2, 1, &[[0, 0, 0], [3, 4, 0]]);
        let (energy, _) = calculate_energy(&image);
        assert_eq!(energy.as_slice(), &[5.0, 5.0]);
    }

    #[test]
    fn flat_image_has_zero_energy() {
        let image = ImageBuffer::from_pixel(4, 3, Rgb([7, 7, 7]));
        let (energy, max_energy) = calculate_energy(&image);
        assert!(energy.as_slice().iter().all(|&e| e == 0.0));
        assert_eq!(max_energy, 0.0);
        let rendered = energy_to_image(&energy, max_energy);
        assert!(rendered.pixels().all(|p| p[0] == 255));
    }

    #[test]
    fn energy_image_scales_to_maximum() {
        let energy = EnergyMap::from_raw(3, 1, vec![0.0, 5.0, 10.0]).unwrap();
        let rendered = energy_to_image(&energy, 10.0);
        assert_eq!(rendered.into_raw(), vec![0, 127, 255]);
    }

    #[test]
    fn energy_is_sized_like_the_image() {
        let image = ImageBuffer::from_fn(7, 4, |x, y| Rgb([x as u8 * 30, y as u8 * 50, 9]));
        let (energy, max_energy) = calculate_energy(&image);
        assert_eq!((energy.width, energy.height), (7, 4));
        assert!(energy.as_slice().iter().all(|&e| e >= 0.0 && e <= max_energy));
    }
}
