// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use log::{debug, trace};
use ndarray::prelude::*;
use ndarray::Slice;
use rayon::prelude::*;

use crate::error::{RearrangeError, RearrangeResult};
use crate::grid::{Dimensions, TileGrid};
use crate::validate::is_valid;

/// Rearrange configuration.
#[derive(Debug, Clone)]
pub struct Config {
    parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        ConfigBuilder::new().build()
    }
}

impl Config {
    pub fn parallel(&self) -> bool {
        self.parallel
    }
}

#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    parallel: bool,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self { parallel: true }
    }

    /// Copy tiles on the rayon thread pool (default: on).
    pub fn parallel(mut self, v: bool) -> Self {
        self.parallel = v;
        self
    }

    pub fn build(self) -> Config {
        Config {
            parallel: self.parallel,
        }
    }
}

/// Rearranges tiles with the default [`Config`].
///
/// See [`rearrange_with`].
pub fn rearrange<A, D>(
    arr: ArrayView<'_, A, D>,
    image_size: Dimensions,
    tile_size: Dimensions,
    ordering: &[i64],
) -> RearrangeResult<Array<A, D>>
where
    A: Clone + Send + Sync,
    D: Dimension,
{
    rearrange_with(arr, image_size, tile_size, ordering, &Config::default())
}

/// Main tile rearrange algorithm.
///
/// Splits the input into a row-major grid of `tile_size` tiles and
/// produces a new array where destination slot `p` holds source tile
/// `ordering[p]`.
///
/// Parameters:
/// * `arr` : Input array view. Can be multidimensional,
///   but only the first 2 dimension (rows, columns) will be rearranged.
/// * `image_size` : Image size. Must equal the first 2 dimension of `arr`.
/// * `tile_size` : Tile size. Must divide `image_size`.
/// * `ordering` : Source tile for each destination slot.
///
/// Input is checked with [`is_valid`] before any element is read.
pub fn rearrange_with<A, D>(
    arr: ArrayView<'_, A, D>,
    image_size: Dimensions,
    tile_size: Dimensions,
    ordering: &[i64],
    config: &Config,
) -> RearrangeResult<Array<A, D>>
where
    A: Clone + Send + Sync,
    D: Dimension,
{
    if !is_valid(image_size, tile_size, ordering) {
        return Err(RearrangeError::InvalidInput);
    }
    let grid = TileGrid::new(image_size, tile_size).ok_or(RearrangeError::InvalidInput)?;

    let shape = arr.shape();
    if shape.len() < 2 || shape[0] != image_size.height || shape[1] != image_size.width {
        return Err(RearrangeError::ShapeMismatch {
            expected: image_size,
            actual: shape.to_vec(),
        });
    }

    debug!(
        "Rearranging {image_size} image into {}x{} grid of {tile_size} tiles",
        grid.columns(),
        grid.rows(),
    );

    let mut out = arr.to_owned();
    let out_view = out.view_mut();

    // SAFETY: Ordering is a permutation (checked above), so every
    // destination slot is written by exactly one call.
    if config.parallel {
        ordering
            .par_iter()
            .enumerate()
            .for_each(|(position, &index)| unsafe {
                copy_tile(&arr, &out_view, &grid, index as usize, position)
            });
    } else {
        for (position, &index) in ordering.iter().enumerate() {
            unsafe { copy_tile(&arr, &out_view, &grid, index as usize, position) }
        }
    }

    Ok(out)
}

/// Copies source tile `index` into destination slot `position`.
///
/// # Safety
///
/// No other copy may target the same `position` concurrently.
unsafe fn copy_tile<A, D>(
    arr: &ArrayView<'_, A, D>,
    out: &ArrayViewMut<'_, A, D>,
    grid: &TileGrid,
    index: usize,
    position: usize,
) where
    A: Clone,
    D: Dimension,
{
    let Dimensions { width, height } = grid.tile();

    let (x, y) = grid.origin(index);
    let mut arr = arr.view();
    arr.slice_axis_inplace(Axis(0), Slice::from(y..y + height));
    arr.slice_axis_inplace(Axis(1), Slice::from(x..x + width));

    let (ox, oy) = grid.origin(position);
    let mut out = out.raw_view();
    out.slice_axis_inplace(Axis(0), Slice::from(oy..oy + height));
    out.slice_axis_inplace(Axis(1), Slice::from(ox..ox + width));

    trace!("Tile {index} ({x}, {y}) -> slot {position} ({ox}, {oy})");

    azip!((d in out, s in arr) {
        (*(d as *mut A)).clone_from(s)
    });
}
