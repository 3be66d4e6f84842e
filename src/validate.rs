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

use std::collections::HashSet;

use crate::grid::{Dimensions, TileGrid};

/// Checks whether `ordering` can rearrange an image of `image_size`
/// split into tiles of `tile_size`.
///
/// Valid when:
/// * The tile size is nonzero and divides each image dimension exactly.
/// * `ordering` uses each tile index in `0..n_tiles` exactly once.
///
/// Never panics, malformed input simply returns `false`.
pub fn is_valid(image_size: Dimensions, tile_size: Dimensions, ordering: &[i64]) -> bool {
    let Some(n) = TileGrid::new(image_size, tile_size).and_then(|g| g.checked_len()) else {
        return false;
    };

    if ordering.len() != n {
        return false;
    }

    let distinct: HashSet<_> = ordering.iter().collect();
    if distinct.len() != n {
        return false;
    }

    let (Some(&min), Some(&max)) = (ordering.iter().min(), ordering.iter().max()) else {
        return false;
    };
    min == 0 && usize::try_from(max).is_ok_and(|max| max == n - 1)
}
