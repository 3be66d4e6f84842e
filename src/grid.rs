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

use std::fmt;
use std::str::FromStr;

/// Width and height pair, used for both images and tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Square dimensions.
    pub const fn square(size: usize) -> Self {
        Self::new(size, size)
    }
}

impl From<(usize, usize)> for Dimensions {
    fn from((width, height): (usize, usize)) -> Self {
        Self::new(width, height)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid dimensions {0:?} (expected WxH or a single size)")]
pub struct ParseDimensionsError(String);

/// Parses `WxH`, or `N` as shorthand for `NxN`.
impl FromStr for Dimensions {
    type Err = ParseDimensionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDimensionsError(s.to_owned());
        let parse = |v: &str| v.trim().parse::<usize>().map_err(|_| err());

        match s.split_once(['x', 'X']) {
            Some((w, h)) => Ok(Self::new(parse(w)?, parse(h)?)),
            None => parse(s).map(Self::square),
        }
    }
}

/// Row-major grid of equal tiles covering an image exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    tile: Dimensions,
    columns: usize,
    rows: usize,
}

impl TileGrid {
    /// Returns `None` if a tile dimension is zero or does not divide the image.
    pub fn new(image: Dimensions, tile: Dimensions) -> Option<Self> {
        if tile.width == 0 || tile.height == 0 {
            return None;
        }
        if image.width % tile.width != 0 || image.height % tile.height != 0 {
            return None;
        }

        Some(Self {
            tile,
            columns: image.width / tile.width,
            rows: image.height / tile.height,
        })
    }

    pub fn tile(&self) -> Dimensions {
        self.tile
    }

    /// Tiles per row.
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of tiles, or `None` on overflow.
    pub fn checked_len(&self) -> Option<usize> {
        self.columns.checked_mul(self.rows)
    }

    /// Number of tiles.
    ///
    /// Cannot overflow for grids backed by an actual buffer,
    /// since every tile holds at least one element.
    pub fn len(&self) -> usize {
        self.columns * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }

    /// Pixel origin `(x, y)` of tile `index`.
    pub fn origin(&self, index: usize) -> (usize, usize) {
        (
            (index % self.columns) * self.tile.width,
            (index / self.columns) * self.tile.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::pair("40x60", Dimensions::new(40, 60))]
    #[case::upper("16X8", Dimensions::new(16, 8))]
    #[case::single("20", Dimensions::square(20))]
    #[case::spaced(" 3 x 4", Dimensions::new(3, 4))]
    fn parse_dimensions(#[case] s: &str, #[case] expected: Dimensions) {
        assert_eq!(s.parse::<Dimensions>(), Ok(expected));
    }

    #[rstest]
    #[case::empty("")]
    #[case::negative("-1x2")]
    #[case::trailing("2x")]
    #[case::garbage("axb")]
    fn parse_dimensions_rejects(#[case] s: &str) {
        assert!(s.parse::<Dimensions>().is_err());
    }

    #[test]
    fn display_roundtrips() {
        let d = Dimensions::new(1104, 1600);
        assert_eq!(d.to_string(), "1104x1600");
        assert_eq!(d.to_string().parse::<Dimensions>(), Ok(d));
    }

    #[test]
    fn grid_geometry() {
        let grid = TileGrid::new(Dimensions::new(40, 60), Dimensions::square(20)).unwrap();
        assert_eq!(grid.columns(), 2);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.origin(0), (0, 0));
        assert_eq!(grid.origin(1), (20, 0));
        assert_eq!(grid.origin(2), (0, 20));
        assert_eq!(grid.origin(5), (20, 40));
    }

    #[rstest]
    #[case::zero_width(Dimensions::new(0, 4))]
    #[case::zero_height(Dimensions::new(4, 0))]
    #[case::not_dividing(Dimensions::new(63, 63))]
    #[case::too_large(Dimensions::new(1024, 1024))]
    fn grid_rejects(#[case] tile: Dimensions) {
        assert_eq!(TileGrid::new(Dimensions::new(512, 512), tile), None);
    }

    #[test]
    fn empty_image_is_empty_grid() {
        let grid = TileGrid::new(Dimensions::new(0, 16), Dimensions::square(8)).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.len(), 0);
    }
}
