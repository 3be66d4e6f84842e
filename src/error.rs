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

use thiserror::Error;

use crate::grid::Dimensions;

pub type RearrangeResult<T> = Result<T, RearrangeError>;

/// Errors returned by [`crate::rearrange`].
///
/// No output is produced when any of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RearrangeError {
    /// Tile size or ordering rejected by [`crate::is_valid`].
    #[error("The tile size or ordering are not valid for the given image")]
    InvalidInput,

    /// Buffer does not have the stated image size.
    #[error("Pixel buffer shape {actual:?} does not match image size {expected}")]
    ShapeMismatch {
        expected: Dimensions,
        actual: Vec<usize>,
    },
}
