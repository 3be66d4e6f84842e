//! Library to unscramble images split into shuffled tiles.
//!
//! An image is cut into a row-major grid of equal tiles, and an
//! ordering names which source tile fills each destination slot.
//! This library defines two main functions:
//!
//! * [is_valid] : Checks that the tile size divides the image and
//!   the ordering uses every tile exactly once.
//! * [rearrange] : Produces a new array with tiles moved per the ordering.
//!
//! Decoding and encoding images is left to the caller,
//! [pixels] has helpers for the [image] crate.

// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.
//

mod error;
mod grid;
mod ordering;
pub mod pixels;
mod rearrange;
mod validate;

pub use crate::error::{RearrangeError, RearrangeResult};
pub use crate::grid::{Dimensions, ParseDimensionsError, TileGrid};
pub use crate::ordering::{Ordering, ParseOrderingError};
#[doc(inline)]
pub use crate::rearrange::{rearrange, rearrange_with, Config, ConfigBuilder};
#[doc(inline)]
pub use crate::validate::is_valid;
