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

//! Glue between [`image`] and [`ndarray`].
//!
//! Images are viewed as `(height, width, bytes_per_pixel)` byte arrays,
//! so tiles move whole pixels regardless of channel layout or depth.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::io::Reader as ImageReader;
use image::{save_buffer, ColorType, DynamicImage, ImageError};
use log::debug;
use ndarray::prelude::*;
use ndarray::ShapeError;
use thiserror::Error;

use crate::grid::Dimensions;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] ImageError),

    #[error("pixel buffer does not match image layout")]
    Shape(#[from] ShapeError),

    #[error("pixel buffer is not in standard layout")]
    NotContiguous,

    #[error("image dimensions do not fit in 32 bits")]
    TooLarge,
}

/// Opens and decodes an image, guessing the format from its content.
pub fn open(path: impl AsRef<Path>) -> Result<DynamicImage, CodecError> {
    let path = path.as_ref();
    let im = ImageReader::new(BufReader::new(File::open(path)?))
        .with_guessed_format()?
        .decode()?;

    debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        im.width(),
        im.height(),
        im.color(),
    );
    Ok(im)
}

pub fn dimensions(im: &DynamicImage) -> Dimensions {
    Dimensions::new(im.width() as usize, im.height() as usize)
}

/// Views the raw bytes of an image as `(height, width, bytes_per_pixel)`.
pub fn as_array(im: &DynamicImage) -> Result<ArrayView3<'_, u8>, CodecError> {
    Ok(ArrayView3::from_shape(
        (
            im.height() as usize,
            im.width() as usize,
            im.color().bytes_per_pixel() as usize,
        ),
        im.as_bytes(),
    )?)
}

/// Encodes `arr` (as produced from [`as_array`]) to `path`.
///
/// Output format is chosen from the file extension.
pub fn save(
    path: impl AsRef<Path>,
    arr: ArrayView3<'_, u8>,
    color: ColorType,
) -> Result<(), CodecError> {
    let (height, width, _) = arr.dim();
    let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(CodecError::TooLarge);
    };

    save_buffer(
        path,
        arr.as_slice().ok_or(CodecError::NotContiguous)?,
        width,
        height,
        color,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn array_shape() {
        let im = DynamicImage::ImageRgb8(RgbImage::from_fn(5, 3, |x, y| {
            Rgb([x as u8, y as u8, 9])
        }));
        let arr = as_array(&im).unwrap();

        assert_eq!(arr.dim(), (3, 5, 3));
        assert_eq!(arr.slice(s![2, 4, ..]), aview1(&[4u8, 2, 9]));
        assert_eq!(dimensions(&im), Dimensions::new(5, 3));
    }

    #[test]
    fn save_and_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        let im = DynamicImage::ImageRgba8(RgbaImage::from_fn(4, 2, |x, y| {
            Rgba([x as u8 * 10, y as u8 * 20, 7, 255 - x as u8])
        }));
        save(&path, as_array(&im).unwrap(), im.color()).unwrap();

        let back = open(&path).unwrap();
        assert_eq!(back.color(), ColorType::Rgba8);
        assert_eq!(back.as_bytes(), im.as_bytes());
    }

    #[test]
    fn open_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = open(dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, CodecError::Io(_)));
    }
}
