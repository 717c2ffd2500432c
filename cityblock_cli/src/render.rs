// Copyright 2025 the Cityblock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grayscale rendering of seeds and tessellations.

use std::path::Path;

use cityblock_index::SeedSet;
use cityblock_raster::OutputGrid;
use image::{GrayImage, Luma, imageops};
use thiserror::Error;

/// Columns of background between the two panels of [`plot`].
pub(crate) const GAP: u32 = 8;

const SEED: Luma<u8> = Luma([255]);
const BACKGROUND: Luma<u8> = Luma([255]);

/// Rendering or encoding failure.
#[derive(Debug, Error)]
pub(crate) enum RenderError {
    /// Encoding or writing the image failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// The grid does not fit in image dimensions.
    #[error("grid size {0} is too large to render")]
    TooLarge(usize),
}

fn side(size: usize) -> Result<u32, RenderError> {
    u32::try_from(size).map_err(|_| RenderError::TooLarge(size))
}

/// Black `size`×`size` image with a white pixel on every seed inside the grid.
pub(crate) fn seed_image(seeds: &SeedSet<i64>, size: usize) -> Result<GrayImage, RenderError> {
    let side = side(size)?;
    let mut img = GrayImage::new(side, side);
    for (_, p) in seeds.iter() {
        if let (Ok(row), Ok(col)) = (u32::try_from(p.row), u32::try_from(p.col))
            && row < side
            && col < side
        {
            img.put_pixel(col, row, SEED);
        }
    }
    Ok(img)
}

/// Intensity for `label` out of `seed_count` labels: `(255 / N) * label`, truncated.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The product lies in [0, 255) for every label below the seed count."
)]
pub(crate) fn intensity(label: usize, seed_count: usize) -> u8 {
    let step = 255.0 / seed_count.max(1) as f64;
    (step * label as f64) as u8
}

/// One gray level per label, spread evenly over `0..255`.
pub(crate) fn region_image(grid: &OutputGrid, seed_count: usize) -> Result<GrayImage, RenderError> {
    let side = side(grid.size())?;
    // Pixel (x, y) shows cell (row = y, col = x).
    Ok(GrayImage::from_fn(side, side, |x, y| {
        let label = grid.get(y as usize, x as usize).unwrap_or(0);
        Luma([intensity(label, seed_count)])
    }))
}

/// Place `left` and `right` next to each other, separated by [`GAP`] background columns.
pub(crate) fn side_by_side(left: &GrayImage, right: &GrayImage) -> GrayImage {
    let width = left.width() + GAP + right.width();
    let height = left.height().max(right.height());
    let mut canvas = GrayImage::from_pixel(width, height, BACKGROUND);
    imageops::replace(&mut canvas, left, 0, 0);
    imageops::replace(&mut canvas, right, i64::from(left.width() + GAP), 0);
    canvas
}

/// Source points on the left, Voronoi regions on the right.
///
/// Panels carry no captions; the layout alone identifies them.
pub(crate) fn plot(seeds: &SeedSet<i64>, grid: &OutputGrid) -> Result<GrayImage, RenderError> {
    let points = seed_image(seeds, grid.size())?;
    let regions = region_image(grid, seeds.len())?;
    Ok(side_by_side(&points, &regions))
}

/// Save as an image file; the format follows the extension.
pub(crate) fn save(img: &GrayImage, path: &Path) -> Result<(), RenderError> {
    img.save(path)?;
    Ok(())
}
