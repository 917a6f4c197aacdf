use crate::config::PadConfig;
use crate::error::{PadError, PadResult};
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use log::{debug, info};
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Top-left corner of the source on the canvas. Negative when the source overhangs the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone)]
pub struct PaddedImage {
    pub canvas: RgbaImage,
    pub side: u32,
    pub placement: Placement,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PadOutcome {
    pub output_path: PathBuf,
    pub source_dims: (u32, u32),
    pub side: u32,
    pub placement: Placement,
}

/// Side length of the square canvas: the longest source edge times `scale_factor`, truncated.
pub fn canvas_side(width: u32, height: u32, scale_factor: f64) -> u32 {
    (f64::from(width.max(height)) * scale_factor) as u32
}

/// Centre the source on the canvas, then push it right by `offset_x_pct` of its width.
///
/// The horizontal centring term is floor-divided on its own before the
/// fractional offset is added; folding both into one division gives a
/// different answer whenever `side - width` is odd.
pub fn placement((width, height): (u32, u32), side: u32, offset_x_pct: f64) -> Placement {
    let side = i64::from(side);
    let (width, height) = (i64::from(width), i64::from(height));

    let centred_x = (side - width).div_euclid(2);
    let x = (centred_x as f64 + width as f64 * offset_x_pct) as i64;
    let y = (side - height).div_euclid(2);

    Placement { x, y }
}

/// Paste `source` onto `canvas` using the source's own alpha as the mask.
///
/// All four channels are blended, alpha included, so a half-transparent
/// source pixel leaves a half-transparent result even over an opaque canvas.
/// Anything outside the canvas is clipped.
pub fn paste_with_alpha_mask(canvas: &mut RgbaImage, source: &RgbaImage, at: Placement) {
    let (canvas_width, canvas_height) = canvas.dimensions();
    let (source_width, source_height) = source.dimensions();

    let columns = visible_span(at.x, source_width, canvas_width);
    let rows = visible_span(at.y, source_height, canvas_height);

    for sy in rows {
        for sx in columns.clone() {
            let src = source.get_pixel(sx, sy);
            let mask = src.0[3];
            // Inside the canvas by construction of the spans.
            let dx = (at.x + i64::from(sx)) as u32;
            let dy = (at.y + i64::from(sy)) as u32;
            let dst = canvas.get_pixel_mut(dx, dy);
            for channel in 0..4 {
                dst.0[channel] = blend(dst.0[channel], src.0[channel], mask);
            }
        }
    }
}

// Source indices along one axis that land on the canvas when shifted by `offset`.
fn visible_span(offset: i64, source_len: u32, canvas_len: u32) -> Range<u32> {
    let source_len = i64::from(source_len);
    let start = offset.saturating_neg().clamp(0, source_len);
    let end = i64::from(canvas_len)
        .saturating_sub(offset)
        .clamp(start, source_len);
    start as u32..end as u32
}

// Rounded (dst * (255 - mask) + src * mask) / 255.
fn blend(dst: u8, src: u8, mask: u8) -> u8 {
    let mask = u32::from(mask);
    let value = u32::from(dst) * (255 - mask) + u32::from(src) * mask + 128;
    ((value + (value >> 8)) >> 8) as u8
}

/// Build the padded canvas in memory.
pub fn pad_image(image: &DynamicImage, config: &PadConfig) -> PaddedImage {
    let source = image.to_rgba8();
    let dims = source.dimensions();

    let side = canvas_side(dims.0, dims.1, config.scale_factor);
    let placement = placement(dims, side, config.offset_x_pct);
    debug!(
        "Padding {}x{} source onto {}x{} canvas at ({}, {})",
        dims.0, dims.1, side, side, placement.x, placement.y
    );

    let mut canvas = RgbaImage::from_pixel(side, side, Rgba(config.background));
    paste_with_alpha_mask(&mut canvas, &source, placement);

    PaddedImage {
        canvas,
        side,
        placement,
    }
}

/// Load `input_path`, pad it according to `config` and write the result to `output_path`.
///
/// The output format follows the extension of `output_path`.
pub fn pad_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &PadConfig,
) -> PadResult<PadOutcome> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    let image = image::open(input_path).map_err(|source| PadError::Decode {
        path: input_path.to_path_buf(),
        source,
    })?;
    info!("Loaded {} ({}x{})", input_path.display(), image.width(), image.height());

    let padded = pad_image(&image, config);
    padded
        .canvas
        .save(output_path)
        .map_err(|source| PadError::Write {
            path: output_path.to_path_buf(),
            source,
        })?;

    println!("Saved padded image to {}", output_path.display());

    Ok(PadOutcome {
        output_path: output_path.to_path_buf(),
        source_dims: image.dimensions(),
        side: padded.side,
        placement: padded.placement,
    })
}

/// Pad with an explicit scale factor and horizontal offset on a white canvas.
pub fn pad(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    scale_factor: f64,
    offset_x_pct: f64,
) -> PadResult<PadOutcome> {
    pad_file(input_path, output_path, &PadConfig::new(scale_factor, offset_x_pct))
}
