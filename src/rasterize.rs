use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use egui::{Pos2, Rect, Vec2};
use fast_image_resize::images::Image as FirImage;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use log::info;

use crate::collage::session::CollageSnapshot;
use crate::export::{CaptureError, CaptureFormat, CaptureOptions, CaptureService};
use crate::layout::grid_cells;

pub const DEFAULT_OUTPUT_SIZE: u32 = 1080;

static CAPTURE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Renders a collage snapshot offscreen through the same cell geometry the
/// interactive grid uses, so the captured bitmap matches what is on screen
/// minus the editing chrome.
pub struct CollageRasterizer {
    output_size: u32,
}

impl Default for CollageRasterizer {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_SIZE)
    }
}

impl CollageRasterizer {
    pub fn new(output_size: u32) -> Self {
        Self { output_size }
    }

    fn compose(&self, snapshot: &CollageSnapshot) -> Result<RgbaImage, CaptureError> {
        let side = self.output_size;
        let canvas = Rect::from_min_size(Pos2::ZERO, Vec2::splat(side as f32));
        let cells = grid_cells(&snapshot.descriptor, canvas);

        let mut output = RgbaImage::new(side, side);
        let mut resizer = Resizer::new();

        for cell in cells {
            let photo = snapshot
                .photos
                .get(cell.slot)
                .ok_or(CaptureError::MissingSlotImage(cell.slot))?;

            let cell_width = cell.rect.width().round() as u32;
            let cell_height = cell.rect.height().round() as u32;
            if cell_width == 0 || cell_height == 0 {
                continue;
            }

            let decoded = image::open(&photo.path)
                .map_err(|source| CaptureError::Decode {
                    path: photo.path.clone(),
                    source,
                })?
                .to_rgba8();
            let (source_width, source_height) = decoded.dimensions();

            let source = FirImage::from_vec_u8(
                source_width,
                source_height,
                decoded.into_raw(),
                PixelType::U8x4,
            )?;
            let mut resized = FirImage::new(cell_width, cell_height, PixelType::U8x4);
            resizer.resize(
                &source,
                &mut resized,
                &ResizeOptions::new()
                    .resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3))
                    .fit_into_destination(Some((0.5, 0.5))),
            )?;
            let pixels = resized.buffer();

            let origin_x = cell.rect.left().round() as i64;
            let origin_y = cell.rect.top().round() as i64;

            for y in 0..cell_height {
                for x in 0..cell_width {
                    let nx = (x as f32 + 0.5) / cell_width as f32 * 2.0 - 1.0;
                    let ny = (y as f32 + 0.5) / cell_height as f32 * 2.0 - 1.0;
                    if !cell.shape.contains(nx, ny) {
                        continue;
                    }

                    let out_x = origin_x + x as i64;
                    let out_y = origin_y + y as i64;
                    if out_x < 0 || out_y < 0 || out_x >= side as i64 || out_y >= side as i64 {
                        continue;
                    }

                    let index = ((y * cell_width + x) * 4) as usize;
                    output.put_pixel(
                        out_x as u32,
                        out_y as u32,
                        Rgba([
                            pixels[index],
                            pixels[index + 1],
                            pixels[index + 2],
                            pixels[index + 3],
                        ]),
                    );
                }
            }
        }

        Ok(output)
    }
}

impl CaptureService for CollageRasterizer {
    fn capture(
        &self,
        snapshot: &CollageSnapshot,
        options: &CaptureOptions,
    ) -> Result<PathBuf, CaptureError> {
        let composed = self.compose(snapshot)?;

        let extension = match options.format {
            CaptureFormat::Png => "png",
            CaptureFormat::Jpeg => "jpg",
        };
        let sequence = CAPTURE_SEQ.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "collage-capture-{}-{}.{}",
            std::process::id(),
            sequence,
            extension
        ));

        match options.format {
            CaptureFormat::Png => composed
                .save_with_format(&path, ImageFormat::Png)
                .map_err(CaptureError::Encode)?,
            CaptureFormat::Jpeg => {
                // JPEG has no alpha channel, so flatten first.
                let flattened = DynamicImage::ImageRgba8(composed).to_rgb8();
                let file = File::create(&path)?;
                let encoder =
                    JpegEncoder::new_with_quality(BufWriter::new(file), options.quality);
                flattened.write_with_encoder(encoder).map_err(CaptureError::Encode)?;
            }
        }

        info!("Captured collage render to {}", path.display());
        Ok(path)
    }
}
