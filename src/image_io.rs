//! Blocking image decode, scale, and encode primitives.
//!
//! These run on rayon workers; the UI layer submits them with `rayon::spawn`
//! and receives results through `slint::invoke_from_event_loop`.

use crate::error::{AppError, Result};
use image::imageops::FilterType;
use slint::{Rgb8Pixel, SharedPixelBuffer};
use std::path::Path;

/// Decoded RGB8 bitmap. After `scale_to_fit` this is exactly what is shown
/// on screen, and what `save_bitmap_blocking` writes out.
#[derive(Clone)]
pub struct Bitmap {
    pixels: image::RgbImage,
}

impl Bitmap {
    pub fn new(pixels: image::RgbImage) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// Opens and decodes an image file to RGB8.
pub fn load_image_blocking(path: &Path) -> Result<Bitmap> {
    let reader = image::ImageReader::open(path)
        .map_err(|e| AppError::ImageLoad(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| AppError::ImageLoad(e.to_string()))?;
    let decoded = reader.decode()?;
    Ok(Bitmap::new(decoded.to_rgb8()))
}

/// Downscales the bitmap to fit within `max_width` x `max_height`, keeping
/// the aspect ratio. Bitmaps already within the box pass through untouched.
pub fn scale_to_fit(bitmap: Bitmap, max_width: u32, max_height: u32) -> Bitmap {
    if bitmap.width() <= max_width && bitmap.height() <= max_height {
        return bitmap;
    }
    let resized = image::DynamicImage::ImageRgb8(bitmap.pixels)
        .resize(max_width, max_height, FilterType::CatmullRom)
        .into_rgb8();
    Bitmap::new(resized)
}

/// Encodes the bitmap to `path`; the format is inferred from the extension.
pub fn save_bitmap_blocking(bitmap: &Bitmap, path: &Path) -> Result<()> {
    bitmap
        .pixels
        .save(path)
        .map_err(|e| AppError::ImageSave(e.to_string()))
}

/// Converts the bitmap into a `slint::Image` for display.
pub fn create_slint_image(bitmap: &Bitmap) -> slint::Image {
    let buffer = SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(
        bitmap.pixels.as_raw(),
        bitmap.width(),
        bitmap.height(),
    );
    slint::Image::from_rgb8(buffer)
}
