use super::RenderError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{GrayImage, ImageFormat, Luma};
use qrcode::{Color, QrCode};
use std::io::Cursor;

/// Pixels per QR module.
pub const MODULE_PX: u32 = 10;

/// Light border around the symbol, in modules.
pub const QUIET_ZONE: u32 = 4;

/// A QR code rendered to a grayscale raster, together with its PNG encoding.
///
#[derive(Debug, Clone)]
pub struct QrImage {
    image: GrayImage,
    png: Vec<u8>,
}

impl QrImage {
    /// Encodes a text payload as a QR code image.
    ///
    /// Fails only when the payload does not fit in the largest QR version.
    ///
    pub fn encode(payload: &str) -> Result<Self, RenderError> {
        let code = QrCode::new(payload.as_bytes())?;
        let image = rasterize(&code);

        let mut png = Vec::new();
        image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

        Ok(Self { image, png })
    }

    pub fn image(&self) -> &GrayImage {
        &self.image
    }

    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    /// The PNG as a `data:` URI, ready for an inline `<img src>`.
    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png))
    }
}

/// Paints each dark module as a `MODULE_PX` square on a white canvas that
/// leaves a `QUIET_ZONE` border on every side.
fn rasterize(code: &QrCode) -> GrayImage {
    let modules = code.to_colors();
    let width = code.width() as u32;
    let size = (width + 2 * QUIET_ZONE) * MODULE_PX;

    GrayImage::from_fn(size, size, |x, y| {
        let (mx, my) = (x / MODULE_PX, y / MODULE_PX);
        let inside = (QUIET_ZONE..QUIET_ZONE + width).contains(&mx)
            && (QUIET_ZONE..QUIET_ZONE + width).contains(&my);
        if inside {
            let index = ((my - QUIET_ZONE) * width + (mx - QUIET_ZONE)) as usize;
            if modules[index] == Color::Dark {
                return Luma([0u8]);
            }
        }
        Luma([255u8])
    })
}
