//! Rendering of generated tickets into images and documents.
//!
//! [`qr`] turns QR payloads into PNG images and [`pdf`] lays out the printable
//! receipt with one of those images embedded.
//!
use thiserror::Error;

pub mod pdf;
pub mod qr;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("QR encoding failed: {0}")]
    Qr(#[from] qrcode::types::QrError),

    #[error("image codec failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("PDF assembly failed: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}
