//! Transit e-ticket service.
//!
//! Collects trip details through an HTML form, draws a random fare, bus and
//! seat for the trip, and hands back a styled ticket card carrying a payment
//! QR code and a download QR code together with a PDF receipt.
//!
pub mod api;
pub mod core;
pub mod domain;
pub mod generator;
pub mod render;

pub use api::router as app;
