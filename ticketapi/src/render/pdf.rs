use super::RenderError;
use image::ImageFormat;
use lopdf::{
    content::{Content, Operation},
    dictionary, Document, Object, Stream,
};
use std::path::Path;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
const LINE_HEIGHT_MM: f32 = 10.0;
const CELL_PADDING_MM: f32 = 1.0;
const FONT_SIZE_PT: f32 = 12.0;

const QR_X_MM: f32 = 150.0;
const QR_Y_MM: f32 = 10.0;
const QR_WIDTH_MM: f32 = 40.0;

fn pt(mm: f32) -> f32 {
    mm * 72.0 / 25.4
}

/// Maps a receipt line onto the single-byte Latin-1 range used by the
/// document's core font.
///
/// The rupee sign is spelled out as `Rs.`; any other character outside
/// Latin-1 becomes `?`, as do the C1 controls, which WinAnsi would print as
/// unrelated glyphs.
///
pub fn sanitize_line(line: &str) -> Vec<u8> {
    line.replace('₹', "Rs.")
        .chars()
        .map(|c| match u8::try_from(u32::from(c)) {
            Ok(byte) if !(0x80..=0x9F).contains(&byte) => byte,
            _ => b'?',
        })
        .collect()
}

/// Builds a one page A4 receipt.
///
/// Every line of `text` is written top to bottom from the top-left margin in
/// 12pt Helvetica; the PNG in `qr_png` is drawn 40mm wide in the top-right
/// corner. The output depends only on the input.
///
pub fn compose(text: &str, qr_png: &[u8]) -> Result<Vec<u8>, RenderError> {
    let qr = image::load_from_memory_with_format(qr_png, ImageFormat::Png)?.to_luma8();
    let (qr_width_px, qr_height_px) = qr.dimensions();

    let mut doc = Document::with_version("1.4");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => i64::from(qr_width_px),
            "Height" => i64::from(qr_height_px),
            "ColorSpace" => "DeviceGray",
            "BitsPerComponent" => 8,
        },
        qr.into_raw(),
    ));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
        "XObject" => dictionary! { "Im1" => image_id },
    });

    let mut operations = Vec::new();

    // baseline sits a little below the middle of each cell
    let baseline_offset = LINE_HEIGHT_MM / 2.0 + 0.3 * FONT_SIZE_PT * 25.4 / 72.0;
    for (index, line) in text.split('\n').enumerate() {
        let encoded = sanitize_line(line);
        if encoded.is_empty() {
            continue;
        }
        let top = MARGIN_MM + LINE_HEIGHT_MM * index as f32;
        let baseline = PAGE_HEIGHT_MM - (top + baseline_offset);
        operations.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), Object::Real(FONT_SIZE_PT)]),
            Operation::new(
                "Td",
                vec![
                    Object::Real(pt(MARGIN_MM + CELL_PADDING_MM)),
                    Object::Real(pt(baseline)),
                ],
            ),
            Operation::new("Tj", vec![Object::string_literal(encoded)]),
            Operation::new("ET", vec![]),
        ]);
    }

    let qr_height_mm = QR_WIDTH_MM * qr_height_px as f32 / qr_width_px as f32;
    operations.extend([
        Operation::new("q", vec![]),
        Operation::new(
            "cm",
            vec![
                Object::Real(pt(QR_WIDTH_MM)),
                0.into(),
                0.into(),
                Object::Real(pt(qr_height_mm)),
                Object::Real(pt(QR_X_MM)),
                Object::Real(pt(PAGE_HEIGHT_MM - QR_Y_MM - qr_height_mm)),
            ],
        ),
        Operation::new("Do", vec!["Im1".into()]),
        Operation::new("Q", vec![]),
    ]);

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            Object::Real(pt(PAGE_WIDTH_MM)),
            Object::Real(pt(PAGE_HEIGHT_MM)),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

/// Composes the receipt and writes it to `path`, replacing any previous file.
pub async fn write_pdf(text: &str, qr_png: &[u8], path: &Path) -> Result<(), RenderError> {
    let bytes = compose(text, qr_png)?;
    tokio::fs::write(path, &bytes).await?;
    tracing::info!(path = %path.display(), size = bytes.len(), "receipt written");
    Ok(())
}
