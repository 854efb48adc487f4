//! Single-page PDF writer.
//!
//! Interprets a draw-instruction sequence into a PDF document: one page, one
//! base-14 Helvetica font, one text object per run. Instruction coordinates
//! are mm from the top-left corner; PDF text space is points from the
//! bottom-left, so each run is converted on the way in. The writer is a pure
//! function of the instruction sequence; identical layouts produce
//! byte-identical files.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use crate::errors::AppError;
use crate::layout::geometry::PageGeometry;
use crate::layout::instruction::DrawInstruction;

const MM_TO_PT: f32 = 72.0 / 25.4;

/// Builds the export file name from the person's name: runs of
/// non-alphanumeric characters collapse to a single `_`, then the standard
/// suffix is appended.
pub fn export_file_name(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_gap = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_gap && !slug.is_empty() {
                slug.push('_');
            }
            pending_gap = false;
            slug.push(c);
        } else {
            pending_gap = true;
        }
    }
    format!("{slug}_Resume.pdf")
}

/// Writes the instruction sequence as a one-page PDF and returns its bytes.
pub fn write_pdf(
    instructions: &[DrawInstruction],
    geometry: &PageGeometry,
) -> Result<Vec<u8>, AppError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let page_height_pt = geometry.page_height * MM_TO_PT;
    let page_width_pt = geometry.page_width * MM_TO_PT;

    let mut operations: Vec<Operation> = Vec::new();
    for run in instructions {
        let x = run.x * MM_TO_PT;
        let y = page_height_pt - run.y * MM_TO_PT;
        let (r, g, b) = run.color.fractional();
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec!["F1".into(), run.font_size.into()]));
        operations.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
        operations.push(Operation::new("Td", vec![x.into(), y.into()]));
        operations.push(Operation::new(
            "Tj",
            vec![Object::String(
                encode_win_ansi(&run.text),
                StringFormat::Literal,
            )],
        ));
        operations.push(Operation::new("ET", vec![]));
    }

    let content = Content { operations };
    let encoded = content
        .encode()
        .map_err(|e| AppError::Export(format!("content stream encoding failed: {e}")))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                page_width_pt.into(),
                page_height_pt.into(),
            ],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| AppError::Export(format!("PDF serialization failed: {e}")))?;
    Ok(bytes)
}

/// Maps text to WinAnsi bytes. Latin-1 code points pass through; anything
/// outside the encoding becomes `?` rather than corrupting the stream.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if (0x20..=0xFF).contains(&code) { code as u8 } else { b'?' }
        })
        .collect()
}
