//! Multi-record mode
//!
//! Builds a fresh PDF with one A4 page per entry. Each page is four
//! vertical bands inside a 50 pt margin: title (1/6 of the inner height,
//! Times-Bold 36), crate group (2/6), bottle group (2/6), and the deposit
//! label (1/6), the latter three in Times-Roman 24.

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use crate::core::entry::Entry;
use crate::pdf::latin1_encode;
use crate::utils::error::Result;

const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: f32 = 50.0;

const TITLE_SIZE: f32 = 36.0;
const DESC_SIZE: f32 = 24.0;
const LINE_SPACING: f32 = 1.25;

/// Configuration for the page renderer.
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    /// Emit a blank page after the final entry.
    pub trailing_blank_page: bool,
}

/// Lay out one page per entry into a new in-memory document.
pub fn render_pages(entries: &[Entry], options: &PageOptions) -> Result<Document> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Times-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let roman_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Times-Roman",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => bold_id,
            "F2" => roman_id,
        },
    });

    let mut page_ids: Vec<Object> = Vec::new();
    for entry in entries {
        let content = entry_page_content(entry);
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        page_ids.push(page_id.into());
    }

    if options.trailing_blank_page {
        let content_id = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        page_ids.push(page_id.into());
    }

    let count = page_ids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    Ok(doc)
}

/// Render the entries and save the document to `output`.
pub fn write_pages(
    entries: &[Entry],
    output: impl AsRef<Path>,
    options: &PageOptions,
) -> Result<()> {
    let mut doc = render_pages(entries, options)?;
    doc.save(output.as_ref())?;
    Ok(())
}

/// Content stream for one entry page.
fn entry_page_content(entry: &Entry) -> Content {
    let inner_top = PAGE_HEIGHT as f32 - MARGIN;
    let inner_height = PAGE_HEIGHT as f32 - 2.0 * MARGIN;
    let band = inner_height / 6.0;

    let mut ops = Vec::new();

    // Band heights follow the 1/6, 2/6, 2/6, 1/6 split of the layout.
    let mut top = inner_top;
    text_band(&mut ops, "F1", TITLE_SIZE, top, &[&entry.title]);
    top -= band;

    text_band(
        &mut ops,
        "F2",
        DESC_SIZE,
        top,
        &[
            &entry.crate_group.contents,
            &entry.crate_group.price_per_litre,
            &entry.crate_group.price,
            &entry.crate_group.deposit,
        ],
    );
    top -= 2.0 * band;

    text_band(
        &mut ops,
        "F2",
        DESC_SIZE,
        top,
        &[
            &entry.bottle_group.contents,
            &entry.bottle_group.price,
            &entry.bottle_group.deposit,
        ],
    );
    top -= 2.0 * band;

    text_band(&mut ops, "F2", DESC_SIZE, top, &[entry.deposit_type.label()]);

    Content { operations: ops }
}

/// Emit left-aligned text lines below `top`, one baseline per line.
fn text_band(ops: &mut Vec<Operation>, font: &str, size: f32, top: f32, lines: &[&str]) {
    let mut baseline = top - size;
    for line in lines {
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![font.into(), size.into()],
        ));
        ops.push(Operation::new(
            "Td",
            vec![MARGIN.into(), baseline.into()],
        ));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(latin1_encode(line), StringFormat::Literal)],
        ));
        ops.push(Operation::new("ET", vec![]));
        baseline -= size * LINE_SPACING;
    }
}
