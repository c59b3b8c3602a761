//! PDF rendering of a [`ShipmentRecord`] onto the draft page.

use crate::error::{RenderError, Result};
use crate::layout::{
    fit_centered, placements, PAGE_HEIGHT, PAGE_WIDTH, WARNING_FONT_SIZE, WARNING_POSITION,
};
use crate::record::ShipmentRecord;
use oxidize_pdf::{Document, Font, Image, Page};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const BACKGROUND_NAME: &str = "Background";

/// Title stored in the document information dictionary
pub const DOCUMENT_TITLE: &str = "Bill of Lading Draft";

/// Warning drawn when the background exists but cannot be used
pub const UNREADABLE_BACKGROUND_WARNING: &str = "Failed to load background image.";

/// Outcome of loading the page background
#[derive(Debug)]
pub enum Backdrop {
    /// Decoded JPEG ready to embed
    Image(Image),
    /// No file at the configured path
    Missing(PathBuf),
    /// File exists but could not be read or decoded
    Unreadable(String),
}

impl Backdrop {
    /// Loads the background, never failing.
    pub fn load(path: &Path) -> Self {
        debug!("Looking for background at {}", path.display());

        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Background missing at {}", path.display());
                return Backdrop::Missing(path.to_path_buf());
            }
            Err(e) => {
                warn!("Background at {} unreadable: {e}", path.display());
                return Backdrop::Unreadable(e.to_string());
            }
        };

        match Image::from_jpeg_data(data) {
            Ok(image) => Backdrop::Image(image),
            Err(e) => {
                warn!("Background at {} is not a usable JPEG: {e}", path.display());
                Backdrop::Unreadable(e.to_string())
            }
        }
    }

    /// Placeholder line drawn instead of the background, if any
    pub fn warning(&self) -> Option<String> {
        match self {
            Backdrop::Image(_) => None,
            Backdrop::Missing(path) => Some(format!("Background missing at: {}", path.display())),
            Backdrop::Unreadable(_) => Some(UNREADABLE_BACKGROUND_WARNING.to_string()),
        }
    }
}

/// Draws shipment records over the fixed background.
///
/// Stateless apart from the background location; the image is re-read for
/// every render.
#[derive(Debug, Clone)]
pub struct BillOfLadingRenderer {
    background: PathBuf,
}

impl BillOfLadingRenderer {
    pub fn new(background: impl Into<PathBuf>) -> Self {
        Self {
            background: background.into(),
        }
    }

    pub fn background_path(&self) -> &Path {
        &self.background
    }

    /// Renders `record` into a complete single-page PDF.
    pub fn render(&self, record: &ShipmentRecord) -> Result<Vec<u8>> {
        let backdrop = Backdrop::load(&self.background);
        render_with_backdrop(record, backdrop)
    }
}

/// Renders `record` over an already loaded backdrop.
pub fn render_with_backdrop(record: &ShipmentRecord, backdrop: Backdrop) -> Result<Vec<u8>> {
    let mut doc = Document::new();
    doc.set_title(DOCUMENT_TITLE);
    doc.set_creator(env!("CARGO_PKG_NAME"));

    let mut page = Page::a4();

    let warning = backdrop.warning();
    if let Backdrop::Image(image) = backdrop {
        let area = fit_centered(image.width(), image.height(), PAGE_WIDTH, PAGE_HEIGHT);
        page.add_image(BACKGROUND_NAME, image);
        page.draw_image(BACKGROUND_NAME, area.x, area.y, area.width, area.height)?;
    }

    if let Some(message) = warning {
        let (x, y) = WARNING_POSITION;
        page.text()
            .set_font(Font::HelveticaBold, WARNING_FONT_SIZE)
            .at(x, y)
            .write(&message)?;
    }

    let placed = placements(record);
    debug!("Drawing {} text lines", placed.len());
    for placement in placed {
        page.text()
            .set_font(Font::Helvetica, placement.font_size)
            .at(placement.x, placement.y)
            .write(placement.text)
            .map_err(|source| RenderError::Draw {
                field: placement.field.name(),
                source,
            })?;
    }

    doc.add_page(page);

    let mut pdf_bytes = Vec::new();
    doc.write(&mut pdf_bytes)?;

    if pdf_bytes.is_empty() {
        return Err(RenderError::EmptyOutput);
    }

    Ok(pdf_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{FIELD_FONT_SIZE, LINE_SPACING, WARNING_FONT_SIZE, WARNING_POSITION};
    use oxidize_pdf::parser::{PdfDocument, PdfReader};
    use oxidize_pdf::text::ExtractionOptions;
    use std::io::Cursor;
    use tempfile::tempdir;

    /// SOI + SOF0 header for a 200x100 RGB image
    fn tiny_jpeg() -> Vec<u8> {
        vec![
            0xFF, 0xD8, 0xFF, 0xC0, 0x00, 0x11, 0x08, 0x00, 0x64, 0x00, 0xC8, 0x03, 0x01, 0x22,
            0x00, 0x02, 0x11, 0x01, 0x03, 0x11, 0x01, 0xFF, 0xD9,
        ]
    }

    fn extract(pdf: &[u8]) -> (String, u32) {
        let reader = PdfReader::new(Cursor::new(pdf.to_vec())).unwrap();
        let doc = PdfDocument::new(reader);
        let text = doc
            .extract_text()
            .unwrap()
            .into_iter()
            .map(|page| page.text)
            .collect::<Vec<_>>()
            .join("\n");
        (text, doc.page_count().unwrap() as u32)
    }

    /// Text fragments of the first page as `(text, x, y, font_size)`
    fn fragments(pdf: &[u8]) -> Vec<(String, f64, f64, f64)> {
        let reader = PdfReader::new(Cursor::new(pdf.to_vec())).unwrap();
        let doc = PdfDocument::new(reader);
        let options = ExtractionOptions {
            preserve_layout: true,
            ..Default::default()
        };
        doc.extract_text_with_options(options)
            .unwrap()
            .into_iter()
            .next()
            .map(|page| {
                page.fragments
                    .into_iter()
                    .map(|f| (f.text, f.x, f.y, f.font_size))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn position_of(fragments: &[(String, f64, f64, f64)], text: &str) -> (f64, f64, f64) {
        fragments
            .iter()
            .find(|(t, ..)| t == text)
            .map(|(_, x, y, size)| (*x, *y, *size))
            .unwrap_or_else(|| panic!("no fragment '{text}' in {fragments:?}"))
    }

    fn assert_at(actual: (f64, f64, f64), expected: (f64, f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < 0.01
                && (actual.1 - expected.1).abs() < 0.01
                && (actual.2 - expected.2).abs() < 0.01,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_backdrop_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bg.jpg");

        let backdrop = Backdrop::load(&path);
        assert!(matches!(backdrop, Backdrop::Missing(_)));
        assert_eq!(
            backdrop.warning(),
            Some(format!("Background missing at: {}", path.display()))
        );
    }

    #[test]
    fn test_backdrop_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bg.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();

        let backdrop = Backdrop::load(&path);
        assert!(matches!(backdrop, Backdrop::Unreadable(_)));
        assert_eq!(
            backdrop.warning().as_deref(),
            Some(UNREADABLE_BACKGROUND_WARNING)
        );
    }

    #[test]
    fn test_backdrop_directory_is_unreadable() {
        let dir = tempdir().unwrap();
        let backdrop = Backdrop::load(dir.path());
        assert!(matches!(backdrop, Backdrop::Unreadable(_)));
    }

    #[test]
    fn test_backdrop_valid_jpeg() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bg.jpg");
        std::fs::write(&path, tiny_jpeg()).unwrap();

        let backdrop = Backdrop::load(&path);
        match &backdrop {
            Backdrop::Image(image) => {
                assert_eq!(image.width(), 200);
                assert_eq!(image.height(), 100);
            }
            other => panic!("expected image, got {other:?}"),
        }
        assert!(backdrop.warning().is_none());
    }

    #[test]
    fn test_render_blank_record() {
        let dir = tempdir().unwrap();
        let renderer = BillOfLadingRenderer::new(dir.path().join("bg.jpg"));

        let pdf = renderer.render(&ShipmentRecord::default()).unwrap();
        assert!(pdf.starts_with(b"%PDF"));

        let (text, pages) = extract(&pdf);
        assert_eq!(pages, 1);
        assert!(text.contains("Background missing at:"));
    }

    #[test]
    fn test_render_places_fields() {
        let record = ShipmentRecord {
            shipper: "ABC Exporters".to_string(),
            consignee: "XYZ Imports".to_string(),
            invoice_no: "INV-98765".to_string(),
            ..Default::default()
        };

        let pdf = render_with_backdrop(&record, Backdrop::Unreadable("test".to_string())).unwrap();
        let (text, pages) = extract(&pdf);

        assert_eq!(pages, 1);
        assert!(text.contains("ABC Exporters"));
        assert!(text.contains("XYZ Imports"));
        assert!(text.contains("INV-98765"));
        assert!(text.contains(UNREADABLE_BACKGROUND_WARNING));
    }

    #[test]
    fn test_render_draws_at_layout_coordinates() {
        let record = ShipmentRecord {
            shipper: "ABC Exporters\n123 Street, City".to_string(),
            consignee: "XYZ Imports".to_string(),
            ..Default::default()
        };

        let pdf = render_with_backdrop(&record, Backdrop::Unreadable("test".to_string())).unwrap();
        let placed = fragments(&pdf);

        assert_at(
            position_of(&placed, "ABC Exporters"),
            (150.0, 750.0, FIELD_FONT_SIZE),
        );
        assert_at(
            position_of(&placed, "123 Street, City"),
            (150.0, 750.0 - FIELD_FONT_SIZE * LINE_SPACING, FIELD_FONT_SIZE),
        );
        assert_at(
            position_of(&placed, "XYZ Imports"),
            (100.0, 650.0, FIELD_FONT_SIZE),
        );
        assert_at(
            position_of(&placed, UNREADABLE_BACKGROUND_WARNING),
            (WARNING_POSITION.0, WARNING_POSITION.1, WARNING_FONT_SIZE),
        );
    }

    #[test]
    fn test_render_with_background_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bg.jpg");
        std::fs::write(&path, tiny_jpeg()).unwrap();

        let record = ShipmentRecord {
            port_of_loading: "Nhava Sheva".to_string(),
            ..Default::default()
        };
        let pdf = BillOfLadingRenderer::new(&path).render(&record).unwrap();
        let (text, _) = extract(&pdf);

        assert!(text.contains("Nhava Sheva"));
        assert!(!text.contains("Background missing"));
        assert!(!text.contains(UNREADABLE_BACKGROUND_WARNING));
    }

    #[test]
    fn test_render_is_repeatable() {
        let record = ShipmentRecord {
            shipper: "ABC Exporters\n123 Street, City".to_string(),
            gross_weight: "2500 KG".to_string(),
            ..Default::default()
        };
        let renderer = BillOfLadingRenderer::new("does/not/exist/bg.jpg");

        let first = renderer.render(&record).unwrap();
        let second = renderer.render(&record).unwrap();
        assert_eq!(extract(&first), extract(&second));

        let first = fragments(&first);
        assert!(!first.is_empty());
        assert_eq!(first, fragments(&second));
    }

    #[test]
    fn test_render_escapes_pdf_delimiters() {
        let record = ShipmentRecord {
            packages_description: "50 cartons (textiles) \\ misc".to_string(),
            ..Default::default()
        };

        let pdf = render_with_backdrop(&record, Backdrop::Missing(PathBuf::from("bg.jpg"))).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }
}
