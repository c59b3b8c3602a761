//! Fixed page geometry of the bill-of-lading draft.
//!
//! Coordinates are in points from the bottom-left page origin. Changing the
//! layout means editing [`LAYOUT`]; the renderer walks it generically.

use crate::record::{Field, ShipmentRecord, FIELD_COUNT};

/// A4 page width in points
pub const PAGE_WIDTH: f64 = 595.0;
/// A4 page height in points
pub const PAGE_HEIGHT: f64 = 842.0;

/// Font size used for every field
pub const FIELD_FONT_SIZE: f64 = 10.0;

/// Line spacing factor applied to multi-line values
pub const LINE_SPACING: f64 = 1.2;

/// Where the background fallback warning is drawn
pub const WARNING_POSITION: (f64, f64) = (100.0, 800.0);
/// Font size of the background fallback warning
pub const WARNING_FONT_SIZE: f64 = 12.0;

/// Position and size of one field on the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSlot {
    pub field: Field,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
}

const fn slot(field: Field, x: f64, y: f64) -> FieldSlot {
    FieldSlot {
        field,
        x,
        y,
        font_size: FIELD_FONT_SIZE,
    }
}

/// Field-to-coordinate table for the draft, in [`Field::ALL`] order
pub const LAYOUT: [FieldSlot; FIELD_COUNT] = [
    slot(Field::Shipper, 150.0, 750.0),
    slot(Field::Consignee, 100.0, 650.0),
    slot(Field::NotifyParty, 100.0, 600.0),
    slot(Field::DraftBillOfLading, 350.0, 650.0),
    slot(Field::PlaceOfReceipt, 350.0, 585.0),
    slot(Field::PlaceOfDelivery, 310.0, 500.0),
    slot(Field::VesselAndVoyage, 100.0, 520.0),
    slot(Field::PortOfLoading, 50.0, 480.0),
    slot(Field::PortOfDischarge, 150.0, 480.0),
    slot(Field::MarksNumbers, 50.0, 450.0),
    slot(Field::PackagesDescription, 300.0, 400.0),
    slot(Field::GrossWeight, 450.0, 435.0),
    slot(Field::Measurement, 530.0, 435.0),
    slot(Field::CsealNo, 100.0, 320.0),
    slot(Field::SlineSealNo, 50.0, 290.0),
    slot(Field::InvoiceNo, 225.0, 360.0),
    slot(Field::Dtd, 290.0, 360.0),
    slot(Field::Dt, 350.0, 350.0),
    slot(Field::ShippingBillNo, 150.0, 340.0),
    slot(Field::NetWeight, 450.0, 390.0),
    slot(Field::NoOfOriginals, 150.0, 90.0),
];

/// Looks up the slot assigned to `field`
pub fn slot_for(field: Field) -> Option<&'static FieldSlot> {
    LAYOUT
        .get(field as usize)
        .filter(|slot| slot.field == field)
}

/// One line of text ready to be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct TextPlacement<'a> {
    pub field: Field,
    pub text: &'a str,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
}

/// Resolves a record against [`LAYOUT`].
///
/// Multi-line values are stacked downwards from the slot origin. Blank
/// lines are skipped but still advance the cursor, so an empty field yields
/// no placement at all.
pub fn placements(record: &ShipmentRecord) -> Vec<TextPlacement<'_>> {
    let mut out = Vec::with_capacity(FIELD_COUNT);

    for slot in &LAYOUT {
        let leading = slot.font_size * LINE_SPACING;
        for (index, line) in record.get(slot.field).lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            out.push(TextPlacement {
                field: slot.field,
                text: line,
                x: slot.x,
                y: slot.y - index as f64 * leading,
                font_size: slot.font_size,
            });
        }
    }

    out
}

/// Rectangle an image is drawn into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Scales an image to fit inside the page, keeping its aspect ratio, and
/// centres it.
pub fn fit_centered(image_width: u32, image_height: u32, page_width: f64, page_height: f64) -> ImageBox {
    if image_width == 0 || image_height == 0 {
        return ImageBox {
            x: 0.0,
            y: 0.0,
            width: page_width,
            height: page_height,
        };
    }

    let (iw, ih) = (f64::from(image_width), f64::from(image_height));
    let scale = (page_width / iw).min(page_height / ih);
    let (width, height) = (iw * scale, ih * scale);

    ImageBox {
        x: (page_width - width) / 2.0,
        y: (page_height - height) / 2.0,
        width,
        height,
    }
}
