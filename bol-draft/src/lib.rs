//! # bol-draft
//!
//! Bill of Lading draft rendering: the shipment record model, the fixed
//! field layout, and a renderer that overlays the record on a background
//! page and produces a one-page PDF.
//!
//! ```no_run
//! use bol_draft::{BillOfLadingRenderer, ShipmentRecord};
//!
//! let record = ShipmentRecord {
//!     shipper: "ABC Exporters".to_string(),
//!     ..Default::default()
//! };
//! let pdf = BillOfLadingRenderer::new("static/bg.jpg").render(&record)?;
//! assert!(pdf.starts_with(b"%PDF"));
//! # Ok::<(), bol_draft::RenderError>(())
//! ```

pub mod error;
pub mod layout;
pub mod record;
pub mod render;

pub use error::{RenderError, Result};
pub use layout::{placements, FieldSlot, TextPlacement, LAYOUT};
pub use record::{Field, ShipmentRecord, FIELD_COUNT};
pub use render::{render_with_backdrop, Backdrop, BillOfLadingRenderer};
