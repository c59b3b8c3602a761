use thiserror::Error;

/// Failures that abort a render.
///
/// A missing or undecodable background is not one of them; the renderer
/// degrades to a warning line instead.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF error: {0}")]
    Pdf(#[from] oxidize_pdf::PdfError),

    #[error("Failed to draw {field}: {source}")]
    Draw {
        field: &'static str,
        #[source]
        source: oxidize_pdf::PdfError,
    },

    #[error("Rendered document is empty")]
    EmptyOutput,
}

pub type Result<T> = std::result::Result<T, RenderError>;
