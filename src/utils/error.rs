use thiserror::Error;

/// Errors raised by the extraction pipeline.
///
/// Only the two collaborator boundaries can fail: image decoding and the OCR
/// engine. A field extractor finding nothing is a soft miss (empty string),
/// never an error.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The submitted bytes could not be decoded into a raster image.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// The OCR engine failed while processing the image.
    #[error("OCR failure: {0}")]
    OcrFailure(String),

    /// Filesystem error while reading an input document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
