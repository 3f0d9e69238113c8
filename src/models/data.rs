use serde::{Deserialize, Serialize};

/// Structured record produced by one pipeline pass over a document image.
///
/// Every field is independently optional: a soft miss is the empty string,
/// never a null. The serialized key set is the external interface contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    /// Issuing country, fixed for the supported document template.
    pub pays: String,
    /// National identity card number.
    pub cin: String,
    /// Surname.
    pub nom: String,
    /// Given name.
    pub prenom: String,
    /// Birth date as DD/MM/YYYY.
    pub date_naissance: String,
    /// Birth place.
    pub lieu_naissance: String,
    /// Normalized OCR transcript the fields were extracted from.
    #[serde(rename = "rawText")]
    pub raw_text: String,
}

/// Page segmentation strategy requested from the OCR engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentationMode {
    /// Fully automatic page segmentation (no orientation detection).
    Auto,
    /// Treat the image as a single uniform block of text.
    SingleBlock,
    /// Treat the image as a single text line.
    SingleLine,
}

/// Recognition engine variant requested from the OCR engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineMode {
    /// Legacy character-based engine.
    Legacy,
    /// Neural LSTM engine.
    Lstm,
    /// Both engines combined.
    Combined,
}

/// Immutable OCR engine configuration for one pipeline invocation.
///
/// Passed by value into every call so there is no shared mutable engine
/// state; a fresh engine is configured from this per invocation.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Tesseract language set, e.g. "eng+fra".
    pub languages: String,
    /// Page segmentation mode.
    pub segmentation: SegmentationMode,
    /// Recognition engine variant.
    pub engine: EngineMode,
    /// Characters the engine is allowed to emit.
    pub char_whitelist: String,
    /// Keep runs of spaces between words instead of collapsing them.
    pub preserve_interword_spaces: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        OcrConfig {
            languages: "eng+fra".to_string(),
            segmentation: SegmentationMode::Auto,
            engine: EngineMode::Lstm,
            char_whitelist: "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789/-.".to_string(),
            preserve_interword_spaces: true,
        }
    }
}
