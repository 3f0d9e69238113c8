use std::io::{Cursor, Write};

use image::{DynamicImage, ImageFormat};
use log::debug;
use tempfile::NamedTempFile;
use tesseract::{OcrEngineMode, PageSegMode, Tesseract};

use crate::models::{EngineMode, OcrConfig, SegmentationMode};
use crate::utils::ExtractionError;

/// OcrProcessor is the boundary to the external OCR engine. It is treated as
/// a black box: preprocessed image in, raw uppercase transcript out.
pub struct OcrProcessor;

impl OcrProcessor {
    /// Run recognition on a preprocessed image with the given configuration.
    ///
    /// A fresh engine is configured per call from the immutable `OcrConfig`,
    /// so concurrent invocations never share engine state. Every engine error
    /// surfaces as `OcrFailure`.
    pub fn recognize(image: &DynamicImage, config: &OcrConfig) -> Result<String, ExtractionError> {
        // The engine consumes a file, so encode the image into a temp file.
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        image
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|e| ExtractionError::OcrFailure(format!("failed to encode image for OCR: {}", e)))?;

        let mut temp_file = NamedTempFile::new()
            .map_err(|e| ExtractionError::OcrFailure(format!("failed to create temp file: {}", e)))?;
        temp_file
            .write_all(&buffer)
            .map_err(|e| ExtractionError::OcrFailure(format!("failed to write temp file: {}", e)))?;
        let path_str = temp_file
            .path()
            .to_str()
            .ok_or_else(|| ExtractionError::OcrFailure("temp file path is not valid UTF-8".to_string()))?;

        let mut tess = Tesseract::new_with_oem(None, Some(&config.languages), engine_mode(config.engine))
            .map_err(|e| ExtractionError::OcrFailure(format!("failed to initialize Tesseract: {}", e)))?
            .set_variable("tessedit_char_whitelist", &config.char_whitelist)
            .map_err(|e| ExtractionError::OcrFailure(format!("failed to set char whitelist: {}", e)))?
            .set_variable(
                "preserve_interword_spaces",
                if config.preserve_interword_spaces { "1" } else { "0" },
            )
            .map_err(|e| ExtractionError::OcrFailure(format!("failed to set interword spaces: {}", e)))?;

        tess.set_page_seg_mode(page_seg_mode(config.segmentation));

        let text = tess
            .set_image(path_str)
            .map_err(|e| ExtractionError::OcrFailure(format!("failed to set image: {}", e)))?
            .get_text()
            .map_err(|e| ExtractionError::OcrFailure(format!("failed to extract text: {}", e)))?;

        debug!("raw OCR transcript: {}", text);
        Ok(text.to_uppercase())
    }
}

fn page_seg_mode(mode: SegmentationMode) -> PageSegMode {
    match mode {
        SegmentationMode::Auto => PageSegMode::PsmAuto,
        SegmentationMode::SingleBlock => PageSegMode::PsmSingleBlock,
        SegmentationMode::SingleLine => PageSegMode::PsmSingleLine,
    }
}

fn engine_mode(mode: EngineMode) -> OcrEngineMode {
    match mode {
        EngineMode::Legacy => OcrEngineMode::TesseractOnly,
        EngineMode::Lstm => OcrEngineMode::LstmOnly,
        EngineMode::Combined => OcrEngineMode::TesseractLstmCombined,
    }
}
