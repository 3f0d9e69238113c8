use std::path::Path;

use log::debug;

use crate::models::{ExtractedFields, OcrConfig, MOROCCAN_CIN};
use crate::processing::{
    BirthDateExtractor, BirthPlaceExtractor, CinExtractor, FirstNameExtractor, ImagePreprocessor,
    NameExtractor, OcrProcessor, TextNormalizer,
};
use crate::utils::ExtractionError;

/// DocumentExtractor orchestrates the extraction pipeline:
/// decode image -> preprocess -> OCR -> normalize -> run all field
/// extractors -> assemble the record.
pub struct DocumentExtractor {
    config: OcrConfig,
}

impl DocumentExtractor {
    pub fn new() -> Self {
        DocumentExtractor {
            config: OcrConfig::default(),
        }
    }

    pub fn with_config(config: OcrConfig) -> Self {
        DocumentExtractor { config }
    }

    /// Read an image file and extract its fields.
    pub fn extract_from_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<ExtractedFields, ExtractionError> {
        let bytes = std::fs::read(path)?;
        self.extract(&bytes)
    }

    /// Extract identity fields from raw image bytes.
    ///
    /// Fails with `InvalidImage` when the bytes cannot be decoded and with
    /// `OcrFailure` when the engine errors. An OCR pass that produces no text
    /// is not an error: the all-empty record is returned.
    pub fn extract(&self, image_bytes: &[u8]) -> Result<ExtractedFields, ExtractionError> {
        let image = image::load_from_memory(image_bytes)
            .map_err(|e| ExtractionError::InvalidImage(format!("failed to decode image: {}", e)))?;

        let enhanced = ImagePreprocessor::enhance(&image);
        let raw_text = OcrProcessor::recognize(&enhanced, &self.config)?;
        let normalized = TextNormalizer::normalize(&raw_text);
        debug!("normalized transcript: {}", normalized);

        Ok(Self::extract_fields(&normalized))
    }

    /// Run every field extractor against a normalized transcript and
    /// assemble the record. Pure, so the assembly step is testable without
    /// an engine.
    pub fn extract_fields(normalized: &str) -> ExtractedFields {
        if normalized.trim().is_empty() {
            return ExtractedFields::default();
        }

        ExtractedFields {
            pays: MOROCCAN_CIN.country.to_string(),
            cin: CinExtractor::extract(normalized),
            nom: NameExtractor::extract(normalized),
            prenom: FirstNameExtractor::extract(normalized),
            date_naissance: BirthDateExtractor::extract(normalized),
            lieu_naissance: BirthPlaceExtractor::extract(normalized),
            raw_text: normalized.to_string(),
        }
    }
}

impl Default for DocumentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_rejects_undecodable_bytes() {
        let extractor = DocumentExtractor::new();
        let result = extractor.extract(b"definitely not an image");
        assert!(matches!(result, Err(ExtractionError::InvalidImage(_))));
    }

    #[test]
    fn test_extract_fields_blank_transcript() {
        let fields = DocumentExtractor::extract_fields("");
        assert_eq!(fields, ExtractedFields::default());
        assert_eq!(DocumentExtractor::extract_fields("   "), ExtractedFields::default());
    }

    #[test]
    fn test_extract_fields_full_transcript() {
        let normalized = TextNormalizer::normalize(
            "ROYAUME DU MAROC CARTE NATIONALE D'IDENTITE \
             TEMSAMAN1 MOUHC1NE NE LE 05-12-1983 A TANGER-ASILAH K 0 1 2 3 4 5 6 7",
        );
        let fields = DocumentExtractor::extract_fields(&normalized);

        assert_eq!(fields.pays, "MAROC");
        assert_eq!(fields.cin, "K0123567");
        assert_eq!(fields.nom, "TEMSAMANI");
        assert_eq!(fields.prenom, "MOUHCINE");
        assert_eq!(fields.date_naissance, "05/12/1983");
        assert_eq!(fields.lieu_naissance, "TANGER ASSILAH");
        assert_eq!(fields.raw_text, normalized);
    }

    #[test]
    fn test_extract_fields_partial_transcript_is_soft_miss() {
        let fields = DocumentExtractor::extract_fields("NE LE 15/06/1990");
        assert_eq!(fields.pays, "MAROC");
        assert_eq!(fields.date_naissance, "15/06/1990");
        assert_eq!(fields.cin, "");
        assert_eq!(fields.nom, "");
        assert_eq!(fields.prenom, "");
        assert_eq!(fields.lieu_naissance, "");
    }

    #[test]
    fn test_serialized_record_uses_contract_keys() {
        let fields = DocumentExtractor::extract_fields("NE LE 15/06/1990");
        let json = serde_json::to_value(&fields).unwrap();
        let object = json.as_object().unwrap();

        for key in [
            "pays",
            "cin",
            "nom",
            "prenom",
            "date_naissance",
            "lieu_naissance",
            "rawText",
        ] {
            assert!(object.contains_key(key), "missing contract key {}", key);
        }
        assert_eq!(object.len(), 7);
    }
}
