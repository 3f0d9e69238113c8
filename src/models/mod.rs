pub mod data;
pub mod rules;

pub use data::{EngineMode, ExtractedFields, OcrConfig, SegmentationMode};
pub use rules::{KnownFragments, KnownValue, TemplateRules, MOROCCAN_CIN};
