pub mod extractors;
pub mod image;
pub mod normalize;
pub mod ocr;

pub use extractors::{
    BirthDateExtractor, BirthPlaceExtractor, CinExtractor, FirstNameExtractor, NameExtractor,
};
pub use image::ImagePreprocessor;
pub use normalize::TextNormalizer;
pub use ocr::OcrProcessor;
