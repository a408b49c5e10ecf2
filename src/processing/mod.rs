pub mod dates;
pub mod extractors;
pub mod image;
pub mod ocr;

pub use dates::DateClassifier;
pub use extractors::FieldExtractor;
pub use self::image::ImageProcessor;
pub use ocr::{OcrConfig, TesseractRecognizer, TextRecognizer};
