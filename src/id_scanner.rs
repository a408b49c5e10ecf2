use crate::models::IdentityRecord;
use crate::processing::{FieldExtractor, ImageProcessor, TextRecognizer};
use crate::utils::ScanError;
use log::info;

/// Drives preprocessing, recognition and field extraction for one card image.
pub struct IdCardScanner<R: TextRecognizer> {
    recognizer: R,
    extractor: FieldExtractor,
}

impl<R: TextRecognizer> IdCardScanner<R> {
    pub fn new(recognizer: R, extractor: FieldExtractor) -> Self {
        IdCardScanner {
            recognizer,
            extractor,
        }
    }

    pub fn scan_bytes(&self, image_bytes: &[u8]) -> Result<IdentityRecord, ScanError> {
        // Step 1: Normalize the bitmap
        let bitmap = ImageProcessor::preprocess_bytes(image_bytes)?;

        // Step 2: Recognize text fragments
        let tokens = self.recognizer.recognize(&bitmap)?;
        info!("Recognized {} text fragments", tokens.len());

        // Step 3: Classify fragments into fields
        Ok(self.extractor.extract(&tokens))
    }
}
