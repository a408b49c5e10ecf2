use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use log::{debug, info};
use tesseract::Tesseract;

use crate::utils::ScanError;

/// Anything that turns a bitmap into an ordered list of text fragments.
pub trait TextRecognizer {
    fn recognize(&self, bitmap: &[u8]) -> Result<Vec<String>, ScanError>;
}

#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Directory holding `*.traineddata`. Tesseract falls back to
    /// `TESSDATA_PREFIX` when unset.
    pub tessdata_dir: Option<PathBuf>,
    pub language: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        OcrConfig {
            tessdata_dir: None,
            language: "fra".to_string(),
        }
    }
}

/// Tesseract-backed recognizer. The engine is initialized once in
/// [`TesseractRecognizer::new`] and reused by every call.
pub struct TesseractRecognizer {
    config: OcrConfig,
    engine: Mutex<Option<Tesseract>>,
}

impl TesseractRecognizer {
    pub fn new(config: OcrConfig) -> Result<Self, ScanError> {
        let engine = Self::init_engine(&config)?;
        info!("Tesseract initialized with language {:?}", config.language);
        Ok(TesseractRecognizer {
            config,
            engine: Mutex::new(Some(engine)),
        })
    }

    fn init_engine(config: &OcrConfig) -> Result<Tesseract, ScanError> {
        let datapath = match &config.tessdata_dir {
            Some(dir) => Some(dir.to_str().ok_or_else(|| {
                ScanError::OcrError(format!("Tessdata path is not valid UTF-8: {:?}", dir))
            })?),
            None => None,
        };
        Tesseract::new(datapath, Some(config.language.as_str()))
            .map_err(|e| ScanError::OcrError(format!("Failed to initialize Tesseract: {}", e)))
    }

    /// One token per non-blank line of recognized text.
    pub fn split_tokens(text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize(&self, bitmap: &[u8]) -> Result<Vec<String>, ScanError> {
        let mut temp_file = tempfile::Builder::new().suffix(".png").tempfile()?;
        temp_file.write_all(bitmap)?;
        temp_file.flush()?;
        let path_str = temp_file
            .path()
            .to_str()
            .ok_or_else(|| ScanError::OcrError("Could not convert path to string".to_string()))?;

        let mut guard = self
            .engine
            .lock()
            .map_err(|_| ScanError::OcrError("Tesseract engine lock poisoned".to_string()))?;
        // A failed set_image consumes the engine, so it is rebuilt on the next call.
        let engine = match guard.take() {
            Some(engine) => engine,
            None => Self::init_engine(&self.config)?,
        };
        let mut engine = engine
            .set_image(path_str)
            .map_err(|e| ScanError::OcrError(format!("Failed to set image: {}", e)))?;
        let text = engine.get_text();
        *guard = Some(engine);

        let text = text.map_err(|e| ScanError::OcrError(format!("Failed to extract text: {}", e)))?;
        let tokens = Self::split_tokens(&text);
        debug!("Recognized {} tokens", tokens.len());
        Ok(tokens)
    }
}
