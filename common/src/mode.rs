//! OCR engine selection

/// Which server-side recognition engine processes the upload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OcrMode {
    /// Plate reader trained on Moroccan plates.
    #[default]
    Trained,
    /// General-purpose Tesseract OCR.
    Tesseract,
}

impl OcrMode {
    /// Selectable modes, in display order.
    pub const ALL: [OcrMode; 2] = [OcrMode::Trained, OcrMode::Tesseract];

    /// Wire key sent as the `ocr_mode` form field.
    pub fn key(self) -> &'static str {
        match self {
            OcrMode::Trained => "trained",
            OcrMode::Tesseract => "tesseract",
        }
    }

    /// Label shown next to the mode's radio button.
    pub fn label(self) -> &'static str {
        match self {
            OcrMode::Trained => "Moroccan Plate (Custom OCR)",
            OcrMode::Tesseract => "General Plate (Tesseract-OCR)",
        }
    }

    /// Parse a wire key back into a mode.
    pub fn from_key(key: &str) -> Option<OcrMode> {
        OcrMode::ALL.into_iter().find(|mode| mode.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_trained() {
        assert_eq!(OcrMode::default(), OcrMode::Trained);
    }

    #[test]
    fn test_mode_keys() {
        assert_eq!(OcrMode::Trained.key(), "trained");
        assert_eq!(OcrMode::Tesseract.key(), "tesseract");
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(OcrMode::Trained.label(), "Moroccan Plate (Custom OCR)");
        assert_eq!(OcrMode::Tesseract.label(), "General Plate (Tesseract-OCR)");
    }

    #[test]
    fn test_from_key_roundtrip() {
        for mode in OcrMode::ALL {
            assert_eq!(OcrMode::from_key(mode.key()), Some(mode));
        }
    }

    #[test]
    fn test_from_key_unknown() {
        assert_eq!(OcrMode::from_key("cnn"), None);
        assert_eq!(OcrMode::from_key(""), None);
        assert_eq!(OcrMode::from_key("Trained"), None); // keys are lowercase
    }
}
