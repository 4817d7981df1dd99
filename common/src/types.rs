//! Wire payloads and display-ready result types
//!
//! Two layers, kept separate on purpose:
//! - UploadResponse / ArtifactPaths / ErrorBody: exactly what the service
//!   sends, tolerant of missing or extra fields
//! - Recognition / ArtifactUrls: what the view binds to, produced by the
//!   adapter with browser-fetchable URLs

use serde::Deserialize;

use crate::mode::OcrMode;

/// Success payload of `POST /api/upload`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UploadResponse {
    pub ocr_mode: String,
    pub has_plate: bool,
    pub plate_text: String,
    pub artifacts: ArtifactPaths,
}

/// Server-relative artifact paths inside an [`UploadResponse`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArtifactPaths {
    pub input: Option<String>,
    pub detection: Option<String>,
    pub plate: Option<String>,
    pub segmented: Option<String>,
}

/// Body of a non-2xx reply.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub error: Option<String>,
}

/// Display-ready recognition result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recognition {
    pub ocr_mode: OcrMode,
    pub has_plate: bool,
    pub plate_text: String,
    pub artifacts: ArtifactUrls,
}

/// Qualified artifact URLs; absent entries are simply not rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtifactUrls {
    pub input: Option<String>,
    pub detection: Option<String>,
    pub plate: Option<String>,
    pub segmented: Option<String>,
}

impl Recognition {
    /// Recognized text for display; a dash when the service returned none.
    pub fn plate_text_display(&self) -> &str {
        if self.plate_text.is_empty() {
            "-"
        } else {
            &self.plate_text
        }
    }

    /// "Yes"/"No" for the plate-detected line.
    pub fn plate_detected_display(&self) -> &'static str {
        if self.has_plate {
            "Yes"
        } else {
            "No"
        }
    }

    /// Captioned artifact URLs to render, in display order.
    ///
    /// Only artifacts that resolved to a URL appear; the input echo is
    /// carried on the struct but never part of the gallery.
    pub fn gallery(&self) -> Vec<(&'static str, &str)> {
        [
            ("Detection", &self.artifacts.detection),
            ("Plate crop", &self.artifacts.plate),
            ("Segmented chars", &self.artifacts.segmented),
        ]
        .into_iter()
        .filter_map(|(caption, url)| url.as_deref().map(|url| (caption, url)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_response_deserialize() {
        let json = r#"{
            "ocr_mode": "trained",
            "has_plate": true,
            "plate_text": "12345-A-6",
            "artifacts": {
                "input": "/received/car.jpg?t=1700000000000",
                "detection": "/artifacts/car_box.jpg?t=1700000000000",
                "plate": "/artifacts/car_plate.jpg?t=1700000000000",
                "segmented": "/artifacts/car_chars.jpg?t=1700000000000"
            }
        }"#;

        let response: UploadResponse = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(response.ocr_mode, "trained");
        assert!(response.has_plate);
        assert_eq!(response.plate_text, "12345-A-6");
        assert_eq!(
            response.artifacts.detection.as_deref(),
            Some("/artifacts/car_box.jpg?t=1700000000000")
        );
    }

    #[test]
    fn test_upload_response_missing_fields_default() {
        let response: UploadResponse = serde_json::from_str("{}").expect("deserialize failed");
        assert_eq!(response.ocr_mode, "");
        assert!(!response.has_plate);
        assert_eq!(response.plate_text, "");
        assert!(response.artifacts.detection.is_none());
    }

    #[test]
    fn test_upload_response_ignores_extra_fields() {
        // the service also sends a legacy "result" duplicate of plate_text
        let json = r#"{
            "result": "12345-A-6",
            "plate_text": "12345-A-6",
            "has_plate": true
        }"#;

        let response: UploadResponse = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(response.plate_text, "12345-A-6");
        assert!(response.has_plate);
    }

    #[test]
    fn test_error_body_deserialize() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error": "No image provided"}"#).expect("deserialize failed");
        assert_eq!(body.error.as_deref(), Some("No image provided"));

        let empty: ErrorBody = serde_json::from_str("{}").expect("deserialize failed");
        assert!(empty.error.is_none());
    }

    #[test]
    fn test_plate_text_display_dash_when_empty() {
        let recognition = Recognition::default();
        assert_eq!(recognition.plate_text_display(), "-");

        let recognition = Recognition {
            plate_text: "9876-B-40".to_string(),
            ..Default::default()
        };
        assert_eq!(recognition.plate_text_display(), "9876-B-40");
    }

    #[test]
    fn test_plate_detected_display() {
        let mut recognition = Recognition::default();
        assert_eq!(recognition.plate_detected_display(), "No");

        recognition.has_plate = true;
        assert_eq!(recognition.plate_detected_display(), "Yes");
    }

    #[test]
    fn test_gallery_skips_absent_artifacts() {
        let recognition = Recognition {
            artifacts: ArtifactUrls {
                input: Some("/api/received/car.jpg".to_string()),
                detection: Some("/api/artifacts/car_box.jpg".to_string()),
                plate: Some("/api/artifacts/car_plate.jpg".to_string()),
                segmented: None,
            },
            ..Default::default()
        };

        let gallery = recognition.gallery();
        assert_eq!(
            gallery,
            vec![
                ("Detection", "/api/artifacts/car_box.jpg"),
                ("Plate crop", "/api/artifacts/car_plate.jpg"),
            ]
        );
    }

    #[test]
    fn test_gallery_empty_when_no_artifacts() {
        assert!(Recognition::default().gallery().is_empty());
    }
}
