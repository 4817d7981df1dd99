//! Reshaping of raw service payloads into display-ready results

use crate::mode::OcrMode;
use crate::types::{ArtifactUrls, Recognition, UploadResponse};

/// Mount prefix under which the recognition API and its artifacts are served.
pub const API_MOUNT: &str = "/api";

/// Turn a raw upload reply into a [`Recognition`] the view can bind directly.
///
/// Artifact paths come back server-relative; every present path is prefixed
/// with [`API_MOUNT`] so the browser can fetch it as-is. Absent paths stay
/// absent. The echoed `ocr_mode` is parsed back into [`OcrMode`]; an unknown
/// key degrades to the default instead of failing the render.
pub fn adapt_response(raw: &UploadResponse) -> Recognition {
    Recognition {
        ocr_mode: OcrMode::from_key(&raw.ocr_mode).unwrap_or_default(),
        has_plate: raw.has_plate,
        plate_text: raw.plate_text.clone(),
        artifacts: ArtifactUrls {
            input: qualify(raw.artifacts.input.as_deref()),
            detection: qualify(raw.artifacts.detection.as_deref()),
            plate: qualify(raw.artifacts.plate.as_deref()),
            segmented: qualify(raw.artifacts.segmented.as_deref()),
        },
    }
}

/// Prefix a server-relative artifact path with the API mount.
///
/// Empty strings count as absent.
fn qualify(path: Option<&str>) -> Option<String> {
    path.filter(|path| !path.is_empty())
        .map(|path| format!("{}{}", API_MOUNT, path))
}
