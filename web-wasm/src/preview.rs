//! Object-URL preview handle for the selected image

use wasm_bindgen::JsValue;
use web_sys::{File, Url};

/// Revocable object URL over the selected file's bytes.
///
/// Created once per selection and stored next to the file; swapping in a
/// new handle drops the previous one, which revokes its URL. Not `Clone`,
/// so there is never more than one live handle per selection and the
/// revoke runs exactly once.
#[derive(Debug)]
pub struct PreviewUrl(String);

impl PreviewUrl {
    pub fn for_file(file: &File) -> Result<Self, JsValue> {
        Url::create_object_url_with_blob(file).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for PreviewUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.0);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample_file() -> File {
        let bits = js_sys::Array::of1(&JsValue::from_str("not really a jpeg"));
        File::new_with_str_sequence(&bits, "car.jpg").expect("file creation failed")
    }

    #[wasm_bindgen_test]
    fn test_creates_blob_url_for_file() {
        let preview = PreviewUrl::for_file(&sample_file()).expect("object URL failed");
        assert!(preview.as_str().starts_with("blob:"));
    }

    #[wasm_bindgen_test]
    fn test_replacement_revokes_previous_handle() {
        let mut slot = Some(PreviewUrl::for_file(&sample_file()).expect("object URL failed"));
        let first_url = slot.as_ref().map(|p| p.as_str().to_string());

        // dropping the old handle revokes its URL; the new one is distinct
        slot = Some(PreviewUrl::for_file(&sample_file()).expect("object URL failed"));
        assert_ne!(first_url.as_deref(), slot.as_ref().map(|p| p.as_str()));

        slot.take();
        assert!(slot.is_none());
    }
}
