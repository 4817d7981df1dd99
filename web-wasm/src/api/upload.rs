//! Image upload call
//!
//! One POST per submission: the image as a multipart field plus the chosen
//! OCR mode's wire key. JS-side failures travel as `JsValue` inside this
//! module and leave it as [`SubmitError`].

use gloo::console;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, Response};

use mlpdr_common::{adapt_response, ErrorBody, OcrMode, Recognition, SubmitError, UploadResponse};

/// Fixed upload endpoint, relative to the page origin.
const UPLOAD_URL: &str = "/api/upload";

/// POST the selected image and return the display-ready recognition.
///
/// Non-2xx replies become [`SubmitError::Service`] carrying the body's
/// `error` text when present; network failures and unreadable success
/// bodies become [`SubmitError::Transport`].
pub async fn submit_image(file: &File, mode: OcrMode) -> Result<Recognition, SubmitError> {
    let response = match send_upload(file, mode).await {
        Ok(response) => response,
        Err(err) => {
            console::error!("upload request failed:", format!("{:?}", err));
            return Err(SubmitError::Transport);
        }
    };

    if !response.ok() {
        let body = read_json::<ErrorBody>(&response).await.unwrap_or_default();
        return Err(SubmitError::from_service_body(body.error));
    }

    match read_json::<UploadResponse>(&response).await {
        Ok(payload) => Ok(adapt_response(&payload)),
        Err(err) => {
            console::error!("upload response unreadable:", format!("{:?}", err));
            Err(SubmitError::Transport)
        }
    }
}

async fn send_upload(file: &File, mode: OcrMode) -> Result<Response, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename("image", file, &file.name())?;
    form.append_with_str("ocr_mode", mode.key())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    // no Content-Type header: the browser supplies the multipart boundary
    opts.set_body(form.as_ref());

    let request = Request::new_with_str_and_init(UPLOAD_URL, &opts)?;

    let window = web_sys::window().unwrap();
    let response = JsFuture::from(window.fetch_with_request(&request)).await?;
    response.dyn_into::<Response>()
}

async fn read_json<T: DeserializeOwned>(response: &Response) -> Result<T, JsValue> {
    let json = JsFuture::from(response.json()?).await?;
    serde_wasm_bindgen::from_value(json).map_err(JsValue::from)
}
