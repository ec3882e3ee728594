//! Object URLs for previewing staged content.
//!
//! An image is previewed by handing its original bytes to the browser
//! as a `Blob` and pointing an `<img>` at the object URL; the browser
//! decodes it off the UI thread and CSS scales it into the preview box.

use mandaditos_staging::FileContent;
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur during object URL creation.
#[derive(Debug, thiserror::Error)]
pub enum ObjectUrlError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for ObjectUrlError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Wrap `content` in a Blob typed with its MIME type and create an
/// object URL for it.
///
/// The returned URL must be revoked via [`revoke_blob_url`] once the
/// preview using it is gone.
///
/// # Errors
///
/// Returns [`ObjectUrlError::JsError`] if Blob or URL creation fails.
pub fn content_blob_url(content: &FileContent) -> Result<String, ObjectUrlError> {
    let uint8_array = js_sys::Uint8Array::from(content.bytes());
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    let opts = BlobPropertyBag::new();
    opts.set_type(content.mime_type());
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    Ok(url)
}

/// Revoke a Blob URL previously created by [`content_blob_url`].
///
/// Best-effort: failures are silently ignored since the URL may have
/// already been revoked.
pub fn revoke_blob_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}
