//! Multipart upload via `fetch`.
//!
//! Builds a `FormData` body with one browser `File` per synchronized
//! entry, all under the same repeated field name, posts it to the
//! configured endpoint, and classifies the response.  After a
//! successful upload, [`follow`] performs the page navigation the
//! outcome asks for.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use mandaditos_staging::{
    FileContent, ResponseSummary, UploadConfig, UploadError, UploadOutcome, interpret_response,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Errors that can occur while submitting the upload.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// A browser API call failed.
    #[error("browser API error: {0}")]
    JsError(String),

    /// The request failed or the endpoint did not accept the upload.
    #[error(transparent)]
    Upload(#[from] UploadError),
}

impl From<JsValue> for TransportError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Post `files` as a multipart form to `config.endpoint`.
///
/// # Errors
///
/// Returns [`TransportError::JsError`] if the form cannot be built or
/// the response body cannot be read.
/// Returns [`TransportError::Upload`] if the request fails before a
/// response arrives, or the response does not report success (see
/// [`interpret_response`]).
#[allow(clippy::future_not_send)] // WASM is single-threaded; fetch futures are !Send
pub async fn upload(
    config: &UploadConfig,
    files: &[FileContent],
) -> Result<UploadOutcome, TransportError> {
    let form_data = build_form_data(&config.field_name, files)?;

    let window =
        web_sys::window().ok_or_else(|| TransportError::JsError("no global window".into()))?;
    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_body(&form_data);

    let response: web_sys::Response =
        JsFuture::from(window.fetch_with_str_and_init(&config.endpoint, &init))
            .await
            .map_err(|e| UploadError::Network(format!("{e:?}")))?
            .dyn_into()?;

    let body = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .unwrap_or_default();

    let summary = ResponseSummary {
        status: response.status(),
        redirected: response.redirected(),
        url: response.url(),
        body,
    };
    Ok(interpret_response(&summary)?)
}

/// Navigate the page as a successful upload outcome requires.
///
/// # Errors
///
/// Returns [`TransportError::JsError`] if the window location cannot be
/// changed.
pub fn follow(outcome: &UploadOutcome) -> Result<(), TransportError> {
    let window =
        web_sys::window().ok_or_else(|| TransportError::JsError("no global window".into()))?;
    let location = window.location();
    match outcome {
        UploadOutcome::Redirected(url) => location.set_href(url)?,
        UploadOutcome::Accepted => location.reload()?,
    }
    Ok(())
}

fn build_form_data(
    field_name: &str,
    files: &[FileContent],
) -> Result<web_sys::FormData, TransportError> {
    let form_data = web_sys::FormData::new()?;
    for content in files {
        let file = to_browser_file(content)?;
        form_data.append_with_blob_and_filename(field_name, &file, content.name())?;
    }
    Ok(form_data)
}

/// Materialize staged content as a browser `File` with its current
/// name, MIME type and timestamp.
#[allow(clippy::cast_precision_loss)] // JS timestamps are f64 milliseconds
fn to_browser_file(content: &FileContent) -> Result<web_sys::File, TransportError> {
    let bytes = js_sys::Uint8Array::from(content.bytes());
    let parts = js_sys::Array::new();
    parts.push(&bytes);

    let opts = web_sys::FilePropertyBag::new();
    opts.set_type(content.mime_type());
    opts.set_last_modified(content.last_modified() as f64);

    Ok(web_sys::File::new_with_u8_array_sequence_and_options(
        &parts,
        content.name(),
        &opts,
    )?)
}
