//! Submission guard and upload response interpretation.
//!
//! [`SubmitGate`] is the busy flag that keeps a second submission from
//! starting while one is in flight, and refuses to start one at all
//! when nothing is staged.  [`interpret_response`] turns what the
//! upload endpoint sent back into success or a recoverable error.

use serde::Deserialize;

/// Message shown when a submission fails for any transport reason.
pub const RETRY_MESSAGE: &str = "Something went wrong while uploading the files. Please try again.";

/// Reasons a submission cannot start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The working set is empty.
    #[error("Please select at least one file to upload.")]
    NoFiles,

    /// A previous submission has not settled yet.
    #[error("An upload is already in progress.")]
    Busy,
}

/// Reasons a started submission failed.
///
/// All variants leave the working set untouched so the user can retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered but did not accept the files.
    #[error("upload rejected (HTTP {status})")]
    Rejected {
        /// HTTP status of the response.
        status: u16,
    },

    /// A successful status with a body that is not the expected JSON.
    #[error("malformed upload response: {0}")]
    MalformedResponse(String),
}

/// What happened after a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The endpoint redirected; navigate to this URL.
    Redirected(String),
    /// The endpoint reported success; reload the page.
    Accepted,
}

/// The parts of an HTTP response the upload flow looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSummary {
    pub status: u16,
    /// Whether the browser followed a redirect to get here.
    pub redirected: bool,
    /// Final URL after redirects.
    pub url: String,
    pub body: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    success: bool,
}

/// Classify an upload response.
///
/// A followed redirect counts as success regardless of the body.
/// Otherwise the body must be JSON with `"success": true`.
///
/// # Errors
///
/// Returns [`UploadError::Rejected`] when the body reports
/// `"success": false` (or omits it), or when a non-2xx response has
/// an unparsable body.
/// Returns [`UploadError::MalformedResponse`] when a 2xx response has
/// an unparsable body.
pub fn interpret_response(response: &ResponseSummary) -> Result<UploadOutcome, UploadError> {
    if response.redirected {
        return Ok(UploadOutcome::Redirected(response.url.clone()));
    }

    match serde_json::from_str::<UploadResponse>(&response.body) {
        Ok(UploadResponse { success: true }) => Ok(UploadOutcome::Accepted),
        Ok(UploadResponse { success: false }) => Err(UploadError::Rejected {
            status: response.status,
        }),
        Err(_) if !(200..300).contains(&response.status) => Err(UploadError::Rejected {
            status: response.status,
        }),
        Err(e) => Err(UploadError::MalformedResponse(e.to_string())),
    }
}

/// Busy flag guarding the submit action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitGate {
    busy: bool,
}

impl SubmitGate {
    #[must_use]
    pub const fn new() -> Self {
        Self { busy: false }
    }

    /// Whether a submission is in flight.
    #[must_use]
    pub const fn is_busy(self) -> bool {
        self.busy
    }

    /// Try to start a submission of `pending` files.
    ///
    /// On success the gate is busy until [`finish`](Self::finish).
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::NoFiles`] when `pending` is zero and
    /// [`SubmitError::Busy`] while another submission is in flight.
    /// The gate is unchanged in both cases.
    pub const fn begin(&mut self, pending: usize) -> Result<(), SubmitError> {
        if pending == 0 {
            return Err(SubmitError::NoFiles);
        }
        if self.busy {
            return Err(SubmitError::Busy);
        }
        self.busy = true;
        Ok(())
    }

    /// Mark the in-flight submission as settled.
    pub const fn finish(&mut self) {
        self.busy = false;
    }
}
