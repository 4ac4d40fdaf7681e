// src/api.rs
//
// Typed calls against the DICOM backend. Errors are plain strings that end
// up in the status line.

use crate::config::BackendConfig;
use crate::dicom_data::{FileRecord, UploadResponse};
use gloo_net::http::Request;
use web_sys::{File, FormData};

pub const UPLOAD_FAILED: &str = "Error uploading file";
pub const LIST_FAILED: &str = "Failed to fetch DICOM files";

/// `GET /files`, with a cache-buster so a fresh upload shows up.
pub async fn fetch_files(config: &BackendConfig) -> Result<Vec<FileRecord>, String> {
    let cache_bust = js_sys::Date::now() as u64;
    let url = files_url(config, cache_bust);

    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("{}: {}", LIST_FAILED, network_failure_reason(e)))?;

    if !resp.ok() {
        return Err(format!("{} (status {})", LIST_FAILED, resp.status()));
    }

    resp.json::<Vec<FileRecord>>()
        .await
        .map_err(|e| format!("Failed to parse file list: {}", network_failure_reason(e)))
}

/// `POST /upload` with the file in the multipart field `file`.
pub async fn upload_file(config: &BackendConfig, file: File) -> Result<UploadResponse, String> {
    let form = FormData::new().map_err(|e| format!("Failed to build form data: {:?}", e))?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| format!("Failed to attach file: {:?}", e))?;

    let resp = Request::post(&config.endpoint("upload"))
        .body(form)
        .map_err(network_failure_reason)?
        .send()
        .await
        .map_err(network_failure_reason)?;

    if !resp.ok() {
        log::warn!("Upload of {} rejected with status {}", file.name(), resp.status());
        return Err(upload_failure_reason(resp.status()));
    }

    resp.json::<UploadResponse>()
        .await
        .map_err(network_failure_reason)
}

/// Any non-success status collapses to one generic reason.
pub fn upload_failure_reason(status: u16) -> String {
    log::debug!("Upload answered with status {}", status);
    UPLOAD_FAILED.to_string()
}

/// Browser exceptions carry their own message ("Failed to fetch"); show
/// that rather than the `JsError: TypeError: ...` rendering.
fn network_failure_reason(err: gloo_net::Error) -> String {
    match err {
        gloo_net::Error::JsError(js) => js.message,
        other => other.to_string(),
    }
}

fn files_url(config: &BackendConfig, cache_bust: u64) -> String {
    format!("{}?v={}", config.endpoint("files"), cache_bust)
}
