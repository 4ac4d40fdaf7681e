// src/config.rs
pub const DEFAULT_BACKEND_ORIGIN: &str = "http://localhost:5000";

/// Local storage key holding an optional backend origin override.
pub const BACKEND_STORAGE_KEY: &str = "dicom_viewer_backend_url";

#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    origin: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::with_origin(DEFAULT_BACKEND_ORIGIN)
    }
}

impl BackendConfig {
    pub fn with_origin(origin: &str) -> Self {
        Self {
            origin: origin.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Read the origin from local storage, falling back to the default.
    /// A missing or blocked storage area counts as "no override".
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(BACKEND_STORAGE_KEY).ok().flatten());

        let config = Self::with_origin(&origin_from(stored));
        log::info!("Using backend origin {}", config.origin());
        config
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.origin, path.trim_start_matches('/'))
    }

    /// The list endpoint hands back paths like `uploads/x.dcm`; those are
    /// served by the backend, not by the page's own origin.
    pub fn resolve_file_url(&self, file_url: &str) -> String {
        if file_url.starts_with("http://") || file_url.starts_with("https://") {
            file_url.to_string()
        } else {
            self.endpoint(file_url)
        }
    }
}

/// Picks the stored override when it holds anything, else the default.
pub fn origin_from(stored: Option<String>) -> String {
    stored
        .map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_BACKEND_ORIGIN.to_string())
}
