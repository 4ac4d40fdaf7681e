// src/view_state.rs
use crate::dicom_data::{FileRecord, UploadResponse};
use std::collections::HashMap;

pub const ZOOM_MIN: u32 = 50;
pub const ZOOM_MAX: u32 = 100;
pub const ZOOM_STEP: u32 = 10;

pub const MSG_NO_FILE: &str = "No file selected";
pub const MSG_UPLOADING: &str = "Uploading file...";

/// Work the controller must start after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    Nothing,
    ReloadFiles,
}

/// Everything the page renders. Network results are folded in through the
/// transition methods below; nothing else mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub files: Vec<FileRecord>,
    pub message: String,
    pub is_error: bool,
    pub metadata: Option<HashMap<String, String>>,
    pub image_src: Option<String>,
    pub file_url: Option<String>,
    pub selected_id: Option<u32>,
    pub show_image: bool,
    pub zoom: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            message: String::new(),
            is_error: false,
            metadata: None,
            image_src: None,
            file_url: None,
            selected_id: None,
            show_image: false,
            zoom: ZOOM_MAX,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_files(&mut self, files: Vec<FileRecord>) {
        self.files = files;
    }

    /// Starts an upload. Returns the file to send, or `None` (after flagging
    /// the error) when the drop carried nothing.
    pub fn prepare_upload<F>(&mut self, file: Option<F>) -> Option<F> {
        match file {
            Some(file) => {
                self.is_error = false;
                self.message = MSG_UPLOADING.to_string();
                self.show_image = false;
                Some(file)
            }
            None => {
                self.message = MSG_NO_FILE.to_string();
                self.is_error = true;
                None
            }
        }
    }

    /// Folds the outcome of an upload into the view.
    pub fn finish_upload(&mut self, result: Result<UploadResponse, String>) -> FollowUp {
        match result {
            Ok(response) => self.apply_upload(response),
            Err(reason) => self.fail_upload(&reason),
        }
    }

    pub fn apply_upload(&mut self, response: UploadResponse) -> FollowUp {
        self.is_error = false;
        self.message = response.message;
        self.metadata = Some(response.metadata);
        self.image_src = response.image_src;
        self.file_url = Some(response.file_url);
        self.selected_id = None;
        self.show_image = false;
        self.zoom = ZOOM_MAX;
        FollowUp::ReloadFiles
    }

    /// Metadata and image stay as they were; the view hides them while
    /// `is_error` is set.
    pub fn fail_upload(&mut self, reason: &str) -> FollowUp {
        self.message = format!("Error: {}", reason);
        self.is_error = true;
        FollowUp::Nothing
    }

    pub fn select_file(&mut self, record: &FileRecord) {
        self.message.clear();
        self.is_error = false;
        self.metadata = Some(record.metadata.clone());
        self.image_src = record.image_src.clone();
        self.file_url = Some(record.file_url.clone());
        self.selected_id = Some(record.id);
        self.show_image = false;
        self.zoom = ZOOM_MAX;
    }

    /// Selects a record from the current list by id. Unknown ids are ignored.
    pub fn select_by_id(&mut self, id: u32) -> bool {
        match self.files.iter().find(|f| f.id == id).cloned() {
            Some(record) => {
                self.select_file(&record);
                true
            }
            None => false,
        }
    }

    pub fn toggle_image(&mut self) {
        if self.image_src.is_some() {
            self.show_image = !self.show_image;
        }
    }

    pub fn set_zoom(&mut self, percent: u32) {
        self.zoom = percent.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom.saturating_add(ZOOM_STEP));
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom.saturating_sub(ZOOM_STEP));
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = ZOOM_MAX;
    }

    /// The metadata card is shown only for a current document and no error.
    pub fn shows_details(&self) -> bool {
        !self.is_error && self.metadata.is_some()
    }

    pub fn shows_preview(&self) -> bool {
        !self.is_error && self.show_image && self.image_src.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::upload_failure_reason;

    fn record(id: u32, name: &str) -> FileRecord {
        let mut metadata = HashMap::new();
        metadata.insert("Patient's Name".to_string(), format!("PATIENT^{}", id));
        FileRecord {
            id,
            filename: name.to_string(),
            metadata,
            image_src: Some("iVBORw0KGgo=".to_string()),
            file_url: format!("uploads/{}", name),
        }
    }

    fn upload_response() -> UploadResponse {
        let mut metadata = HashMap::new();
        metadata.insert("Patient's Name".to_string(), "DOE^JANE".to_string());
        metadata.insert("Series Description".to_string(), "AXIAL".to_string());
        UploadResponse {
            message: "DICOM file uploaded and processed successfully!".to_string(),
            metadata,
            image_src: Some("AAAA".to_string()),
            file_url: "http://localhost:5000/uploads/new.dcm".to_string(),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert!(state.files.is_empty());
        assert!(state.message.is_empty());
        assert!(!state.is_error);
        assert!(!state.show_image);
        assert_eq!(state.zoom, 100);
        assert!(!state.shows_details());
    }

    #[test]
    fn test_successful_upload() {
        let mut state = ViewState::new();
        let to_send = state.prepare_upload(Some("new.dcm"));
        assert_eq!(to_send, Some("new.dcm"));
        assert_eq!(state.message, MSG_UPLOADING);
        assert!(!state.is_error);

        state.apply_upload(upload_response());
        assert!(!state.is_error);
        assert!(!state.metadata.as_ref().unwrap().is_empty());
        assert_eq!(state.image_src.as_deref(), Some("AAAA"));
        assert_eq!(
            state.file_url.as_deref(),
            Some("http://localhost:5000/uploads/new.dcm")
        );
        assert!(!state.show_image);
        assert!(state.shows_details());
    }

    #[test]
    fn test_upload_without_file() {
        let mut state = ViewState::new();
        let to_send: Option<&str> = state.prepare_upload(None);
        // nothing to hand to the network layer
        assert!(to_send.is_none());
        assert!(state.is_error);
        assert_eq!(state.message, "No file selected");
    }

    #[test]
    fn test_failed_upload_keeps_file_list() {
        let mut state = ViewState::new();
        state.replace_files(vec![record(1, "a.dcm"), record(2, "b.dcm")]);
        let before = state.files.clone();

        state.prepare_upload(Some(()));
        let next = state.finish_upload(Err(upload_failure_reason(500)));

        assert_eq!(next, FollowUp::Nothing);
        assert!(state.is_error);
        assert_eq!(state.message, "Error: Error uploading file");
        assert_eq!(state.files, before);
        assert!(!state.shows_details());
    }

    #[test]
    fn test_failed_upload_leaves_document_hidden() {
        let mut state = ViewState::new();
        state.replace_files(vec![record(1, "a.dcm")]);
        state.select_by_id(1);
        state.toggle_image();

        state.prepare_upload(Some(()));
        state.fail_upload("Failed to fetch");

        assert!(state.metadata.is_some());
        assert!(!state.shows_details());
        assert!(!state.shows_preview());
    }

    #[test]
    fn test_select_file_is_idempotent() {
        let mut state = ViewState::new();
        state.replace_files(vec![record(1, "a.dcm"), record(2, "b.dcm")]);

        assert!(state.select_by_id(2));
        let first = state.clone();
        assert!(!first.show_image);

        state.toggle_image();
        assert!(state.show_image);

        assert!(state.select_by_id(2));
        assert_eq!(state, first);
        assert!(!state.show_image);
    }

    #[test]
    fn test_select_clears_message_and_error() {
        let mut state = ViewState::new();
        state.replace_files(vec![record(1, "a.dcm")]);
        state.prepare_upload::<()>(None);
        assert!(state.is_error);

        state.select_by_id(1);
        assert!(state.message.is_empty());
        assert!(!state.is_error);
        assert_eq!(state.selected_id, Some(1));
        assert_eq!(state.file_url.as_deref(), Some("uploads/a.dcm"));
    }

    #[test]
    fn test_single_selection() {
        let mut state = ViewState::new();
        state.replace_files(vec![record(1, "a.dcm"), record(2, "b.dcm")]);
        state.select_by_id(1);
        state.select_by_id(2);
        assert_eq!(state.selected_id, Some(2));
    }

    #[test]
    fn test_select_unknown_id() {
        let mut state = ViewState::new();
        state.replace_files(vec![record(1, "a.dcm")]);
        assert!(!state.select_by_id(9));
        assert!(state.selected_id.is_none());
    }

    #[test]
    fn test_upload_clears_selection() {
        let mut state = ViewState::new();
        state.replace_files(vec![record(1, "a.dcm")]);
        state.select_by_id(1);
        state.toggle_image();

        state.prepare_upload(Some(()));
        assert!(!state.show_image);
        state.apply_upload(upload_response());
        assert!(state.selected_id.is_none());
        assert!(!state.show_image);
    }

    #[test]
    fn test_toggle_image_requires_image() {
        let mut state = ViewState::new();
        let mut rec = record(1, "a.dcm");
        rec.image_src = None;
        state.replace_files(vec![rec]);
        state.select_by_id(1);
        state.toggle_image();
        assert!(!state.show_image);
        assert!(!state.shows_preview());
    }

    #[test]
    fn test_zoom_clamped_and_cosmetic() {
        let mut state = ViewState::new();
        state.replace_files(vec![record(1, "a.dcm")]);
        state.select_by_id(1);
        let image = state.image_src.clone();

        state.set_zoom(10);
        assert_eq!(state.zoom, 50);
        state.set_zoom(250);
        assert_eq!(state.zoom, 100);
        state.set_zoom(75);
        assert_eq!(state.zoom, 75);

        assert_eq!(state.image_src, image);
        assert_eq!(state.files[0].image_src, image);
    }

    #[test]
    fn test_zoom_steps() {
        let mut state = ViewState::new();
        state.zoom_in();
        assert_eq!(state.zoom, 100);
        for _ in 0..10 {
            state.zoom_out();
        }
        assert_eq!(state.zoom, 50);
        state.zoom_in();
        assert_eq!(state.zoom, 60);
        state.reset_zoom();
        assert_eq!(state.zoom, 100);
    }

    #[test]
    fn test_successful_upload_reloads_file_list() {
        let mut state = ViewState::new();
        state.replace_files(vec![record(1, "a.dcm")]);

        state.prepare_upload(Some(()));
        let next = state.finish_upload(Ok(upload_response()));
        assert_eq!(next, FollowUp::ReloadFiles);
        assert!(!state.is_error);
    }

    #[test]
    fn test_no_reload_after_rejected_upload() {
        let mut state = ViewState::new();
        state.prepare_upload(Some(()));
        let next = state.finish_upload(Err(upload_failure_reason(400)));
        assert_eq!(next, FollowUp::Nothing);
        assert_eq!(state.message, "Error: Error uploading file");
    }
}
