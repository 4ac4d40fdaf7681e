// src/dicom_data.rs
use serde::Deserialize;
use std::collections::HashMap;

/// Header labels the backend extracts, paired with the title shown in the table.
pub const KNOWN_FIELDS: [(&str, &str); 3] = [
    ("Patient's Name", "Patient Name"),
    ("Patient's Birth Date", "Patient Birthdate"),
    ("Series Description", "Series Description"),
];

pub const MISSING_VALUE: &str = "N/A";

/// A previously uploaded file as listed by `GET /files`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: u32,
    pub filename: String,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    #[serde(default)]
    pub image_src: Option<String>,
    pub file_url: String,
}

/// Body returned by `POST /upload`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    #[serde(default)]
    pub image_src: Option<String>,
    pub file_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetadataRow {
    pub label: String,
    pub value: String,
}

/// Table rows for a metadata mapping: the known fields first (with `N/A`
/// for gaps), then any extra keys in key order.
pub fn metadata_rows(metadata: &HashMap<String, String>) -> Vec<MetadataRow> {
    let mut rows: Vec<MetadataRow> = KNOWN_FIELDS
        .iter()
        .map(|(key, title)| MetadataRow {
            label: title.to_string(),
            value: metadata
                .get(*key)
                .filter(|v| !v.trim().is_empty())
                .cloned()
                .unwrap_or_else(|| MISSING_VALUE.to_string()),
        })
        .collect();

    let mut extra: Vec<(&String, &String)> = metadata
        .iter()
        .filter(|(k, _)| !KNOWN_FIELDS.iter().any(|(known, _)| known == k))
        .collect();
    extra.sort_by(|a, b| a.0.cmp(b.0));

    rows.extend(extra.into_iter().map(|(k, v)| MetadataRow {
        label: k.clone(),
        value: v.clone(),
    }));
    rows
}

/// Last path segment of a file URL, used as the download name.
pub fn download_name(file_url: &str) -> &str {
    file_url
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(file_url)
}

/// Inline `data:` URL for a base64 PNG preview.
pub fn png_data_url(image_src: &str) -> String {
    format!("data:image/png;base64,{}", image_src)
}
