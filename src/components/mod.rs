// src/components/mod.rs
pub mod drop_zone;
pub mod file_list;
pub mod image_preview;
pub mod metadata_table;
