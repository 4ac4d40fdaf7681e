// src/main.rs
mod api;
mod components;
mod config;
mod dicom_data;
mod view_state;

use components::drop_zone::DropZone;
use components::file_list::FileList;
use components::image_preview::{ImagePreview, ZoomChange};
use components::metadata_table::MetadataTable;
use config::BackendConfig;
use dicom_data::{FileRecord, UploadResponse};
use view_state::{FollowUp, ViewState};
use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;

pub enum AppMsg {
    LoadFiles,
    FilesLoaded(Vec<FileRecord>),
    FilesLoadFailed(String),
    Upload(Option<File>),
    UploadFinished(Result<UploadResponse, String>),
    SelectFile(u32),
    ToggleImage,
    Zoom(ZoomChange),
}

pub struct App {
    config: BackendConfig,
    state: ViewState,
    // ImagePreview re-attaches its key listener whenever this changes
    on_zoom: Callback<ZoomChange>,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(AppMsg::LoadFiles);

        Self {
            config: BackendConfig::load(),
            state: ViewState::new(),
            on_zoom: ctx.link().callback(AppMsg::Zoom),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::LoadFiles => {
                let config = self.config.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let msg = match api::fetch_files(&config).await {
                        Ok(files) => AppMsg::FilesLoaded(files),
                        Err(e) => AppMsg::FilesLoadFailed(e),
                    };
                    link.send_message(msg);
                });
                false
            }
            AppMsg::FilesLoaded(files) => {
                log::info!("Loaded {} uploaded files", files.len());
                self.state.replace_files(files);
                true
            }
            AppMsg::FilesLoadFailed(error) => {
                log::error!("Error fetching DICOM files: {}", error);
                false
            }
            AppMsg::Upload(file) => {
                if let Some(file) = self.state.prepare_upload(file) {
                    log::info!("Uploading {} ({} bytes)", file.name(), file.size());
                    let config = self.config.clone();
                    ctx.link().send_future(async move {
                        AppMsg::UploadFinished(api::upload_file(&config, file).await)
                    });
                }
                true
            }
            AppMsg::UploadFinished(result) => {
                match &result {
                    Ok(response) => log::info!("Upload finished: {}", response.message),
                    Err(error) => log::warn!("Upload failed: {}", error),
                }
                if self.state.finish_upload(result) == FollowUp::ReloadFiles {
                    ctx.link().send_message(AppMsg::LoadFiles);
                }
                true
            }
            AppMsg::SelectFile(id) => {
                log::debug!("Selected file {}", id);
                self.state.select_by_id(id)
            }
            AppMsg::ToggleImage => {
                self.state.toggle_image();
                true
            }
            AppMsg::Zoom(change) => {
                let before = self.state.zoom;
                match change {
                    ZoomChange::Set(value) => self.state.set_zoom(value),
                    ZoomChange::In => self.state.zoom_in(),
                    ZoomChange::Out => self.state.zoom_out(),
                    ZoomChange::Reset => self.state.reset_zoom(),
                }
                log::debug!("Zoom {}% -> {}%", before, self.state.zoom);
                before != self.state.zoom
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_file = ctx.link().callback(AppMsg::Upload);
        let on_select = ctx.link().callback(AppMsg::SelectFile);

        html! {
            <div class="container">
                <div class="leftColumn">
                    <h2 class="header">{"File Uploader"}</h2>
                    <DropZone {on_file} />
                    { self.render_message() }
                    <FileList
                        files={self.state.files.clone()}
                        selected_id={self.state.selected_id}
                        {on_select}
                    />
                </div>

                <div class="rightColumn">
                    <h2>{"Patient Data"}</h2>
                    { self.render_details(ctx) }
                    { self.render_preview() }
                </div>
            </div>
        }
    }
}

impl App {
    fn render_message(&self) -> Html {
        if self.state.message.is_empty() {
            return html! {};
        }
        let class = if self.state.is_error {
            "message error"
        } else {
            "message success"
        };
        html! { <p {class}>{self.state.message.clone()}</p> }
    }

    fn render_details(&self, ctx: &Context<Self>) -> Html {
        if !self.state.shows_details() {
            return html! {};
        }
        let Some(metadata) = self.state.metadata.clone() else {
            return html! {};
        };
        let file_url = self
            .state
            .file_url
            .as_deref()
            .map(|url| self.config.resolve_file_url(url));

        html! {
            <MetadataTable
                {metadata}
                {file_url}
                has_image={self.state.image_src.is_some()}
                show_image={self.state.show_image}
                on_toggle_image={ctx.link().callback(|_: ()| AppMsg::ToggleImage)}
            />
        }
    }

    fn render_preview(&self) -> Html {
        if !self.state.shows_preview() {
            return html! {};
        }
        let Some(image_src) = self.state.image_src.clone() else {
            return html! {};
        };

        html! {
            <ImagePreview
                {image_src}
                zoom={self.state.zoom}
                on_zoom={self.on_zoom.clone()}
            />
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
