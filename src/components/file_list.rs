// src/components/file_list.rs
use crate::dicom_data::FileRecord;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FileListProps {
    pub files: Vec<FileRecord>,
    pub selected_id: Option<u32>,
    pub on_select: Callback<u32>,
}

#[function_component(FileList)]
pub fn file_list(props: &FileListProps) -> Html {
    html! {
        <div class="fileList">
            <h3>{"Uploaded Files"}</h3>
            if props.files.is_empty() {
                <p class="empty">{"No files uploaded yet"}</p>
            }
            <ul>
                {for props.files.iter().map(|file| {
                    let id = file.id;
                    let onclick = props.on_select.reform(move |_: MouseEvent| id);
                    html! {
                        <li
                            key={file.id}
                            class={if props.selected_id == Some(file.id) { "selected" } else { "" }}
                            {onclick}
                        >
                            {file.filename.clone()}
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
