// src/components/metadata_table.rs
use crate::dicom_data::{download_name, metadata_rows};
use std::collections::HashMap;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MetadataTableProps {
    pub metadata: HashMap<String, String>,
    /// Already resolved against the backend origin.
    pub file_url: Option<String>,
    pub has_image: bool,
    pub show_image: bool,
    pub on_toggle_image: Callback<()>,
}

#[function_component(MetadataTable)]
pub fn metadata_table(props: &MetadataTableProps) -> Html {
    let rows = metadata_rows(&props.metadata);

    let download = props.file_url.as_ref().map(|url| {
        html! {
            <a href={url.clone()} download={download_name(url).to_string()} class="button">
                {"Download"}
            </a>
        }
    });

    let toggle = props.has_image.then(|| {
        let onclick = props.on_toggle_image.reform(|_: MouseEvent| ());
        html! {
            <button {onclick} class="button">
                { if props.show_image { "Hide Image" } else { "View Image" } }
            </button>
        }
    });

    html! {
        <div class="card">
            <table class="table">
                <tbody>
                    {for rows.into_iter().map(|row| html! {
                        <tr>
                            <td class="tableCell"><strong>{row.label}</strong></td>
                            <td class="tableCell">{row.value}</td>
                        </tr>
                    })}
                    <tr>
                        <td class="tableCell"><strong>{"Actions"}</strong></td>
                        <td class="tableCell">
                            {download}
                            {toggle}
                        </td>
                    </tr>
                </tbody>
            </table>
        </div>
    }
}
