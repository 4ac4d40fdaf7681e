// src/components/drop_zone.rs
use web_sys::{File, HtmlInputElement};
use yew::events::DragEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DropZoneProps {
    /// Fired once per drop or browse, with `None` when nothing was picked.
    pub on_file: Callback<Option<File>>,
}

#[function_component(DropZone)]
pub fn drop_zone(props: &DropZoneProps) -> Html {
    let dragging = use_state(|| false);

    let ondragover = {
        let dragging = dragging.clone();
        Callback::from(move |e: DragEvent| {
            // required for the browser to allow a drop here
            e.prevent_default();
            if !*dragging {
                dragging.set(true);
            }
        })
    };

    let ondragleave = {
        let dragging = dragging.clone();
        Callback::from(move |_: DragEvent| dragging.set(false))
    };

    let ondrop = {
        let dragging = dragging.clone();
        let on_file = props.on_file.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragging.set(false);

            let file = e
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            on_file.emit(file);
        })
    };

    let onchange = {
        let on_file = props.on_file.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let file = input.files().and_then(|files| files.get(0));
                // allow picking the same file again
                input.set_value("");
                on_file.emit(file);
            }
        })
    };

    html! {
        <div class="drop-zone-container">
            <div
                class={if *dragging { "dropZoneActive" } else { "dropZone" }}
                {ondragover}
                {ondragleave}
                {ondrop}
            >
                <p>{"Drag & Drop DICOM File Here"}</p>
            </div>
            <label class="browse">
                {"or browse: "}
                <input type="file" accept=".dcm,application/dicom" {onchange} />
            </label>
        </div>
    }
}
