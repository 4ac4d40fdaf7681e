// src/components/image_preview.rs
use crate::dicom_data::png_data_url;
use crate::view_state::{ZOOM_MAX, ZOOM_MIN};
use gloo::events::EventListener;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomChange {
    Set(u32),
    In,
    Out,
    Reset,
}

#[derive(Properties, PartialEq)]
pub struct ImagePreviewProps {
    /// Base64 PNG as delivered by the backend.
    pub image_src: String,
    pub zoom: u32,
    pub on_zoom: Callback<ZoomChange>,
}

#[function_component(ImagePreview)]
pub fn image_preview(props: &ImagePreviewProps) -> Html {
    // ------ KEYBOARD ZOOM ------
    {
        use_effect_with(props.on_zoom.clone(), move |on_zoom| {
            let on_zoom = on_zoom.clone();
            let listener = EventListener::new(&document(), "keydown", move |event| {
                let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let change = match keyboard_event.key().as_str() {
                    "+" | "=" => ZoomChange::In,
                    "-" | "_" => ZoomChange::Out,
                    "r" | "R" => ZoomChange::Reset,
                    _ => return,
                };
                keyboard_event.prevent_default();
                on_zoom.emit(change);
            });

            || drop(listener)
        });
    }

    // ------ SLIDER ------
    let oninput = {
        let on_zoom = props.on_zoom.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                if let Ok(value) = input.value().parse::<u32>() {
                    on_zoom.emit(ZoomChange::Set(value));
                }
            }
        })
    };

    html! {
        <div class="card">
            <h2>{"DICOM Image Preview"}</h2>
            <div class="zoom-controls">
                <label for="zoomSlider">{"Zoom: "}</label>
                <input
                    id="zoomSlider"
                    type="range"
                    min={ZOOM_MIN.to_string()}
                    max={ZOOM_MAX.to_string()}
                    value={props.zoom.to_string()}
                    {oninput}
                />
                <span>{format!("{}%", props.zoom)}</span>
            </div>
            <img
                src={png_data_url(&props.image_src)}
                alt="DICOM Preview"
                class="image"
                style={format!("transform: scale({});", props.zoom as f64 / 100.0)}
            />
            <p class="hint">{"Keyboard: + / - (zoom), R (reset)"}</p>
        </div>
    }
}
