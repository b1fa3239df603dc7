use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DropZoneProps {
    /// Fired when the surface is clicked; the parent forwards the click to
    /// the hidden file input.
    pub on_activate: Callback<MouseEvent>,
}

#[function_component(DropZone)]
pub fn drop_zone(props: &DropZoneProps) -> Html {
    html! {
        <div class="drop-zone" onclick={props.on_activate.clone()}>
            <div class="drop-zone-inner">
                // Stroke width and line caps come from the stylesheet
                <svg
                    class="drop-zone-icon"
                    viewBox="0 0 48 48"
                    fill="none"
                    stroke="currentColor"
                >
                    <path d="M28 8H12a4 4 0 00-4 4v20m32-12v8m0 0v8a4 4 0 01-4 4H12a4 4 0 01-4-4v-4m32-4l-3.172-3.172a4 4 0 00-5.656 0L28 28M8 32l9.172-9.172a4 4 0 015.656 0L40 32" />
                </svg>
                <p class="drop-zone-hint">{ "Haz clic para seleccionar" }</p>
                <p class="drop-zone-formats">{ "MP4, MOV, AVI, etc. (hasta 100MB)" }</p>
            </div>
        </div>
    }
}
