use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoPreviewProps {
    pub src: AttrValue,
    pub label: AttrValue,
}

/// Fully derived display; the parent renders it only while a preview URL
/// exists. Overlong labels are truncated visually, never in the string.
#[function_component(VideoPreview)]
pub fn video_preview(props: &VideoPreviewProps) -> Html {
    html! {
        <div id="video-preview-container" class="preview">
            <p class="preview-title">{ "Vista previa:" }</p>
            <video
                id="video-preview"
                controls=true
                src={props.src.clone()}
            />
            <p id="file-name" class="file-name truncate">{ props.label.clone() }</p>
        </div>
    }
}
