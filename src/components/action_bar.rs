use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActionBarProps {
    /// Derived from the form state: the upload button is actionable only
    /// while a file is selected.
    pub can_upload: bool,
    pub on_clear: Callback<MouseEvent>,
    pub on_upload: Callback<MouseEvent>,
}

#[function_component(ActionBar)]
pub fn action_bar(props: &ActionBarProps) -> Html {
    html! {
        <div class="action-bar">
            <button
                onclick={props.on_clear.clone()}
                class="clear-button"
            >
                { "Limpiar" }
            </button>
            <button
                onclick={props.on_upload.clone()}
                disabled={!props.can_upload}
                class="upload-button"
            >
                { "Subir Video" }
            </button>
        </div>
    }
}
