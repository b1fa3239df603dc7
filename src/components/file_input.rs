use web_sys::{Event, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FileInputProps {
    /// Emits the first chosen file, or `None` when the dialog yields
    /// nothing. The accept filter is advisory only.
    pub on_file_chosen: Callback<Option<web_sys::File>>,
    pub input_ref: NodeRef,
}

#[function_component(FileInput)]
pub fn file_input(props: &FileInputProps) -> Html {
    let on_change = {
        let on_file_chosen = props.on_file_chosen.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            on_file_chosen.emit(file);
        })
    };

    html! {
        <input
            id="video-upload"
            ref={props.input_ref.clone()}
            type="file"
            accept="video/*"
            class="hidden"
            onchange={on_change}
        />
    }
}
