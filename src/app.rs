use crate::components::{
    action_bar::ActionBar,
    drop_zone::DropZone,
    file_input::FileInput,
    preview::VideoPreview,
};
use crate::selection::{FormState, Selection};
use crate::upload::{self, UploadPrompt};
use gloo::console::log;
use gloo::file::ObjectUrl;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

pub struct App {
    selection: Selection<File, ObjectUrl>,
    input_ref: NodeRef,
}

pub enum Msg {
    FileChosen(Option<File>),
    Clear,
    Upload,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            selection: Selection::new(),
            input_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChosen(file) => {
                match &file {
                    Some(file) => log!("Archivo seleccionado:", file.name()),
                    None => log!("Selector cerrado sin archivo, limpiando seleccion"),
                }
                self.selection
                    .choose(file, |file| ObjectUrl::from(gloo::file::File::from(file.clone())));
                true
            }
            Msg::Clear => {
                self.selection.clear();
                // Reset the input so the same path fires a change event again
                if let Some(input) = self.input_ref.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
                true
            }
            Msg::Upload => {
                let prompt = upload::prompt(&self.selection);
                if let UploadPrompt::Ready(_) = &prompt {
                    // A real upload service would take over here
                    if let Some(name) = self.selection.file_name() {
                        log!("Simulando subida del archivo:", name);
                    }
                }
                let window = web_sys::window().expect("no global window exists");
                let _ = window.alert_with_message(prompt.message());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let open_picker = {
            let input_ref = self.input_ref.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                    input.click();
                }
            })
        };

        let can_upload = self.selection.state() == FormState::HasFile;

        html! {
            <div class="app-container">
                <div class="card">
                    <h2 class="card-title">{ "Cargar Video" }</h2>

                    <div class="picker">
                        <label for="video-upload" class="picker-label">
                            { "Selecciona un archivo de video:" }
                        </label>
                        <DropZone on_activate={open_picker} />
                        <FileInput
                            input_ref={self.input_ref.clone()}
                            on_file_chosen={ctx.link().callback(Msg::FileChosen)}
                        />
                    </div>

                    {
                        match self.selection.preview() {
                            Some(url) => html! {
                                <VideoPreview
                                    src={url.to_string()}
                                    label={self.selection.label().to_string()}
                                />
                            },
                            None => html! {},
                        }
                    }

                    <ActionBar
                        can_upload={can_upload}
                        on_clear={ctx.link().callback(|_| Msg::Clear)}
                        on_upload={ctx.link().callback(|_| Msg::Upload)}
                    />
                </div>
            </div>
        }
    }
}
