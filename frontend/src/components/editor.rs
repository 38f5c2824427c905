use crate::components::imports::*;
use crate::sdk::toast::{self, RichTextEditor};
use crate::sdk::SdkError;
use interfacing::normalize_editor_html;

/// Rich-text editor for the class description.
///
/// `initial` is read once on mount; later changes flow out through
/// `onchange` only, already normalized so an empty document is `""`.
pub struct ContentEditor {
    container_ref: NodeRef,
    _editor: Option<RichTextEditor>,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub initial: AttrValue,
    pub onchange: Callback<String>,
}

pub enum Msg {
    SdkLoaded(Result<(), SdkError>),
}

impl Component for ContentEditor {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            container_ref: NodeRef::default(),
            _editor: None,
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! { <div ref={self.container_ref.clone()}/> }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SdkLoaded(Ok(())) => {
                let Some(container) = self.container_ref.cast::<web_sys::HtmlElement>() else {
                    return false;
                };
                let onchange = ctx.props().onchange.clone();
                let mounted = RichTextEditor::mount(
                    &container,
                    &conf_of(ctx).editor,
                    &ctx.props().initial,
                    move |html| onchange.emit(normalize_editor_html(&html)),
                );
                match mounted {
                    Ok(editor) => {
                        console::log!("editor mounted");
                        self._editor = Some(editor);
                    }
                    Err(e) => console::error!(format!("editor mount failed: {}", e)),
                }
                false
            }
            Msg::SdkLoaded(Err(e)) => {
                console::error!(format!("editor unavailable: {}", e));
                false
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let editor_conf = conf_of(ctx).editor.clone();
            ctx.link()
                .send_future(async move { Msg::SdkLoaded(toast::ensure_loaded(&editor_conf).await) });
        }
    }
}
