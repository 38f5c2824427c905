use crate::components::imports::*;
use crate::sdk::daum::{self, EmbeddedPostcode, PostcodeAddress};
use crate::sdk::SdkError;

/// Modal around the embedded postcode search. OK and cancel both just close it.
pub struct AddressModal {
    container_ref: NodeRef,
    // keeps the completion closure alive while the modal is shown
    _widget: Option<EmbeddedPostcode>,
    load_error: Option<String>,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub ontoggle: Callback<()>,
    pub oncomplete: Callback<PostcodeAddress>,
}

pub enum Msg {
    SdkLoaded(Result<(), SdkError>),
}

impl Component for AddressModal {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            container_ref: NodeRef::default(),
            _widget: None,
            load_error: None,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let mask_style = css!(
            "
            position: fixed;
            inset: 0;
            z-index: 1000;
            background-color: rgba(0, 0, 0, 0.45);
            display: flex;
            align-items: center;
            justify-content: center;
        "
        );

        let dialog_style = css!(
            "
            width: 520px;
            background-color: #ffffff;
            border-radius: 8px;
            padding: 20px 24px;
        "
        );

        let container_style = css!("height: 470px;");

        let footer_style = css!(
            "
            display: flex;
            justify-content: flex-end;
            gap: 8px;
            margin-top: 12px;

            button {
                height: 32px;
                padding: 0 15px;
                border-radius: 6px;
                border: 1px solid #d9d9d9;
                background-color: #ffffff;
                cursor: pointer;
            }

            button.ok {
                border: none;
                background-color: #f28316;
                color: #ffffff;
            }
        "
        );

        let oncancel = ctx.props().ontoggle.reform(|_: MouseEvent| ());
        let onok = ctx.props().ontoggle.reform(|_: MouseEvent| ());

        html! {
            <div class={mask_style}>
                <div class={dialog_style}>
                    if let Some(error) = &self.load_error {
                        <p class={css!("color: red;")}>{ error.clone() }</p>
                    }
                    <div ref={self.container_ref.clone()} class={container_style}/>
                    <div class={footer_style}>
                        <button type="button" onclick={oncancel}>{ "Cancel" }</button>
                        <button type="button" class="ok" onclick={onok}>{ "OK" }</button>
                    </div>
                </div>
            </div>
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SdkLoaded(Ok(())) => {
                let Some(container) = self.container_ref.cast::<web_sys::HtmlElement>() else {
                    return false;
                };
                let oncomplete = ctx.props().oncomplete.clone();
                match EmbeddedPostcode::embed(&container, move |address| oncomplete.emit(address)) {
                    Ok(widget) => self._widget = Some(widget),
                    Err(e) => self.load_error = Some(e.to_string()),
                }
                true
            }
            Msg::SdkLoaded(Err(e)) => {
                console::error!(format!("postcode widget unavailable: {}", e));
                self.load_error = Some(e.to_string());
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let script_url = conf_of(ctx).postcode.script_url.clone();
            ctx.link()
                .send_future(async move { Msg::SdkLoaded(daum::ensure_loaded(&script_url).await) });
        }
    }
}
