pub use crate::conf::ConfCtx;
pub use crate::graphql::{GraphQLClient, GraphQLError};
pub use crate::router::Route;

pub use std::rc::Rc;

pub use gloo_console as console;
pub use stylist::css;
pub use stylist::yew::{styled_component, Global};
pub use web_sys::{HtmlInputElement, HtmlSelectElement};

pub use yew::prelude::*;
pub use yew_router::prelude::*;

/// Configuration provided by `App`.
pub fn conf_of<COMP: Component>(ctx: &Context<COMP>) -> ConfCtx {
    ctx.link()
        .context::<ConfCtx>(Callback::noop())
        .map(|(conf, _)| conf)
        .expect("Conf context to exist")
}

pub fn alert(message: &str) {
    if gloo_utils::window().alert_with_message(message).is_err() {
        console::error!(format!("failed to show alert: {}", message));
    }
}

pub fn internal_problems() -> Html {
    html! {
        <>
            <Global css={ "display: flex; justify-content: center;" }/>

            <h1>{ "Ooops... internal problems" }</h1>
         </>
    }
}
