use crate::conf::ConfCtx;
use crate::router::Route;
use crate::switch::switch;

use yew::prelude::*;
use yew_router::prelude::{BrowserRouter, Switch};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub conf: ConfCtx,
}

#[function_component(App)]
pub fn app(props: &Props) -> Html {
    use crate::components::{DefaultStyling, Header};

    html! {
        <ContextProvider<ConfCtx> context={props.conf.clone()}>
            <BrowserRouter>
                <DefaultStyling>
                    <Header/>
                    <Switch<Route> render={switch} />
                </DefaultStyling>
            </BrowserRouter>
        </ContextProvider<ConfCtx>>
    }
}
