use crate::components::imports::*;

// Set from the page component only, nested titles would overwrite it
pub struct PageTitle;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
}

impl Component for PageTitle {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        console::log!(format!("setting title: {:?}", &ctx.props().title));
        gloo_utils::document().set_title(&ctx.props().title);
        html! {}
    }
}
