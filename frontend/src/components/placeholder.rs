use crate::components::imports::*;
use crate::components::PageTitle;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
}

/// Pages owned by other parts of the marketplace.
#[styled_component]
pub fn Placeholder(props: &Props) -> Html {
    let css = css! {"
        max-width: 1200px;
        margin: 80px auto;
        font-size: 24px;
        font-weight: 700;
    "};

    html! {
        <>
            <PageTitle title={props.title.clone()}/>
            <div class={css}>{ props.title.clone() }</div>
        </>
    }
}
