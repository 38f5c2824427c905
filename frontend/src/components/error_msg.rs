use crate::components::imports::*;

#[derive(Properties, PartialEq)]
pub struct ErrorProps {
    pub message: String,
}

#[styled_component]
pub fn ErrorMessage(props: &ErrorProps) -> Html {
    let message = &props.message;

    let css = css! {"
        color: rgb(248 83 20);
        text-align: center;
        margin-top: 80px;
    "};

    html! {<h1 class={css}>{ message }</h1>}
}

#[derive(Properties, PartialEq)]
pub struct FieldErrorProps {
    #[prop_or_default]
    pub message: Option<&'static str>,
}

/// Inline validation message under an input. Keeps its height when empty.
#[styled_component]
pub fn FieldError(props: &FieldErrorProps) -> Html {
    let css = css! {"
        color: red;
        font-size: 13px;
        min-height: 20px;
        padding-top: 4px;
    "};

    html! {<div class={css}>{ props.message.unwrap_or_default() }</div>}
}
