use crate::components::imports::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

#[styled_component]
pub fn DefaultStyling(props: &Props) -> Html {
    let global_style = css!(
        "
            body {
                margin: 0;
                font-family: 'Pretendard', 'Noto Sans KR', sans-serif;
                color: #111111;
                background-color: #ffffff;
            }

            * {
                box-sizing: border-box;
            }
        "
    );

    html! {
        <>
            <Global css={global_style}/>
            { for props.children.iter() }
        </>
    }
}
