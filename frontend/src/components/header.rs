use crate::components::imports::*;
use crate::components::DropdownWriting;

#[styled_component]
pub fn Header() -> Html {
    let wrapper_style = css!(
        "
            display: flex;
            align-items: center;
            justify-content: space-between;
            height: 72px;
            padding: 0 40px;
            border-bottom: 1px solid #e5e5e5;
            background-color: #ffffff;
        "
    );

    let logo_style = css!(
        "
            font-size: 22px;
            font-weight: 800;
            color: #f28316;
            text-decoration: none;
        "
    );

    html! {
        <div class={ wrapper_style }>
            <Link<Route> to={ Route::Home } classes={ classes!(logo_style) }>{ "클래스마켓" }</Link<Route>>
            <DropdownWriting/>
        </div>
    }
}
