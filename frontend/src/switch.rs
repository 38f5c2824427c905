use crate::router::Route;

use yew::prelude::*;

pub fn switch(routes: Route) -> Html {
    use crate::components::*;

    match routes {
        Route::NotFound => html! { <ErrorMessage message={"페이지를 찾을 수 없습니다 (404)"}/> },
        Route::Home => html! { <Placeholder title={"클래스마켓"}/> },
        Route::Login => html! { <Placeholder title={"로그인"}/> },
        Route::ClassWrite => html! {
            <WithAuth>
                <ClassWrite is_edit={false}/>
            </WithAuth>
        },
        Route::ClassEdit { class_id } => html! {
            <WithAuth>
                <ClassEdit {class_id}/>
            </WithAuth>
        },
        Route::ClassDetail { class_id } => html! {
            <Placeholder title={format!("클래스 {}", class_id)}/>
        },
        Route::PaymentPage => html! { <Placeholder title={"클래스 광고하기"}/> },
    }
}
