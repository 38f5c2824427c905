use yew_router::prelude::*;

// Paths are shared with the rest of the marketplace, keep them as they are
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/classPage/write")]
    ClassWrite,
    #[at("/classPage/:class_id")]
    ClassDetail { class_id: String },
    #[at("/classPage/:class_id/edit")]
    ClassEdit { class_id: String },
    #[at("/paymentPage")]
    PaymentPage,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn test_routes_render_marketplace_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::ClassWrite.to_path(), "/classPage/write");
        assert_eq!(
            Route::ClassDetail {
                class_id: "c-1".into()
            }
            .to_path(),
            "/classPage/c-1"
        );
        assert_eq!(
            Route::ClassEdit {
                class_id: "c-1".into()
            }
            .to_path(),
            "/classPage/c-1/edit"
        );
        assert_eq!(Route::PaymentPage.to_path(), "/paymentPage");
    }

    #[test]
    fn test_not_found_route_is_registered() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}
