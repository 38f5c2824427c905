use crate::components::imports::*;
use interfacing::graphql::{FetchLoginUser, NoVariables};
use interfacing::LoginUser;

/// Renders children only for a logged-in user; everyone else is sent to login.
pub struct WithAuth {
    session: Session,
}

enum Session {
    Unloaded,
    Loaded(LoginUser),
    Error(GraphQLError),
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Debug)]
pub enum Msg {
    SessionLoaded(LoginUser),
    SessionMissing,
    SessionError(GraphQLError),
}

const LOGIN_REQUIRED: &str = "로그인 후 이용 가능합니다";

impl Component for WithAuth {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: Session::Unloaded,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.session {
            Session::Unloaded => {
                console::log!("drawing WithAuth with Unloaded");
                html! {}
            }
            Session::Loaded(user) => {
                console::log!(format!("drawing WithAuth for {}", user.user_id));
                html! { <>{ ctx.props().children.clone() }</> }
            }
            Session::Error(_) => internal_problems(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        console::console_dbg!(&msg);
        match msg {
            Msg::SessionLoaded(user) => {
                self.session = Session::Loaded(user);
                true
            }
            Msg::SessionMissing => {
                crate::auth::forget_access_token();
                alert(LOGIN_REQUIRED);
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Login);
                }
                false
            }
            Msg::SessionError(e) => {
                console::error!(format!("login user check failed: {}", e));
                self.session = Session::Error(e);
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }

        if crate::auth::access_token().is_none() {
            ctx.link().send_message(Msg::SessionMissing);
            return;
        }

        let client = GraphQLClient::new(&conf_of(ctx).graphql);
        ctx.link().send_future(async move {
            match client.execute::<FetchLoginUser>(NoVariables {}).await {
                Ok(data) => Msg::SessionLoaded(data.user),
                // an expired token comes back as a GraphQL error
                Err(GraphQLError::ResponseError(_)) => Msg::SessionMissing,
                Err(e) => Msg::SessionError(e),
            }
        });
    }
}
