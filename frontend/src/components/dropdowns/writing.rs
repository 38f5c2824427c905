//! Writing menu in the header: where a logged-in user starts new content.

use crate::components::imports::*;
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use interfacing::graphql::{FetchLoginUser, Logout, NoVariables};
use interfacing::LoginUser;
use wasm_bindgen::JsCast;

/// Delay before a hovered-out menu closes, so the pointer can cross the gap.
const CLOSE_DELAY_MS: u32 = 100;

#[derive(Clone, Debug, PartialEq)]
pub enum MenuAction {
    Navigate(Route),
    Logout,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub key: &'static str,
    pub label: &'static str,
    pub action: MenuAction,
}

pub fn menu_items(logged_in: bool) -> Vec<MenuItem> {
    use MenuAction::*;

    if !logged_in {
        return vec![MenuItem {
            key: "login",
            label: "로그인",
            action: Navigate(Route::Login),
        }];
    }

    vec![
        MenuItem {
            key: "1",
            label: "클래스 생성하기",
            action: Navigate(Route::ClassWrite),
        },
        MenuItem {
            key: "2",
            label: "클래스 광고하기",
            action: Navigate(Route::PaymentPage),
        },
        MenuItem {
            key: "3",
            label: "사랑방 글쓰기",
            action: Navigate(Route::PaymentPage),
        },
        MenuItem {
            key: "4",
            label: "예약 관리",
            action: Navigate(Route::PaymentPage),
        },
        MenuItem {
            key: "logout",
            label: "로그아웃",
            action: Logout,
        },
    ]
}

/// Open state of the menu. Hovering and clicking the button both only open it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct MenuState {
    open: bool,
}

impl MenuState {
    /// Returns whether the state changed.
    fn set(&mut self, open: bool) -> bool {
        std::mem::replace(&mut self.open, open) != open
    }
}

pub struct DropdownWriting {
    user: Option<LoginUser>,
    menu: MenuState,
    close_timeout: Option<Timeout>,
    outside_click: Option<EventListener>,
    node_ref: NodeRef,
}

pub enum Msg {
    UserLoaded(Option<LoginUser>),
    Open,
    CloseLater,
    Close,
    Select(MenuAction),
    LoggedOut,
}

impl Component for DropdownWriting {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            user: None,
            menu: MenuState::default(),
            close_timeout: None,
            outside_click: None,
            node_ref: NodeRef::default(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let wrapper_style = css!(
            "
            position: relative;
            display: inline-block;
        "
        );

        let button_style = css!(
            "
            margin-left: 14px;
            cursor: pointer;
            font-size: 14px;
            font-weight: 700;
            background-color: #f28316;
            width: 90px;
            height: 36px;
            display: flex;
            align-items: center;
            justify-content: center;
            border-radius: 4px;
            border: none;
            color: #ffffff;

            :hover {
                background-color: #e97100;
                color: #ffffff;
            }
        "
        );

        let overlay_style = css!(
            "
            position: absolute;
            top: 40px;
            left: 50%;
            transform: translateX(-50%);
            z-index: 9999;
            min-width: 140px;
            padding: 4px;
            list-style: none;
            margin: 0;
            background-color: #ffffff;
            border-radius: 8px;
            box-shadow: 0 6px 16px rgba(0, 0, 0, 0.08), 0 3px 6px -4px rgba(0, 0, 0, 0.12);

            a {
                display: block;
                padding: 5px 12px;
                font-size: 14px;
                font-weight: 500;
                color: #111111;
                cursor: pointer;
                border-radius: 4px;
                text-decoration: none;
            }

            a:hover {
                background-color: #f5f5f5;
            }
        "
        );

        let onmouseenter = ctx.link().callback(|_: MouseEvent| Msg::Open);
        let onmouseleave = ctx.link().callback(|_: MouseEvent| Msg::CloseLater);
        let onclick = ctx.link().callback(|_: MouseEvent| Msg::Open);

        let items = menu_items(self.user.is_some()).into_iter().map(|item| {
            let onclick = {
                let action = item.action.clone();
                ctx.link().callback(move |event: MouseEvent| {
                    event.prevent_default();
                    Msg::Select(action.clone())
                })
            };
            html! {
                <li key={item.key}>
                    <a {onclick} rel="noopener noreferrer">{ item.label }</a>
                </li>
            }
        });

        html! {
            <div ref={self.node_ref.clone()} class={wrapper_style} {onmouseenter} {onmouseleave}>
                <button type="button" class={button_style} {onclick}>{ "글쓰기" }</button>
                if self.menu.open {
                    <ul class={overlay_style}>
                        { for items }
                    </ul>
                }
            </div>
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UserLoaded(user) => {
                console::log!(format!(
                    "login user loaded in DropdownWriting: {}",
                    user.is_some()
                ));
                self.user = user;
                true
            }
            Msg::Open => {
                self.close_timeout = None;
                self.set_open(ctx, true)
            }
            Msg::CloseLater => {
                let link = ctx.link().clone();
                self.close_timeout = Some(Timeout::new(CLOSE_DELAY_MS, move || {
                    link.send_message(Msg::Close)
                }));
                false
            }
            Msg::Close => {
                self.close_timeout = None;
                self.set_open(ctx, false)
            }
            Msg::Select(MenuAction::Navigate(route)) => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&route);
                }
                self.set_open(ctx, false)
            }
            Msg::Select(MenuAction::Logout) => {
                let client = GraphQLClient::new(&conf_of(ctx).graphql);
                ctx.link().send_future(async move {
                    if let Err(e) = client.execute::<Logout>(NoVariables {}).await {
                        console::error!(format!("logout failed: {}", e));
                    }
                    Msg::LoggedOut
                });
                self.set_open(ctx, false)
            }
            Msg::LoggedOut => {
                crate::auth::forget_access_token();
                self.user = None;
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Home);
                }
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.refetch(ctx);
        }
    }
}

impl DropdownWriting {
    fn refetch(&self, ctx: &Context<Self>) {
        if crate::auth::access_token().is_none() {
            ctx.link().send_message(Msg::UserLoaded(None));
            return;
        }

        let client = GraphQLClient::new(&conf_of(ctx).graphql);
        ctx.link().send_future(async move {
            match client.execute::<FetchLoginUser>(NoVariables {}).await {
                Ok(data) => Msg::UserLoaded(Some(data.user)),
                Err(e) => {
                    console::log!(format!("no login user: {}", e));
                    Msg::UserLoaded(None)
                }
            }
        });
    }

    /// Opening also starts listening for clicks outside the menu.
    fn set_open(&mut self, ctx: &Context<Self>, open: bool) -> bool {
        if !self.menu.set(open) {
            return false;
        }

        self.outside_click = open.then(|| {
            let node_ref = self.node_ref.clone();
            let link = ctx.link().clone();
            EventListener::new(&gloo_utils::document(), "click", move |event| {
                let inside = match (node_ref.get(), event.target()) {
                    (Some(root), Some(target)) => target
                        .dyn_into::<web_sys::Node>()
                        .map(|target| root.contains(Some(&target)))
                        .unwrap_or(false),
                    _ => false,
                };
                if !inside {
                    link.send_message(Msg::Close);
                }
            })
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_out_menu_only_offers_login() {
        assert_eq!(
            menu_items(false),
            vec![MenuItem {
                key: "login",
                label: "로그인",
                action: MenuAction::Navigate(Route::Login),
            }]
        );
    }

    #[test]
    fn logged_in_menu_starts_with_class_creation() {
        let items = menu_items(true);
        assert_eq!(items[0].label, "클래스 생성하기");
        assert_eq!(items[0].action, MenuAction::Navigate(Route::ClassWrite));
        assert_eq!(
            items
                .iter()
                .filter(|item| item.action == MenuAction::Logout)
                .count(),
            1
        );
        assert!(items
            .iter()
            .all(|item| item.action != MenuAction::Navigate(Route::Login)));
    }

    #[test]
    fn logged_in_menu_targets() {
        let targets: Vec<_> = menu_items(true)
            .into_iter()
            .map(|item| (item.label, item.action))
            .collect();
        assert_eq!(
            targets,
            vec![
                ("클래스 생성하기", MenuAction::Navigate(Route::ClassWrite)),
                ("클래스 광고하기", MenuAction::Navigate(Route::PaymentPage)),
                ("사랑방 글쓰기", MenuAction::Navigate(Route::PaymentPage)),
                ("예약 관리", MenuAction::Navigate(Route::PaymentPage)),
                ("로그아웃", MenuAction::Logout),
            ]
        );
    }

    #[test]
    fn click_after_hover_keeps_menu_open() {
        let mut menu = MenuState::default();
        assert!(menu.set(true));
        assert!(!menu.set(true));
        assert!(menu.open);
        assert!(menu.set(false));
        assert!(!menu.open);
    }

    #[test]
    fn menu_keys_are_unique() {
        let items = menu_items(true);
        let mut keys: Vec<_> = items.iter().map(|item| item.key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), items.len());
    }
}
