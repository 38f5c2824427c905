use crate::components::imports::*;
use crate::conf::Coords;
use crate::sdk::kakao::{self, Pin};
use crate::sdk::SdkError;

/// Non-draggable map pinned on `address`. Re-geocodes whenever it changes.
pub struct KakaoMap {
    container_ref: NodeRef,
    map: Option<kakao::Map>,
    pin: Option<Pin>,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub address: AttrValue,
}

pub enum Msg {
    SdkLoaded(Result<(), SdkError>),
    Located {
        address: AttrValue,
        coords: Option<Coords>,
    },
    Failed(SdkError),
}

impl Component for KakaoMap {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            container_ref: NodeRef::default(),
            map: None,
            pin: None,
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let map_style = css!(
            "
            width: 384px;
            height: 252px;
            border-radius: 8px;
            background-color: #f2f2f2;
        "
        );

        html! { <div id="map" ref={self.container_ref.clone()} class={map_style}/> }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().address != old_props.address {
            self.locate(ctx);
        }
        false
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SdkLoaded(Ok(())) => {
                let Some(container) = self.container_ref.cast::<web_sys::HtmlElement>() else {
                    return false;
                };
                match kakao::create_map(&container, &conf_of(ctx).kakao) {
                    Ok(map) => {
                        self.map = Some(map);
                        self.locate(ctx);
                    }
                    Err(e) => console::error!(format!("map creation failed: {}", e)),
                }
                false
            }
            Msg::SdkLoaded(Err(e)) | Msg::Failed(e) => {
                console::error!(format!("kakao maps: {}", e));
                false
            }
            Msg::Located { address, coords } => {
                // a newer address may have been requested in the meantime
                if address != ctx.props().address {
                    return false;
                }
                let (Some(map), Some(coords)) = (&self.map, coords) else {
                    console::log!(format!("no coordinates for {}", address));
                    return false;
                };
                if let Some(pin) = self.pin.take() {
                    pin.remove();
                }
                match Pin::place(map, coords, &address) {
                    Ok(pin) => self.pin = Some(pin),
                    Err(e) => console::error!(format!("failed to pin address: {}", e)),
                }
                false
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let kakao_conf = conf_of(ctx).kakao.clone();
            ctx.link().send_future(async move {
                Msg::SdkLoaded(kakao::ensure_loaded(&kakao_conf).await)
            });
        }
    }
}

impl KakaoMap {
    fn locate(&self, ctx: &Context<Self>) {
        let address = ctx.props().address.clone();
        if self.map.is_none() || address.is_empty() {
            return;
        }

        ctx.link().send_future(async move {
            match kakao::geocode(&address).await {
                Ok(coords) => Msg::Located { address, coords },
                Err(e) => Msg::Failed(e),
            }
        });
    }
}
