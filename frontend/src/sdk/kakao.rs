//! Kakao Maps bindings, limited to geocoding one address and pinning it.

use super::{global_defined, load_script, options, string_field, SdkError};
use crate::conf::{Coords, KakaoConf};
use futures::channel::oneshot;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["kakao", "maps"], js_name = load)]
    fn maps_load(callback: &Closure<dyn FnMut()>);

    #[wasm_bindgen(js_namespace = ["kakao", "maps"])]
    pub type LatLng;

    #[wasm_bindgen(constructor, js_namespace = ["kakao", "maps"])]
    pub fn new(lat: f64, lng: f64) -> LatLng;

    #[wasm_bindgen(js_namespace = ["kakao", "maps"])]
    pub type Map;

    #[wasm_bindgen(constructor, js_namespace = ["kakao", "maps"])]
    pub fn new(container: &HtmlElement, options: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = setCenter)]
    pub fn set_center(this: &Map, position: &LatLng);

    #[wasm_bindgen(js_namespace = ["kakao", "maps"])]
    pub type Marker;

    #[wasm_bindgen(constructor, js_namespace = ["kakao", "maps"])]
    pub fn new(options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = setMap)]
    pub fn set_map(this: &Marker, map: &JsValue);

    #[wasm_bindgen(js_namespace = ["kakao", "maps"])]
    pub type InfoWindow;

    #[wasm_bindgen(constructor, js_namespace = ["kakao", "maps"])]
    pub fn new(options: &JsValue) -> InfoWindow;

    #[wasm_bindgen(method)]
    pub fn open(this: &InfoWindow, map: &Map, marker: &Marker);

    #[wasm_bindgen(method)]
    pub fn close(this: &InfoWindow);

    #[wasm_bindgen(js_namespace = ["kakao", "maps", "services"])]
    pub type Geocoder;

    #[wasm_bindgen(constructor, js_namespace = ["kakao", "maps", "services"])]
    pub fn new() -> Geocoder;

    #[wasm_bindgen(method, js_name = addressSearch)]
    fn address_search(this: &Geocoder, address: &str, callback: &Closure<dyn FnMut(JsValue, JsValue)>);
}

/// Status string the geocoder reports on success.
const STATUS_OK: &str = "OK";

/// Loads the SDK script and waits for `kakao.maps.load`.
pub async fn ensure_loaded(conf: &KakaoConf) -> Result<(), SdkError> {
    if global_defined(&["kakao", "maps", "services", "Geocoder"]) {
        return Ok(());
    }

    load_script(&conf.script_src(), || global_defined(&["kakao", "maps", "load"])).await?;

    let (tx, rx) = oneshot::channel::<()>();
    let mut tx = Some(tx);
    let on_load = Closure::<dyn FnMut()>::new(move || {
        if let Some(tx) = tx.take() {
            let _ = tx.send(());
        }
    });
    maps_load(&on_load);

    rx.await
        .map_err(|_| SdkError::MissingGlobal("kakao.maps"))?;
    Ok(())
}

pub fn create_map(container: &HtmlElement, conf: &KakaoConf) -> Result<Map, SdkError> {
    let Coords { lat, lng } = conf.center;
    let map_options = options([
        ("center", LatLng::new(lat, lng).into()),
        ("level", JsValue::from(conf.level)),
        ("draggable", JsValue::FALSE),
    ])?;
    Ok(Map::new(container, &map_options))
}

/// Resolves an address to coordinates. `Ok(None)` when nothing matched.
pub async fn geocode(address: &str) -> Result<Option<Coords>, SdkError> {
    let (tx, rx) = oneshot::channel::<Option<Coords>>();
    let mut tx = Some(tx);

    let callback = Closure::<dyn FnMut(JsValue, JsValue)>::new(move |result: JsValue, status: JsValue| {
        let coords = if status.as_string().as_deref() == Some(STATUS_OK) {
            first_coords(&result)
        } else {
            None
        };
        if let Some(tx) = tx.take() {
            let _ = tx.send(coords);
        }
    });

    Geocoder::new().address_search(address, &callback);

    rx.await.map_err(|_| SdkError::Js("geocoder dropped its callback".into()))
}

fn first_coords(result: &JsValue) -> Option<Coords> {
    let first = js_sys::Array::from(result).get(0);
    // x is longitude and y latitude, both as strings
    let lng = string_field(&first, "x")?.parse().ok()?;
    let lat = string_field(&first, "y")?.parse().ok()?;
    Some(Coords { lat, lng })
}

/// A marker with an info window showing the address, centered on the map.
pub struct Pin {
    marker: Marker,
    info_window: InfoWindow,
}

impl Pin {
    pub fn place(map: &Map, coords: Coords, label: &str) -> Result<Self, SdkError> {
        let position = LatLng::new(coords.lat, coords.lng);

        let marker = Marker::new(&options([
            ("map", map.clone().into()),
            ("position", position.clone().into()),
        ])?.into());

        let info_window = InfoWindow::new(&options([(
            "content",
            JsValue::from_str(&info_window_content(label)),
        )])?.into());
        info_window.open(map, &marker);
        map.set_center(&position);

        Ok(Self {
            marker,
            info_window,
        })
    }

    pub fn remove(&self) {
        self.info_window.close();
        self.marker.set_map(&JsValue::NULL);
    }
}

pub fn info_window_content(label: &str) -> String {
    format!(
        "<div style=\"width:270px;text-align:center;padding:6px 0;\">{}</div>",
        escape_html(label)
    )
}

fn escape_html(text: &str) -> String {
    text.chars()
        .fold(String::with_capacity(text.len()), |mut out, c| {
            match c {
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '&' => out.push_str("&amp;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                c => out.push(c),
            }
            out
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_window_escapes_address() {
        let content = info_window_content("서울 <b>중구</b> & \"세종대로\"");
        assert!(content.contains("서울 &lt;b&gt;중구&lt;/b&gt; &amp; &quot;세종대로&quot;"));
        assert!(content.starts_with("<div style=\"width:270px;"));
    }
}
