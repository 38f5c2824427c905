//! Daum postcode search widget, embedded into a container element.

use super::{global_defined, load_script, options, string_field, SdkError};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = daum)]
    pub type Postcode;

    #[wasm_bindgen(constructor, js_namespace = daum)]
    fn new(options: &JsValue) -> Postcode;

    #[wasm_bindgen(method)]
    fn embed(this: &Postcode, element: &HtmlElement);
}

#[derive(Clone, Debug, PartialEq)]
pub struct PostcodeAddress {
    pub address: String,
}

impl PostcodeAddress {
    fn from_js(data: &JsValue) -> Option<Self> {
        Some(Self {
            address: string_field(data, "address")?,
        })
    }
}

pub async fn ensure_loaded(script_url: &str) -> Result<(), SdkError> {
    load_script(script_url, || global_defined(&["daum", "Postcode"])).await?;
    if global_defined(&["daum", "Postcode"]) {
        Ok(())
    } else {
        Err(SdkError::MissingGlobal("daum.Postcode"))
    }
}

/// Embedded widget. The completion closure lives as long as this value.
pub struct EmbeddedPostcode {
    _widget: Postcode,
    _on_complete: Closure<dyn FnMut(JsValue)>,
}

impl EmbeddedPostcode {
    pub fn embed(
        container: &HtmlElement,
        on_complete: impl Fn(PostcodeAddress) + 'static,
    ) -> Result<Self, SdkError> {
        let on_complete = Closure::<dyn FnMut(JsValue)>::new(move |data: JsValue| {
            if let Some(address) = PostcodeAddress::from_js(&data) {
                on_complete(address);
            }
        });

        let widget = Postcode::new(&options([
            ("oncomplete", on_complete.as_ref().clone()),
            ("width", JsValue::from_str("100%")),
            ("height", JsValue::from_str("100%")),
        ])?.into());
        widget.embed(container);

        Ok(Self {
            _widget: widget,
            _on_complete: on_complete,
        })
    }
}
