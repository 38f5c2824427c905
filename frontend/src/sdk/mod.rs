//! Browser SDKs this client drives but does not own.
//!
//! Each SDK is injected as a `<script>` tag on first use and reached through
//! `wasm-bindgen` bindings afterwards.

pub mod daum;
pub mod kakao;
mod script;
pub mod toast;

pub use script::{load_script, load_stylesheet};

use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;

#[derive(thiserror::Error, Debug)]
pub enum SdkError {
    #[error("Failed to load script {0}")]
    ScriptLoad(String),

    #[error("{0} is not available on window")]
    MissingGlobal(&'static str),

    #[error("SDK call failed: {0}")]
    Js(String),
}

impl From<JsValue> for SdkError {
    fn from(value: JsValue) -> Self {
        Self::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

/// Plain JS object from key/value pairs, for SDK option bags.
pub(crate) fn options<'a>(
    entries: impl IntoIterator<Item = (&'a str, JsValue)>,
) -> Result<Object, SdkError> {
    let object = Object::new();
    for (key, value) in entries {
        Reflect::set(&object, &JsValue::from_str(key), &value)?;
    }
    Ok(object)
}

/// Walks `window.a.b.c` and tells whether every step is defined.
pub(crate) fn global_defined(path: &[&str]) -> bool {
    let mut current: JsValue = js_sys::global().into();
    for key in path {
        match Reflect::get(&current, &JsValue::from_str(key)) {
            Ok(value) if !value.is_undefined() && !value.is_null() => current = value,
            _ => return false,
        }
    }
    true
}

pub(crate) fn string_field(object: &JsValue, key: &str) -> Option<String> {
    Reflect::get(object, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_string())
}
