//! Toast UI editor in WYSIWYG mode.

use super::{global_defined, load_script, load_stylesheet, options, SdkError};
use crate::conf::EditorConf;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = toastui)]
    #[derive(Clone)]
    type Editor;

    #[wasm_bindgen(constructor, js_namespace = toastui)]
    fn new(options: &JsValue) -> Editor;

    #[wasm_bindgen(method, js_name = getHTML)]
    fn get_html(this: &Editor) -> String;

    #[wasm_bindgen(method, js_name = setHTML)]
    fn set_html(this: &Editor, html: &str);

    #[wasm_bindgen(method)]
    fn destroy(this: &Editor);
}

pub async fn ensure_loaded(conf: &EditorConf) -> Result<(), SdkError> {
    load_stylesheet(&conf.style_url)?;
    load_script(&conf.script_url, || global_defined(&["toastui", "Editor"])).await?;
    if global_defined(&["toastui", "Editor"]) {
        Ok(())
    } else {
        Err(SdkError::MissingGlobal("toastui.Editor"))
    }
}

/// Mounted editor; destroyed on drop.
pub struct RichTextEditor {
    editor: Editor,
    _on_change: Closure<dyn FnMut()>,
}

impl RichTextEditor {
    /// `on_change` receives the editor HTML after every change.
    pub fn mount(
        container: &HtmlElement,
        conf: &EditorConf,
        initial_html: &str,
        on_change: impl Fn(String) + 'static,
    ) -> Result<Self, SdkError> {
        // the editor is created after the change closure, which needs a handle to it
        let slot: std::rc::Rc<std::cell::RefCell<Option<Editor>>> = Default::default();

        let on_change = {
            let slot = slot.clone();
            Closure::<dyn FnMut()>::new(move || {
                if let Some(editor) = slot.borrow().as_ref() {
                    on_change(editor.get_html());
                }
            })
        };

        let events = options([("change", on_change.as_ref().clone())])?;

        let editor = Editor::new(&options([
            ("el", container.clone().into()),
            ("height", JsValue::from_str(&conf.height)),
            ("initialEditType", JsValue::from_str("wysiwyg")),
            ("previewStyle", JsValue::from_str("vertical")),
            ("hideModeSwitch", JsValue::TRUE),
            ("initialValue", JsValue::from_str(initial_html)),
            ("events", events.into()),
        ])?.into());
        if !initial_html.is_empty() {
            editor.set_html(initial_html);
        }

        *slot.borrow_mut() = Some(editor.clone());

        Ok(Self {
            editor,
            _on_change: on_change,
        })
    }
}

impl Drop for RichTextEditor {
    fn drop(&mut self) {
        self.editor.destroy();
    }
}
