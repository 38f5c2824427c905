use super::SdkError;
use futures::channel::oneshot;
use gloo_console as console;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlLinkElement, HtmlScriptElement};

/// Injects `<script src>` into `<head>` unless `ready` already holds, then
/// waits for it to load. A tag left by an earlier call is awaited instead of
/// being injected twice.
pub async fn load_script(src: &str, ready: impl Fn() -> bool) -> Result<(), SdkError> {
    if ready() {
        return Ok(());
    }

    let document = gloo_utils::document();
    let selector = format!("script[src=\"{}\"]", src);

    let script: Element = match document.query_selector(&selector)? {
        Some(existing) => existing,
        None => {
            let script = document
                .create_element("script")?
                .dyn_into::<HtmlScriptElement>()
                .map_err(|_| SdkError::Js("script element cast".into()))?;
            script.set_src(src);
            script.set_async(true);
            gloo_utils::head().append_child(&script)?;
            console::log!(format!("injected script {}", src));
            script.into()
        }
    };

    let (tx, rx) = oneshot::channel::<bool>();
    let tx = std::rc::Rc::new(std::cell::RefCell::new(Some(tx)));

    let _on_load = {
        let tx = tx.clone();
        EventListener::once(&script, "load", move |_| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(true);
            }
        })
    };
    let _on_error = EventListener::once(&script, "error", move |_| {
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(false);
        }
    });

    // a tag injected by someone else may have finished loading already
    if ready() {
        return Ok(());
    }

    match rx.await {
        Ok(true) => Ok(()),
        _ => Err(SdkError::ScriptLoad(src.to_owned())),
    }
}

pub fn load_stylesheet(href: &str) -> Result<(), SdkError> {
    let document = gloo_utils::document();
    if document
        .query_selector(&format!("link[href=\"{}\"]", href))?
        .is_some()
    {
        return Ok(());
    }

    let link = document
        .create_element("link")?
        .dyn_into::<HtmlLinkElement>()
        .map_err(|_| SdkError::Js("link element cast".into()))?;
    link.set_rel("stylesheet");
    link.set_href(href);
    gloo_utils::head().append_child(&link)?;
    Ok(())
}
