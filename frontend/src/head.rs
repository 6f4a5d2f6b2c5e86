use log::{debug, warn};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

fn description_meta(document: &Document) -> Result<Element, JsValue> {
    if let Some(meta) = document.query_selector("meta[name=\"description\"]")? {
        return Ok(meta);
    }

    let meta = document.create_element("meta")?;
    meta.set_attribute("name", "description")?;
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
    head.append_child(&meta)?;
    Ok(meta)
}

/// Sets the document title and description. Failures leave whatever the
/// served `index.html` carries.
pub fn apply_metadata(title: &str, description: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        warn!("No document available, skipping page metadata");
        return;
    };

    document.set_title(title);

    match description_meta(&document).and_then(|meta| meta.set_attribute("content", description)) {
        Ok(()) => debug!("Page metadata applied"),
        Err(err) => gloo_console::error!("Failed to set page description", err),
    }
}
