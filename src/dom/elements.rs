//! Small element constructors over web-sys

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// Create `<tag class="...">`
pub fn create(document: &Document, tag: &str, class: Option<&str>) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    if let Some(class) = class {
        element.set_class_name(class);
    }
    Ok(element)
}

/// Create `<tag class="...">text</tag>`
pub fn create_with_text(
    document: &Document,
    tag: &str,
    class: Option<&str>,
    text: &str,
) -> Result<Element, JsValue> {
    let element = create(document, tag, class)?;
    element.set_text_content(Some(text));
    Ok(element)
}

/// Create, append to `parent`, and return the child
pub fn append(parent: &Element, child: Element) -> Result<Element, JsValue> {
    parent.append_child(&child)?;
    Ok(child)
}
