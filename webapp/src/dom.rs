use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

// small wrappers over web-sys so that every lookup and mutation fails soft
//
// a missing element disables whatever feature wanted it and nothing else

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn root() -> Option<Element> {
    document()?.document_element()
}

// lookup for elements that are allowed to be absent without comment
pub fn find_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn by_id(id: &str) -> Option<Element> {
    let element = find_by_id(id);

    if element.is_none() {
        debug!(id, "page element missing");
    }

    element
}

pub fn html_by_id(id: &str) -> Option<HtmlElement> {
    by_id(id)?.dyn_into::<HtmlElement>().ok()
}

pub fn child(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok().flatten()
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub fn set_class(element: &Element, class: &str, present: bool) {
    let classes = element.class_list();

    let result = if present {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };

    if let Err(err) = result {
        debug!("failed to update class {class}: {err:?}");
    }
}

pub fn set_attr(element: &Element, name: &str, value: &str) {
    if let Err(err) = element.set_attribute(name, value) {
        debug!("failed to set attribute {name}: {err:?}");
    }
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        debug!("failed to set style {property}: {err:?}");
    }
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn js_error(err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}
