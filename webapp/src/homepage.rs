use anyhow::Result;
use gloo_timers::callback::Timeout;
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use common::{
    binding::{
        CAROUSEL_TRACK_ID, LOADING_INDICATOR_CLASS, LOADING_SCREEN_ID, REVEAL_CLASS,
        REVEALED_CLASS, starts_navigation,
    },
    config::WidgetConfig,
};

use crate::dom::{self, js_error};

// homepage widgets that need no state beyond the dom itself

pub fn total_slides() -> usize {
    dom::find_by_id(CAROUSEL_TRACK_ID)
        .map(|track| track.child_element_count() as usize)
        .unwrap_or(0)
}

// fade the loading screen out shortly after the window has loaded
pub fn dismiss_loading_screen(config: &WidgetConfig) -> Result<()> {
    let Some(screen) = dom::find_by_id(LOADING_SCREEN_ID)
        .and_then(|screen| screen.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return Ok(());
    };

    let (delay, fade) = (config.loading_delay_ms, config.loading_fade_ms);

    let start = move || {
        Timeout::new(delay, move || {
            dom::set_style(&screen, "opacity", "0");

            Timeout::new(fade, move || dom::set_style(&screen, "display", "none")).forget();
        })
        .forget();
    };

    // the bundle may well finish loading after the window load event
    match dom::document() {
        Some(document) if document.ready_state() == "complete" => start(),
        _ => {
            let Some(window) = web_sys::window() else {
                return Ok(());
            };
            let start = Closure::once_into_js(start);
            window
                .add_event_listener_with_callback("load", start.unchecked_ref())
                .map_err(js_error)?;
        }
    }

    Ok(())
}

// add the revealed class to animated sections the first time they scroll into view
pub fn observe_reveals(config: &WidgetConfig) -> Result<()> {
    let Some(document) = dom::document() else {
        return Ok(());
    };

    let elements = document
        .query_selector_all(&format!(".{REVEAL_CLASS}"))
        .map_err(js_error)?;

    if elements.length() == 0 {
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };

                if entry.is_intersecting() {
                    dom::set_class(&entry.target(), REVEALED_CLASS, true);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    options.set_root_margin(config.reveal_root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(js_error)?;
    callback.forget();

    for i in 0..elements.length() {
        if let Some(element) = elements.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&element);
        }
    }

    debug!("observing {} animated sections", elements.length());

    Ok(())
}

// in-page anchors scroll smoothly to their target instead of jumping
pub fn smooth_anchors() -> Result<()> {
    let Some(document) = dom::document() else {
        return Ok(());
    };

    let anchors = document
        .query_selector_all(r##"a[href^="#"]"##)
        .map_err(js_error)?;

    for i in 0..anchors.length() {
        let Some(anchor) = anchors.get(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };

        let href = anchor.get_attribute("href").unwrap_or_default();

        let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();

            // a bare "#" is not a valid selector and simply scrolls nowhere
            let Some(target) = dom::document().and_then(|d| d.query_selector(&href).ok().flatten())
            else {
                return;
            };

            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });

        anchor
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            .map_err(js_error)?;
        handler.forget();
    }

    Ok(())
}

// put up the loading indicator as soon as a link click starts navigating away
pub fn navigation_indicator() -> Result<()> {
    let Some(document) = dom::document() else {
        return Ok(());
    };

    let handler = Closure::<dyn FnMut(MouseEvent)>::new(|event: MouseEvent| {
        let Some(link) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|element| element.closest("a").ok().flatten())
        else {
            return;
        };

        if !starts_navigation(
            link.has_attribute("href"),
            link.get_attribute("target").as_deref(),
            event.ctrl_key(),
            event.shift_key(),
        ) {
            return;
        }

        let Some((document, body)) = dom::document().and_then(|d| d.body().map(|body| (d, body)))
        else {
            return;
        };

        match document.create_element("div") {
            Ok(indicator) => {
                dom::set_class(&indicator, LOADING_INDICATOR_CLASS, true);
                if let Err(err) = body.append_child(&indicator) {
                    debug!("failed to show loading indicator: {err:?}");
                }
            }
            Err(err) => debug!("failed to create loading indicator: {err:?}"),
        }
    });

    document
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .map_err(js_error)?;
    handler.forget();

    Ok(())
}
