use gloo_console::error as console_error;
use tracing::{Level, error, info, warn};
use wasm_bindgen::{JsCast, closure::Closure};
use wasm_bindgen_futures::spawn_local;

use common::{
    binding::{Stage, UiController},
    config::WidgetConfig,
    theme::{DARK_CLASS, resolve_initial},
};

mod binder;
mod dom;
mod homepage;
mod loader;
mod storage;

use binder::Binder;

fn main() {
    if let Err(err) = dioxus_logger::init(Level::DEBUG) {
        console_error!(format!("failed to init logger: {err}"));
    }

    let Some(document) = dom::document() else {
        error!("no document to enhance");
        return;
    };

    if document.ready_state() == "loading" {
        let start = Closure::once_into_js(start);
        if let Err(err) =
            document.add_event_listener_with_callback("DOMContentLoaded", start.unchecked_ref())
        {
            error!("failed to wait for DOMContentLoaded: {err:?}");
        }
    } else {
        start();
    }
}

fn start() {
    let config = WidgetConfig::default();

    let root_has_dark = dom::root().is_some_and(|root| dom::has_class(&root, DARK_CLASS));
    let theme = resolve_initial(storage::stored_theme().as_deref(), root_has_dark);

    info!("starting page scripts with {theme} theme");

    let binder = Binder::new(UiController::new(
        theme,
        homepage::total_slides(),
        config.clone(),
    ));

    binder.bind(Stage::Page);

    // each of these is independent of the others, a failure only loses that one widget
    if let Err(err) = homepage::dismiss_loading_screen(&config) {
        warn!("loading screen disabled: {err}");
    }
    if let Err(err) = homepage::observe_reveals(&config) {
        warn!("scroll reveal disabled: {err}");
    }
    if let Err(err) = homepage::smooth_anchors() {
        warn!("smooth anchors disabled: {err}");
    }
    if let Err(err) = homepage::navigation_indicator() {
        warn!("navigation indicator disabled: {err}");
    }

    // navbar features can only be bound once both fragments have landed
    spawn_local(async move {
        loader::load_fragments().await;

        info!("fragments loaded, binding navbar");
        binder.bind(Stage::Fragments);
    });
}
