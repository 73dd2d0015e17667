use std::{cell::RefCell, rc::Rc};

use gloo_timers::callback::{Interval, Timeout};
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{
    Event, EventTarget, HtmlFormElement, HtmlInputElement, Node, ScrollBehavior, ScrollToOptions,
};

use common::{
    binding::*,
    config::WidgetConfig,
    theme::{DARK_CLASS, Theme},
};

use crate::{dom, storage};

// dom side of the UiController
//
// attaches the subscription table to the live page, snapshots each event into a UiEvent and
// applies whatever effects come back.  the controller is only borrowed for the duration of a
// single handle() call, so effects that trigger further events cannot re-enter it
#[derive(Clone)]
pub struct Binder {
    controller: Rc<RefCell<UiController>>,
    config: Rc<WidgetConfig>,
}

impl Binder {
    pub fn new(controller: UiController) -> Self {
        let config = Rc::new(controller.config().clone());

        Binder {
            controller: Rc::new(RefCell::new(controller)),
            config,
        }
    }

    pub fn bind(&self, stage: Stage) {
        debug!(?stage, "binding subscriptions");

        for subscription in subscriptions(stage) {
            self.attach(*subscription);
        }

        let effects = self.controller.borrow_mut().startup(stage, &page_snapshot());
        self.apply_all(effects);
    }

    fn attach(&self, subscription: Subscription) {
        if subscription.target == Target::Clock {
            self.start_clock(subscription.action);
            return;
        }

        let Some(event_name) = subscription.event.dom_name() else {
            return;
        };

        let Some(target) = resolve(subscription.target) else {
            debug!(missing = ?subscription.target, "subscription target absent, feature disabled");
            return;
        };

        let binder = self.clone();
        let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            binder.fire(&subscription, &event);
        });

        match target.add_event_listener_with_callback(event_name, handler.as_ref().unchecked_ref()) {
            // listeners live as long as the page does
            Ok(()) => handler.forget(),
            Err(err) => warn!("failed to attach {event_name} listener: {err:?}"),
        }
    }

    // rotation runs for the lifetime of the page and is not reset by the prev/next buttons
    fn start_clock(&self, action: Action) {
        if dom::find_by_id(CAROUSEL_TRACK_ID).is_none() {
            return;
        }

        let binder = self.clone();
        Interval::new(self.config.rotate_interval_ms, move || {
            binder.dispatch(action, &page_snapshot());
        })
        .forget();
    }

    fn fire(&self, subscription: &Subscription, event: &Event) {
        if subscription.event == EventKind::Submit {
            event.prevent_default();
        }

        let mut ui = page_snapshot();

        match subscription.action {
            Action::Search(_) | Action::RefreshSearch(_) => {
                ui.value = event
                    .target()
                    .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
                    .map(|input| input.value())
                    .unwrap_or_default();
            }
            Action::Subscribe => {
                ui.value = dom::by_id(NEWSLETTER_EMAIL_ID)
                    .and_then(|email| email.dyn_into::<HtmlInputElement>().ok())
                    .map(|input| input.value())
                    .unwrap_or_default();
            }
            Action::DismissResults => ui.within = surface_containing(event.target()),
            _ => {}
        }

        self.dispatch(subscription.action, &ui);
    }

    fn dispatch(&self, action: Action, ui: &UiEvent) {
        let effects = self.controller.borrow_mut().handle(action, ui);
        self.apply_all(effects);
    }

    fn apply_all(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(&self, effect: Effect) {
        match effect {
            Effect::ApplyTheme(theme) => apply_theme(theme),
            Effect::PersistTheme(theme) => storage::store_theme(theme),
            Effect::SetMenuOpen(open) => apply_menu(open),
            Effect::ShowResults { surface, markup } => {
                if let Some(results) = dom::by_id(surface.results_id()) {
                    results.set_inner_html(&markup);
                    dom::set_class(&results, HIDDEN_CLASS, false);
                }
            }
            Effect::HideResults(surface) => {
                if let Some(results) = dom::find_by_id(surface.results_id()) {
                    dom::set_class(&results, HIDDEN_CLASS, true);
                }
            }
            Effect::TranslateTrack(transform) => {
                if let Some(track) = dom::html_by_id(CAROUSEL_TRACK_ID) {
                    dom::set_style(&track, "transform", &transform);
                }
            }
            Effect::ScrollButtonVisible(visible) => {
                if let Some(button) = dom::find_by_id(SCROLL_TO_TOP_ID) {
                    dom::set_class(&button, HIDDEN_CLASS, !visible);
                }
            }
            Effect::ScrollToTop => {
                if let Some(window) = web_sys::window() {
                    let options = ScrollToOptions::new();
                    options.set_top(0.0);
                    options.set_behavior(ScrollBehavior::Smooth);
                    window.scroll_to_with_scroll_to_options(&options);
                }
            }
            Effect::NewsletterAck(message) => self.acknowledge(&message),
        }
    }

    fn acknowledge(&self, message: &str) {
        let Some(status) = dom::html_by_id(NEWSLETTER_MESSAGE_ID) else {
            return;
        };

        status.set_text_content(Some(message));
        dom::set_style(&status, "opacity", "1");

        if let Some(form) = dom::by_id(NEWSLETTER_FORM_ID)
            .and_then(|form| form.dyn_into::<HtmlFormElement>().ok())
        {
            form.reset();
        }

        Timeout::new(self.config.newsletter_message_ms, move || {
            dom::set_style(&status, "opacity", "0");
        })
        .forget();
    }
}

fn page_snapshot() -> UiEvent {
    UiEvent {
        width: dom::viewport_width(),
        scroll_y: dom::scroll_y(),
        ..Default::default()
    }
}

fn resolve(target: Target) -> Option<EventTarget> {
    match target {
        Target::Window => web_sys::window().map(EventTarget::from),
        Target::Document => dom::document().map(EventTarget::from),
        Target::Element(id) => dom::by_id(id).map(EventTarget::from),
        Target::Clock => None,
    }
}

fn surface_containing(target: Option<EventTarget>) -> Option<Surface> {
    let node = target?.dyn_into::<Node>().ok()?;

    Surface::ALL.into_iter().find(|surface| {
        [surface.input_id(), surface.results_id()]
            .into_iter()
            .filter_map(dom::find_by_id)
            .any(|element| element.contains(Some(&node)))
    })
}

fn apply_theme(theme: Theme) {
    if let Some(root) = dom::root() {
        dom::set_class(&root, DARK_CLASS, theme.is_dark());
    }

    // the sun is offered while dark, the moon while light
    if let Some(toggle) = dom::find_by_id(THEME_TOGGLE_ID) {
        if let Some(sun) = dom::child(&toggle, ".sun") {
            dom::set_class(&sun, HIDDEN_CLASS, !theme.is_dark());
        }
        if let Some(moon) = dom::child(&toggle, ".moon") {
            dom::set_class(&moon, HIDDEN_CLASS, theme.is_dark());
        }
    }
}

fn apply_menu(open: bool) {
    if let Some(menu) = dom::by_id(MOBILE_MENU_ID) {
        dom::set_class(&menu, HIDDEN_CLASS, !open);
        dom::set_attr(&menu, "aria-hidden", if open { "false" } else { "true" });
    }

    if let Some(button) = dom::find_by_id(MENU_BUTTON_ID) {
        dom::set_attr(&button, "aria-expanded", if open { "true" } else { "false" });

        if let Some(icon) = dom::child(&button, ".open") {
            dom::set_class(&icon, HIDDEN_CLASS, open);
        }
        if let Some(icon) = dom::child(&button, ".close") {
            dom::set_class(&icon, HIDDEN_CLASS, !open);
        }
    }
}
