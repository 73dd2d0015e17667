use std::collections::HashSet;

use tracing::debug;

use crate::{
    carousel::Carousel,
    catalog::{ArticleRecord, CATALOG},
    config::WidgetConfig,
    search::{filter, is_searchable, render_results},
    theme::Theme,
};

// page element ids
//
// these must agree with the markup in components/navbar.html and the page templates
pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const MENU_BUTTON_ID: &str = "mobileMenuBtn";
pub const MOBILE_MENU_ID: &str = "mobileMenu";
pub const CAROUSEL_TRACK_ID: &str = "carouselTrack";
pub const CAROUSEL_PREV_ID: &str = "carouselPrev";
pub const CAROUSEL_NEXT_ID: &str = "carouselNext";
pub const SCROLL_TO_TOP_ID: &str = "scrollToTop";
pub const NEWSLETTER_FORM_ID: &str = "newsletterForm";
pub const NEWSLETTER_EMAIL_ID: &str = "newsletterEmail";
pub const NEWSLETTER_MESSAGE_ID: &str = "newsletterMessage";
pub const LOADING_SCREEN_ID: &str = "loadingScreen";

pub const HIDDEN_CLASS: &str = "hidden";
pub const REVEAL_CLASS: &str = "animate-on-scroll";
pub const REVEALED_CLASS: &str = "visible";
pub const LOADING_INDICATOR_CLASS: &str = "loading-indicator";

// the two search boxes, each with its own results dropdown
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    Desktop,
    Mobile,
}

impl Surface {
    pub const ALL: [Surface; 2] = [Surface::Desktop, Surface::Mobile];

    pub fn input_id(self) -> &'static str {
        match self {
            Surface::Desktop => "searchInput",
            Surface::Mobile => "mobileSearchInput",
        }
    }

    pub fn results_id(self) -> &'static str {
        match self {
            Surface::Desktop => "searchResults",
            Surface::Mobile => "mobileSearchResults",
        }
    }
}

// when a subscription can be attached: page elements exist as soon as the script runs,
// navbar elements only once the fragments are in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Page,
    Fragments,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Input,
    Focus,
    Resize,
    Scroll,
    Submit,
    // fired by the rotation interval, not the dom
    Tick,
}

impl EventKind {
    pub fn dom_name(self) -> Option<&'static str> {
        match self {
            EventKind::Click => Some("click"),
            EventKind::Input => Some("input"),
            EventKind::Focus => Some("focus"),
            EventKind::Resize => Some("resize"),
            EventKind::Scroll => Some("scroll"),
            EventKind::Submit => Some("submit"),
            EventKind::Tick => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Window,
    Document,
    Clock,
    Element(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ToggleTheme,
    ToggleMenu,
    Search(Surface),
    // focus re-runs the search, but only for a query that is already long enough
    RefreshSearch(Surface),
    DismissResults,
    CarouselPrev,
    CarouselNext,
    CarouselResize,
    CarouselRotate,
    ScrollVisibility,
    ScrollToTop,
    Subscribe,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subscription {
    pub stage: Stage,
    pub event: EventKind,
    pub target: Target,
    pub action: Action,
}

const fn sub(stage: Stage, event: EventKind, target: Target, action: Action) -> Subscription {
    Subscription {
        stage,
        event,
        target,
        action,
    }
}

// everything the page listens to
//
// the binder walks this once per stage; a target that is missing from the page simply
// drops its subscriptions
pub const SUBSCRIPTIONS: &[Subscription] = &[
    sub(Stage::Fragments, EventKind::Click, Target::Element(THEME_TOGGLE_ID), Action::ToggleTheme),
    sub(Stage::Fragments, EventKind::Click, Target::Element(MENU_BUTTON_ID), Action::ToggleMenu),
    sub(Stage::Fragments, EventKind::Input, Target::Element("searchInput"), Action::Search(Surface::Desktop)),
    sub(Stage::Fragments, EventKind::Focus, Target::Element("searchInput"), Action::RefreshSearch(Surface::Desktop)),
    sub(Stage::Fragments, EventKind::Input, Target::Element("mobileSearchInput"), Action::Search(Surface::Mobile)),
    sub(Stage::Fragments, EventKind::Focus, Target::Element("mobileSearchInput"), Action::RefreshSearch(Surface::Mobile)),
    sub(Stage::Fragments, EventKind::Click, Target::Document, Action::DismissResults),
    sub(Stage::Page, EventKind::Click, Target::Element(CAROUSEL_PREV_ID), Action::CarouselPrev),
    sub(Stage::Page, EventKind::Click, Target::Element(CAROUSEL_NEXT_ID), Action::CarouselNext),
    sub(Stage::Page, EventKind::Resize, Target::Window, Action::CarouselResize),
    sub(Stage::Page, EventKind::Tick, Target::Clock, Action::CarouselRotate),
    sub(Stage::Page, EventKind::Scroll, Target::Window, Action::ScrollVisibility),
    sub(Stage::Page, EventKind::Click, Target::Element(SCROLL_TO_TOP_ID), Action::ScrollToTop),
    sub(Stage::Page, EventKind::Submit, Target::Element(NEWSLETTER_FORM_ID), Action::Subscribe),
];

pub fn subscriptions(stage: Stage) -> impl Iterator<Item = &'static Subscription> {
    SUBSCRIPTIONS.iter().filter(move |s| s.stage == stage)
}

// snapshot of the page taken by the binder when an event fires
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiEvent {
    pub width: f64,
    pub scroll_y: f64,
    // current value of the input that fired, or the newsletter email on submit
    pub value: String,
    // search surface whose input or results contain the click target
    pub within: Option<Surface>,
}

impl UiEvent {
    pub fn text(value: &str) -> Self {
        UiEvent {
            value: value.to_owned(),
            ..Default::default()
        }
    }

    pub fn viewport(width: f64) -> Self {
        UiEvent {
            width,
            ..Default::default()
        }
    }

    pub fn scrolled(scroll_y: f64) -> Self {
        UiEvent {
            scroll_y,
            ..Default::default()
        }
    }

    pub fn click_within(within: Option<Surface>) -> Self {
        UiEvent {
            within,
            ..Default::default()
        }
    }
}

// what the binder needs to do to the page
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    ApplyTheme(Theme),
    PersistTheme(Theme),
    SetMenuOpen(bool),
    ShowResults { surface: Surface, markup: String },
    HideResults(Surface),
    TranslateTrack(String),
    ScrollButtonVisible(bool),
    ScrollToTop,
    NewsletterAck(String),
}

pub fn newsletter_message(email: &str) -> String {
    format!("Thanks for subscribing with {email}! Check your inbox for confirmation.")
}

// whether a click on a link leaves the page in the current tab, which is when the loading
// indicator goes up.  an empty target attribute counts as no target
pub fn starts_navigation(has_href: bool, target: Option<&str>, ctrl: bool, shift: bool) -> bool {
    has_href && target.is_none_or(str::is_empty) && !ctrl && !shift
}

// page state behind every subscription
//
// constructed once at startup; the browser crate owns it and translates the returned effects
// into dom changes, so every handler here can be driven with synthetic events
#[derive(Clone, Debug)]
pub struct UiController {
    theme: Theme,
    menu_open: bool,
    carousel: Carousel,
    shown: HashSet<Surface>,
    scroll_button: bool,
    catalog: &'static [ArticleRecord],
    config: WidgetConfig,
}

impl UiController {
    pub fn new(theme: Theme, total_slides: usize, config: WidgetConfig) -> Self {
        Self::with_catalog(theme, total_slides, config, CATALOG)
    }

    pub fn with_catalog(
        theme: Theme,
        total_slides: usize,
        config: WidgetConfig,
        catalog: &'static [ArticleRecord],
    ) -> Self {
        UiController {
            theme,
            menu_open: false,
            carousel: Carousel::new(total_slides),
            shown: HashSet::new(),
            scroll_button: false,
            catalog,
            config,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn results_shown(&self, surface: Surface) -> bool {
        self.shown.contains(&surface)
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    // effects to apply right after a stage is bound
    pub fn startup(&mut self, stage: Stage, event: &UiEvent) -> Vec<Effect> {
        match stage {
            Stage::Page => {
                let mut effects = vec![Effect::ApplyTheme(self.theme)];
                effects.extend(self.carousel_effects(event.width));
                effects
            }
            // the toggle icons only exist once the navbar is in
            Stage::Fragments => vec![Effect::ApplyTheme(self.theme)],
        }
    }

    pub fn handle(&mut self, action: Action, event: &UiEvent) -> Vec<Effect> {
        debug!(?action, "handling ui event");

        match action {
            Action::ToggleTheme => {
                let theme = self.toggle_theme();
                vec![Effect::ApplyTheme(theme), Effect::PersistTheme(theme)]
            }
            Action::ToggleMenu => vec![Effect::SetMenuOpen(self.toggle_menu())],
            Action::Search(surface) => self.search(surface, &event.value),
            Action::RefreshSearch(surface) => {
                if is_searchable(&event.value) {
                    self.search(surface, &event.value)
                } else {
                    Vec::new()
                }
            }
            Action::DismissResults => {
                let hide: Vec<Surface> = Surface::ALL
                    .into_iter()
                    .filter(|s| Some(*s) != event.within && self.shown.contains(s))
                    .collect();

                hide.into_iter()
                    .map(|surface| {
                        self.shown.remove(&surface);
                        Effect::HideResults(surface)
                    })
                    .collect()
            }
            Action::CarouselPrev => {
                self.carousel.retreat();
                self.carousel_effects(event.width)
            }
            Action::CarouselNext => {
                self.carousel.advance(event.width);
                self.carousel_effects(event.width)
            }
            Action::CarouselResize => {
                self.carousel.recompute(event.width);
                self.carousel_effects(event.width)
            }
            Action::CarouselRotate => {
                self.carousel.wrap_advance(event.width);
                self.carousel_effects(event.width)
            }
            Action::ScrollVisibility => {
                let visible = event.scroll_y > self.config.scroll_top_threshold;
                if visible == self.scroll_button {
                    return Vec::new();
                }
                self.scroll_button = visible;
                vec![Effect::ScrollButtonVisible(visible)]
            }
            Action::ScrollToTop => vec![Effect::ScrollToTop],
            Action::Subscribe => vec![Effect::NewsletterAck(newsletter_message(&event.value))],
        }
    }

    fn search(&mut self, surface: Surface, query: &str) -> Vec<Effect> {
        match render_results(&filter(query, self.catalog)) {
            Some(markup) => {
                self.shown.insert(surface);
                vec![Effect::ShowResults { surface, markup }]
            }
            None => {
                self.shown.remove(&surface);
                vec![Effect::HideResults(surface)]
            }
        }
    }

    fn carousel_effects(&mut self, width: f64) -> Vec<Effect> {
        if self.carousel.total() == 0 {
            return Vec::new();
        }

        // the track position is always re-derived, so clamp first as a resize would
        self.carousel.recompute(width);
        vec![Effect::TranslateTrack(self.carousel.transform(width))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::NO_RESULTS_TEXT;

    fn controller(slides: usize) -> UiController {
        UiController::new(Theme::Light, slides, WidgetConfig::default())
    }

    fn run(ctl: &mut UiController, target: Target, event: EventKind, ui: &UiEvent) -> Vec<Effect> {
        SUBSCRIPTIONS
            .iter()
            .filter(|s| s.target == target && s.event == event)
            .flat_map(|s| ctl.handle(s.action, ui))
            .collect()
    }

    #[test]
    fn every_dom_subscription_has_a_dom_event() {
        for s in SUBSCRIPTIONS {
            match s.target {
                Target::Clock => assert_eq!(s.event.dom_name(), None),
                _ => assert!(s.event.dom_name().is_some(), "{s:?}"),
            }
        }
    }

    #[test]
    fn navbar_subscriptions_wait_for_fragments() {
        let fragment_targets: Vec<Target> = subscriptions(Stage::Fragments).map(|s| s.target).collect();

        assert!(fragment_targets.contains(&Target::Element(THEME_TOGGLE_ID)));
        for surface in Surface::ALL {
            assert!(fragment_targets.contains(&Target::Element(surface.input_id())));
        }
        assert!(subscriptions(Stage::Page).all(|s| s.target != Target::Element(THEME_TOGGLE_ID)));
    }

    #[test]
    fn theme_toggle_applies_and_persists() {
        let mut ctl = controller(0);

        let effects = run(&mut ctl, Target::Element(THEME_TOGGLE_ID), EventKind::Click, &UiEvent::default());
        assert_eq!(effects, vec![Effect::ApplyTheme(Theme::Dark), Effect::PersistTheme(Theme::Dark)]);

        assert_eq!(ctl.toggle_theme(), Theme::Light);
        assert_eq!(ctl.theme(), Theme::Light);
    }

    #[test]
    fn menu_toggle_alternates() {
        let mut ctl = controller(0);
        let click = UiEvent::default();

        assert_eq!(ctl.handle(Action::ToggleMenu, &click), vec![Effect::SetMenuOpen(true)]);
        assert_eq!(ctl.handle(Action::ToggleMenu, &click), vec![Effect::SetMenuOpen(false)]);
        assert!(!ctl.menu_open());
    }

    #[test]
    fn typing_shows_then_hides_results() {
        let mut ctl = controller(0);
        let input = Target::Element(Surface::Desktop.input_id());

        let effects = run(&mut ctl, input, EventKind::Input, &UiEvent::text("et"));
        assert!(matches!(effects.as_slice(), [Effect::ShowResults { surface: Surface::Desktop, .. }]));
        assert!(ctl.results_shown(Surface::Desktop));

        let effects = run(&mut ctl, input, EventKind::Input, &UiEvent::text("e"));
        assert_eq!(effects, vec![Effect::HideResults(Surface::Desktop)]);
        assert!(!ctl.results_shown(Surface::Desktop));
    }

    #[test]
    fn no_match_still_shows_the_surface() {
        let mut ctl = controller(0);

        let effects = ctl.handle(Action::Search(Surface::Mobile), &UiEvent::text("zz-no-match"));
        match effects.as_slice() {
            [Effect::ShowResults { surface, markup }] => {
                assert_eq!(*surface, Surface::Mobile);
                assert!(markup.contains(NO_RESULTS_TEXT));
            }
            other => panic!("unexpected effects {other:?}"),
        }
    }

    #[test]
    fn surfaces_are_independent() {
        let mut ctl = controller(0);

        ctl.handle(Action::Search(Surface::Desktop), &UiEvent::text("ethics"));
        ctl.handle(Action::Search(Surface::Mobile), &UiEvent::text("x"));

        assert!(ctl.results_shown(Surface::Desktop));
        assert!(!ctl.results_shown(Surface::Mobile));
    }

    #[test]
    fn focus_only_searches_long_queries() {
        let mut ctl = controller(0);

        assert!(ctl.handle(Action::RefreshSearch(Surface::Desktop), &UiEvent::text("e")).is_empty());
        assert_eq!(
            ctl.handle(Action::RefreshSearch(Surface::Desktop), &UiEvent::text("food")).len(),
            1
        );
    }

    #[test]
    fn outside_click_hides_open_results() {
        let mut ctl = controller(0);
        ctl.handle(Action::Search(Surface::Desktop), &UiEvent::text("food"));
        ctl.handle(Action::Search(Surface::Mobile), &UiEvent::text("food"));

        // a click inside the desktop dropdown keeps it open
        let effects = run(
            &mut ctl,
            Target::Document,
            EventKind::Click,
            &UiEvent::click_within(Some(Surface::Desktop)),
        );
        assert_eq!(effects, vec![Effect::HideResults(Surface::Mobile)]);

        let effects = ctl.handle(Action::DismissResults, &UiEvent::click_within(None));
        assert_eq!(effects, vec![Effect::HideResults(Surface::Desktop)]);

        assert!(ctl.handle(Action::DismissResults, &UiEvent::click_within(None)).is_empty());
    }

    #[test]
    fn carousel_buttons_move_the_track() {
        let mut ctl = controller(5);
        let wide = UiEvent::viewport(1280.0);

        let effects = run(&mut ctl, Target::Element(CAROUSEL_NEXT_ID), EventKind::Click, &wide);
        assert_eq!(effects, vec![Effect::TranslateTrack(String::from("translateX(-33.333333333333336%)"))]);

        ctl.handle(Action::CarouselNext, &wide);
        ctl.handle(Action::CarouselNext, &wide);
        assert_eq!(ctl.carousel().current(), 2);

        ctl.handle(Action::CarouselPrev, &wide);
        assert_eq!(ctl.carousel().current(), 1);
    }

    #[test]
    fn rotation_wraps_and_ignores_manual_moves() {
        let mut ctl = controller(5);
        let wide = UiEvent::viewport(1280.0);

        ctl.handle(Action::CarouselNext, &wide);
        ctl.handle(Action::CarouselNext, &wide);

        let effects = run(&mut ctl, Target::Clock, EventKind::Tick, &wide);
        assert_eq!(effects, vec![Effect::TranslateTrack(String::from("translateX(0%)"))]);
        assert_eq!(ctl.carousel().current(), 0);
    }

    #[test]
    fn resize_clamps_the_index() {
        let mut ctl = controller(5);

        for _ in 0..4 {
            ctl.handle(Action::CarouselNext, &UiEvent::viewport(400.0));
        }
        assert_eq!(ctl.carousel().current(), 4);

        let effects = run(&mut ctl, Target::Window, EventKind::Resize, &UiEvent::viewport(1280.0));
        assert_eq!(ctl.carousel().current(), 2);
        assert_eq!(effects, vec![Effect::TranslateTrack(String::from("translateX(-66.66666666666667%)"))]);
    }

    #[test]
    fn pages_without_slides_get_no_carousel_effects() {
        let mut ctl = controller(0);
        let wide = UiEvent::viewport(1280.0);

        for action in [Action::CarouselPrev, Action::CarouselNext, Action::CarouselResize, Action::CarouselRotate] {
            assert!(ctl.handle(action, &wide).is_empty());
        }
        assert_eq!(ctl.carousel().current(), 0);
        assert_eq!(ctl.startup(Stage::Page, &wide), vec![Effect::ApplyTheme(Theme::Light)]);
    }

    #[test]
    fn startup_positions_the_track() {
        let mut ctl = UiController::new(Theme::Dark, 4, WidgetConfig::default());

        assert_eq!(
            ctl.startup(Stage::Page, &UiEvent::viewport(800.0)),
            vec![Effect::ApplyTheme(Theme::Dark), Effect::TranslateTrack(String::from("translateX(0%)"))]
        );
        assert_eq!(
            ctl.startup(Stage::Fragments, &UiEvent::viewport(800.0)),
            vec![Effect::ApplyTheme(Theme::Dark)]
        );
    }

    #[test]
    fn late_fragments_keep_page_state() {
        let mut ctl = UiController::new(Theme::Dark, 6, WidgetConfig::default());
        let wide = UiEvent::viewport(1200.0);

        ctl.startup(Stage::Page, &wide);
        ctl.handle(Action::CarouselNext, &wide);
        ctl.handle(Action::CarouselRotate, &wide);

        // the navbar lands after the page has been running for a while
        assert_eq!(ctl.startup(Stage::Fragments, &wide), vec![Effect::ApplyTheme(Theme::Dark)]);
        assert_eq!(ctl.carousel().current(), 2);
        assert!(!ctl.menu_open());

        let effects = run(&mut ctl, Target::Element(THEME_TOGGLE_ID), EventKind::Click, &wide);
        assert_eq!(effects, vec![Effect::ApplyTheme(Theme::Light), Effect::PersistTheme(Theme::Light)]);
    }

    #[test]
    fn scroll_button_only_reports_changes() {
        let mut ctl = controller(0);

        assert!(ctl.handle(Action::ScrollVisibility, &UiEvent::scrolled(100.0)).is_empty());
        assert_eq!(
            ctl.handle(Action::ScrollVisibility, &UiEvent::scrolled(501.0)),
            vec![Effect::ScrollButtonVisible(true)]
        );
        assert!(ctl.handle(Action::ScrollVisibility, &UiEvent::scrolled(900.0)).is_empty());
        assert_eq!(
            ctl.handle(Action::ScrollVisibility, &UiEvent::scrolled(500.0)),
            vec![Effect::ScrollButtonVisible(false)]
        );
    }

    #[test]
    fn plain_link_clicks_start_navigation() {
        assert!(starts_navigation(true, None, false, false));
        assert!(starts_navigation(true, Some(""), false, false));
    }

    #[test]
    fn new_tab_and_modified_clicks_do_not() {
        assert!(!starts_navigation(false, None, false, false));
        assert!(!starts_navigation(true, Some("_blank"), false, false));
        assert!(!starts_navigation(true, None, true, false));
        assert!(!starts_navigation(true, None, false, true));
    }

    #[test]
    fn newsletter_acknowledges_the_address() {
        let mut ctl = controller(0);

        let effects = run(
            &mut ctl,
            Target::Element(NEWSLETTER_FORM_ID),
            EventKind::Submit,
            &UiEvent::text("reader@example.org"),
        );
        assert_eq!(
            effects,
            vec![Effect::NewsletterAck(String::from(
                "Thanks for subscribing with reader@example.org! Check your inbox for confirmation."
            ))]
        );
    }
}
