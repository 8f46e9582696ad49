use axiomweb_core::Catalog;
use dioxus::prelude::*;

use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// The marketing site is a single page; sections are reached via anchors.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles, the portfolio catalog context, and routing.
#[component]
pub fn App() -> Element {
    // The catalog is built once at startup and read-only afterwards
    let catalog: Signal<Catalog> = use_signal(Catalog::builtin);
    use_context_provider(|| catalog);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
