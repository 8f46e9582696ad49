//! Site Header Component
//!
//! Sticky header that compacts once the page scrolls past a threshold, plus
//! the mobile navigation toggle with its menu/x icon swap.

use dioxus::prelude::*;

/// Scroll offset (px) past which the header switches to its compact style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Whether a scroll offset is past the header threshold.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

/// Anchor targets of the single-page navigation.
const NAV_LINKS: &[(&str, &str)] = &[
    ("#services", "Servizi"),
    ("#portfolio", "Portfolio"),
    ("#testimonials", "Testimonianze"),
    ("#contact", "Contatti"),
];

#[derive(Props, Clone, PartialEq)]
pub struct SiteHeaderProps {
    /// Whether the page is scrolled past the threshold
    pub scrolled: bool,
}

/// Sticky site header
///
/// Desktop: logo left, anchor links right.
/// Mobile (< 768px): links collapse behind the menu toggle; the toggle swaps
/// between the menu and x icons and picking a link closes the list again.
#[component]
pub fn SiteHeader(props: SiteHeaderProps) -> Element {
    let mut nav_open = use_signal(|| false);

    rsx! {
        header {
            class: if props.scrolled { "site-header scrolled" } else { "site-header" },

            div { class: "header-inner",
                a { class: "logo", href: "#top", "AxiomWeb" }

                nav {
                    class: if nav_open() { "nav-links active" } else { "nav-links" },
                    for (href, label) in NAV_LINKS {
                        a {
                            class: "nav-link",
                            href: "{href}",
                            onclick: move |_| nav_open.set(false),
                            "{label}"
                        }
                    }
                }

                button {
                    class: "menu-toggle",
                    r#type: "button",
                    "aria-label": "Toggle navigation",
                    "aria-expanded": "{nav_open()}",
                    onclick: move |_| nav_open.set(!nav_open()),

                    if nav_open() {
                        {close_icon()}
                    } else {
                        {menu_icon()}
                    }
                }
            }
        }
    }
}

/// Lucide menu icon (hamburger)
fn menu_icon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            line { x1: "4", y1: "6", x2: "20", y2: "6" }
            line { x1: "4", y1: "12", x2: "20", y2: "12" }
            line { x1: "4", y1: "18", x2: "20", y2: "18" }
        }
    }
}

/// Lucide x icon
fn close_icon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}
