//! Portfolio Modal Component
//!
//! The overlay presenting one catalog entry's detail. Wires the three
//! dismissal paths to the controller: close control, backdrop click, Escape.
//! A click inside the panel stops propagation so only the backdrop itself
//! dismisses.

use axiomweb_core::{DismissReason, ModalContent};
use dioxus::prelude::*;

/// Portfolio detail overlay
///
/// Hidden (renders nothing) while `content` is `None`. Every field of the
/// content is inserted as a text or attribute node.
#[component]
pub fn PortfolioModal(
    /// Render model from the controller; `Some` while open
    content: Option<ModalContent>,
    /// Called with the dismissal path that closed the modal
    on_dismiss: EventHandler<DismissReason>,
) -> Element {
    let Some(content) = content else {
        return VNode::empty();
    };

    let on_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Escape {
            on_dismiss.call(DismissReason::EscapeKey);
        }
    };

    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "-1",
            autofocus: true,
            onclick: move |_| on_dismiss.call(DismissReason::Backdrop),
            onkeydown: on_keydown,

            div {
                class: "modal-panel",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "close-modal",
                    r#type: "button",
                    "aria-label": "Close",
                    onclick: move |_| on_dismiss.call(DismissReason::CloseControl),
                    "\u{00D7}"
                }

                div { class: "modal-body",
                    img { src: "{content.image_src}", alt: "{content.image_alt}" }
                    h2 { "{content.title}" }
                    p { "{content.description}" }
                    a {
                        class: "btn btn-primary",
                        href: "{content.link_href}",
                        target: "_blank",
                        "Visita il Sito"
                    }
                }
            }
        }
    }
}
