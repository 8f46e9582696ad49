//! Portfolio Grid Component
//!
//! The grid of portfolio cards. Each card is a trigger carrying its catalog
//! id; clicking one asks the page to open the modal for that entry.

use axiomweb_core::{CatalogEntry, ProjectId};
use dioxus::prelude::*;

/// Grid of portfolio cards
///
/// Renders nothing when the catalog is empty.
#[component]
pub fn PortfolioGrid(
    /// Catalog entries to display, in order
    entries: Vec<CatalogEntry>,
    /// Trigger handler (receives the card's project id)
    on_activate: EventHandler<ProjectId>,
) -> Element {
    if entries.is_empty() {
        return VNode::empty();
    }

    rsx! {
        div { class: "portfolio-grid",
            for entry in entries.iter() {
                {
                    let id = entry.id;
                    rsx! {
                        div {
                            key: "{entry.id}",
                            class: "portfolio-card",
                            onclick: move |_| on_activate.call(id),

                            img {
                                src: "{entry.image}",
                                alt: "{entry.title}",
                                class: "portfolio-card__img",
                            }
                            div { class: "portfolio-card__label", "{entry.title}" }
                        }
                    }
                }
            }
        }
    }
}
