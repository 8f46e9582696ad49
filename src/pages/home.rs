//! Home page - the single marketing page.
//!
//! Composes the independent page behaviors: sticky header, scroll-revealed
//! sections, portfolio grid with its modal, testimonial carousel, contact.

use axiomweb_core::{CatalogEntry, ModalController};
use dioxus::document;
use dioxus::prelude::*;

use crate::components::{
    is_scrolled, PortfolioGrid, PortfolioModal, Reveal, SiteHeader, Testimonial,
    TestimonialCarousel,
};
use crate::context::use_catalog;

/// The services advertised on the page.
const SERVICES: &[(&str, &str)] = &[
    (
        "Siti Vetrina",
        "Presenza online elegante e professionale per la tua attività, \
         ottimizzata per ogni dispositivo.",
    ),
    (
        "E-Commerce",
        "Vendi i tuoi prodotti online con un negozio sicuro, veloce e \
         semplice da gestire.",
    ),
    (
        "Restyling",
        "Il tuo sito è datato? Lo rinnoviamo con un design moderno senza \
         perdere i tuoi contenuti.",
    ),
];

/// Home page component.
#[component]
pub fn Home() -> Element {
    let catalog = use_catalog();
    let mut modal = use_signal(|| ModalController::new(catalog()));
    let mut scrolled = use_signal(|| false);

    let entries: Vec<CatalogEntry> = catalog().entries().cloned().collect();
    let content = modal.read().content();

    // The page div is the scroll container; read its offset after each
    // scroll event and derive the header state from the threshold.
    let on_scroll = move |_| {
        spawn(async move {
            let mut eval = document::eval(
                "dioxus.send(document.getElementById('page-scroll').scrollTop);",
            );
            if let Ok(y) = eval.recv::<f64>().await {
                scrolled.set(is_scrolled(y));
            }
        });
    };

    rsx! {
        div {
            id: "page-scroll",
            class: "page",
            onscroll: on_scroll,

            SiteHeader { scrolled: scrolled() }

            main {
                // Hero
                section { id: "top", class: "hero",
                    h1 { class: "hero-title", "Il tuo sito web, fatto bene." }
                    p { class: "hero-tagline",
                        "Progettiamo siti veloci, curati e su misura per piccole \
                         attività e professionisti."
                    }
                    a { class: "btn btn-primary", href: "#contact", "Richiedi un preventivo" }
                }

                // Services
                section { id: "services", class: "section",
                    h2 { class: "section-title", "Servizi" }
                    Reveal {
                        div { class: "services-grid",
                            for (name, blurb) in SERVICES {
                                div { key: "{name}", class: "service-card",
                                    h3 { class: "service-card__title", "{name}" }
                                    p { class: "service-card__blurb", "{blurb}" }
                                }
                            }
                        }
                    }
                }

                // Portfolio
                section { id: "portfolio", class: "section",
                    h2 { class: "section-title", "Portfolio" }
                    Reveal {
                        PortfolioGrid {
                            entries: entries,
                            on_activate: move |id| {
                                modal.write().activate(id);
                            },
                        }
                    }
                }

                // Testimonials
                section { id: "testimonials", class: "section section--tinted",
                    h2 { class: "section-title", "Testimonianze" }
                    TestimonialCarousel { slides: sample_testimonials() }
                }

                // Contact
                section { id: "contact", class: "section",
                    h2 { class: "section-title", "Contatti" }
                    p { class: "contact-blurb",
                        "Raccontaci il tuo progetto: ti rispondiamo entro un giorno \
                         lavorativo."
                    }
                    a { class: "btn btn-primary", href: "mailto:info@axiomweb.example", "Scrivici" }
                }
            }

            footer { class: "site-footer",
                p { "\u{00A9} AxiomWeb. Tutti i diritti riservati." }
            }

            PortfolioModal {
                content: content,
                on_dismiss: move |reason| {
                    modal.write().dismiss(reason);
                },
            }
        }
    }
}

/// The three testimonials rotated by the carousel.
fn sample_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "Professionali e veloci: il nuovo sito ha raddoppiato le \
                    prenotazioni in due mesi."
                .into(),
            author: "Marco R.".into(),
            role: "La Barberia Stilosa".into(),
        },
        Testimonial {
            quote: "Il menu digitale è un successo, i clienti lo adorano. \
                    Consigliatissimi."
                .into(),
            author: "Lucia B.".into(),
            role: "Ristorante La Brace".into(),
        },
        Testimonial {
            quote: "Hanno capito subito lo stile dello studio e lo hanno \
                    trasformato in un portfolio impeccabile."
                .into(),
            author: "Elena V.".into(),
            role: "Studio Design Interni".into(),
        },
    ]
}
