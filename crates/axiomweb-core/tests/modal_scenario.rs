//! End-to-end scenario for the portfolio modal
//!
//! Walks the full interaction the page performs: a card click opens the
//! overlay with the entry's detail, Escape closes it and empties the body.

use axiomweb_core::{Catalog, CatalogEntry, DismissReason, ModalController, ProjectId};

fn barberia_catalog() -> Catalog {
    Catalog::new([CatalogEntry {
        id: ProjectId(1),
        title: "La Barberia Stilosa".into(),
        image: "images/barber-at-work.jpg".into(),
        description: "Un sito vetrina elegante e moderno per una barberia di lusso.".into(),
        link: "#".into(),
    }])
}

#[test]
fn card_click_then_escape() {
    let mut modal = ModalController::new(barberia_catalog());

    // Trigger with id 1 activated
    assert!(modal.activate(ProjectId(1)));
    assert!(modal.is_open());

    let content = modal.content().expect("modal visible with content");
    assert_eq!(content.image_src, "images/barber-at-work.jpg");
    assert_eq!(content.image_alt, "La Barberia Stilosa");
    assert_eq!(content.title, "La Barberia Stilosa");
    assert!(content.description.starts_with("Un sito vetrina"));
    assert_eq!(content.link_href, "#");

    // Escape pressed
    modal.dismiss(DismissReason::EscapeKey);
    assert!(!modal.is_open());
    assert!(modal.content().is_none());
}

#[test]
fn markup_in_catalog_content_stays_literal_data() {
    // The render model carries raw text; nothing interprets it as markup.
    let mut modal = ModalController::new(Catalog::new([CatalogEntry {
        id: ProjectId(1),
        title: "<script>alert(1)</script>".into(),
        image: "images/x.jpg".into(),
        description: "a < b & b > c".into(),
        link: "#".into(),
    }]));

    modal.activate(ProjectId(1));
    let content = modal.content().unwrap();
    assert_eq!(content.title, "<script>alert(1)</script>");
    assert_eq!(content.image_alt, "<script>alert(1)</script>");
    assert_eq!(content.description, "a < b & b > c");
}

#[test]
fn empty_catalog_disables_every_trigger() {
    let mut modal = ModalController::new(Catalog::default());
    assert!(modal.catalog().is_empty());
    assert!(!modal.activate(ProjectId(1)));
    assert!(modal.content().is_none());
}
