//! Portfolio modal controller.
//!
//! A small state machine bound to the modal overlay: at most one entry is
//! open at a time, and every dismissal path closes the overlay and clears
//! its content. The catalog and the state are owned fields, so several
//! controllers can coexist and the lifecycle is testable without a UI.

use crate::catalog::{Catalog, CatalogEntry, ProjectId};

/// Current state of the modal surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    /// No overlay visible
    #[default]
    Closed,
    /// Overlay visible, showing one catalog entry
    Open(CatalogEntry),
}

/// Which dismissal path closed the modal.
///
/// All three are equivalent in effect; the reason only shows up in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The explicit close control inside the panel
    CloseControl,
    /// A pointer activation landing on the backdrop itself
    Backdrop,
    /// An Escape key press anywhere on the page
    EscapeKey,
}

/// Structured render model for the modal body.
///
/// Rebuilt from scratch on every open (full replace, never an incremental
/// patch). Fields are plain text and paths; the UI layer inserts each one as
/// a text or attribute node, so markup-significant characters in catalog
/// content stay literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    /// Heading text
    pub title: String,
    /// Detail image source
    pub image_src: String,
    /// Detail image alt text, always equal to the title
    pub image_alt: String,
    /// Description paragraph
    pub description: String,
    /// Call-to-action target
    pub link_href: String,
}

impl ModalContent {
    fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            title: entry.title.clone(),
            image_src: entry.image.clone(),
            image_alt: entry.title.clone(),
            description: entry.description.clone(),
            link_href: entry.link.clone(),
        }
    }
}

/// The portfolio modal state machine.
#[derive(Debug, Clone)]
pub struct ModalController {
    catalog: Catalog,
    state: ModalState,
}

impl ModalController {
    /// Create a controller over a catalog, starting closed.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: ModalState::Closed,
        }
    }

    /// The catalog this controller resolves triggers against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current modal state.
    pub fn state(&self) -> &ModalState {
        &self.state
    }

    /// Whether the overlay is currently visible.
    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    /// A trigger carrying `id` was activated.
    ///
    /// If the id is present in the catalog the modal opens on that entry and
    /// `true` is returned. An unknown id leaves the state untouched; the miss
    /// is logged but never surfaced to the user.
    pub fn activate(&mut self, id: ProjectId) -> bool {
        match self.catalog.get(id) {
            Some(entry) => {
                tracing::debug!(%id, title = %entry.title, "opening portfolio modal");
                self.state = ModalState::Open(entry.clone());
                true
            }
            None => {
                tracing::warn!(%id, "portfolio trigger references unknown catalog entry");
                false
            }
        }
    }

    /// Close the overlay and clear its content. Idempotent: dismissing while
    /// already closed is a no-op.
    pub fn dismiss(&mut self, reason: DismissReason) {
        if self.state == ModalState::Closed {
            return;
        }
        tracing::debug!(?reason, "closing portfolio modal");
        self.state = ModalState::Closed;
    }

    /// Render model for the modal body: `Some` exactly while open, derived
    /// solely from the open entry.
    pub fn content(&self) -> Option<ModalContent> {
        match &self.state {
            ModalState::Open(entry) => Some(ModalContent::from_entry(entry)),
            ModalState::Closed => None,
        }
    }
}
