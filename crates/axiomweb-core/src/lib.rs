//! AxiomWeb Core Library
//!
//! The non-UI half of the AxiomWeb marketing site: the static portfolio
//! catalog, the modal controller that presents catalog entries, and the
//! site build step that copies passthrough assets into the output directory.
//!
//! ## Overview
//!
//! The site itself is static. The one piece of real logic is the
//! [`ModalController`]: a small state machine that opens an overlay with a
//! single catalog entry's detail and guarantees the overlay is closed and
//! cleared on every dismissal path. Everything else is glue around it.
//!
//! ## Quick Start
//!
//! ```
//! use axiomweb_core::{Catalog, DismissReason, ModalController, ProjectId};
//!
//! let mut modal = ModalController::new(Catalog::builtin());
//!
//! // A portfolio card was clicked
//! modal.activate(ProjectId(1));
//! assert!(modal.is_open());
//!
//! // Escape was pressed
//! modal.dismiss(DismissReason::EscapeKey);
//! assert!(modal.content().is_none());
//! ```

pub mod catalog;
pub mod error;
pub mod modal;
pub mod site;

// Re-exports
pub use catalog::{Catalog, CatalogEntry, ProjectId};
pub use error::SiteError;
pub use modal::{DismissReason, ModalContent, ModalController, ModalState};
pub use site::{BuildReport, SiteConfig, DEFAULT_PASSTHROUGH, INCLUDES_DIR, OUTPUT_DIR};
