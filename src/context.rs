//! Shared context for the AxiomWeb app.
//!
//! Provides the portfolio catalog to all components via use_context.

use axiomweb_core::Catalog;
use dioxus::prelude::*;

/// Hook to access the portfolio catalog from context.
///
/// The catalog is constructed once in [`crate::app::App`] and never mutated.
pub fn use_catalog() -> Signal<Catalog> {
    use_context::<Signal<Catalog>>()
}
