//! UI components for the AxiomWeb site.
//!
//! Each page behavior is an independent component: a missing or empty input
//! renders nothing instead of failing, so one absent feature never takes the
//! rest of the page down.

mod portfolio_grid;
mod portfolio_modal;
mod scroll_reveal;
mod site_header;
mod testimonial_carousel;

pub use portfolio_grid::PortfolioGrid;
pub use portfolio_modal::PortfolioModal;
pub use scroll_reveal::{Reveal, RevealConfig};
pub use site_header::{is_scrolled, SiteHeader, SCROLL_THRESHOLD_PX};
pub use testimonial_carousel::{CarouselConfig, Testimonial, TestimonialCarousel};
