//! Scroll Reveal Component
//!
//! Wrapper standing in for the animate-on-scroll collaborator: a fixed
//! configuration applied as animation attributes on the wrapped section.

use dioxus::prelude::*;

/// Fixed reveal configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealConfig {
    /// Animation duration
    pub duration_ms: u32,
    /// Animate only the first time the section scrolls into view
    pub once: bool,
    /// Offset from the trigger point
    pub offset_px: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            once: true,
            offset_px: 50,
        }
    }
}

impl RevealConfig {
    /// Inline style carrying the animation timing.
    pub fn style(&self) -> String {
        format!("animation-duration: {}ms;", self.duration_ms)
    }
}

/// Reveal-on-scroll wrapper
#[component]
pub fn Reveal(
    /// Wrapped content
    children: Element,
    /// Animation parameters (fixed payload by default)
    #[props(default)]
    config: RevealConfig,
) -> Element {
    rsx! {
        div {
            class: "reveal",
            style: "{config.style()}",
            "data-reveal-once": "{config.once}",
            "data-reveal-offset": "{config.offset_px}",
            {children}
        }
    }
}
