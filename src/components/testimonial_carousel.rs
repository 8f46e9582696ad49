//! Testimonial Carousel Component
//!
//! Looping one-slide carousel with pagination bullets, prev/next arrows and
//! autoplay. The configuration payload is fixed; the carousel is an external
//! collaborator as far as the rest of the page is concerned.

use dioxus::prelude::*;

/// Fixed carousel configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Wrap from the last slide back to the first
    pub looped: bool,
    /// Slides visible at once
    pub slides_per_view: usize,
    /// Gap between slides
    pub space_between_px: u32,
    /// Autoplay interval
    pub autoplay_delay_ms: u64,
    /// Show pagination bullets
    pub pagination: bool,
    /// Show prev/next arrows
    pub navigation: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            looped: true,
            slides_per_view: 1,
            space_between_px: 30,
            autoplay_delay_ms: 5000,
            pagination: true,
            navigation: true,
        }
    }
}

/// One testimonial slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

/// Index of the slide after `current`, wrapping only when looping.
pub fn next_index(current: usize, len: usize, looped: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if current + 1 < len {
        current + 1
    } else if looped {
        0
    } else {
        current
    }
}

/// Index of the slide before `current`, wrapping only when looping.
pub fn prev_index(current: usize, len: usize, looped: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if current > 0 {
        current - 1
    } else if looped {
        len - 1
    } else {
        current
    }
}

/// Testimonial carousel
///
/// Renders nothing when there are no slides.
#[component]
pub fn TestimonialCarousel(
    /// Slides to rotate through
    slides: Vec<Testimonial>,
    /// Carousel parameters (fixed payload by default)
    #[props(default)]
    config: CarouselConfig,
) -> Element {
    if slides.is_empty() {
        return VNode::empty();
    }

    let mut current = use_signal(|| 0usize);
    let len = slides.len();
    let looped = config.looped;
    let delay = config.autoplay_delay_ms;

    // Autoplay: advance on a fixed interval
    use_effect(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
                current.set(next_index(current(), len, looped));
            }
        });
    });

    let slide = &slides[current() % len];

    rsx! {
        div {
            class: "testimonial-carousel",
            style: "--slide-gap: {config.space_between_px}px;",

            figure { class: "testimonial-slide",
                blockquote { class: "testimonial-quote", "\u{201C}{slide.quote}\u{201D}" }
                figcaption { class: "testimonial-author",
                    "{slide.author}"
                    span { class: "testimonial-role", "{slide.role}" }
                }
            }

            if config.navigation {
                button {
                    class: "carousel-arrow carousel-arrow--prev",
                    r#type: "button",
                    "aria-label": "Previous testimonial",
                    onclick: move |_| current.set(prev_index(current(), len, looped)),
                    "\u{2039}"
                }
                button {
                    class: "carousel-arrow carousel-arrow--next",
                    r#type: "button",
                    "aria-label": "Next testimonial",
                    onclick: move |_| current.set(next_index(current(), len, looped)),
                    "\u{203A}"
                }
            }

            if config.pagination {
                div { class: "carousel-pagination",
                    for i in 0..len {
                        button {
                            key: "{i}",
                            class: if i == current() { "carousel-bullet active" } else { "carousel-bullet" },
                            r#type: "button",
                            "aria-label": "Go to testimonial {i + 1}",
                            onclick: move |_| current.set(i),
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_match_fixed_payload() {
        let config = CarouselConfig::default();
        assert!(config.looped);
        assert_eq!(config.slides_per_view, 1);
        assert_eq!(config.space_between_px, 30);
        assert_eq!(config.autoplay_delay_ms, 5000);
        assert!(config.pagination);
        assert!(config.navigation);
    }

    #[test]
    fn stepping_wraps_when_looping() {
        assert_eq!(next_index(0, 3, true), 1);
        assert_eq!(next_index(2, 3, true), 0);
        assert_eq!(prev_index(0, 3, true), 2);
        assert_eq!(prev_index(1, 3, true), 0);
    }

    #[test]
    fn stepping_clamps_without_looping() {
        assert_eq!(next_index(2, 3, false), 2);
        assert_eq!(prev_index(0, 3, false), 0);
    }

    #[test]
    fn empty_slide_list_stays_at_zero() {
        assert_eq!(next_index(0, 0, true), 0);
        assert_eq!(prev_index(0, 0, true), 0);
    }
}
