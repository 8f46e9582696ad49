//! Global CSS styles for the AxiomWeb site.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Palette */
  --ink: #1b1f2a;
  --ink-soft: #4a5161;
  --paper: #ffffff;
  --paper-tint: #f4f6fb;
  --accent: #3b5bdb;
  --accent-dark: #2f4bc0;
  --accent-glow: rgba(59, 91, 219, 0.25);
  --line: #e3e7f0;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', Helvetica, Arial, sans-serif;

  /* Layout */
  --header-height: 72px;
  --header-height-compact: 56px;
  --content-width: 1080px;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
}

body {
  font-family: var(--font-sans);
  background: var(--paper);
  color: var(--ink);
  line-height: 1.7;
}

/* === Page Scroll Container === */
.page {
  height: 100vh;
  overflow-y: auto;
  scroll-behavior: smooth;
}

/* === Sticky Header === */
.site-header {
  position: sticky;
  top: 0;
  z-index: 100;
  background: rgba(255, 255, 255, 0.92);
  border-bottom: 1px solid transparent;
  transition: all var(--transition-normal);
}

.site-header.scrolled {
  border-bottom-color: var(--line);
  box-shadow: 0 4px 16px rgba(27, 31, 42, 0.08);
  backdrop-filter: blur(8px);
}

.header-inner {
  max-width: var(--content-width);
  margin: 0 auto;
  height: var(--header-height);
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 1.5rem;
  transition: height var(--transition-normal);
}

.site-header.scrolled .header-inner {
  height: var(--header-height-compact);
}

.logo {
  font-size: 1.4rem;
  font-weight: 800;
  letter-spacing: -0.02em;
  color: var(--ink);
  text-decoration: none;
}

.nav-links {
  display: flex;
  gap: 2rem;
}

.nav-link {
  color: var(--ink-soft);
  text-decoration: none;
  font-weight: 500;
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--accent);
}

.menu-toggle {
  display: none;
  background: none;
  border: none;
  color: var(--ink);
  cursor: pointer;
  padding: 0.4rem;
}

/* === Hero === */
.hero {
  max-width: var(--content-width);
  margin: 0 auto;
  padding: 7rem 1.5rem 5rem;
  text-align: center;
}

.hero-title {
  font-size: 3rem;
  font-weight: 800;
  letter-spacing: -0.03em;
}

.hero-tagline {
  margin: 1rem auto 2.5rem;
  max-width: 38rem;
  font-size: 1.2rem;
  color: var(--ink-soft);
}

/* === Sections === */
.section {
  max-width: var(--content-width);
  margin: 0 auto;
  padding: 4.5rem 1.5rem;
}

.section--tinted {
  max-width: none;
  background: var(--paper-tint);
}

.section--tinted > * {
  max-width: var(--content-width);
  margin-left: auto;
  margin-right: auto;
}

.section-title {
  font-size: 2rem;
  font-weight: 700;
  margin-bottom: 2rem;
  text-align: center;
}

/* === Buttons === */
.btn {
  display: inline-block;
  padding: 0.8rem 1.8rem;
  border-radius: 8px;
  font-weight: 600;
  text-decoration: none;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-primary {
  background: var(--accent);
  color: #fff;
}

.btn-primary:hover {
  background: var(--accent-dark);
  box-shadow: 0 6px 18px var(--accent-glow);
  transform: translateY(-1px);
}

/* === Services === */
.services-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
}

.service-card {
  border: 1px solid var(--line);
  border-radius: 12px;
  padding: 1.8rem;
  transition: box-shadow var(--transition-normal);
}

.service-card:hover {
  box-shadow: 0 10px 28px rgba(27, 31, 42, 0.1);
}

.service-card__title {
  font-size: 1.2rem;
  margin-bottom: 0.6rem;
}

.service-card__blurb {
  color: var(--ink-soft);
}

/* === Portfolio Grid === */
.portfolio-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
}

.portfolio-card {
  position: relative;
  border-radius: 12px;
  overflow: hidden;
  cursor: pointer;
  box-shadow: 0 4px 14px rgba(27, 31, 42, 0.08);
  transition: transform var(--transition-normal);
}

.portfolio-card:hover {
  transform: translateY(-4px);
}

.portfolio-card__img {
  display: block;
  width: 100%;
  height: 220px;
  object-fit: cover;
  background: var(--paper-tint);
}

.portfolio-card__label {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  padding: 0.8rem 1rem;
  background: linear-gradient(transparent, rgba(27, 31, 42, 0.85));
  color: #fff;
  font-weight: 600;
}

/* === Portfolio Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 200;
  background: rgba(27, 31, 42, 0.65);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1.5rem;
  outline: none;
}

.modal-panel {
  position: relative;
  background: var(--paper);
  border-radius: 14px;
  max-width: 640px;
  width: 100%;
  max-height: 85vh;
  overflow-y: auto;
  padding: 2.2rem;
  animation: modal-in 200ms ease-out;
}

@keyframes modal-in {
  from { opacity: 0; transform: translateY(12px); }
  to   { opacity: 1; transform: translateY(0); }
}

.close-modal {
  position: absolute;
  top: 0.8rem;
  right: 1rem;
  background: none;
  border: none;
  font-size: 1.8rem;
  line-height: 1;
  color: var(--ink-soft);
  cursor: pointer;
}

.close-modal:hover {
  color: var(--ink);
}

.modal-body img {
  width: 100%;
  border-radius: 10px;
  margin-bottom: 1.2rem;
}

.modal-body h2 {
  font-size: 1.6rem;
  margin-bottom: 0.8rem;
}

.modal-body p {
  color: var(--ink-soft);
  margin-bottom: 1.5rem;
}

/* === Testimonial Carousel === */
.testimonial-carousel {
  position: relative;
  max-width: 42rem;
  margin: 0 auto;
  padding: 0 3rem;
  text-align: center;
}

.testimonial-slide {
  margin: 0 var(--slide-gap, 30px);
}

.testimonial-quote {
  font-size: 1.3rem;
  font-style: italic;
  color: var(--ink);
}

.testimonial-author {
  margin-top: 1.2rem;
  font-weight: 700;
}

.testimonial-role {
  display: block;
  font-weight: 400;
  color: var(--ink-soft);
  font-size: 0.9rem;
}

.carousel-arrow {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  background: none;
  border: none;
  font-size: 2.2rem;
  color: var(--accent);
  cursor: pointer;
}

.carousel-arrow--prev { left: 0; }
.carousel-arrow--next { right: 0; }

.carousel-pagination {
  margin-top: 1.6rem;
  display: flex;
  justify-content: center;
  gap: 0.5rem;
}

.carousel-bullet {
  width: 9px;
  height: 9px;
  border-radius: 50%;
  border: none;
  background: var(--line);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.carousel-bullet.active {
  background: var(--accent);
}

/* === Scroll Reveal === */
.reveal {
  animation-name: reveal-up;
  animation-fill-mode: both;
  animation-timing-function: ease-out;
}

@keyframes reveal-up {
  from { opacity: 0; transform: translateY(24px); }
  to   { opacity: 1; transform: translateY(0); }
}

/* === Contact & Footer === */
.contact-blurb {
  text-align: center;
  color: var(--ink-soft);
  margin-bottom: 1.8rem;
}

#contact {
  text-align: center;
}

.site-footer {
  border-top: 1px solid var(--line);
  padding: 2rem 1.5rem;
  text-align: center;
  color: var(--ink-soft);
  font-size: 0.9rem;
}

/* === Responsive === */
@media (max-width: 768px) {
  .hero-title {
    font-size: 2.1rem;
  }

  .services-grid,
  .portfolio-grid {
    grid-template-columns: 1fr;
  }

  .menu-toggle {
    display: block;
  }

  .nav-links {
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    flex-direction: column;
    gap: 0;
    background: var(--paper);
    border-bottom: 1px solid var(--line);
    display: none;
  }

  .nav-links.active {
    display: flex;
  }

  .nav-link {
    padding: 1rem 1.5rem;
    border-top: 1px solid var(--line);
  }
}
"#;
