//! Global CSS styles for the portfolio page.
//!
//! Section fade-in rules come from `folio_core::reveal::FADE_IN_CSS` and are
//! injected next to these.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --paper: #fbfaf7;
  --ink: #1f1f1f;
  --ink-soft: #5b5b5b;
  --rule: #e4e1da;
  --accent: #a0522d;
  --overlay: rgba(10, 10, 10, 0.92);

  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

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
  background: var(--paper);
  color: var(--ink);
  font-family: var(--font-sans);
  line-height: 1.6;
}

/* === Page Scroll Container === */
.page {
  height: 100vh;
  overflow-y: auto;
  outline: none;
}

.page.scroll-locked {
  overflow: hidden;
}

#profile-content {
  max-width: 760px;
  margin: 0 auto;
  padding: 3rem 1.5rem 4rem;
}

/* === Header === */
.page-header {
  display: flex;
  justify-content: space-between;
  align-items: flex-end;
  gap: 1rem;
  margin-bottom: 2.5rem;
}

.page-header h1 {
  font-family: var(--font-serif);
  font-size: 2.75rem;
  font-weight: 500;
  line-height: 1.1;
}

.page-header .tagline {
  color: var(--ink-soft);
  margin-top: 0.4rem;
}

#download-btn {
  border: 1px solid var(--ink);
  background: transparent;
  color: var(--ink);
  padding: 0.5rem 1rem;
  font: inherit;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

#download-btn:hover:not(:disabled) {
  background: var(--ink);
  color: var(--paper);
}

#download-btn:disabled {
  opacity: 0.5;
  cursor: wait;
}

/* === Sections === */
section {
  border-top: 1px solid var(--rule);
  padding: 1.75rem 0;
}

section h2 {
  font-family: var(--font-serif);
  font-size: 1.6rem;
  font-weight: 500;
  margin-bottom: 0.9rem;
}

section h3 {
  font-size: 1rem;
  font-weight: 600;
}

section .entry {
  margin-bottom: 1rem;
}

section ul {
  padding-left: 1.2rem;
}

section a {
  color: var(--accent);
}

.section-toggle {
  background: none;
  border: none;
  font: inherit;
  color: inherit;
  cursor: pointer;
  display: flex;
  align-items: baseline;
  gap: 0.5rem;
  width: 100%;
  text-align: left;
}

.section-toggle .chevron {
  font-size: 0.8rem;
  transition: transform var(--transition-fast);
}

.section-toggle.collapsed .chevron {
  transform: rotate(-90deg);
}

/* === Gallery Strip === */
.gallery-strip {
  display: flex;
  gap: 0.75rem;
  overflow-x: auto;
  padding: 0.5rem 0;
}

.gallery-strip .thumb {
  flex: 0 0 auto;
  width: 140px;
  height: 100px;
  cursor: zoom-in;
  outline-offset: 3px;
}

.gallery-strip .thumb img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  display: block;
}

/* === Gallery Modal === */
#gallery-modal {
  position: fixed;
  inset: 0;
  background: var(--overlay);
  display: flex;
  align-items: center;
  justify-content: center;
  opacity: 0;
  visibility: hidden;
  pointer-events: none;
  transition: opacity var(--transition-normal), visibility 0s linear var(--transition-normal);
  z-index: 100;
}

#gallery-modal.open {
  opacity: 1;
  visibility: visible;
  pointer-events: auto;
  transition-delay: 0s;
}

#gallery-modal-img {
  max-width: 88vw;
  max-height: 86vh;
  object-fit: contain;
  user-select: none;
  -webkit-user-drag: none;
  touch-action: pan-y;
}

#gallery-modal button {
  position: absolute;
  background: none;
  border: none;
  color: #fff;
  font-size: 2.2rem;
  line-height: 1;
  padding: 0.75rem;
  cursor: pointer;
}

#modal-close { top: 1rem; right: 1rem; }
#modal-prev { left: 1rem; top: 50%; transform: translateY(-50%); }
#modal-next { right: 1rem; top: 50%; transform: translateY(-50%); }

/* === PDF Staging === */
#pdf-staging {
  position: absolute;
  left: -9999px;
  top: 0;
  width: 800px;
  padding: 20px;
  background: white;
}

#pdf-staging section {
  opacity: 1;
  transform: none;
}
"#;
