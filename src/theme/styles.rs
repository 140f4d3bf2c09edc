//! Global CSS styles for Folio.
//!
//! Class names here are the contract the components render against
//! (`.nav-menu.show`, `.filter-btn.active`, `.modal-show`, `.reveal.active`,
//! `.animate-on-scroll.is-visible`, `body.fade-out`, `.modal-active`).

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --ink: #1d1d1f;
  --ink-muted: #6e6e73;
  --paper: #fbfbf8;
  --paper-raised: #ffffff;
  --accent: #e4572e;
  --accent-soft: rgba(228, 87, 46, 0.12);
  --line: #e5e5e0;

  --font-display: 'Fraunces', Georgia, serif;
  --font-body: 'Inter', system-ui, -apple-system, sans-serif;

  --radius: 14px;
  --shadow: 0 12px 32px rgba(0, 0, 0, 0.08);

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 600ms ease;

  /* measured at startup and again before each scroll lock */
  --scrollbar-width: 0px;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--paper);
  color: var(--ink);
  font-family: var(--font-body);
  line-height: 1.6;
  opacity: 1;
  transition: opacity var(--transition-slow);
}

/* Page transition */
body.fade-out {
  opacity: 0;
}

/* Scroll lock while the modal is open */
html.modal-active,
body.modal-active {
  overflow: hidden;
}

body.modal-active {
  padding-right: var(--scrollbar-width);
}

img {
  max-width: 100%;
  display: block;
}

a {
  color: inherit;
}

.page-title,
.section-header,
.hero-title {
  font-family: var(--font-display);
  font-weight: 600;
  line-height: 1.15;
}

.page-title { font-size: 2.5rem; margin-bottom: 1rem; }
.section-header { font-size: 1.75rem; margin-bottom: 0.75rem; }

.btn-primary {
  display: inline-block;
  padding: 0.75rem 1.5rem;
  border-radius: 999px;
  background: var(--ink);
  color: var(--paper);
  text-decoration: none;
  transition: transform var(--transition-fast);
}

.btn-primary:hover {
  transform: translateY(-2px);
}

/* === Navigation === */
.site-nav {
  position: sticky;
  top: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 2rem;
  background: rgba(251, 251, 248, 0.9);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--line);
}

.nav-brand {
  font-family: var(--font-display);
  font-size: 1.4rem;
  text-decoration: none;
}

.nav-toggle {
  display: none;
  background: none;
  border: none;
  font-size: 1.4rem;
  cursor: pointer;
  color: var(--ink);
}

.nav-menu {
  display: flex;
  gap: 1.5rem;
  list-style: none;
}

.nav-link {
  text-decoration: none;
  color: var(--ink-muted);
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--accent);
}

@media (max-width: 768px) {
  .nav-toggle {
    display: block;
  }

  .nav-menu {
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    flex-direction: column;
    gap: 0;
    background: var(--paper-raised);
    max-height: 0;
    overflow: hidden;
    transition: max-height var(--transition-normal);
  }

  .nav-menu.show {
    max-height: 320px;
    box-shadow: var(--shadow);
  }

  .nav-menu li {
    padding: 1rem 2rem;
    border-top: 1px solid var(--line);
  }
}

/* === Hero === */
.hero {
  min-height: calc(100vh - 64px);
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  padding: 2rem;
}

.hero-title {
  font-size: clamp(2.5rem, 7vw, 5rem);
}

.hero-tagline {
  margin-top: 1rem;
  max-width: 32rem;
  color: var(--ink-muted);
}

.scroll-down {
  margin-top: 3rem;
  background: none;
  border: 1px solid var(--line);
  border-radius: 50%;
  width: 3rem;
  height: 3rem;
  cursor: pointer;
  animation: bob 2s ease-in-out infinite;
}

@keyframes bob {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(8px); }
}

main {
  max-width: 72rem;
  margin: 0 auto;
  padding: 3rem 2rem 6rem;
}

.home { padding-top: 0; }

.highlights,
.intro-lead,
.projects-header {
  margin-bottom: 3rem;
}

.skills {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
  gap: 1.5rem;
  margin-bottom: 3rem;
}

.skill {
  padding: 1.5rem;
  background: var(--paper-raised);
  border-radius: var(--radius);
  border: 1px solid var(--line);
}

/* === Scroll reveal === */
.reveal {
  opacity: 0;
  transform: translateY(40px);
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.reveal.active {
  opacity: 1;
  transform: translateY(0);
}

.animate-on-scroll {
  opacity: 0;
  transform: scale(0.96);
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.animate-on-scroll.is-visible {
  opacity: 1;
  transform: scale(1);
}

/* === Filter buttons === */
.filter-buttons {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-bottom: 2rem;
}

.filter-btn {
  padding: 0.5rem 1.1rem;
  border-radius: 999px;
  border: 1px solid var(--line);
  background: transparent;
  color: var(--ink-muted);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.filter-btn:hover {
  border-color: var(--accent);
  color: var(--accent);
}

.filter-btn.active {
  background: var(--accent);
  border-color: var(--accent);
  color: #fff;
}

/* === Project grid === */
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
  gap: 1.5rem;
}

.project-card {
  background: var(--paper-raised);
  border-radius: var(--radius);
  overflow: hidden;
  cursor: pointer;
  border: 1px solid var(--line);
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.project-card:hover {
  transform: translateY(-4px);
  box-shadow: var(--shadow);
}

.project-card img {
  width: 100%;
  aspect-ratio: 4 / 3;
  object-fit: cover;
}

.project-card h3 {
  padding: 1rem 1rem 0.25rem;
  font-size: 1.1rem;
}

.project-card p {
  padding: 0 1rem 1rem;
  color: var(--ink-muted);
  font-size: 0.9rem;
}

.project-card.card-enter {
  opacity: 0;
  animation: card-in 500ms ease forwards;
}

@keyframes card-in {
  from { opacity: 0; transform: scale(0.94); }
  to { opacity: 1; transform: scale(1); }
}

/* === Modal === */
.modal {
  position: fixed;
  inset: 0;
  z-index: 100;
  align-items: center;
  justify-content: center;
  padding: 1.5rem;
  background: rgba(20, 20, 20, 0);
  transition: background var(--transition-normal);
}

.modal.modal-show {
  background: rgba(20, 20, 20, 0.72);
}

.modal-content {
  position: relative;
  width: min(48rem, 100%);
  max-height: 90vh;
  overflow-y: auto;
  background: var(--paper-raised);
  border-radius: var(--radius);
  padding: 2rem;
  transform: translateY(40px);
  opacity: 0;
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.modal.modal-show .modal-content {
  transform: translateY(0);
  opacity: 1;
}

#modal-img {
  width: 100%;
  border-radius: calc(var(--radius) - 4px);
  margin-bottom: 1.25rem;
}

#modal-title {
  font-family: var(--font-display);
  font-size: 1.6rem;
  margin-bottom: 0.5rem;
}

#modal-description,
.modal-body {
  color: var(--ink-muted);
}

.modal-loading {
  font-style: italic;
}

.modal-error {
  color: var(--accent);
}

.icon-btn {
  background: none;
  border: none;
  cursor: pointer;
  font-size: 1.75rem;
  line-height: 1;
  color: var(--ink);
}

.modal-close {
  position: absolute;
  top: 0.75rem;
  right: 1rem;
}

.modal-pager {
  display: flex;
  justify-content: space-between;
  margin-top: 1.5rem;
}

.modal-nav {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  border: 1px solid var(--line);
}

.modal-nav:hover {
  background: var(--accent-soft);
}

@media (max-width: 768px) {
  .modal {
    align-items: flex-end;
    padding: 0;
  }

  .modal-content {
    border-radius: var(--radius) var(--radius) 0 0;
    max-height: 85vh;
  }
}
"#;
