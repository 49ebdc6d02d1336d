//! Global CSS styles for the portfolio page.
//!
//! Dark by default; the `light` class on `<html>` swaps the palette.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --bg: #0b0d12;
  --bg-raised: #141821;
  --border: #232a36;

  /* Accent */
  --accent: #6ee7b7;
  --accent-soft: rgba(110, 231, 183, 0.15);
  --accent-2: #818cf8;

  /* Text */
  --text: #e8ecf3;
  --text-muted: rgba(232, 236, 243, 0.65);

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 600ms cubic-bezier(0.4, 0, 0.2, 1);

  --header-height: 72px;
}

:root.light {
  --bg: #f7f8fb;
  --bg-raised: #ffffff;
  --border: #dde2ea;
  --accent: #0f9f6e;
  --accent-soft: rgba(15, 159, 110, 0.12);
  --accent-2: #4f46e5;
  --text: #141821;
  --text-muted: rgba(20, 24, 33, 0.65);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-padding-top: var(--header-height);
}

body {
  background: var(--bg);
  color: var(--text);
  font-family: var(--font-sans);
  line-height: 1.6;
  transition: background var(--transition-normal), color var(--transition-normal);
}

a {
  color: var(--accent);
  text-decoration: none;
}

/* === Header === */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--header-height);
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 2rem;
  background: color-mix(in srgb, var(--bg) 85%, transparent);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--border);
  z-index: 100;
}

.brand {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--text);
}

.nav-menu {
  display: flex;
  gap: 1.5rem;
  list-style: none;
}

.nav-menu a {
  color: var(--text-muted);
  transition: color var(--transition-fast);
}

.nav-menu a:hover,
.nav-menu a.active {
  color: var(--accent);
}

.header-actions {
  display: flex;
  gap: 0.5rem;
  align-items: center;
}

.nav-toggle {
  display: none;
}

@media (max-width: 768px) {
  .nav-toggle {
    display: inline-flex;
  }

  .nav-menu {
    position: absolute;
    top: var(--header-height);
    left: 0;
    right: 0;
    flex-direction: column;
    padding: 1.5rem 2rem;
    background: var(--bg-raised);
    border-bottom: 1px solid var(--border);
    transform: translateY(-120%);
    transition: transform var(--transition-normal);
  }

  .nav-menu.open {
    transform: translateY(0);
  }
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.6rem 1.2rem;
  border-radius: 999px;
  border: 1px solid transparent;
  font: inherit;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-primary {
  background: var(--accent);
  color: var(--bg);
}

.btn-outline {
  background: transparent;
  border-color: var(--accent);
  color: var(--accent);
}

.btn-ghost {
  background: transparent;
  color: var(--text);
}

.btn:hover {
  transform: translateY(-1px);
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border: 1px solid var(--border);
  border-radius: 50%;
  background: transparent;
  color: var(--text);
  font-size: 1.1rem;
  cursor: pointer;
}

/* === Sections === */
main {
  position: relative;
  z-index: 1;
}

.section {
  min-height: 100vh;
  padding: calc(var(--header-height) + 3rem) 2rem 4rem;
  max-width: 1100px;
  margin: 0 auto;
}

.section h2 {
  font-size: 2rem;
  margin-bottom: 2rem;
}

.hero {
  display: flex;
  flex-direction: column;
  justify-content: center;
  gap: 1rem;
}

.hero h1 {
  font-size: clamp(2.5rem, 6vw, 4.5rem);
  line-height: 1.1;
}

.typewriter {
  font-family: var(--font-mono);
  font-size: 1.5rem;
  color: var(--accent);
  min-height: 2.25rem;
}

.typewriter::after {
  content: '|';
  margin-left: 2px;
  animation: blink 1s step-end infinite;
}

.card {
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 16px;
  padding: 2rem;
}

/* === Reveal === */
[data-reveal] {
  opacity: 0;
  transform: translateY(24px);
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

[data-reveal].visible {
  opacity: 1;
  transform: none;
}

/* === Stats === */
.stats-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
  gap: 1rem;
  margin-top: 2rem;
}

.stat-number {
  font-size: 2.25rem;
  font-weight: 700;
  color: var(--accent);
}

.stat-label {
  color: var(--text-muted);
}

/* === Skills === */
.skill-item {
  margin-bottom: 1.25rem;
}

.skill-header {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.4rem;
}

.skill-bar {
  height: 8px;
  background: var(--accent-soft);
  border-radius: 999px;
  overflow: hidden;
}

.skill-progress {
  height: 100%;
  width: 0;
  background: linear-gradient(90deg, var(--accent), var(--accent-2));
  transition: width 1.2s ease;
}

/* === Projects === */
.project-controls {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  align-items: center;
  margin-bottom: 2rem;
}

.filter-chips {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.chip {
  padding: 0.35rem 0.9rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  background: transparent;
  color: var(--text-muted);
  font: inherit;
  cursor: pointer;
}

.chip.active {
  background: var(--accent-soft);
  border-color: var(--accent);
  color: var(--accent);
}

.search-input-wrapper {
  position: relative;
  flex: 1;
  min-width: 220px;
}

.search-icon {
  position: absolute;
  left: 0.75rem;
  top: 50%;
  transform: translateY(-50%);
  opacity: 0.6;
}

.search-input {
  padding-left: 2.25rem;
}

.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 1.5rem;
}

.project {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.project[hidden] {
  display: none;
}

.tag-list {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
}

.tag {
  font-size: 0.8rem;
  padding: 0.15rem 0.6rem;
  border-radius: 999px;
  background: var(--accent-soft);
  color: var(--accent);
}

.empty-state {
  color: var(--text-muted);
  text-align: center;
  padding: 2rem;
}

/* === Modal === */
.modal {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.6);
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition-normal);
  z-index: 200;
}

.modal.active {
  opacity: 1;
  pointer-events: auto;
}

.modal-content {
  position: relative;
  width: min(640px, 92vw);
  max-height: 85vh;
  overflow-y: auto;
}

.modal-close {
  position: absolute;
  top: 1rem;
  right: 1rem;
}

.modal-content h4 {
  margin: 1.25rem 0 0.5rem;
}

.modal-content ul {
  padding-left: 1.25rem;
}

.tech-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(120px, 1fr));
  gap: 0.5rem;
}

.tech-item {
  padding: 0.4rem 0.6rem;
  border: 1px solid var(--border);
  border-radius: 8px;
  text-align: center;
}

.tech-item:hover {
  animation: float 2s ease-in-out infinite;
}

/* === Contact === */
.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.input-label {
  font-size: 0.9rem;
  color: var(--text-muted);
}

.input-field {
  width: 100%;
  padding: 0.65rem 0.9rem;
  border-radius: 10px;
  border: 1px solid var(--border);
  background: var(--bg);
  color: var(--text);
  font: inherit;
}

.input-field:focus {
  outline: 2px solid var(--accent);
  outline-offset: 1px;
}

.textarea {
  resize: vertical;
}

.form-status {
  min-height: 1.5rem;
  color: var(--text-muted);
}

/* === Background === */
.background {
  position: fixed;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
  z-index: 0;
}

.particle {
  position: absolute;
  bottom: -10px;
  border-radius: 50%;
  background: var(--accent);
  opacity: 0.5;
  animation: rise linear infinite;
}

.shape {
  position: absolute;
  width: 120px;
  height: 120px;
  border: 2px solid var(--accent);
  opacity: 0.1;
  pointer-events: auto;
  animation: float 8s ease-in-out infinite;
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.shape-0 { top: 15%; left: 8%; border-radius: 50%; }
.shape-1 { top: 55%; right: 10%; transform: rotate(45deg); }
.shape-2 { top: 75%; left: 30%; border-radius: 24px; }

.gradient-orb {
  position: absolute;
  width: 420px;
  height: 420px;
  border-radius: 50%;
  filter: blur(80px);
  opacity: 0.25;
}

.orb-0 { top: -120px; right: -80px; background: var(--accent); }
.orb-1 { bottom: -160px; left: -120px; background: var(--accent-2); }

.trail-dot {
  position: fixed;
  width: 4px;
  height: 4px;
  margin: -2px 0 0 -2px;
  border-radius: 50%;
  background: var(--accent);
  pointer-events: none;
  z-index: 9999;
  opacity: 0.6;
  transition: opacity 0.3s ease;
}

.trail-dot.fading {
  opacity: 0;
}

/* === Footer === */
.site-footer {
  text-align: center;
  padding: 2rem;
  color: var(--text-muted);
  border-top: 1px solid var(--border);
}

/* === Keyframes === */
@keyframes blink {
  50% { opacity: 0; }
}

@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-10px); }
}

@keyframes rise {
  from { transform: translateY(0); opacity: 0; }
  10% { opacity: 0.5; }
  to { transform: translateY(-110vh); opacity: 0; }
}

@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    animation: none !important;
    transition: none !important;
  }
}
"#;
