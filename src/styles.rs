//! Site stylesheet, rendered once by the app shell.
//!
//! Colors come from custom properties keyed off `html[data-theme]`; the
//! 768px media query matches `config::DESKTOP_BREAKPOINT_PX`.

pub const SITE_CSS: &str = r#"
:root,
html[data-theme="light"] {
    --bg: #f7f5f0;
    --surface: #ffffff;
    --text: #1d1d1f;
    --muted: #6b6b73;
    --accent: #1f7a5c;
    --accent-contrast: #ffffff;
    --border: rgba(0, 0, 0, 0.08);
}

html[data-theme="dark"] {
    --bg: #111214;
    --surface: #1b1c1f;
    --text: #f2f2f3;
    --muted: #a0a0a8;
    --accent: #3fbf8f;
    --accent-contrast: #0c0d0e;
    --border: rgba(255, 255, 255, 0.08);
}

/* Before the first apply the root carries no marker; follow the OS. */
@media (prefers-color-scheme: dark) {
    html:not([data-theme]) {
        --bg: #111214;
        --surface: #1b1c1f;
        --text: #f2f2f3;
        --muted: #a0a0a8;
        --accent: #3fbf8f;
        --accent-contrast: #0c0d0e;
        --border: rgba(255, 255, 255, 0.08);
    }
}

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: "Inter", system-ui, -apple-system, sans-serif;
    transition: background 0.2s ease, color 0.2s ease;
}

a { color: inherit; }

.container {
    max-width: 1120px;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.section { padding: 5rem 0; }
.center { text-align: center; }
.eyebrow {
    color: var(--accent);
    font-size: 0.8rem;
    letter-spacing: 0.12em;
    font-weight: 600;
}
.section-title { font-size: 2.2rem; margin: 0.5rem 0 1rem; }
.section-sub { color: var(--muted); max-width: 640px; }
.section-sub.center { margin: 0 auto 2.5rem; }

.btn-primary {
    display: inline-block;
    padding: 0.8rem 1.4rem;
    background: var(--accent);
    color: var(--accent-contrast);
    border: none;
    border-radius: 999px;
    text-decoration: none;
    font-weight: 600;
    cursor: pointer;
}
.btn-ghost {
    display: inline-block;
    padding: 0.8rem 1.4rem;
    border: 1px solid var(--border);
    border-radius: 999px;
    text-decoration: none;
}
.btn-full { width: 100%; }

.site-header {
    position: sticky;
    top: 0;
    z-index: 10;
    background: var(--bg);
    border-bottom: 1px solid var(--border);
}
.header-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 64px;
}
.brand-logo { height: 36px; }
.brand-logo-long { display: none; }
.nav-links { display: none; gap: 1.5rem; }
.nav-links a { text-decoration: none; color: var(--muted); }
.header-actions { display: flex; align-items: center; gap: 0.75rem; }
.header-cta { display: none; }
.mobile-menu-toggle,
.theme-toggle {
    background: transparent;
    border: 1px solid var(--border);
    border-radius: 999px;
    width: 40px;
    height: 40px;
    color: var(--text);
    cursor: pointer;
}
.menu-svg, .theme-svg {
    width: 20px;
    height: 20px;
    stroke: currentColor;
    fill: currentColor;
}
.mobile-nav-panel {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    padding-bottom: 1.5rem;
}
.mobile-nav-panel a { text-decoration: none; }

@media (min-width: 768px) {
    .brand-logo-short { display: none; }
    .brand-logo-long { display: inline; }
    .nav-links { display: flex; }
    .header-cta { display: inline-block; }
    .mobile-menu-toggle { display: none; }
    .mobile-nav-wrap { display: none; }
}

.hero-inner,
.numbers-inner,
.calm-inner,
.final-cta-inner {
    display: grid;
    gap: 3rem;
    align-items: center;
}
@media (min-width: 768px) {
    .hero-inner,
    .numbers-inner,
    .calm-inner,
    .final-cta-inner { grid-template-columns: 1fr 1fr; }
}

.hero-title { font-size: 3rem; line-height: 1.1; margin: 0.5rem 0 1rem; }
.hero-sub { color: var(--muted); font-size: 1.15rem; }
.hero-chips { display: flex; flex-wrap: wrap; gap: 0.5rem; margin: 1.5rem 0; }
.chip {
    padding: 0.35rem 0.8rem;
    border: 1px solid var(--border);
    border-radius: 999px;
    font-size: 0.85rem;
}
.hero-cta-row { display: flex; gap: 0.75rem; flex-wrap: wrap; }
.hero-footnote { color: var(--muted); font-size: 0.85rem; }
.hero-orbit { position: relative; min-height: 320px; }
.orbit-core,
.orbit-pill,
.benefit-block,
.numbers-dashboard,
.calm-column,
.system-node,
.testimonial,
.final-cta-form {
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 18px;
    padding: 1.25rem;
}
.orbit-core { display: flex; flex-direction: column; text-align: center; }
.orbit-pill { display: flex; flex-direction: column; margin-top: 0.75rem; }
.pill-value, .orbit-core-sub { color: var(--muted); font-size: 0.85rem; }

.big-three-row { display: grid; gap: 1.5rem; margin-bottom: 1.5rem; }
@media (min-width: 768px) {
    .big-three-row { grid-template-columns: 1fr 1fr; }
    .big-three-row-bottom { grid-template-columns: 1fr; }
}
.benefit-icon { font-size: 1.6rem; }
.benefit-heading { font-weight: 700; margin: 0.5rem 0; }
.benefit-mini, .benefit-footnote { color: var(--muted); }
.bar-row { display: flex; align-items: flex-end; gap: 0.5rem; height: 80px; }
.bar { flex: 1; border-radius: 6px; background: var(--border); }
.bar-new { height: 45%; }
.bar-returning { height: 85%; background: var(--accent); }
.planning-board { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; margin: 1rem 0; }
.planning-item, .planning-badge {
    padding: 0.4rem 0.7rem;
    border-radius: 8px;
    margin-top: 0.4rem;
    border: 1px solid var(--border);
}
.planning-item-ok, .planning-badge-green { border-color: var(--accent); }
.planning-badge-amber { border-color: #d89b2b; }

.dash-header, .dash-product-row, .system-table-header, .system-table-row {
    display: flex;
    justify-content: space-between;
    gap: 0.5rem;
}
.dash-value { display: block; font-size: 2rem; font-weight: 700; }
.dash-chart-bars { display: flex; align-items: flex-end; gap: 0.4rem; height: 90px; }
.dash-bar { flex: 1; background: var(--accent); border-radius: 4px; opacity: 0.8; }
.dash-bar-1 { height: 40%; }
.dash-bar-2 { height: 55%; }
.dash-bar-3 { height: 70%; }
.dash-bar-4 { height: 50%; }
.dash-bar-5 { height: 85%; }
.dash-bar-6 { height: 95%; }
.dash-bar-7 { height: 60%; }
.dash-chart-labels { display: flex; justify-content: space-between; color: var(--muted); }
.dash-chip { font-size: 0.75rem; color: var(--accent); }
.dash-chip-muted { color: var(--muted); }
.numbers-stat-row { display: flex; gap: 1rem; margin-top: 1rem; }
.numbers-stat { display: flex; flex-direction: column; }
.numbers-stat-label { color: var(--muted); font-size: 0.85rem; }

.calm-before-after { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.calm-item { display: flex; flex-direction: column; margin-top: 0.75rem; }
.calm-time { font-size: 0.8rem; color: var(--accent); }
.calm-saved-pill { display: inline-block; margin-top: 1rem; font-weight: 600; }

.system-flow { display: flex; flex-direction: column; gap: 0.75rem; }
.system-arrow { text-align: center; color: var(--muted); font-size: 0.85rem; }
.system-node-title { font-weight: 700; margin-bottom: 0.5rem; }
.system-pill, .routine-pill {
    display: inline-block;
    padding: 0.3rem 0.7rem;
    margin: 0.2rem;
    border: 1px solid var(--border);
    border-radius: 999px;
}
.routine-pill-done { border-color: var(--accent); }
.system-timeline-item { display: flex; gap: 0.75rem; margin-top: 0.5rem; }
.system-dot {
    width: 10px;
    height: 10px;
    margin-top: 0.4rem;
    border-radius: 50%;
    background: var(--accent);
}
.system-timeline-sub { color: var(--muted); font-size: 0.85rem; }

.process-timeline { display: grid; gap: 1.5rem; }
@media (min-width: 768px) {
    .process-timeline, .testimonials-row { grid-template-columns: repeat(3, 1fr); }
}
.process-step { display: flex; gap: 1rem; }
.process-circle {
    flex: none;
    width: 36px;
    height: 36px;
    border-radius: 50%;
    display: grid;
    place-items: center;
    background: var(--accent);
    color: var(--accent-contrast);
    font-weight: 700;
}
.process-title { font-weight: 700; }
.process-text { color: var(--muted); }
.process-cta-row { text-align: center; margin-top: 2.5rem; }

.testimonials-row { display: grid; gap: 1.5rem; }
.testimonial { margin: 0; }
.testimonial-avatar {
    width: 40px;
    height: 40px;
    border-radius: 50%;
    display: grid;
    place-items: center;
    background: var(--accent);
    color: var(--accent-contrast);
}
.testimonial blockquote { margin: 1rem 0; }
.testimonial figcaption { color: var(--muted); }

.pricing-mini { display: flex; gap: 1rem; flex-wrap: wrap; }
.pricing-pill {
    display: flex;
    flex-direction: column;
    padding: 0.75rem 1rem;
    border: 1px solid var(--accent);
    border-radius: 14px;
}
.pricing-pill-muted { border-color: var(--border); }
.pricing-value { font-weight: 700; }
.form-row { display: flex; flex-direction: column; gap: 0.35rem; margin-bottom: 1rem; }
.form-row-inline { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.final-cta-form input,
.final-cta-form textarea {
    padding: 0.65rem 0.8rem;
    border-radius: 10px;
    border: 1px solid var(--border);
    background: var(--bg);
    color: var(--text);
    font: inherit;
    width: 100%;
    box-sizing: border-box;
}
.form-footnote {
    display: flex;
    justify-content: space-between;
    margin-top: 0.75rem;
    color: var(--muted);
    font-size: 0.8rem;
}

.site-footer { border-top: 1px solid var(--border); padding: 2rem 0 1rem; }
.footer-inner { display: flex; justify-content: space-between; flex-wrap: wrap; gap: 1rem; }
.footer-brand { font-weight: 700; }
.footer-text, .footer-bottom { color: var(--muted); font-size: 0.85rem; }
.footer-right { display: flex; gap: 1rem; }
.footer-bottom { text-align: center; margin-top: 1.5rem; }
"#;
