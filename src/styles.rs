use stylist::yew::Global;
use yew::prelude::*;

/// Theme tokens and the rules shared across pages. Page-specific rules stay
/// next to their components.
const GLOBAL_CSS: &str = r#"
:root {
    --bg: #f5f3f0;
    --fg: #1a1918;
    --fg-soft: rgba(26, 25, 24, 0.6);
    --muted: #6b6966;
    --faint: rgba(107, 105, 102, 0.4);
    --accent: #cbb37c;
    --accent-soft: rgba(203, 179, 124, 0.7);
    --accent-faint: rgba(203, 179, 124, 0.1);
    --border: rgba(0, 0, 0, 0.06);
    --card: #ffffff;
    --nav-bg: rgba(255, 255, 255, 0.38);
    --nav-bg-scrolled: rgba(255, 255, 255, 0.82);
    --nav-border: rgba(255, 255, 255, 0.5);
    --atmosphere-warm: rgba(210, 200, 180, 0.35);
    --atmosphere-cool: rgba(100, 110, 120, 0.08);
    --font-serif: "Source Serif 4", Georgia, serif;
    --font-sans: "DM Sans", system-ui, sans-serif;
}

:root.dark {
    --bg: #0f0f0f;
    --fg: #ecebe8;
    --fg-soft: rgba(236, 235, 232, 0.6);
    --muted: rgba(236, 235, 232, 0.7);
    --faint: rgba(236, 235, 232, 0.4);
    --accent-faint: rgba(203, 179, 124, 0.15);
    --border: rgba(255, 255, 255, 0.06);
    --card: rgba(255, 255, 255, 0.05);
    --nav-bg: rgba(20, 20, 20, 0.45);
    --nav-bg-scrolled: rgba(20, 20, 20, 0.85);
    --nav-border: rgba(255, 255, 255, 0.08);
    --atmosphere-warm: rgba(203, 179, 124, 0.08);
    --atmosphere-cool: rgba(0, 0, 0, 0.3);
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    background: var(--bg);
    color: var(--fg);
    font-family: var(--font-sans);
    -webkit-font-smoothing: antialiased;
    transition: background 0.4s ease, color 0.4s ease;
}

h1, h2, h3 {
    font-family: var(--font-serif);
    font-weight: 400;
    color: var(--fg);
    margin: 0;
}

p {
    margin: 0;
}

.reveal {
    opacity: 0;
    transform: translateY(24px);
    transition: opacity 0.9s cubic-bezier(0.16, 1, 0.3, 1), transform 0.9s cubic-bezier(0.16, 1, 0.3, 1);
}

.reveal.visible {
    opacity: 1;
    transform: none;
}

.grain {
    position: fixed;
    inset: 0;
    pointer-events: none;
    z-index: 1;
    opacity: 0.035;
    background-image: repeating-radial-gradient(circle at 17% 32%, #000 0, transparent 1px, transparent 3px);
}

.progress-bar {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    height: 2px;
    z-index: 60;
    background: linear-gradient(to right, var(--accent), #b8a066);
    transform-origin: left;
}

.atmosphere {
    position: fixed;
    inset: 0;
    pointer-events: none;
    z-index: 0;
}

.atmosphere-warm {
    transition: all 0.5s;
}

.parallax-shapes {
    position: fixed;
    inset: 0;
    pointer-events: none;
    z-index: 0;
    overflow: hidden;
}

.shape {
    position: absolute;
    transition: top 0.15s ease-out;
}

.shape-shadow-circle {
    width: 50vw;
    height: 50vw;
    max-width: 600px;
    max-height: 600px;
    right: -15%;
    border-radius: 9999px;
    background: radial-gradient(circle, rgba(0, 0, 0, 0.03) 0%, transparent 70%);
}

.shape-accent-circle {
    width: 120px;
    height: 120px;
    left: 3%;
    border-radius: 9999px;
    background: radial-gradient(circle, rgba(74, 107, 74, 0.08) 0%, transparent 70%);
}

.shape-line {
    width: 1px;
    height: 300px;
    right: 18%;
    background: linear-gradient(to bottom, transparent, rgba(0, 0, 0, 0.06), transparent);
}

.page {
    position: relative;
    z-index: 10;
    min-height: 100vh;
}

.page-inner {
    margin: 0 auto;
    padding: 8rem 2rem 8rem;
}

.page-narrow {
    max-width: 720px;
}

.page-wide {
    max-width: 1400px;
}

.page-title {
    font-size: 2.5rem;
    line-height: 1;
    letter-spacing: -0.04em;
    margin-bottom: 1.5rem;
}

.lede {
    font-size: 1.0625rem;
    line-height: 1.8;
    color: var(--muted);
    max-width: 560px;
}

.body-text {
    color: var(--muted);
    line-height: 1.8;
}

.eyebrow {
    font-size: 0.6875rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: var(--accent-soft);
}

.link-hover {
    position: relative;
    color: var(--fg);
    text-decoration: none;
    font-size: 0.875rem;
}

.link-hover:hover {
    color: var(--accent);
}

.arrow-list {
    list-style: none;
    padding: 0;
    margin: 0;
    color: var(--muted);
    line-height: 1.7;
}

.arrow-list li {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    margin-bottom: 0.75rem;
}

.arrow-list li::before {
    content: "→";
    color: var(--accent);
}

.divider {
    position: relative;
    width: 8rem;
    height: 1px;
    background: linear-gradient(to right, rgba(26, 25, 24, 0.2), transparent);
}

.site-footer {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding-top: 2.5rem;
    border-top: 1px solid var(--border);
}

.site-footer-brand {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.site-footer-logo {
    opacity: 0.5;
}

.site-footer-aside {
    display: flex;
    gap: 1.5rem;
}

.footer-label {
    font-size: 0.6875rem;
    letter-spacing: 0.08em;
    text-transform: uppercase;
    color: var(--faint);
}

@media (min-width: 640px) {
    .page-inner {
        padding-left: 2.5rem;
        padding-right: 2.5rem;
    }
    .page-title {
        font-size: 3rem;
    }
    .lede {
        font-size: 1.125rem;
    }
}

@media (min-width: 768px) {
    .page-inner {
        padding-top: 11rem;
    }
    .page-title {
        font-size: 3.75rem;
    }
}
"#;

#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! { <Global css={GLOBAL_CSS} /> }
}
