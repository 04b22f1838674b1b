use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::backdrop::Grain;
use crate::components::footer::SiteFooter;
use crate::components::icons::{arrow_icon, ArrowIcon};
use crate::config::{self, RevealConfig};
use crate::engine::use_reveal;
use crate::Route;

const LUNA_FEATURES: [&str; 3] = [
    "Spaced repetition for podcast content",
    "Smart bookmarking and note-taking",
    "Adaptive playback for better retention",
];

#[function_component(Projects)]
pub fn projects() -> Html {
    let container = use_reveal(RevealConfig::eager());

    html! {
        <>
            <Grain />
            <main class="page">
                <div ref={container} class="page-inner page-wide">
                    <header class="projects-header">
                        <h1 class="page-title">{"Projects"}</h1>
                        <p class="lede">{"Tools we're building to help people learn better."}</p>
                    </header>

                    <section class="reveal projects-section">
                        <div class="projects-grid">
                            <div class="projects-copy">
                                <div class="badge">
                                    <span>{"Active Project"}</span>
                                </div>
                                <h2 class="projects-title">{"Luna"}</h2>
                                <p class="body-text projects-text">
                                    {"A podcast player built for learning. Designed to help you remember, revisit, and build on what you hear. Luna treats podcasts as learning material, not just entertainment."}
                                </p>
                                <h3 class="projects-label">{"Key Features"}</h3>
                                <ul class="arrow-list">
                                    { for LUNA_FEATURES.iter().map(|feature| html! { <li>{*feature}</li> }) }
                                </ul>
                                <a href="https://www.lunacast.ai/" target="_blank" rel="noopener noreferrer" class="visit-link">
                                    <span>{"Visit Luna"}</span>
                                    { arrow_icon(ArrowIcon::Chevron, "visit-link-icon") }
                                </a>
                            </div>
                            <div class="projects-shot">
                                <img src={config::asset_url("luna.png")} alt="Luna podcast player" />
                            </div>
                        </div>
                    </section>

                    <section class="reveal projects-section projects-approach">
                        <h2 class="projects-approach-title">{"Our Approach"}</h2>
                        <div class="projects-approach-copy">
                            <p>
                                {"We build slowly. Each project starts with observation and research. We test with real users, iterate based on feedback, and only launch when we're confident the tool actually helps people learn."}
                            </p>
                            <p>
                                {"We're not interested in quick features or flashy demos. We're building tools that work over months and years of use."}
                            </p>
                        </div>
                    </section>

                    <SiteFooter>
                        <Link<Route> to={Route::Home} classes="link-hover">{"Home"}</Link<Route>>
                    </SiteFooter>
                </div>
            </main>
            <style>
                {r#"
                .projects-header {
                    margin-bottom: 4rem;
                }
                .projects-section {
                    margin-bottom: 6rem;
                }
                .projects-grid {
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                }
                .projects-copy {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .badge {
                    display: inline-block;
                    align-self: flex-start;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: var(--accent-faint);
                    border: 1px solid rgba(203, 179, 124, 0.2);
                }
                .badge span {
                    font-size: 0.6875rem;
                    letter-spacing: 0.12em;
                    text-transform: uppercase;
                    font-weight: 500;
                    color: var(--accent);
                }
                .projects-title {
                    font-size: 2rem;
                    line-height: 1.1;
                    letter-spacing: -0.02em;
                }
                .projects-text {
                    font-size: 1.0625rem;
                }
                .projects-label {
                    font-family: var(--font-sans);
                    font-size: 0.8125rem;
                    font-weight: 500;
                    letter-spacing: 0.06em;
                    text-transform: uppercase;
                    margin-top: 1rem;
                }
                .visit-link {
                    display: inline-flex;
                    align-self: flex-start;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.75rem;
                    background: var(--accent-faint);
                    border: 1px solid rgba(203, 179, 124, 0.2);
                    color: var(--fg);
                    font-size: 0.9375rem;
                    font-weight: 500;
                    text-decoration: none;
                    transition: all 0.3s;
                }
                .visit-link:hover {
                    background: rgba(203, 179, 124, 0.2);
                    border-color: rgba(203, 179, 124, 0.4);
                }
                .visit-link-icon {
                    color: var(--accent);
                    transition: transform 0.3s;
                }
                .visit-link:hover .visit-link-icon {
                    transform: translateX(4px);
                }
                .projects-shot {
                    position: relative;
                    width: 100%;
                    height: 500px;
                    border-radius: 1rem;
                    overflow: hidden;
                    background: var(--card);
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }
                .projects-shot img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                }
                .projects-approach {
                    padding: 2rem;
                    border-radius: 1rem;
                    background: var(--card);
                    border: 2px solid var(--border);
                }
                .projects-approach-title {
                    font-size: 1.5rem;
                    margin-bottom: 1.5rem;
                }
                .projects-approach-copy {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    max-width: 700px;
                    color: var(--muted);
                    line-height: 1.8;
                    font-size: 1.0625rem;
                }
                @media (min-width: 768px) {
                    .projects-grid {
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                    }
                    .projects-section {
                        margin-bottom: 8rem;
                    }
                    .projects-approach {
                        padding: 3rem;
                    }
                    .projects-title {
                        font-size: 2.5rem;
                    }
                }
                "#}
            </style>
        </>
    }
}
