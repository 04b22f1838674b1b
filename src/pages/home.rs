use yew::prelude::*;

use crate::components::backdrop::{Grain, ParallaxShapes, ProgressBar, ScrollAtmosphere};
use crate::components::footer::SiteFooter;
use crate::components::icons::{work_icon, Logo, WorkIcon};
use crate::config::{self, RevealConfig, CONTACT_EMAIL, SCROLLED_THRESHOLD_PX};
use crate::engine::{use_proximity_transform, use_reveal, use_scroll_state};

#[derive(Properties, PartialEq)]
struct WorkCardProps {
    title: AttrValue,
    text: AttrValue,
    index: usize,
    icon: WorkIcon,
}

#[function_component(WorkCard)]
fn work_card(props: &WorkCardProps) -> Html {
    html! {
        <article class="work-card" style={format!("transition-delay: {}ms;", props.index * 50)}>
            <div class="work-card-wash"></div>
            <div class="work-card-shadow"></div>
            <div class="work-card-accent"></div>
            <div class="work-card-body">
                <div class="work-card-icon">{ work_icon(props.icon) }</div>
                <div>
                    <h3>{ props.title.clone() }</h3>
                    <p>{ props.text.clone() }</p>
                </div>
            </div>
        </article>
    }
}

/// Luna showcase. The phone mockup swings and shrinks as it moves away
/// from the viewport center.
#[function_component(LunaSection)]
fn luna_section() -> Html {
    let image_ref = use_node_ref();
    let transform = use_proximity_transform(image_ref.clone());

    let glow_style = format!(
        "opacity: {:.3}; transform: scale({:.4});",
        transform.glow_opacity(),
        transform.glow_scale()
    );
    let image_style = format!("transform: {};", transform.css_transform());
    let shadow_style = format!(
        "opacity: {:.3}; transform: translateY(20px) scale(0.85);",
        transform.shadow_opacity()
    );
    let floor_style = format!("opacity: {:.3};", transform.floor_glow_opacity());

    html! {
        <section id="projects" class="reveal home-section">
            <div class="luna-grid">
                <div>
                    <p class="eyebrow luna-eyebrow">{"First product"}</p>
                    <h2 class="section-title">{"Luna"}</h2>
                    <p class="body-text luna-text">
                        {"A podcast player built for learning. Designed to help you remember, revisit, and build on what you hear."}
                    </p>
                    <a href="https://www.lunacast.ai/" target="_blank" rel="noopener noreferrer" class="link-hover luna-link">
                        <span>{"lunacast.ai"}</span>
                        <svg width="10" height="10" viewBox="0 0 10 10" class="luna-link-icon">
                            <path d="M2.5 1h6.5v6.5M9 1L1 9" stroke="currentColor" stroke-width="1.2" fill="none"
                                stroke-linecap="round" stroke-linejoin="round" />
                        </svg>
                    </a>
                </div>

                <div ref={image_ref} class="luna-stage">
                    <div class="luna-glow" style={glow_style}></div>
                    <div class="luna-image" style={image_style}>
                        <div class="luna-shadow" style={shadow_style}></div>
                        <img
                            src={config::asset_url("luna.png")}
                            alt="Luna app - podcast player for learning"
                            width="500"
                            height="600"
                        />
                    </div>
                    <div class="luna-floor-glow" style={floor_style}></div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let scroll = use_scroll_state(SCROLLED_THRESHOLD_PX);
    let container = use_reveal(RevealConfig::default());

    html! {
        <>
            <ScrollAtmosphere progress={scroll.progress} />
            <ParallaxShapes progress={scroll.progress} />
            <Grain />
            <ProgressBar progress={scroll.progress} />

            <main class="page">
                <div ref={container} class="page-inner home-inner">
                    <header id="about" class="home-hero">
                        <div class="home-hero-title">
                            <Logo size={48} class="home-hero-logo" />
                            <h1 class="page-title">{"Human"}<br />{"Learning Lab"}</h1>
                        </div>
                        <div class="home-hero-copy">
                            <p class="lede">{"We explore how people learn. We build tools based on what we find."}</p>
                            <p class="lede">
                                {"Most software treats learning as information transfer. We think it's something deeper: a slow process of change that deserves more patience and better tools."}
                            </p>
                        </div>
                    </header>

                    <section id="what-we-work-on" class="reveal home-section">
                        <h2 class="home-subtitle">{"What we work on"}</h2>
                        <div class="work-list">
                            <WorkCard
                                title="Learning"
                                text="How people acquire knowledge and skill. What helps retention. What leads to real understanding."
                                index={0}
                                icon={WorkIcon::Learning}
                            />
                            <WorkCard
                                title="Products"
                                text="Software that reflects how learning actually works. Built slowly, tested carefully."
                                index={1}
                                icon={WorkIcon::Products}
                            />
                            <WorkCard
                                title="Practice"
                                text="The conditions for genuine improvement. Deliberate repetition, feedback, and time."
                                index={2}
                                icon={WorkIcon::Practice}
                            />
                        </div>
                    </section>

                    <div class="reveal home-section">
                        <div class="divider"></div>
                    </div>

                    <LunaSection />

                    <section class="reveal home-section home-section-long">
                        <h2 class="section-title">{"Time"}</h2>
                        <p class="body-text home-narrow">
                            {"Good tools come from years of observation and iteration. We're not optimizing for speed. We're trying to understand something real, and to build things that reflect that understanding."}
                        </p>
                    </section>

                    <section id="contact" class="reveal home-section">
                        <h2 class="section-title">{"Get in touch"}</h2>
                        <p class="body-text home-narrow home-contact-text">
                            {"We're always interested in conversations about learning, tools, and the future of education."}
                        </p>
                        <a href={format!("mailto:{}", CONTACT_EMAIL)} class="link-hover">
                            <span>{CONTACT_EMAIL}</span>
                        </a>
                    </section>

                    <SiteFooter with_logo={true}>
                        <span class="footer-label">{"Oslo"}</span>
                    </SiteFooter>
                </div>
            </main>
            <style>
                {r#"
                .home-inner {
                    max-width: 780px;
                }
                .home-hero {
                    min-height: 70vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    margin-bottom: 8rem;
                }
                .home-hero-title {
                    display: flex;
                    align-items: flex-start;
                    gap: 1.25rem;
                    margin-bottom: 3rem;
                }
                .home-hero-logo {
                    margin-top: 0.5rem;
                    opacity: 0.9;
                }
                .home-hero-copy {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                    max-width: 500px;
                }
                .home-section {
                    margin-bottom: 8rem;
                }
                .home-section-long {
                    margin-bottom: 10rem;
                }
                .home-subtitle {
                    font-size: 1.125rem;
                    margin-bottom: 2.5rem;
                }
                .section-title {
                    font-size: 1.5rem;
                    margin-bottom: 1.25rem;
                }
                .home-narrow {
                    max-width: 460px;
                }
                .home-contact-text {
                    margin-bottom: 1.5rem;
                }
                .work-list {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .work-card {
                    position: relative;
                    padding: 1.5rem;
                    margin: 0 -1.5rem;
                    transition: all 0.5s ease-out;
                }
                .work-card-wash,
                .work-card-shadow {
                    position: absolute;
                    inset: 0;
                    opacity: 0;
                    transition: opacity 0.5s;
                }
                .work-card-wash {
                    background: linear-gradient(to bottom right, var(--card), transparent);
                }
                .work-card-shadow {
                    box-shadow: 0 8px 40px -12px rgba(0, 0, 0, 0.1);
                    border-radius: 2px;
                }
                .work-card-accent {
                    position: absolute;
                    left: 0;
                    top: 1.5rem;
                    bottom: 1.5rem;
                    width: 2px;
                    background: linear-gradient(to bottom, transparent, rgba(203, 179, 124, 0.6), transparent);
                    opacity: 0;
                    transform: scaleY(0);
                    transition: all 0.5s;
                }
                .work-card:hover .work-card-wash,
                .work-card:hover .work-card-shadow {
                    opacity: 1;
                }
                .work-card:hover .work-card-accent {
                    opacity: 1;
                    transform: scaleY(1);
                }
                .work-card-body {
                    position: relative;
                    display: flex;
                    gap: 1.25rem;
                }
                .work-card-icon {
                    flex-shrink: 0;
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: rgba(203, 179, 124, 0.5);
                    transition: color 0.5s;
                }
                .work-card:hover .work-card-icon {
                    color: var(--accent);
                }
                .work-card h3 {
                    font-family: var(--font-sans);
                    font-size: 0.8125rem;
                    font-weight: 500;
                    letter-spacing: 0.06em;
                    text-transform: uppercase;
                    color: var(--muted);
                    margin-bottom: 0.5rem;
                    transition: color 0.5s;
                }
                .work-card p {
                    color: var(--muted);
                    line-height: 1.75;
                    transition: color 0.5s;
                }
                .work-card:hover h3,
                .work-card:hover p {
                    color: var(--fg);
                }
                .luna-grid {
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                }
                .luna-eyebrow {
                    margin-bottom: 1.25rem;
                }
                .luna-text {
                    margin-bottom: 1.5rem;
                }
                .luna-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .luna-link-icon {
                    opacity: 0.5;
                }
                .luna-stage {
                    position: relative;
                }
                .luna-glow {
                    position: absolute;
                    inset: -1rem -2rem;
                    background: radial-gradient(ellipse at center, rgba(203, 179, 124, 0.15) 0%, transparent 65%);
                    transition: all 0.3s ease-out;
                }
                .luna-image {
                    position: relative;
                    transition: all 0.2s ease-out;
                }
                .luna-shadow {
                    position: absolute;
                    inset: 0;
                    filter: blur(40px);
                    background: linear-gradient(180deg, transparent 0%, rgba(0, 0, 0, 0.2) 100%);
                    transition: all 0.2s;
                }
                .luna-image img {
                    position: relative;
                    display: block;
                    width: 100%;
                    height: auto;
                    max-width: 380px;
                    margin: 0 auto;
                }
                .luna-floor-glow {
                    position: absolute;
                    bottom: -1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 75%;
                    height: 2.5rem;
                    filter: blur(24px);
                    background: radial-gradient(ellipse at center, rgba(203, 179, 124, 0.25) 0%, transparent 70%);
                    transition: all 0.3s;
                }
                @media (min-width: 768px) {
                    .home-hero,
                    .home-section {
                        margin-bottom: 11rem;
                    }
                    .home-section-long {
                        margin-bottom: 14rem;
                    }
                    .luna-grid {
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                    }
                    .luna-image img {
                        margin: 0 0 0 auto;
                    }
                }
                "#}
            </style>
        </>
    }
}
