use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::backdrop::Grain;
use crate::components::button::{Button, ButtonVariant};
use crate::components::footer::SiteFooter;
use crate::components::icons::ArrowIcon;
use crate::config::{self, RevealConfig, CONTACT_EMAIL};
use crate::engine::use_reveal;
use crate::Route;

const TOPICS: [&str; 5] = [
    "Feedback on Luna or our other projects",
    "Research collaborations on learning and cognition",
    "Partnership opportunities",
    "Questions about our approach or methodology",
    "General inquiries about Human Learning Lab",
];

#[function_component(Contact)]
pub fn contact() -> Html {
    let container = use_reveal(RevealConfig::eager());

    html! {
        <>
            <Grain />
            <main class="page">
                <div ref={container} class="page-inner page-wide">
                    <header class="contact-header">
                        <h1 class="page-title">{"Get in Touch"}</h1>
                        <p class="lede">
                            {"We're always interested in conversations about learning, tools, and the future of education."}
                        </p>
                    </header>

                    <section class="reveal contact-section">
                        <div class="contact-grid">
                            <div class="contact-column">
                                <div>
                                    <h2 class="contact-label">{"Email"}</h2>
                                    <Button
                                        href={format!("mailto:{}", CONTACT_EMAIL)}
                                        external={true}
                                        icon={ArrowIcon::External}
                                        variant={ButtonVariant::Large}
                                    >
                                        {CONTACT_EMAIL}
                                    </Button>
                                </div>
                                <div>
                                    <h2 class="contact-label">{"Location"}</h2>
                                    <p class="contact-location">{"Oslo, Norway"}</p>
                                </div>
                            </div>

                            <div class="contact-column">
                                <h2 class="contact-topics-title">{"What to reach out about"}</h2>
                                <ul class="arrow-list">
                                    { for TOPICS.iter().map(|topic| html! { <li>{*topic}</li> }) }
                                </ul>
                            </div>
                        </div>
                    </section>

                    <section class="reveal contact-section contact-response">
                        <h3 class="contact-label">{"Response Time"}</h3>
                        <p class="body-text">
                            {"We typically respond within 2-3 business days. We read every message personally, but we're a small team, so please be patient."}
                        </p>
                    </section>

                    <section class="reveal contact-section">
                        <div class="contact-banner">
                            <img src={config::asset_url("contact.png")} alt="Abstract architectural space" />
                            <div class="contact-banner-shade"></div>
                            <p class="contact-banner-text">
                                {"We're building tools for how people actually learn. If that resonates with you, we'd love to hear from you."}
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
                .contact-header {
                    margin-bottom: 4rem;
                }
                .contact-section {
                    margin-bottom: 6rem;
                }
                .contact-grid {
                    display: grid;
                    gap: 3rem;
                }
                .contact-column {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .contact-label {
                    font-family: var(--font-sans);
                    font-size: 0.8125rem;
                    font-weight: 500;
                    letter-spacing: 0.06em;
                    text-transform: uppercase;
                    color: var(--muted);
                    margin-bottom: 1rem;
                }
                .contact-location {
                    font-size: 1.125rem;
                }
                .contact-topics-title {
                    font-family: var(--font-sans);
                    font-size: 1.25rem;
                    font-weight: 500;
                }
                .contact-response {
                    padding: 2rem;
                    border-radius: 1rem;
                    background: linear-gradient(to bottom right, rgba(203, 179, 124, 0.05), transparent);
                    border: 1px solid rgba(203, 179, 124, 0.1);
                }
                .contact-response .body-text {
                    max-width: 600px;
                }
                .contact-banner {
                    position: relative;
                    width: 100%;
                    height: 24rem;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                }
                .contact-banner img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                :root.dark .contact-banner img {
                    opacity: 0.3;
                }
                .contact-banner-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.2), transparent);
                }
                .contact-banner-text {
                    position: absolute;
                    bottom: 2rem;
                    left: 2rem;
                    right: 2rem;
                    max-width: 500px;
                    color: #ffffff;
                    font-weight: 500;
                    font-size: 1.125rem;
                    line-height: 1.7;
                }
                @media (min-width: 768px) {
                    .contact-grid {
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                    }
                    .contact-section {
                        margin-bottom: 8rem;
                    }
                    .contact-response {
                        padding: 2.5rem;
                    }
                }
                "#}
            </style>
        </>
    }
}
