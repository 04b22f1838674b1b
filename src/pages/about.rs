use yew::prelude::*;

use crate::components::backdrop::Grain;
use crate::components::footer::SiteFooter;
use crate::config::RevealConfig;
use crate::engine::use_reveal;

const BACKGROUND: [(&str, &str); 5] = [
    (
        "Neuroscience",
        "We understand how the brain encodes, consolidates, and retrieves information. This isn't theoretical. It shapes every decision we make about how our tools work.",
    ),
    (
        "Entrepreneurship",
        "Serial founders who have built, scaled, and learned from both successes and failures. We know how to move from idea to reality.",
    ),
    (
        "Design",
        "Great tools feel obvious in retrospect. Getting there requires obsessive attention to detail and a willingness to start over when something doesn't work.",
    ),
    (
        "Engineering",
        "Deep technical expertise in building systems that work reliably at scale. We care about performance, not just features.",
    ),
    (
        "Elite Performance",
        "Experience at the highest levels of competitive sport. We know what it takes to improve through deliberate practice, feedback, and sustained effort over years.",
    ),
];

#[function_component(About)]
pub fn about() -> Html {
    let container = use_reveal(RevealConfig::default());

    html! {
        <>
            <Grain />
            <main class="page">
                <div ref={container} class="page-inner page-wide about-inner">
                    <header class="reveal about-block">
                        <h1 class="page-title">{"About Us"}</h1>
                        <p class="lede">{"We're a multidisciplinary team building tools for how people actually learn."}</p>
                    </header>

                    <section class="reveal about-block">
                        <p class="body-text about-paragraph">
                            {"Learning is often treated as a problem of content delivery. We think that's backwards. The challenge isn't access to information. It's turning information into understanding, and understanding into capability."}
                        </p>
                        <p class="body-text about-paragraph">
                            {"That requires a different approach. One that draws on neuroscience, design, engineering, and the lived experience of high performance."}
                        </p>
                    </section>

                    <section class="reveal about-block">
                        <h2 class="about-heading about-heading-spaced">{"Our Background"}</h2>
                        <div class="about-background">
                            { for BACKGROUND.iter().map(|(field, text)| html! {
                                <div class="about-field">
                                    <h3>{*field}</h3>
                                    <p class="body-text">{*text}</p>
                                </div>
                            }) }
                        </div>
                    </section>

                    <section class="reveal about-block">
                        <h2 class="about-heading">{"Why This Combination Matters"}</h2>
                        <p class="body-text about-paragraph about-narrow">
                            {"Building effective learning tools requires understanding how the mind works, what motivates behavior change, and how to craft experiences that feel natural rather than forced."}
                        </p>
                        <p class="body-text about-narrow">
                            {"It also requires the discipline to build slowly, test rigorously, and accept that real insight takes time. We're not looking for quick wins. We're building for the long term."}
                        </p>
                    </section>

                    <div class="reveal about-block">
                        <div class="divider"></div>
                    </div>

                    <section class="reveal about-block about-block-last">
                        <h2 class="about-heading">{"What We're Building"}</h2>
                        <p class="body-text about-paragraph about-narrow">
                            {"Tools that help people learn better. Starting with podcasts, expanding to other forms of long-form content, and eventually to any situation where sustained learning matters."}
                        </p>
                        <p class="body-text about-narrow">
                            {"Our first product is Luna, a podcast player designed around how learning actually works. It's the beginning of a longer journey."}
                        </p>
                    </section>

                    <SiteFooter>
                        <span class="footer-label">{"Oslo"}</span>
                    </SiteFooter>
                </div>
            </main>
            <style>
                {r#"
                .about-block {
                    margin-bottom: 6rem;
                }
                .about-block-last {
                    margin-bottom: 8rem;
                }
                .about-heading {
                    font-size: 1.5rem;
                    margin-bottom: 1.5rem;
                }
                .about-heading-spaced {
                    margin-bottom: 3rem;
                }
                .about-paragraph {
                    font-size: 1.0625rem;
                    margin-bottom: 1.5rem;
                }
                .about-narrow {
                    max-width: 560px;
                }
                .about-background {
                    display: flex;
                    flex-direction: column;
                    gap: 2.5rem;
                }
                .about-field h3 {
                    font-family: var(--font-sans);
                    font-size: 0.8125rem;
                    font-weight: 500;
                    letter-spacing: 0.06em;
                    text-transform: uppercase;
                    color: var(--accent);
                    margin-bottom: 0.75rem;
                }
                @media (min-width: 768px) {
                    .about-block {
                        margin-bottom: 8rem;
                    }
                    .about-block-last {
                        margin-bottom: 10rem;
                    }
                }
                "#}
            </style>
        </>
    }
}
