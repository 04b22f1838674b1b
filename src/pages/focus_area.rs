use yew::prelude::*;

use crate::components::backdrop::Grain;
use crate::components::icons::back_chevron;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FocusArea {
    StrategicPositioning,
    ProductTechnology,
    Larpa,
}

impl FocusArea {
    pub fn title(self) -> &'static str {
        match self {
            FocusArea::StrategicPositioning => "Strategic Positioning",
            FocusArea::ProductTechnology => "Product & Technology",
            FocusArea::Larpa => "LARPA",
        }
    }

    /// `None` while the area has no published description yet.
    pub fn summary(self) -> Option<&'static str> {
        match self {
            FocusArea::StrategicPositioning => {
                Some("Learning as a strategic capability. An expanded opportunity space.")
            }
            FocusArea::ProductTechnology => None,
            FocusArea::Larpa => Some(
                "A place to bring a learning idea. Team, capital, and responsibility to build it all the way through.",
            ),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FocusAreaProps {
    pub area: FocusArea,
}

#[function_component(FocusAreaPage)]
pub fn focus_area(props: &FocusAreaProps) -> Html {
    let area = props.area;

    let body = match area.summary() {
        Some(summary) => html! {
            <div class="focus-body">
                <p class="body-text">{summary}</p>
                <p class="body-text focus-pending">{"More on this area soon."}</p>
            </div>
        },
        None => html! {
            <div class="focus-soon">
                <h2>{"Coming Soon"}</h2>
                <p class="body-text">{"We're working on something interesting here. More details will be shared soon."}</p>
                <p class="focus-thanks">{"Thanks for your interest, we appreciate it."}</p>
            </div>
        },
    };

    html! {
        <>
            <Grain />
            <main class="page">
                <div class="page-inner focus-inner">
                    <a href={config::page_url("/#what-we-work-on")} class="back-link">
                        { back_chevron() }
                        {"Back"}
                    </a>
                    <div class="focus-badge">
                        <span class="eyebrow">{"Focus Area"}</span>
                    </div>
                    <h1 class="focus-title">{area.title()}</h1>
                    { body }
                </div>
            </main>
            <style>
                {r#"
                .focus-inner {
                    max-width: 800px;
                }
                .back-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 3rem;
                    padding: 0.625rem 1.25rem;
                    border-radius: 9999px;
                    background: var(--nav-bg-scrolled);
                    backdrop-filter: blur(12px);
                    color: var(--fg);
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-decoration: none;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    transition: all 0.3s;
                }
                .back-link:hover {
                    background: rgba(203, 179, 124, 0.2);
                }
                .focus-badge {
                    margin-bottom: 2rem;
                }
                .focus-title {
                    font-size: 2.5rem;
                    letter-spacing: -0.02em;
                    line-height: 1.1;
                    margin-bottom: 3rem;
                }
                .focus-body {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    font-size: 1.0625rem;
                }
                .focus-pending {
                    opacity: 0.8;
                }
                .focus-soon {
                    max-width: 600px;
                    margin: 0 auto;
                    padding-top: 3rem;
                    text-align: center;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .focus-soon h2 {
                    font-size: 2rem;
                    letter-spacing: -0.02em;
                }
                .focus-thanks {
                    padding-top: 2rem;
                    font-size: 0.9375rem;
                    font-weight: 500;
                    color: var(--accent);
                }
                @media (min-width: 768px) {
                    .focus-title {
                        font-size: 3.5rem;
                    }
                    .focus-soon h2 {
                        font-size: 2.5rem;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_product_technology_is_coming_soon() {
        assert!(FocusArea::StrategicPositioning.summary().is_some());
        assert!(FocusArea::Larpa.summary().is_some());
        assert!(FocusArea::ProductTechnology.summary().is_none());
    }
}
