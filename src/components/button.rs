use yew::prelude::*;

use crate::components::icons::{arrow_icon, ArrowIcon};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Large,
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub href: AttrValue,
    pub children: Children,
    /// Opens in a new tab with `noopener`.
    #[prop_or_default]
    pub external: bool,
    #[prop_or_default]
    pub icon: ArrowIcon,
    #[prop_or_default]
    pub variant: ButtonVariant,
}

/// Gold pill link with a left-to-right fill on hover.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let size_class = match props.variant {
        ButtonVariant::Default => "fill-button-default",
        ButtonVariant::Large => "fill-button-large",
    };
    let icon_class = match props.icon {
        ArrowIcon::External => "fill-button-icon fill-button-icon-lift",
        _ => "fill-button-icon",
    };

    let content = html! {
        <>
            <div class="fill-button-fill"></div>
            <span class="fill-button-text">{ for props.children.iter() }</span>
            { arrow_icon(props.icon, icon_class) }
        </>
    };

    let class = classes!("fill-button", size_class);

    let link = if props.external {
        html! {
            <a href={props.href.clone()} target="_blank" rel="noopener noreferrer" {class}>
                { content }
            </a>
        }
    } else {
        html! {
            <a href={props.href.clone()} {class}>
                { content }
            </a>
        }
    };

    html! {
        <>
            { link }
            <style>
                {r#"
                .fill-button {
                    position: relative;
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    background: rgba(203, 179, 124, 0.3);
                    border: 1px solid rgba(203, 179, 124, 0.5);
                    border-radius: 0.5rem;
                    overflow: hidden;
                    text-decoration: none;
                    transition: all 0.3s ease-out;
                }
                .fill-button:hover {
                    border-color: var(--accent);
                    box-shadow: 0 12px 40px -12px rgba(203, 179, 124, 0.6);
                    transform: translateY(-2px) scale(1.05);
                }
                .fill-button-default {
                    padding: 0.75rem 1.5rem;
                    font-size: 0.9375rem;
                }
                .fill-button-large {
                    padding: 0.5rem 1.25rem;
                    font-size: 1.5rem;
                }
                .fill-button-fill {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to right, #cbb37c, #b8a066);
                    transform: scaleX(0);
                    transform-origin: left;
                    transition: transform 0.5s ease-out;
                }
                .fill-button:hover .fill-button-fill {
                    transform: scaleX(1);
                }
                .fill-button-text {
                    position: relative;
                    color: #1a1510;
                    font-weight: 400;
                }
                .fill-button-icon {
                    position: relative;
                    color: #1a1510;
                    transition: transform 0.3s;
                }
                .fill-button:hover .fill-button-icon {
                    transform: translateX(6px);
                }
                .fill-button:hover .fill-button-icon-lift {
                    transform: translate(6px, -4px);
                }
                @media (min-width: 640px) {
                    .fill-button-large {
                        font-size: 1.75rem;
                    }
                }
                "#}
            </style>
        </>
    }
}
