use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or(32)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    html! {
        <img
            src={config::asset_url("logo.svg")}
            alt="Human Learning Lab"
            width={props.size.to_string()}
            height={props.size.to_string()}
            class={props.class.clone()}
        />
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum WorkIcon {
    Learning,
    Products,
    Practice,
}

pub fn work_icon(icon: WorkIcon) -> Html {
    let paths = match icon {
        WorkIcon::Learning => html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <path d="M12 6v6l4 2" />
            </>
        },
        WorkIcon::Products => html! {
            <>
                <rect x="3" y="3" width="18" height="18" rx="2" />
                <path d="M9 3v18" />
                <path d="M3 9h6" />
            </>
        },
        WorkIcon::Practice => html! {
            <>
                <path d="M12 2v4" />
                <path d="M12 18v4" />
                <path d="M4.93 4.93l2.83 2.83" />
                <path d="M16.24 16.24l2.83 2.83" />
                <path d="M2 12h4" />
                <path d="M18 12h4" />
                <path d="M4.93 19.07l2.83-2.83" />
                <path d="M16.24 7.76l2.83-2.83" />
            </>
        },
    };

    html! {
        <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">
            { paths }
        </svg>
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ArrowIcon {
    /// Long arrow, for "read more" style links.
    Arrow,
    /// Diagonal arrow for links that leave the site.
    External,
    #[default]
    Chevron,
}

pub fn arrow_icon(icon: ArrowIcon, class: &str) -> Html {
    let class = class.to_string();
    match icon {
        ArrowIcon::External => html! {
            <svg width="14" height="14" viewBox="0 0 14 14" {class}>
                <path d="M3 2h9v9M12 2L2 12" stroke="currentColor" stroke-width="1.5" fill="none"
                    stroke-linecap="round" stroke-linejoin="round" />
            </svg>
        },
        ArrowIcon::Arrow => html! {
            <svg width="16" height="16" viewBox="0 0 16 16" {class}>
                <path d="M1 8h14M11 4l4 4-4 4" stroke="currentColor" stroke-width="1.5" fill="none"
                    stroke-linecap="round" stroke-linejoin="round" />
            </svg>
        },
        ArrowIcon::Chevron => html! {
            <svg width="16" height="16" viewBox="0 0 16 16" {class}>
                <path d="M6 4l4 4-4 4" stroke="currentColor" stroke-width="1.5" fill="none"
                    stroke-linecap="round" stroke-linejoin="round" />
            </svg>
        },
    }
}

pub fn back_chevron() -> Html {
    html! {
        <svg width="16" height="16" viewBox="0 0 16 16" fill="none">
            <path d="M10 12L6 8l4-4" stroke="currentColor" stroke-width="1.5"
                stroke-linecap="round" stroke-linejoin="round" />
        </svg>
    }
}
