use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::Logo;
use crate::config::{self, SCROLLED_THRESHOLD_PX};
use crate::engine::use_scroll_state;
use crate::store::{MenuAction, MenuState, Theme, ThemeContext};
use crate::Route;

const FOCUS_AREAS: [(&str, Route); 3] = [
    ("Strategic Positioning", Route::StrategicPositioning),
    ("Product & Technology", Route::ProductTechnology),
    ("LARPA", Route::Larpa),
];

#[function_component(Header)]
pub fn header() -> Html {
    let scroll = use_scroll_state(SCROLLED_THRESHOLD_PX);
    let menu = use_reducer(MenuState::default);
    let theme = use_context::<ThemeContext>();

    let on_menu_enter = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Enter))
    };
    let on_menu_leave = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Leave))
    };

    let theme_button = match theme {
        Some(ctx) => {
            let toggle = ctx.toggle.clone();
            let onclick = Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                toggle.emit(());
            });
            let (label, glyph) = match ctx.theme {
                Theme::Light => ("Switch to dark theme", "☾"),
                Theme::Dark => ("Switch to light theme", "☀"),
            };
            html! {
                <button class="theme-toggle" aria-label={label} title={label} {onclick}>
                    {glyph}
                </button>
            }
        }
        None => html! {},
    };

    html! {
        <header class="site-header">
            <nav class={classes!("site-nav", scroll.scrolled.then(|| "scrolled"))}>
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <Logo size={22} class="nav-logo-mark" />
                    <span class="nav-logo-text">{"Human Learning Lab"}</span>
                </Link<Route>>

                <div class="nav-links">
                    <Link<Route> to={Route::About} classes="nav-link">
                        <span class="nav-link-hover"></span>
                        <span class="nav-link-label">{"About"}</span>
                    </Link<Route>>
                    <div
                        class="nav-menu"
                        onmouseenter={on_menu_enter}
                        onmouseleave={on_menu_leave}
                    >
                        <span class="nav-link nav-menu-trigger" aria-haspopup="true" aria-expanded={menu.open.to_string()}>
                            <span class="nav-link-hover"></span>
                            <span class="nav-link-label">{"Focus areas"}</span>
                        </span>
                        <div class={classes!("nav-dropdown", menu.open.then(|| "open"))}>
                            { for FOCUS_AREAS.iter().map(|(label, route)| html! {
                                <Link<Route> to={route.clone()} classes="nav-dropdown-item">
                                    {*label}
                                </Link<Route>>
                            }) }
                        </div>
                    </div>
                    <a href={config::page_url("/#projects")} class="nav-link">
                        <span class="nav-link-hover"></span>
                        <span class="nav-link-label">{"Projects"}</span>
                    </a>
                    <Link<Route> to={Route::Blog} classes="nav-link">
                        <span class="nav-link-hover"></span>
                        <span class="nav-link-label">{"Blog"}</span>
                    </Link<Route>>
                    <a href={config::page_url("/#contact")} class="nav-link">
                        <span class="nav-link-hover"></span>
                        <span class="nav-link-label">{"Contact"}</span>
                    </a>
                    { theme_button }
                </div>
            </nav>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1rem 2rem 0;
                }
                .site-nav {
                    max-width: 1400px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0.75rem 1.5rem;
                    border-radius: 1rem;
                    background: var(--nav-bg);
                    backdrop-filter: blur(16px) saturate(160%);
                    -webkit-backdrop-filter: blur(16px) saturate(160%);
                    border: 1px solid var(--nav-border);
                    box-shadow: 0 2px 16px -2px rgba(0,0,0,0.06), 0 1px 2px rgba(0,0,0,0.03);
                    transition: all 0.4s ease-out;
                }
                .site-nav.scrolled {
                    background: var(--nav-bg-scrolled);
                    backdrop-filter: blur(24px) saturate(200%);
                    -webkit-backdrop-filter: blur(24px) saturate(200%);
                    border: 1px solid var(--border);
                    box-shadow: 0 4px 24px -4px rgba(0,0,0,0.12), 0 2px 6px rgba(0,0,0,0.06);
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    text-decoration: none;
                    color: var(--fg);
                }
                .nav-logo-mark {
                    opacity: 0.8;
                    transition: opacity 0.3s;
                }
                .nav-logo:hover .nav-logo-mark {
                    opacity: 1;
                }
                .nav-logo-text {
                    font-size: 0.9375rem;
                    font-weight: 500;
                    letter-spacing: -0.01em;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .nav-link {
                    position: relative;
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: var(--fg-soft);
                    text-decoration: none;
                    border-radius: 0.5rem;
                    overflow: hidden;
                    cursor: pointer;
                    transition: color 0.25s;
                }
                .nav-link:hover {
                    color: var(--fg);
                }
                .nav-link-hover {
                    position: absolute;
                    inset: 0;
                    background: var(--accent-faint);
                    opacity: 0;
                    border-radius: 0.5rem;
                    transition: opacity 0.25s;
                }
                .nav-link:hover .nav-link-hover {
                    opacity: 1;
                }
                .nav-link-label {
                    position: relative;
                }
                .nav-menu {
                    position: relative;
                }
                .nav-dropdown {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    min-width: 220px;
                    padding: 0.5rem;
                    border-radius: 0.75rem;
                    background: var(--nav-bg-scrolled);
                    border: 1px solid var(--border);
                    box-shadow: 0 12px 32px -8px rgba(0,0,0,0.15);
                    opacity: 0;
                    transform: translateY(-6px);
                    pointer-events: none;
                    transition: opacity 0.2s ease-out, transform 0.2s ease-out;
                }
                .nav-dropdown.open {
                    opacity: 1;
                    transform: translateY(0);
                    pointer-events: auto;
                }
                .nav-dropdown-item {
                    display: block;
                    padding: 0.5rem 0.75rem;
                    border-radius: 0.5rem;
                    font-size: 0.875rem;
                    color: var(--fg-soft);
                    text-decoration: none;
                }
                .nav-dropdown-item:hover {
                    color: var(--fg);
                    background: var(--accent-faint);
                }
                .theme-toggle {
                    margin-left: 0.5rem;
                    width: 2.25rem;
                    height: 2.25rem;
                    border-radius: 0.5rem;
                    border: 1px solid var(--border);
                    background: transparent;
                    color: var(--fg);
                    cursor: pointer;
                    font-size: 1rem;
                    transition: background 0.25s;
                }
                .theme-toggle:hover {
                    background: var(--accent-faint);
                }
                @media (max-width: 640px) {
                    .site-header {
                        padding: 1rem 1rem 0;
                    }
                    .nav-logo-text {
                        display: none;
                    }
                    .nav-link {
                        padding: 0.5rem 0.6rem;
                    }
                }
                "#}
            </style>
        </header>
    }
}
