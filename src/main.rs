use log::{info, Level};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

mod blog;
mod config;
mod engine;
mod error;
mod store;
mod styles;
mod components {
    pub mod backdrop;
    pub mod button;
    pub mod footer;
    pub mod header;
    pub mod icons;
}
mod pages {
    pub mod about;
    pub mod blog;
    pub mod contact;
    pub mod focus_area;
    pub mod home;
    pub mod not_found;
    pub mod projects;
}

use components::header::Header;
use engine::Viewport;
use pages::{
    about::About,
    blog::{Blog, BlogPostPage},
    contact::Contact,
    focus_area::{FocusArea, FocusAreaPage},
    home::Home,
    not_found::NotFound,
    projects::Projects,
};
use store::ThemeProvider;
use styles::GlobalStyles;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[at("/projects")]
    Projects,
    #[at("/contact")]
    Contact,
    #[at("/strategic-positioning")]
    StrategicPositioning,
    #[at("/product-technology")]
    ProductTechnology,
    #[at("/larpa")]
    Larpa,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        },
        Route::BlogPost { slug } => {
            info!("Rendering Blog post {}", slug);
            html! { <BlogPostPage {slug} /> }
        },
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <Projects /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::StrategicPositioning => {
            info!("Rendering Strategic Positioning page");
            html! { <FocusAreaPage area={FocusArea::StrategicPositioning} /> }
        },
        Route::ProductTechnology => {
            info!("Rendering Product & Technology page");
            html! { <FocusAreaPage area={FocusArea::ProductTechnology} /> }
        },
        Route::Larpa => {
            info!("Rendering LARPA page");
            html! { <FocusAreaPage area={FocusArea::Larpa} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

/// Element id named by a location hash such as `#projects`, if any.
fn hash_target(hash: &str) -> Option<&str> {
    Some(hash.trim_start_matches('#')).filter(|id| !id.is_empty())
}

/// Jumps to the section named in the URL hash, or to the top when there is
/// none. The jump is instant so reveal sections on the new page don't fire
/// mid-animation.
fn reset_scroll(window: &web_sys::Window) {
    let hash = window.location().hash().unwrap_or_default();
    let target = hash_target(&hash).and_then(|id| {
        window
            .document()
            .and_then(|document| document.get_element_by_id(id))
    });

    match target {
        Some(element) => element.scroll_into_view(),
        None => {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Instant);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Resets the scroll position on every route change and refreshes the
/// shared scroll sample, since the new page has a different height.
#[function_component(RouteChangeReset)]
fn route_change_reset() -> Html {
    let route = use_route::<Route>();
    let viewport = use_context::<Viewport>();

    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                reset_scroll(&window);
            }
            if let Some(viewport) = viewport {
                viewport.resample();
            }
            || ()
        },
        route,
    );

    html! {}
}

#[function_component]
fn App() -> Html {
    // One scroll source for the whole session.
    let viewport = use_state(Viewport::attach);

    html! {
        <ThemeProvider>
            <GlobalStyles />
            <ContextProvider<Viewport> context={(*viewport).clone()}>
                <BrowserRouter basename={config::router_basename()}>
                    <RouteChangeReset />
                    <Header />
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<Viewport>>
        </ThemeProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting Human Learning Lab site");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_post_route_carries_slug() {
        assert_eq!(
            Route::recognize("/blog/ai-in-ten-years"),
            Some(Route::BlogPost {
                slug: "ai-in-ten-years".to_string()
            })
        );
    }

    #[test]
    fn focus_area_routes_recognized() {
        assert_eq!(Route::recognize("/larpa"), Some(Route::Larpa));
        assert_eq!(
            Route::recognize("/product-technology"),
            Some(Route::ProductTechnology)
        );
    }

    #[test]
    fn routes_render_their_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(
            Route::BlogPost {
                slug: "consumption-vs-learning".to_string()
            }
            .to_path(),
            "/blog/consumption-vs-learning"
        );
    }

    #[test]
    fn hash_names_scroll_target() {
        assert_eq!(hash_target("#projects"), Some("projects"));
        assert_eq!(hash_target("#what-we-work-on"), Some("what-we-work-on"));
    }

    #[test]
    fn empty_hash_scrolls_to_top() {
        assert_eq!(hash_target(""), None);
        assert_eq!(hash_target("#"), None);
    }

    #[test]
    fn every_post_has_a_route() {
        for post in blog::POSTS {
            let path = Route::BlogPost {
                slug: post.slug.to_string(),
            }
            .to_path();
            assert_eq!(
                Route::recognize(&path),
                Some(Route::BlogPost {
                    slug: post.slug.to_string()
                })
            );
        }
    }
}
