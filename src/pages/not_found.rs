use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::backdrop::Grain;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <>
            <Grain />
            <main class="page">
                <div class="page-inner page-narrow">
                    <p class="eyebrow">{"404"}</p>
                    <h1 class="page-title">{"Page not found"}</h1>
                    <p class="lede not-found-text">{"The page you were looking for doesn't exist or has moved."}</p>
                    <Link<Route> to={Route::Home} classes="link-hover">{"← Home"}</Link<Route>>
                </div>
            </main>
            <style>
                {r#"
                .not-found-text {
                    margin-bottom: 2rem;
                }
                "#}
            </style>
        </>
    }
}
