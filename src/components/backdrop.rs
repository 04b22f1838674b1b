use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProgressProps {
    /// Page scroll progress in `[0, 1]`.
    pub progress: f64,
}

/// Warm light that drifts down the page and a cool shadow that rises.
#[function_component(ScrollAtmosphere)]
pub fn scroll_atmosphere(props: &ProgressProps) -> Html {
    let p = props.progress;
    let warm = format!(
        "background: radial-gradient(ellipse 100% 60% at 50% {:.2}%, var(--atmosphere-warm) 0%, transparent 50%);",
        20.0 + p * 50.0
    );
    let cool = format!(
        "background: radial-gradient(ellipse 120% 40% at 50% {:.2}%, var(--atmosphere-cool) 0%, transparent 50%);",
        100.0 - p * 20.0
    );

    html! {
        <>
            <div class="atmosphere atmosphere-warm" style={warm}></div>
            <div class="atmosphere" style={cool}></div>
        </>
    }
}

#[function_component(ParallaxShapes)]
pub fn parallax_shapes(props: &ProgressProps) -> Html {
    let p = props.progress;

    html! {
        <div class="parallax-shapes">
            <div class="shape shape-shadow-circle" style={format!("top: {:.2}%;", 5.0 - p * 25.0)}></div>
            <div class="shape shape-accent-circle" style={format!("top: {:.2}%;", 55.0 + p * 25.0)}></div>
            <div class="shape shape-line" style={format!("top: {:.2}%;", 20.0 - p * 40.0)}></div>
        </div>
    }
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressProps) -> Html {
    html! {
        <div class="progress-bar" style={format!("transform: scaleX({:.4});", props.progress)}></div>
    }
}

/// Fixed film-grain overlay shared by every page.
#[function_component(Grain)]
pub fn grain() -> Html {
    html! { <div class="grain"></div> }
}
