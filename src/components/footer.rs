use yew::prelude::*;

use crate::components::icons::Logo;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    /// Right-hand side of the footer: a location or navigation links.
    pub children: Children,
    #[prop_or_default]
    pub with_logo: bool,
    #[prop_or(true)]
    pub reveal: bool,
}

#[function_component(SiteFooter)]
pub fn site_footer(props: &FooterProps) -> Html {
    html! {
        <footer class={classes!("site-footer", props.reveal.then(|| "reveal"))}>
            <div class="site-footer-brand">
                if props.with_logo {
                    <Logo size={20} class="site-footer-logo" />
                }
                <span class="footer-label">{"Human Learning Lab"}</span>
            </div>
            <div class="site-footer-aside">
                { for props.children.iter() }
            </div>
        </footer>
    }
}
