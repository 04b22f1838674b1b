use yew::prelude::*;
use yew_router::prelude::*;

use crate::blog::{self, BlogPost};
use crate::components::backdrop::Grain;
use crate::components::footer::SiteFooter;
use crate::components::icons::{arrow_icon, ArrowIcon};
use crate::config::RevealConfig;
use crate::engine::use_reveal;
use crate::pages::not_found::NotFound;
use crate::Route;

#[derive(Properties, PartialEq)]
struct PostPreviewProps {
    post: &'static BlogPost,
}

#[function_component(PostPreview)]
fn post_preview(props: &PostPreviewProps) -> Html {
    let post = props.post;
    html! {
        <Link<Route> to={Route::BlogPost { slug: post.slug.to_string() }} classes="post-preview reveal">
            <article class="post-preview-card">
                <div class="post-preview-wash"></div>
                <div class="post-preview-accent"></div>
                <div class="post-preview-body">
                    <div class="post-meta">
                        <span class="eyebrow">{post.date}</span>
                        <div class="post-meta-rule"></div>
                    </div>
                    <h2>{post.title}</h2>
                    <p class="body-text">{post.excerpt}</p>
                    <div class="post-read-more">
                        <span>{"Read more"}</span>
                        { arrow_icon(ArrowIcon::Arrow, "post-read-more-icon") }
                    </div>
                </div>
            </article>
        </Link<Route>>
    }
}

#[function_component(Blog)]
pub fn blog_list() -> Html {
    let container = use_reveal(RevealConfig::default());

    html! {
        <>
            <Grain />
            <main class="page">
                <div ref={container} class="page-inner page-narrow">
                    <header class="blog-header">
                        <h1 class="page-title">{"Blog"}</h1>
                        <p class="body-text blog-intro">{"Thoughts on learning, tools, and the future."}</p>
                    </header>

                    <div class="post-list">
                        { for blog::POSTS.iter().map(|post| html! {
                            <PostPreview key={post.slug} {post} />
                        }) }
                    </div>

                    <div class="blog-footer">
                        <SiteFooter>
                            <Link<Route> to={Route::Home} classes="link-hover">{"Home"}</Link<Route>>
                        </SiteFooter>
                    </div>
                </div>
            </main>
            <style>
                {r#"
                .blog-header {
                    margin-bottom: 4rem;
                }
                .blog-intro {
                    max-width: 480px;
                }
                .post-list {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .post-preview {
                    display: block;
                    color: inherit;
                    text-decoration: none;
                }
                .post-preview-card {
                    position: relative;
                    padding: 2rem;
                    margin: 0 -2rem;
                    transition: all 0.5s ease-out;
                }
                .post-preview-wash {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom right, var(--card), transparent);
                    box-shadow: 0 8px 40px -12px rgba(0, 0, 0, 0.08);
                    opacity: 0;
                    transition: opacity 0.5s;
                }
                .post-preview-accent {
                    position: absolute;
                    left: 0;
                    top: 2rem;
                    bottom: 2rem;
                    width: 2px;
                    background: linear-gradient(to bottom, transparent, rgba(203, 179, 124, 0.6), transparent);
                    opacity: 0;
                    transform: scaleY(0);
                    transition: all 0.5s;
                }
                .post-preview:hover .post-preview-wash {
                    opacity: 1;
                }
                .post-preview:hover .post-preview-accent {
                    opacity: 1;
                    transform: scaleY(1);
                }
                .post-preview-body {
                    position: relative;
                }
                .post-meta {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }
                .post-meta-rule {
                    height: 1px;
                    width: 1.5rem;
                    background: linear-gradient(to right, rgba(26, 25, 24, 0.15), transparent);
                }
                .post-preview h2 {
                    font-size: 1.5rem;
                    line-height: 1.15;
                    margin-bottom: 1rem;
                    transition: color 0.5s;
                }
                .post-preview:hover h2 {
                    color: var(--accent);
                }
                .post-preview .body-text {
                    margin-bottom: 1.25rem;
                }
                .post-read-more {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    transition: color 0.5s;
                }
                .post-preview:hover .post-read-more {
                    color: var(--accent);
                }
                .post-read-more-icon {
                    opacity: 0.5;
                    transition: all 0.5s;
                }
                .post-preview:hover .post-read-more-icon {
                    opacity: 1;
                    transform: translateX(4px);
                }
                .blog-footer {
                    margin-top: 8rem;
                }
                "#}
            </style>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub slug: String,
}

#[function_component(BlogPostPage)]
pub fn blog_post(props: &BlogPostProps) -> Html {
    let container = use_reveal(RevealConfig::default());

    let Some(post) = blog::find(&props.slug) else {
        log::info!("No blog post for slug {:?}", props.slug);
        return html! { <NotFound /> };
    };

    html! {
        <>
            <Grain />
            <main class="page">
                <div ref={container} class="page-inner page-narrow">
                    <article class="reveal">
                        <div class="post-meta">
                            <span class="eyebrow">{post.date}</span>
                            <div class="post-meta-rule"></div>
                        </div>
                        <h1 class="post-title">{post.title}</h1>
                        <div class="post-content">
                            { for post.paragraphs().map(|paragraph| html! {
                                <p class="body-text">{paragraph}</p>
                            }) }
                        </div>
                    </article>

                    <div class="post-footer">
                        <SiteFooter>
                            <Link<Route> to={Route::Blog} classes="link-hover">{"← All posts"}</Link<Route>>
                            <Link<Route> to={Route::Home} classes="link-hover">{"Home"}</Link<Route>>
                        </SiteFooter>
                    </div>
                </div>
            </main>
            <style>
                {r#"
                .post-meta {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .post-meta-rule {
                    height: 1px;
                    width: 2rem;
                    background: linear-gradient(to right, rgba(26, 25, 24, 0.2), transparent);
                }
                .post-title {
                    font-size: 2.5rem;
                    line-height: 1.05;
                    letter-spacing: -0.03em;
                    margin-bottom: 3rem;
                }
                .post-content p {
                    font-size: 1.0625rem;
                    margin-bottom: 1.5rem;
                }
                .post-footer {
                    margin-top: 5rem;
                }
                @media (min-width: 768px) {
                    .post-title {
                        font-size: 3.5rem;
                        margin-bottom: 4rem;
                    }
                    .post-footer {
                        margin-top: 7rem;
                    }
                }
                "#}
            </style>
        </>
    }
}
