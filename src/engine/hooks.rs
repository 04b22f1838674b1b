use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use super::progress::ScrollState;
use super::proximity::{ElementRect, ProximityTransform};
use super::reveal::RevealObserver;
use super::sampler::{ScrollSubject, WindowScrollSource};
use crate::config::RevealConfig;

/// Session-wide scroll context, created once by the app root.
#[derive(Clone)]
pub struct Viewport {
    pub subject: ScrollSubject,
    source: Option<Rc<WindowScrollSource>>,
}

impl PartialEq for Viewport {
    fn eq(&self, other: &Self) -> bool {
        self.subject == other.subject
    }
}

impl Viewport {
    /// Attaches the window listeners. Without a window (or if attaching
    /// fails) the subject simply never publishes and consumers stay at rest.
    pub fn attach() -> Self {
        let subject = ScrollSubject::new();
        let source = match WindowScrollSource::attach(subject.clone()) {
            Ok(source) => Some(Rc::new(source)),
            Err(err) => {
                log::warn!("Scroll effects disabled: {}", err);
                None
            }
        };
        Self { subject, source }
    }

    pub fn resample(&self) {
        if let Some(source) = &self.source {
            source.resample(&self.subject);
        }
    }
}

#[hook]
fn use_viewport() -> Option<Viewport> {
    let viewport = use_context::<Viewport>();
    if viewport.is_none() {
        log::warn!("Viewport context missing; scroll effects inactive");
    }
    viewport
}

/// Page scroll progress and the "scrolled past the top" flag.
#[hook]
pub fn use_scroll_state(threshold: f64) -> ScrollState {
    let viewport = use_viewport();
    let state = {
        let viewport = viewport.clone();
        use_state(move || {
            viewport
                .and_then(|v| v.subject.latest())
                .map(|sample| ScrollState::from_sample(&sample, threshold))
                .unwrap_or_default()
        })
    };

    {
        let state = state.clone();
        use_effect_with_deps(
            move |(viewport, threshold)| {
                let threshold = *threshold;
                let subscription = viewport.as_ref().map(|viewport| {
                    viewport.subject.subscribe(move |sample| {
                        state.set(ScrollState::from_sample(sample, threshold));
                    })
                });
                move || drop(subscription)
            },
            (viewport, threshold),
        );
    }

    *state
}

/// Parallax transform for the element behind `node`, recomputed on every
/// scroll and resize.
#[hook]
pub fn use_proximity_transform(node: NodeRef) -> ProximityTransform {
    let viewport = use_viewport();
    let transform = use_state(ProximityTransform::default);

    {
        let transform = transform.clone();
        use_effect_with_deps(
            move |(viewport, node)| {
                let measure = {
                    let node = node.clone();
                    move |viewport_height: f64| {
                        // The element may have unmounted between events.
                        let Some(element) = node.cast::<Element>() else {
                            return;
                        };
                        let rect = ElementRect::from(&element.get_bounding_client_rect());
                        transform.set(ProximityTransform::compute(rect, viewport_height));
                    }
                };

                let subscription = viewport.as_ref().map(|viewport| {
                    if let Some(sample) = viewport.subject.latest() {
                        measure(sample.viewport_height);
                    }
                    viewport
                        .subject
                        .subscribe(move |sample| measure(sample.viewport_height))
                });
                move || drop(subscription)
            },
            (viewport, node),
        );
    }

    *transform
}

/// Reveals `.reveal` children of the returned container as they scroll
/// into view. The observer lives as long as the component.
#[hook]
pub fn use_reveal(config: RevealConfig) -> NodeRef {
    let container = use_node_ref();

    {
        let container = container.clone();
        use_effect_with_deps(
            move |config| {
                let observer = container.cast::<Element>().and_then(|element| {
                    RevealObserver::observe(&element, config)
                        .map_err(|err| log::warn!("Reveal disabled: {}", err))
                        .ok()
                });
                move || drop(observer)
            },
            config,
        );
    }

    container
}
