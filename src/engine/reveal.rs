use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::RevealConfig;
use crate::error::SiteError;

pub const VISIBLE_CLASS: &str = "visible";
const INDEX_ATTR: &str = "data-reveal-index";

/// One-way visibility flags for a fixed set of elements.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealLatch {
    visible: Vec<bool>,
}

impl RevealLatch {
    pub fn new(len: usize) -> Self {
        Self {
            visible: vec![false; len],
        }
    }

    /// Applies one intersection report. Returns `true` only on the
    /// transition from hidden to revealed. Leaving the viewport never
    /// clears a flag.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        match self.visible.get_mut(index) {
            Some(flag) if intersecting && !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn revealed_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }
}

/// Watches the revealable children of a container and latches each one
/// visible the first time it enters the viewport.
///
/// Children added after [`RevealObserver::observe`] are not picked up.
/// Dropping the observer disconnects it.
pub struct RevealObserver {
    observer: IntersectionObserver,
    latch: Rc<RefCell<RevealLatch>>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn observe(container: &Element, config: &RevealConfig) -> Result<Self, SiteError> {
        let targets = container.query_selector_all(config.selector)?;
        let count = targets.length() as usize;
        let latch = Rc::new(RefCell::new(RevealLatch::new(count)));

        let callback = {
            let latch = latch.clone();
            Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        let target = entry.target();
                        let Some(index) = target
                            .get_attribute(INDEX_ATTR)
                            .and_then(|i| i.parse::<usize>().ok())
                        else {
                            continue;
                        };
                        if latch.borrow_mut().observe(index, entry.is_intersecting()) {
                            if let Err(err) = target.class_list().add_1(VISIBLE_CLASS) {
                                log::warn!("Could not mark element revealed: {:?}", err);
                            }
                            observer.unobserve(&target);
                        }
                    }
                },
            )
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        options.set_root_margin(config.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        for i in 0..targets.length() {
            let Some(element) = targets.item(i).and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            element.set_attribute(INDEX_ATTR, &i.to_string())?;
            observer.observe(&element);
        }

        log::debug!(
            "Observing {} revealable elements (threshold {}, margin {})",
            count,
            config.threshold,
            config.root_margin
        );

        Ok(Self {
            observer,
            latch,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
        log::debug!(
            "Disconnected reveal observer ({} of {} revealed)",
            self.latch.borrow().revealed_count(),
            self.latch.borrow().len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let latch = RevealLatch::new(3);
        assert_eq!(latch.revealed_count(), 0);
        assert!(!latch.is_visible(0));
    }

    #[test]
    fn first_intersection_reveals() {
        let mut latch = RevealLatch::new(2);
        assert!(latch.observe(1, true));
        assert!(latch.is_visible(1));
        assert!(!latch.is_visible(0));
    }

    #[test]
    fn reveal_reports_transition_once() {
        let mut latch = RevealLatch::new(1);
        assert!(latch.observe(0, true));
        assert!(!latch.observe(0, true));
    }

    #[test]
    fn never_reverts_after_reveal() {
        let mut latch = RevealLatch::new(2);
        latch.observe(0, true);
        let events = [false, true, false, false, true, false];
        for intersecting in events {
            latch.observe(0, intersecting);
            assert!(latch.is_visible(0));
        }
    }

    #[test]
    fn non_intersecting_report_keeps_hidden() {
        let mut latch = RevealLatch::new(1);
        assert!(!latch.observe(0, false));
        assert!(!latch.is_visible(0));
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut latch = RevealLatch::new(1);
        assert!(!latch.observe(7, true));
        assert!(!latch.is_visible(7));
        assert_eq!(latch.revealed_count(), 0);
    }
}
