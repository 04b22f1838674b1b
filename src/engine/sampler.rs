use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Window};

use crate::error::{self, SiteError};

/// Raw viewport metrics captured on a scroll or resize event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub viewport_height: f64,
    /// `scrollHeight - innerHeight`. Zero or less means the page can't scroll.
    pub max_distance: f64,
}

impl ScrollSample {
    pub fn read(window: &Window) -> Result<Self, SiteError> {
        let scroll_y = window.scroll_y()?;
        let viewport_height = window
            .inner_height()?
            .as_f64()
            .ok_or_else(|| SiteError::Js("innerHeight is not a number".to_string()))?;
        let scroll_height = window
            .document()
            .and_then(|document| document.document_element())
            .ok_or(SiteError::NoDocument)?
            .scroll_height() as f64;

        Ok(Self {
            scroll_y,
            viewport_height,
            max_distance: scroll_height - viewport_height,
        })
    }
}

type Listener = Rc<dyn Fn(&ScrollSample)>;

#[derive(Default)]
struct Listeners {
    next_id: usize,
    entries: Vec<(usize, Listener)>,
    latest: Option<ScrollSample>,
}

/// Push-based fan-out of scroll samples.
///
/// The window source publishes into it and derived-state hooks subscribe.
/// Dropping the returned [`Subscription`] unsubscribes.
#[derive(Clone, Default)]
pub struct ScrollSubject {
    inner: Rc<RefCell<Listeners>>,
}

impl PartialEq for ScrollSubject {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ScrollSubject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(&ScrollSample) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push((id, Rc::new(listener)));
        Subscription {
            id,
            subject: Rc::downgrade(&self.inner),
        }
    }

    pub fn publish(&self, sample: ScrollSample) {
        // Snapshot so a listener may unsubscribe itself while being called.
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            inner.latest = Some(sample);
            inner.entries.iter().map(|(_, l)| l.clone()).collect()
        };
        for listener in listeners {
            listener(&sample);
        }
    }

    /// Last published sample, used to seed newly mounted consumers.
    pub fn latest(&self) -> Option<ScrollSample> {
        self.inner.borrow().latest
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: usize,
    subject: Weak<RefCell<Listeners>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.subject.upgrade() {
            inner.borrow_mut().entries.retain(|(id, _)| *id != self.id);
        }
    }
}

/// Window `scroll` and `resize` listeners feeding a [`ScrollSubject`].
///
/// The listeners are detached when this value is dropped.
pub struct WindowScrollSource {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl WindowScrollSource {
    pub fn attach(subject: ScrollSubject) -> Result<Self, SiteError> {
        let window = error::window()?;

        let callback = {
            let window = window.clone();
            let subject = subject.clone();
            Closure::<dyn FnMut()>::new(move || match ScrollSample::read(&window) {
                Ok(sample) => subject.publish(sample),
                Err(err) => log::warn!("Skipping scroll sample: {}", err),
            })
        };

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "resize",
            callback.as_ref().unchecked_ref(),
            &options,
        )?;

        // Seed consumers before the first event arrives.
        match ScrollSample::read(&window) {
            Ok(sample) => subject.publish(sample),
            Err(err) => log::warn!("Initial scroll sample failed: {}", err),
        }

        log::debug!("Attached window scroll source");
        Ok(Self { window, callback })
    }

    /// Publishes a fresh sample, e.g. after route changes alter the page height.
    pub fn resample(&self, subject: &ScrollSubject) {
        match ScrollSample::read(&self.window) {
            Ok(sample) => subject.publish(sample),
            Err(err) => log::warn!("Resample failed: {}", err),
        }
    }
}

impl Drop for WindowScrollSource {
    fn drop(&mut self) {
        for event in ["scroll", "resize"] {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
        log::debug!("Detached window scroll source");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn sample(scroll_y: f64) -> ScrollSample {
        ScrollSample {
            scroll_y,
            viewport_height: 800.0,
            max_distance: 1200.0,
        }
    }

    #[test]
    fn publish_reaches_every_subscriber() {
        let subject = ScrollSubject::new();
        let a = Rc::new(Cell::new(0.0));
        let b = Rc::new(Cell::new(0.0));
        let _sa = subject.subscribe({
            let a = a.clone();
            move |s| a.set(s.scroll_y)
        });
        let _sb = subject.subscribe({
            let b = b.clone();
            move |s| b.set(s.scroll_y * 2.0)
        });

        subject.publish(sample(100.0));

        assert_eq!(a.get(), 100.0);
        assert_eq!(b.get(), 200.0);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let subject = ScrollSubject::new();
        let calls = Rc::new(Cell::new(0));
        let sub = subject.subscribe({
            let calls = calls.clone();
            move |_| calls.set(calls.get() + 1)
        });

        subject.publish(sample(1.0));
        drop(sub);
        subject.publish(sample(2.0));

        assert_eq!(calls.get(), 1);
        assert_eq!(subject.subscriber_count(), 0);
    }

    #[test]
    fn latest_tracks_last_publish() {
        let subject = ScrollSubject::new();
        assert_eq!(subject.latest(), None);
        subject.publish(sample(10.0));
        subject.publish(sample(20.0));
        assert_eq!(subject.latest().map(|s| s.scroll_y), Some(20.0));
    }

    #[test]
    fn subscription_outliving_subject_is_harmless() {
        let subject = ScrollSubject::new();
        let sub = subject.subscribe(|_| {});
        drop(subject);
        drop(sub);
    }

    #[test]
    fn listener_can_drop_its_own_subscription() {
        let subject = ScrollSubject::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let sub = subject.subscribe({
            let slot = slot.clone();
            move |_| {
                slot.borrow_mut().take();
            }
        });
        *slot.borrow_mut() = Some(sub);

        subject.publish(sample(5.0));

        assert_eq!(subject.subscriber_count(), 0);
    }

    #[test]
    fn clones_compare_equal() {
        let subject = ScrollSubject::new();
        assert!(subject == subject.clone());
        assert!(subject != ScrollSubject::new());
    }
}
