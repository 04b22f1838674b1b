//! Scroll-driven visual state: everything that turns the page scroll
//! position into presentation values.
//!
//! [`sampler`] reads the window and fans samples out through a
//! [`sampler::ScrollSubject`]. [`progress`] and [`proximity`] are pure
//! transforms over a sample. [`reveal`] latches elements visible as they
//! enter the viewport. [`hooks`] binds all of it to Yew components.

pub mod hooks;
pub mod progress;
pub mod proximity;
pub mod reveal;
pub mod sampler;

pub use hooks::{use_proximity_transform, use_reveal, use_scroll_state, Viewport};
