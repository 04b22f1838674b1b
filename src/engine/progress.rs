use super::sampler::ScrollSample;

/// Page-level scroll state derived from a single sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f64,
    /// Fraction of the scrollable distance covered, always within `[0, 1]`.
    pub progress: f64,
    pub scrolled: bool,
}

impl ScrollState {
    pub fn from_sample(sample: &ScrollSample, threshold: f64) -> Self {
        Self {
            scroll_y: sample.scroll_y,
            progress: progress(sample.scroll_y, sample.max_distance),
            scrolled: sample.scroll_y > threshold,
        }
    }
}

/// `scroll_y / max_distance`, clamped. Overscroll on touch devices can
/// report negative offsets or offsets past the end.
pub fn progress(scroll_y: f64, max_distance: f64) -> f64 {
    if max_distance > 0.0 && scroll_y.is_finite() {
        (scroll_y / max_distance).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(scroll_y: f64, max_distance: f64) -> ScrollState {
        ScrollState::from_sample(
            &ScrollSample {
                scroll_y,
                viewport_height: 900.0,
                max_distance,
            },
            30.0,
        )
    }

    #[test]
    fn unscrollable_page_is_at_rest() {
        let s = state(0.0, 0.0);
        assert_eq!(s.progress, 0.0);
        assert!(!s.scrolled);
    }

    #[test]
    fn negative_distance_counts_as_unscrollable() {
        assert_eq!(progress(120.0, -40.0), 0.0);
    }

    #[test]
    fn halfway_down() {
        assert_eq!(progress(500.0, 1000.0), 0.5);
        assert_eq!(progress(1000.0, 1000.0), 1.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(progress(-25.0, 1000.0), 0.0);
        assert_eq!(progress(1080.0, 1000.0), 1.0);
    }

    #[test]
    fn progress_stays_in_unit_range() {
        for scroll_y in [-1e9, -1.0, 0.0, 0.5, 333.3, 1e3, 1e9, f64::NAN] {
            for max in [-10.0, 0.0, 1.0, 977.0, 1e6] {
                let p = progress(scroll_y, max);
                assert!((0.0..=1.0).contains(&p), "{} / {} -> {}", scroll_y, max, p);
            }
        }
    }

    #[test]
    fn scrolled_flips_past_threshold() {
        assert!(!state(30.0, 1000.0).scrolled);
        assert!(state(30.5, 1000.0).scrolled);
    }
}
