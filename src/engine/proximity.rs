//! Parallax transform for an element based on its distance from the
//! viewport center.
//!
//! Near the center (inside the dead zone) the element sits at rest. Past it,
//! the element swings, shrinks and drifts, growing stronger towards the
//! screen edges.

/// Half-width of the band around the viewport center with no motion.
pub const DEAD_ZONE: f64 = 0.2;
/// Offset ratio at which an element touches the top or bottom edge.
const EDGE_OFFSET: f64 = 0.5;

const ROTATE_PER_OFFSET: f64 = -6.0;
const TRANSLATE_PER_OFFSET: f64 = -25.0;
const SCALE_FALLOFF: f64 = 0.12;

pub const SCALE_MIN: f64 = 0.93;
pub const SCALE_MAX: f64 = 1.05;

/// The parts of a bounding client rect the transform reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementRect {
    pub top: f64,
    pub height: f64,
}

impl From<&web_sys::DomRect> for ElementRect {
    fn from(rect: &web_sys::DomRect) -> Self {
        Self {
            top: rect.top(),
            height: rect.height(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityTransform {
    pub rotate_deg: f64,
    pub scale: f64,
    pub translate_y: f64,
}

impl Default for ProximityTransform {
    fn default() -> Self {
        Self::REST
    }
}

impl ProximityTransform {
    pub const REST: Self = Self {
        rotate_deg: 0.0,
        scale: SCALE_MAX,
        translate_y: 0.0,
    };

    pub fn compute(rect: ElementRect, viewport_height: f64) -> Self {
        if !(viewport_height.is_finite() && viewport_height > 0.0) {
            return Self::REST;
        }
        let offset = dead_zone(raw_offset(rect, viewport_height));
        if !offset.is_finite() {
            return Self::REST;
        }

        let normalized = offset.abs() / (EDGE_OFFSET - DEAD_ZONE);
        let eased = normalized * normalized;
        let scale = (SCALE_MAX - eased * SCALE_FALLOFF).clamp(SCALE_MIN, SCALE_MAX);

        Self {
            rotate_deg: offset * ROTATE_PER_OFFSET,
            scale,
            translate_y: offset * TRANSLATE_PER_OFFSET,
        }
    }

    pub fn css_transform(&self) -> String {
        format!(
            "rotate({:.3}deg) scale({:.4}) translateY({:.2}px)",
            self.rotate_deg, self.scale, self.translate_y
        )
    }

    /// Opacity of the ambient halo behind the element; brightest at rest.
    pub fn glow_opacity(&self) -> f64 {
        0.3 + (self.scale - SCALE_MIN) * 2.0
    }

    pub fn glow_scale(&self) -> f64 {
        1.0 + (self.scale - 1.0) * 0.5
    }

    pub fn shadow_opacity(&self) -> f64 {
        0.2 + (self.scale - SCALE_MIN) * 1.5
    }

    /// Glow under the element, only visible while scaled above 1.
    pub fn floor_glow_opacity(&self) -> f64 {
        ((self.scale - 1.0) * 8.0).max(0.0)
    }
}

/// Signed distance of the element center from the viewport center, as a
/// fraction of viewport height. About ±0.5 at the screen edges.
pub fn raw_offset(rect: ElementRect, viewport_height: f64) -> f64 {
    let element_center = rect.top + rect.height / 2.0;
    let viewport_center = viewport_height / 2.0;
    (element_center - viewport_center) / viewport_height
}

/// Collapses offsets inside the dead zone to 0 and shifts the rest inward
/// so the transform is continuous at the boundary.
pub fn dead_zone(raw: f64) -> f64 {
    if raw.abs() < DEAD_ZONE {
        0.0
    } else if raw > 0.0 {
        raw - DEAD_ZONE
    } else {
        raw + DEAD_ZONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 1000.0;

    /// Rect whose center sits at `raw` viewport-heights below the viewport center.
    fn rect_at(raw: f64) -> ElementRect {
        let height = 400.0;
        let center = VH / 2.0 + raw * VH;
        ElementRect {
            top: center - height / 2.0,
            height,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn centered_element_is_at_rest() {
        let rect = ElementRect {
            top: 300.0,
            height: 400.0,
        };
        assert_eq!(raw_offset(rect, VH), 0.0);
        assert_eq!(ProximityTransform::compute(rect, VH), ProximityTransform::REST);
    }

    #[test]
    fn inside_dead_zone_is_at_rest() {
        for raw in [-0.199, -0.1, -0.01, 0.0, 0.05, 0.15, 0.1999] {
            let t = ProximityTransform::compute(rect_at(raw), VH);
            assert!(approx(t.rotate_deg, 0.0), "raw {}", raw);
            assert!(approx(t.translate_y, 0.0), "raw {}", raw);
            assert!(approx(t.scale, SCALE_MAX), "raw {}", raw);
        }
    }

    #[test]
    fn continuous_at_dead_zone_boundary() {
        let inside = ProximityTransform::compute(rect_at(0.1999999), VH);
        let outside = ProximityTransform::compute(rect_at(0.2000001), VH);
        assert!((inside.rotate_deg - outside.rotate_deg).abs() < 1e-5);
        assert!((inside.scale - outside.scale).abs() < 1e-5);
        assert!((inside.translate_y - outside.translate_y).abs() < 1e-4);
    }

    #[test]
    fn below_center_swings_counter_clockwise_and_lifts() {
        let t = ProximityTransform::compute(rect_at(0.35), VH);
        assert!(approx(t.rotate_deg, -0.9));
        assert!(approx(t.translate_y, -3.75));
        // normalized 0.5, eased 0.25
        assert!(approx(t.scale, 1.02));
    }

    #[test]
    fn above_center_mirrors_below() {
        let below = ProximityTransform::compute(rect_at(0.4), VH);
        let above = ProximityTransform::compute(rect_at(-0.4), VH);
        assert!(approx(below.rotate_deg, -above.rotate_deg));
        assert!(approx(below.translate_y, -above.translate_y));
        assert!(approx(below.scale, above.scale));
    }

    #[test]
    fn edge_reaches_lower_clamp() {
        let t = ProximityTransform::compute(rect_at(0.5), VH);
        assert!(approx(t.scale, SCALE_MIN));
    }

    #[test]
    fn scale_never_leaves_band() {
        let mut raw = -50.0;
        while raw <= 50.0 {
            let t = ProximityTransform::compute(rect_at(raw), VH);
            assert!((SCALE_MIN..=SCALE_MAX).contains(&t.scale), "raw {} scale {}", raw, t.scale);
            raw += 0.013;
        }
        let huge = ElementRect {
            top: f64::MAX / 4.0,
            height: 10.0,
        };
        let t = ProximityTransform::compute(huge, VH);
        assert!((SCALE_MIN..=SCALE_MAX).contains(&t.scale));
    }

    #[test]
    fn degenerate_viewport_is_at_rest() {
        for vh in [0.0, -100.0, f64::NAN, f64::INFINITY] {
            assert_eq!(
                ProximityTransform::compute(rect_at(0.4), vh),
                ProximityTransform::REST
            );
        }
    }

    #[test]
    fn compute_is_idempotent() {
        let rect = ElementRect {
            top: 812.5,
            height: 600.0,
        };
        let first = ProximityTransform::compute(rect, 768.0);
        let second = ProximityTransform::compute(rect, 768.0);
        assert_eq!(first, second);
    }

    #[test]
    fn rest_effects() {
        let t = ProximityTransform::REST;
        assert!(approx(t.glow_opacity(), 0.54));
        assert!(approx(t.floor_glow_opacity(), 0.4));
        assert_eq!(
            t.css_transform(),
            "rotate(0.000deg) scale(1.0500) translateY(0.00px)"
        );
    }

    #[test]
    fn floor_glow_disappears_when_shrunk() {
        let t = ProximityTransform::compute(rect_at(0.5), VH);
        assert_eq!(t.floor_glow_opacity(), 0.0);
    }
}
