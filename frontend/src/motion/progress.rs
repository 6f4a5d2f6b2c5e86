use super::offset::ScrollOffset;

/// Layout of a tracked region relative to the viewport, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionGeometry {
    /// Distance from the viewport top to the region top; negative once the
    /// region starts scrolling out above the viewport.
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

/// How far a region has travelled through the band described by `offset`,
/// clamped to [0, 1].
///
/// Scrolling down moves `top` towards negative values, so progress grows as
/// the page scrolls. Degenerate layouts never produce NaN: non-finite input
/// reads as "not entered yet", and an empty band flips from 0 to 1 at the
/// entry boundary.
pub fn scroll_progress(geometry: &RegionGeometry, offset: &ScrollOffset) -> f64 {
    let RegionGeometry {
        top,
        height,
        viewport_height,
    } = *geometry;

    if !(top.is_finite() && height.is_finite() && viewport_height.is_finite()) {
        return 0.0;
    }

    let height = height.max(0.0);
    let viewport_height = viewport_height.max(0.0);

    let entry_top = offset.entry.aligned_top(height, viewport_height);
    let exit_top = offset.exit.aligned_top(height, viewport_height);
    let span = entry_top - exit_top;

    if span <= 0.0 {
        return if top >= entry_top { 0.0 } else { 1.0 };
    }

    ((entry_top - top) / span).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::offset::Boundary;

    const VIEWPORT: f64 = 800.0;

    fn at(top: f64, height: f64) -> RegionGeometry {
        RegionGeometry {
            top,
            height,
            viewport_height: VIEWPORT,
        }
    }

    #[test]
    fn zero_when_region_is_about_to_enter() {
        let progress = scroll_progress(&at(VIEWPORT, 400.0), &ScrollOffset::default());
        assert_eq!(progress, 0.0);
    }

    #[test]
    fn one_when_region_is_about_to_exit() {
        let progress = scroll_progress(&at(-400.0, 400.0), &ScrollOffset::default());
        assert_eq!(progress, 1.0);
    }

    #[test]
    fn halfway_through_the_band() {
        // band is 800 + 400 = 1200px long, halfway is 600px in
        let progress = scroll_progress(&at(VIEWPORT - 600.0, 400.0), &ScrollOffset::default());
        assert_eq!(progress, 0.5);
    }

    #[test]
    fn clamps_outside_the_band() {
        let offset = ScrollOffset::default();
        assert_eq!(scroll_progress(&at(5_000.0, 400.0), &offset), 0.0);
        assert_eq!(scroll_progress(&at(-5_000.0, 400.0), &offset), 1.0);
    }

    #[test]
    fn monotonic_while_scrolling_down() {
        let offset = ScrollOffset::default();
        let document_top = 1_500.0;
        let mut last = 0.0;
        for scroll_y in (0..4_000).step_by(25) {
            let top = document_top - scroll_y as f64;
            let progress = scroll_progress(&at(top, 350.0), &offset);
            assert!(progress >= last, "progress fell from {last} to {progress} at {scroll_y}");
            assert!((0.0..=1.0).contains(&progress));
            last = progress;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn zero_height_region_stays_finite() {
        let offset = ScrollOffset::default();
        for top in [900.0, 400.0, 0.0, -10.0] {
            let progress = scroll_progress(&at(top, 0.0), &offset);
            assert!(progress.is_finite());
        }
        assert_eq!(scroll_progress(&at(400.0, 0.0), &offset), 0.5);
    }

    #[test]
    fn empty_band_steps_instead_of_dividing_by_zero() {
        let offset = ScrollOffset {
            entry: Boundary::new(0.0, 0.0),
            exit: Boundary::new(0.0, 0.0),
        };
        assert_eq!(scroll_progress(&at(10.0, 400.0), &offset), 0.0);
        assert_eq!(scroll_progress(&at(-10.0, 400.0), &offset), 1.0);

        let unlaid = RegionGeometry {
            top: 0.0,
            height: 0.0,
            viewport_height: 0.0,
        };
        assert_eq!(scroll_progress(&unlaid, &ScrollOffset::default()), 0.0);
    }

    #[test]
    fn non_finite_geometry_reads_as_not_entered() {
        let offset = ScrollOffset::default();
        assert_eq!(scroll_progress(&at(f64::NAN, 400.0), &offset), 0.0);
        assert_eq!(scroll_progress(&at(0.0, f64::INFINITY), &offset), 0.0);
    }

    #[test]
    fn custom_band_uses_its_own_edges() {
        // from "top meets viewport center" to "top meets viewport top"
        let offset = ScrollOffset::parse("start center", "start start").unwrap();
        assert_eq!(scroll_progress(&at(400.0, 200.0), &offset), 0.0);
        assert_eq!(scroll_progress(&at(200.0, 200.0), &offset), 0.5);
        assert_eq!(scroll_progress(&at(0.0, 200.0), &offset), 1.0);
    }
}
