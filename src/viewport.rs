//! Geometry math shared by the scroll and pointer handlers.
//!
//! Everything here is a pure function of values sampled from the window at
//! event time. Handlers re-read the DOM on every call because layout can
//! change between events (images loading in, viewport resizes), so nothing
//! in this module caches geometry across frames.

/// Percentage of the total scrollable distance covered by `scroll_y`.
///
/// A page no taller than the viewport has nothing to scroll; the denominator
/// would be zero or negative, so this returns 0 instead of NaN or infinity.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Viewport-relative bounds of one page section, sampled fresh per event.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, bottom: f64) -> Self {
        Self {
            id: id.into(),
            top,
            bottom,
        }
    }
}

/// Resolves which section the navbar should highlight.
///
/// A section qualifies once its top has crossed the middle of the viewport
/// and its bottom has not yet left through the top. When several sections
/// qualify in the same pass (adjacent short sections during a fast scroll)
/// the last one in document order wins; each match overwrites the previous
/// one, and changing that changes the visible highlight behavior, so it
/// stays. Returns `None` when nothing qualifies so the caller can keep the
/// previously resolved section.
pub fn active_section(sections: &[SectionBounds], viewport_height: f64) -> Option<&str> {
    let mut active = None;
    for section in sections {
        if section.top <= viewport_height * 0.5 && section.bottom >= 0.0 {
            active = Some(section.id.as_str());
        }
    }
    active
}

/// Whether a section is far enough into view to start its entry animation.
///
/// Looser threshold than [`active_section`] so the fade-up starts before the
/// section reaches center. The mark this feeds is sticky: the handler adds a
/// class and never removes it, so scrolling back up does not re-hide content
/// and re-marking an already-marked section is a no-op.
pub fn should_reveal(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top <= viewport_height * 0.75 && bottom >= 0.0
}

/// Signed parallax offset for one axis: 0 at the midpoint of `extent`,
/// `scale / 2` at either edge.
pub fn pointer_offset(pointer: f64, extent: f64, scale: f64) -> f64 {
    (pointer / extent - 0.5) * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(id: &str, top: f64, bottom: f64) -> SectionBounds {
        SectionBounds::new(id, top, bottom)
    }

    #[test]
    fn progress_spans_zero_to_hundred() {
        assert_eq!(scroll_progress(0.0, 5000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(4000.0, 5000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(2000.0, 5000.0, 1000.0), 50.0);
    }

    #[test]
    fn progress_is_monotone_in_scroll_offset() {
        let mut last = 0.0;
        for step in 0..=40 {
            let p = scroll_progress(step as f64 * 100.0, 5000.0, 1000.0);
            assert!(p >= last, "progress regressed at step {step}");
            assert!((0.0..=100.0).contains(&p));
            last = p;
        }
    }

    #[test]
    fn short_page_yields_zero_not_nan() {
        // Document shorter than or equal to the viewport: nothing to scroll.
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(300.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(0.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn progress_clamps_rubber_band_overscroll() {
        // Touch devices report offsets past either end mid-bounce.
        assert_eq!(scroll_progress(-50.0, 5000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(4200.0, 5000.0, 1000.0), 100.0);
    }

    #[test]
    fn section_past_half_viewport_is_active() {
        // Viewport 1000, home spans [0, 1200], experiences [1200, 2400].
        // Scrolled 690px: home is still the only match.
        let sections = [
            bounds("home", -690.0, 510.0),
            bounds("experiences", 510.0, 1710.0),
        ];
        assert_eq!(active_section(&sections, 1000.0), Some("home"));

        // Scrolled 1300px: home's bottom has left through the top.
        let sections = [
            bounds("home", -1300.0, -100.0),
            bounds("experiences", -100.0, 1100.0),
        ];
        assert_eq!(active_section(&sections, 1000.0), Some("experiences"));
    }

    #[test]
    fn later_match_wins_when_two_sections_qualify() {
        // Two short adjacent sections both inside the half-viewport window.
        // The later one in document order overwrites the earlier match; this
        // mirrors the shipped highlight behavior and is pinned on purpose.
        let sections = [
            bounds("home", -100.0, 200.0),
            bounds("experiences", 200.0, 450.0),
            bounds("services", 900.0, 1400.0),
        ];
        assert_eq!(active_section(&sections, 1000.0), Some("experiences"));
    }

    #[test]
    fn no_qualifying_section_returns_none() {
        // Every section still below the half-viewport line; the caller keeps
        // whatever it resolved last instead of clearing the highlight.
        let sections = [
            bounds("home", 600.0, 1800.0),
            bounds("experiences", 1800.0, 3000.0),
        ];
        assert_eq!(active_section(&sections, 1000.0), None);
        assert_eq!(active_section(&[], 1000.0), None);
    }

    #[test]
    fn reveal_triggers_before_activation() {
        // A section at 70% of the viewport should fade in but not yet own
        // the nav highlight.
        let (top, bottom) = (700.0, 1900.0);
        assert!(should_reveal(top, bottom, 1000.0));
        assert_eq!(
            active_section(&[bounds("services", top, bottom)], 1000.0),
            None
        );
    }

    #[test]
    fn reveal_requires_some_overlap() {
        assert!(!should_reveal(800.0, 2000.0, 1000.0));
        assert!(!should_reveal(-2000.0, -10.0, 1000.0));
        assert!(should_reveal(-500.0, 300.0, 1000.0));
    }

    #[test]
    fn pointer_offset_centered_and_bounded() {
        assert_eq!(pointer_offset(960.0, 1920.0, 20.0), 0.0);
        assert_eq!(pointer_offset(1920.0, 1920.0, 20.0), 10.0);
        assert_eq!(pointer_offset(0.0, 1920.0, 20.0), -10.0);
    }
}
