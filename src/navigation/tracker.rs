//! Scroll-position tracking for the navigation tabs.
//!
//! The tracker itself never touches the DOM; callers measure the section
//! extents and feed them in, which keeps this testable off the browser.

use crate::config::SCROLL_PROBE_OFFSET;

/// The four page sections, in the order they appear on the page.
/// Scanning respects this order, so the first matching extent wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    Home,
    Services,
    Portfolio,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::Services,
        SectionId::Portfolio,
        SectionId::Contact,
    ];

    /// The `id` attribute of the section element in the document.
    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Services => "services",
            SectionId::Portfolio => "portfolio",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Services => "Services",
            SectionId::Portfolio => "Portfolio",
            SectionId::Contact => "Contact",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<SectionId> {
        Self::ALL.into_iter().find(|s| s.dom_id() == id)
    }
}

/// Vertical extent of a section in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionExtent {
    pub start: f64,
    pub end: f64,
}

impl SectionExtent {
    pub fn contains(&self, probe: f64) -> bool {
        probe >= self.start && probe < self.end
    }
}

/// Keeps the single "active" section in sync with either the scroll position
/// or an explicit click navigation.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionTracker {
    active: SectionId,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTracker {
    pub fn new() -> Self {
        Self {
            active: SectionId::Home,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Explicit navigation. The active section moves immediately, without
    /// waiting for the smooth scroll to land. Unknown targets are ignored.
    pub fn navigate_to(&mut self, target: &str) -> Option<SectionId> {
        let id = SectionId::from_dom_id(target)?;
        self.active = id;
        Some(id)
    }

    /// Recompute the active section from a scroll position. The probe point
    /// sits `SCROLL_PROBE_OFFSET` below the scroll top so the fixed header
    /// does not obscure the section that counts as "in view".
    ///
    /// Sections absent from the document carry no extent and never match.
    /// When nothing matches (e.g. scrolled past the footer) the previous
    /// active section is kept. Returns the new section only on a change.
    pub fn on_scroll(
        &mut self,
        scroll_y: f64,
        extents: &[(SectionId, Option<SectionExtent>)],
    ) -> Option<SectionId> {
        let probe = scroll_y + SCROLL_PROBE_OFFSET;
        for (id, extent) in extents {
            if extent.is_some_and(|e| e.contains(probe)) {
                if self.active != *id {
                    self.active = *id;
                    return Some(*id);
                }
                return None;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_extents() -> Vec<(SectionId, Option<SectionExtent>)> {
        vec![
            (SectionId::Home, Some(SectionExtent { start: 0.0, end: 600.0 })),
            (SectionId::Services, Some(SectionExtent { start: 600.0, end: 1400.0 })),
            (SectionId::Portfolio, Some(SectionExtent { start: 1400.0, end: 2200.0 })),
            (SectionId::Contact, Some(SectionExtent { start: 2200.0, end: 3000.0 })),
        ]
    }

    #[test]
    fn scroll_activates_section_containing_probe() {
        let mut tracker = SectionTracker::new();
        assert_eq!(
            tracker.on_scroll(700.0, &page_extents()),
            Some(SectionId::Services)
        );
        assert_eq!(tracker.active(), SectionId::Services);
    }

    #[test]
    fn probe_offset_is_applied() {
        // scroll_y 550 probes at 650, inside services even though the
        // scroll top is still within home
        let mut tracker = SectionTracker::new();
        assert_eq!(
            tracker.on_scroll(550.0, &page_extents()),
            Some(SectionId::Services)
        );
    }

    #[test]
    fn extent_end_is_exclusive() {
        let mut tracker = SectionTracker::new();
        // probe lands exactly on services.end, so portfolio wins
        assert_eq!(
            tracker.on_scroll(1300.0, &page_extents()),
            Some(SectionId::Portfolio)
        );
    }

    #[test]
    fn no_match_keeps_previous_active() {
        let mut tracker = SectionTracker::new();
        tracker.on_scroll(700.0, &page_extents());
        assert_eq!(tracker.on_scroll(9000.0, &page_extents()), None);
        assert_eq!(tracker.active(), SectionId::Services);
    }

    #[test]
    fn repeated_scroll_in_same_section_reports_no_change() {
        let mut tracker = SectionTracker::new();
        assert_eq!(
            tracker.on_scroll(700.0, &page_extents()),
            Some(SectionId::Services)
        );
        assert_eq!(tracker.on_scroll(750.0, &page_extents()), None);
        assert_eq!(tracker.active(), SectionId::Services);
    }

    #[test]
    fn overlapping_extents_resolve_to_first_in_order() {
        let overlapping = vec![
            (SectionId::Home, Some(SectionExtent { start: 0.0, end: 1000.0 })),
            (SectionId::Services, Some(SectionExtent { start: 500.0, end: 1500.0 })),
        ];
        let mut tracker = SectionTracker::new();
        tracker.navigate_to("contact");
        assert_eq!(tracker.on_scroll(700.0, &overlapping), Some(SectionId::Home));
    }

    #[test]
    fn missing_sections_are_skipped() {
        let mut extents = page_extents();
        extents[1].1 = None;
        let mut tracker = SectionTracker::new();
        // probe 800 would hit services, but it is absent from the document
        assert_eq!(tracker.on_scroll(700.0, &extents), None);
        assert_eq!(tracker.active(), SectionId::Home);
    }

    #[test]
    fn navigate_to_known_section_is_optimistic() {
        let mut tracker = SectionTracker::new();
        assert_eq!(tracker.navigate_to("portfolio"), Some(SectionId::Portfolio));
        assert_eq!(tracker.active(), SectionId::Portfolio);
    }

    #[test]
    fn navigate_to_unknown_section_is_a_no_op() {
        let mut tracker = SectionTracker::new();
        assert_eq!(tracker.navigate_to("pricing"), None);
        assert_eq!(tracker.active(), SectionId::Home);
    }
}
