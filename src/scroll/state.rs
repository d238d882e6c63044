//! Scroll-derived UI state for the landing page.
//!
//! Keeps all scroll bookkeeping (active section, header visibility,
//! back-to-top visibility) in one owned struct instead of scattering
//! flags across event handlers.

/// Breadcrumb title shown when no section spans the current offset.
pub const WELCOME_ID: &str = "welcome";
pub const WELCOME_TITLE: &str = "Welcome";

/// Offset added to the scroll position before matching sections, so a
/// section counts as active slightly before its top edge reaches the
/// viewport top.
pub const LOOKAHEAD: f64 = 100.0;
/// Header switches to its compact style past this offset.
pub const COMPACT_AFTER: f64 = 100.0;
/// Header hides on downward scroll past this offset.
pub const HIDE_AFTER: f64 = 200.0;
/// Back-to-top button shows past this offset.
pub const BACK_TO_TOP_AFTER: f64 = 300.0;

/// A named, vertically bounded page region. Geometry is a snapshot taken
/// at mount (and again after resize); sections are assumed ordered by
/// document position and non-overlapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
    pub title: String,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            top,
            height,
            title: title.into(),
        }
    }

    fn contains(&self, pos: f64) -> bool {
        pos >= self.top && pos < self.top + self.height
    }
}

/// Full derived state for one scroll tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    pub offset: f64,
    pub active_id: String,
    pub active_title: String,
    pub header_compact: bool,
    pub header_hidden: bool,
    pub back_to_top_visible: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset: 0.0,
            active_id: WELCOME_ID.to_string(),
            active_title: WELCOME_TITLE.to_string(),
            header_compact: false,
            header_hidden: false,
            back_to_top_visible: false,
        }
    }
}

/// Fields that changed since the previous tick. `None` means unchanged,
/// so the effect layer only touches the DOM for actual transitions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateDiff {
    pub active_title: Option<String>,
    pub header_compact: Option<bool>,
    pub header_hidden: Option<bool>,
    pub back_to_top_visible: Option<bool>,
}

impl StateDiff {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Projects scroll offsets onto `ScrollState`, one tick at a time.
///
/// Owns the fixed section list and the previous tick's state; `project`
/// recomputes everything from the new offset, diffs against the previous
/// state and only then is the diff applied to the page.
#[derive(Debug)]
pub struct Projector {
    sections: Vec<Section>,
    last: ScrollState,
}

impl Projector {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            last: ScrollState::default(),
        }
    }

    /// Replace section geometry after a resize remeasure. The derived
    /// state carries over; the next tick reconciles it.
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.sections = sections;
    }

    pub fn last_state(&self) -> &ScrollState {
        &self.last
    }

    /// First section whose span contains `offset + LOOKAHEAD`, falling
    /// back to the welcome sentinel.
    fn resolve_active(&self, offset: f64) -> (String, String) {
        let probe = offset + LOOKAHEAD;
        for section in &self.sections {
            if section.contains(probe) {
                return (section.id.clone(), section.title.clone());
            }
        }
        (WELCOME_ID.to_string(), WELCOME_TITLE.to_string())
    }

    /// Recompute the full state for `offset` and return what changed.
    ///
    /// Scroll direction is a plain comparison against the previous
    /// tick's offset; there is no dead band around HIDE_AFTER.
    pub fn project(&mut self, offset: f64) -> StateDiff {
        let (active_id, active_title) = self.resolve_active(offset);
        let scrolling_down = offset > self.last.offset;

        let next = ScrollState {
            offset,
            active_id,
            active_title,
            header_compact: offset > COMPACT_AFTER,
            header_hidden: scrolling_down && offset > HIDE_AFTER,
            back_to_top_visible: offset > BACK_TO_TOP_AFTER,
        };

        let diff = StateDiff {
            active_title: (next.active_title != self.last.active_title)
                .then(|| next.active_title.clone()),
            header_compact: (next.header_compact != self.last.header_compact)
                .then_some(next.header_compact),
            header_hidden: (next.header_hidden != self.last.header_hidden)
                .then_some(next.header_hidden),
            back_to_top_visible: (next.back_to_top_visible != self.last.back_to_top_visible)
                .then_some(next.back_to_top_visible),
        };

        self.last = next;
        diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<Section> {
        vec![
            Section::new("home", 150.0, 600.0, "Home"),
            Section::new("about", 750.0, 500.0, "About Us"),
            Section::new("products", 1250.0, 800.0, "Products"),
            Section::new("contact", 2050.0, 400.0, "Contact"),
        ]
    }

    #[test]
    fn top_of_page_is_default_state() {
        let mut p = Projector::new(sections());
        p.project(0.0);
        let state = p.last_state();
        assert_eq!(state.active_id, WELCOME_ID);
        assert!(!state.header_compact);
        assert!(!state.header_hidden);
        assert!(!state.back_to_top_visible);
    }

    #[test]
    fn section_spanning_the_top_is_active_at_zero() {
        let mut p = Projector::new(vec![Section::new("home", 0.0, 600.0, "Home")]);
        p.project(0.0);
        assert_eq!(p.last_state().active_id, "home");
    }

    #[test]
    fn no_sections_resolves_to_welcome() {
        let mut p = Projector::new(Vec::new());
        p.project(0.0);
        assert_eq!(p.last_state().active_id, WELCOME_ID);
        assert_eq!(p.last_state().active_title, WELCOME_TITLE);
    }

    #[test]
    fn gap_between_sections_resolves_to_welcome() {
        let mut p = Projector::new(vec![Section::new("about", 600.0, 500.0, "About Us")]);
        // probe = 0 + 100 = 100, below the only section
        p.project(0.0);
        assert_eq!(p.last_state().active_id, WELCOME_ID);
    }

    #[test]
    fn lookahead_activates_section_early() {
        let mut p = Projector::new(sections());
        // probe = 60 + 100 = 160, inside "home" although its top is 150
        p.project(60.0);
        assert_eq!(p.last_state().active_id, "home");
    }

    #[test]
    fn active_section_is_unique_and_deterministic() {
        let mut p = Projector::new(sections());
        for offset in (0..2400).step_by(7) {
            let offset = offset as f64;
            p.project(offset);
            let first = p.last_state().active_id.clone();
            p.project(offset);
            assert_eq!(p.last_state().active_id, first);
        }
    }

    #[test]
    fn back_to_top_threshold() {
        let mut p = Projector::new(sections());
        p.project(250.0);
        assert!(!p.last_state().back_to_top_visible);
        p.project(350.0);
        assert!(p.last_state().back_to_top_visible);
    }

    #[test]
    fn header_compacts_past_threshold() {
        let mut p = Projector::new(sections());
        p.project(100.0);
        assert!(!p.last_state().header_compact);
        p.project(101.0);
        assert!(p.last_state().header_compact);
    }

    #[test]
    fn header_hides_only_scrolling_down_past_threshold() {
        let mut p = Projector::new(sections());
        p.project(150.0);
        assert!(!p.last_state().header_hidden);

        // downward past 200
        p.project(260.0);
        assert!(p.last_state().header_hidden);

        // upward shows it again even while still past 200
        p.project(240.0);
        assert!(!p.last_state().header_hidden);
    }

    #[test]
    fn diff_reports_only_transitions() {
        let mut p = Projector::new(sections());
        let first = p.project(350.0);
        assert_eq!(first.back_to_top_visible, Some(true));
        assert_eq!(first.header_compact, Some(true));
        assert_eq!(first.header_hidden, Some(true));

        // one unit further down: every derived value holds steady
        let second = p.project(351.0);
        assert!(second.is_empty(), "redundant tick produced {second:?}");
    }

    #[test]
    fn equal_offset_counts_as_not_scrolling_down() {
        // A tick at the same offset reads as "not downward", so a hidden
        // header comes back.
        let mut p = Projector::new(sections());
        p.project(350.0);
        assert!(p.last_state().header_hidden);
        let diff = p.project(350.0);
        assert_eq!(diff.header_hidden, Some(false));
    }

    #[test]
    fn breadcrumb_diff_carries_title() {
        let mut p = Projector::new(sections());
        let diff = p.project(700.0);
        assert_eq!(diff.active_title.as_deref(), Some("About Us"));
        let diff = p.project(720.0);
        assert_eq!(diff.active_title, None);
    }

    #[test]
    fn resize_remeasure_takes_effect_next_tick() {
        let mut p = Projector::new(sections());
        p.project(700.0);
        assert_eq!(p.last_state().active_id, "about");

        // layout shifted everything down by 1000
        p.set_sections(vec![Section::new("about", 1600.0, 500.0, "About Us")]);
        p.project(700.0);
        assert_eq!(p.last_state().active_id, WELCOME_ID);
    }
}
