//! Resolves which page anchor is under the viewport probe line.

/// Anchors reachable from the navbar, in page order.
pub const NAV_ANCHORS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// Height of the fixed navbar; the probe line sits just below it.
pub const NAV_OFFSET: f64 = 80.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    /// Distance from the top of the document.
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Returns the first section containing `scroll_y + offset`, or `None` when
/// the probe falls outside every section.
pub fn active_section(bounds: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&str> {
    let probe = scroll_y + offset;
    bounds
        .iter()
        .find(|b| b.contains(probe))
        .map(|b| b.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 600.0),
            SectionBounds::new("about", 600.0, 500.0),
            SectionBounds::new("skills", 1100.0, 400.0),
            // gap for an unlisted section
            SectionBounds::new("projects", 1800.0, 900.0),
            SectionBounds::new("contact", 2700.0, 500.0),
        ]
    }

    #[test]
    fn probe_inside_section_selects_it() {
        let b = page();
        assert_eq!(active_section(&b, 0.0, NAV_OFFSET), Some("home"));
        assert_eq!(active_section(&b, 700.0, 0.0), Some("about"));
        assert_eq!(active_section(&b, 2000.0, NAV_OFFSET), Some("projects"));
    }

    #[test]
    fn boundaries_belong_to_the_next_section() {
        let b = page();
        assert_eq!(active_section(&b, 600.0, 0.0), Some("about"));
        assert_eq!(active_section(&b, 599.0, 0.0), Some("home"));
    }

    #[test]
    fn exactly_one_match_at_every_probe() {
        let b = page();
        let mut y = 0.0;
        while y < 3200.0 {
            let hits = b.iter().filter(|s| s.contains(y)).count();
            assert!(hits <= 1, "overlap at {y}");
            y += 50.0;
        }
    }

    #[test]
    fn probe_outside_sections_selects_none() {
        let b = page();
        assert_eq!(active_section(&b, 1600.0, 0.0), None);
        assert_eq!(active_section(&b, 5000.0, 0.0), None);
        assert_eq!(active_section(&[], 100.0, NAV_OFFSET), None);
    }

    #[test]
    fn anchors_are_unique() {
        let mut ids = NAV_ANCHORS.iter().map(|(id, _)| *id).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), NAV_ANCHORS.len());
    }
}
