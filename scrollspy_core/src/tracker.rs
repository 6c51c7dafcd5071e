// Active-section tracking: map a scroll position to the region under the fixed header.
// Rule: no match is a no-op. The previous section stays highlighted.

use tracing::debug;

use crate::types::*;

/// Geometry source for rendered regions (the host's layout, e.g. `getElementById`).
pub trait RegionLookup {
    /// Current geometry for `id`, or `None` when the element is not rendered.
    fn lookup_region(&self, id: &SectionId) -> Option<RegionGeometry>;
}

impl RegionLookup for [Region] {
    fn lookup_region(&self, id: &SectionId) -> Option<RegionGeometry> {
        self.iter().find(|r| &r.id == id).map(|r| r.geometry)
    }
}

impl RegionLookup for Vec<Region> {
    fn lookup_region(&self, id: &SectionId) -> Option<RegionGeometry> {
        self.as_slice().lookup_region(id)
    }
}

/// First region (top-to-bottom) whose half-open range contains `scroll_y + header_offset`.
///
/// Total over every input: NaN positions and empty lists simply never match.
pub fn evaluate(scroll_y: f64, header_offset: f64, regions: &[Region]) -> Option<&SectionId> {
    let effective = scroll_y + header_offset;
    regions
        .iter()
        .find(|r| r.geometry.contains(effective))
        .map(|r| &r.id)
}

/// Owns the active-section state for one page.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    sections: Vec<SectionId>,
    header_offset: f64,
    active: Option<SectionId>,
}

impl SectionTracker {
    /// Starts with the first section active.
    pub fn new(sections: Vec<SectionId>, header_offset: f64) -> Self {
        let active = sections.first().cloned();
        SectionTracker {
            sections,
            header_offset,
            active,
        }
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    pub fn header_offset(&self) -> f64 {
        self.header_offset
    }

    pub fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    /// Evaluate against an explicit region list.
    /// Returns the new active section only when it changed.
    pub fn update(&mut self, scroll_y: f64, regions: &[Region]) -> Option<SectionId> {
        let effective = scroll_y + self.header_offset;
        // Only configured sections may become active.
        let matched = regions
            .iter()
            .find(|r| self.sections.contains(&r.id) && r.geometry.contains(effective))?;
        let matched = matched.id.clone();
        self.apply(&matched)
    }

    /// Evaluate against fresh geometry from the host layout, in configured order.
    /// Sections the layout cannot find are skipped.
    pub fn update_from_layout<L>(&mut self, scroll_y: f64, layout: &L) -> Option<SectionId>
    where
        L: RegionLookup + ?Sized,
    {
        let effective = scroll_y + self.header_offset;
        let matched = self.sections.iter().find(|id| {
            layout
                .lookup_region(id)
                .is_some_and(|geometry| geometry.contains(effective))
        })?;
        let matched = matched.clone();
        self.apply(&matched)
    }

    fn apply(&mut self, matched: &SectionId) -> Option<SectionId> {
        if self.active.as_ref() == Some(matched) {
            return None;
        }
        debug!(
            from = ?self.active.as_ref().map(SectionId::as_str),
            to = matched.as_str(),
            "active section changed"
        );
        self.active = Some(matched.clone());
        Some(matched.clone())
    }
}
