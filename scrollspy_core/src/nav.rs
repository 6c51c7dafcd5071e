// Navigation bar model: items, fragment links, highlight state.

use serde::{Deserialize, Serialize};

use crate::tracker::RegionLookup;
use crate::types::SectionId;

/// One entry in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub anchor: SectionId,
}

impl NavItem {
    /// `"About"` links to the `about` section.
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        let anchor = SectionId::new(label.to_lowercase());
        NavItem { label, anchor }
    }
}

/// Render-ready row for the navigation renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub label: String,
    pub href: String,
    pub active: bool,
}

pub fn nav_entries(items: &[NavItem], active: Option<&SectionId>) -> Vec<NavEntry> {
    items
        .iter()
        .map(|item| NavEntry {
            label: item.label.clone(),
            href: item.anchor.href(),
            active: active == Some(&item.anchor),
        })
        .collect()
}

/// Document offset to scroll to when an anchor is followed.
pub fn scroll_target<L>(anchor: &SectionId, layout: &L) -> Option<f64>
where
    L: RegionLookup + ?Sized,
{
    layout
        .lookup_region(anchor)
        .map(|geometry| geometry.top_offset)
        .filter(|top| top.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Region;

    fn items() -> Vec<NavItem> {
        ["About", "Skills", "Contact"]
            .into_iter()
            .map(NavItem::from_label)
            .collect()
    }

    #[test]
    fn labels_map_to_lowercase_anchors() {
        let item = NavItem::from_label("Skills");
        assert_eq!(item.anchor.as_str(), "skills");
        assert_eq!(item.anchor.href(), "#skills");
    }

    #[test]
    fn only_matching_entry_is_active() {
        let active = SectionId::from("skills");
        let entries = nav_entries(&items(), Some(&active));
        let flags: Vec<bool> = entries.iter().map(|e| e.active).collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn hero_highlights_nothing() {
        let active = SectionId::from("hero");
        assert!(nav_entries(&items(), Some(&active)).iter().all(|e| !e.active));
        assert!(nav_entries(&items(), None).iter().all(|e| !e.active));
    }

    #[test]
    fn scroll_target_uses_region_top() {
        let layout = vec![
            Region::new("hero", 0.0, 800.0),
            Region::new("contact", 2400.0, 500.0),
        ];
        assert_eq!(scroll_target(&SectionId::from("contact"), &layout), Some(2400.0));
        assert_eq!(scroll_target(&SectionId::from("about"), &layout), None);
    }
}
