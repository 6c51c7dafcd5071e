// Strong typing over strings. Newtypes for section ids, pixel geometry for regions.
// Config arrives from JS as JSON; every field has a default.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Height of the fixed navigation bar, added to the raw scroll position.
pub const DEFAULT_HEADER_OFFSET: f64 = 100.0;

/// Scroll position at which the scroll-to-top button appears (inclusive).
pub const DEFAULT_SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Section identifier (the element id of a page section). Newtype for type safety.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        SectionId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fragment link for this section, e.g. `#about`.
    pub fn href(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        SectionId::new(id)
    }
}

/// Vertical geometry of a rendered region, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct RegionGeometry {
    pub top_offset: f64,
    pub height: f64,
}

impl RegionGeometry {
    pub fn new(top_offset: f64, height: f64) -> Self {
        RegionGeometry { top_offset, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top_offset + self.height
    }

    /// Half-open containment: `[top_offset, top_offset + height)`.
    /// NaN positions are never contained.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top_offset && position < self.bottom()
    }
}

/// A named region on the page, as measured by the host layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: SectionId,
    #[serde(flatten)]
    pub geometry: RegionGeometry,
}

impl Region {
    pub fn new(id: impl Into<String>, top_offset: f64, height: f64) -> Self {
        Region {
            id: SectionId::new(id),
            geometry: RegionGeometry::new(top_offset, height),
        }
    }
}

/// Page configuration passed from JS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollSpyConfig {
    /// Tracked sections, top to bottom.
    #[serde(default = "default_sections")]
    pub sections: Vec<SectionId>,
    /// Navigation bar labels. Each links to the section named by its lowercase form.
    #[serde(default = "default_nav_labels")]
    pub nav_labels: Vec<String>,
    /// Fixed overlay height compensation (pixels).
    #[serde(default = "default_header_offset")]
    pub header_offset: f64,
    /// Scroll-to-top visibility threshold (pixels, inclusive).
    #[serde(default = "default_scroll_top_threshold")]
    pub scroll_top_threshold: f64,
    /// Skills and contact links shown on the page.
    #[serde(default)]
    pub content: PortfolioContent,
}

fn default_sections() -> Vec<SectionId> {
    ["hero", "about", "skills", "contact"]
        .into_iter()
        .map(SectionId::from)
        .collect()
}

fn default_nav_labels() -> Vec<String> {
    ["About", "Skills", "Contact"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_header_offset() -> f64 {
    DEFAULT_HEADER_OFFSET
}

fn default_scroll_top_threshold() -> f64 {
    DEFAULT_SCROLL_TOP_THRESHOLD
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        ScrollSpyConfig {
            sections: default_sections(),
            nav_labels: default_nav_labels(),
            header_offset: default_header_offset(),
            scroll_top_threshold: default_scroll_top_threshold(),
            content: PortfolioContent::default(),
        }
    }
}

impl ScrollSpyConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: ScrollSpyConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the tracker cannot honor.
    pub fn validate(&self) -> Result<(), EngineError> {
        let mut seen = HashSet::with_capacity(self.sections.len());
        for id in &self.sections {
            if id.as_str().trim().is_empty() {
                return Err(EngineError::InvalidConfig(
                    "section id must not be empty".to_string(),
                ));
            }
            if !seen.insert(id) {
                return Err(EngineError::InvalidConfig(format!(
                    "duplicate section id: {}",
                    id
                )));
            }
        }

        for label in &self.nav_labels {
            let anchor = SectionId::new(label.to_lowercase());
            if !seen.contains(&anchor) {
                return Err(EngineError::InvalidConfig(format!(
                    "nav label {:?} links to untracked section {}",
                    label, anchor
                )));
            }
        }

        if !self.header_offset.is_finite() || self.header_offset < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "header_offset must be a non-negative number, got {}",
                self.header_offset
            )));
        }

        if !self.scroll_top_threshold.is_finite() || self.scroll_top_threshold < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "scroll_top_threshold must be a non-negative number, got {}",
                self.scroll_top_threshold
            )));
        }

        self.content.validate()
    }
}

/// One entry in the skills grid. `level` is a percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Skill {
            name: name.into(),
            level,
        }
    }
}

/// Contact channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    Telegram,
    Github,
}

/// External contact link (opened in a new tab by the page).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: String,
    pub handle: String,
    pub url: String,
}

impl ContactLink {
    pub fn new(kind: ContactKind, label: &str, handle: &str, url: &str) -> Self {
        ContactLink {
            kind,
            label: label.to_string(),
            handle: handle.to_string(),
            url: url.to_string(),
        }
    }
}

/// Static page content. Defaults reproduce the published portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    #[serde(default = "default_skills")]
    pub skills: Vec<Skill>,
    #[serde(default = "default_contact_links")]
    pub contact_links: Vec<ContactLink>,
}

fn default_skills() -> Vec<Skill> {
    vec![
        Skill::new("TypeScript", 95),
        Skill::new("React", 90),
        Skill::new("Next.js", 88),
        Skill::new("Vue.js", 85),
        Skill::new("Rust", 75),
        Skill::new("Go", 70),
        Skill::new("TailwindCSS", 92),
        Skill::new("Prisma", 80),
    ]
}

fn default_contact_links() -> Vec<ContactLink> {
    vec![
        ContactLink::new(
            ContactKind::Email,
            "Email",
            "TypeFlu@gmail.com",
            "mailto:TypeFlu@gmail.com",
        ),
        ContactLink::new(
            ContactKind::Telegram,
            "Telegram",
            "@TypeFlu",
            "https://t.me/typeflu",
        ),
        ContactLink::new(
            ContactKind::Github,
            "GitHub",
            "@TypeFlu",
            "https://github.com/typeflu",
        ),
    ]
}

impl Default for PortfolioContent {
    fn default() -> Self {
        PortfolioContent {
            skills: default_skills(),
            contact_links: default_contact_links(),
        }
    }
}

impl PortfolioContent {
    pub fn validate(&self) -> Result<(), EngineError> {
        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(EngineError::InvalidConfig(format!(
                "skill {} level {} exceeds 100",
                skill.name, skill.level
            )));
        }
        if let Some(link) = self.contact_links.iter().find(|l| l.url.trim().is_empty()) {
            return Err(EngineError::InvalidConfig(format!(
                "contact link {} has no url",
                link.label
            )));
        }
        Ok(())
    }
}

/// What changed during one evaluated animation frame. Returned to JS.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameOutcome {
    /// False when the frame ran without a pending scroll notification.
    pub evaluated: bool,
    /// New active section, only when it differs from the previous one.
    pub active_changed: Option<SectionId>,
    /// New scroll-to-top visibility, only when it flipped.
    pub scroll_top_changed: Option<bool>,
}

impl FrameOutcome {
    pub fn is_empty(&self) -> bool {
        self.active_changed.is_none() && self.scroll_top_changed.is_none()
    }
}
