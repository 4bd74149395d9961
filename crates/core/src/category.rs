//! Project category catalogue.
//!
//! Categories are a convention shared with the frontend. The server stores
//! whatever string it receives; this module only answers whether a value is
//! one of the known ones so callers can log drift.

/// The categories the portfolio frontend knows how to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Photography,
    Videography,
    ThreeDDesign,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 3] = [
        ProjectCategory::Photography,
        ProjectCategory::Videography,
        ProjectCategory::ThreeDDesign,
    ];

    /// Wire/storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectCategory::Photography => "photography",
            ProjectCategory::Videography => "videography",
            ProjectCategory::ThreeDDesign => "3d_design",
        }
    }

    /// Exact, case-sensitive lookup. Returns `None` for anything unknown.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// Whether `value` names a category the frontend recognises.
pub fn is_known_category(value: &str) -> bool {
    ProjectCategory::parse(value).is_some()
}
