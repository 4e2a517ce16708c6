//! The in-memory data model deserialized from the department's `data.json`.
//!
//! One document describes the whole site: identity, specialties, courses,
//! faculty, headline statistics, and the two external links. The document is
//! read once at load time and never mutated afterwards — every downstream
//! component borrows from the same immutable [`SiteData`].
//!
//! Collections are `BTreeMap`s keyed by entity id, which gives a stable,
//! deterministic iteration order for display. `statistics` is the exception:
//! an ordered list whose order is the display order, matched by title.
//!
//! Field names in the JSON are camelCase; optionality is explicit in the
//! types. A missing optional field is an omitted sub-section when rendered,
//! never an error.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Map key that designates the department head inside the faculty map.
pub const HEAD_KEY: &str = "head";

/// The complete site document.
///
/// Everything is optional or defaultable: the validator reports on missing
/// blocks, but rendering proceeds with whatever is present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteData {
    pub site_info: Option<SiteInfo>,
    #[serde(default)]
    pub specialties: BTreeMap<String, Specialty>,
    #[serde(default)]
    pub courses: BTreeMap<String, Course>,
    #[serde(default)]
    pub faculty: BTreeMap<String, FacultyMember>,
    #[serde(default)]
    pub statistics: Vec<Statistic>,
    pub links: Option<ExternalLinks>,
}

/// Site identity block: titles, tagline, logo.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub club_name: String,
    #[serde(default)]
    pub club_tagline: String,
    pub logo: Option<String>,
}

/// External link targets updated on the apply / learn-more anchors.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalLinks {
    pub apply: Option<String>,
    pub learn_more: Option<String>,
}

/// An academic program track.
///
/// `courses` holds course-id references into [`SiteData::courses`]. A
/// reference that doesn't resolve is a data-quality issue (reported by the
/// validator) but renders as a skipped entry, not an error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specialty {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub overview: String,
    /// Theme token resolved through [`crate::theme::Theme::from_token`].
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub learning_points: Vec<String>,
    #[serde(default)]
    pub careers: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Ordered course-id references; order is the display order.
    #[serde(default)]
    pub courses: Vec<String>,
    pub coordinator: Option<Coordinator>,
}

/// Specialty coordinator contact block.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinator {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
}

/// A single academic course, referenced from zero or more specialties.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub hours: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// A staff/instructor profile.
///
/// The member stored under [`HEAD_KEY`] is the department head and renders in
/// its own slot. Some documents redundantly store the map key in the `id`
/// field; detail lookup accepts either.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyMember {
    /// Redundant copy of the map key, present in some documents.
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub specialization: String,
    /// Theme token resolved through [`crate::theme::Theme::from_token`].
    #[serde(default)]
    pub gradient: String,
    pub qualification: Option<String>,
    pub badge: Option<String>,
    pub bio: Option<String>,
    pub message: Option<String>,
    pub degree: Option<String>,
    pub office_hours: Option<String>,
    pub office_number: Option<String>,
    #[serde(default)]
    pub research: Vec<String>,
    #[serde(default)]
    pub publications: Vec<String>,
    #[serde(default)]
    pub awards: Vec<String>,
    pub image: Option<String>,
    /// Profile intentionally not publishable yet: the card is inert and the
    /// detail view refuses to open.
    #[serde(default)]
    pub disabled: bool,
}

/// A headline statistic, matched by `title` against `data-stat` markers.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistic {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

/// Entity counts per collection, for the console summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataCounts {
    pub specialties: usize,
    pub courses: usize,
    pub faculty: usize,
    pub statistics: usize,
}

impl SiteData {
    /// Parse a document from its JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// The department head, if the document designates one.
    pub fn head(&self) -> Option<&FacultyMember> {
        self.faculty.get(HEAD_KEY)
    }

    /// Non-head faculty in map-iteration order.
    pub fn members(&self) -> impl Iterator<Item = (&String, &FacultyMember)> {
        self.faculty.iter().filter(|(id, _)| id.as_str() != HEAD_KEY)
    }

    pub fn counts(&self) -> DataCounts {
        DataCounts {
            specialties: self.specialties.len(),
            courses: self.courses.len(),
            faculty: self.faculty.len(),
            statistics: self.statistics.len(),
        }
    }
}
