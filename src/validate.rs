//! Advisory structural validation of the loaded document.
//!
//! Validation never blocks rendering: a document with issues still renders
//! whatever sections have data. The report exists so data problems surface on
//! the console (and in logs) instead of as silently empty regions.
//!
//! Checks run in a fixed order: site info presence, then each collection's
//! non-emptiness, then referential integrity of every specialty's course-id
//! references.

use crate::model::SiteData;
use thiserror::Error;
use tracing::warn;

/// A single data-quality issue found in the document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    #[error("site info block is missing")]
    MissingSiteInfo,
    #[error("specialties collection is empty")]
    NoSpecialties,
    #[error("courses collection is empty")]
    NoCourses,
    #[error("faculty collection is empty")]
    NoFaculty,
    #[error("specialty '{specialty}' references unknown course '{course}'")]
    DanglingCourse { specialty: String, course: String },
}

/// Outcome of validating a document.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    /// True when no issues were found.
    pub fn is_complete(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check structural completeness and referential integrity.
///
/// Every issue is also logged at `warn`; the caller decides whether to print
/// the report. Rendering proceeds regardless of the outcome.
pub fn validate(data: &SiteData) -> ValidationReport {
    let mut issues = Vec::new();

    if data.site_info.is_none() {
        issues.push(Issue::MissingSiteInfo);
    }
    if data.specialties.is_empty() {
        issues.push(Issue::NoSpecialties);
    }
    if data.courses.is_empty() {
        issues.push(Issue::NoCourses);
    }
    if data.faculty.is_empty() {
        issues.push(Issue::NoFaculty);
    }

    for (id, specialty) in &data.specialties {
        for course_id in &specialty.courses {
            if !data.courses.contains_key(course_id) {
                issues.push(Issue::DanglingCourse {
                    specialty: id.clone(),
                    course: course_id.clone(),
                });
            }
        }
    }

    for issue in &issues {
        warn!(%issue, "data-quality issue");
    }

    ValidationReport { issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Course, SiteData, Specialty};

    fn document(json: &str) -> SiteData {
        SiteData::from_json(json).unwrap()
    }

    #[test]
    fn empty_document_reports_every_missing_block() {
        let report = validate(&document("{}"));
        assert_eq!(
            report.issues,
            vec![
                Issue::MissingSiteInfo,
                Issue::NoSpecialties,
                Issue::NoCourses,
                Issue::NoFaculty,
            ]
        );
        assert!(!report.is_complete());
    }

    #[test]
    fn complete_document_has_no_issues() {
        let report = validate(&document(
            r#"{
                "siteInfo": { "title": "Engineering" },
                "specialties": { "ai": { "name": "AI", "courses": ["cs101"] } },
                "courses": { "cs101": { "name": "Intro" } },
                "faculty": { "head": { "name": "Dr. Head" } }
            }"#,
        ));
        assert!(report.is_complete());
    }

    #[test]
    fn dangling_course_reference_is_reported() {
        let report = validate(&document(
            r#"{
                "siteInfo": { "title": "Engineering" },
                "specialties": { "ai": { "name": "AI", "courses": ["cs101", "cs999"] } },
                "courses": { "cs101": { "name": "Intro" } },
                "faculty": { "head": { "name": "Dr. Head" } }
            }"#,
        ));
        assert_eq!(
            report.issues,
            vec![Issue::DanglingCourse {
                specialty: "ai".into(),
                course: "cs999".into(),
            }]
        );
    }

    #[test]
    fn one_issue_per_dangling_reference() {
        let mut data = SiteData::default();
        data.courses.insert("cs101".into(), Course::default());
        data.specialties.insert(
            "ai".into(),
            Specialty {
                courses: vec!["cs101".into(), "cs998".into(), "cs999".into()],
                ..Specialty::default()
            },
        );

        let report = validate(&data);
        let dangling: Vec<_> = report
            .issues
            .iter()
            .filter(|i| matches!(i, Issue::DanglingCourse { .. }))
            .collect();
        assert_eq!(dangling.len(), 2);
    }

    #[test]
    fn issues_render_human_readable() {
        let issue = Issue::DanglingCourse {
            specialty: "ai".into(),
            course: "cs999".into(),
        };
        assert_eq!(
            issue.to_string(),
            "specialty 'ai' references unknown course 'cs999'"
        );
    }
}
