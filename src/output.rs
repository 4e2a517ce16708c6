//! CLI output formatting.
//!
//! Output is information-centric: the primary display for every entity is
//! its semantic identity (title, code, position), with indented context
//! lines underneath. Each report has a `format_*` function returning
//! `Vec<String>` for testability and a `print_*` wrapper that writes to
//! stdout. Format functions are pure — no I/O, no side effects.
//!
//! ```text
//! Data
//!     2 specialties, 12 courses, 7 faculty, 4 statistics
//! Issues
//!     specialty 'ai' references unknown course 'cs999'
//! ```

use crate::generate::GenerateSummary;
use crate::model::{Course, DataCounts, FacultyMember};
use crate::validate::ValidationReport;
use std::path::Path;

/// Indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format the check report: collection counts plus any data-quality issues.
pub fn format_check_output(report: &ValidationReport, counts: &DataCounts) -> Vec<String> {
    let mut lines = vec![
        "Data".to_string(),
        format!(
            "{}{} specialties, {} courses, {} faculty, {} statistics",
            indent(1),
            counts.specialties,
            counts.courses,
            counts.faculty,
            counts.statistics
        ),
    ];

    if report.is_complete() {
        lines.push("Document is complete".to_string());
    } else {
        lines.push("Issues".to_string());
        for issue in &report.issues {
            lines.push(format!("{}{}", indent(1), issue));
        }
    }
    lines
}

pub fn print_check_output(report: &ValidationReport, counts: &DataCounts) {
    for line in format_check_output(report, counts) {
        println!("{}", line);
    }
}

/// Format the build summary: overlay counts and the output location.
pub fn format_build_output(summary: &GenerateSummary, output_dir: &Path) -> Vec<String> {
    let mut lines = vec![format!(
        "Generated {} specialty, {} course, {} faculty overlays",
        summary.specialty_overlays, summary.course_overlays, summary.faculty_overlays
    )];
    if summary.suppressed > 0 {
        lines.push(format!(
            "{}{} faculty profile(s) withheld (disabled)",
            indent(1),
            summary.suppressed
        ));
    }
    lines.push(format!("Site generated at {}", output_dir.display()));
    lines
}

pub fn print_build_output(summary: &GenerateSummary, output_dir: &Path) {
    for line in format_build_output(summary, output_dir) {
        println!("{}", line);
    }
}

/// Format course search hits.
///
/// ```text
/// Courses
/// 001 Intro to Programming (CS101)
///     Hours: 3h
/// ```
pub fn format_course_results(hits: &[&Course]) -> Vec<String> {
    let mut lines = vec!["Courses".to_string()];
    if hits.is_empty() {
        lines.push(format!("{}(no matches)", indent(1)));
        return lines;
    }
    for (pos, course) in hits.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(pos + 1),
            course.name,
            course.code
        ));
        if !course.hours.is_empty() {
            lines.push(format!("{}Hours: {}", indent(1), course.hours));
        }
    }
    lines
}

/// Format faculty search hits.
pub fn format_faculty_results(hits: &[&FacultyMember]) -> Vec<String> {
    let mut lines = vec!["Faculty".to_string()];
    if hits.is_empty() {
        lines.push(format!("{}(no matches)", indent(1)));
        return lines;
    }
    for (pos, member) in hits.iter().enumerate() {
        lines.push(format!("{} {}", format_index(pos + 1), member.name));
        if !member.position.is_empty() {
            lines.push(format!("{}Position: {}", indent(1), member.position));
        }
        if !member.specialization.is_empty() {
            lines.push(format!(
                "{}Specialization: {}",
                indent(1),
                member.specialization
            ));
        }
    }
    lines
}

pub fn print_search_results(courses: &[&Course], faculty: &[&FacultyMember]) {
    for line in format_course_results(courses) {
        println!("{}", line);
    }
    println!();
    for line in format_faculty_results(faculty) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::Issue;

    #[test]
    fn check_output_lists_counts_and_issues() {
        let report = ValidationReport {
            issues: vec![Issue::DanglingCourse {
                specialty: "ai".into(),
                course: "cs999".into(),
            }],
        };
        let counts = DataCounts {
            specialties: 1,
            courses: 2,
            faculty: 3,
            statistics: 4,
        };
        let lines = format_check_output(&report, &counts);
        assert_eq!(lines[0], "Data");
        assert_eq!(lines[1], "    1 specialties, 2 courses, 3 faculty, 4 statistics");
        assert_eq!(lines[2], "Issues");
        assert!(lines[3].contains("cs999"));
    }

    #[test]
    fn complete_report_prints_single_status_line() {
        let counts = DataCounts {
            specialties: 1,
            courses: 1,
            faculty: 1,
            statistics: 0,
        };
        let lines = format_check_output(&ValidationReport::default(), &counts);
        assert!(lines.contains(&"Document is complete".to_string()));
    }

    #[test]
    fn build_output_reports_suppressed_profiles() {
        let summary = GenerateSummary {
            specialty_overlays: 2,
            course_overlays: 5,
            faculty_overlays: 3,
            suppressed: 1,
        };
        let lines = format_build_output(&summary, Path::new("dist"));
        assert!(lines[0].contains("2 specialty"));
        assert!(lines[1].contains("withheld"));
        assert!(lines.last().unwrap().contains("dist"));
    }

    #[test]
    fn empty_search_results_say_so() {
        let lines = format_course_results(&[]);
        assert_eq!(lines, vec!["Courses".to_string(), "    (no matches)".to_string()]);
    }

    #[test]
    fn course_results_use_indexed_headers() {
        let course = Course {
            code: "CS101".into(),
            name: "Intro".into(),
            hours: "3h".into(),
            ..Course::default()
        };
        let lines = format_course_results(&[&course]);
        assert_eq!(lines[1], "001 Intro (CS101)");
        assert_eq!(lines[2], "    Hours: 3h");
    }
}
