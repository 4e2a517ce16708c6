//! Substring search over courses and faculty.
//!
//! Pure functions over the loaded model. The empty query deliberately
//! returns an empty result set — not the full collection — so an accidental
//! empty search never dumps everything. Matching is a case-sensitive
//! substring test; result order follows map-iteration order. No ranking, no
//! pagination.

use crate::model::{Course, FacultyMember, SiteData};

/// Courses whose name, code, or description contains `query`.
pub fn search_courses<'a>(data: &'a SiteData, query: &str) -> Vec<&'a Course> {
    if query.is_empty() {
        return Vec::new();
    }
    data.courses
        .values()
        .filter(|course| {
            course.name.contains(query)
                || course.code.contains(query)
                || course.description.contains(query)
        })
        .collect()
}

/// Faculty whose name, specialization, or position contains `query`.
pub fn search_faculty<'a>(data: &'a SiteData, query: &str) -> Vec<&'a FacultyMember> {
    if query.is_empty() {
        return Vec::new();
    }
    data.faculty
        .values()
        .filter(|member| {
            member.name.contains(query)
                || member.specialization.contains(query)
                || member.position.contains(query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> SiteData {
        SiteData::from_json(
            r#"{
                "courses": {
                    "cs101": { "code": "CS101", "name": "Intro to Programming", "description": "Variables and loops." },
                    "cs201": { "code": "CS201", "name": "Data Structures", "description": "Trees and graphs." },
                    "sec301": { "code": "SEC301", "name": "Network Security", "description": "Threat modeling." }
                },
                "faculty": {
                    "head": { "name": "Dr. Amal Hassan", "position": "Department Head", "specialization": "Databases" },
                    "omar": { "name": "Dr. Omar Khalil", "position": "Lecturer", "specialization": "Security" }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn empty_query_returns_empty_set() {
        let data = fixture();
        assert!(search_courses(&data, "").is_empty());
        assert!(search_faculty(&data, "").is_empty());
    }

    #[test]
    fn no_match_returns_empty_set() {
        let data = fixture();
        assert!(search_courses(&data, "Quantum").is_empty());
        assert!(search_faculty(&data, "Quantum").is_empty());
    }

    #[test]
    fn courses_match_on_name_code_and_description() {
        let data = fixture();
        assert_eq!(search_courses(&data, "Structures").len(), 1);
        assert_eq!(search_courses(&data, "SEC301").len(), 1);
        assert_eq!(search_courses(&data, "loops").len(), 1);
    }

    #[test]
    fn faculty_match_on_name_specialization_and_position() {
        let data = fixture();
        assert_eq!(search_faculty(&data, "Khalil").len(), 1);
        assert_eq!(search_faculty(&data, "Databases").len(), 1);
        assert_eq!(search_faculty(&data, "Lecturer").len(), 1);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let data = fixture();
        assert!(search_courses(&data, "intro").is_empty());
        assert_eq!(search_courses(&data, "Intro").len(), 1);
    }

    #[test]
    fn results_preserve_map_iteration_order() {
        let data = fixture();
        let hits = search_courses(&data, "CS");
        let codes: Vec<_> = hits.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["CS101", "CS201"]);
    }
}
