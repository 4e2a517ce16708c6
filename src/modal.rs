//! Detail lookup and modal state.
//!
//! Each entity category (specialty, course, faculty) has its own modal with
//! two states: closed or open on a resolved detail view. The transitions
//! mirror the site's interaction model:
//!
//! - A "show details" request resolves the id against the model. An unknown
//!   id — or an absent model — still opens the modal, on an explicit
//!   not-found view. The user acted, so the user gets feedback; silent
//!   omission is reserved for bulk population.
//! - A `disabled` faculty member refuses the open transition entirely. The
//!   request is dropped and no modal opens.
//! - A second request while open supersedes the current content.
//! - Closing happens via the explicit close control ([`ModalController::close`])
//!   or via the escape key / a click on the backdrop
//!   ([`ModalController::close_all`], which closes every category).
//!
//! Lookup helpers live here too, shared with site generation: faculty
//! resolution accepts either the map key or the redundant `id` field stored
//! inside the member record.

use crate::model::{Course, FacultyMember, SiteData, Specialty};

/// Entity category, one independent modal per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Specialty,
    Course,
    Faculty,
}

/// Content an open modal presents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    /// Specialty detail for the given id.
    Specialty(String),
    /// Course detail for the given id.
    Course(String),
    /// Faculty detail for the given id (map key or redundant id field).
    Faculty(String),
    /// Explicit "not found" presentation for a failed lookup.
    NotFound { category: Category, id: String },
}

/// Open/closed state of one modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(DetailView),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }
}

/// Holds the three per-category modal states.
#[derive(Debug, Default)]
pub struct ModalController {
    specialty: ModalState,
    course: ModalState,
    faculty: ModalState,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, category: Category) -> &ModalState {
        match category {
            Category::Specialty => &self.specialty,
            Category::Course => &self.course,
            Category::Faculty => &self.faculty,
        }
    }

    /// Open the specialty modal for `id`.
    pub fn show_specialty(&mut self, data: Option<&SiteData>, id: &str) -> &ModalState {
        self.specialty = match data.and_then(|d| lookup_specialty(d, id)) {
            Some(_) => ModalState::Open(DetailView::Specialty(id.to_string())),
            None => ModalState::Open(not_found(Category::Specialty, id)),
        };
        &self.specialty
    }

    /// Open the course modal for `id`.
    pub fn show_course(&mut self, data: Option<&SiteData>, id: &str) -> &ModalState {
        self.course = match data.and_then(|d| lookup_course(d, id)) {
            Some(_) => ModalState::Open(DetailView::Course(id.to_string())),
            None => ModalState::Open(not_found(Category::Course, id)),
        };
        &self.course
    }

    /// Open the faculty modal for `id`.
    ///
    /// A member flagged `disabled` drops the request: the state is left
    /// untouched and no modal opens.
    pub fn show_faculty(&mut self, data: Option<&SiteData>, id: &str) -> &ModalState {
        match data.and_then(|d| lookup_faculty(d, id)) {
            Some(member) if member.disabled => {}
            Some(_) => self.faculty = ModalState::Open(DetailView::Faculty(id.to_string())),
            None => self.faculty = ModalState::Open(not_found(Category::Faculty, id)),
        }
        &self.faculty
    }

    /// Explicit close action on one modal.
    pub fn close(&mut self, category: Category) {
        match category {
            Category::Specialty => self.specialty = ModalState::Closed,
            Category::Course => self.course = ModalState::Closed,
            Category::Faculty => self.faculty = ModalState::Closed,
        }
    }

    /// Escape key or backdrop click: closes every category.
    pub fn close_all(&mut self) {
        self.specialty = ModalState::Closed;
        self.course = ModalState::Closed;
        self.faculty = ModalState::Closed;
    }
}

fn not_found(category: Category, id: &str) -> DetailView {
    DetailView::NotFound {
        category,
        id: id.to_string(),
    }
}

/// Resolve a specialty by id.
pub fn lookup_specialty<'a>(data: &'a SiteData, id: &str) -> Option<&'a Specialty> {
    data.specialties.get(id)
}

/// Resolve a course by id.
pub fn lookup_course<'a>(data: &'a SiteData, id: &str) -> Option<&'a Course> {
    data.courses.get(id)
}

/// Resolve a faculty member by map key, falling back to the redundant `id`
/// field some documents store inside the record. Both routes reach the same
/// member.
pub fn lookup_faculty<'a>(data: &'a SiteData, id: &str) -> Option<&'a FacultyMember> {
    data.faculty.get(id).or_else(|| {
        data.faculty
            .values()
            .find(|member| member.id.as_deref() == Some(id))
    })
}
