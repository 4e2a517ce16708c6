//! Static site generation.
//!
//! Final stage of the dept-site build: takes the loaded model and writes a
//! complete single-page site to the output directory. The index page carries
//! every populated region plus one hidden, pre-rendered modal overlay per
//! resolvable entity; the embedded script only toggles visibility, so all
//! content decisions stay in Rust.
//!
//! Overlay content is resolved through the [`ModalController`], which means
//! the generated output obeys the same rules as the interaction model: a
//! `disabled` faculty member never gets an overlay, because the controller
//! refuses the open transition for it.
//!
//! CSS and the interaction script are embedded at compile time with
//! `include_str!` — the generated site is self-contained.

use crate::modal::{Category, ModalController, ModalState};
use crate::model::SiteData;
use crate::render;
use maud::{Markup, html};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Counts of what generation produced, for the console summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    pub specialty_overlays: usize,
    pub course_overlays: usize,
    pub faculty_overlays: usize,
    /// Faculty overlays withheld because the member is disabled.
    pub suppressed: usize,
}

const CSS: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

/// Generate the site into `output_dir`.
pub fn generate(data: &SiteData, output_dir: &Path) -> Result<GenerateSummary, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let mut summary = GenerateSummary::default();
    let page = render_index(data, &mut summary);
    fs::write(output_dir.join("index.html"), page.into_string())?;

    debug!(
        specialties = summary.specialty_overlays,
        courses = summary.course_overlays,
        faculty = summary.faculty_overlays,
        suppressed = summary.suppressed,
        "site generated"
    );
    Ok(summary)
}

/// Render the full index page. Exposed for tests; [`generate`] writes it.
pub fn render_index(data: &SiteData, summary: &mut GenerateSummary) -> Markup {
    let title = data
        .site_info
        .as_ref()
        .map(|info| info.title.as_str())
        .filter(|t| !t.is_empty())
        .unwrap_or("Department");

    let content = html! {
        (render::error_banner())
        (render::site_header(data.site_info.as_ref()))
        (render::statistics_strip(&data.statistics))
        (render::specialties_grid(data))
        (render::faculty_section(data))
        (render::external_links(data.links.as_ref()))
        (modal_overlays(data, summary))
    };

    render::base_document(title, CSS, JS, content)
}

/// One hidden overlay per entity, resolved through the modal controller.
fn modal_overlays(data: &SiteData, summary: &mut GenerateSummary) -> Markup {
    let mut modals = ModalController::new();
    let mut overlays: Vec<Markup> = Vec::new();

    for id in data.specialties.keys() {
        let state = modals.show_specialty(Some(data), id).clone();
        modals.close(Category::Specialty);
        if let ModalState::Open(view) = state {
            overlays.push(overlay("specialty", id, render::detail_view(Some(data), &view)));
            summary.specialty_overlays += 1;
        }
    }

    for id in data.courses.keys() {
        let state = modals.show_course(Some(data), id).clone();
        modals.close(Category::Course);
        if let ModalState::Open(view) = state {
            overlays.push(overlay("course", id, render::detail_view(Some(data), &view)));
            summary.course_overlays += 1;
        }
    }

    for id in data.faculty.keys() {
        let state = modals.show_faculty(Some(data), id).clone();
        modals.close(Category::Faculty);
        match state {
            ModalState::Open(view) => {
                overlays.push(overlay("faculty", id, render::detail_view(Some(data), &view)));
                summary.faculty_overlays += 1;
            }
            ModalState::Closed => summary.suppressed += 1,
        }
    }

    html! {
        @for markup in overlays {
            (markup)
        }
    }
}

fn overlay(category: &str, id: &str, body: Markup) -> Markup {
    html! {
        div.modal-overlay.hidden data-modal=(category) data-entity-id=(id) {
            div.modal-surface role="dialog" aria-modal="true" {
                button.modal-close aria-label="Close" { "×" }
                (body)
            }
        }
    }
}
