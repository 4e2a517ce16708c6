//! HTML components for every populated region and detail view.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating:
//! type-safe, auto-escaped, no runtime template files. Each region renderer
//! is a pure, total function over the model — a missing optional field omits
//! its sub-section, and re-rendering a region yields byte-identical output,
//! so rebuilds replace rather than accumulate.
//!
//! Interactive elements carry `data-open-modal` / `data-entity-id` markers
//! that the embedded script wires to the pre-rendered overlays. Statistics
//! cards carry `data-stat` markers matched by title.

use crate::modal::{self, Category, DetailView};
use crate::model::{
    Course, ExternalLinks, FacultyMember, SiteData, SiteInfo, Specialty, Statistic,
};
use crate::theme::Theme;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Base HTML document shell with embedded CSS and script.
pub fn base_document(title: &str, css: &str, js: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                div.progress-bar id="progress-bar" {}
                (content)
                script { (PreEscaped(js)) }
            }
        }
    }
}

/// Site identity header: logo, club name and tagline, main title.
pub fn site_header(info: Option<&SiteInfo>) -> Markup {
    html! {
        header.site-header.reveal {
            @if let Some(info) = info {
                div.brand {
                    @if let Some(logo) = &info.logo {
                        img.site-logo src=(logo) alt=(info.club_name);
                    }
                    div.brand-text {
                        span.club-name { (info.club_name) }
                        span.club-tagline { (info.club_tagline) }
                    }
                }
                h1.site-title { (info.title) }
            }
        }
    }
}

/// Statistics strip: one card per statistic, tagged with a `data-stat`
/// marker. An empty list renders an empty strip.
pub fn statistics_strip(statistics: &[Statistic]) -> Markup {
    html! {
        section.stats-strip.reveal {
            @for stat in statistics {
                div.stat-card data-stat=(stat.title) {
                    i class={ "icon " (stat.icon) } {}
                    h3.stat-title { (stat.title) }
                    p.stat-description { (stat.description) }
                }
            }
        }
    }
}

/// Specialty card grid, one card per specialty in map-iteration order.
pub fn specialties_grid(data: &SiteData) -> Markup {
    html! {
        section.specialties-grid.reveal {
            @for (id, specialty) in &data.specialties {
                (specialty_card(id, specialty))
            }
        }
    }
}

fn specialty_card(id: &str, specialty: &Specialty) -> Markup {
    let theme = Theme::from_token(&specialty.color);
    html! {
        div.specialty-card.clickable data-open-modal="specialty" data-entity-id=(id) {
            div.card-head {
                i class={ "icon specialty-icon " (specialty.icon) " " (theme.text_class()) } {}
                h2 class={ "specialty-name " (theme.text_class()) } { (specialty.name) }
                div.specialty-meta {
                    span.degree { (specialty.degree) }
                    span.duration { (specialty.duration) }
                }
            }
            @if !specialty.learning_points.is_empty() {
                div class={ "card-panel " (theme.tint_class()) } {
                    h3 { "What you'll learn" }
                    ul.learning-points {
                        @for point in &specialty.learning_points {
                            li { (point) }
                        }
                    }
                }
            }
            @if !specialty.careers.is_empty() {
                div class={ "card-panel " (theme.tint_class()) } {
                    h3 { "Career paths" }
                    ul.careers {
                        // Cards preview the first three; the full list lives in
                        // the detail view.
                        @for career in specialty.careers.iter().take(3) {
                            li { (career) }
                        }
                    }
                }
            }
            div class={ "explore-btn " (theme.bg_class()) } { "Explore specialty" }
        }
    }
}

/// Faculty section: the department head in its own slot, then the remaining
/// members in map-iteration order.
pub fn faculty_section(data: &SiteData) -> Markup {
    html! {
        section.faculty-section.reveal {
            @if let Some(head) = data.head() {
                div.faculty-head-slot {
                    (faculty_card(crate::model::HEAD_KEY, head, true))
                }
            }
            div.faculty-grid {
                @for (id, member) in data.members() {
                    (faculty_card(id, member, false))
                }
            }
        }
    }
}

fn faculty_card(id: &str, member: &FacultyMember, is_head: bool) -> Markup {
    let theme = Theme::from_token(&member.gradient);
    let interactive = !member.disabled;
    html! {
        div class={ "faculty-card" (if is_head { " faculty-card-head" } else { "" }) (if interactive { " clickable" } else { "" }) }
            data-open-modal=[interactive.then_some("faculty")]
            data-entity-id=[interactive.then_some(id)] {
            div class={ "avatar-ring " (theme.gradient_class()) } {
                (avatar(member))
            }
            h3.faculty-name { (member.name) }
            p.faculty-position { (member.position) }
            @if let Some(qualification) = &member.qualification {
                span class={ "chip " (theme.bg_class()) } { (qualification) }
            }
            @if let Some(badge) = &member.badge {
                span class={ "chip " (theme.bg_class()) } { (badge) }
            }
            @if !member.specialization.is_empty() {
                p.faculty-specialization { (member.specialization) }
            }
            @if !member.email.is_empty() {
                p.faculty-email { (member.email) }
            }
        }
    }
}

fn avatar(member: &FacultyMember) -> Markup {
    html! {
        @if let Some(image) = &member.image {
            img.avatar src=(image) alt=(member.name);
        } @else {
            div.avatar-placeholder { i class="icon fa-user" {} }
        }
    }
}

/// External call-to-action links. Anchors render only when a URL is present.
pub fn external_links(links: Option<&ExternalLinks>) -> Markup {
    html! {
        section.cta-links.reveal {
            @if let Some(links) = links {
                @if let Some(apply) = &links.apply {
                    a.apply-btn href=(apply) { "Apply now" }
                }
                @if let Some(learn_more) = &links.learn_more {
                    a.learn-more-btn href=(learn_more) { "Learn more" }
                }
            }
        }
    }
}

/// Hidden, dismissible error banner the embedded script can surface. It
/// auto-expires after five seconds or earlier on explicit dismissal.
pub fn error_banner() -> Markup {
    html! {
        div.error-banner.hidden id="error-banner" role="alert" {
            span.error-message {}
            button.error-dismiss { "×" }
        }
    }
}

/// Render the content of an open modal.
///
/// An entity view whose id no longer resolves — or any view against an
/// absent model — degrades to the explicit not-found presentation.
pub fn detail_view(data: Option<&SiteData>, view: &DetailView) -> Markup {
    let Some(data) = data else {
        return not_found(view_category(view));
    };
    match view {
        DetailView::Specialty(id) => match modal::lookup_specialty(data, id) {
            Some(specialty) => specialty_detail(data, specialty),
            None => not_found(Category::Specialty),
        },
        DetailView::Course(id) => match modal::lookup_course(data, id) {
            Some(course) => course_detail(course),
            None => not_found(Category::Course),
        },
        DetailView::Faculty(id) => match modal::lookup_faculty(data, id) {
            Some(member) => faculty_detail(member),
            None => not_found(Category::Faculty),
        },
        DetailView::NotFound { category, .. } => not_found(*category),
    }
}

fn view_category(view: &DetailView) -> Category {
    match view {
        DetailView::Specialty(_) => Category::Specialty,
        DetailView::Course(_) => Category::Course,
        DetailView::Faculty(_) => Category::Faculty,
        DetailView::NotFound { category, .. } => *category,
    }
}

/// Explicit "not found" presentation for a failed detail lookup.
pub fn not_found(category: Category) -> Markup {
    let label = match category {
        Category::Specialty => "specialty",
        Category::Course => "course",
        Category::Faculty => "faculty member",
    };
    html! {
        div.not-found {
            p { "Sorry, details for this " (label) " are not available." }
        }
    }
}

/// Specialty detail: overview, optional coordinator, careers, skills, and
/// the referenced course cards. Dangling course-ids are skipped silently.
pub fn specialty_detail(data: &SiteData, specialty: &Specialty) -> Markup {
    let theme = Theme::from_token(&specialty.color);
    html! {
        div.specialty-detail {
            div.detail-head {
                div class={ "icon-disc " (theme.gradient_class()) } {
                    i class={ "icon " (specialty.icon) } {}
                }
                h2 class=(theme.text_class()) { (specialty.name) }
                p.subtitle { (specialty.subtitle) }
            }
            @if !specialty.overview.is_empty() {
                div class={ "detail-panel " (theme.tint_class()) } {
                    h3 { "Overview" }
                    p { (specialty.overview) }
                }
            }
            @if let Some(coordinator) = &specialty.coordinator {
                div class={ "detail-panel " (theme.tint_class()) } {
                    h3 { "Specialty coordinator" }
                    h4 { (coordinator.name) }
                    p { (coordinator.title) }
                    @if !coordinator.email.is_empty() {
                        a href={ "mailto:" (coordinator.email) } { (coordinator.email) }
                    }
                }
            }
            @if !specialty.careers.is_empty() {
                div.detail-panel {
                    h3 { "Career paths" }
                    div.career-grid {
                        @for career in &specialty.careers {
                            div class={ "career-tile " (theme.gradient_class()) } { (career) }
                        }
                    }
                }
            }
            @if !specialty.skills.is_empty() {
                div.detail-panel {
                    h3 { "Acquired skills" }
                    ul.skills {
                        @for skill in &specialty.skills {
                            li { (skill) }
                        }
                    }
                }
            }
            @if !specialty.courses.is_empty() {
                div.detail-panel {
                    h3 { "Featured courses" }
                    div.course-grid {
                        @for course_id in &specialty.courses {
                            @if let Some(course) = modal::lookup_course(data, course_id) {
                                div.course-card.clickable data-open-modal="course" data-entity-id=(course_id) {
                                    span class={ "course-code " (theme.text_class()) } { (course.code) }
                                    span.course-hours { (course.hours) }
                                    h4.course-name { (course.name) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Course detail: code, hours, description, objectives, and topics.
pub fn course_detail(course: &Course) -> Markup {
    html! {
        div.course-detail {
            div.detail-head {
                span.chip.theme-purple-bg { (course.code) }
                h2 { (course.name) }
                p.course-hours { (course.hours) }
            }
            @if !course.description.is_empty() {
                div.detail-panel.theme-purple-tint {
                    h3 { "Course description" }
                    p { (course.description) }
                }
            }
            @if !course.objectives.is_empty() {
                div.detail-panel {
                    h3 { "Objectives" }
                    ul.objectives {
                        @for objective in &course.objectives {
                            li { (objective) }
                        }
                    }
                }
            }
            @if !course.topics.is_empty() {
                div.detail-panel {
                    h3 { "Topics" }
                    ul.topics {
                        @for topic in &course.topics {
                            li { (topic) }
                        }
                    }
                }
            }
        }
    }
}

/// Faculty detail: identity block plus one sub-section per present field.
pub fn faculty_detail(member: &FacultyMember) -> Markup {
    let theme = Theme::from_token(&member.gradient);
    html! {
        div.faculty-detail {
            div.detail-head {
                div class={ "avatar-ring avatar-ring-lg " (theme.gradient_class()) } {
                    (avatar(member))
                }
                h2 { (member.name) }
                p.faculty-position { (member.position) }
                @if let Some(qualification) = &member.qualification {
                    span class={ "chip " (theme.bg_class()) } { (qualification) }
                }
            }
            div.detail-columns {
                @if !member.email.is_empty() {
                    div.detail-panel.theme-green-tint {
                        h3 { "Email" }
                        a href={ "mailto:" (member.email) } { (member.email) }
                    }
                }
                @if !member.specialization.is_empty() {
                    div.detail-panel.theme-purple-tint {
                        h3 { "Specialization" }
                        p { (member.specialization) }
                    }
                }
            }
            @if let Some(bio) = &member.bio {
                div.detail-panel {
                    h3 { "About" }
                    p.preserve-lines { (bio) }
                }
            }
            @if let Some(message) = &member.message {
                div.detail-panel {
                    h3 { "A word to students" }
                    p.preserve-lines { (message) }
                }
            }
            @if let Some(degree) = &member.degree {
                div.detail-panel {
                    h3 { "Degree" }
                    p { (degree) }
                }
            }
            @if let Some(office_hours) = &member.office_hours {
                div.detail-panel.theme-blue-tint {
                    h3 { "Office hours" }
                    p { (office_hours) }
                }
            }
            @if let Some(office_number) = &member.office_number {
                div.detail-panel {
                    h3 { "Office" }
                    p { (office_number) }
                }
            }
            @if !member.research.is_empty() {
                div.detail-panel.theme-amber-tint {
                    h3 { "Research areas" }
                    ul { @for field in &member.research { li { (field) } } }
                }
            }
            @if !member.publications.is_empty() {
                div.detail-panel {
                    h3 { "Publications" }
                    ul { @for publication in &member.publications { li { (publication) } } }
                }
            }
            @if !member.awards.is_empty() {
                div.detail-panel.theme-amber-tint {
                    h3 { "Awards" }
                    ul { @for award in &member.awards { li { (award) } } }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SiteData;

    fn fixture() -> SiteData {
        SiteData::from_json(
            r#"{
                "siteInfo": { "title": "Engineering Faculty", "clubName": "Eng Club", "clubTagline": "Build", "logo": "img/logo.png" },
                "specialties": {
                    "ai": {
                        "name": "Artificial Intelligence",
                        "subtitle": "Machines that learn",
                        "overview": "Learning systems.",
                        "color": "blue",
                        "degree": "BSc",
                        "duration": "4 years",
                        "learningPoints": ["ML"],
                        "careers": ["A", "B", "C", "D"],
                        "skills": ["Python"],
                        "courses": ["cs101", "cs999"],
                        "coordinator": { "name": "Dr. Coord", "title": "Coordinator", "email": "coord@example.edu" }
                    }
                },
                "courses": {
                    "cs101": { "code": "CS101", "name": "Intro", "hours": "3h", "description": "Basics.",
                               "objectives": ["Understand variables"], "topics": ["Loops"] }
                },
                "faculty": {
                    "head": { "name": "Dr. Head", "position": "Department Head", "specialization": "Systems",
                              "email": "head@example.edu", "gradient": "blue" },
                    "hidden": { "name": "Dr. Hidden", "position": "Lecturer", "disabled": true },
                    "omar": { "name": "Dr. Omar", "position": "Lecturer", "bio": "Line one\nLine two",
                              "research": ["Security"], "officeHours": "Sun 10-12" }
                },
                "statistics": [
                    { "title": "students", "description": "500+", "icon": "fa-users" },
                    { "title": "courses", "description": "40", "icon": "fa-book" }
                ],
                "links": { "apply": "https://example.edu/apply" }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn header_renders_identity() {
        let data = fixture();
        let html = site_header(data.site_info.as_ref()).into_string();
        assert!(html.contains("Engineering Faculty"));
        assert!(html.contains("Eng Club"));
        assert!(html.contains("img/logo.png"));
    }

    #[test]
    fn header_without_info_renders_empty_shell() {
        let html = site_header(None).into_string();
        assert!(html.contains("site-header"));
        assert!(!html.contains("site-title"));
    }

    #[test]
    fn statistics_cards_carry_data_stat_markers() {
        let data = fixture();
        let html = statistics_strip(&data.statistics).into_string();
        assert!(html.contains(r#"data-stat="students""#));
        assert!(html.contains("500+"));
        assert!(html.contains(r#"data-stat="courses""#));
    }

    #[test]
    fn empty_statistics_render_zero_cards() {
        let html = statistics_strip(&[]).into_string();
        assert!(html.contains("stats-strip"));
        assert!(!html.contains("stat-card"));
    }

    #[test]
    fn specialty_card_uses_theme_table_and_previews_three_careers() {
        let data = fixture();
        let html = specialties_grid(&data).into_string();
        assert!(html.contains("theme-blue-text"));
        assert!(html.contains(r#"data-entity-id="ai""#));
        // Careers preview caps at three entries
        assert!(html.contains(">C<"));
        assert!(!html.contains(">D<"));
    }

    #[test]
    fn head_renders_in_separate_slot() {
        let data = fixture();
        let html = faculty_section(&data).into_string();
        let head_slot = html.find("faculty-head-slot").unwrap();
        let grid = html.find("faculty-grid").unwrap();
        assert!(head_slot < grid);
        assert!(html.contains("Dr. Head"));
    }

    #[test]
    fn disabled_member_card_is_inert() {
        let data = fixture();
        let html = faculty_section(&data).into_string();
        // Dr. Hidden renders, but without an open-modal marker
        assert!(html.contains("Dr. Hidden"));
        let hidden_card = html
            .split("faculty-card")
            .find(|chunk| chunk.contains("Dr. Hidden"))
            .unwrap();
        assert!(!hidden_card.contains("data-open-modal"));
    }

    #[test]
    fn external_links_render_only_present_targets() {
        let data = fixture();
        let html = external_links(data.links.as_ref()).into_string();
        assert!(html.contains("https://example.edu/apply"));
        assert!(html.contains("apply-btn"));
        assert!(!html.contains("learn-more-btn"));
    }

    #[test]
    fn specialty_detail_skips_dangling_course_ids() {
        let data = fixture();
        let specialty = &data.specialties["ai"];
        let html = specialty_detail(&data, specialty).into_string();
        assert!(html.contains("CS101"));
        assert!(!html.contains("cs999"));
        assert!(html.contains("Dr. Coord"));
    }

    #[test]
    fn faculty_detail_omits_absent_sections() {
        let data = fixture();
        let html = faculty_detail(&data.faculty["omar"]).into_string();
        assert!(html.contains("Line one"));
        assert!(html.contains("Sun 10-12"));
        assert!(html.contains("Research areas"));
        assert!(!html.contains("Publications"));
        assert!(!html.contains("Awards"));
    }

    #[test]
    fn detail_view_on_absent_model_is_not_found() {
        let html = detail_view(None, &DetailView::Course("cs101".into())).into_string();
        assert!(html.contains("not-found"));
        assert!(html.contains("course"));
    }

    #[test]
    fn detail_view_resolves_faculty_by_embedded_id() {
        let mut data = fixture();
        data.faculty.get_mut("omar").unwrap().id = Some("omar-khalil".into());
        let html = detail_view(Some(&data), &DetailView::Faculty("omar-khalil".into())).into_string();
        assert!(html.contains("Dr. Omar"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let data = fixture();
        let first = specialties_grid(&data).into_string();
        let second = specialties_grid(&data).into_string();
        assert_eq!(first, second);
    }

    #[test]
    fn content_is_escaped() {
        let mut data = fixture();
        data.specialties.get_mut("ai").unwrap().name = "<script>alert('x')</script>".into();
        let html = specialties_grid(&data).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
