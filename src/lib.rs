//! # dept-site
//!
//! A minimal static site generator for a university department's
//! informational page. One JSON document is the data source: it describes
//! the department's identity, specialties, courses, faculty, headline
//! statistics, and external links, and the generator turns it into a
//! self-contained single-page site.
//!
//! # Architecture: Load → Validate → Generate
//!
//! ```text
//! 1. Load      data.json (disk or HTTP)  →  SiteData       (one immutable model)
//! 2. Validate  SiteData                  →  ValidationReport (advisory only)
//! 3. Generate  SiteData                  →  dist/index.html
//! ```
//!
//! The model is constructed once per run and never mutated afterwards; every
//! downstream component borrows the same immutable [`model::SiteData`]. Load
//! failure is a value, not an exception: the model stays absent, population
//! is skipped, and the failure is reported on the console. Validation is
//! deliberately advisory — partial data still renders whatever sections have
//! data, with missing optional fields omitted rather than erroring.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`load`] | Stage 1 — reads or fetches the JSON document, parses it into the model |
//! | [`validate`] | Stage 2 — structural completeness and course-reference integrity checks |
//! | [`generate`] | Stage 3 — writes the final HTML site, overlays resolved via the modal controller |
//! | [`model`] | The immutable document model shared by every stage |
//! | [`theme`] | Enumerated color-theme table replacing free-form token interpolation |
//! | [`render`] | Maud components for every region and detail view |
//! | [`modal`] | Per-category detail lookup and open/closed modal state |
//! | [`search`] | Case-sensitive substring search over courses and faculty |
//! | [`output`] | CLI output formatting — pure `format_*` functions plus print wrappers |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed HTML is a build error, template variables
//! are typed Rust expressions, interpolation is auto-escaped, and there is
//! no template directory to ship.
//!
//! ## Fail-Silent Population, Fail-Visible Lookup
//!
//! Bulk population omits what's missing: a dangling course reference simply
//! produces no course card. An explicit detail request is different — the
//! user acted, so an unknown id opens the modal on an explicit not-found
//! view instead of doing nothing. A faculty profile flagged `disabled` is
//! the one deliberate no-op: the open transition is refused outright.
//!
//! ## Pre-Rendered Overlays
//!
//! Detail views are rendered at build time into hidden overlays, one per
//! resolvable entity. The embedded script (~100 lines of vanilla JS) only
//! toggles visibility, so every content decision — lookup, theming,
//! disabled suppression — is made in Rust where it's tested.

pub mod generate;
pub mod load;
pub mod modal;
pub mod model;
pub mod output;
pub mod render;
pub mod search;
pub mod theme;
pub mod validate;
