//! Enumerated color themes for specialty and faculty cards.
//!
//! Source documents carry free-form theme tokens (`"purple"`,
//! `"cyber-purple"`, legacy gradient strings). Instead of interpolating those
//! tokens into class names, every token resolves through a fixed lookup table
//! to a [`Theme`], and the theme yields the class names the embedded
//! stylesheet actually defines. Unknown tokens fall back to the default theme
//! rather than producing classes no stylesheet rule matches.

/// A color theme applied to cards, chips, and detail panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Purple,
    Blue,
    Green,
    Teal,
    Amber,
    Rose,
}

/// Token aliases accepted in documents, including the legacy gradient forms.
const TOKENS: &[(&str, Theme)] = &[
    ("purple", Theme::Purple),
    ("cyber-purple", Theme::Purple),
    ("from-purple-500 to-purple-700", Theme::Purple),
    ("blue", Theme::Blue),
    ("from-blue-500 to-blue-700", Theme::Blue),
    ("green", Theme::Green),
    ("from-green-500 to-green-700", Theme::Green),
    ("teal", Theme::Teal),
    ("from-teal-500 to-teal-700", Theme::Teal),
    ("amber", Theme::Amber),
    ("gold", Theme::Amber),
    ("rose", Theme::Rose),
    ("red", Theme::Rose),
];

impl Theme {
    /// Resolve a document token to a theme. Unknown or empty tokens resolve
    /// to [`Theme::Purple`], the site's primary.
    pub fn from_token(token: &str) -> Theme {
        TOKENS
            .iter()
            .find(|(alias, _)| *alias == token)
            .map(|(_, theme)| *theme)
            .unwrap_or_default()
    }

    fn name(self) -> &'static str {
        match self {
            Theme::Purple => "purple",
            Theme::Blue => "blue",
            Theme::Green => "green",
            Theme::Teal => "teal",
            Theme::Amber => "amber",
            Theme::Rose => "rose",
        }
    }

    /// Class for themed text (headings, icons).
    pub fn text_class(self) -> String {
        format!("theme-{}-text", self.name())
    }

    /// Class for solid themed backgrounds (buttons, chips).
    pub fn bg_class(self) -> String {
        format!("theme-{}-bg", self.name())
    }

    /// Class for light themed panel backgrounds.
    pub fn tint_class(self) -> String {
        format!("theme-{}-tint", self.name())
    }

    /// Class for themed gradient surfaces (avatars, career tiles).
    pub fn gradient_class(self) -> String {
        format!("theme-{}-gradient", self.name())
    }
}
