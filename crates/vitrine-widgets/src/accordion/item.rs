#![forbid(unsafe_code)]

//! Passive data for one accordion entry.

/// One collapsible entry: a header label, body content, and optional
/// icon. Items carry no behavior; open/closed state lives in
/// [`AccordionState`](crate::accordion::AccordionState) and is keyed by
/// the item's position in the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionItem {
    title: String,
    body: String,
    icon_class: Option<String>,
    icon_glyph: Option<char>,
    expanded_by_default: bool,
}

impl AccordionItem {
    /// Create an item with a header title and body text.
    ///
    /// Body text may contain newlines; each line renders as one row.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            icon_class: None,
            icon_glyph: None,
            expanded_by_default: false,
        }
    }

    /// Set a named icon, resolved through [`glyph_for_class`].
    #[must_use]
    pub fn with_icon_class(mut self, class: impl Into<String>) -> Self {
        self.icon_class = Some(class.into());
        self
    }

    /// Set a literal icon glyph. Takes precedence over `icon_class`.
    #[must_use]
    pub fn with_icon_glyph(mut self, glyph: char) -> Self {
        self.icon_glyph = Some(glyph);
        self
    }

    /// Set whether the item starts open.
    #[must_use]
    pub fn expanded_by_default(mut self, expanded: bool) -> Self {
        self.expanded_by_default = expanded;
        self
    }

    /// Header label.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Body text split into display lines.
    pub fn body_lines(&self) -> impl Iterator<Item = &str> {
        self.body.lines()
    }

    /// Whether the item starts open.
    #[must_use]
    pub const fn is_expanded_by_default(&self) -> bool {
        self.expanded_by_default
    }

    /// The glyph to render before the title, if the item has an icon.
    ///
    /// A literal glyph wins over a named class.
    #[must_use]
    pub fn icon(&self) -> Option<char> {
        self.icon_glyph
            .or_else(|| self.icon_class.as_deref().map(glyph_for_class))
    }
}

/// Resolve a named icon class to a terminal glyph.
///
/// Unknown names get a generic bullet rather than disappearing, so a
/// typo in a class name is visible instead of silently iconless.
#[must_use]
pub fn glyph_for_class(class: &str) -> char {
    match class {
        "info" => '\u{24D8}',     // ⓘ
        "question" => '?',
        "warning" => '\u{26A0}',  // ⚠
        "star" => '\u{2605}',     // ★
        "gear" => '\u{2699}',     // ⚙
        "doc" => '\u{1F5CE}',     // 🗎
        _ => '\u{2022}',          // •
    }
}
