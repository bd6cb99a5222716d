//! Field tag parsing.
//!
//! A tag is `name[,option...]`. The name binds the field to a column; the
//! options are opaque tokens a caller can test for. A tag of exactly `-`
//! excludes the field.

/// Tag value that removes a field from resolution.
pub const EXCLUDE: &str = "-";

/// The comma-separated options following a tag's name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagOptions<'a>(&'a str);

impl<'a> TagOptions<'a> {
    /// Whether `option` appears as one of the comma-separated tokens.
    /// Tokens are compared verbatim.
    #[must_use]
    pub fn contains(&self, option: &str) -> bool {
        !self.0.is_empty() && self.0.split(',').any(|token| token == option)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

/// Splits a tag into its name and options.
#[must_use]
pub fn parse_tag(tag: &str) -> (&str, TagOptions<'_>) {
    match tag.split_once(',') {
        Some((name, options)) => (name, TagOptions(options)),
        None => (tag, TagOptions::default()),
    }
}
