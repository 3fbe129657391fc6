use super::Serializer;

/// How quoted string literals are written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Values are wrapped in single quotes without escaping, so a value
    /// containing `'` produces a malformed (or injectable) clause. This is the
    /// historic format and the default.
    #[default]
    Verbatim,

    /// Backslash-escapes `\` and `'` inside quoted literals, as SOQL expects.
    /// Changes the generated strings for values containing either character.
    Escaped,
}

impl Serializer {
    pub fn verbatim() -> Serializer {
        Serializer::new(Flavor::Verbatim)
    }

    pub fn escaped() -> Serializer {
        Serializer::new(Flavor::Escaped)
    }

    pub(super) fn is_escaped(&self) -> bool {
        matches!(self.flavor, Flavor::Escaped)
    }
}
