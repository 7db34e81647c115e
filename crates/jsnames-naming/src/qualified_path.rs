//! Canonical text of the place an anonymous function is bound.

use std::borrow::Borrow;
use std::fmt;

use jsnames_emitter::quote_string;
use jsnames_scanner::is_identifier_text;

/// How a computed segment is joined to the segments before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComputedForm {
    /// `a[x()]`
    Bracketed,
    /// `A.prototype.'foo'+bar()`, used for computed object literal keys.
    Dotted,
}

/// One step of a qualified path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    Identifier(String),
    /// Cooked value of a string key.
    StringKey(String),
    /// Compact source text of a computed key or a non-name chain base.
    ComputedExpr { text: String, form: ComputedForm },
}

impl PathSegment {
    pub fn identifier(name: impl Into<String>) -> Self {
        PathSegment::Identifier(name.into())
    }

    pub fn string_key(key: impl Into<String>) -> Self {
        PathSegment::StringKey(key.into())
    }

    pub fn bracketed(text: impl Into<String>) -> Self {
        PathSegment::ComputedExpr {
            text: text.into(),
            form: ComputedForm::Bracketed,
        }
    }

    pub fn dotted(text: impl Into<String>) -> Self {
        PathSegment::ComputedExpr {
            text: text.into(),
            form: ComputedForm::Dotted,
        }
    }

    fn write_first(&self, out: &mut String) {
        match self {
            PathSegment::Identifier(name) => out.push_str(name),
            PathSegment::StringKey(key) if is_identifier_text(key) => out.push_str(key),
            PathSegment::StringKey(key) => out.push_str(&quote_string(key, '\'')),
            PathSegment::ComputedExpr { text, .. } => out.push_str(text),
        }
    }

    fn write_continuation(&self, out: &mut String) {
        match self {
            PathSegment::Identifier(name) => {
                out.push('.');
                out.push_str(name);
            }
            PathSegment::StringKey(key) if is_identifier_text(key) => {
                out.push('.');
                out.push_str(key);
            }
            PathSegment::StringKey(key) => {
                out.push('[');
                out.push_str(&quote_string(key, '\''));
                out.push(']');
            }
            PathSegment::ComputedExpr {
                text,
                form: ComputedForm::Bracketed,
            } => {
                out.push('[');
                out.push_str(text);
                out.push(']');
            }
            PathSegment::ComputedExpr {
                text,
                form: ComputedForm::Dotted,
            } => {
                out.push('.');
                out.push_str(text);
            }
        }
    }
}

/// A qualified path in canonical form. Two paths are equal when their
/// canonical texts are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedPath(String);

impl QualifiedPath {
    /// Render `segments`; `None` when there are none.
    pub fn from_segments(segments: &[PathSegment]) -> Option<Self> {
        let (first, rest) = segments.split_first()?;
        let mut text = String::new();
        first.write_first(&mut text);
        for segment in rest {
            segment.write_continuation(&mut text);
        }
        Some(QualifiedPath(text))
    }

    /// Wrap text that is already canonical, e.g. read back from a map.
    pub fn from_canonical(text: impl Into<String>) -> Self {
        QualifiedPath(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for QualifiedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for QualifiedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for QualifiedPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<QualifiedPath> for String {
    fn from(path: QualifiedPath) -> String {
        path.0
    }
}
