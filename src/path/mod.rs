mod error;
mod parser;

use std::{fmt, str::FromStr};

pub use error::PathError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Represents a field in the object.
    Field(String),

    /// Represents an index in an array.
    Index(usize),
}

impl Segment {
    /// Returns the index if the segment addresses an array element.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Segment::Index(index) => Some(*index),
            Segment::Field(_) => None,
        }
    }

    /// Renders the segment as an unescaped reference token.
    pub fn token(&self) -> String {
        match self {
            Segment::Field(field) => field.clone(),
            Segment::Index(index) => index.to_string(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Field(field) => {
                for c in field.chars() {
                    match c {
                        '~' => f.write_str("~0")?,
                        '/' => f.write_str("~1")?,
                        c => write!(f, "{c}")?,
                    }
                }
                Ok(())
            }
            Segment::Index(index) => write!(f, "{index}"),
        }
    }
}

/// A JSON Pointer (RFC 6901) kept as decoded segments.
///
/// Segments produced by the diff engine carry `Segment::Index` for array
/// elements so that positions can be shifted arithmetically. Pointers parsed
/// from text only contain `Segment::Field`; whether a token is an index is
/// decided when it is resolved against a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pointer {
    segments: Vec<Segment>,
}

impl Pointer {
    pub fn root() -> Self {
        Pointer::default()
    }

    pub fn new(segments: Vec<Segment>) -> Self {
        Pointer { segments }
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn push_field(&mut self, field: impl Into<String>) {
        self.segments.push(Segment::Field(field.into()));
    }

    pub fn push_index(&mut self, index: usize) {
        self.segments.push(Segment::Index(index));
    }

    pub fn pop(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    /// Returns a copy of this pointer extended by `segment`.
    pub fn child(&self, segment: Segment) -> Pointer {
        let mut child = self.clone();
        child.push(segment);
        child
    }

    pub fn parent(&self) -> Option<Pointer> {
        let (_, init) = self.segments.split_last()?;
        Some(Pointer {
            segments: init.to_vec(),
        })
    }

    pub fn last_segment(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// The last reference token, unescaped.
    pub fn field(&self) -> Option<String> {
        self.segments.last().map(Segment::token)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub(crate) fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True if `prefix` addresses this location or one of its ancestors.
    pub fn starts_with(&self, prefix: &Pointer) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    /// True if `other` lies strictly inside the value addressed by `self`.
    pub fn is_parent_of(&self, other: &Pointer) -> bool {
        other.len() > self.len() && other.starts_with(self)
    }
}

impl<'a> IntoIterator for &'a Pointer {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl TryFrom<&str> for Pointer {
    type Error = PathError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match parser::parse_pointer(value) {
            Ok(("", pointer)) => Ok(pointer),
            Ok((rest, _)) => Err(error::trailing_input_error(value, rest)),
            Err(nom::Err::Error(e) | nom::Err::Failure(e)) => {
                Err(error::convert_verbose_error(value, e))
            }
            Err(nom::Err::Incomplete(_)) => {
                Err(PathError::invalid_syntax(value.len(), "incomplete input"))
            }
        }
    }
}

impl FromStr for Pointer {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pointer::try_from(s)
    }
}

impl Serialize for Pointer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pointer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Pointer::try_from(raw.as_str()).map_err(serde::de::Error::custom)
    }
}
