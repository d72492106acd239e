use std::borrow::Cow;

/// Visible, 1-based position of a reference name.
///
/// Numbers are handed out by [`Numbering`](crate::Numbering) in order of first use,
/// so the Nth distinct name always ends up as `Number(N)`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::Display,
    derive_more::Into,
)]
pub struct Number(usize);

impl Number {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

/// A kind of cross-reference a [`Registry`](crate::Registry) keeps numbers for.
///
/// Notation decides what is stored per name; the markup itself is up to the [`Style`](crate::Style).
pub trait Notation {
    /// Data associated with a name. Default value is used when a numbered name was never defined.
    type Payload: Default;
}

/// End notes, stored as plain text.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Footnote;

impl Notation for Footnote {
    type Payload = String;
}

/// Bibliography entries.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Citation;

impl Notation for Citation {
    type Payload = CitedWork;
}

/// Figure, table or equation captions.
///
/// `ref_type` is displayed as is, so `Label::new("Figure")` produces "Figure 1", "Figure 2" and so on.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub ref_type: Cow<'static, str>,
}

impl Label {
    pub fn new(ref_type: impl Into<Cow<'static, str>>) -> Self {
        Self {
            ref_type: ref_type.into(),
        }
    }
}

impl Notation for Label {
    /// Optional caption title
    type Payload = Option<String>;
}

#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CitedWork {
    pub author: String,
    pub title: String,
    pub source: String,
}

impl CitedWork {
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            source: source.into(),
        }
    }
}

/// Everything a style gets to know about a single numbered name.
#[derive(Debug, PartialEq)]
pub struct Entry<'r, P> {
    pub number: Number,
    pub name: &'r str,
    pub payload: &'r P,
}

// derive would require `P: Clone`
impl<P> Clone for Entry<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Entry<'_, P> {}
