mod config;
mod jocument;

pub use config::StyleConfig;
pub use self::jocument::JocumentStyle;

use std::fmt::{self, Write};

use crate::data::{Entry, Footnote, Label, Notation, Number};

/// Markup used by a [`Registry`](crate::Registry) of notation `N`.
///
/// Registry only decides *which* number a name gets; everything visible goes through here,
/// so presentation may be swapped without touching numbering.
pub trait Style<N: Notation> {
    /// Written once, before all entries of the final listing.
    fn write_start<W: Write + ?Sized>(&self, output: &mut W, notation: &N) -> fmt::Result;

    /// A single entry of the final listing.
    fn write_entry<W: Write + ?Sized>(
        &self,
        output: &mut W,
        notation: &N,
        entry: Entry<'_, N::Payload>,
    ) -> fmt::Result;

    /// Written once, after all entries of the final listing.
    fn write_end<W: Write + ?Sized>(&self, output: &mut W, notation: &N) -> fmt::Result;

    /// Reference in the running text.
    fn write_reference<W: Write + ?Sized>(
        &self,
        output: &mut W,
        notation: &N,
        entry: Entry<'_, N::Payload>,
    ) -> fmt::Result;

    /// Written in place of a reference, if name has nothing defined for it.
    ///
    /// This must be easy to spot in the rendered document.
    fn write_missing<W: Write + ?Sized>(
        &self,
        output: &mut W,
        notation: &N,
        name: &str,
    ) -> fmt::Result;
}

pub trait FootnoteStyle: Style<Footnote> {
    /// Footnote number only, to be used in sentences like "see note 3".
    fn write_number<W: Write + ?Sized>(&self, output: &mut W, number: Number) -> fmt::Result;

    fn write_missing_number<W: Write + ?Sized>(&self, output: &mut W, name: &str) -> fmt::Result;
}

pub trait LabelStyle: Style<Label> {
    /// Caption placed right by the figure/table itself.
    fn write_caption<W: Write + ?Sized>(
        &self,
        output: &mut W,
        notation: &Label,
        entry: Entry<'_, Option<String>>,
    ) -> fmt::Result;
}
