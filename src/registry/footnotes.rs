use std::fmt::{self, Write};

use crate::{
    data::Footnote,
    style::{FootnoteStyle, JocumentStyle},
};

use super::{finish, Registry};

impl Registry<Footnote, JocumentStyle> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: FootnoteStyle> Registry<Footnote, S> {
    /// Defines a footnote. Line breaks are replaced with spaces, so that the text fits into a list item.
    pub fn add(&mut self, name: impl Into<String>, text: &str) {
        self.define(name, text.replace('\n', " "));
    }

    /// Writes just the number of the footnote, numbering it on first use.
    ///
    /// Useful for sentences like "this is explained in footnote 3".
    pub fn write_num<W: Write + ?Sized>(&mut self, output: &mut W, name: &str) -> fmt::Result {
        let number = self.numbering.assign(name);
        if self.payloads.contains_key(name) {
            self.style.write_number(output, number)
        } else {
            tracing::warn!(name, %number, "number of undefined footnote");
            self.style.write_missing_number(output, name)
        }
    }

    pub fn num(&mut self, name: &str) -> String {
        let mut buf = String::new();
        let res = self.write_num(&mut buf, name);
        finish(buf, res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Footnotes;

    #[test]
    fn add_flattens_lines() {
        let mut notes = Footnotes::new();
        notes.add("multi", "first line\nsecond line");
        assert_eq!(
            notes.payload("multi").map(String::as_str),
            Some("first line second line")
        );
    }

    #[test]
    fn add_overwrites() {
        let mut notes = Footnotes::new();
        notes.add("n", "old");
        notes.reference("n");
        notes.add("n", "new");
        assert_eq!(
            notes.render_all(),
            "<ol><li id=fn_1>new<a href=#fnret_1>&#8629;</a></li></ol>"
        );
    }

    #[test]
    fn num_shares_numbering_with_reference() {
        // arrange
        let mut notes = Footnotes::new();
        notes.add("a", "A");
        notes.add("b", "B");

        // act
        let b = notes.num("b");
        let a = notes.reference("a");
        let b_ref = notes.reference("b");

        // assert
        assert_eq!(b, "<a id=fnret_1 href=#fn_1>1</a>");
        assert_eq!(a, "<sup><a id=fnret_2 href=#fn_2>2</a></sup>");
        assert_eq!(b_ref, "<sup><a id=fnret_1 href=#fn_1>1</a></sup>");
    }

    #[test]
    fn num_of_missing() {
        let mut notes = Footnotes::new();
        assert_eq!(notes.num("nope"), "** Footnote \"nope\" not found**");
        assert_eq!(notes.len(), 1);
    }
}
