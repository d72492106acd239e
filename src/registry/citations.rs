use std::fmt::{self, Write};

use crate::{
    data::{Citation, CitedWork},
    style::{JocumentStyle, Style},
};

use super::Registry;

impl Registry<Citation, JocumentStyle> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Style<Citation>> Registry<Citation, S> {
    pub fn add(&mut self, name: impl Into<String>, work: CitedWork) {
        self.define(name, work);
    }

    pub fn write_cite<W: Write + ?Sized>(&mut self, output: &mut W, name: &str) -> fmt::Result {
        self.write_reference(output, name)
    }

    /// Cites `name` in the text; same as [`Registry::reference`].
    pub fn cite(&mut self, name: &str) -> String {
        self.reference(name)
    }
}

#[cfg(test)]
mod tests {
    use crate::registry::Citations;

    use super::*;

    #[test]
    fn bibliography() {
        // arrange
        let mut cites = Citations::new();
        cites.add("bs", CitedWork::new("Black, Scholes", "The Pricing of Options", "JPE 1973"));
        cites.add(
            "merton",
            CitedWork::new("Merton", "Theory of Rational Option Pricing", "BJEMS 1973"),
        );

        // act
        let merton = cites.cite("merton");
        let bs = cites.cite("bs");
        let merton_again = cites.cite("merton");
        let listing = cites.output();

        // assert
        assert_eq!(merton, "<a id=citeret_1 href=#cite_1>[1]</a>");
        assert_eq!(bs, "<a id=citeret_2 href=#cite_2>[2]</a>");
        assert_eq!(merton_again, merton);
        assert_eq!(
            listing,
            concat!(
                "<ol>",
                "<li id=cite_1><strong>Merton</strong>, <em>Theory of Rational Option Pricing</em>, BJEMS 1973<a href=#citeret_1>&#8629;</a></li>",
                "<li id=cite_2><strong>Black, Scholes</strong>, <em>The Pricing of Options</em>, JPE 1973<a href=#citeret_2>&#8629;</a></li>",
                "</ol>"
            )
        );
    }

    #[test]
    fn unused_citations_are_not_listed() {
        let mut cites = Citations::new();
        cites.add("unused", CitedWork::default());
        assert_eq!(cites.output(), "<ol></ol>");
    }

    #[test]
    fn write_cite_appends() {
        let mut cites = Citations::new();
        cites.add("a", CitedWork::default());
        let mut text = String::from("As shown in ");
        cites.write_cite(&mut text, "a").expect("Should be able to write");
        assert_eq!(text, "As shown in <a id=citeret_1 href=#cite_1>[1]</a>");
    }
}
