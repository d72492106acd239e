//! HTML snippets for documents rendered from notebooks: footnotes, citations, figure/table labels and title pages.
//!
//! # Numbering
//! Footnotes, citations and labels all share one idea: a name gets its number the first time it's *used*,
//! not when it's defined. That way, definitions may be dumped into a single cell at the top of the notebook
//! (or at the bottom, or anywhere), and numbers still go in the reading order.
//!
//! A use is a reference in the text (or placing a label under its figure). Once assigned, number never changes.
//!
//! Referencing something that was never defined is not an error - document generation goes on,
//! and a loud "not found" marker is put in the reference's place instead.
//!
//! # Output
//! Any markup is produced by a [`Style`]. [`JocumentStyle`] is the default one, but registry can be constructed
//! with any other via [`Registry::with_style`]. Styles write into anything implementing [`std::fmt::Write`],
//! though there are `String`-returning shortcuts for everything.
//!
//! ```
//! use jocument::{Citations, Footnotes, Labels};
//!
//! let mut notes = Footnotes::new();
//! notes.add("caveat", "Past performance is not indicative of future results.");
//!
//! let mut figures = Labels::new("Figure");
//! let caption = figures.add("returns", Some("Monthly returns"), false);
//! assert!(caption.contains("Figure 1"));
//!
//! let text = format!("As {} shows{}", figures.reference("returns"), notes.reference("caveat"));
//! assert_eq!(
//!     text,
//!     "As <a href=#ref_Figure1>Figure 1</a> shows<sup><a id=fnret_1 href=#fn_1>1</a></sup>"
//! );
//!
//! let mut cites = Citations::new();
//! assert_eq!(cites.cite("unknown"), "**Citation \"unknown\" not found**");
//! ```

/// This module defines notations and the data stored for them
mod data;
pub mod magics;
mod registry;
mod style;

pub use data::{Citation, CitedWork, Entry, Footnote, Label, Notation, Number};
pub use magics::MagicError;
pub use registry::{Citations, Footnotes, Labels, Numbering, Registry};
pub use style::{FootnoteStyle, JocumentStyle, LabelStyle, Style, StyleConfig};
