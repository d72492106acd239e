mod citations;
mod footnotes;
mod labels;

use std::{
    collections::HashMap,
    fmt::{self, Write},
};

use itertools::Itertools;
use tracing::{debug, warn};

use crate::{
    data::{Citation, Entry, Footnote, Label, Notation, Number},
    style::{JocumentStyle, Style},
};

pub type Footnotes<S = JocumentStyle> = Registry<Footnote, S>;
pub type Citations<S = JocumentStyle> = Registry<Citation, S>;
pub type Labels<S = JocumentStyle> = Registry<Label, S>;

/// Two-way mapping between names and their numbers.
///
/// Numbers are dense and never change once assigned.
#[derive(Debug, Default, Clone)]
pub struct Numbering {
    names: Vec<String>,
    numbers: HashMap<String, Number>,
}

impl Numbering {
    pub fn get(&self, name: &str) -> Option<Number> {
        self.numbers.get(name).copied()
    }

    /// Returns name's number, giving it the next one if name is seen for the first time.
    pub fn assign(&mut self, name: &str) -> Number {
        if let Some(number) = self.get(name) {
            return number;
        }
        let number = Number::from_index(self.names.len());
        self.names.push(name.to_owned());
        self.numbers.insert(name.to_owned(), number);
        debug!(name, %number, "assigned reference number");
        number
    }

    pub fn name(&self, number: Number) -> Option<&str> {
        self.names.get(number.get() - 1).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in ascending number order
    pub fn iter(&self) -> impl Iterator<Item = (Number, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (Number::from_index(i), name.as_str()))
    }
}

/// Numbers references of a single [`Notation`] in order of their first use,
/// and renders them with style `S`.
///
/// ```
/// use jocument::Footnotes;
///
/// let mut notes = Footnotes::new();
/// notes.add("why", "Because.");
/// assert_eq!(notes.reference("why"), "<sup><a id=fnret_1 href=#fn_1>1</a></sup>");
/// ```
#[derive(Debug, Clone)]
pub struct Registry<N: Notation, S = JocumentStyle> {
    notation: N,
    style: S,
    numbering: Numbering,
    payloads: HashMap<String, N::Payload>,
}

impl<N> Default for Registry<N, JocumentStyle>
where
    N: Notation + Default,
    JocumentStyle: Style<N>,
{
    fn default() -> Self {
        Self::with_style(N::default(), JocumentStyle::default())
    }
}

impl<N: Notation, S: Style<N>> Registry<N, S> {
    pub fn with_style(notation: N, style: S) -> Self {
        Self {
            notation,
            style,
            numbering: Numbering::default(),
            payloads: HashMap::new(),
        }
    }

    pub fn notation(&self) -> &N {
        &self.notation
    }

    pub fn style(&self) -> &S {
        &self.style
    }

    /// Stores (or replaces) name's payload. Does not number the name.
    pub fn define(&mut self, name: impl Into<String>, payload: N::Payload) {
        self.payloads.insert(name.into(), payload);
    }

    /// Name's number, if it was already used. Does not number the name.
    pub fn number(&self, name: &str) -> Option<Number> {
        self.numbering.get(name)
    }

    pub fn payload(&self, name: &str) -> Option<&N::Payload> {
        self.payloads.get(name)
    }

    /// Count of numbered names
    pub fn len(&self) -> usize {
        self.numbering.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbering.is_empty()
    }

    /// Numbered names with their payloads, in number order.
    pub fn entries(&self) -> impl Iterator<Item = (Number, &str, Option<&N::Payload>)> + '_ {
        self.numbering
            .iter()
            .map(|(number, name)| (number, name, self.payloads.get(name)))
    }

    /// Writes in-text reference to `name`, numbering it on first use.
    ///
    /// Names with no payload are still numbered, but get style's "missing" markup instead.
    pub fn write_reference<W: Write + ?Sized>(&mut self, output: &mut W, name: &str) -> fmt::Result {
        let number = self.numbering.assign(name);
        match self.payloads.get(name) {
            Some(payload) => self.style.write_reference(
                output,
                &self.notation,
                Entry {
                    number,
                    name,
                    payload,
                },
            ),
            None => {
                warn!(name, %number, "reference to undefined name");
                self.style.write_missing(output, &self.notation, name)
            }
        }
    }

    pub fn reference(&mut self, name: &str) -> String {
        let mut buf = String::new();
        let res = self.write_reference(&mut buf, name);
        finish(buf, res)
    }

    /// Writes the listing of all numbered names.
    pub fn write_all<W: Write + ?Sized>(&self, output: &mut W) -> fmt::Result {
        let fallback = N::Payload::default();
        self.style.write_start(output, &self.notation)?;
        self.numbering
            .iter()
            .map(|(number, name)| {
                let payload = self.payloads.get(name).unwrap_or(&fallback);
                self.style.write_entry(
                    output,
                    &self.notation,
                    Entry {
                        number,
                        name,
                        payload,
                    },
                )
            })
            .try_collect::<_, (), _>()?;
        self.style.write_end(output, &self.notation)
    }

    pub fn render_all(&self) -> String {
        let mut buf = String::new();
        let res = self.write_all(&mut buf);
        finish(buf, res)
    }

    /// Same as [`Registry::render_all`]
    pub fn output(&self) -> String {
        self.render_all()
    }
}

/// String-producing methods never fail: whatever style managed to write is returned.
fn finish(buf: String, res: fmt::Result) -> String {
    if let Err(err) = res {
        warn!(%err, written = buf.len(), "style failed to write markup");
    }
    buf
}
