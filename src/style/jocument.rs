use std::fmt::{self, Write};

use crate::data::{Citation, CitedWork, Entry, Footnote, Label, Number};

use super::{FootnoteStyle, LabelStyle, Style, StyleConfig};

/// Default markup: ordered lists for listings, superscript hyperlinked numbers in the text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JocumentStyle {
    config: StyleConfig,
}

impl JocumentStyle {
    pub fn with_config(config: StyleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StyleConfig {
        &self.config
    }
}

impl Style<Footnote> for JocumentStyle {
    fn write_start<W: Write + ?Sized>(&self, output: &mut W, _: &Footnote) -> fmt::Result {
        output.write_str(&self.config.list_start)
    }

    fn write_entry<W: Write + ?Sized>(
        &self,
        output: &mut W,
        _: &Footnote,
        Entry {
            number, payload, ..
        }: Entry<'_, String>,
    ) -> fmt::Result {
        write!(
            output,
            "<li id=fn_{number}>{payload}<a href=#fnret_{number}>{}</a></li>",
            self.config.return_glyph
        )
    }

    fn write_end<W: Write + ?Sized>(&self, output: &mut W, _: &Footnote) -> fmt::Result {
        output.write_str(&self.config.list_end)
    }

    fn write_reference<W: Write + ?Sized>(
        &self,
        output: &mut W,
        _: &Footnote,
        entry: Entry<'_, String>,
    ) -> fmt::Result {
        output.write_str("<sup>")?;
        self.write_number(output, entry.number)?;
        output.write_str("</sup>")
    }

    fn write_missing<W: Write + ?Sized>(
        &self,
        output: &mut W,
        _: &Footnote,
        name: &str,
    ) -> fmt::Result {
        write!(output, "<sup>**\"{name}\" not found**</sup>")
    }
}

impl FootnoteStyle for JocumentStyle {
    fn write_number<W: Write + ?Sized>(&self, output: &mut W, number: Number) -> fmt::Result {
        write!(output, "<a id=fnret_{number} href=#fn_{number}>{number}</a>")
    }

    fn write_missing_number<W: Write + ?Sized>(&self, output: &mut W, name: &str) -> fmt::Result {
        write!(output, "** Footnote \"{name}\" not found**")
    }
}

impl Style<Citation> for JocumentStyle {
    fn write_start<W: Write + ?Sized>(&self, output: &mut W, _: &Citation) -> fmt::Result {
        output.write_str(&self.config.list_start)
    }

    fn write_entry<W: Write + ?Sized>(
        &self,
        output: &mut W,
        _: &Citation,
        Entry {
            number,
            payload:
                CitedWork {
                    author,
                    title,
                    source,
                },
            ..
        }: Entry<'_, CitedWork>,
    ) -> fmt::Result {
        write!(
            output,
            "<li id=cite_{number}><strong>{author}</strong>, <em>{title}</em>, {source}<a href=#citeret_{number}>{}</a></li>",
            self.config.return_glyph
        )
    }

    fn write_end<W: Write + ?Sized>(&self, output: &mut W, _: &Citation) -> fmt::Result {
        output.write_str(&self.config.list_end)
    }

    fn write_reference<W: Write + ?Sized>(
        &self,
        output: &mut W,
        _: &Citation,
        Entry { number, .. }: Entry<'_, CitedWork>,
    ) -> fmt::Result {
        write!(output, "<a id=citeret_{number} href=#cite_{number}>[{number}]</a>")
    }

    fn write_missing<W: Write + ?Sized>(
        &self,
        output: &mut W,
        _: &Citation,
        name: &str,
    ) -> fmt::Result {
        write!(output, "**Citation \"{name}\" not found**")
    }
}

impl Style<Label> for JocumentStyle {
    fn write_start<W: Write + ?Sized>(&self, output: &mut W, _: &Label) -> fmt::Result {
        output.write_str(&self.config.list_start)
    }

    fn write_entry<W: Write + ?Sized>(
        &self,
        output: &mut W,
        notation: &Label,
        entry: Entry<'_, Option<String>>,
    ) -> fmt::Result {
        output.write_str("<li>")?;
        <Self as Style<Label>>::write_reference(self, output, notation, entry)?;
        if let Some(title) = entry.payload {
            write!(output, ": {title}")?;
        }
        output.write_str("</li>")
    }

    fn write_end<W: Write + ?Sized>(&self, output: &mut W, _: &Label) -> fmt::Result {
        output.write_str(&self.config.list_end)
    }

    fn write_reference<W: Write + ?Sized>(
        &self,
        output: &mut W,
        Label { ref_type }: &Label,
        Entry { number, .. }: Entry<'_, Option<String>>,
    ) -> fmt::Result {
        write!(
            output,
            "<a href=#ref_{ref_type}{number}>{ref_type} {number}</a>"
        )
    }

    fn write_missing<W: Write + ?Sized>(
        &self,
        output: &mut W,
        Label { ref_type }: &Label,
        name: &str,
    ) -> fmt::Result {
        write!(output, "**{ref_type} \"{name}\" not defined**")
    }
}

impl LabelStyle for JocumentStyle {
    fn write_caption<W: Write + ?Sized>(
        &self,
        output: &mut W,
        Label { ref_type }: &Label,
        Entry {
            number, payload, ..
        }: Entry<'_, Option<String>>,
    ) -> fmt::Result {
        write!(
            output,
            "<div style=\"{}\" id=ref_{ref_type}{number}>{ref_type} {number}",
            self.config.caption_css
        )?;
        if let Some(title) = payload {
            write!(output, "<br>{title}")?;
        }
        output.write_str("</div>")
    }
}
