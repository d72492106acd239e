use std::{
    borrow::Cow,
    fmt::{self, Write},
};

use crate::{
    data::{Entry, Label},
    style::{JocumentStyle, LabelStyle},
};

use super::{finish, Registry};

impl Registry<Label, JocumentStyle> {
    /// `ref_type` is what the labels are called in the text, like "Figure" or "Table".
    pub fn new(ref_type: impl Into<Cow<'static, str>>) -> Self {
        Self::with_style(Label::new(ref_type), JocumentStyle::default())
    }
}

impl<S: LabelStyle> Registry<Label, S> {
    /// Places a label, optionally titled.
    ///
    /// Unless `forward` is set, this is where the figure/table is, so the name is numbered
    /// and its caption is written. With `forward`, only a reference is written,
    /// for captions that need to mention the label before it's placed.
    pub fn write_add<W: Write + ?Sized>(
        &mut self,
        output: &mut W,
        name: &str,
        title: Option<&str>,
        forward: bool,
    ) -> fmt::Result {
        self.define(name, title.map(str::to_owned));
        if forward {
            return self.write_reference(output, name);
        }
        let number = self.numbering.assign(name);
        let payload = self.payloads.get(name).unwrap_or(&None);
        self.style.write_caption(
            output,
            &self.notation,
            Entry {
                number,
                name,
                payload,
            },
        )
    }

    pub fn add(&mut self, name: &str, title: Option<&str>, forward: bool) -> String {
        let mut buf = String::new();
        let res = self.write_add(&mut buf, name, title, forward);
        finish(buf, res)
    }
}
