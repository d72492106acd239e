//! Page furniture: headers, title blocks and cover pages.
//!
//! Helpers take a single line of `|`-delimited arguments, the way they are typed in a notebook cell,
//! and return HTML flattened onto a single line (notebook converters mangle indented multi-line HTML in markdown cells).

use std::{fmt::Display, io};

use chrono::NaiveDate;
use itertools::Itertools;
use nom::{
    bytes::complete::take_till, character::complete::char, combinator::all_consuming,
    multi::separated_list0, IResult,
};

/// Styles for every class used by the page furniture and label captions.
pub const CSS_PAGE: &str = include_str!("jocument.css");

#[derive(Debug, thiserror::Error)]
pub enum MagicError {
    #[error("Expected {expected} arguments in {line}.  Found {found}")]
    ArgumentCount {
        expected: usize,
        found: usize,
        line: String,
    },
    #[error("{}", .0)]
    Io(#[from] io::Error),
}

fn arguments(input: &str) -> IResult<&str, Vec<&str>> {
    all_consuming(separated_list0(char('|'), take_till(|c: char| c == '|')))(input)
}

/// Splits `line` at pipes, requiring exactly `expected` pieces. Pieces are not trimmed.
pub fn parse_args(line: &str, expected: usize) -> Result<Vec<&str>, MagicError> {
    let args = match arguments(line) {
        Ok((_, args)) => args,
        // every input is a valid argument list
        Err(_) => vec![line],
    };
    if args.len() != expected {
        return Err(MagicError::ArgumentCount {
            expected,
            found: args.len(),
            line: line.to_owned(),
        });
    }
    Ok(args)
}

/// Joins lines and strips the ends.
pub fn flatten(html: &str) -> String {
    html.replace('\n', " ").trim().to_owned()
}

/// Centers matplotlib output images.
pub fn centerplots() -> String {
    flatten(
        "<style>
            .output_png img {
            display: block;
            margin-left: auto;
            margin-right: auto;
            }
        </style>",
    )
}

/// `Title`
pub fn pageheader(line: &str) -> Result<String, MagicError> {
    let [title] = args::<1>(line)?;
    Ok(flatten(&format!(
        r#"
            <div class="pageheader">
                <span class="maintext">{title}</span>
            </div>"#
    )))
}

/// `Title|Subtitle|Author`, dated today
pub fn titleblock(line: &str) -> Result<String, MagicError> {
    titleblock_on(line, chrono::Local::now().date_naive())
}

/// `Title|Subtitle|Author`
pub fn titleblock_on(line: &str, date: NaiveDate) -> Result<String, MagicError> {
    let [title, subtitle, author] = args::<3>(line)?;
    Ok(flatten(&format!(
        r#"
            <div class="title_block">
                <div class="navigator">
                    <span class="title">{title}</span>
                    <span class="date">{date}</span>
                </div>
            </div>
            <div class="notebook_subtitle">{subtitle}</div>
            <div class="notebook_author">{author}</div>"#
    )))
}

/// `Line1|Line2|Line3`
pub fn frontpage(line: &str) -> Result<String, MagicError> {
    banded_page(line, "front_page", "front_band")
}

/// `Line1|Line2|Line3`
pub fn sectionpage(line: &str) -> Result<String, MagicError> {
    banded_page(line, "section_page", "section_band")
}

fn banded_page(line: &str, page: &str, band: &str) -> Result<String, MagicError> {
    let [first, second, third] = args::<3>(line)?;
    Ok(flatten(&format!(
        r#"
            <div class="{page}">
                <div class="{band}">
                    <div class="maintext1">{first}</div>
                    <div class="maintext2">{second}</div>
                    <div class="maintext3">{third}</div>
                </div>
            </div>"#
    )))
}

/// Hides cell prompts on `off`, shows them on anything else.
pub fn prompt(line: &str) -> Result<String, MagicError> {
    let [state] = args::<1>(line)?;
    let display = if state == "off" { "none" } else { "block" };
    Ok(format!("<style>div.prompt {{display:{display}}}</style>"))
}

/// The stylesheet: [`CSS_PAGE`] if `filename` is empty, that file's contents otherwise.
///
/// A missing file produces a visible error message instead of the styles.
pub fn css(filename: &str) -> Result<String, MagicError> {
    if filename.is_empty() {
        return Ok(flatten(CSS_PAGE));
    }
    match std::fs::read_to_string(filename) {
        Ok(css) => Ok(flatten(&css)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(filename, "css file not found");
            Ok(format!(
                r#"<h3 style="textcolor: red"> CSS file {filename} not found"#
            ))
        }
        Err(err) => Err(err.into()),
    }
}

/// Wraps each item into `<center>`, one per line.
pub fn center<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    items
        .into_iter()
        .map(|item| format!("<center>{item}</center>"))
        .join("\n")
}

fn args<const N: usize>(line: &str) -> Result<[&str; N], MagicError> {
    let args = parse_args(line, N)?;
    args.try_into().map_err(|args: Vec<&str>| MagicError::ArgumentCount {
        expected: N,
        found: args.len(),
        line: line.to_owned(),
    })
}
