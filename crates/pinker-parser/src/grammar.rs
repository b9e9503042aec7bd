//! Line-level grammar for references, layout rows, relate lines and define text.
//!
//! Sections are line oriented, so every parser here works on a single
//! trimmed line. Failures never abort the document: the caller turns them
//! into warnings and moves on.

use std::fmt;

use winnow::{
    Parser as _,
    ascii::space0,
    combinator::{alt, opt, preceded, repeat},
    error::{ContextError, ErrMode},
    token::take_till,
};

use crate::section::{DefineSection, LayoutRecord, LayoutRow, Reference, RelateRecord};

type Input<'a> = &'a str;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// `[label]`, returning the raw text between the brackets.
fn scope_term<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    ('[', take_till(1.., ']'), ']')
        .map(|(_, label, _)| label)
        .parse_next(input)
}

/// `{alias}`, returning the raw text between the braces.
fn alias_term<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    ('{', take_till(1.., '}'), '}')
        .map(|(_, alias, _)| alias)
        .verify(|alias: &str| !alias.trim().is_empty())
        .parse_next(input)
}

/// Removes one pair of surrounding brackets, if present, and trims.
fn open_scope(text: &str) -> &str {
    let text = text.trim();
    text.strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .unwrap_or(text)
        .trim()
}

fn alias_reference(alias: &str, path: Option<&str>) -> Reference {
    let alias = alias.trim().to_string();
    match path.map(open_scope) {
        Some(path) if !path.is_empty() => Reference::AliasPath {
            alias,
            path: path.to_string(),
        },
        _ => Reference::Alias(alias),
    }
}

fn scope_reference(input: &mut Input<'_>) -> IResult<Reference> {
    scope_term
        .map(|label: &str| Reference::Scope(label.trim().to_string()))
        .parse_next(input)
}

/// `{alias}` or `{alias}.rest`, where `rest` runs to the end of the input.
fn trailing_alias_reference(input: &mut Input<'_>) -> IResult<Reference> {
    let alias = alias_term.parse_next(input)?;
    let path = opt('.').parse_next(input)?.map(|_| std::mem::take(input));
    Ok(alias_reference(alias, path))
}

/// A reference embedded at the start of a relate line.
///
/// The path after `{alias}.` is either bracketed or ends at whitespace.
fn leading_reference(input: &mut Input<'_>) -> IResult<Reference> {
    alt((
        scope_reference,
        (
            alias_term,
            opt(preceded(
                '.',
                alt((scope_term, take_till(1.., char::is_whitespace))),
            )),
        )
            .map(|(alias, path)| alias_reference(alias, path)),
    ))
    .parse_next(input)
}

/// Parses a whole string as a single reference.
///
/// Used for section headers and relate end terms. Returns `None` unless the
/// reference spans the entire (trimmed) text.
pub(crate) fn whole_reference(text: &str) -> Option<Reference> {
    let mut input = text.trim();
    let reference = alt((scope_reference, trailing_alias_reference))
        .parse_next(&mut input)
        .ok()?;
    input.trim().is_empty().then_some(reference)
}

/// Why a relate line produced no records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MalformedRelation {
    MissingStart,
    MissingEnd,
}

impl MalformedRelation {
    pub(crate) fn help(self) -> &'static str {
        match self {
            MalformedRelation::MissingStart => {
                "a relation starts with `[scope]`, `{alias}` or `{alias}.[path]`"
            }
            MalformedRelation::MissingEnd => "list at least one end term, e.g. `[A] -> [B], [C]`",
        }
    }
}

impl fmt::Display for MalformedRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedRelation::MissingStart => write!(f, "relation has no start term"),
            MalformedRelation::MissingEnd => write!(f, "relation has no valid end term"),
        }
    }
}

/// Everything up to the next term, trimmed.
fn arrow_token<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    take_till(0.., ['[', '{']).map(str::trim).parse_next(input)
}

/// Parses `<term> <arrow> <term>(, <term>)*` into one record per end.
pub(crate) fn relate_line(line: &str) -> Result<Vec<RelateRecord>, MalformedRelation> {
    let mut input = line.trim();
    let start = leading_reference
        .parse_next(&mut input)
        .map_err(|_| MalformedRelation::MissingStart)?;

    let arrow = arrow_token
        .parse_next(&mut input)
        .map_err(|_| MalformedRelation::MissingEnd)?;

    let records: Vec<_> = input
        .split(',')
        .filter_map(whole_reference)
        .map(|end| RelateRecord::new(start.clone(), arrow, end))
        .collect();

    if records.is_empty() {
        return Err(MalformedRelation::MissingEnd);
    }
    Ok(records)
}

/// A `[{alias} Label]` body: an optional leading alias, then the label.
fn labeled_record(inner: &str) -> LayoutRecord {
    let inner = inner.trim();
    let mut input = inner;
    match alias_term.parse_next(&mut input) {
        Ok(alias) => LayoutRecord::new(input.trim(), Some(alias.trim().to_string())),
        Err(_) => LayoutRecord::new(inner, None),
    }
}

fn layout_entry(input: &mut Input<'_>) -> IResult<LayoutRecord> {
    alt((
        alias_term.map(|alias: &str| LayoutRecord::new("", Some(alias.trim().to_string()))),
        scope_term.map(labeled_record),
    ))
    .parse_next(input)
}

fn layout_entries(input: &mut Input<'_>) -> IResult<Vec<LayoutRecord>> {
    repeat(0.., preceded(space0, layout_entry)).parse_next(input)
}

/// Parses one half of a layout row, returning the records and any
/// unrecognized trailing text.
fn layout_part(part: &str) -> (Vec<LayoutRecord>, Option<&str>) {
    let mut input = part;
    let records = layout_entries.parse_next(&mut input).unwrap_or_default();
    let rest = input.trim();
    (records, (!rest.is_empty()).then_some(rest))
}

/// Parses a layout row, split on `...` into left- and right-aligned entries.
///
/// The second element lists text that could not be read as an entry.
pub(crate) fn layout_row(line: &str) -> (LayoutRow, Vec<&str>) {
    let (left, right) = line.split_once("...").unwrap_or((line, ""));
    let (left, left_rest) = layout_part(left);
    let (right, right_rest) = layout_part(right);
    let unrecognized = left_rest.into_iter().chain(right_rest).collect();
    (LayoutRow { left, right }, unrecognized)
}

/// Adds one define line, turning leading and trailing `|` into rules.
pub(crate) fn define_line(define: &mut DefineSection, line: &str) {
    let mut text = line.trim();
    if let Some(rest) = text.strip_prefix('|') {
        define.push_rule();
        text = rest.trim();
    }
    match text.strip_suffix('|') {
        Some(body) => {
            define.push_line(body.trim());
            define.push_rule();
        }
        None => define.push_line(text),
    }
}
