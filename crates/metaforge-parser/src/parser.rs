//! Parser for PlantUML entity blocks.
//!
//! The public entry point is [`parse_entities`]. The source text is
//! scanned for `entity Code as "Name" { body }` blocks (newlines are
//! allowed anywhere whitespace is); each block body is then processed
//! line by line to collect attribute declarations.

use winnow::{
    Parser as _,
    ascii::{multispace0, multispace1},
    combinator::delimited,
    error::{ContextError, ErrMode},
    token::{take_till, take_while},
};

use indexmap::IndexMap;
use log::{debug, info};

use metaforge_core::model::{Entity, Property};

type Input<'src> = &'src str;
type IResult<O> = Result<O, ErrMode<ContextError>>;

/// The in-diagram token marking an attribute as a primary/key field.
const PRIMARY_KEY_MARKER: &str = "* ";

/// A matched entity block before body processing.
#[derive(Debug)]
struct RawBlock<'src> {
    code: &'src str,
    name: &'src str,
    body: &'src str,
}

/// Parse an identifier token: letters, digits, underscore.
fn identifier<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)
}

/// Parse one entity block: `entity Code as "Name" { body }`.
///
/// The body is everything up to the first closing brace and must be
/// non-empty, matching the original generator's block pattern.
fn entity_block<'src>(input: &mut Input<'src>) -> IResult<RawBlock<'src>> {
    "entity".parse_next(input)?;
    multispace1.parse_next(input)?;
    let code = identifier.parse_next(input)?;
    multispace1.parse_next(input)?;
    "as".parse_next(input)?;
    multispace1.parse_next(input)?;
    let name = delimited('"', take_till(1.., '"'), '"').parse_next(input)?;
    multispace0.parse_next(input)?;
    '{'.parse_next(input)?;
    let body = take_till(1.., '}').parse_next(input)?;
    '}'.parse_next(input)?;

    Ok(RawBlock { code, name, body })
}

/// Parse an attribute declaration prefix: `code : type`.
///
/// Only the prefix of the line has to match; trailing diagram decoration
/// after the type token is ignored.
fn attribute<'src>(input: &mut Input<'src>) -> IResult<(&'src str, &'src str)> {
    let code = identifier.parse_next(input)?;
    multispace0.parse_next(input)?;
    ':'.parse_next(input)?;
    multispace0.parse_next(input)?;
    let type_token = identifier.parse_next(input)?;

    Ok((code, type_token))
}

/// Process a block body line by line, appending matched attributes.
///
/// A single-quote comment line sets the pending display label for the
/// next attribute; consuming it resets the label, so a label applies to
/// at most the one attribute immediately following it. Blank lines,
/// `--` separators, and anything that does not match the attribute
/// pattern are skipped without touching the label.
fn parse_body(body: &str, entity: &mut Entity) {
    let mut pending_label = String::new();

    for raw_line in body.split('\n') {
        let line = raw_line.trim();

        if let Some(comment) = line.strip_prefix('\'') {
            pending_label = comment.trim_start_matches('\'').trim().to_string();
            continue;
        }

        if line.is_empty() || line.starts_with("--") {
            continue;
        }

        let required = line.contains(PRIMARY_KEY_MARKER);
        let stripped = if required {
            line.replace(PRIMARY_KEY_MARKER, "").trim().to_string()
        } else {
            line.to_string()
        };

        let mut rest: Input<'_> = &stripped;
        match attribute.parse_next(&mut rest) {
            Ok((code, type_token)) => {
                let name = if pending_label.is_empty() {
                    code.to_string()
                } else {
                    std::mem::take(&mut pending_label)
                };

                entity.push_property(Property::new(code, name, type_token, required));
            }
            Err(_) => {
                debug!(line = line; "Skipping unrecognized body line");
            }
        }
    }
}

/// Parse a diagram source into its entities, ordered by first appearance.
///
/// Duplicate entity codes overwrite the earlier entry (last occurrence
/// wins) while keeping the earlier position. Text that is not part of an
/// entity block is skipped, so this function never fails.
pub fn parse_entities(source: &str) -> IndexMap<String, Entity> {
    let mut entities: IndexMap<String, Entity> = IndexMap::new();

    let mut input: Input<'_> = source;
    while !input.is_empty() {
        let mut cursor = input;
        match entity_block.parse_next(&mut cursor) {
            Ok(block) => {
                let mut entity = Entity::new(block.code, block.name);
                parse_body(block.body, &mut entity);
                debug!(
                    code = block.code,
                    properties = entity.properties().len();
                    "Parsed entity block"
                );
                entities.insert(block.code.to_string(), entity);
                input = cursor;
            }
            Err(_) => {
                // No block starts here; advance one character and rescan.
                let mut chars = input.chars();
                chars.next();
                input = chars.as_str();
            }
        }
    }

    info!(entities = entities.len(); "Parsed diagram source");
    entities
}
