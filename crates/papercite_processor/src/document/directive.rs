/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Directive argument parsing using winnow.
//!
//! Syntax: `"refs.bib", keys=["a", "b"], allow=["article"], year_group=True`
//!
//! Arguments may be given positionally in the order `path, keys, allow,
//! deny, year_group`, or by name after the positional ones. Values are
//! quoted strings, lists or tuples of quoted strings, booleans and `None`.
//! Nothing is ever evaluated.

use std::path::PathBuf;

use winnow::ascii::multispace0;
use winnow::combinator::{alt, delimited, opt, separated};
use winnow::error::ContextError;
use winnow::prelude::*;
use winnow::token::{any, take_while};

use crate::selection::SelectionSpec;

/// Parameter names in positional order.
const PARAMETERS: [&str; 5] = ["path", "keys", "allow", "deny", "year_group"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Value {
    Str(String),
    List(Vec<String>),
    Bool(bool),
    None,
}

impl Value {
    fn describe(&self) -> &'static str {
        match self {
            Value::Str(_) => "a string",
            Value::List(_) => "a list",
            Value::Bool(_) => "a boolean",
            Value::None => "None",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Argument {
    Positional(Value),
    Named(String, Value),
}

/// Parse a quoted string with backslash escapes.
fn parse_string(input: &mut &str) -> winnow::Result<String, ContextError> {
    let quote: char = alt(('"', '\'')).parse_next(input)?;
    let mut out = String::new();
    loop {
        match any.parse_next(input)? {
            c if c == quote => return Ok(out),
            '\\' => match any.parse_next(input)? {
                'n' => out.push('\n'),
                't' => out.push('\t'),
                other => out.push(other),
            },
            c => out.push(c),
        }
    }
}

/// Parse `[...]` or `(...)` holding quoted strings, with an optional
/// trailing comma.
fn parse_string_list(input: &mut &str) -> winnow::Result<Vec<String>, ContextError> {
    let mut close = alt(('['.value(']'), '('.value(')'))).parse_next(input)?;
    let items: Vec<String> =
        separated(0.., delimited(multispace0, parse_string, multispace0), ',')
            .parse_next(input)?;
    let _ = opt(',').parse_next(input)?;
    let _ = multispace0.parse_next(input)?;
    let _ = close.parse_next(input)?;
    Ok(items)
}

fn parse_value(input: &mut &str) -> winnow::Result<Value, ContextError> {
    alt((
        parse_string.map(Value::Str),
        parse_string_list.map(Value::List),
        alt(("True", "true")).value(Value::Bool(true)),
        alt(("False", "false")).value(Value::Bool(false)),
        "None".value(Value::None),
    ))
    .parse_next(input)
}

fn parse_identifier<'a>(input: &mut &'a str) -> winnow::Result<&'a str, ContextError> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)
}

/// Parse `name = value`.
fn parse_named(input: &mut &str) -> winnow::Result<Argument, ContextError> {
    let name = parse_identifier.parse_next(input)?;
    let _ = multispace0.parse_next(input)?;
    let _ = '='.parse_next(input)?;
    let _ = multispace0.parse_next(input)?;
    let value = parse_value.parse_next(input)?;
    Ok(Argument::Named(name.to_string(), value))
}

fn parse_argument(input: &mut &str) -> winnow::Result<Argument, ContextError> {
    alt((parse_named, parse_value.map(Argument::Positional))).parse_next(input)
}

fn parse_argument_list(input: &mut &str) -> winnow::Result<Vec<Argument>, ContextError> {
    let args: Vec<Argument> =
        separated(0.., delimited(multispace0, parse_argument, multispace0), ',')
            .parse_next(input)?;
    let _ = opt(',').parse_next(input)?;
    let _ = multispace0.parse_next(input)?;
    Ok(args)
}

/// Parse the text between the directive's parentheses into a selection.
///
/// The returned spec's path is exactly as written; resolving it against the
/// document's directory is the caller's job.
pub fn parse_arguments(input: &str) -> Result<SelectionSpec, String> {
    let args = parse_argument_list
        .parse(input)
        .map_err(|e| format!("invalid argument syntax: {}", e))?;

    let mut values: [Option<Value>; 5] = Default::default();
    let mut seen_named = false;
    let mut position = 0;

    for arg in args {
        let (index, value) = match arg {
            Argument::Positional(value) => {
                if seen_named {
                    return Err("positional argument follows keyword argument".to_string());
                }
                if position >= PARAMETERS.len() {
                    return Err(format!(
                        "too many positional arguments (at most {})",
                        PARAMETERS.len()
                    ));
                }
                position += 1;
                (position - 1, value)
            }
            Argument::Named(name, value) => {
                seen_named = true;
                let index = PARAMETERS
                    .iter()
                    .position(|p| *p == name)
                    .ok_or_else(|| format!("unknown argument '{}'", name))?;
                (index, value)
            }
        };
        if values[index].is_some() {
            return Err(format!("argument '{}' given more than once", PARAMETERS[index]));
        }
        values[index] = Some(value);
    }

    let [path, keys, allow, deny, year_group] = values;

    let path = match path {
        Some(Value::Str(path)) => path,
        Some(other) => {
            return Err(format!(
                "bibliography path must be a string, not {}",
                other.describe()
            ))
        }
        None => return Err("missing bibliography path".to_string()),
    };

    Ok(SelectionSpec {
        path: PathBuf::from(path),
        keys: string_list("keys", keys)?,
        allow: string_list("allow", allow)?,
        deny: string_list("deny", deny)?,
        year_group: match year_group {
            None | Some(Value::None) => false,
            Some(Value::Bool(b)) => b,
            Some(other) => {
                return Err(format!(
                    "year_group must be a boolean, not {}",
                    other.describe()
                ))
            }
        },
    })
}

fn string_list(name: &str, value: Option<Value>) -> Result<Option<Vec<String>>, String> {
    match value {
        None | Some(Value::None) => Ok(None),
        Some(Value::List(items)) => Ok(Some(items)),
        Some(other) => Err(format!("{} must be a list of strings, not {}", name, other.describe())),
    }
}
