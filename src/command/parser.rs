//! Command parser for the TableDB shell
//!
//! A command line is a whitespace-separated list of tokens. A token is a bare
//! word or a double-quoted string, where `\"` and `\\` are the only escapes.

use nom::{
    branch::alt,
    bytes::complete::{escaped_transform, is_not, tag},
    character::complete::{char, multispace0, multispace1},
    combinator::{all_consuming, map, opt, value},
    multi::separated_list0,
    sequence::delimited,
    IResult,
};

use super::Command;
use crate::catalog::ColumnType;
use crate::error::{Error, Result};

fn quoted(input: &str) -> IResult<&str, String> {
    let body = escaped_transform(
        is_not("\\\""),
        '\\',
        alt((value("\\", tag("\\")), value("\"", tag("\"")))),
    );
    delimited(char('"'), map(opt(body), Option::unwrap_or_default), char('"'))(input)
}

fn bare(input: &str) -> IResult<&str, String> {
    map(is_not(" \t\r\n\""), String::from)(input)
}

fn token(input: &str) -> IResult<&str, String> {
    alt((quoted, bare))(input)
}

/// Split a command line into tokens
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut line_parser = all_consuming(delimited(
        multispace0,
        separated_list0(multispace1, token),
        multispace0,
    ));

    line_parser(line)
        .map(|(_, tokens)| tokens)
        .map_err(|e| Error::ParseError(format!("cannot tokenize input: {}", e)))
}

/// Parse one command line
pub fn parse(line: &str) -> Result<Command> {
    let mut tokens = tokenize(line)?.into_iter();
    let keyword = tokens
        .next()
        .ok_or_else(|| Error::ParseError("empty command".to_string()))?;
    let args: Vec<String> = tokens.collect();

    match keyword.to_ascii_lowercase().as_str() {
        "create" => {
            let (table, specs) = split_table(&keyword, args)?;
            let columns = specs
                .iter()
                .map(|spec| parse_column_spec(spec))
                .collect::<Result<Vec<_>>>()?;
            Ok(Command::CreateTable { table, columns })
        }
        "insert" => {
            let (table, values) = split_table(&keyword, args)?;
            Ok(Command::Insert { table, values })
        }
        "select" => {
            let (table, columns) = split_table(&keyword, args)?;
            Ok(Command::Select { table, columns })
        }
        "update" => {
            let [table, column, value] = exact_args::<3>(&keyword, args)?;
            Ok(Command::Update {
                table,
                column,
                value,
            })
        }
        "remove" | "delete" => {
            let [table, column, value] = exact_args::<3>(&keyword, args)?;
            Ok(Command::Remove {
                table,
                column,
                value,
            })
        }
        ".tables" => {
            exact_args::<0>(&keyword, args)?;
            Ok(Command::Tables)
        }
        ".schema" => match args.len() {
            0 => Ok(Command::Schema(None)),
            _ => {
                let [table] = exact_args::<1>(&keyword, args)?;
                Ok(Command::Schema(Some(table)))
            }
        },
        ".dump" => {
            let [table] = exact_args::<1>(&keyword, args)?;
            Ok(Command::Dump(table))
        }
        ".help" => Ok(Command::Help),
        ".quit" | ".exit" => Ok(Command::Quit),
        _ => Err(Error::ParseError(format!("unknown command '{}'", keyword))),
    }
}

fn split_table(keyword: &str, args: Vec<String>) -> Result<(String, Vec<String>)> {
    let mut args = args.into_iter();
    let table = args
        .next()
        .ok_or_else(|| Error::ParseError(format!("'{}' expects a table name", keyword)))?;
    Ok((table, args.collect()))
}

fn exact_args<const N: usize>(keyword: &str, args: Vec<String>) -> Result<[String; N]> {
    let found = args.len();
    args.try_into().map_err(|_| {
        Error::ParseError(format!(
            "'{}' expects {} argument(s), got {}",
            keyword, N, found
        ))
    })
}

/// `<name>:<type>`; the name may itself contain ':'
fn parse_column_spec(spec: &str) -> Result<(String, ColumnType)> {
    let (name, ty) = spec.rsplit_once(':').ok_or_else(|| {
        Error::ParseError(format!("expected <column>:<type>, got '{}'", spec))
    })?;
    if name.is_empty() {
        return Err(Error::ParseError(format!("missing column name in '{}'", spec)));
    }
    Ok((name.to_string(), ty.parse()?))
}
