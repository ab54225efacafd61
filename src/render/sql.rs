//! SQL value-list rendering and parsing
//!
//! The output format is one parenthesized ARRAY literal per design, comma
//! separated, semicolon terminated. The parser accepts exactly the shape the
//! renderer emits so a rendered block can be checked by reading it back.

use crate::design::DesignVector;

use super::errors::{ParseResult, SqlParseError};

/// Renders designs as a SQL value list, one row per line.
///
/// Every row ends in `,` except the last, which ends in `;`. Empty input
/// renders to the empty string.
pub fn render_value_list(designs: &[DesignVector]) -> String {
    let mut out = String::new();
    for (i, design) in designs.iter().enumerate() {
        let end = if i + 1 == designs.len() { ';' } else { ',' };
        out.push_str(&format!("(ARRAY{}){}\n", design, end));
    }
    out
}

/// Renders the full INSERT statement around the value list.
///
/// `table` and `column` are assumed to be validated identifiers. Empty input
/// renders to the empty string rather than a headless statement.
pub fn render_insert(designs: &[DesignVector], table: &str, column: &str) -> String {
    if designs.is_empty() {
        return String::new();
    }
    format!(
        "INSERT INTO {} ({}) VALUES\n{}",
        table,
        column,
        render_value_list(designs)
    )
}

/// Parses a rendered value list back into designs.
///
/// Strict inverse of [`render_value_list`]: rows must carry exactly four
/// components in -1..=1, separated by `,` lines and terminated once by `;`.
/// Blank lines are tolerated; anything after the terminator is not.
pub fn parse_value_list(input: &str) -> ParseResult<Vec<DesignVector>> {
    let mut designs = Vec::new();
    let mut terminated = false;

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let number = idx + 1;
        if terminated {
            return Err(SqlParseError::TrailingContent { line: number });
        }
        let (inner, terminal) = split_row(line, number)?;
        designs.push(parse_components(inner, number)?);
        terminated = terminal;
    }

    if !designs.is_empty() && !terminated {
        return Err(SqlParseError::MissingTerminator);
    }
    Ok(designs)
}

/// Strips the row punctuation, returning the component text and whether the
/// row carried the `;` terminator.
fn split_row(line: &str, number: usize) -> ParseResult<(&str, bool)> {
    let (body, terminal) = if let Some(body) = line.strip_suffix(';') {
        (body, true)
    } else if let Some(body) = line.strip_suffix(',') {
        (body, false)
    } else {
        return Err(SqlParseError::MalformedRow { line: number });
    };
    let inner = body
        .strip_prefix("(ARRAY[")
        .and_then(|rest| rest.strip_suffix("])"))
        .ok_or(SqlParseError::MalformedRow { line: number })?;
    Ok((inner, terminal))
}

/// Parses the comma separated components of one row.
fn parse_components(inner: &str, number: usize) -> ParseResult<DesignVector> {
    let pieces: Vec<&str> = if inner.trim().is_empty() {
        Vec::new()
    } else {
        inner.split(',').map(str::trim).collect()
    };
    if pieces.len() != 4 {
        return Err(SqlParseError::FieldCount {
            line: number,
            count: pieces.len(),
        });
    }

    let mut components = [0i8; 4];
    for (slot, piece) in components.iter_mut().zip(&pieces) {
        let value: i8 = piece.parse().map_err(|_| SqlParseError::InvalidComponent {
            line: number,
            value: piece.to_string(),
        })?;
        if !(-1..=1).contains(&value) {
            return Err(SqlParseError::InvalidComponent {
                line: number,
                value: piece.to_string(),
            });
        }
        *slot = value;
    }
    Ok(DesignVector::new(
        components[0],
        components[1],
        components[2],
        components[3],
    ))
}
