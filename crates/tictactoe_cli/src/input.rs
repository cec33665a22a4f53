//! Parsing of typed coordinates such as `B2`.

use tracing::instrument;

/// Why a line of input could not be read as a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Nothing but whitespace was entered.
    #[display("enter a column letter followed by a row number, e.g. B2")]
    Empty,

    /// A column letter with no row after it.
    #[display("missing row after column {}", _0)]
    MissingRow(char),

    /// The row part is not a number.
    #[display("row {:?} is not a number", _0)]
    BadRow(String),
}

impl std::error::Error for InputError {}

/// Splits a line into a (column, row) pair.
///
/// The column letter is upper-cased; whether the pair lies on the board is
/// left to the rules engine.
#[instrument]
pub fn parse_coordinate(line: &str) -> Result<(char, u32), InputError> {
    let line = line.trim();
    let mut chars = line.chars();
    let column = chars.next().ok_or(InputError::Empty)?.to_ascii_uppercase();

    let rest = chars.as_str().trim();
    if rest.is_empty() {
        return Err(InputError::MissingRow(column));
    }
    let row = rest
        .parse::<u32>()
        .map_err(|_| InputError::BadRow(rest.to_string()))?;
    Ok((column, row))
}
