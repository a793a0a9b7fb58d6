//! # CSV Parser
//!
//! Tolerant parser for published spreadsheet exports.
//!
//! ```text
//! "a,\"b,c\",d\r\n"  →  parse()  →  [["a", "b,c", "d"]]
//! ```
//!
//! The parser never fails. Unbalanced quotes just move cell boundaries,
//! which matches what spreadsheet exports occasionally produce. Rows may be
//! ragged, so consumers index with `get()` rather than assuming a width.

/// One record: cells in source order, each trimmed of surrounding whitespace.
pub type Row = Vec<String>;

/// All records in source order.
pub type Table = Vec<Row>;

/// Parses CSV text into a table.
///
/// - `""` inside a quoted field is a literal quote.
/// - `,` and line breaks inside quotes belong to the cell.
/// - `\r`, `\n` and `\r\n` all end a record; blank lines are skipped.
/// - A final record without a trailing newline is still emitted.
pub fn parse(text: &str) -> Table {
    let mut rows = Table::new();
    let mut row = Row::new();
    let mut cell = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                cell.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => row.push(take_cell(&mut cell)),
            '\n' | '\r' if !in_quotes => {
                if !cell.is_empty() || !row.is_empty() {
                    row.push(take_cell(&mut cell));
                    rows.push(std::mem::take(&mut row));
                }
                cell.clear();
            }
            _ => cell.push(ch),
        }
    }

    if !cell.is_empty() || !row.is_empty() {
        row.push(take_cell(&mut cell));
        rows.push(row);
    }

    rows
}

/// Trims the buffered cell and resets the buffer.
fn take_cell(cell: &mut String) -> String {
    let trimmed = cell.trim().to_string();
    cell.clear();
    trimmed
}
