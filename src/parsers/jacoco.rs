/// Parser for JaCoCo CSV coverage reports.
///
/// JaCoCo CSV structure (one row per class):
///   GROUP,PACKAGE,CLASS,INSTRUCTION_MISSED,INSTRUCTION_COVERED,BRANCH_MISSED,BRANCH_COVERED,LINE_MISSED,...
///   app,com.example,Foo,2,40,1,3,1,12,...
///
/// Only the instruction and branch counters are read, by position:
///   - column 3: missed instructions
///   - column 4: covered instructions
///   - column 5: missed branches
///   - column 6: covered branches
///
/// The first row is always the header and is skipped without inspection.
/// Every other row must carry integers in those four columns; a short row, a
/// blank line, a non-integer counter or a sum that overflows `u64` fails the
/// whole parse.
use crate::error::{CovbadgeError, Result};
use crate::model::{CoverageCounts, ReportCounts};

use super::Parser;

const INSTRUCTION_MISSED: usize = 3;
const INSTRUCTION_COVERED: usize = 4;
const BRANCH_MISSED: usize = 5;
const BRANCH_COVERED: usize = 6;

/// JaCoCo CSV format parser.
pub struct JacocoCsvParser;

impl Parser for JacocoCsvParser {
    fn parse(&self, input: &[u8]) -> Result<ReportCounts> {
        parse(input)
    }
}

/// Parse JaCoCo CSV data from raw bytes, summing every class row.
pub fn parse(input: &[u8]) -> Result<ReportCounts> {
    // The csv reader silently drops empty lines, so they are rejected up front.
    let blanks = blank_lines(input);
    if let Some(line) = blanks.iter().find(|&&line| line > 1) {
        return Err(CovbadgeError::Parse(format!(
            "line {line} is empty, expected at least {} fields",
            BRANCH_COVERED + 1
        )));
    }
    // A blank first line is the header row; the reader never yields it.
    let header_rows = if blanks.first() == Some(&1) { 0 } else { 1 };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut counts = ReportCounts::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| CovbadgeError::Parse(e.to_string()))?;
        if index < header_rows {
            continue;
        }
        let row = index + 2 - header_rows;
        let row_counts = ReportCounts {
            instructions: CoverageCounts::new(
                counter(&record, INSTRUCTION_COVERED, row)?,
                counter(&record, INSTRUCTION_MISSED, row)?,
            ),
            branches: CoverageCounts::new(
                counter(&record, BRANCH_COVERED, row)?,
                counter(&record, BRANCH_MISSED, row)?,
            ),
        };
        counts = counts
            .checked_add(row_counts)
            .ok_or_else(|| CovbadgeError::Parse(format!("counter overflow at row {row}")))?;
    }
    Ok(counts)
}

/// 1-based numbers of the empty lines in `input`, ignoring line breaks inside
/// quoted fields and the empty remainder after a final newline.
fn blank_lines(input: &[u8]) -> Vec<usize> {
    let mut blanks = Vec::new();
    let mut in_quotes = false;
    let mut lines = input.split(|&b| b == b'\n').peekable();
    let mut number = 0;
    while let Some(line) = lines.next() {
        number += 1;
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        if lines.peek().is_none() && line.is_empty() {
            break;
        }
        if !in_quotes && line.is_empty() {
            blanks.push(number);
        }
        // A doubled quote inside a field toggles twice, leaving the state as is.
        if line.iter().filter(|&&b| b == b'"').count() % 2 == 1 {
            in_quotes = !in_quotes;
        }
    }
    blanks
}

/// Read the counter in `column` of a data row. `row` is 1-based, for messages.
fn counter(record: &csv::StringRecord, column: usize, row: usize) -> Result<u64> {
    let field = record.get(column).ok_or_else(|| {
        CovbadgeError::Parse(format!(
            "row {row} has {} fields, expected at least {}",
            record.len(),
            BRANCH_COVERED + 1
        ))
    })?;
    field.trim().parse::<u64>().map_err(|_| {
        CovbadgeError::Parse(format!(
            "row {row}, column {column}: '{field}' is not a non-negative integer"
        ))
    })
}
