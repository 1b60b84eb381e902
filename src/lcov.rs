/// Parser for the subset of the LCOV `.info` format needed for badges.
///
/// Reference: https://ltp.sourceforge.net/coverage/lcov/geninfo.1.php
///
/// Records used:
///   DA:<line number>,<execution count>
///   BRDA:<line>,<block>,<branch>,<taken>   ("-" means never reached)
///
/// Everything else (TN, SF, FN, FNDA, LF, LH, BRF, BRH, end_of_record, ...)
/// is ignored. Totals are derived from the records, not from the summary lines.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{BadgeError, Result};
use crate::model::CoverageTotals;

/// Result of inspecting a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Record {
    Counted,
    Malformed,
    Ignored,
}

/// Open `path` and accumulate line/branch totals from it.
pub fn parse_file(path: &Path) -> Result<CoverageTotals> {
    let file = File::open(path).map_err(|source| BadgeError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reader(BufReader::new(file)).map_err(|source| BadgeError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse LCOV data already held in memory.
pub fn parse(input: &[u8]) -> CoverageTotals {
    // Reading from a byte slice cannot fail.
    parse_reader(input).unwrap_or_default()
}

/// Streaming parser. Reads line-by-line so the full input need not be in
/// memory at once. Only I/O failures are errors; bad records are skipped.
pub fn parse_reader<R: BufRead>(mut reader: R) -> std::io::Result<CoverageTotals> {
    let mut totals = CoverageTotals::new();
    let mut skipped = 0usize;

    let mut raw_line = Vec::new();
    loop {
        raw_line.clear();
        let n = reader.read_until(b'\n', &mut raw_line)?;
        if n == 0 {
            break; // EOF
        }

        // Non-UTF-8 lines cannot hold a usable record.
        let Ok(line) = std::str::from_utf8(&raw_line) else {
            skipped += 1;
            continue;
        };

        if parse_line(line, &mut totals) == Record::Malformed {
            skipped += 1;
        }
    }

    debug!(
        total_lines = totals.total_lines,
        covered_lines = totals.covered_lines,
        total_branches = totals.total_branches,
        covered_branches = totals.covered_branches,
        skipped,
        "parsed LCOV data"
    );

    Ok(totals)
}

fn parse_line(line: &str, totals: &mut CoverageTotals) -> Record {
    if line.starts_with("DA:") {
        // DA:<line_number>,<execution_count>
        let fields = fields(line);
        if fields.len() != 2 {
            return Record::Malformed;
        }
        match is_positive(fields[1]) {
            Some(executed) => {
                totals.record_line(executed);
                Record::Counted
            }
            None => Record::Malformed,
        }
    } else if line.starts_with("BRDA:") {
        // BRDA:<line>,<block>,<branch>,<taken>
        let fields = fields(line);
        if fields.len() != 4 {
            return Record::Malformed;
        }
        let taken = match fields[3] {
            "-" => false,
            n => match is_positive(n) {
                Some(taken) => taken,
                None => return Record::Malformed,
            },
        };
        totals.record_branch(taken);
        Record::Counted
    } else {
        Record::Ignored
    }
}

/// Whether an integer count is greater than zero, or `None` if `count` is
/// not an integer. Counts of any magnitude are accepted.
fn is_positive(count: &str) -> Option<bool> {
    let (negative, digits) = match count.as_bytes().first() {
        Some(b'-') => (true, &count[1..]),
        Some(b'+') => (false, &count[1..]),
        _ => (false, count),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(!negative && digits.bytes().any(|b| b != b'0'))
}

/// The comma-separated fields between the first and second `:`.
fn fields(line: &str) -> Vec<&str> {
    line.trim()
        .split(':')
        .nth(1)
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .collect()
}
