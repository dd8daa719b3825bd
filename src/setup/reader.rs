use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::types::{LoadRecord, Point};
use crate::error::{DispatchError, Result};

/// Reads a load file: a header line followed by `label (px,py) (dx,dy)` records.
pub fn read_load_file(path: &Path) -> Result<Vec<LoadRecord>> {
    let text = fs::read_to_string(path).map_err(|source| DispatchError::InputIo {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_loads(&text)?;
    info!("Read {} loads from {}", records.len(), path.display());
    Ok(records)
}

/// Parses the text of a load file. Blank lines are skipped; line numbers in
/// errors are 1-based and count the header.
pub fn parse_loads(text: &str) -> Result<Vec<LoadRecord>> {
    let mut lines = text.lines().enumerate();
    if let Some((_, header)) = lines.next() {
        debug!("Skipping header: {:?}", header);
    }

    let mut records = Vec::new();
    for (ind, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_record(line, ind + 1)?);
    }
    Ok(records)
}

fn parse_record(line: &str, line_no: usize) -> Result<LoadRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [_label, pickup, dropoff] = fields.as_slice() else {
        return Err(format_error(
            line_no,
            format!(
                "expected 3 fields `label (px,py) (dx,dy)`, found {}",
                fields.len()
            ),
        ));
    };

    Ok(LoadRecord {
        pickup: parse_point(pickup, line_no)?,
        dropoff: parse_point(dropoff, line_no)?,
    })
}

fn parse_point(field: &str, line_no: usize) -> Result<Point> {
    let inner = field
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| format_error(line_no, format!("`{field}` is not a parenthesized pair")))?;

    let (x, y) = inner
        .split_once(',')
        .ok_or_else(|| format_error(line_no, format!("`{field}` is missing a comma")))?;

    Ok(Point::new(
        parse_coordinate(x, field, line_no)?,
        parse_coordinate(y, field, line_no)?,
    ))
}

fn parse_coordinate(raw: &str, field: &str, line_no: usize) -> Result<f64> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format_error(line_no, format!("`{raw}` in `{field}` is not a number")))?;
    if !value.is_finite() {
        return Err(format_error(
            line_no,
            format!("`{raw}` in `{field}` is not a finite number"),
        ));
    }
    Ok(value)
}

fn format_error(line: usize, reason: String) -> DispatchError {
    DispatchError::InputFormat { line, reason }
}
