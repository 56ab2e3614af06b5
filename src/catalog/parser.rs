use crate::catalog::error::IngestError;
use crate::catalog::types::CatalogRecord;

pub const TLE_LINE_LENGTH: usize = 69;

/// Parse multi-object TLE content.
///
/// Blocks are either `name / line 1 / line 2` or bare `line 1 / line 2`.
/// Each recognised block yields one entry; blocks that fail validation are
/// returned as errors so callers can decide how loudly to skip them.
pub fn parse_tle_text(content: &str) -> Vec<Result<CatalogRecord, IngestError>> {
    let lines: Vec<&str> = content
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();

    let mut result = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if lines[i].starts_with("1 ") && i + 1 < lines.len() && lines[i + 1].starts_with("2 ") {
            result.push(build_record(None, lines[i], lines[i + 1]));
            i += 2;
        } else if i + 2 < lines.len()
            && lines[i + 1].starts_with("1 ")
            && lines[i + 2].starts_with("2 ")
        {
            result.push(build_record(Some(lines[i]), lines[i + 1], lines[i + 2]));
            i += 3;
        } else {
            i += 1;
        }
    }

    result
}

/// Validate one TLE pair and turn it into a record.
pub fn build_record(
    name: Option<&str>,
    line1: &str,
    line2: &str,
) -> Result<CatalogRecord, IngestError> {
    check_line(1, line1)?;
    check_line(2, line2)?;

    let id = catalog_number(line1)?;
    let id2 = catalog_number(line2)?;
    if id != id2 {
        return Err(IngestError::CatalogMismatch(id, id2));
    }

    let name = name
        .map(|n| n.trim_start_matches("0 ").trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| format!("NORAD {}", id));

    Ok(CatalogRecord {
        id,
        name,
        element_line_1: line1.to_string(),
        element_line_2: line2.to_string(),
    })
}

fn check_line(number: u8, line: &str) -> Result<(), IngestError> {
    let length = line.chars().count();
    if length != TLE_LINE_LENGTH {
        return Err(IngestError::LineLength {
            line: number,
            length,
        });
    }
    let prefix = if number == 1 { "1 " } else { "2 " };
    if !line.starts_with(prefix) {
        return Err(IngestError::LineNumber { line: number });
    }
    Ok(())
}

fn catalog_number(line: &str) -> Result<u32, IngestError> {
    let field = line.get(2..7).unwrap_or_default();
    field
        .trim()
        .parse()
        .map_err(|_| IngestError::CatalogNumber(field.to_string()))
}
