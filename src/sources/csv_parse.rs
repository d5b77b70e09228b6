use crate::models::Space;
use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

/// Rows shorter than this are not spaces
const MIN_COLUMNS: usize = 9;

lazy_static! {
    static ref DIGITS: Regex = Regex::new(r"[0-9]+").unwrap();
    static ref LEADING_DIGITS: Regex = Regex::new(r"^[0-9]+").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Parse the sheet's CSV export into spaces.
///
/// Columns are positional: host email, name, min capacity, capacity, price,
/// currency, country, region, sub-region, type, style, area. Rows without a
/// name or with zero capacity are dropped.
pub fn parse_spaces(csv_text: &str) -> Result<Vec<Space>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_text.as_bytes());

    let mut spaces = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let row = index + 1;
        let record = record.with_context(|| format!("Failed to read CSV row {}", row))?;

        if record.iter().all(str::is_empty) {
            continue;
        }
        if record.len() < MIN_COLUMNS {
            warn!("Skipping row {}: {} columns", row, record.len());
            continue;
        }

        let column = |i: usize| record.get(i).unwrap_or_default().to_string();
        let price = column(4);

        let space = Space {
            id: row,
            host_email: column(0),
            name: column(1),
            min_capacity: leading_number(&column(2)).filter(|&n| n > 0).unwrap_or(1),
            capacity: leading_number(&column(3)).unwrap_or(0),
            price_value: extract_price_value(&price),
            price,
            currency: column(5),
            country: column(6),
            region: column(7),
            sub_region: column(8),
            space_type: column(9),
            style: column(10),
            area: clean_area(&column(11)),
        };

        if space.name.is_empty() || space.capacity == 0 {
            debug!("Skipping row {}: missing name or capacity", row);
            continue;
        }
        spaces.push(space);
    }

    Ok(spaces)
}

/// First run of digits in a price string, e.g. "300 GBP" -> 300
pub fn extract_price_value(price: &str) -> u64 {
    DIGITS
        .find(price)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Digits at the start of a cell, so "12 people" reads as 12
fn leading_number(cell: &str) -> Option<u32> {
    LEADING_DIGITS.find(cell)?.as_str().parse().ok()
}

/// Strip LaTeX-ish area markup: `$70\text{ m}^2$` -> `70 m²`
pub fn clean_area(raw: &str) -> String {
    let mut area = raw.strip_prefix('$').unwrap_or(raw);
    area = area.strip_suffix('$').unwrap_or(area);

    let area = area
        .replacen("\\text{", " ", 1)
        .replacen('}', "", 1)
        .replacen("^2", "²", 1);

    WHITESPACE.replace_all(area.trim(), " ").into_owned()
}
