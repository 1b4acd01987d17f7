// src/specs/summary.rs
//! Entry (party-wise summary) page.
//!
//! Columns: `Party | Won | Leading | Total`, with the party page linked
//! from the `Won` cell.

use scraper::{ElementRef, Html};

use super::{ExtractError, absolute_link};
use crate::core::html::{body_rows, cell_text, first_href, first_table};
use crate::core::sanitize::parse_count;
use crate::model::PartySummaryRow;

pub const MIN_CELLS: usize = 4;

pub fn parse_rows(doc: &Html, base: &str) -> Result<Vec<Result<PartySummaryRow, ExtractError>>, ExtractError> {
    let table = first_table(doc).ok_or(ExtractError::MissingTable)?;
    Ok(body_rows(table)
        .filter(|cells| cells.len() >= MIN_CELLS)
        .map(|cells| parse_row(&cells, base))
        .collect())
}

fn parse_row(cells: &[ElementRef<'_>], base: &str) -> Result<PartySummaryRow, ExtractError> {
    let party_name = cell_text(cells[0]);
    let count = |i: usize, field: &'static str| {
        let value = cell_text(cells[i]);
        parse_count(&value).ok_or(ExtractError::BadCount { field, value })
    };
    let won = count(1, "won")?;
    let leading = count(2, "leading")?;
    let total = count(3, "total")?;

    let href = first_href(cells[1])
        .ok_or_else(|| ExtractError::MissingLink { row: party_name.clone() })?;
    let detail_link = absolute_link(base, href)?;

    Ok(PartySummaryRow { party_name, won, leading, total, detail_link })
}
