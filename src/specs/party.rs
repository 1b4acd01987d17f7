// src/specs/party.rs
//! Party page: constituencies won by one party.
//!
//! Columns: `S.No | Constituency | Winning Candidate | Total Votes | Margin`,
//! with the constituency page linked from the second cell.

use scraper::{ElementRef, Html};

use super::{ExtractError, absolute_link};
use crate::core::html::{body_rows, cell_text, first_href, first_table};
use crate::model::ConstituencyRow;

pub const MIN_CELLS: usize = 5;

/// Rows inherit `party_name` from the summary row that linked here.
pub fn parse_rows(
    doc: &Html,
    base: &str,
    party_name: &str,
) -> Result<Vec<Result<ConstituencyRow, ExtractError>>, ExtractError> {
    let table = first_table(doc).ok_or(ExtractError::MissingTable)?;
    Ok(body_rows(table)
        .filter(|cells| cells.len() >= MIN_CELLS)
        .map(|cells| parse_row(&cells, base, party_name))
        .collect())
}

fn parse_row(cells: &[ElementRef<'_>], base: &str, party_name: &str) -> Result<ConstituencyRow, ExtractError> {
    let constituency_name = cell_text(cells[1]);
    let href = first_href(cells[1])
        .ok_or_else(|| ExtractError::MissingLink { row: constituency_name.clone() })?;

    Ok(ConstituencyRow {
        sequence_no: cell_text(cells[0]),
        constituency_link: absolute_link(base, href)?,
        constituency_name,
        winning_candidate: cell_text(cells[2]),
        total_votes: cell_text(cells[3]),
        margin: cell_text(cells[4]),
        party_name: s!(party_name),
    })
}
