// src/model.rs
//! Row types produced at each level of the scrape, plus the alliance label.
//!
//! Every type here is built once and never mutated; each pipeline stage
//! hands a fresh `Vec` of them to the next.

use std::fmt;

use serde::Deserialize;
use url::Url;

use crate::store::TableRow;

/// State value used when a constituency page has no parenthesized group.
pub const STATE_UNKNOWN: &str = "Unknown";

/// One party from the summary page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartySummaryRow {
    pub party_name: String,
    pub won: u32,
    pub leading: u32,
    pub total: u32,
    pub detail_link: Url,
}

/// One constituency from a party page, before its state is resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstituencyRow {
    pub sequence_no: String,
    pub constituency_name: String,
    pub winning_candidate: String,
    pub total_votes: String,
    pub margin: String,
    pub constituency_link: Url,
    pub party_name: String,
}

/// Final, denormalized result row.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DetailedResultRow {
    #[serde(rename = "S.No")]
    pub sequence_no: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Parliament Constituency")]
    pub constituency_name: String,
    #[serde(rename = "Winning Candidate")]
    pub winning_candidate: String,
    #[serde(rename = "Total Votes")]
    pub total_votes: String,
    #[serde(rename = "Margin")]
    pub margin: String,
    #[serde(rename = "Party")]
    pub party_name: String,
}

impl ConstituencyRow {
    /// Attach the resolved state; consumes the intermediate row.
    pub fn with_state(self, state: String) -> DetailedResultRow {
        DetailedResultRow {
            sequence_no: self.sequence_no,
            state,
            constituency_name: self.constituency_name,
            winning_candidate: self.winning_candidate,
            total_votes: self.total_votes,
            margin: self.margin,
            party_name: self.party_name,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Alliance {
    Nda,
    Inc,
}

impl Alliance {
    pub fn label(self) -> &'static str {
        match self { Alliance::Nda => "NDA", Alliance::Inc => "INC" }
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllianceRecord {
    pub result: DetailedResultRow,
    pub alliance: Alliance,
}

/* ---------- table shapes ---------- */

impl TableRow for PartySummaryRow {
    const HEADERS: &'static [&'static str] = &["Party", "Won", "Leading", "Total", "Link"];

    fn cells(&self) -> Vec<String> {
        row![self.party_name, self.won, self.leading, self.total, self.detail_link]
    }
}

impl TableRow for DetailedResultRow {
    const HEADERS: &'static [&'static str] = &[
        "S.No", "State", "Parliament Constituency", "Winning Candidate",
        "Total Votes", "Margin", "Party",
    ];

    fn cells(&self) -> Vec<String> {
        row![
            self.sequence_no, self.state, self.constituency_name, self.winning_candidate,
            self.total_votes, self.margin, self.party_name,
        ]
    }
}

impl TableRow for AllianceRecord {
    const HEADERS: &'static [&'static str] = &[
        "S.No", "State", "Parliament Constituency", "Winning Candidate",
        "Total Votes", "Margin", "Party", "Alliance",
    ];

    fn cells(&self) -> Vec<String> {
        let mut cells = self.result.cells();
        cells.push(self.alliance.to_string());
        cells
    }
}
