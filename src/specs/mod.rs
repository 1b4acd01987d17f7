// src/specs/mod.rs
//! # Page specs
//!
//! One module per page kind on the results site. Each knows *where the data
//! lives in that page's HTML* and turns an already-fetched document into
//! typed rows. Nothing here does networking, logging policy, or I/O.
//!
//! ## Pages
//! - `summary` – entry page; one row per party with seat counts and a link
//!   to the party page.
//! - `party` – one row per constituency won by that party, each linking to
//!   the constituency page.
//! - `constituency` – free text; the state is the first parenthesized group.
//!
//! ## Conventions
//! - First `<table>` in the document, header row skipped, `<td>` cells by
//!   index.
//! - Rows with too few cells are not errors: they are filtered out before a
//!   row result is produced.
//! - Each remaining row yields its own `Result`, so the caller decides
//!   whether a bad row stops the page or just drops that row.
//! - Relative links are appended to the base URL as plain strings.

use thiserror::Error;
use url::Url;

pub mod constituency;
pub mod party;
pub mod summary;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no <table> in page")]
    MissingTable,
    #[error("no link in row {row:?}")]
    MissingLink { row: String },
    #[error("{field} is not a count: {value:?}")]
    BadCount { field: &'static str, value: String },
    #[error("bad link {href:?}: {source}")]
    BadLink { href: String, source: url::ParseError },
}

/// `base` + `href`, verbatim concatenation.
pub fn absolute_link(base: &str, href: &str) -> Result<Url, ExtractError> {
    let href = href.trim();
    Url::parse(&format!("{base}{href}"))
        .map_err(|source| ExtractError::BadLink { href: s!(href), source })
}
