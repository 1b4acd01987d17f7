// src/scrape.rs
//! Three-level traversal: summary page → party pages → constituency pages.
//!
//! Failure isolation is per item. A party page that cannot be fetched or
//! has no table removes that party; a bad constituency row or an
//! unreachable constituency page removes that row. Only the entry page is
//! fatal. Nothing is retried.
//!
//! Traversal is sequential and nested: each party's constituency pages are
//! visited before the next party page is fetched. Every step returns a
//! fresh `Vec`; failures are logged and filtered out.

use thiserror::Error;
use tracing::{error, info, warn};
use url::Url;

use crate::{
    config::options::ScrapeOptions,
    core::{Fetch, FetchError, sanitize::normalize_ws},
    model::{ConstituencyRow, DetailedResultRow, PartySummaryRow},
    progress::Progress,
    specs::{constituency, party, summary},
};

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid entry URL {url:?}: {source}")]
    EntryUrl { url: String, source: url::ParseError },
    #[error("cannot fetch entry page: {0}")]
    EntryPoint(#[source] FetchError),
}

/// Everything one run produced. Either list may be partial or empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrapeReport {
    pub parties: Vec<PartySummaryRow>,
    pub results: Vec<DetailedResultRow>,
}

pub struct Scraper<F> {
    fetcher: F,
    base: String,
    entry: Url,
}

impl<F: Fetch> Scraper<F> {
    pub fn new(fetcher: F, opts: &ScrapeOptions) -> Result<Self, ScrapeError> {
        let entry = opts.entry_url().map_err(|source| ScrapeError::EntryUrl {
            url: format!("{}{}", opts.base(), opts.entry_page),
            source,
        })?;
        Ok(Self { fetcher, base: opts.base(), entry })
    }

    pub fn entry_url(&self) -> &Url { &self.entry }

    pub fn run(&self, mut progress: Option<&mut (dyn Progress + '_)>) -> Result<ScrapeReport, ScrapeError> {
        let parties = match self.summary() {
            Ok(parties) => parties,
            Err(e) => {
                error!(error = %e, "scrape aborted");
                if let Some(p) = progress.as_deref_mut() { p.finish(); }
                return Err(e);
            }
        };
        if let Some(p) = progress.as_deref_mut() {
            p.begin(parties.len());
        }

        let results: Vec<DetailedResultRow> = parties
            .iter()
            .flat_map(|party| self.party_results(party, progress.as_deref_mut()))
            .collect();

        info!(parties = parties.len(), rows = results.len(), "scrape finished");
        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        Ok(ScrapeReport { parties, results })
    }

    /// Stage 1. A row that fails to parse ends extraction; rows before it
    /// are kept.
    pub fn summary(&self) -> Result<Vec<PartySummaryRow>, ScrapeError> {
        info!(url = %self.entry, "fetching summary page");
        let doc = self.fetcher.fetch(&self.entry).map_err(ScrapeError::EntryPoint)?;

        let rows = match summary::parse_rows(&doc, &self.base) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, "error extracting party data");
                return Ok(Vec::new());
            }
        };

        let mut failure = None;
        let parties: Vec<PartySummaryRow> = rows
            .into_iter()
            .map_while(|row| row.map_err(|e| failure = Some(e)).ok())
            .collect();
        if let Some(e) = failure {
            warn!(error = %e, kept = parties.len(), "error extracting party data; remaining rows skipped");
        }
        Ok(parties)
    }

    /// Stages 2 and 3 for one party.
    fn party_results(
        &self,
        party: &PartySummaryRow,
        mut progress: Option<&mut (dyn Progress + '_)>,
    ) -> Vec<DetailedResultRow> {
        self.constituency_rows(party, progress.as_deref_mut())
            .into_iter()
            .filter_map(|row| {
                let label = normalize_ws(&row.constituency_name);
                match self.resolve_state(row) {
                    Ok(result) => {
                        if let Some(p) = progress.as_deref_mut() { p.item_done(&label); }
                        Some(result)
                    }
                    Err(e) => {
                        warn!(constituency = %label, error = %e, "constituency page skipped");
                        if let Some(p) = progress.as_deref_mut() { p.item_failed(&label); }
                        None
                    }
                }
            })
            .collect()
    }

    /// Stage 2.
    pub fn constituency_rows(
        &self,
        party: &PartySummaryRow,
        mut progress: Option<&mut (dyn Progress + '_)>,
    ) -> Vec<ConstituencyRow> {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching details for party: {} from {}", party.party_name, party.detail_link));
        }

        let doc = match self.fetcher.fetch(&party.detail_link) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(party = %party.party_name, error = %e, "party page skipped");
                if let Some(p) = progress.as_deref_mut() { p.item_failed(&party.party_name); }
                return Vec::new();
            }
        };

        match party::parse_rows(&doc, &self.base, &party.party_name) {
            Ok(rows) => rows
                .into_iter()
                .filter_map(|row| {
                    row.inspect_err(|e| {
                        warn!(party = %party.party_name, error = %e, "constituency row dropped");
                        if let Some(p) = progress.as_deref_mut() {
                            p.item_failed(&format!("{}: {e}", party.party_name));
                        }
                    })
                    .ok()
                })
                .collect(),
            Err(e) => {
                warn!(party = %party.party_name, error = %e, "error extracting details for party");
                if let Some(p) = progress.as_deref_mut() { p.item_failed(&party.party_name); }
                Vec::new()
            }
        }
    }

    /// Stage 3.
    pub fn resolve_state(&self, row: ConstituencyRow) -> Result<DetailedResultRow, FetchError> {
        let doc = self.fetcher.fetch(&row.constituency_link)?;
        let state = constituency::parse_state(&doc);
        Ok(row.with_state(state))
    }
}
