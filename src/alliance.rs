// src/alliance.rs
//! Coalition tagging.
//!
//! `tag` is pure and total: a party is NDA when its label is in the
//! membership set (exact match), INC otherwise. `tag_file` applies it to a
//! detailed-results table on disk and overwrites that table in place.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{info, warn};

use crate::config::options::ExportFormat;
use crate::file::{self, TableError};
use crate::model::{Alliance, AllianceRecord, DetailedResultRow};

/// Built-in NDA labels, exactly as the results site prints them.
const NDA_PARTIES: &[&str] = &[
    "Bharatiya Janata Party - BJP",
    "Telugu Desam - TDP",
    "Janata Dal (United) - JD(U)",
    "Shiv Sena - SHS",
    "Shiv Sena (Uddhav Balasaheb Thackrey) - SHSUBT",
    "Lok Janshakti Party (Ram Vilas) - LJPRV",
    "Nationalist Congress Party – Sharadchandra Pawar - NCPSP",
    "Janata Dal  (Secular) - JD(S)",
    "Apna Dal (Soneylal) - ADAL",
    "Asom Gana Parishad - AGP",
    "Janasena Party - JnP",
    "Rashtriya Lok Dal - RLD",
    "AJSU Party - AJSUP",
    "Hindustani Awam Morcha (Secular) - HAMS",
    "Sikkim Krantikari Morcha - SKM",
    "United People’s Party, Liberal - UPPL",
    "Independent - IND",
    "Viduthalai Chiruthaigal Katchi - VCK",
    "Jammu & Kashmir National Conference - JKN",
];

/// Exact-match set of party labels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MembershipSet(BTreeSet<String>);

impl MembershipSet {
    pub fn default_nda() -> Self {
        NDA_PARTIES.iter().map(|p| s!(*p)).collect()
    }

    pub fn contains(&self, party: &str) -> bool {
        self.0.contains(party)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl FromIterator<String> for MembershipSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

pub fn classify(party: &str, nda: &MembershipSet) -> Alliance {
    if nda.contains(party) { Alliance::Nda } else { Alliance::Inc }
}

pub fn tag(records: &[DetailedResultRow], nda: &MembershipSet) -> Vec<AllianceRecord> {
    records
        .iter()
        .map(|r| AllianceRecord { result: r.clone(), alliance: classify(&r.party_name, nda) })
        .collect()
}

/// Per-alliance counts after tagging.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllianceTally {
    pub nda: usize,
    pub inc: usize,
    /// Parties counted as INC only because they are not NDA, and that are
    /// also missing from the explicit INC list. Empty when no INC list is
    /// configured.
    pub unlisted: BTreeSet<String>,
}

impl AllianceTally {
    pub fn count(records: &[AllianceRecord], inc: Option<&MembershipSet>) -> Self {
        let mut tally = Self::default();
        for r in records {
            match r.alliance {
                Alliance::Nda => tally.nda += 1,
                Alliance::Inc => {
                    tally.inc += 1;
                    if let Some(inc) = inc {
                        if !inc.contains(&r.result.party_name) {
                            tally.unlisted.insert(r.result.party_name.clone());
                        }
                    }
                }
            }
        }
        tally
    }
}

/// Tag the detailed table at `path` and overwrite it with the `Alliance`
/// column added. An existing `Alliance` column is ignored and re-derived.
pub fn tag_file(
    path: &Path,
    format: ExportFormat,
    nda: &MembershipSet,
    inc: Option<&MembershipSet>,
) -> Result<AllianceTally, TableError> {
    let records = file::read_detailed(path, format)?;
    let tagged = tag(&records, nda);
    let tally = AllianceTally::count(&tagged, inc);

    for party in &tally.unlisted {
        warn!(party = %party, "party is in neither membership list; counted as INC");
    }

    file::write_table(path, format, &tagged)?;
    info!(path = %path.display(), nda = tally.nda, inc = tally.inc, "alliance column written");
    Ok(tally)
}
