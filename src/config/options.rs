// src/config/options.rs
use std::path::PathBuf;

use serde::Deserialize;
use url::Url;

use super::consts::*;
use crate::alliance::MembershipSet;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
    pub alliance: AllianceOptions,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScrapeOptions {
    pub base_url: String,
    pub entry_page: String,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            entry_page: s!(ENTRY_PAGE),
        }
    }
}

impl ScrapeOptions {
    /// Base URL with a guaranteed trailing slash; relative links are
    /// appended to it verbatim.
    pub fn base(&self) -> String {
        let base = self.base_url.trim();
        if base.ends_with('/') { s!(base) } else { format!("{base}/") }
    }

    pub fn entry_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&format!("{}{}", self.base(), self.entry_page.trim()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out_dir: PathBuf,
    pub parties_stem: String,
    pub detailed_stem: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            parties_stem: s!(PARTIES_STEM),
            detailed_stem: s!(DETAILED_STEM),
        }
    }
}

impl ExportOptions {
    pub fn parties_path(&self) -> PathBuf {
        self.file_path(&self.parties_stem)
    }

    pub fn detailed_path(&self) -> PathBuf {
        self.file_path(&self.detailed_stem)
    }

    fn file_path(&self, stem: &str) -> PathBuf {
        self.out_dir.join(format!("{stem}.{}", self.format.ext()))
    }
}

/// Coalition membership. `nda_parties` replaces the built-in list when set;
/// `inc_parties`, when non-empty, turns on reporting of parties that are in
/// neither list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AllianceOptions {
    pub nda_parties: Option<Vec<String>>,
    pub inc_parties: Vec<String>,
}

impl AllianceOptions {
    pub fn nda_set(&self) -> MembershipSet {
        match &self.nda_parties {
            Some(list) => list.iter().cloned().collect(),
            None => MembershipSet::default_nda(),
        }
    }

    pub fn inc_set(&self) -> Option<MembershipSet> {
        if self.inc_parties.is_empty() { return None; }
        Some(self.inc_parties.iter().cloned().collect())
    }
}
