// tests/common/mod.rs
//
// In-memory results site for driving the scraper offline.
//
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use eci_scrape::config::options::ScrapeOptions;
use eci_scrape::core::{Fetch, FetchError};
use eci_scrape::progress::Progress;
use scraper::Html;
use url::Url;

pub const BASE: &str = "http://results.test/run/";

pub enum Page {
    Html(String),
    Status(u16),
    Down,
}

#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, Page>,
    pub visited: RefCell<Vec<String>>,
}

impl FakeSite {
    pub fn new() -> Self { Self::default() }

    /// `path` is relative to `BASE`.
    pub fn page(mut self, path: &str, body: impl Into<String>) -> Self {
        self.pages.insert(format!("{BASE}{path}"), Page::Html(body.into()));
        self
    }

    pub fn status(mut self, path: &str, status: u16) -> Self {
        self.pages.insert(format!("{BASE}{path}"), Page::Status(status));
        self
    }

    pub fn down(mut self, path: &str) -> Self {
        self.pages.insert(format!("{BASE}{path}"), Page::Down);
        self
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().iter().map(|u| u.trim_start_matches(BASE).to_string()).collect()
    }
}

impl Fetch for FakeSite {
    fn fetch(&self, url: &Url) -> Result<Html, FetchError> {
        self.visited.borrow_mut().push(url.to_string());
        match self.pages.get(url.as_str()) {
            Some(Page::Html(body)) => Ok(Html::parse_document(body)),
            Some(Page::Status(status)) => Err(FetchError::Status { url: url.clone(), status: *status }),
            Some(Page::Down) | None => Err(FetchError::Transport {
                url: url.clone(),
                source: "connection refused".into(),
            }),
        }
    }
}

pub fn options() -> ScrapeOptions {
    ScrapeOptions { base_url: BASE.into(), entry_page: "index.htm".into() }
}

/// Document with one table: a header row followed by `rows`, each given as
/// raw `<td>` inner HTML.
pub fn table_page(header: &[&str], rows: &[&[&str]]) -> String {
    let mut html = String::from("<html><head><title>Results</title></head><body><table>\n<tr>");
    for h in header {
        html.push_str(&format!("<th>{h}</th>"));
    }
    html.push_str("</tr>\n");
    for row in rows {
        html.push_str("<tr>");
        for cell in *row {
            html.push_str(&format!("<td>{cell}</td>"));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table></body></html>");
    html
}

pub fn summary_page(rows: &[&[&str]]) -> String {
    table_page(&["Party", "Won", "Leading", "Total"], rows)
}

pub fn party_page(rows: &[&[&str]]) -> String {
    table_page(&["S.No", "Parliament Constituency", "Winning Candidate", "Total Votes", "Margin"], rows)
}

pub fn constituency_page(heading: &str) -> String {
    format!("<html><head><title>Constituency</title></head><body><h2>{heading}</h2><p>Result status</p></body></html>")
}

/// Records every progress callback as a line.
#[derive(Default)]
pub struct Recorder {
    pub events: Vec<String>,
}

impl Progress for Recorder {
    fn begin(&mut self, parties: usize) { self.events.push(format!("begin {parties}")); }
    fn log(&mut self, msg: &str) { self.events.push(format!("log {msg}")); }
    fn item_done(&mut self, label: &str) { self.events.push(format!("done {label}")); }
    fn item_failed(&mut self, label: &str) { self.events.push(format!("failed {label}")); }
    fn finish(&mut self) { self.events.push("finish".into()); }
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("eci_scrape_{name}"));
    let _ = std::fs::remove_dir_all(&p);
    std::fs::create_dir_all(&p).unwrap();
    p
}
