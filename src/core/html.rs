// src/core/html.rs
// Table walking over a parsed document. Layout knowledge stays minimal:
// first <table>, rows after the header row, <td> cells by index.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::sanitize::trim_cell;

static TABLE: LazyLock<Selector> = LazyLock::new(|| parse_selector("table"));
static TR: LazyLock<Selector> = LazyLock::new(|| parse_selector("tr"));
static TD: LazyLock<Selector> = LazyLock::new(|| parse_selector("td"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| parse_selector("a"));

// Elements whose text never renders.
const HIDDEN: &[&str] = &["script", "style", "template"];

fn parse_selector(css: &'static str) -> Selector {
    // Only ever called with the literals above.
    Selector::parse(css).unwrap_or_else(|e| panic!("bad built-in selector {css:?}: {e}"))
}

pub fn first_table(doc: &Html) -> Option<ElementRef<'_>> {
    doc.select(&TABLE).next()
}

/// Every `<tr>` after the first, as its `<td>` cells.
pub fn body_rows<'a>(table: ElementRef<'a>) -> impl Iterator<Item = Vec<ElementRef<'a>>> + 'a {
    table
        .select(&TR)
        .skip(1)
        .map(|tr| tr.select(&TD).collect())
}

pub fn cell_text(cell: ElementRef<'_>) -> String {
    trim_cell(&cell.text().collect::<String>())
}

/// `href` of the first anchor inside `cell`; `None` when that anchor has
/// no `href`, even if a later one does.
pub fn first_href<'a>(cell: ElementRef<'a>) -> Option<&'a str> {
    cell.select(&ANCHOR).next()?.value().attr("href")
}

/// All rendered text of the document, in document order.
pub fn visible_text(doc: &Html) -> String {
    let mut out = s!();
    for node in doc.root_element().descendants() {
        let Some(text) = node.value().as_text() else { continue };
        let hidden = node.ancestors().any(|a| {
            a.value()
                .as_element()
                .is_some_and(|e| HIDDEN.contains(&e.name()))
        });
        if !hidden {
            out.push_str(text);
        }
    }
    out
}
