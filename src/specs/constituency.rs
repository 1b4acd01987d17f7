// src/specs/constituency.rs
//! Constituency page. The only thing read from it is the state, which the
//! page prints in parentheses after the constituency name, e.g.
//! `Bangalore Central (Karnataka)`.

use scraper::Html;

use crate::core::html::visible_text;
use crate::model::STATE_UNKNOWN;

pub fn parse_state(doc: &Html) -> String {
    state_from_text(&visible_text(doc))
}

/// Text after the first `(` up to the next `)`, or to the end when no `)`
/// follows it. `Unknown` when the text lacks either delimiter.
pub fn state_from_text(text: &str) -> String {
    if !text.contains(')') {
        return s!(STATE_UNKNOWN);
    }
    match text.split_once('(') {
        Some((_, after)) => s!(after.split_once(')').map_or(after, |(state, _)| state)),
        None => s!(STATE_UNKNOWN),
    }
}
