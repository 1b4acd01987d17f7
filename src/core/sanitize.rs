// src/core/sanitize.rs

/// Trim a cell's text. Inner whitespace is kept as-is: party labels are
/// matched exactly and some carry double spaces.
pub fn trim_cell(s: &str) -> String {
    s.trim().to_string()
}

/// Seat counts, tolerant of thousands separators ("1,024").
pub fn parse_count(s: &str) -> Option<u32> {
    let digits: String = s.chars().filter(|c| *c != ',').collect();
    digits.trim().parse().ok()
}

/// Collapse runs of whitespace into one space and trim. For log lines only.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}
