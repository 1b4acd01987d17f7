use criterion::{Criterion, black_box, criterion_group, criterion_main};
use scraper::Html;

use eci_scrape::specs::{constituency, party, summary};

const BASE: &str = "https://results.eci.gov.in/PcResultGenJune2024/";

fn summary_doc(parties: usize) -> String {
    let mut html = String::from("<html><body><table><tr><th>Party</th><th>Won</th><th>Leading</th><th>Total</th></tr>");
    for i in 0..parties {
        html.push_str(&format!(
            "<tr><td>Party {i} - P{i}</td><td><a href=\"partywisewinresult-{i}S.htm\">{i}</a></td><td>0</td><td>{i}</td></tr>"
        ));
    }
    html.push_str("</table></body></html>");
    html
}

fn party_doc(rows: usize) -> String {
    let mut html = String::from("<html><body><table><tr><th>S.No</th><th>PC</th><th>Winner</th><th>Votes</th><th>Margin</th></tr>");
    for i in 0..rows {
        html.push_str(&format!(
            "<tr><td>{i}</td><td><a href=\"Constituencywise-S{i}.htm\">Constituency {i}</a></td><td>Candidate {i}</td><td>{}</td><td>{}</td></tr>",
            500_000 + i,
            10_000 + i
        ));
    }
    html.push_str("</table></body></html>");
    html
}

fn bench_specs(c: &mut Criterion) {
    let summary_html = summary_doc(45);
    let party_html = party_doc(240);
    let constituency_html = "<html><head><script>var x = f(1);</script></head>\
        <body><h2>Bangalore Central (Karnataka)</h2><p>Result declared</p></body></html>";

    c.bench_function("summary_parse", |b| {
        b.iter(|| {
            let doc = Html::parse_document(black_box(&summary_html));
            black_box(summary::parse_rows(&doc, BASE).map(|r| r.len()).unwrap_or(0))
        })
    });

    c.bench_function("party_parse", |b| {
        b.iter(|| {
            let doc = Html::parse_document(black_box(&party_html));
            black_box(party::parse_rows(&doc, BASE, "Party 1 - P1").map(|r| r.len()).unwrap_or(0))
        })
    });

    c.bench_function("constituency_state", |b| {
        b.iter(|| {
            let doc = Html::parse_document(black_box(constituency_html));
            black_box(constituency::parse_state(&doc))
        })
    });
}

criterion_group!(benches, bench_specs);
criterion_main!(benches);
