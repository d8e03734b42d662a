use std::sync::OnceLock;

use regex::Regex;

use super::block::Segment;

/// A closed pair of emphasis markers with the shortest possible content.
fn marker_pair() -> &'static Regex {
    static MARKER_PAIR: OnceLock<Regex> = OnceLock::new();
    MARKER_PAIR.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("invalid marker-pair regex"))
}

/// Splits a line on paired `**` markers into alternating plain/emphasized
/// runs.
///
/// Text between pairs stays plain, captured text becomes emphasized, and
/// empty runs are kept. An unmatched trailing `**` never closes a pair and
/// stays inside the final plain run.
pub fn split_emphasis(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest_start = 0;

    for caps in marker_pair().captures_iter(line) {
        let full = caps.get(0).expect("group 0 always present");
        segments.push(Segment::Plain(line[rest_start..full.start()].to_string()));
        segments.push(Segment::Emphasized(caps[1].to_string()));
        rest_start = full.end();
    }
    segments.push(Segment::Plain(line[rest_start..].to_string()));

    segments
}
