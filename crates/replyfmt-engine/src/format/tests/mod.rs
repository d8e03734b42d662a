//! Integration tests for the format module.
//!
//! Single-line classification cases are parameterized with rstest; the
//! multi-line scenarios and invariants live in plain tests.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::format::{Block, Segment, format_reply};

fn plain(text: &str) -> Segment {
    Segment::Plain(text.to_string())
}

fn emphasized(text: &str) -> Segment {
    Segment::Emphasized(text.to_string())
}

// Single-line classification, one rule per case

#[rstest]
#[case::main_header("## Section One", Block::MainHeader { text: "Section One".to_string() })]
#[case::main_header_ordinal_stripped("## 2. Possible Causes", Block::MainHeader { text: "Possible Causes".to_string() })]
#[case::sub_header("### When to seek care", Block::SubHeader { text: "When to seek care".to_string() })]
#[case::sub_header_retrimmed("###   Padded", Block::SubHeader { text: "Padded".to_string() })]
#[case::bold_header("**Important**", Block::BoldHeader { text: "Important".to_string() })]
#[case::bullet("* rest and fluids", Block::Bullet { text: "rest and fluids".to_string() })]
#[case::numbered_item("1. step one", Block::NumberedItem { text: "1. step one".to_string() })]
#[case::numbered_item_multi_digit("12. follow up", Block::NumberedItem { text: "12. follow up".to_string() })]
#[case::table_row("a | b | c", Block::TableRow { cells: vec!["a".to_string(), "b".to_string(), "c".to_string()] })]
#[case::table_separator("|---|---|", Block::Divider)]
#[case::piped_separator("a|---|b", Block::Divider)]
#[case::dashed_divider("---", Block::Divider)]
#[case::plain_text("just a sentence", Block::PlainText { text: "just a sentence".to_string() })]
#[case::lone_marker_pair("**", Block::PlainText { text: "**".to_string() })]
fn classifies_single_line(#[case] line: &str, #[case] expected: Block) {
    assert_eq!(format_reply(line), vec![expected]);
}

#[test]
fn inline_emphasis_splits_into_runs() {
    assert_eq!(
        format_reply("Value is **bold** here"),
        vec![Block::Text {
            segments: vec![plain("Value is "), emphasized("bold"), plain(" here")],
        }]
    );
}

// Rule precedence

#[test]
fn emphasis_wins_over_table_row() {
    // A piped line with bold markers splits on the markers; the pipes stay
    // inside the plain runs.
    let blocks = format_reply("a | **b** | c");
    assert_eq!(
        blocks,
        vec![Block::Text {
            segments: vec![plain("a | "), emphasized("b"), plain(" | c")],
        }]
    );
}

#[test]
fn triple_star_line_splits_as_emphasis_not_divider() {
    // `***` carries a marker pair, so the emphasis rule claims it before the
    // divider comparison ever runs. No pair closes, so the whole line stays
    // one plain run.
    let blocks = format_reply("***");
    assert_eq!(
        blocks,
        vec![Block::Text {
            segments: vec![plain("***")],
        }]
    );
}

#[test]
fn numbered_item_keeps_its_ordinal() {
    // Ordinals are stripped from `## ` headings only. A numbered list line
    // keeps its digits untouched.
    assert_eq!(
        format_reply("## 1. Overview\n1. drink water"),
        vec![
            Block::MainHeader {
                text: "Overview".to_string()
            },
            Block::NumberedItem {
                text: "1. drink water".to_string()
            },
        ]
    );
}

#[test]
fn bold_header_strips_every_marker() {
    assert_eq!(
        format_reply("**Dosage**note**"),
        vec![Block::BoldHeader {
            text: "Dosagenote".to_string()
        }]
    );
}

// Bare `###` lookahead

#[test]
fn bare_marker_consumes_next_line() {
    let blocks = format_reply("###\nReal Header\nmore text");
    assert_eq!(
        blocks,
        vec![
            Block::SubHeader {
                text: "Real Header".to_string()
            },
            Block::PlainText {
                text: "more text".to_string()
            },
        ]
    );
}

#[test]
fn same_line_subheader_leaves_next_line_alone() {
    let blocks = format_reply("### Sub\nBody");
    assert_eq!(
        blocks,
        vec![
            Block::SubHeader {
                text: "Sub".to_string()
            },
            Block::PlainText {
                text: "Body".to_string()
            },
        ]
    );
}

#[test]
fn bare_marker_before_blank_line_stays_plain() {
    let blocks = format_reply("###\n\ntail");
    assert_eq!(
        blocks,
        vec![
            Block::PlainText {
                text: "###".to_string()
            },
            Block::Blank,
            Block::PlainText {
                text: "tail".to_string()
            },
        ]
    );
}

#[test]
fn bare_marker_before_heading_line_stays_plain() {
    let blocks = format_reply("###\n## Section");
    assert_eq!(
        blocks,
        vec![
            Block::PlainText {
                text: "###".to_string()
            },
            Block::MainHeader {
                text: "Section".to_string()
            },
        ]
    );
}

#[test]
fn bare_marker_at_end_of_input_stays_plain() {
    assert_eq!(
        format_reply("###"),
        vec![Block::PlainText {
            text: "###".to_string()
        }]
    );
}

// Line-splitting conventions

#[test]
fn empty_input_yields_single_blank() {
    assert_eq!(format_reply(""), vec![Block::Blank]);
}

#[test]
fn blank_lines_map_one_to_one() {
    assert_eq!(
        format_reply("\n\n"),
        vec![Block::Blank, Block::Blank, Block::Blank]
    );
}

#[test]
fn trailing_newline_yields_trailing_blank() {
    assert_eq!(
        format_reply("done\n"),
        vec![
            Block::PlainText {
                text: "done".to_string()
            },
            Block::Blank,
        ]
    );
}

#[test]
fn carriage_returns_disappear_with_trimming() {
    assert_eq!(
        format_reply("## Advice\r\nstay hydrated\r\n"),
        vec![
            Block::MainHeader {
                text: "Advice".to_string()
            },
            Block::PlainText {
                text: "stay hydrated".to_string()
            },
            Block::Blank,
        ]
    );
}

#[test]
fn surrounding_whitespace_is_trimmed_before_classification() {
    assert_eq!(
        format_reply("   * padded bullet   "),
        vec![Block::Bullet {
            text: "padded bullet".to_string()
        }]
    );
}

// Table rows

#[test]
fn table_row_drops_empty_cells() {
    assert_eq!(
        format_reply("| Symptom | Severity |"),
        vec![Block::TableRow {
            cells: vec!["Symptom".to_string(), "Severity".to_string()],
        }]
    );
}

// A reply shaped like real generative-API output, end to end

#[test]
fn formats_full_reply() {
    let raw = "## 1. Assessment\n\
               Based on what you describe, this is **most likely** a tension headache.\n\
               \n\
               ###\n\
               Common triggers\n\
               * stress\n\
               * poor sleep\n\
               \n\
               | Trigger | Frequency |\n\
               |---|---|\n\
               | Stress | Daily |\n\
               ---\n\
               1. Keep a symptom diary\n\
               **Not a substitute for professional medical advice**";
    let blocks = format_reply(raw);
    assert_eq!(
        blocks,
        vec![
            Block::MainHeader {
                text: "Assessment".to_string()
            },
            Block::Text {
                segments: vec![
                    plain("Based on what you describe, this is "),
                    emphasized("most likely"),
                    plain(" a tension headache."),
                ],
            },
            Block::Blank,
            Block::SubHeader {
                text: "Common triggers".to_string()
            },
            Block::Bullet {
                text: "stress".to_string()
            },
            Block::Bullet {
                text: "poor sleep".to_string()
            },
            Block::Blank,
            Block::TableRow {
                cells: vec!["Trigger".to_string(), "Frequency".to_string()],
            },
            Block::Divider,
            Block::TableRow {
                cells: vec!["Stress".to_string(), "Daily".to_string()],
            },
            Block::Divider,
            Block::NumberedItem {
                text: "1. Keep a symptom diary".to_string()
            },
            Block::BoldHeader {
                text: "Not a substitute for professional medical advice".to_string()
            },
        ]
    );
    invariants::check(raw, &blocks);
}

#[test]
fn invariants_hold_across_awkward_inputs() {
    let samples = [
        "",
        "\n",
        "###",
        "###\n###\n###",
        "** | --- | **",
        "*no space bullet\n*  double space",
        "Value is **bold** here and ** unclosed",
        "## \n### \n|  |  |",
        "🩺 unicode | cells | 数据",
    ];
    for raw in samples {
        let blocks = format_reply(raw);
        invariants::check(raw, &blocks);
    }
}
