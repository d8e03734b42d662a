//! Turns a raw assistant reply into typed display blocks.
//!
//! The reply text follows the loose markdown-ish conventions a
//! generative-language API emits; this is not a compliant markdown parser.
//! Classification is line-oriented: each line is trimmed and matched against
//! a fixed rule order, first match wins.

mod block;
mod inline;

pub use block::{Block, Segment};
pub use inline::split_emphasis;

#[cfg(test)]
mod tests;

use std::sync::OnceLock;

use regex::Regex;

/// An ordinal at the start of a numbered list line (`12.` and the rest).
fn numbered_item() -> &'static Regex {
    static NUMBERED_ITEM: OnceLock<Regex> = OnceLock::new();
    NUMBERED_ITEM.get_or_init(|| Regex::new(r"^\d+\.").expect("invalid numbered-item regex"))
}

/// An ordinal prefix left inside `## ` heading text (`1. ` plus trailing
/// whitespace).
fn heading_ordinal() -> &'static Regex {
    static HEADING_ORDINAL: OnceLock<Regex> = OnceLock::new();
    HEADING_ORDINAL.get_or_init(|| Regex::new(r"^\d+\.\s*").expect("invalid heading-ordinal regex"))
}

/// Formats one assistant reply into an ordered sequence of display blocks.
///
/// Single forward pass over the reply's lines. Every line maps to exactly one
/// block, except the bare-`###` heading form, which consumes the marker line
/// and the heading text on the line after it as one [`Block::SubHeader`].
///
/// Total over any input: unrecognized lines come back as
/// [`Block::PlainText`], so the function never fails.
pub fn format_reply(raw: &str) -> Vec<Block> {
    let lines: Vec<&str> = raw.split('\n').collect();
    let mut blocks = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let trimmed = lines[i].trim();

        if trimmed.is_empty() {
            blocks.push(Block::Blank);
            i += 1;
            continue;
        }

        // Bare `###` marker: the heading text lives on the following line,
        // unless that line is blank or opens its own construct. Both lines
        // collapse into one subheader.
        if trimmed == "###" && i + 1 < lines.len() {
            let next = lines[i + 1].trim();
            if !next.is_empty() && !next.starts_with("##") && !next.starts_with("**") {
                blocks.push(Block::SubHeader {
                    text: next.to_string(),
                });
                i += 2;
                continue;
            }
        }

        blocks.push(classify_line(trimmed));
        i += 1;
    }

    blocks
}

/// Classifies one trimmed, non-empty line into a block.
///
/// Rule order is load-bearing: a piped table line that also carries `**`
/// markers classifies as [`Block::Text`] because the emphasis rule runs
/// first, and heading ordinals are stripped from `## ` lines only, never
/// from numbered list lines.
fn classify_line(trimmed: &str) -> Block {
    if let Some(rest) = trimmed.strip_prefix("## ") {
        return Block::MainHeader {
            text: heading_ordinal().replace(rest, "").into_owned(),
        };
    }

    if let Some(rest) = trimmed.strip_prefix("### ") {
        return Block::SubHeader {
            text: rest.trim().to_string(),
        };
    }

    // A line fully wrapped in markers is a heading of its own. The bounds
    // check keeps a lone `**` from counting its two characters as both the
    // opening and the closing marker.
    if trimmed.len() >= 4 && trimmed.starts_with("**") && trimmed.ends_with("**") {
        return Block::BoldHeader {
            text: trimmed.replace("**", ""),
        };
    }

    if trimmed.contains("**") && trimmed != "**" {
        return Block::Text {
            segments: split_emphasis(trimmed),
        };
    }

    if let Some(rest) = trimmed.strip_prefix("* ") {
        return Block::Bullet {
            text: rest.to_string(),
        };
    }

    if numbered_item().is_match(trimmed) {
        return Block::NumberedItem {
            text: trimmed.to_string(),
        };
    }

    if trimmed.contains('|') {
        // A piped separator line stands in for a horizontal rule.
        if trimmed.contains("---") {
            return Block::Divider;
        }
        return Block::TableRow {
            cells: trimmed
                .split('|')
                .map(str::trim)
                .filter(|cell| !cell.is_empty())
                .map(str::to_string)
                .collect(),
        };
    }

    if trimmed == "---" || trimmed == "***" {
        return Block::Divider;
    }

    Block::PlainText {
        text: trimmed.to_string(),
    }
}
