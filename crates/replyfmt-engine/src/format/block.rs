use serde::Serialize;

/// One classified unit of formatted output, derived from one input line
/// (two for the bare-`###` heading form).
///
/// The rendering layer maps each variant onto a presentational element;
/// the engine itself never touches a UI framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    /// An empty line, kept so the renderer preserves vertical spacing.
    Blank,
    /// Section heading from a `## ` line. Any `1. `-style ordinal left in
    /// the heading text is stripped.
    MainHeader { text: String },
    /// Secondary heading, from a `### ` line or from a bare `###` line
    /// merged with the heading text on the line after it.
    SubHeader { text: String },
    /// A whole line wrapped in `**` markers, markers removed.
    BoldHeader { text: String },
    /// A line carrying inline `**` emphasis, split into ordered runs.
    Text { segments: Vec<Segment> },
    /// A `* ` list line with the marker removed.
    Bullet { text: String },
    /// A `1.`-style list line, kept verbatim including its ordinal.
    NumberedItem { text: String },
    /// A piped line split into trimmed, non-empty cells.
    TableRow { cells: Vec<String> },
    /// Horizontal separator, from `---`/`***` or a piped separator line.
    Divider,
    /// Any line the other rules don't claim, trimmed.
    PlainText { text: String },
}

/// An inline run inside a [`Block::Text`] line.
///
/// Runs alternate plain/emphasized in source order. Splitting keeps empty
/// runs, so a line that opens with a marker pair carries an empty leading
/// `Plain` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Segment {
    Plain(String),
    Emphasized(String),
}
