//! Flowable content model and line breaking
//!
//! Paragraphs are broken into lines against the frame width before any PDF
//! operators are emitted. Breaks happen at regular spaces only: non-breaking
//! spaces keep measured padding intact, and a word that straddles a span
//! boundary (a bold label running straight into roman text, say) wraps as
//! one unit.

use crate::pdf::font::{self, Font};
use crate::style::{Alignment, ParagraphStyle};

/// A run of text sharing one face and decoration
#[derive(Debug, Clone)]
pub struct Span {
    pub text: String,
    pub font: Font,
    pub underline: bool,
    pub link: Option<String>,
}

impl Span {
    pub fn new(text: impl Into<String>, font: Font) -> Self {
        Self {
            text: text.into(),
            font,
            underline: false,
            link: None,
        }
    }

    pub fn underlined(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn linked(mut self, uri: impl Into<String>) -> Self {
        self.link = Some(uri.into());
        self
    }
}

/// A styled sequence of spans flowed as one block
#[derive(Debug, Clone)]
pub struct Paragraph {
    pub spans: Vec<Span>,
    pub style: ParagraphStyle,
}

impl Paragraph {
    pub fn new(spans: Vec<Span>, style: ParagraphStyle) -> Self {
        Self { spans, style }
    }

    /// Single-span convenience constructor
    pub fn text(text: impl Into<String>, style: ParagraphStyle) -> Self {
        Self::new(vec![Span::new(text, style.font)], style)
    }
}

/// One unit of vertical flow
#[derive(Debug, Clone)]
pub enum Element {
    Paragraph(Paragraph),
    /// Vertical gap in points
    Spacer(f64),
    /// Frame-wide horizontal rule with the given thickness in points
    Rule { thickness: f64 },
}

/// A placed piece of text in a single face, measured and ready to emit
#[derive(Debug, Clone)]
pub struct Fragment {
    pub text: String,
    pub font: Font,
    pub size: f64,
    pub underline: bool,
    pub link: Option<String>,
    pub width: f64,
}

/// An unbreakable unit: one or more fragments with no space between them
#[derive(Debug, Clone)]
struct Word {
    parts: Vec<Fragment>,
    width: f64,
}

/// A laid-out line: fragments with x offsets from the frame's left edge
#[derive(Debug, Clone)]
pub struct Line {
    pub fragments: Vec<(f64, Fragment)>,
}

impl Line {
    /// X coordinate of the right edge of the last fragment
    pub fn right_edge(&self) -> f64 {
        self.fragments
            .last()
            .map(|(x, frag)| x + frag.width)
            .unwrap_or(0.0)
    }
}

/// Break a paragraph into lines that fit the frame width and place every
/// fragment according to the style's alignment.
pub fn break_paragraph(paragraph: &Paragraph, frame_width: f64) -> Vec<Line> {
    let style = &paragraph.style;
    let words = split_words(paragraph);

    // Greedy fill: raw lines hold (offset-from-line-start, word)
    let mut raw_lines: Vec<Vec<(f64, Word)>> = Vec::new();
    let mut current: Vec<(f64, Word)> = Vec::new();
    let mut current_width = 0.0;

    let avail = |is_first: bool| {
        let indent = style.left_indent + if is_first { style.first_line_indent } else { 0.0 };
        frame_width - indent
    };

    for word in words {
        let gap = match current.last() {
            Some((_, prev)) => {
                let prev_font = prev.parts.last().map(|p| p.font).unwrap_or(style.font);
                font::text_width(" ", prev_font, style.size)
            }
            None => 0.0,
        };
        let is_first = raw_lines.is_empty();
        if !current.is_empty() && current_width + gap + word.width > avail(is_first) {
            raw_lines.push(std::mem::take(&mut current));
            current_width = 0.0;
        }
        let gap = if current.is_empty() { 0.0 } else { gap };
        let offset = current_width + gap;
        current_width = offset + word.width;
        current.push((offset, word));
    }
    raw_lines.push(current);

    let line_count = raw_lines.len();
    raw_lines
        .into_iter()
        .enumerate()
        .map(|(i, words)| {
            let is_first = i == 0;
            let is_last = i == line_count - 1;
            place_line(words, style, frame_width, is_first, is_last)
        })
        .collect()
}

/// Tokenize the paragraph into unbreakable words.
///
/// Regular spaces separate words (runs of them collapse); a span boundary
/// with no space on either side continues the current word, so mixed-face
/// words hold together. Non-breaking spaces are ordinary characters here.
fn split_words(paragraph: &Paragraph) -> Vec<Word> {
    let size = paragraph.style.size;
    fn close(current: &mut Vec<Fragment>, words: &mut Vec<Word>) {
        if !current.is_empty() {
            let parts = std::mem::take(current);
            let width = parts.iter().map(|p| p.width).sum();
            words.push(Word { parts, width });
        }
    }

    let mut words: Vec<Word> = Vec::new();
    let mut current: Vec<Fragment> = Vec::new();

    for span in &paragraph.spans {
        for (i, piece) in span.text.split(' ').enumerate() {
            if i > 0 {
                close(&mut current, &mut words);
            }
            if !piece.is_empty() {
                current.push(Fragment {
                    text: piece.to_string(),
                    font: span.font,
                    size,
                    underline: span.underline,
                    link: span.link.clone(),
                    width: font::text_width(piece, span.font, size),
                });
            }
        }
    }
    close(&mut current, &mut words);

    words
}

/// Apply indents and alignment to one raw line, then flatten words into
/// positioned fragments.
fn place_line(
    words: Vec<(f64, Word)>,
    style: &ParagraphStyle,
    frame_width: f64,
    is_first: bool,
    is_last: bool,
) -> Line {
    let indent = style.left_indent + if is_first { style.first_line_indent } else { 0.0 };
    let avail = frame_width - indent;
    let natural = words
        .last()
        .map(|(x, word)| x + word.width)
        .unwrap_or(0.0);

    let placed: Vec<(f64, Word)> = match style.alignment {
        Alignment::Left => shift(words, indent),
        Alignment::Center => shift(words, indent + ((avail - natural) / 2.0).max(0.0)),
        Alignment::Justify => {
            let gaps = words.len().saturating_sub(1);
            let extra = avail - natural;
            if is_last || gaps == 0 || extra <= 0.0 {
                shift(words, indent)
            } else {
                // widen every word gap equally so the line fills the frame
                let bonus = extra / gaps as f64;
                words
                    .into_iter()
                    .enumerate()
                    .map(|(i, (x, word))| (indent + x + bonus * i as f64, word))
                    .collect()
            }
        }
    };

    let mut fragments = Vec::new();
    for (word_x, word) in placed {
        let mut dx = 0.0;
        for part in word.parts {
            let width = part.width;
            fragments.push((word_x + dx, part));
            dx += width;
        }
    }

    Line { fragments }
}

fn shift(words: Vec<(f64, Word)>, offset: f64) -> Vec<(f64, Word)> {
    words
        .into_iter()
        .map(|(x, word)| (x + offset, word))
        .collect()
}
