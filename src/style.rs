//! Paragraph styles for the fixed CV layout
//!
//! Styling is plain immutable data built once and passed by reference into
//! content building and rendering; nothing here is global or mutable.

use crate::layout::Length;
use crate::pdf::font::Font;

/// Horizontal alignment of a paragraph's lines within the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    /// Extra width distributed across word gaps on all but the last line
    Justify,
}

/// Bullet glyph drawn to the left of a paragraph's first line
#[derive(Debug, Clone, Copy)]
pub struct Bullet {
    pub glyph: char,
    /// Offset of the glyph from the frame's left edge, in points
    pub indent: f64,
}

/// Everything needed to lay out one paragraph
#[derive(Debug, Clone, Copy)]
pub struct ParagraphStyle {
    pub font: Font,
    /// Font size in points
    pub size: f64,
    /// Baseline-to-baseline distance in points
    pub leading: f64,
    pub alignment: Alignment,
    /// Additional indent of the first line, in points
    pub first_line_indent: f64,
    /// Indent of every line from the frame's left edge, in points
    pub left_indent: f64,
    pub bullet: Option<Bullet>,
}

impl ParagraphStyle {
    fn new(font: Font, alignment: Alignment) -> Self {
        const SIZE: f64 = 12.0;
        Self {
            font,
            size: SIZE,
            leading: SIZE * 1.2,
            alignment,
            first_line_indent: 0.0,
            left_indent: 0.0,
            bullet: None,
        }
    }
}

/// The fixed set of styles the CV uses
#[derive(Debug, Clone)]
pub struct StyleSheet {
    /// Name and contact lines: bold, centered
    pub title: ParagraphStyle,
    /// Introduction blurb: italic, justified, indented first line
    pub description: ParagraphStyle,
    /// Section headings: bold, centered
    pub segment_title: ParagraphStyle,
    /// Body text: left-aligned
    pub normal: ParagraphStyle,
    /// Top-level bullet items
    pub bullet: ParagraphStyle,
    /// Bullet items nested under a body line
    pub bullet_indented: ParagraphStyle,
}

impl Default for StyleSheet {
    fn default() -> Self {
        let quarter_inch = Length::from_inches(0.25).pt();
        let half_inch = Length::from_inches(0.5).pt();

        Self {
            title: ParagraphStyle::new(Font::TimesBold, Alignment::Center),
            description: ParagraphStyle {
                first_line_indent: half_inch,
                ..ParagraphStyle::new(Font::TimesItalic, Alignment::Justify)
            },
            segment_title: ParagraphStyle::new(Font::TimesBold, Alignment::Center),
            normal: ParagraphStyle::new(Font::TimesRoman, Alignment::Left),
            bullet: ParagraphStyle {
                left_indent: quarter_inch,
                bullet: Some(Bullet {
                    glyph: '\u{2022}',
                    indent: 0.0,
                }),
                ..ParagraphStyle::new(Font::TimesRoman, Alignment::Justify)
            },
            bullet_indented: ParagraphStyle {
                left_indent: half_inch,
                bullet: Some(Bullet {
                    glyph: '\u{2022}',
                    indent: quarter_inch,
                }),
                ..ParagraphStyle::new(Font::TimesRoman, Alignment::Justify)
            },
        }
    }
}
