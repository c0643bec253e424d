//! Core-font metrics and text encoding
//!
//! The CV uses three Times faces, all among the fourteen standard PDF fonts,
//! so no font program is embedded and the viewer supplies the glyphs. Layout
//! still has to measure text itself, so the Adobe AFM advance widths for the
//! printable WinAnsi range are compiled in. Widths are in 1/1000ths of the
//! font size.

/// One of the standard Times faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    TimesRoman,
    TimesBold,
    TimesItalic,
}

impl Font {
    /// PostScript name used in the font dictionary
    pub fn base_name(&self) -> &'static str {
        match self {
            Font::TimesRoman => "Times-Roman",
            Font::TimesBold => "Times-Bold",
            Font::TimesItalic => "Times-Italic",
        }
    }

    /// Resource name content streams select the font by
    pub fn resource_name(&self) -> &'static str {
        match self {
            Font::TimesRoman => "F1",
            Font::TimesBold => "F2",
            Font::TimesItalic => "F3",
        }
    }

    /// Every face the document registers
    pub fn all() -> [Font; 3] {
        [Font::TimesRoman, Font::TimesBold, Font::TimesItalic]
    }

    fn widths(&self) -> &'static [u16; 95] {
        match self {
            Font::TimesRoman => &TIMES_ROMAN_WIDTHS,
            Font::TimesBold => &TIMES_BOLD_WIDTHS,
            Font::TimesItalic => &TIMES_ITALIC_WIDTHS,
        }
    }

    /// Advance width of one WinAnsi code, in 1/1000ths of the font size
    fn code_width(&self, code: u8) -> f64 {
        match code {
            0x20..=0x7E => f64::from(self.widths()[usize::from(code - 0x20)]),
            // CP1252 punctuation the content actually uses; same advance in
            // all four Times faces per the AFMs
            0x91 | 0x92 => 333.0,        // curly single quotes
            0x93 | 0x94 => 444.0,        // curly double quotes
            0x95 => 350.0,               // bullet
            0x96 => 500.0,               // en dash
            0x97 => 1000.0,              // em dash
            0xA0 => 250.0,               // non-breaking space
            _ => 500.0,
        }
    }
}

/// Measure a text run the way the renderer will place it
pub fn text_width(text: &str, font: Font, size: f64) -> f64 {
    let units: f64 = encode_winansi(text)
        .iter()
        .map(|&code| font.code_width(code))
        .sum();
    units * size / 1000.0
}

/// Encode a string into WinAnsi (CP1252) bytes for a PDF string literal.
///
/// ASCII and the Latin-1 block pass through; the handful of CP1252-only
/// punctuation marks the content uses are remapped. Anything else becomes
/// a question mark rather than a wrong glyph.
pub fn encode_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7E}' => c as u8,
            '\u{A0}'..='\u{FF}' => c as u8,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            _ => b'?',
        })
        .collect()
}

// Advance widths for WinAnsi codes 32-126, straight from the Adobe AFMs.

#[rustfmt::skip]
static TIMES_ROMAN_WIDTHS: [u16; 95] = [
    // 32-47  space ! " # $ % & ' ( ) * + , - . /
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    // 48-63  0-9 : ; < = > ?
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    // 64-79  @ A-O
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    // 80-95  P-Z [ \ ] ^ _
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    // 96-111  ` a-o
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    // 112-126  p-z { | } ~
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

#[rustfmt::skip]
static TIMES_BOLD_WIDTHS: [u16; 95] = [
    // 32-47  space ! " # $ % & ' ( ) * + , - . /
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    // 48-63  0-9 : ; < = > ?
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    // 64-79  @ A-O
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    // 80-95  P-Z [ \ ] ^ _
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    // 96-111  ` a-o
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    // 112-126  p-z { | } ~
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

#[rustfmt::skip]
static TIMES_ITALIC_WIDTHS: [u16; 95] = [
    // 32-47  space ! " # $ % & ' ( ) * + , - . /
    250, 333, 420, 500, 500, 833, 778, 214, 333, 333, 500, 675, 250, 333, 250, 278,
    // 48-63  0-9 : ; < = > ?
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 675, 675, 675, 500,
    // 64-79  @ A-O
    920, 611, 611, 667, 722, 611, 611, 722, 722, 333, 444, 667, 556, 833, 667, 722,
    // 80-95  P-Z [ \ ] ^ _
    611, 722, 611, 500, 556, 722, 611, 833, 611, 556, 556, 389, 278, 389, 422, 500,
    // 96-111  ` a-o
    333, 500, 500, 444, 500, 444, 278, 500, 500, 278, 278, 444, 278, 722, 500, 500,
    // 112-126  p-z { | } ~
    500, 500, 389, 389, 278, 500, 444, 667, 444, 444, 389, 400, 275, 400, 541,
];
