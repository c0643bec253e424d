//! The CV content, compiled into the program
//!
//! Fixed text only; there is deliberately no way to feed structured content
//! in from outside. The one computed piece is the padding that pushes a
//! location label to the right edge of a line whose left side is a bold
//! institution name.

use crate::layout::Frame;
use crate::pdf::flow::{Element, Paragraph, Span};
use crate::pdf::font::{self, Font};
use crate::style::{ParagraphStyle, StyleSheet};

/// Vertical gap between sections, one body leading
const SECTION_GAP: f64 = 14.4;

/// Thickness of the rule under each section heading
const RULE_THICKNESS: f64 = 0.5;

/// Build the full element sequence for the CV.
///
/// The frame is needed because the two-sided lines measure themselves
/// against the content width.
pub fn cv_elements(styles: &StyleSheet, frame: &Frame) -> Vec<Element> {
    let mut elements = Vec::new();

    elements.push(Element::Paragraph(Paragraph::text(
        "Syafiq Ziyadul Arifin",
        styles.title,
    )));
    elements.push(Element::Paragraph(Paragraph::new(
        vec![
            Span::new("+6282123456789 | ", Font::TimesBold),
            Span::new("szarifin20041@gmail.com", Font::TimesBold)
                .underlined()
                .linked("mailto:szarifin20041@gmail.com"),
            Span::new(" | ", Font::TimesBold),
            Span::new("linkedin.com/in/syafiqza", Font::TimesBold)
                .underlined()
                .linked("https://linkedin.com/in/syafiqza"),
        ],
        styles.title,
    )));

    elements.push(Element::Spacer(SECTION_GAP));

    elements.push(Element::Paragraph(Paragraph::text(
        "Spanning web development, Android development, robotics, and IoT, my interests \
         have led me to proficiency in programming languages such as C++, Python, Go, and \
         JavaScript. Currently in my third year of studying Information System and \
         Technology at the Bandung Institute of Technology.",
        styles.description,
    )));

    elements.push(Element::Spacer(SECTION_GAP));

    section_heading(&mut elements, "Education", styles);
    elements.push(Element::Paragraph(two_sided_line(
        "Bandung Institute of Technology",
        "Bandung, Indonesia",
        styles.normal,
        frame,
    )));
    elements.push(Element::Paragraph(Paragraph::new(
        vec![
            Span::new(
                "Bachelor, Information System and Technology. ",
                Font::TimesRoman,
            ),
            Span::new("GPA (4.00/4.00)", Font::TimesBold),
        ],
        styles.normal,
    )));
    elements.push(Element::Paragraph(Paragraph::text(
        "Ranked 5th in Kontes Robot Indonesia (KRI) 2023 Region 1 and reached the top 16 \
         nationally in Kontes Robot Sepak Bola Indonesia (KRSBI) Beroda.",
        styles.bullet_indented,
    )));

    elements.push(Element::Spacer(SECTION_GAP));

    section_heading(&mut elements, "Leaderships & Activities", styles);
    elements.push(Element::Paragraph(two_sided_line(
        "GIM (Ganesha Interactive Media) ITB",
        "Bandung, Indonesia",
        styles.normal,
        frame,
    )));
    elements.push(Element::Paragraph(Paragraph::text(
        "Programming",
        styles.normal,
    )));
    elements.push(Element::Paragraph(Paragraph::text(
        "Created two games using Unity and Godot as the final project of the internship.",
        styles.bullet_indented,
    )));

    elements.push(Element::Spacer(SECTION_GAP));

    section_heading(&mut elements, "Skills & Interests", styles);
    elements.push(Element::Paragraph(Paragraph::new(
        vec![
            Span::new("Technical", Font::TimesBold),
            Span::new(": C, C++, Java, JavaScript, OpenCV, Python, ROS.", Font::TimesRoman),
        ],
        styles.normal,
    )));

    elements.push(Element::Spacer(SECTION_GAP));

    section_heading(&mut elements, "Certifications & Licenses", styles);
    elements.push(Element::Paragraph(Paragraph::new(
        vec![
            Span::new("OpenCV Bootcamp", Font::TimesBold)
                .underlined()
                .linked("https://courses.opencv.org/certificates/f6704946effd41b081f5ee9ca4faca3e"),
            Span::new(
                ", OpenCV University \u{2013} June 2023",
                Font::TimesRoman,
            ),
        ],
        styles.bullet,
    )));

    elements
}

/// Centered heading followed by a frame-wide rule
fn section_heading(elements: &mut Vec<Element>, title: &str, styles: &StyleSheet) {
    elements.push(Element::Paragraph(Paragraph::text(
        title,
        styles.segment_title,
    )));
    elements.push(Element::Rule {
        thickness: RULE_THICKNESS,
    });
}

/// One line with a bold label on the left and a location label pushed to the
/// right edge by non-breaking-space padding.
///
/// The pad count is derived from measured widths: remaining space on the
/// line (less a quarter of the left margin) divided by the width of one
/// space, minus one.
fn two_sided_line(left: &str, right: &str, style: ParagraphStyle, frame: &Frame) -> Paragraph {
    let space = font::text_width(" ", Font::TimesRoman, style.size);
    let slack = frame.width
        - frame.x / 4.0
        - font::text_width(left, Font::TimesBold, style.size)
        - font::text_width(right, Font::TimesRoman, style.size);
    let pad_count = ((slack / space) - 1.0).max(0.0) as usize;

    Paragraph::new(
        vec![
            Span::new(left, Font::TimesBold),
            Span::new(
                format!("{}{}", "\u{A0}".repeat(pad_count), right),
                Font::TimesRoman,
            ),
        ],
        style,
    )
}
