//! Page geometry: lengths, page sizes, margins and the content frame

use crate::margin::Margin;

/// Simple length type in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length(pub f64);

impl Length {
    /// Create a length from millimeters
    pub fn from_mm(mm: f64) -> Self {
        Length(mm)
    }

    /// Create a length from inches
    pub fn from_inches(inches: f64) -> Self {
        Length(inches * 25.4)
    }

    /// Create a length from points (1/72 inch)
    pub fn from_pt(pt: f64) -> Self {
        Length(pt * 25.4 / 72.0)
    }

    /// Get the value in millimeters
    pub fn mm(&self) -> f64 {
        self.0
    }

    /// Get the value in points (1/72 inch)
    pub fn pt(&self) -> f64 {
        self.0 * 72.0 / 25.4
    }
}

/// Page dimensions
#[derive(Debug, Clone, Copy)]
pub struct PageDimensions {
    pub width: Length,
    pub height: Length,
}

impl PageDimensions {
    /// US Letter size (8.5" × 11")
    pub fn letter() -> Self {
        Self {
            width: Length::from_mm(215.9),
            height: Length::from_mm(279.4),
        }
    }

    /// A4 size (210mm × 297mm)
    pub fn a4() -> Self {
        Self {
            width: Length::from_mm(210.0),
            height: Length::from_mm(297.0),
        }
    }
}

/// Margins for page content
#[derive(Debug, Clone, Copy)]
pub struct Margins {
    pub top: Length,
    pub bottom: Length,
    pub left: Length,
    pub right: Length,
}

impl Margins {
    /// Create margins with same value on all sides
    pub fn uniform(margin: Length) -> Self {
        Self {
            top: margin,
            bottom: margin,
            left: margin,
            right: margin,
        }
    }
}

impl From<Margin> for Margins {
    /// Inches-to-device-units seam: the interactive record is in inches,
    /// everything past this point is lengths.
    fn from(m: Margin) -> Self {
        Self {
            top: Length::from_inches(m.top),
            bottom: Length::from_inches(m.bottom),
            left: Length::from_inches(m.left),
            right: Length::from_inches(m.right),
        }
    }
}

/// The rectangular region of a page that content flows into, in points.
/// The coordinate system has origin at bottom-left of the page.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    /// Compute the single content frame from a page size and margins
    pub fn new(page: &PageDimensions, margins: &Margins) -> Self {
        Self {
            x: margins.left.pt(),
            y: margins.bottom.pt(),
            width: page.width.pt() - margins.left.pt() - margins.right.pt(),
            height: page.height.pt() - margins.top.pt() - margins.bottom.pt(),
        }
    }

    /// Y coordinate of the top edge
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// X coordinate of the right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversions() {
        let len = Length::from_inches(1.0);
        assert!((len.mm() - 25.4).abs() < 0.01);
        assert!((len.pt() - 72.0).abs() < 0.01);

        let len = Length::from_pt(36.0);
        assert!((len.pt() - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_a4_size() {
        let a4 = PageDimensions::a4();
        // 210mm × 297mm is 595.28pt × 841.89pt
        assert!((a4.width.pt() - 595.28).abs() < 0.01);
        assert!((a4.height.pt() - 841.89).abs() < 0.01);
    }

    #[test]
    fn test_letter_size() {
        let letter = PageDimensions::letter();
        assert!((letter.width.mm() - 215.9).abs() < 0.1);
        assert!((letter.height.mm() - 279.4).abs() < 0.1);
    }

    #[test]
    fn test_margins_from_margin_record() {
        let margins = Margins::from(Margin::default());
        assert!((margins.top.pt() - 54.0).abs() < 0.01); // 0.75"
        assert!((margins.bottom.pt() - 54.0).abs() < 0.01);
        assert!((margins.left.pt() - 36.0).abs() < 0.01); // 0.5"
        assert!((margins.right.pt() - 36.0).abs() < 0.01);
    }

    #[test]
    fn test_frame_from_page_and_margins() {
        let page = PageDimensions::a4();
        let margins = Margins::from(Margin {
            top: 1.0,
            bottom: 1.0,
            left: 0.5,
            right: 0.5,
        });
        let frame = Frame::new(&page, &margins);

        assert!((frame.x - 36.0).abs() < 0.01);
        assert!((frame.y - 72.0).abs() < 0.01);
        assert!((frame.width - (page.width.pt() - 72.0)).abs() < 0.01);
        assert!((frame.height - (page.height.pt() - 144.0)).abs() < 0.01);
        assert!((frame.top() - (page.height.pt() - 72.0)).abs() < 0.01);
    }

    #[test]
    fn test_uniform_margins() {
        let margins = Margins::uniform(Length::from_inches(1.0));
        assert_eq!(margins.top.mm(), 25.4);
        assert_eq!(margins.bottom.mm(), 25.4);
        assert_eq!(margins.left.mm(), 25.4);
        assert_eq!(margins.right.mm(), 25.4);
    }
}
