//! CV Press Library
//!
//! Renders a fixed one-page CV to PDF. This library provides functionality to:
//! - Collect page margins interactively, with a single all-or-nothing commit
//! - Convert inch-based margins into page geometry
//! - Flow styled paragraphs, spacers and rules into pages
//! - Serialize the finished document with embedded link annotations
//!
//! # Example
//!
//! ```no_run
//! use cv_press::content::cv_elements;
//! use cv_press::layout::{Margins, PageDimensions};
//! use cv_press::margin::Margin;
//! use cv_press::pdf::DocTemplate;
//! use cv_press::style::StyleSheet;
//! use std::path::Path;
//!
//! let template = DocTemplate::new(PageDimensions::a4(), Margins::from(Margin::default()));
//! let styles = StyleSheet::default();
//! let elements = cv_elements(&styles, &template.frame());
//!
//! template
//!     .render_to_file(&elements, Path::new("cv.pdf"))
//!     .expect("Failed to render CV");
//! ```

pub mod content;
pub mod error;
pub mod layout;
pub mod margin;
pub mod pdf;
pub mod style;

// Re-export commonly used items
pub use error::{Error, Result};
