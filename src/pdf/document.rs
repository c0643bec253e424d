//! Page assembly and serialization with lopdf
//!
//! A `DocTemplate` owns the fixed page geometry (size + margins = one
//! content frame per page) and flows elements into it top to bottom,
//! opening a new page whenever the next line would cross the frame bottom.

use std::path::Path;

use chrono::Local;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};

use crate::error::Result;
use crate::layout::{Frame, Margins, PageDimensions};
use crate::pdf::flow::{break_paragraph, Element, Fragment, Line};
use crate::pdf::font::{self, Font};
use crate::style::ParagraphStyle;

/// Pagination tolerance so exact fits don't spill onto a fresh page
const FIT_EPSILON: f64 = 0.001;

/// Metadata written to the PDF Info dictionary
#[derive(Debug, Clone, Default)]
pub struct DocInfo {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// Single-frame page template
#[derive(Debug, Clone)]
pub struct DocTemplate {
    pub page: PageDimensions,
    pub margins: Margins,
    pub info: DocInfo,
}

/// Operators and annotations accumulated for one page
#[derive(Default)]
struct PageContent {
    ops: Vec<Operation>,
    annots: Vec<Object>,
    used: bool,
}

impl DocTemplate {
    pub fn new(page: PageDimensions, margins: Margins) -> Self {
        Self {
            page,
            margins,
            info: DocInfo::default(),
        }
    }

    pub fn with_info(mut self, info: DocInfo) -> Self {
        self.info = info;
        self
    }

    /// The content frame shared by every page
    pub fn frame(&self) -> Frame {
        Frame::new(&self.page, &self.margins)
    }

    /// Flow the elements into pages and build the finished document
    pub fn render(&self, elements: &[Element]) -> Result<Document> {
        let frame = self.frame();
        let mut pages: Vec<PageContent> = Vec::new();
        let mut page = PageContent::default();
        let mut y = frame.top();

        for element in elements {
            match element {
                Element::Spacer(height) => {
                    y -= height;
                    if y < frame.y - FIT_EPSILON {
                        if page.used {
                            pages.push(std::mem::take(&mut page));
                        }
                        y = frame.top();
                    }
                }
                Element::Rule { thickness } => {
                    if y - thickness < frame.y - FIT_EPSILON && page.used {
                        pages.push(std::mem::take(&mut page));
                        y = frame.top();
                    }
                    y -= thickness;
                    draw_rule(&mut page, &frame, y + thickness / 2.0, *thickness);
                    page.used = true;
                }
                Element::Paragraph(paragraph) => {
                    let leading = paragraph.style.leading;
                    let lines = break_paragraph(paragraph, frame.width);
                    for (i, line) in lines.iter().enumerate() {
                        if y - leading < frame.y - FIT_EPSILON && page.used {
                            pages.push(std::mem::take(&mut page));
                            y = frame.top();
                        }
                        y -= leading;
                        draw_line(&mut page, &frame, line, &paragraph.style, i == 0, y);
                        page.used = true;
                    }
                }
            }
        }
        pages.push(page);

        self.assemble(pages)
    }

    /// Render and write the document, overwriting any existing file
    pub fn render_to_file(&self, elements: &[Element], path: &Path) -> Result<()> {
        let mut doc = self.render(elements)?;
        doc.compress();
        doc.save(path)?;
        Ok(())
    }

    /// Wire the accumulated pages into the PDF object graph
    fn assemble(&self, pages: Vec<PageContent>) -> Result<Document> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        // The three Times faces are standard fonts; a name and encoding are
        // all the viewer needs.
        let mut fonts = Dictionary::new();
        for face in Font::all() {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.base_name(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(face.resource_name(), Object::Reference(font_id));
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => Object::Dictionary(fonts),
        });

        let mut kids: Vec<Object> = Vec::new();
        for page in pages {
            let content = Content {
                operations: page.ops,
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

            let mut page_dict = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            };
            if !page.annots.is_empty() {
                page_dict.set("Annots", Object::Array(page.annots));
            }
            kids.push(doc.add_object(page_dict).into());
        }

        let page_count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
                "Resources" => resources_id,
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    Object::Real(self.page.width.pt() as f32),
                    Object::Real(self.page.height.pt() as f32),
                ],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let info_id = doc.add_object(Object::Dictionary(self.info_dictionary()));
        doc.trailer.set("Info", info_id);

        Ok(doc)
    }

    fn info_dictionary(&self) -> Dictionary {
        let mut info = Dictionary::new();
        if let Some(title) = &self.info.title {
            info.set(
                "Title",
                Object::String(title.clone().into_bytes(), StringFormat::Literal),
            );
        }
        if let Some(author) = &self.info.author {
            info.set(
                "Author",
                Object::String(author.clone().into_bytes(), StringFormat::Literal),
            );
        }
        info.set(
            "Producer",
            Object::String(
                format!("cv-press {}", env!("CARGO_PKG_VERSION")).into_bytes(),
                StringFormat::Literal,
            ),
        );
        info.set(
            "CreationDate",
            Object::String(
                Local::now().format("D:%Y%m%d%H%M%S").to_string().into_bytes(),
                StringFormat::Literal,
            ),
        );
        info
    }
}

/// Emit one laid-out line at the given baseline
fn draw_line(
    page: &mut PageContent,
    frame: &Frame,
    line: &Line,
    style: &ParagraphStyle,
    is_first: bool,
    baseline: f64,
) {
    if is_first {
        if let Some(bullet) = style.bullet {
            draw_text(
                page,
                frame.x + bullet.indent,
                baseline,
                &bullet.glyph.to_string(),
                style.font,
                style.size,
            );
        }
    }

    for (x, frag) in &line.fragments {
        let x_abs = frame.x + x;
        draw_text(page, x_abs, baseline, &frag.text, frag.font, frag.size);

        if frag.underline {
            draw_underline(page, x_abs, baseline, frag);
        }
        if let Some(uri) = &frag.link {
            page.annots.push(link_annotation(x_abs, baseline, frag, uri));
        }
    }
}

fn draw_text(page: &mut PageContent, x: f64, y: f64, text: &str, font: Font, size: f64) {
    page.ops.push(Operation::new("BT", vec![]));
    page.ops.push(Operation::new(
        "Tf",
        vec![font.resource_name().into(), Object::Real(size as f32)],
    ));
    page.ops.push(Operation::new(
        "Td",
        vec![Object::Real(x as f32), Object::Real(y as f32)],
    ));
    page.ops.push(Operation::new(
        "Tj",
        vec![Object::String(
            font::encode_winansi(text),
            StringFormat::Literal,
        )],
    ));
    page.ops.push(Operation::new("ET", vec![]));
}

fn draw_underline(page: &mut PageContent, x: f64, baseline: f64, frag: &Fragment) {
    let y = baseline - frag.size * 0.125;
    page.ops.push(Operation::new("q", vec![]));
    page.ops
        .push(Operation::new("w", vec![Object::Real(0.5)]));
    page.ops.push(Operation::new(
        "m",
        vec![Object::Real(x as f32), Object::Real(y as f32)],
    ));
    page.ops.push(Operation::new(
        "l",
        vec![Object::Real((x + frag.width) as f32), Object::Real(y as f32)],
    ));
    page.ops.push(Operation::new("S", vec![]));
    page.ops.push(Operation::new("Q", vec![]));
}

/// Frame-wide horizontal rule centered on the given y
fn draw_rule(page: &mut PageContent, frame: &Frame, y: f64, thickness: f64) {
    page.ops.push(Operation::new("q", vec![]));
    page.ops
        .push(Operation::new("w", vec![Object::Real(thickness as f32)]));
    page.ops.push(Operation::new(
        "m",
        vec![Object::Real(frame.x as f32), Object::Real(y as f32)],
    ));
    page.ops.push(Operation::new(
        "l",
        vec![Object::Real(frame.right() as f32), Object::Real(y as f32)],
    ));
    page.ops.push(Operation::new("S", vec![]));
    page.ops.push(Operation::new("Q", vec![]));
}

/// Invisible-border Link annotation covering one fragment
fn link_annotation(x: f64, baseline: f64, frag: &Fragment, uri: &str) -> Object {
    Object::Dictionary(dictionary! {
        "Type" => "Annot",
        "Subtype" => "Link",
        "Rect" => vec![
            Object::Real(x as f32),
            Object::Real((baseline - frag.size * 0.2) as f32),
            Object::Real((x + frag.width) as f32),
            Object::Real((baseline + frag.size * 0.8) as f32),
        ],
        "Border" => vec![0.into(), 0.into(), 0.into()],
        "A" => dictionary! {
            "Type" => "Action",
            "S" => "URI",
            "URI" => Object::String(uri.as_bytes().to_vec(), StringFormat::Literal),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::margin::Margin;
    use crate::pdf::flow::{Paragraph, Span};
    use crate::style::StyleSheet;

    fn template() -> DocTemplate {
        DocTemplate::new(PageDimensions::a4(), Margins::from(Margin::default()))
    }

    fn real(obj: &Object) -> f64 {
        match obj {
            Object::Real(v) => f64::from(*v),
            Object::Integer(v) => *v as f64,
            other => panic!("expected a number, got {:?}", other),
        }
    }

    #[test]
    fn test_single_paragraph_is_one_page() {
        let styles = StyleSheet::default();
        let elements = vec![Element::Paragraph(Paragraph::text(
            "Hello world",
            styles.normal,
        ))];
        let doc = template().render(&elements).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_overflowing_content_paginates() {
        let styles = StyleSheet::default();
        let elements: Vec<Element> = (0..120)
            .map(|i| Element::Paragraph(Paragraph::text(format!("line {}", i), styles.normal)))
            .collect();
        // 120 lines at 14.4pt leading cannot fit an A4 frame
        let doc = template().render(&elements).unwrap();
        assert!(doc.get_pages().len() >= 2);
    }

    #[test]
    fn test_first_baseline_sits_one_leading_below_frame_top() {
        let styles = StyleSheet::default();
        let tpl = template();
        let frame = tpl.frame();
        let elements = vec![Element::Paragraph(Paragraph::text("Top", styles.normal))];
        let doc = tpl.render(&elements).unwrap();

        let page_id = *doc.get_pages().values().next().unwrap();
        let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
        let td = content
            .operations
            .iter()
            .find(|op| op.operator == "Td")
            .expect("no Td operator");
        let x = real(&td.operands[0]);
        let y = real(&td.operands[1]);
        assert!((x - frame.x).abs() < 0.01);
        assert!((y - (frame.top() - styles.normal.leading)).abs() < 0.01);
    }

    #[test]
    fn test_linked_fragment_gets_annotation() {
        let styles = StyleSheet::default();
        let para = Paragraph::new(
            vec![Span::new("mail", Font::TimesBold).linked("mailto:someone@example.com")],
            styles.title,
        );
        let doc = template().render(&[Element::Paragraph(para)]).unwrap();

        let page_id = *doc.get_pages().values().next().unwrap();
        let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
        let annots = page.get(b"Annots").unwrap().as_array().unwrap();
        assert_eq!(annots.len(), 1);
        let annot = annots[0].as_dict().unwrap();
        match annot.get(b"Subtype").unwrap() {
            Object::Name(name) => assert_eq!(name, b"Link"),
            other => panic!("expected a name, got {:?}", other),
        }
    }

    #[test]
    fn test_rule_strokes_the_frame_width() {
        let tpl = template();
        let frame = tpl.frame();
        let doc = tpl.render(&[Element::Rule { thickness: 0.5 }]).unwrap();

        let page_id = *doc.get_pages().values().next().unwrap();
        let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
        let m = content
            .operations
            .iter()
            .find(|op| op.operator == "m")
            .expect("no moveto");
        let l = content
            .operations
            .iter()
            .find(|op| op.operator == "l")
            .expect("no lineto");
        let x0 = real(&m.operands[0]);
        let x1 = real(&l.operands[0]);
        assert!((x0 - frame.x).abs() < 0.01);
        assert!((x1 - frame.right()).abs() < 0.01);
    }

    #[test]
    fn test_info_dictionary_is_written() {
        let tpl = template().with_info(DocInfo {
            title: Some("Curriculum Vitae".to_string()),
            author: Some("Someone".to_string()),
        });
        let doc = tpl.render(&[]).unwrap();

        let info_ref = doc.trailer.get(b"Info").unwrap();
        let info_id = match info_ref {
            Object::Reference(id) => *id,
            _ => panic!("Info is not a reference"),
        };
        let info = doc.get_object(info_id).unwrap().as_dict().unwrap();
        assert_eq!(
            info.get(b"Title").unwrap().as_str().unwrap(),
            b"Curriculum Vitae"
        );
        let producer = info.get(b"Producer").unwrap().as_str().unwrap();
        assert!(String::from_utf8_lossy(producer).starts_with("cv-press"));
        assert!(info.get(b"CreationDate").is_ok());
    }

    #[test]
    fn test_spacer_advances_without_marking_the_page() {
        // A document of only spacers still produces exactly one (blank) page
        let doc = template()
            .render(&[Element::Spacer(14.4), Element::Spacer(14.4)])
            .unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }
}
