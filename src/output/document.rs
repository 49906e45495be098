//! Document export
//!
//! Pages are laid out one after another in a single Word document, separated
//! by page breaks.

use crate::crawler::{clean_text, OcrOutcome};
use crate::output::traits::{BlockKind, OutputError, OutputResult, OutputWriter, PageRecord};
use docx_rs::{
    AbstractNumbering, BreakType, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat,
    Numbering, NumberingId, Paragraph, Run, Start, Style, StyleType,
};
use std::fs::File;
use std::path::Path;

/// Prefix of the paragraph carrying the meta description
pub const DESCRIPTION_LABEL: &str = "[Description]";

/// Heading of the recognized image text section
pub const OCR_SECTION_HEADING: &str = "Text extracted from images";

/// Heading of each extracted PDF text section
pub const PDF_SECTION_HEADING: &str = "Text extracted from PDF";

/// Note emitted when recognition was requested but cannot run
pub const OCR_UNAVAILABLE_NOTE: &str = "* Image text recognition is not available in this environment";

const BULLET_NUMBERING_ID: usize = 1;

/// Heading font sizes in half-points, level 1 first
const HEADING_SIZES: [usize; 6] = [32, 28, 26, 24, 22, 22];

/// One layout element of the document, in output order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocElement {
    PageBreak,
    Heading { level: u8, text: String },
    Bullet(String),
    Paragraph(String),
}

/// Accumulates pages into a document layout
#[derive(Debug, Default)]
pub struct DocumentWriter {
    elements: Vec<DocElement>,
    pages: usize,
}

impl DocumentWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one page; every page after the first starts with a page break
    pub fn add_page(&mut self, page: &PageRecord) {
        if self.pages > 0 {
            self.elements.push(DocElement::PageBreak);
        }
        self.pages += 1;

        self.heading(1, &page.title);

        if let Some(description) = &page.description {
            self.paragraph(&format!("{}\n{}", DESCRIPTION_LABEL, description));
        }

        for block in &page.blocks {
            match block.kind {
                BlockKind::Heading(level) => self.heading(level, &block.text),
                BlockKind::Bullet => self.push(DocElement::Bullet(clean_text(&block.text))),
                BlockKind::Paragraph => self.paragraph(&block.text),
            }
        }

        match &page.ocr {
            Some(OcrOutcome::Texts(texts)) if !texts.is_empty() => {
                self.heading(2, OCR_SECTION_HEADING);
                for text in texts {
                    self.paragraph(text);
                }
            }
            Some(OcrOutcome::Unavailable) => self.paragraph(OCR_UNAVAILABLE_NOTE),
            _ => {}
        }

        for text in &page.pdf_texts {
            self.heading(2, PDF_SECTION_HEADING);
            self.paragraph(text);
        }
    }

    /// Number of pages added so far
    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Layout elements in output order
    pub fn elements(&self) -> &[DocElement] {
        &self.elements
    }

    fn heading(&mut self, level: u8, text: &str) {
        self.push(DocElement::Heading {
            level: level.clamp(1, 6),
            text: clean_text(text),
        });
    }

    fn paragraph(&mut self, text: &str) {
        self.push(DocElement::Paragraph(clean_text(text)));
    }

    fn push(&mut self, element: DocElement) {
        self.elements.push(element);
    }

    /// Builds the Word document for the accumulated layout
    pub fn render(&self) -> Docx {
        let mut docx = Docx::new()
            .add_abstract_numbering(
                AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(Level::new(
                    0,
                    Start::new(1),
                    NumberFormat::new("bullet"),
                    LevelText::new("•"),
                    LevelJc::new("left"),
                )),
            )
            .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));

        for (index, size) in HEADING_SIZES.iter().enumerate() {
            let level = index + 1;
            docx = docx.add_style(
                Style::new(format!("Heading{}", level), StyleType::Paragraph)
                    .name(format!("Heading {}", level))
                    .size(*size)
                    .bold(),
            );
        }

        for element in &self.elements {
            let paragraph = match element {
                DocElement::PageBreak => {
                    Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
                }
                DocElement::Heading { level, text } => {
                    text_paragraph(text).style(&format!("Heading{}", level))
                }
                DocElement::Bullet(text) => text_paragraph(text)
                    .numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0)),
                DocElement::Paragraph(text) => text_paragraph(text),
            };
            docx = docx.add_paragraph(paragraph);
        }

        docx
    }
}

/// Builds a paragraph whose embedded newlines become line breaks
fn text_paragraph(text: &str) -> Paragraph {
    let mut run = Run::new();
    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }
    Paragraph::new().add_run(run)
}

impl OutputWriter for DocumentWriter {
    fn extension(&self) -> &'static str {
        "docx"
    }

    fn finalize(&self, path: &Path) -> OutputResult<()> {
        let file = File::create(path)?;
        self.render()
            .build()
            .pack(file)
            .map_err(|e| OutputError::Write(format!("{}: {}", path.display(), e)))?;

        tracing::info!(
            "Wrote {} pages to document {}",
            self.pages,
            path.display()
        );
        Ok(())
    }
}
