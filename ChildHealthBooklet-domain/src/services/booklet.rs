//! Booklet rendering.
//!
//! A booklet is a single US-Letter page: a title line followed by one
//! `field: value` line per record field in [`FIELD_ORDER`] order.
//!
//! [`FIELD_ORDER`]: crate::entities::FIELD_ORDER

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::entities::child_record::ChildRecord;
use child_health_booklet_data::archive::BookletArchive;
use child_health_booklet_data::repository::RepositoryError;

/// Title drawn at the top of every booklet
pub const BOOKLET_TITLE: &str = "Child Health Record Booklet";

const PAGE_WIDTH: i64 = 612;
const PAGE_HEIGHT: i64 = 792;
const FONT_SIZE: i64 = 12;
const LEFT_MARGIN: i64 = 100;
const TITLE_Y: i64 = 750;
const FIRST_LINE_Y: i64 = 720;
const LINE_SPACING: i64 = 20;

/// Booklet errors
#[derive(Debug, Error)]
pub enum BookletError {
    /// PDF generation failed
    #[error("Render error: {0}")]
    Render(#[from] lopdf::Error),

    /// Serializing the PDF failed
    #[error("Write error: {0}")]
    Write(#[from] std::io::Error),

    /// Writing the archived copy failed
    #[error("Archive error: {0}")]
    Archive(#[from] RepositoryError),
}

/// Renders child records to PDF
#[derive(Debug, Clone, Copy, Default)]
pub struct BookletRenderer;

impl BookletRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render `record` into an in-memory PDF.
    pub fn render(&self, record: &ChildRecord) -> Result<Vec<u8>, BookletError> {
        let mut doc = Document::with_version("1.4");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut operations = text_line(BOOKLET_TITLE, TITLE_Y);
        let mut y = FIRST_LINE_Y;
        for (name, value) in record.fields() {
            operations.extend(text_line(&format!("{}: {}", name, value), y));
            y -= LINE_SPACING;
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => Object::Integer(1),
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(PAGE_WIDTH),
                Object::Integer(PAGE_HEIGHT),
            ],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)?;
        Ok(buffer)
    }
}

/// Operations drawing a single line of text at (`LEFT_MARGIN`, `y`)
fn text_line(text: &str, y: i64) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), Object::Integer(FONT_SIZE)]),
        Operation::new("Td", vec![Object::Integer(LEFT_MARGIN), Object::Integer(y)]),
        Operation::new("Tj", vec![Object::string_literal(encode_win_ansi(text))]),
        Operation::new("ET", vec![]),
    ]
}

/// Encode text for a WinAnsi Type1 font. Latin-1 maps directly, as do the
/// typographic characters WinAnsi keeps in 0x80-0x9F; anything else becomes
/// `?` and control characters become spaces.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x00..=0x1F | 0x7F => b' ',
            code @ 0x20..=0x7E => code as u8,
            code @ 0xA0..=0xFF => code as u8,
            _ => win_ansi_high(c).unwrap_or(b'?'),
        })
        .collect()
}

/// WinAnsi codes in 0x80-0x9F, which differ from Latin-1
fn win_ansi_high(c: char) -> Option<u8> {
    let code = match c {
        '\u{20AC}' => 0x80, // euro sign
        '\u{201A}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201E}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02C6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8A,
        '\u{2039}' => 0x8B,
        '\u{0152}' => 0x8C,
        '\u{017D}' => 0x8E,
        '\u{2018}' => 0x91, // curly quotes
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96, // en dash
        '\u{2014}' => 0x97, // em dash
        '\u{02DC}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9A,
        '\u{203A}' => 0x9B,
        '\u{0153}' => 0x9C,
        '\u{017E}' => 0x9E,
        '\u{0178}' => 0x9F,
        _ => return None,
    };
    Some(code)
}

/// Renders booklets and, when an archive is configured, keeps a copy on disk
#[derive(Debug, Clone, Default)]
pub struct BookletService {
    renderer: BookletRenderer,
    archive: Option<BookletArchive>,
}

impl BookletService {
    pub fn new(archive: Option<BookletArchive>) -> Self {
        Self {
            renderer: BookletRenderer::new(),
            archive,
        }
    }

    pub fn archive(&self) -> Option<&BookletArchive> {
        self.archive.as_ref()
    }

    /// Render the booklet for `record`, archiving it if configured
    #[instrument(skip(self, record), fields(health_id = %record.health_id))]
    pub async fn generate(&self, record: &ChildRecord) -> Result<Vec<u8>, BookletError> {
        let bytes = self.renderer.render(record)?;
        debug!("Rendered booklet ({} bytes)", bytes.len());

        if let Some(archive) = &self.archive {
            archive.store(&record.health_id, &bytes).await?;
        }

        Ok(bytes)
    }
}
