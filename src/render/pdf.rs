//! PDF serialization of laid-out pages
//!
//! Uses the standard Type1 Helvetica faces with WinAnsi encoding, so no font
//! program is embedded and the text stays extractable by resume parsers.

use crate::layout::{FontWeight, MM_PER_PT};
use crate::render::{DisplayItem, DisplayPage};
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str, TextStr};

const REGULAR_FONT: Name<'static> = Name(b"F1");
const BOLD_FONT: Name<'static> = Name(b"F2");

/// Grey used for section rules
const RULE_GRAY: f32 = 200.0 / 255.0;

/// Rule stroke width in points
const RULE_WIDTH: f32 = 0.5;

/// Page size and metadata for one PDF file
pub struct PdfMeta<'a> {
    /// Page width in mm
    pub page_width: f32,
    /// Page height in mm
    pub page_height: f32,
    pub title: &'a str,
    pub author: &'a str,
}

/// Serialize pages into a complete PDF file
pub fn write_pdf(pages: &[DisplayPage], meta: &PdfMeta<'_>) -> Vec<u8> {
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let regular_id = alloc();
    let bold_id = alloc();
    let info_id = alloc();
    let page_ids: Vec<Ref> = pages.iter().map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = pages.iter().map(|_| alloc()).collect();

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(page_ids.len() as i32);

    for (id, weight) in [(regular_id, FontWeight::Regular), (bold_id, FontWeight::Bold)] {
        pdf.type1_font(id)
            .base_font(Name(weight.base_font().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    let width_pt = meta.page_width / MM_PER_PT;
    let height_pt = meta.page_height / MM_PER_PT;

    for (index, page) in pages.iter().enumerate() {
        let content = page_content(page, height_pt);
        pdf.stream(content_ids[index], &content.finish());

        let mut pdf_page = pdf.page(page_ids[index]);
        pdf_page
            .media_box(Rect::new(0.0, 0.0, width_pt, height_pt))
            .parent(pages_id)
            .contents(content_ids[index]);
        pdf_page
            .resources()
            .fonts()
            .pair(REGULAR_FONT, regular_id)
            .pair(BOLD_FONT, bold_id);
    }

    pdf.document_info(info_id)
        .title(TextStr(meta.title))
        .author(TextStr(meta.author));

    pdf.finish()
}

/// Content stream for one page; page units (mm, top-left origin) are
/// converted to PDF points with a bottom-left origin.
fn page_content(page: &DisplayPage, height_pt: f32) -> Content {
    let mut content = Content::new();
    for item in &page.items {
        match item {
            DisplayItem::TextRun {
                position,
                text,
                font_size,
                weight,
                ..
            } => {
                let font = match weight {
                    FontWeight::Regular => REGULAR_FONT,
                    FontWeight::Bold => BOLD_FONT,
                };
                let encoded = encode_win_ansi(text);
                content
                    .begin_text()
                    .set_font(font, *font_size)
                    .next_line(position.x / MM_PER_PT, height_pt - position.y / MM_PER_PT)
                    .show(Str(&encoded))
                    .end_text();
            }
            DisplayItem::Rule { y, x_start, x_end } => {
                let y = height_pt - y / MM_PER_PT;
                content
                    .set_line_width(RULE_WIDTH)
                    .set_stroke_rgb(RULE_GRAY, RULE_GRAY, RULE_GRAY)
                    .move_to(x_start / MM_PER_PT, y)
                    .line_to(x_end / MM_PER_PT, y)
                    .stroke();
            }
        }
    }
    content
}

/// Encode text for a WinAnsi (code page 1252) simple font.
/// Characters outside the code page become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{a0}'..='\u{ff}' => c as u32 as u8,
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8A,
            '‹' => 0x8B,
            'Œ' => 0x8C,
            'Ž' => 0x8E,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9A,
            '›' => 0x9B,
            'œ' => 0x9C,
            'ž' => 0x9E,
            'Ÿ' => 0x9F,
            '\t' => b' ',
            _ => b'?',
        })
        .collect()
}
