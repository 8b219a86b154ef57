//! Core layout engine: blocks to positioned lines on fixed-size pages

use crate::document::{Block, ResumeOutline, Section, BULLET_MARKER, DETAIL_GAP};
use crate::error::Result;
use crate::layout::font::{FontLibrary, FontWeight, ASCENT, DESCENT};
use crate::layout::line_break::LineBreaker;
use crate::layout::options::{RenderOptions, TypeScale, HEADING_GAP, MM_PER_PT, RULE_ADVANCE, SECTION_GAP};
use crate::layout::pagination::{PageCursor, PageFrame};
use crate::render::{DisplayItem, DisplayPage, LineRole};
use crate::Point;
use smallvec::SmallVec;

/// Lays blocks out top to bottom, starting a new page whenever the next
/// line would cross the bottom margin.
///
/// One engine serves one render call: it owns its cursor and pages and is
/// consumed by `finish`.
pub struct LayoutEngine {
    options: RenderOptions,
    scale: TypeScale,
    frame: PageFrame,
    fonts: FontLibrary,
    line_breaker: LineBreaker,
    cursor: PageCursor,
    pages: Vec<DisplayPage>,
}

impl LayoutEngine {
    /// Create an engine; fails if the page has no usable area
    pub fn new(options: RenderOptions) -> Result<Self> {
        let frame = options.frame()?;
        Ok(Self {
            options,
            scale: options.type_scale(),
            frame,
            fonts: FontLibrary::default(),
            line_breaker: LineBreaker::new(),
            cursor: PageCursor::start(&frame),
            pages: vec![DisplayPage::new(0)],
        })
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    pub fn frame(&self) -> &PageFrame {
        &self.frame
    }

    /// Header block, then every section in order
    pub fn write_outline(&mut self, outline: &ResumeOutline) {
        for (index, block) in outline.header.iter().enumerate() {
            let role = if index == 0 {
                LineRole::Name
            } else {
                LineRole::Header
            };
            self.write_block(block, role);
        }
        for section in &outline.sections {
            self.write_section(section);
        }
    }

    pub fn write_section(&mut self, section: &Section) {
        self.write_heading(&section.heading);
        for block in &section.blocks {
            let role = match block {
                Block::Paragraph { bold: true, .. } => LineRole::Entry,
                _ => LineRole::Body,
            };
            self.write_block(block, role);
        }
    }

    /// Dispatch one block. `role` tags paragraph lines.
    pub fn write_block(&mut self, block: &Block, role: LineRole) {
        match block {
            Block::Paragraph {
                text,
                font_size,
                bold,
            } => self.write_paragraph(text, *font_size, *bold, role),
            Block::BulletList { items } => self.write_bullet_list(items),
            Block::KeyValueLine {
                label,
                value,
                font_size,
            } => self.write_key_value(label, value, *font_size),
            Block::Gap(gap) => self.gap(*gap),
        }
    }

    /// Rule plus bold heading line. The page-break check covers the whole
    /// group, so a rule never ends up alone at the bottom of a page; the
    /// heading itself may still be the last line on its page.
    pub fn write_heading(&mut self, text: &str) {
        let font_size = self.scale.heading;
        let group = SECTION_GAP + RULE_ADVANCE + self.options.line_height(font_size);
        if !self.cursor.fits(group, &self.frame) {
            log::debug!("page break before heading {:?}", text);
            self.cursor = self.cursor.next_page(&self.frame);
        }
        if !self.cursor.at_page_top(&self.frame) {
            self.gap(SECTION_GAP);
        }

        let rule_y = self.cursor.y + RULE_ADVANCE / 2.0;
        let (x_start, x_end) = (self.frame.left, self.frame.right);
        self.page_mut(self.cursor.page).items.push(DisplayItem::Rule {
            y: rule_y,
            x_start,
            x_end,
        });
        self.gap(RULE_ADVANCE);

        self.place_line(
            self.frame.left,
            text.trim().to_uppercase(),
            font_size,
            FontWeight::Bold,
            LineRole::Heading,
        );
        self.gap(HEADING_GAP);
    }

    /// Wrap `text` to the content width and emit one row per line.
    /// Blank lines between explicit newlines become a small gap.
    pub fn write_paragraph(&mut self, text: &str, font_size: f32, bold: bool, role: LineRole) {
        let weight = FontWeight::from_bold(bold);
        for line in self.wrap(text.trim(), font_size, weight, self.frame.width()) {
            if line.is_empty() {
                self.gap(DETAIL_GAP);
            } else {
                self.place_line(self.frame.left, line, font_size, weight, role);
            }
        }
    }

    /// Hyphen-prefixed items; continuation lines hang under the item text
    pub fn write_bullet_list(&mut self, items: &[String]) {
        let font_size = self.scale.body;
        let em = font_size * MM_PER_PT;
        let indent = self.fonts.get(FontWeight::Regular).measure(BULLET_MARKER, em);
        let width = self.frame.width() - indent;

        for item in items {
            let lines = self.wrap(item.trim(), font_size, FontWeight::Regular, width);
            for (index, line) in lines.into_iter().filter(|l| !l.is_empty()).enumerate() {
                if index == 0 {
                    self.place_line(
                        self.frame.left,
                        format!("{}{}", BULLET_MARKER, line),
                        font_size,
                        FontWeight::Regular,
                        LineRole::Bullet,
                    );
                } else {
                    self.place_line(
                        self.frame.left + indent,
                        line,
                        font_size,
                        FontWeight::Regular,
                        LineRole::BulletContinuation,
                    );
                }
            }
        }
    }

    /// `Label: value`, wrapped. A blank value writes nothing.
    pub fn write_key_value(&mut self, label: &str, value: &str, font_size: f32) {
        let (label, value) = (label.trim(), value.trim());
        if value.is_empty() {
            return;
        }
        let text = if label.is_empty() {
            value.to_string()
        } else {
            format!("{}: {}", label, value)
        };
        let lines = self.wrap(&text, font_size, FontWeight::Regular, self.frame.width());
        for line in lines.into_iter().filter(|l| !l.is_empty()) {
            self.place_line(
                self.frame.left,
                line,
                font_size,
                FontWeight::Regular,
                LineRole::KeyValue,
            );
        }
    }

    /// Vertical spacing; absorbed at the bottom of a page
    pub fn gap(&mut self, gap: f32) {
        self.cursor = self.cursor.advance(gap, &self.frame);
    }

    /// Finalize: the laid-out pages, in order
    pub fn finish(self) -> Vec<DisplayPage> {
        self.pages
    }

    fn wrap(&self, text: &str, font_size: f32, weight: FontWeight, width: f32) -> SmallVec<[String; 4]> {
        let metrics = self.fonts.get(weight);
        self.line_breaker
            .wrap(text, metrics, font_size * MM_PER_PT, width)
            .iter()
            .map(|line| line.text(text).to_string())
            .collect()
    }

    /// CheckPageBreak, Layout, Advance for a single line
    fn place_line(&mut self, x: f32, text: String, font_size: f32, weight: FontWeight, role: LineRole) {
        let height = self.options.line_height(font_size);
        let placement = self.cursor.reserve(height, &self.frame);
        if placement.page_break {
            log::debug!("page break: starting page {}", placement.at.page + 1);
        }

        let em = font_size * MM_PER_PT;
        let baseline = placement.at.y + (height + (ASCENT - DESCENT) * em) / 2.0;
        self.page_mut(placement.at.page).items.push(DisplayItem::TextRun {
            position: Point { x, y: baseline },
            text,
            font_size,
            weight,
            role,
        });
        self.cursor = placement.next;
    }

    fn page_mut(&mut self, index: usize) -> &mut DisplayPage {
        while self.pages.len() <= index {
            let next = self.pages.len();
            self.pages.push(DisplayPage::new(next));
        }
        &mut self.pages[index]
    }
}
