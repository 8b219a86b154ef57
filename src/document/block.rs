//! Block-level elements of a resume outline

/// Space between consecutive entries of a section (mm)
pub const ENTRY_GAP: f32 = 5.0;

/// Space between an entry's header lines and its bullets (mm)
pub const DETAIL_GAP: f32 = 2.0;

/// Marker written before every bullet item. A plain hyphen survives
/// automated resume parsers that mangle glyph bullets.
pub const BULLET_MARKER: &str = "- ";

/// A laid-out unit of content
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Wrapped running text
    Paragraph {
        text: String,
        font_size: f32,
        bold: bool,
    },
    /// Hyphen-prefixed items, one wrapped block per item
    BulletList { items: Vec<String> },
    /// `Label: value`, wrapped like a paragraph
    KeyValueLine {
        label: String,
        value: String,
        font_size: f32,
    },
    /// Fixed vertical spacing
    Gap(f32),
}

impl Block {
    pub fn paragraph(text: impl Into<String>, font_size: f32, bold: bool) -> Self {
        Block::Paragraph {
            text: text.into(),
            font_size,
            bold,
        }
    }

    pub fn key_value(label: impl Into<String>, value: impl Into<String>, font_size: f32) -> Self {
        Block::KeyValueLine {
            label: label.into(),
            value: value.into(),
            font_size,
        }
    }

    /// Check if this block produces no text
    pub fn is_empty(&self) -> bool {
        match self {
            Block::Paragraph { text, .. } => text.trim().is_empty(),
            Block::BulletList { items } => items.iter().all(|item| item.trim().is_empty()),
            Block::KeyValueLine { value, .. } => value.trim().is_empty(),
            Block::Gap(_) => true,
        }
    }
}

/// A titled run of blocks
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: String,
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            blocks: Vec::new(),
        }
    }

    /// Check if the section has anything to print besides its heading
    pub fn has_content(&self) -> bool {
        self.blocks.iter().any(|block| !block.is_empty())
    }
}
