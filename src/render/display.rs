//! Display list: render-ready representation of laid-out pages

use crate::layout::FontWeight;
use crate::Point;

/// What a text line represents in the resume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// Person's name at the top of the first page
    Name,
    /// Title, contact and profile-link lines of the header
    Header,
    /// Section heading
    Heading,
    /// Bold first line of an experience, education or project entry
    Entry,
    /// Running text
    Body,
    /// First line of a bullet item, starting with the marker
    Bullet,
    /// Wrapped continuation of a bullet item
    BulletContinuation,
    /// `Label: value` line
    KeyValue,
}

/// A display item to render
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayItem {
    /// One line of text; `position` is the left end of its baseline
    TextRun {
        position: Point,
        text: String,
        font_size: f32,
        weight: FontWeight,
        role: LineRole,
    },
    /// Horizontal rule above a section heading
    Rule { y: f32, x_start: f32, x_end: f32 },
}

impl DisplayItem {
    /// Text of this item, if it is a text run
    pub fn text(&self) -> Option<&str> {
        match self {
            DisplayItem::TextRun { text, .. } => Some(text),
            DisplayItem::Rule { .. } => None,
        }
    }

    pub fn role(&self) -> Option<LineRole> {
        match self {
            DisplayItem::TextRun { role, .. } => Some(*role),
            DisplayItem::Rule { .. } => None,
        }
    }
}

/// Display list for a single page
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPage {
    pub page_index: usize,
    pub items: Vec<DisplayItem>,
}

impl DisplayPage {
    pub fn new(page_index: usize) -> Self {
        Self {
            page_index,
            items: Vec::new(),
        }
    }

    /// Text lines on this page, top to bottom
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().filter_map(DisplayItem::text)
    }

    /// Text lines with a given role
    pub fn lines_with_role(&self, role: LineRole) -> impl Iterator<Item = &str> + '_ {
        self.items
            .iter()
            .filter(move |item| item.role() == Some(role))
            .filter_map(DisplayItem::text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_lines_skip_rules() {
        let mut page = DisplayPage::new(0);
        page.items.push(DisplayItem::Rule {
            y: 30.0,
            x_start: 20.0,
            x_end: 190.0,
        });
        page.items.push(DisplayItem::TextRun {
            position: Point { x: 20.0, y: 40.0 },
            text: "EDUCATION".into(),
            font_size: 14.0,
            weight: FontWeight::Bold,
            role: LineRole::Heading,
        });
        page.items.push(DisplayItem::TextRun {
            position: Point { x: 20.0, y: 48.0 },
            text: "- Dean's List".into(),
            font_size: 10.0,
            weight: FontWeight::Regular,
            role: LineRole::Bullet,
        });

        assert_eq!(page.lines().collect::<Vec<_>>(), vec!["EDUCATION", "- Dean's List"]);
        assert_eq!(
            page.lines_with_role(LineRole::Bullet).collect::<Vec<_>>(),
            vec!["- Dean's List"]
        );
    }
}
