//! Page geometry and typography options

use crate::error::{Error, Result};
use crate::layout::pagination::PageFrame;
use serde::{Deserialize, Serialize};

/// Millimetres per typographic point; page geometry is in millimetres,
/// font sizes are in points.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// Vertical space before a section heading (mm)
pub const SECTION_GAP: f32 = 5.0;

/// Space consumed by the rule above a heading (mm)
pub const RULE_ADVANCE: f32 = 5.0;

/// Space after a heading line (mm)
pub const HEADING_GAP: f32 = 2.0;

/// Options for one render call. Missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Page width in mm (A4 portrait)
    pub page_width: f32,
    /// Page height in mm (A4 portrait)
    pub page_height: f32,
    /// Margin on every side, in mm
    pub margin: f32,
    /// Body text size in points
    pub base_font_size: f32,
    /// Line advance in mm per point of font size
    pub line_height_factor: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 20.0,
            base_font_size: 10.0,
            line_height_factor: 0.6,
        }
    }
}

impl RenderOptions {
    /// Usable line width
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// Usable height per page
    pub fn content_height(&self) -> f32 {
        self.page_height - 2.0 * self.margin
    }

    /// Line advance for a font size; identical for every call at that size
    pub fn line_height(&self, font_size: f32) -> f32 {
        self.line_height_factor * font_size
    }

    pub fn type_scale(&self) -> TypeScale {
        TypeScale::from_base(self.base_font_size)
    }

    /// Check that a page can hold at least one heading group and the
    /// tallest line, and derive the printable frame.
    pub fn frame(&self) -> Result<PageFrame> {
        let values = [
            ("pageWidth", self.page_width),
            ("pageHeight", self.page_height),
            ("baseFontSize", self.base_font_size),
            ("lineHeightFactor", self.line_height_factor),
        ];
        for (name, value) in values {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::DegenerateLayout(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(Error::DegenerateLayout(format!(
                "margin must be a non-negative number, got {}",
                self.margin
            )));
        }
        if self.content_width() <= 0.0 {
            return Err(Error::DegenerateLayout(format!(
                "no printable width: page width {} with margin {}",
                self.page_width, self.margin
            )));
        }

        let scale = self.type_scale();
        let tallest = self.line_height(scale.name.max(scale.heading));
        let required = SECTION_GAP + RULE_ADVANCE + tallest;
        if self.content_height() < required {
            return Err(Error::DegenerateLayout(format!(
                "printable height {} is smaller than one heading group ({})",
                self.content_height(),
                required
            )));
        }

        Ok(PageFrame {
            top: self.margin,
            bottom: self.page_height - self.margin,
            left: self.margin,
            right: self.page_width - self.margin,
        })
    }
}

/// Font sizes (points) for each text role, derived from the body size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeScale {
    pub name: f32,
    pub title: f32,
    pub heading: f32,
    pub entry: f32,
    pub body: f32,
    pub detail: f32,
}

impl TypeScale {
    pub fn from_base(base: f32) -> Self {
        Self {
            name: base * 2.4,
            title: base * 1.4,
            heading: base * 1.4,
            entry: base * 1.1,
            body: base,
            detail: base * 0.9,
        }
    }
}

impl Default for TypeScale {
    fn default() -> Self {
        Self::from_base(RenderOptions::default().base_font_size)
    }
}
