//! Font metrics for layout
//!
//! The PDF output uses the standard Type1 Helvetica faces, which every viewer
//! ships, so widths come from their published AFM tables rather than from an
//! embedded font file. Widths are in 1/1000 em and cover ASCII 0x20..=0x7E;
//! index = (char as usize) - 32.

use rustc_hash::FxHashMap;

/// Helvetica ascender in em
pub const ASCENT: f32 = 0.718;

/// Helvetica descender depth in em
pub const DESCENT: f32 = 0.207;

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,      // 'p'..'~'
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,      // 'p'..'~'
];

/// Stroke weight of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    Bold,
}

impl FontWeight {
    pub fn from_bold(bold: bool) -> Self {
        if bold {
            FontWeight::Bold
        } else {
            FontWeight::Regular
        }
    }

    /// PostScript name of the standard font for this weight
    pub fn base_font(&self) -> &'static str {
        match self {
            FontWeight::Regular => "Helvetica",
            FontWeight::Bold => "Helvetica-Bold",
        }
    }
}

/// Metrics needed for text layout
#[derive(Debug, Clone)]
pub struct FontMetrics {
    /// Width of printable ASCII characters, in em
    pub char_widths: Vec<f32>,
    /// Default width for characters outside the table, in em
    pub default_width: f32,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self::from_afm(&HELVETICA_WIDTHS)
    }
}

impl FontMetrics {
    pub fn new(char_widths: Vec<f32>, default_width: f32) -> Self {
        Self {
            char_widths,
            default_width,
        }
    }

    fn from_afm(table: &[u16; 95]) -> Self {
        Self {
            char_widths: table.iter().map(|&w| w as f32 / 1000.0).collect(),
            default_width: 0.556,
        }
    }

    pub fn helvetica() -> Self {
        Self::from_afm(&HELVETICA_WIDTHS)
    }

    pub fn helvetica_bold() -> Self {
        Self::from_afm(&HELVETICA_BOLD_WIDTHS)
    }

    /// Get width of a character in em
    pub fn width(&self, c: char) -> f32 {
        if c.is_control() {
            return 0.0;
        }
        if c.is_ascii() {
            if let Some(w) = self.char_widths.get((c as usize).wrapping_sub(32)) {
                return *w;
            }
        }
        self.default_width
    }

    /// Advance width of `text` at `font_size`, in the same unit as `font_size`
    pub fn measure(&self, text: &str, font_size: f32) -> f32 {
        text.chars().map(|c| self.width(c)).sum::<f32>() * font_size
    }
}

/// The faces available to the layout engine
#[derive(Debug, Clone)]
pub struct FontLibrary {
    fonts: FxHashMap<FontWeight, FontMetrics>,
}

impl Default for FontLibrary {
    fn default() -> Self {
        let mut fonts = FxHashMap::default();
        fonts.insert(FontWeight::Regular, FontMetrics::helvetica());
        fonts.insert(FontWeight::Bold, FontMetrics::helvetica_bold());
        Self { fonts }
    }
}

impl FontLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the metrics used for a weight
    pub fn set(&mut self, weight: FontWeight, metrics: FontMetrics) {
        self.fonts.insert(weight, metrics);
    }

    /// Metrics for a weight, falling back to the regular face
    pub fn get(&self, weight: FontWeight) -> &FontMetrics {
        self.fonts
            .get(&weight)
            .or_else(|| self.fonts.get(&FontWeight::Regular))
            .unwrap_or(&FALLBACK_METRICS)
    }
}

static FALLBACK_METRICS: FontMetrics = FontMetrics {
    char_widths: Vec::new(),
    default_width: 0.556,
};
