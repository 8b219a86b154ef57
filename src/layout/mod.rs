//! Layout engine: line breaking and pagination

mod engine;
pub mod font;
mod line_break;
mod options;
mod pagination;

pub use engine::LayoutEngine;
pub use font::{FontLibrary, FontMetrics, FontWeight};
pub use line_break::{LineBreaker, WrappedLine};
pub use options::{
    RenderOptions, TypeScale, HEADING_GAP, MM_PER_PT, RULE_ADVANCE, SECTION_GAP,
};
pub use pagination::{PageCursor, PageFrame, Placement};
