//! Horizontal card carousel: drag, wheel and step input reconciled into one offset

mod controller;
mod input;

pub use controller::{
    CarouselConfig, CarouselController, CarouselGeometry, DragAnchor, ScrollEdges,
    ScrollSnapshot, DEFAULT_EDGE_EPSILON, DEFAULT_STEP_WIDTH,
};
pub use input::{NavKey, StepDirection, WheelOutcome};
