//! Carousel scroll controller

use crate::carousel::input::{NavKey, StepDirection, WheelOutcome};
use serde::{Deserialize, Serialize};

/// Default distance moved by one button or arrow-key step
pub const DEFAULT_STEP_WIDTH: f32 = 300.0;

/// Default dead zone at each end before an edge counts as scrollable
pub const DEFAULT_EDGE_EPSILON: f32 = 12.0;

/// Tunables for a carousel instance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    /// One card-width unit, used by `step`
    pub step_width: f32,
    /// Dead zone used by `recompute_edges` to avoid flicker at rest
    pub edge_epsilon: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            step_width: DEFAULT_STEP_WIDTH,
            edge_epsilon: DEFAULT_EDGE_EPSILON,
        }
    }
}

/// Viewport and content extents reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselGeometry {
    pub viewport_width: f32,
    pub content_width: f32,
}

impl CarouselGeometry {
    pub fn new(viewport_width: f32, content_width: f32) -> Self {
        Self {
            viewport_width,
            content_width,
        }
    }

    /// Geometry of a strip of `count` equal cards separated by `gap`
    pub fn from_cards(count: usize, card_width: f32, gap: f32, viewport_width: f32) -> Self {
        let content_width = if count == 0 {
            0.0
        } else {
            count as f32 * card_width + (count - 1) as f32 * gap
        };
        Self::new(viewport_width, content_width)
    }

    /// Largest reachable offset; zero when the content fits
    pub fn max_offset(&self) -> f32 {
        let max = self.content_width - self.viewport_width;
        if max.is_finite() && max > 0.0 {
            max
        } else {
            0.0
        }
    }
}

/// Pointer position and offset captured when a drag begins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    pub start_client_x: f32,
    pub start_offset: f32,
}

/// Which navigation affordances are live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollEdges {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

/// State handed back to the view after every transition
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollSnapshot {
    pub offset: f32,
    pub max_offset: f32,
    pub edges: ScrollEdges,
    pub dragging: bool,
}

/// Reconciles drag, wheel and step input into one horizontal offset.
///
/// Every method is a state transition over primitive inputs. Out-of-order
/// events (a move without a start, a second start, an end without a start)
/// are absorbed as no-ops, and non-finite numbers are ignored.
#[derive(Debug, Clone)]
pub struct CarouselController {
    offset: f32,
    drag: Option<DragAnchor>,
    geometry: CarouselGeometry,
    config: CarouselConfig,
}

impl CarouselController {
    /// Create a controller at rest position
    pub fn new(geometry: CarouselGeometry, config: CarouselConfig) -> Self {
        Self {
            offset: 0.0,
            drag: None,
            geometry,
            config,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_offset(&self) -> f32 {
        self.geometry.max_offset()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_anchor(&self) -> Option<DragAnchor> {
        self.drag
    }

    pub fn geometry(&self) -> CarouselGeometry {
        self.geometry
    }

    pub fn config(&self) -> CarouselConfig {
        self.config
    }

    /// Current state for the view layer
    pub fn snapshot(&self) -> ScrollSnapshot {
        ScrollSnapshot {
            offset: self.offset,
            max_offset: self.max_offset(),
            edges: self.recompute_edges(),
            dragging: self.is_dragging(),
        }
    }

    /// Pointer down. The first pointer wins; repeated starts are ignored.
    pub fn on_drag_start(&mut self, pointer_x: f32) -> ScrollSnapshot {
        if self.drag.is_some() {
            log::debug!("carousel: duplicate drag start ignored");
        } else if pointer_x.is_finite() {
            self.drag = Some(DragAnchor {
                start_client_x: pointer_x,
                start_offset: self.offset,
            });
        }
        self.snapshot()
    }

    /// Pointer move. Dragging right (positive delta) decreases the offset.
    pub fn on_drag_move(&mut self, pointer_x: f32) -> ScrollSnapshot {
        match self.drag {
            Some(anchor) if pointer_x.is_finite() => {
                let delta = pointer_x - anchor.start_client_x;
                self.set_clamped(anchor.start_offset - delta);
            }
            Some(_) => {}
            None => log::debug!("carousel: move without active drag ignored"),
        }
        self.snapshot()
    }

    /// Pointer up or leave. Idempotent.
    pub fn on_drag_end(&mut self) -> ScrollSnapshot {
        self.drag = None;
        self.snapshot()
    }

    /// Redirect predominantly vertical wheel gestures into horizontal motion.
    ///
    /// Horizontal-dominant gestures pass through so the host scrolls natively.
    /// A vertical gesture is intercepted even when there is nothing to scroll
    /// (`max_offset == 0`), so the page does not scroll under the pointer
    /// while it rests on the carousel.
    pub fn on_wheel(&mut self, delta_x: f32, delta_y: f32) -> WheelOutcome {
        if !(delta_x.is_finite() && delta_y.is_finite()) || delta_y.abs() <= delta_x.abs() {
            return WheelOutcome::PassThrough;
        }
        self.set_clamped(self.offset + delta_y);
        WheelOutcome::Intercepted
    }

    /// Move one card-width unit. Returns the committed target offset.
    pub fn step(&mut self, direction: StepDirection) -> f32 {
        let target = self.offset + direction.sign() * self.config.step_width;
        self.set_clamped(target);
        self.offset
    }

    /// Arrow-key navigation. Returns `false` for keys the carousel does not own.
    pub fn on_key(&mut self, key: NavKey) -> bool {
        match key.direction() {
            Some(direction) => {
                self.step(direction);
                true
            }
            None => false,
        }
    }

    /// Adopt a scroll position reported by the host (e.g. after scroll snapping)
    pub fn sync_offset(&mut self, offset: f32) -> ScrollSnapshot {
        self.set_clamped(offset);
        self.snapshot()
    }

    /// Viewport or content resize; the offset is re-clamped to the new range.
    /// An active drag keeps the anchor captured at its start, so the next
    /// move is measured from there and clamped to the new range.
    pub fn set_geometry(&mut self, geometry: CarouselGeometry) -> ScrollSnapshot {
        self.geometry = geometry;
        self.set_clamped(self.offset);
        self.snapshot()
    }

    /// Derive the edge affordances from the current offset
    pub fn recompute_edges(&self) -> ScrollEdges {
        let epsilon = self.config.edge_epsilon;
        ScrollEdges {
            can_scroll_left: self.offset > epsilon,
            can_scroll_right: self.offset < self.max_offset() - epsilon,
        }
    }

    fn set_clamped(&mut self, offset: f32) {
        if offset.is_finite() {
            self.offset = offset.clamp(0.0, self.max_offset());
        }
    }
}
