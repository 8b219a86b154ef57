//! WASM bindings for the carousel, the resume renderer and the theme preference

use crate::carousel::{CarouselConfig, CarouselController, CarouselGeometry, NavKey, StepDirection};
use crate::error::{Error, Result};
use crate::layout::{FontWeight, RenderOptions};
use crate::preference;
use crate::render::{self, DisplayItem, DocumentSink, LineRole, ResumeDocument};
use crate::resume::Resume;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js_error(err: Error) -> JsError {
    JsError::new(&err.to_string())
}

/// WASM-exposed carousel wrapper
#[wasm_bindgen]
pub struct WasmCarousel {
    controller: CarouselController,
}

#[wasm_bindgen]
impl WasmCarousel {
    /// Create a carousel for the measured viewport and strip widths
    #[wasm_bindgen(constructor)]
    pub fn new(viewport_width: f32, content_width: f32, step_width: Option<f32>) -> Self {
        let mut config = CarouselConfig::default();
        if let Some(step_width) = step_width.filter(|w| w.is_finite() && *w > 0.0) {
            config.step_width = step_width;
        }
        let geometry = CarouselGeometry::new(viewport_width, content_width);
        Self {
            controller: CarouselController::new(geometry, config),
        }
    }

    #[wasm_bindgen(js_name = dragStart)]
    pub fn drag_start(&mut self, pointer_x: f32) {
        self.controller.on_drag_start(pointer_x);
    }

    #[wasm_bindgen(js_name = dragMove)]
    pub fn drag_move(&mut self, pointer_x: f32) {
        self.controller.on_drag_move(pointer_x);
    }

    #[wasm_bindgen(js_name = dragEnd)]
    pub fn drag_end(&mut self) {
        self.controller.on_drag_end();
    }

    /// Returns true when the host must call `preventDefault`
    pub fn wheel(&mut self, delta_x: f32, delta_y: f32) -> bool {
        self.controller
            .on_wheel(delta_x, delta_y)
            .should_prevent_default()
    }

    /// Step by `direction` (-1 or +1); returns the target offset
    pub fn step(&mut self, direction: i32) -> f32 {
        match StepDirection::from_sign(direction) {
            Some(direction) => self.controller.step(direction),
            None => self.controller.offset(),
        }
    }

    /// Handle a `KeyboardEvent.key` value; returns true if consumed
    pub fn key(&mut self, key: &str) -> bool {
        self.controller.on_key(NavKey::from_key_name(key))
    }

    /// Adopt the element's actual `scrollLeft`
    #[wasm_bindgen(js_name = syncOffset)]
    pub fn sync_offset(&mut self, offset: f32) {
        self.controller.sync_offset(offset);
    }

    pub fn resize(&mut self, viewport_width: f32, content_width: f32) {
        self.controller
            .set_geometry(CarouselGeometry::new(viewport_width, content_width));
    }

    #[wasm_bindgen(getter)]
    pub fn offset(&self) -> f32 {
        self.controller.offset()
    }

    #[wasm_bindgen(getter = canScrollLeft)]
    pub fn can_scroll_left(&self) -> bool {
        self.controller.recompute_edges().can_scroll_left
    }

    #[wasm_bindgen(getter = canScrollRight)]
    pub fn can_scroll_right(&self) -> bool {
        self.controller.recompute_edges().can_scroll_right
    }

    #[wasm_bindgen(getter = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    /// Full state as JSON
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.controller.snapshot()).unwrap_or_default()
    }
}

/// WASM-exposed rendered resume
#[wasm_bindgen]
pub struct WasmResumeDocument {
    document: ResumeDocument,
}

#[wasm_bindgen]
impl WasmResumeDocument {
    #[wasm_bindgen(getter = fileName)]
    pub fn file_name(&self) -> String {
        self.document.file_name.clone()
    }

    #[wasm_bindgen(getter = pageCount)]
    pub fn page_count(&self) -> usize {
        self.document.page_count()
    }

    /// Serialized PDF
    #[wasm_bindgen(js_name = pdfBytes)]
    pub fn pdf_bytes(&self) -> Vec<u8> {
        self.document.to_pdf()
    }

    /// Hand the PDF to `save(fileName, bytes)` exactly once
    pub fn download(&self, save: &js_sys::Function) -> std::result::Result<(), JsError> {
        let mut sink = CallbackSink { callback: save };
        self.document.save(&mut sink).map_err(to_js_error)
    }

    /// Positioned lines for an on-screen preview (JSON)
    #[wasm_bindgen(js_name = previewJson)]
    pub fn preview_json(&self) -> std::result::Result<String, JsError> {
        let preview = PreviewData::from_document(&self.document);
        serde_json::to_string(&preview).map_err(|err| to_js_error(err.into()))
    }
}

/// Render a resume from JSON; `options_json` may omit any field
#[wasm_bindgen(js_name = renderResume)]
pub fn render_resume(
    resume_json: &str,
    options_json: Option<String>,
) -> std::result::Result<WasmResumeDocument, JsError> {
    render_from_json(resume_json, options_json.as_deref())
        .map(|document| WasmResumeDocument { document })
        .map_err(to_js_error)
}

/// Resolve a stored theme value against the host colour scheme; true means dark
#[wasm_bindgen(js_name = resolveTheme)]
pub fn resolve_theme(stored: Option<String>, prefers_dark: bool) -> bool {
    preference::parse_stored(stored.as_deref())
        .resolve(prefers_dark)
        .is_dark()
}

fn render_from_json(resume_json: &str, options_json: Option<&str>) -> Result<ResumeDocument> {
    let resume = Resume::from_json(resume_json)?;
    let options = match options_json.map(str::trim).filter(|json| !json.is_empty()) {
        Some(json) => serde_json::from_str(json)?,
        None => RenderOptions::default(),
    };
    render::render(&resume, &options)
}

/// Document sink backed by a JS function
struct CallbackSink<'a> {
    callback: &'a js_sys::Function,
}

impl DocumentSink for CallbackSink<'_> {
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> Result<()> {
        let bytes = js_sys::Uint8Array::from(bytes);
        self.callback
            .call2(&JsValue::NULL, &JsValue::from_str(file_name), &bytes.into())
            .map(|_| ())
            .map_err(|err| Error::Host(err.as_string().unwrap_or_else(|| format!("{:?}", err))))
    }
}

/// Serializable preview data for JS
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewData {
    pub file_name: String,
    pub pages: Vec<PreviewPage>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewPage {
    pub page_index: usize,
    pub width: f32,
    pub height: f32,
    pub lines: Vec<PreviewLine>,
    pub rules: Vec<PreviewRule>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewLine {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub font_size: f32,
    pub bold: bool,
    pub role: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRule {
    pub y: f32,
    pub x_start: f32,
    pub x_end: f32,
}

fn role_name(role: LineRole) -> &'static str {
    match role {
        LineRole::Name => "name",
        LineRole::Header => "header",
        LineRole::Heading => "heading",
        LineRole::Entry => "entry",
        LineRole::Body => "body",
        LineRole::Bullet => "bullet",
        LineRole::BulletContinuation => "bullet-continuation",
        LineRole::KeyValue => "key-value",
    }
}

impl PreviewData {
    fn from_document(document: &ResumeDocument) -> Self {
        let pages = document
            .pages
            .iter()
            .map(|page| {
                let mut lines = Vec::new();
                let mut rules = Vec::new();
                for item in &page.items {
                    match item {
                        DisplayItem::TextRun {
                            position,
                            text,
                            font_size,
                            weight,
                            role,
                        } => lines.push(PreviewLine {
                            x: position.x,
                            y: position.y,
                            text: text.clone(),
                            font_size: *font_size,
                            bold: *weight == FontWeight::Bold,
                            role: role_name(*role),
                        }),
                        DisplayItem::Rule { y, x_start, x_end } => rules.push(PreviewRule {
                            y: *y,
                            x_start: *x_start,
                            x_end: *x_end,
                        }),
                    }
                }
                PreviewPage {
                    page_index: page.page_index,
                    width: document.options.page_width,
                    height: document.options.page_height,
                    lines,
                    rules,
                }
            })
            .collect();

        PreviewData {
            file_name: document.file_name.clone(),
            pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = r#"{
        "personal": {"name": "Grace Hopper", "title": "Rear Admiral"},
        "experience": [{"position": "Programmer", "company": "Eckert-Mauchly",
                        "startDate": "1949", "endDate": "1952",
                        "description": ["Wrote the A-0 compiler"]}]
    }"#;

    #[test]
    fn test_render_from_json_with_partial_options() {
        let document = render_from_json(RESUME, Some(r#"{"margin": 15}"#)).unwrap();
        assert_eq!(document.file_name, "Grace_Hopper_Resume.pdf");
        assert_eq!(document.options.margin, 15.0);
        assert_eq!(document.page_count(), 1);
    }

    #[test]
    fn test_render_from_json_errors() {
        assert!(matches!(render_from_json("{", None), Err(Error::Json(_))));
        assert!(matches!(
            render_from_json(r#"{"personal": {}}"#, None),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            render_from_json(RESUME, Some(r#"{"pageWidth": 0}"#)),
            Err(Error::DegenerateLayout(_))
        ));
    }

    #[test]
    fn test_preview_data() {
        let document = render_from_json(RESUME, None).unwrap();
        let preview = PreviewData::from_document(&document);
        let page = &preview.pages[0];
        assert_eq!(page.lines[0].role, "name");
        assert!(page.lines[0].bold);
        assert_eq!(page.rules.len(), 1);
        assert!(page.lines.iter().any(|line| line.text == "- Wrote the A-0 compiler"));
    }

    #[test]
    fn test_carousel_wrapper() {
        let mut carousel = WasmCarousel::new(900.0, 1500.0, None);
        assert_eq!(carousel.step(1), 300.0);
        assert_eq!(carousel.step(0), 300.0);
        assert!(carousel.key("ArrowRight"));
        assert!(!carousel.key("Enter"));
        assert_eq!(carousel.offset(), 600.0);
        assert!(carousel.can_scroll_left());
        assert!(!carousel.can_scroll_right());
        assert!(carousel.wheel(0.0, -100.0));
        assert_eq!(carousel.offset(), 500.0);
        carousel.resize(900.0, 1000.0);
        assert_eq!(carousel.offset(), 100.0);
    }

    #[test]
    fn test_resolve_theme() {
        assert!(resolve_theme(Some("dark".into()), false));
        assert!(!resolve_theme(Some("light".into()), true));
        assert!(resolve_theme(None, true));
        assert!(!resolve_theme(Some("neon".into()), false));
    }
}
