//! Resume rendering: layout result, PDF output and the document sink

mod display;
mod pdf;

pub use display::{DisplayItem, DisplayPage, LineRole};
pub use pdf::{encode_win_ansi, write_pdf, PdfMeta};

use crate::document::ResumeOutline;
use crate::error::Result;
use crate::layout::{LayoutEngine, RenderOptions};
use crate::resume::Resume;
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix appended to the sanitized name
pub const FILE_NAME_SUFFIX: &str = "_Resume.pdf";

/// Name used when nothing portable is left of the person's name
pub const FALLBACK_FILE_NAME: &str = "Resume.pdf";

/// A fully laid-out resume, ready to be serialized
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeDocument {
    pub pages: Vec<DisplayPage>,
    /// Suggested download name, portable on every filesystem
    pub file_name: String,
    pub author: String,
    pub options: RenderOptions,
}

impl ResumeDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All text lines with their page index, in reading order
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.pages
            .iter()
            .flat_map(|page| page.lines().map(move |line| (page.page_index, line)))
    }

    /// Serialize to PDF bytes
    pub fn to_pdf(&self) -> Vec<u8> {
        let title = format!("{} Resume", self.author);
        write_pdf(
            &self.pages,
            &PdfMeta {
                page_width: self.options.page_width,
                page_height: self.options.page_height,
                title: &title,
                author: &self.author,
            },
        )
    }

    /// Hand the finished file to a sink, exactly once
    pub fn save<S: DocumentSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        let bytes = self.to_pdf();
        log::info!("saving {} ({} bytes)", self.file_name, bytes.len());
        sink.save(&self.file_name, &bytes)
    }
}

/// Host capability that persists or downloads a finished document
pub trait DocumentSink {
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> Result<()>;
}

/// Writes documents into a directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            written: Vec::new(),
        }
    }

    /// Paths written so far
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl DocumentSink for DirectorySink {
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        fs::write(&path, bytes)?;
        self.written.push(path);
        Ok(())
    }
}

/// Lay a resume out into pages.
///
/// Fails with `InvalidInput` before any layout when the name is missing, and
/// with `DegenerateLayout` when the options leave no printable area.
pub fn render(resume: &Resume, options: &RenderOptions) -> Result<ResumeDocument> {
    let name = resume.validate()?;
    let mut engine = LayoutEngine::new(*options)?;

    let outline = ResumeOutline::from_resume(resume, &options.type_scale());
    engine.write_outline(&outline);
    let pages = engine.finish();

    let document = ResumeDocument {
        pages,
        file_name: file_name_for(name),
        author: name.to_string(),
        options: *options,
    };
    log::info!(
        "rendered resume: {} page(s), {}",
        document.page_count(),
        document.file_name
    );
    Ok(document)
}

/// Render and hand the PDF to `sink`. The sink is only called on success.
pub fn render_to_sink<S: DocumentSink + ?Sized>(
    resume: &Resume,
    options: &RenderOptions,
    sink: &mut S,
) -> Result<ResumeDocument> {
    let document = render(resume, options)?;
    document.save(sink)?;
    Ok(document)
}

/// Suggested file name: whitespace runs become `_`, anything outside
/// `[A-Za-z0-9_]` is dropped.
pub fn file_name_for(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.trim().chars() {
        if c.is_whitespace() {
            if !in_space {
                stem.push('_');
            }
            in_space = true;
        } else {
            in_space = false;
            if c.is_ascii_alphanumeric() || c == '_' {
                stem.push(c);
            }
        }
    }

    if stem.chars().all(|c| c == '_') {
        FALLBACK_FILE_NAME.to_string()
    } else {
        format!("{}{}", stem, FILE_NAME_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct MemorySink {
        saved: Vec<(String, usize)>,
    }

    impl DocumentSink for MemorySink {
        fn save(&mut self, file_name: &str, bytes: &[u8]) -> Result<()> {
            self.saved.push((file_name.to_string(), bytes.len()));
            Ok(())
        }
    }

    fn resume(name: &str) -> Resume {
        let mut resume = Resume::default();
        resume.personal.name = name.to_string();
        resume.summary = Some("Builds reliable systems.".into());
        resume
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name_for("Muhammad Nathaqif"), "Muhammad_Nathaqif_Resume.pdf");
        assert_eq!(file_name_for("  Jean-Luc \t Picard "), "JeanLuc_Picard_Resume.pdf");
        assert_eq!(file_name_for("Zoë O'Brien"), "Zo_OBrien_Resume.pdf");
        assert_eq!(file_name_for("李 雷"), FALLBACK_FILE_NAME);
    }

    #[test]
    fn test_render_validates_name_first() {
        let err = render(&resume(""), &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_sink_called_once_on_success() {
        let mut sink = MemorySink { saved: Vec::new() };
        let document =
            render_to_sink(&resume("Ada Lovelace"), &RenderOptions::default(), &mut sink).unwrap();
        assert_eq!(sink.saved.len(), 1);
        assert_eq!(sink.saved[0].0, document.file_name);
        assert!(sink.saved[0].1 > 0);
    }

    #[test]
    fn test_sink_not_called_on_failure() {
        let mut sink = MemorySink { saved: Vec::new() };
        let options = RenderOptions {
            page_width: 30.0,
            ..RenderOptions::default()
        };
        let result = render_to_sink(&resume("Ada Lovelace"), &options, &mut sink);
        assert!(matches!(result, Err(Error::DegenerateLayout(_))));
        assert!(sink.saved.is_empty());
    }

    #[test]
    fn test_lines_carry_page_index() {
        let document = render(&resume("Ada Lovelace"), &RenderOptions::default()).unwrap();
        let lines: Vec<_> = document.lines().collect();
        assert_eq!(
            lines,
            vec![
                (0, "Ada Lovelace"),
                (0, "PROFESSIONAL SUMMARY"),
                (0, "Builds reliable systems.")
            ]
        );
    }
}
