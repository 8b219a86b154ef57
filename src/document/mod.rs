//! Resume outline: the fixed section order turned into blocks
//!
//! Optional fields that are absent or blank produce nothing at all, not an
//! empty line or a dangling label. Sections left without content are dropped
//! together with their heading.

mod block;

pub use block::{Block, Section, BULLET_MARKER, DETAIL_GAP, ENTRY_GAP};

use crate::layout::TypeScale;
use crate::resume::{Degree, Position, Project, Resume};

/// Header block plus sections, in print order
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeOutline {
    pub header: Vec<Block>,
    pub sections: Vec<Section>,
}

impl ResumeOutline {
    /// Build the outline. Entry order is the caller's; nothing is sorted.
    pub fn from_resume(resume: &Resume, scale: &TypeScale) -> Self {
        let sections = [
            summary_section(resume, scale),
            skills_section(resume, scale),
            entries_section("Professional Experience", &resume.experience, scale, position_blocks),
            entries_section("Education", &resume.education, scale, degree_blocks),
            entries_section("Projects", &resume.projects, scale, project_blocks),
        ]
        .into_iter()
        .filter(Section::has_content)
        .collect();

        Self {
            header: header_blocks(resume, scale),
            sections,
        }
    }
}

/// Join the non-blank parts with a separator
fn join_present<'a>(parts: impl IntoIterator<Item = Option<&'a str>>, separator: &str) -> String {
    parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

fn non_blank(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn push_paragraph(blocks: &mut Vec<Block>, text: String, font_size: f32, bold: bool) {
    if !text.is_empty() {
        blocks.push(Block::paragraph(text, font_size, bold));
    }
}

fn push_key_value(blocks: &mut Vec<Block>, label: &str, items: &[String], font_size: f32) {
    let items = non_blank(items);
    if !items.is_empty() {
        blocks.push(Block::key_value(label, items.join(", "), font_size));
    }
}

fn push_bullets(blocks: &mut Vec<Block>, items: &[String]) {
    let items = non_blank(items);
    if !items.is_empty() {
        blocks.push(Block::Gap(DETAIL_GAP));
        blocks.push(Block::BulletList { items });
    }
}

fn header_blocks(resume: &Resume, scale: &TypeScale) -> Vec<Block> {
    let personal = &resume.personal;
    let mut blocks = Vec::new();

    push_paragraph(&mut blocks, personal.name.trim().to_string(), scale.name, true);
    push_paragraph(
        &mut blocks,
        join_present([personal.title.as_deref()], ""),
        scale.title,
        false,
    );
    push_paragraph(
        &mut blocks,
        join_present(
            [
                personal.email.as_deref(),
                personal.phone.as_deref(),
                personal.location.as_deref(),
            ],
            " | ",
        ),
        scale.body,
        false,
    );
    push_paragraph(
        &mut blocks,
        join_present(
            [
                personal.website.as_deref(),
                personal.github.as_deref(),
                personal.linkedin.as_deref(),
            ],
            " | ",
        ),
        scale.body,
        false,
    );

    blocks
}

fn summary_section(resume: &Resume, scale: &TypeScale) -> Section {
    let mut section = Section::new("Professional Summary");
    push_paragraph(
        &mut section.blocks,
        resume.summary_text().unwrap_or_default().to_string(),
        scale.body,
        false,
    );
    section
}

fn skills_section(resume: &Resume, scale: &TypeScale) -> Section {
    let mut section = Section::new("Technical Skills");
    for group in &resume.skills {
        let label = category_label(&group.category);
        push_key_value(&mut section.blocks, &label, &group.skills, scale.body);
    }
    section
}

/// Category label as printed: trimmed, first letter upper-cased
/// (`languages` prints as `Languages`); the rest is kept as given
fn category_label(category: &str) -> String {
    let category = category.trim();
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One section of repeated entries separated by `ENTRY_GAP`
fn entries_section<T>(
    heading: &str,
    entries: &[T],
    scale: &TypeScale,
    entry_blocks: fn(&T, &TypeScale) -> Vec<Block>,
) -> Section {
    let mut section = Section::new(heading);
    for entry in entries {
        let blocks = entry_blocks(entry, scale);
        if blocks.is_empty() {
            continue;
        }
        if !section.blocks.is_empty() {
            section.blocks.push(Block::Gap(ENTRY_GAP));
        }
        section.blocks.extend(blocks);
    }
    section
}

fn position_blocks(position: &Position, scale: &TypeScale) -> Vec<Block> {
    let mut blocks = Vec::new();
    push_paragraph(
        &mut blocks,
        join_present([Some(position.title.as_str()), Some(position.company.as_str())], " - "),
        scale.entry,
        true,
    );
    let period = join_present(
        [Some(position.start_date.as_str()), Some(position.end_date.as_str())],
        " - ",
    );
    push_paragraph(
        &mut blocks,
        join_present([Some(period.as_str()), position.location.as_deref()], " | "),
        scale.detail,
        false,
    );
    push_bullets(&mut blocks, &position.highlights);
    blocks
}

fn degree_blocks(degree: &Degree, scale: &TypeScale) -> Vec<Block> {
    let mut blocks = Vec::new();
    push_paragraph(
        &mut blocks,
        join_present([Some(degree.degree.as_str())], ""),
        scale.entry,
        true,
    );
    let period = join_present(
        [Some(degree.start_date.as_str()), Some(degree.end_date.as_str())],
        " - ",
    );
    push_paragraph(
        &mut blocks,
        join_present(
            [
                Some(degree.institution.as_str()),
                degree.location.as_deref(),
                Some(period.as_str()),
            ],
            " | ",
        ),
        scale.body,
        false,
    );
    if let Some(gpa) = degree.gpa.as_deref().map(str::trim).filter(|g| !g.is_empty()) {
        blocks.push(Block::key_value("GPA", gpa, scale.detail));
    }
    push_bullets(&mut blocks, &degree.achievements);
    blocks
}

fn project_blocks(project: &Project, scale: &TypeScale) -> Vec<Block> {
    let mut blocks = Vec::new();
    push_paragraph(
        &mut blocks,
        join_present([Some(project.name.as_str())], ""),
        scale.entry,
        true,
    );
    push_paragraph(
        &mut blocks,
        join_present([project.description.as_deref()], ""),
        scale.body,
        false,
    );
    push_key_value(&mut blocks, "Technologies", &project.technologies, scale.detail);
    push_key_value(&mut blocks, "Topics", &project.topics, scale.detail);
    if let Some(link) = project.link.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
        blocks.push(Block::key_value("Link", link, scale.detail));
    }
    push_bullets(&mut blocks, &project.highlights);
    blocks
}
