use folio::layout::{FontLibrary, FontWeight, LineBreaker, MM_PER_PT};
use folio::render::{render_to_sink, DirectorySink, DisplayItem, LineRole};
use folio::resume::{Degree, Personal, Position, Project};
use folio::{render, Error, RenderOptions, Resume};

const SAMPLE: &str = include_str!("fixtures/resume.json");
const SITE: &str = include_str!("fixtures/site_resume.json");

fn named(name: &str) -> Resume {
    Resume {
        personal: Personal {
            name: name.to_string(),
            ..Personal::default()
        },
        ..Resume::default()
    }
}

fn position(title: &str, bullets: &[&str]) -> Position {
    Position {
        title: title.to_string(),
        company: "Company".to_string(),
        start_date: "2020".to_string(),
        end_date: "2021".to_string(),
        highlights: bullets.iter().map(|b| b.to_string()).collect(),
        ..Position::default()
    }
}

#[test]
fn test_sample_resume() {
    let resume = Resume::from_json(SAMPLE).unwrap();
    let document = render(&resume, &RenderOptions::default()).unwrap();

    assert_eq!(document.file_name, "Muhammad_Nathaqif_Resume.pdf");
    let headings: Vec<&str> = document
        .pages
        .iter()
        .flat_map(|page| page.lines_with_role(LineRole::Heading))
        .collect();
    assert_eq!(
        headings,
        vec![
            "PROFESSIONAL SUMMARY",
            "TECHNICAL SKILLS",
            "PROFESSIONAL EXPERIENCE",
            "EDUCATION",
            "PROJECTS"
        ]
    );

    let lines: Vec<&str> = document.lines().map(|(_, line)| line).collect();
    assert_eq!(lines[0], "Muhammad Nathaqif");
    assert!(lines.contains(&"Languages: JavaScript, TypeScript, Python, Java, Go"));
    assert!(lines.contains(&"GPA: 3.8/4.0"));
    assert!(lines.contains(&"Topics: data-visualization, weather"));

    let pdf = document.to_pdf();
    assert!(pdf.starts_with(b"%PDF"));
}

#[test]
fn test_site_data_shape() {
    let resume = Resume::from_json(SITE).unwrap();
    let document = render(&resume, &RenderOptions::default()).unwrap();
    let lines: Vec<&str> = document.lines().map(|(_, line)| line).collect();

    let summary = lines.iter().position(|line| *line == "PROFESSIONAL SUMMARY");
    let skills = lines.iter().position(|line| *line == "TECHNICAL SKILLS");
    assert!(summary.is_some());
    assert!(summary < skills);
    assert!(lines[summary.unwrap() + 1].starts_with("Passionate Full-Stack Developer"));

    assert!(lines.contains(&"Languages: JavaScript, TypeScript, Python, Java, Go"));
    assert!(lines.contains(&"Tools: Git, VS Code, Figma, Postman, Jira"));
    assert!(!lines.iter().any(|line| line.starts_with("languages:")));
}

#[test]
fn test_bullets_keep_order_and_marker() {
    let mut resume = named("Ada Lovelace");
    resume.experience = vec![
        position("First", &["A1", "A2", "A3"]),
        position("Second", &["B1", "B2"]),
    ];
    let document = render(&resume, &RenderOptions::default()).unwrap();

    let bullets: Vec<&str> = document
        .pages
        .iter()
        .flat_map(|page| page.lines_with_role(LineRole::Bullet))
        .collect();
    assert_eq!(bullets, vec!["- A1", "- A2", "- A3", "- B1", "- B2"]);
}

#[test]
fn test_long_paragraph_spans_pages_without_loss() {
    let text = (0..900)
        .map(|i| format!("word{}", i))
        .collect::<Vec<_>>()
        .join(" ");
    let mut resume = named("Ada Lovelace");
    resume.summary = Some(text.clone());

    let options = RenderOptions::default();
    let document = render(&resume, &options).unwrap();
    assert!(document.page_count() >= 2);

    let fonts = FontLibrary::default();
    let expected: Vec<&str> = LineBreaker::new()
        .wrap(
            &text,
            fonts.get(FontWeight::Regular),
            options.base_font_size * MM_PER_PT,
            options.content_width(),
        )
        .iter()
        .map(|line| line.text(&text))
        .collect();
    let actual: Vec<&str> = document
        .pages
        .iter()
        .flat_map(|page| page.lines_with_role(LineRole::Body))
        .collect();
    assert_eq!(actual, expected);

    let bottom = options.page_height - options.margin;
    for page in &document.pages {
        let mut last_y = f32::MIN;
        for item in &page.items {
            if let DisplayItem::TextRun { position, .. } = item {
                assert!(position.y <= bottom);
                assert!(position.y > last_y);
                last_y = position.y;
            }
        }
    }
}

#[test]
fn test_no_placeholder_lines_without_optional_fields() {
    let mut resume = named("Ada Lovelace");
    resume.experience.push(Position {
        title: "Programmer".into(),
        company: "Analytical Engines".into(),
        start_date: "1842".into(),
        end_date: "1843".into(),
        ..Position::default()
    });
    resume.education.push(Degree {
        degree: "Mathematics".into(),
        institution: "Private tutoring".into(),
        start_date: "1828".into(),
        end_date: "1835".into(),
        ..Degree::default()
    });
    resume.projects.push(Project {
        name: "Note G".into(),
        ..Project::default()
    });

    let document = render(&resume, &RenderOptions::default()).unwrap();
    for (_, line) in document.lines() {
        assert!(!line.trim().is_empty());
        assert!(!line.contains("undefined"));
        assert!(!line.contains("null"));
        assert!(!line.starts_with("GPA"));
        assert!(!line.ends_with(':'));
        assert!(!line.ends_with('|') && !line.starts_with('|'));
    }
    assert_eq!(document.page_count(), 1);
    assert_eq!(document.pages[0].lines_with_role(LineRole::Header).count(), 0);
}

#[test]
fn test_missing_name_produces_no_document() {
    let resume = Resume::from_json(r#"{"summary": "No name here"}"#).unwrap();
    let dir = std::env::temp_dir().join(format!("folio-missing-name-{}", std::process::id()));
    let mut sink = DirectorySink::new(&dir);

    let result = render_to_sink(&resume, &RenderOptions::default(), &mut sink);
    assert!(matches!(result, Err(Error::InvalidInput(_))));
    assert!(sink.written().is_empty());
    assert!(!dir.exists());
}

#[test]
fn test_directory_sink_writes_pdf() {
    let dir = std::env::temp_dir().join(format!("folio-sink-{}", std::process::id()));
    let mut sink = DirectorySink::new(&dir);

    let document = render_to_sink(&named("Ada Lovelace"), &RenderOptions::default(), &mut sink).unwrap();
    assert_eq!(sink.written(), &[dir.join("Ada_Lovelace_Resume.pdf")]);

    let bytes = std::fs::read(&sink.written()[0]).unwrap();
    assert_eq!(bytes, document.to_pdf());
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_degenerate_options_rejected() {
    let options: RenderOptions = serde_json::from_str(r#"{"pageHeight": 40}"#).unwrap();
    assert!(matches!(
        render(&named("Ada Lovelace"), &options),
        Err(Error::DegenerateLayout(_))
    ));
}
