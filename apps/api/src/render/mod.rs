//! Template rendering — pure functions from a resume snapshot to an HTML
//! document. Multiple templates share the one snapshot contract; two of the
//! named templates are placeholders aliasing an existing layout, and unknown
//! ids fall back to the default.

pub mod handlers;
mod minimal;
mod modern;

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeData;

/// Named template selector. `creative` and `professional` are placeholder
/// aliases; `executive` and `academic` are declared but unmapped and resolve
/// to the default layout, as does any unknown id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    #[default]
    Modern,
    Minimal,
    Creative,
    Professional,
    Executive,
    Academic,
}

/// A concrete layout implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Modern,
    Minimal,
}

impl TemplateId {
    pub const ALL: [TemplateId; 6] = [
        TemplateId::Modern,
        TemplateId::Minimal,
        TemplateId::Creative,
        TemplateId::Professional,
        TemplateId::Executive,
        TemplateId::Academic,
    ];

    /// Lowercase id used in queries and export file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Minimal => "minimal",
            TemplateId::Creative => "creative",
            TemplateId::Professional => "professional",
            TemplateId::Executive => "executive",
            TemplateId::Academic => "academic",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateId::Modern => "Modern",
            TemplateId::Minimal => "Minimal",
            TemplateId::Creative => "Creative",
            TemplateId::Professional => "Professional",
            TemplateId::Executive => "Executive",
            TemplateId::Academic => "Academic",
        }
    }

    /// The layout this id resolves to.
    pub fn layout(&self) -> Layout {
        match self {
            TemplateId::Modern | TemplateId::Creative => Layout::Modern,
            TemplateId::Minimal | TemplateId::Professional => Layout::Minimal,
            // declared but unmapped — default layout
            TemplateId::Executive | TemplateId::Academic => Layout::Modern,
        }
    }

    /// True for ids that alias another template's layout rather than carrying
    /// their own.
    pub fn is_placeholder(&self) -> bool {
        !matches!(self, TemplateId::Modern | TemplateId::Minimal)
    }

    /// Parses a template id, falling back to the default for unknown input.
    pub fn parse_or_default(raw: &str) -> TemplateId {
        match raw.trim().to_lowercase().as_str() {
            "modern" => TemplateId::Modern,
            "minimal" => TemplateId::Minimal,
            "creative" => TemplateId::Creative,
            "professional" => TemplateId::Professional,
            "executive" => TemplateId::Executive,
            "academic" => TemplateId::Academic,
            _ => TemplateId::default(),
        }
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders the snapshot with the selected template into a complete HTML
/// document. Pure: never mutates the snapshot, tolerates every optional
/// field being absent by omitting the corresponding section.
pub fn render(data: &ResumeData, template: TemplateId) -> String {
    let body = match template.layout() {
        Layout::Modern => modern::render_body(data),
        Layout::Minimal => minimal::render_body(data),
    };
    let title = if data.personal_info.full_name.trim().is_empty() {
        "Resume".to_string()
    } else {
        escape_html(&data.personal_info.full_name)
    };
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{css}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = title,
        css = BASE_CSS,
    )
}

/// Shared page styles; each layout adds its own classes in the body markup.
const BASE_CSS: &str = "\
body{margin:0;background:#fff;color:#1a202c;}\
.resume{max-width:56rem;margin:0 auto;padding:2rem;}\
.resume--minimal{font-family:Georgia,serif;}\
.resume--modern{font-family:Arial,Helvetica,sans-serif;}\
.resume--modern .banner{background:#2b6cb0;color:#fff;padding:2rem;margin:-2rem -2rem 1.5rem;}\
section{margin-bottom:1.5rem;}\
h1{margin:0 0 .5rem;}\
h2{border-bottom:1px solid #cbd5e0;padding-bottom:.25rem;text-transform:uppercase;\
letter-spacing:.05em;font-size:1rem;}\
ul{margin:.25rem 0;}\
.meta{color:#4a5568;font-size:.9rem;}";

/// Minimal HTML escaping for user-entered text.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `start - end`, with `Present` when the entry is marked current.
pub(crate) fn date_range(start: &str, end: &str, current: bool) -> String {
    let end = if current { "Present" } else { end };
    format!("{} - {}", escape_html(start), escape_html(end))
}

/// Groups skill names by category, categories in first-appearance order.
pub(crate) fn skills_by_category(data: &ResumeData) -> Vec<(String, Vec<String>)> {
    let mut grouped: Vec<(String, Vec<String>)> = Vec::new();
    for skill in &data.skills {
        match grouped.iter_mut().find(|(category, _)| *category == skill.category) {
            Some((_, names)) => names.push(skill.name.clone()),
            None => grouped.push((skill.category.clone(), vec![skill.name.clone()])),
        }
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Experience;
    use crate::store::entities::ExperienceDraft;
    use crate::store::ResumeStore;

    fn acme_snapshot(current: bool) -> ResumeData {
        let mut store = ResumeStore::new();
        store.add::<Experience>(ExperienceDraft {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: "2020-01".to_string(),
            end_date: "2022-01".to_string(),
            current,
            description: vec!["Built X".to_string()],
            location: None,
        });
        store.snapshot()
    }

    #[test]
    fn test_unknown_template_falls_back_to_modern() {
        assert_eq!(TemplateId::parse_or_default("brutalist"), TemplateId::Modern);
        assert_eq!(TemplateId::parse_or_default(""), TemplateId::Modern);
        assert_eq!(TemplateId::parse_or_default(" MINIMAL "), TemplateId::Minimal);
    }

    #[test]
    fn test_placeholder_templates_alias_existing_layouts() {
        assert_eq!(TemplateId::Creative.layout(), Layout::Modern);
        assert_eq!(TemplateId::Professional.layout(), Layout::Minimal);
        assert_eq!(TemplateId::Executive.layout(), Layout::Modern);
        assert!(TemplateId::Creative.is_placeholder());
        assert!(!TemplateId::Minimal.is_placeholder());
    }

    #[test]
    fn test_alias_renders_identically_to_target() {
        let data = acme_snapshot(false);
        assert_eq!(
            render(&data, TemplateId::Professional),
            render(&data, TemplateId::Minimal)
        );
    }

    #[test]
    fn test_empty_snapshot_renders_header_only() {
        let data = ResumeData::empty();
        for template in TemplateId::ALL {
            let html = render(&data, template);
            assert!(html.contains("Your Name"), "{template}: missing placeholder");
            assert!(!html.contains("<section"), "{template}: unexpected section");
        }
    }

    #[test]
    fn test_minimal_renders_experience_without_present_marker() {
        let html = render(&acme_snapshot(false), TemplateId::Minimal);
        assert!(html.contains("Acme"));
        assert!(html.contains("Built X"));
        assert!(!html.contains("Present"));
        assert!(html.contains("2020-01 - 2022-01"));
    }

    #[test]
    fn test_current_role_renders_present() {
        let html = render(&acme_snapshot(true), TemplateId::Minimal);
        assert!(html.contains("2020-01 - Present"));
        assert!(!html.contains("2022-01"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut data = ResumeData::empty();
        data.personal_info.full_name = "<script>alert(1)</script>".to_string();
        let html = render(&data, TemplateId::Modern);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_does_not_mutate_snapshot() {
        let data = acme_snapshot(false);
        let json_before = serde_json::to_string(&data).unwrap();
        let _ = render(&data, TemplateId::Modern);
        assert_eq!(serde_json::to_string(&data).unwrap(), json_before);
    }
}
