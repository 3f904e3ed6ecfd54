//! Modern layout — sans-serif with a colored banner header; the default and
//! most complete layout, covering the supplementary collections too.

use crate::models::resume::{non_blank, ResumeData};
use crate::render::{date_range, escape_html, skills_by_category};

pub(crate) fn render_body(data: &ResumeData) -> String {
    let mut out = String::from("<div class=\"resume resume--modern\">\n");

    render_banner(&mut out, data);
    render_summary(&mut out, data);
    render_experience(&mut out, data);
    render_education(&mut out, data);
    render_skills(&mut out, data);
    render_technologies(&mut out, data);
    render_projects(&mut out, data);
    render_certifications(&mut out, data);
    render_languages(&mut out, data);

    out.push_str("</div>");
    out
}

fn render_banner(out: &mut String, data: &ResumeData) {
    let info = &data.personal_info;
    let name = if info.full_name.trim().is_empty() {
        "Your Name".to_string()
    } else {
        escape_html(&info.full_name)
    };

    out.push_str("<div class=\"banner\">\n");
    out.push_str(&format!("<h1>{name}</h1>\n"));

    let mut contact: Vec<String> = [&info.email, &info.phone, &info.location]
        .into_iter()
        .filter(|value| !value.trim().is_empty())
        .map(|value| escape_html(value))
        .collect();
    contact.extend(
        [&info.linked_in, &info.portfolio, &info.github, &info.website]
            .into_iter()
            .filter_map(non_blank)
            .map(escape_html),
    );
    if !contact.is_empty() {
        out.push_str(&format!("<div>{}</div>\n", contact.join(" &middot; ")));
    }
    out.push_str("</div>\n");
}

fn render_summary(out: &mut String, data: &ResumeData) {
    let content = data.professional_summary.content.trim();
    if content.is_empty() {
        return;
    }
    out.push_str(&format!(
        "<section><h2>Professional Summary</h2>\n<p>{}</p></section>\n",
        escape_html(content)
    ));
}

fn render_experience(out: &mut String, data: &ResumeData) {
    if data.experience.is_empty() {
        return;
    }
    out.push_str("<section><h2>Professional Experience</h2>\n");
    for entry in &data.experience {
        out.push_str(&format!(
            "<div><h3>{}</h3>\n<p>{}",
            escape_html(&entry.position),
            escape_html(&entry.company),
        ));
        if let Some(location) = non_blank(&entry.location) {
            out.push_str(&format!(" &middot; {}", escape_html(location)));
        }
        out.push_str(&format!(
            " <span class=\"meta\">{}</span></p>\n",
            date_range(&entry.start_date, &entry.end_date, entry.current),
        ));
        let bullets: Vec<&String> = entry
            .description
            .iter()
            .filter(|line| !line.trim().is_empty())
            .collect();
        if !bullets.is_empty() {
            out.push_str("<ul>\n");
            for line in bullets {
                out.push_str(&format!("<li>{}</li>\n", escape_html(line)));
            }
            out.push_str("</ul>\n");
        }
        out.push_str("</div>\n");
    }
    out.push_str("</section>\n");
}

fn render_education(out: &mut String, data: &ResumeData) {
    if data.education.is_empty() {
        return;
    }
    out.push_str("<section><h2>Education</h2>\n");
    for entry in &data.education {
        out.push_str(&format!(
            "<div><h3>{} in {}</h3>\n<p>{} <span class=\"meta\">{} - {}</span></p>\n",
            escape_html(&entry.degree),
            escape_html(&entry.field),
            escape_html(&entry.institution),
            escape_html(&entry.start_date),
            escape_html(&entry.end_date),
        ));
        if let Some(gpa) = non_blank(&entry.gpa) {
            out.push_str(&format!("<p class=\"meta\">GPA: {}</p>\n", escape_html(gpa)));
        }
        out.push_str("</div>\n");
    }
    out.push_str("</section>\n");
}

fn render_skills(out: &mut String, data: &ResumeData) {
    let grouped = skills_by_category(data);
    if grouped.is_empty() {
        return;
    }
    out.push_str("<section><h2>Skills</h2>\n");
    for (category, names) in grouped {
        let names: Vec<String> = names.iter().map(|name| escape_html(name)).collect();
        out.push_str(&format!(
            "<p><strong>{}:</strong> {}</p>\n",
            escape_html(&category),
            names.join(", ")
        ));
    }
    out.push_str("</section>\n");
}

fn render_technologies(out: &mut String, data: &ResumeData) {
    if data.technologies.is_empty() {
        return;
    }
    out.push_str("<section><h2>Technologies</h2>\n<ul>\n");
    for tech in &data.technologies {
        out.push_str(&format!(
            "<li>{} <span class=\"meta\">({}, {} yrs)</span></li>\n",
            escape_html(&tech.name),
            escape_html(&format!("{:?}", tech.proficiency).to_lowercase()),
            tech.years_of_experience,
        ));
    }
    out.push_str("</ul>\n</section>\n");
}

fn render_projects(out: &mut String, data: &ResumeData) {
    if data.projects.is_empty() {
        return;
    }
    out.push_str("<section><h2>Projects</h2>\n");
    for project in &data.projects {
        out.push_str(&format!(
            "<div><h3>{} <span class=\"meta\">{} - {}</span></h3>\n",
            escape_html(&project.name),
            escape_html(&project.start_date),
            escape_html(&project.end_date),
        ));
        if !project.description.trim().is_empty() {
            out.push_str(&format!("<p>{}</p>\n", escape_html(&project.description)));
        }
        let highlights: Vec<&String> = project
            .highlights
            .iter()
            .filter(|line| !line.trim().is_empty())
            .collect();
        if !highlights.is_empty() {
            out.push_str("<ul>\n");
            for line in highlights {
                out.push_str(&format!("<li>{}</li>\n", escape_html(line)));
            }
            out.push_str("</ul>\n");
        }
        if !project.technologies.is_empty() {
            let technologies: Vec<String> =
                project.technologies.iter().map(|t| escape_html(t)).collect();
            out.push_str(&format!(
                "<p class=\"meta\"><strong>Technologies:</strong> {}</p>\n",
                technologies.join(", ")
            ));
        }
        if let Some(url) = non_blank(&project.url) {
            out.push_str(&format!("<p class=\"meta\">{}</p>\n", escape_html(url)));
        }
        out.push_str("</div>\n");
    }
    out.push_str("</section>\n");
}

fn render_certifications(out: &mut String, data: &ResumeData) {
    if data.certifications.is_empty() {
        return;
    }
    out.push_str("<section><h2>Certifications</h2>\n<ul>\n");
    for cert in &data.certifications {
        out.push_str(&format!(
            "<li>{} &mdash; {} <span class=\"meta\">({})</span></li>\n",
            escape_html(&cert.name),
            escape_html(&cert.issuer),
            escape_html(&cert.date_obtained),
        ));
    }
    out.push_str("</ul>\n</section>\n");
}

fn render_languages(out: &mut String, data: &ResumeData) {
    if data.languages.is_empty() {
        return;
    }
    out.push_str("<section><h2>Languages</h2>\n<ul>\n");
    for language in &data.languages {
        out.push_str(&format!(
            "<li>{} <span class=\"meta\">({})</span></li>\n",
            escape_html(&language.name),
            escape_html(&format!("{:?}", language.proficiency).to_lowercase()),
        ));
    }
    out.push_str("</ul>\n</section>\n");
}
